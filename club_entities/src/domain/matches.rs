use std::{error::Error, fmt::Display};

use async_trait::async_trait;
use chrono::NaiveDateTime;
use itertools::Itertools;
use sea_orm::{prelude::*, ActiveValue, Condition, QueryOrder};
use serde::{Serialize, Deserialize};

use crate::schema;
use crate::utilities::{existing_ids, ChangeSet};

use super::ClubEntity;


/// Who the owning team plays against. Exactly one of these holds for every match.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, Hash)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum Opponent {
    Registered(Uuid),
    Guest(Uuid),
    Tbd,
}

impl Opponent {
    pub fn registered_team(&self) -> Option<Uuid> {
        match self {
            Opponent::Registered(team_id) => Some(*team_id),
            _ => None
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MatchSide {
    Home,
    Away,
}

impl MatchSide {
    pub fn other(&self) -> MatchSide {
        match self {
            MatchSide::Home => MatchSide::Away,
            MatchSide::Away => MatchSide::Home,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, Default)]
pub struct MatchScore {
    pub home: u32,
    pub away: u32,
}

impl MatchScore {
    pub fn for_side(&self, side: MatchSide) -> u32 {
        match side {
            MatchSide::Home => self.home,
            MatchSide::Away => self.away,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct Match {
    pub uuid: Uuid,
    /// The team that created the match.
    pub team_id: Uuid,
    pub match_date: NaiveDateTime,
    pub registration_deadline: NaiveDateTime,
    pub venue: String,
    pub stadium_id: Option<Uuid>,
    /// Whether the owning team plays at home.
    pub is_home: bool,
    pub opponent: Opponent,
    /// Present exactly when the match is finished.
    pub score: Option<MatchScore>,
    pub competition_type: String,
    pub game_type: String,
    pub description: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum MatchParseError {
    DbErr(DbErr),
    InconsistentOpponent { match_id: Uuid },
    InconsistentScore { match_id: Uuid },
}

impl Display for MatchParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:?}", self))?;
        Ok(())
    }
}

impl Error for MatchParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MatchParseError::DbErr(e) => Some(e),
            _ => None
        }
    }
}

impl From<DbErr> for MatchParseError {
    fn from(value: DbErr) -> Self {
        MatchParseError::DbErr(value)
    }
}

impl Match {
    pub fn is_finished(&self) -> bool {
        self.score.is_some()
    }

    pub fn home_team_id(&self) -> Option<Uuid> {
        if self.is_home {
            Some(self.team_id)
        }
        else {
            self.opponent.registered_team()
        }
    }

    pub fn away_team_id(&self) -> Option<Uuid> {
        if self.is_home {
            self.opponent.registered_team()
        }
        else {
            Some(self.team_id)
        }
    }

    /// The side a registered team played on, if it took part in the match.
    pub fn side_of(&self, team_id: Uuid) -> Option<MatchSide> {
        if self.home_team_id() == Some(team_id) {
            Some(MatchSide::Home)
        }
        else if self.away_team_id() == Some(team_id) {
            Some(MatchSide::Away)
        }
        else {
            None
        }
    }

    /// `(own, opponent)` goals from the point of view of `team_id`.
    /// `None` while unfinished or when the team did not take part.
    pub fn score_for(&self, team_id: Uuid) -> Option<(u32, u32)> {
        let side = self.side_of(team_id)?;
        let score = self.score?;
        Some((score.for_side(side), score.for_side(side.other())))
    }

    pub(crate) fn from_model(model: schema::matches::Model) -> Result<Self, MatchParseError> {
        let opponent = match (model.opponent_team_id, model.opponent_guest_team_id, model.is_tbd) {
            (Some(team_id), None, false) => Opponent::Registered(team_id),
            (None, Some(club_id), false) => Opponent::Guest(club_id),
            (None, None, true) => Opponent::Tbd,
            _ => return Err(MatchParseError::InconsistentOpponent { match_id: model.id })
        };

        let score = match (model.is_finished, model.home_score, model.away_score) {
            (true, Some(home), Some(away)) if home >= 0 && away >= 0 => Some(MatchScore { home: home as u32, away: away as u32 }),
            (false, None, None) => None,
            _ => return Err(MatchParseError::InconsistentScore { match_id: model.id })
        };

        Ok(Match {
            uuid: model.id,
            team_id: model.team_id,
            match_date: model.match_date,
            registration_deadline: model.registration_deadline,
            venue: model.venue,
            stadium_id: model.stadium_id,
            is_home: model.is_home,
            opponent,
            score,
            competition_type: model.competition_type,
            game_type: model.game_type,
            description: model.description,
        })
    }

    fn into_active_model(&self) -> schema::matches::ActiveModel {
        let (opponent_team_id, opponent_guest_team_id, is_tbd) = match self.opponent {
            Opponent::Registered(team_id) => (Some(team_id), None, false),
            Opponent::Guest(club_id) => (None, Some(club_id), false),
            Opponent::Tbd => (None, None, true),
        };

        schema::matches::ActiveModel {
            id: ActiveValue::Set(self.uuid),
            team_id: ActiveValue::Set(self.team_id),
            match_date: ActiveValue::Set(self.match_date),
            registration_deadline: ActiveValue::Set(self.registration_deadline),
            venue: ActiveValue::Set(self.venue.clone()),
            stadium_id: ActiveValue::Set(self.stadium_id),
            is_home: ActiveValue::Set(self.is_home),
            opponent_team_id: ActiveValue::Set(opponent_team_id),
            opponent_guest_team_id: ActiveValue::Set(opponent_guest_team_id),
            is_tbd: ActiveValue::Set(is_tbd),
            is_finished: ActiveValue::Set(self.score.is_some()),
            home_score: ActiveValue::Set(self.score.map(|s| s.home as i32)),
            away_score: ActiveValue::Set(self.score.map(|s| s.away as i32)),
            competition_type: ActiveValue::Set(self.competition_type.clone()),
            game_type: ActiveValue::Set(self.game_type.clone()),
            description: ActiveValue::Set(self.description.clone()),
        }
    }

    pub async fn get<C>(db: &C, uuid: Uuid) -> Result<Option<Match>, MatchParseError> where C: ConnectionTrait {
        let model = schema::matches::Entity::find_by_id(uuid).one(db).await?;
        model.map(Self::from_model).transpose()
    }

    /// Matches the team took part in, as owner or as registered opponent, ordered by date.
    /// Bounds of the window are inclusive.
    pub async fn get_all_for_team<C>(db: &C, team_id: Uuid, start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Result<Vec<Match>, MatchParseError> where C: ConnectionTrait {
        let mut query = schema::matches::Entity::find()
            .filter(
                Condition::any()
                    .add(schema::matches::Column::TeamId.eq(team_id))
                    .add(schema::matches::Column::OpponentTeamId.eq(team_id))
            );

        if let Some(start) = start {
            query = query.filter(schema::matches::Column::MatchDate.gte(start));
        }
        if let Some(end) = end {
            query = query.filter(schema::matches::Column::MatchDate.lte(end));
        }

        let rows = query
            .order_by_asc(schema::matches::Column::MatchDate)
            .order_by_asc(schema::matches::Column::Id)
            .all(db).await?;

        rows.into_iter().map(Self::from_model).collect()
    }
}

#[async_trait]
impl ClubEntity for Match {
    async fn save_many<C>(db: &C, guarantee_insert: bool, entities: &Vec<&Self>) -> Result<(), anyhow::Error> where C: ConnectionTrait {
        let existing = if guarantee_insert {
            Default::default()
        } else {
            existing_ids::<schema::matches::Entity, _>(db, schema::matches::Column::Id, entities.iter().map(|m| m.uuid).collect_vec()).await?
        };

        let mut changes = ChangeSet::new();
        for m in entities {
            changes.push(m.into_active_model(), existing.contains(&m.uuid));
        }
        changes.exec(db).await?;
        Ok(())
    }
}
