use serde::{Serialize, Deserialize};
use sea_orm::ConnectionTrait;

use crate::domain::ClubEntity;
use crate::prelude::*;


#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(tag = "type")]
pub enum Entity {
    Profile(Profile),
    Team(Team),
    TeamMember(TeamMember),
    Stadium(Stadium),
    GuestClub(GuestClub),
    Match(Match),
    Attendance(Attendance),
    Goal(Goal),
    Assist(Assist),
    ManOfTheMatch(ManOfTheMatch),
}

/// A batch of new or changed records that are written together.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct EntityGroup {
    pub profiles: Vec<Profile>,
    pub teams: Vec<Team>,
    pub team_members: Vec<TeamMember>,
    pub stadiums: Vec<Stadium>,
    pub guest_clubs: Vec<GuestClub>,
    pub matches: Vec<Match>,
    pub attendances: Vec<Attendance>,
    pub goals: Vec<Goal>,
    pub assists: Vec<Assist>,
    pub man_of_the_match: Vec<ManOfTheMatch>,
}

impl EntityGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with_entities(entities: Vec<Entity>) -> Self {
        let mut group = Self::new();
        entities.into_iter().for_each(|e| group.add(e));
        group
    }

    pub fn add(&mut self, e: Entity) {
        match e {
            Entity::Profile(e) => self.profiles.push(e),
            Entity::Team(e) => self.teams.push(e),
            Entity::TeamMember(e) => self.team_members.push(e),
            Entity::Stadium(e) => self.stadiums.push(e),
            Entity::GuestClub(e) => self.guest_clubs.push(e),
            Entity::Match(e) => self.matches.push(e),
            Entity::Attendance(e) => self.attendances.push(e),
            Entity::Goal(e) => self.goals.push(e),
            Entity::Assist(e) => self.assists.push(e),
            Entity::ManOfTheMatch(e) => self.man_of_the_match.push(e),
        }
    }

    pub fn merge(&mut self, other: EntityGroup) {
        self.profiles.extend(other.profiles);
        self.teams.extend(other.teams);
        self.team_members.extend(other.team_members);
        self.stadiums.extend(other.stadiums);
        self.guest_clubs.extend(other.guest_clubs);
        self.matches.extend(other.matches);
        self.attendances.extend(other.attendances);
        self.goals.extend(other.goals);
        self.assists.extend(other.assists);
        self.man_of_the_match.extend(other.man_of_the_match);
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
            + self.teams.len()
            + self.team_members.len()
            + self.stadiums.len()
            + self.guest_clubs.len()
            + self.matches.len()
            + self.attendances.len()
            + self.goals.len()
            + self.assists.len()
            + self.man_of_the_match.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub async fn save_all<C>(&self, db: &C) -> Result<(), anyhow::Error> where C: ConnectionTrait {
        self.save_all_with_options(db, false).await
    }

    /// Writes the group in foreign key order. Callers wanting all-or-nothing
    /// semantics pass a transaction.
    pub async fn save_all_with_options<C>(&self, db: &C, guarantee_insert: bool) -> Result<(), anyhow::Error> where C: ConnectionTrait {
        Profile::save_many(db, guarantee_insert, &self.profiles.iter().collect()).await?;
        Stadium::save_many(db, guarantee_insert, &self.stadiums.iter().collect()).await?;
        Team::save_many(db, guarantee_insert, &self.teams.iter().collect()).await?;
        TeamMember::save_many(db, guarantee_insert, &self.team_members.iter().collect()).await?;
        GuestClub::save_many(db, guarantee_insert, &self.guest_clubs.iter().collect()).await?;
        Match::save_many(db, guarantee_insert, &self.matches.iter().collect()).await?;
        Attendance::save_many(db, guarantee_insert, &self.attendances.iter().collect()).await?;
        Goal::save_many(db, guarantee_insert, &self.goals.iter().collect()).await?;
        Assist::save_many(db, guarantee_insert, &self.assists.iter().collect()).await?;
        ManOfTheMatch::save_many(db, guarantee_insert, &self.man_of_the_match.iter().collect()).await?;

        tracing::debug!(
            "Saved {} matches, {} attendance rows and {} other records",
            self.matches.len(),
            self.attendances.len(),
            self.len() - self.matches.len() - self.attendances.len()
        );
        Ok(())
    }
}
