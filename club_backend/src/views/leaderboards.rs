use std::collections::HashMap;

use club_entities::prelude::*;
use itertools::Itertools;
use sea_orm::{prelude::Uuid, ConnectionTrait};
use serde::{Serialize, Deserialize};

use super::base::DateWindow;


pub const DEFAULT_LEADERBOARD_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: Uuid,
    pub display_name: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboards {
    pub team_id: Uuid,
    pub goals: Vec<LeaderboardEntry>,
    pub assists: Vec<LeaderboardEntry>,
    pub man_of_the_match: Vec<LeaderboardEntry>,
}

/// Counts occurrences per user and keeps the `size` most frequent, highest first.
///
/// Users with equal counts keep the order in which they first appear in `user_ids`. The event
/// rows are read in insertion order, so ties go to whoever was entered first.
pub fn rank_users(user_ids: impl IntoIterator<Item=Uuid>, names: &HashMap<Uuid, String>, size: usize) -> Vec<LeaderboardEntry> {
    let mut counts: Vec<(Uuid, u32)> = vec![];
    let mut index: HashMap<Uuid, usize> = HashMap::new();

    for user_id in user_ids {
        match index.get(&user_id) {
            Some(i) => counts[*i].1 += 1,
            None => {
                index.insert(user_id, counts.len());
                counts.push((user_id, 1));
            }
        }
    }

    // sort_by is stable
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts.into_iter().take(size).map(|(user_id, count)| LeaderboardEntry {
        user_id,
        display_name: names.get(&user_id).cloned().unwrap_or_default(),
        count,
    }).collect()
}

impl Leaderboards {
    /// Events of `team_id`'s players in the team's matches within the window.
    pub async fn load<C>(db: &C, team_id: Uuid, window: DateWindow, size: usize) -> Result<Self, anyhow::Error> where C: ConnectionTrait {
        let match_ids = window.matches_of_team(db, team_id).await?.into_iter().map(|m| m.uuid).collect_vec();

        let goals = Goal::get_all_for_matches(db, match_ids.clone()).await?
            .into_iter().filter(|g| g.team_id == team_id).map(|g| g.user_id).collect_vec();
        let assists = Assist::get_all_for_matches(db, match_ids.clone()).await?
            .into_iter().filter(|a| a.team_id == team_id).map(|a| a.user_id).collect_vec();
        let moms = ManOfTheMatch::get_all_for_matches(db, match_ids).await?
            .into_iter().filter(|m| m.team_id == team_id).map(|m| m.user_id).collect_vec();

        let names = Profile::get_display_names(
            db,
            goals.iter().chain(assists.iter()).chain(moms.iter()).copied().unique().collect()
        ).await?;

        Ok(Leaderboards {
            team_id,
            goals: rank_users(goals, &names, size),
            assists: rank_users(assists, &names, size),
            man_of_the_match: rank_users(moms, &names, size),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ranking_is_descending_and_truncated() {
        let names = HashMap::from([(Uuid::from_u128(1), "Ann".to_string())]);
        let ranking = rank_users(
            [2, 1, 1, 3, 3, 3, 4].into_iter().map(Uuid::from_u128),
            &names,
            3
        );

        assert_eq!(ranking.iter().map(|e| (e.user_id.as_u128(), e.count)).collect_vec(), vec![(3, 3), (1, 2), (2, 1)]);
        assert_eq!(ranking[1].display_name, "Ann");
        assert_eq!(ranking[0].display_name, "");
    }

    #[test]
    fn test_ties_keep_first_appearance_order() {
        let ranking = rank_users(
            [5, 7, 6, 6, 7, 5].into_iter().map(Uuid::from_u128),
            &HashMap::new(),
            10
        );

        assert_eq!(ranking.iter().map(|e| e.user_id.as_u128()).collect_vec(), vec![5, 7, 6]);
    }
}
