use std::collections::HashMap;

use club_entities::prelude::*;
use itertools::Itertools;
use sea_orm::{prelude::Uuid, ConnectionTrait};
use serde::{Serialize, Deserialize};

use super::base::DateWindow;


/// `attending / total` as a whole percentage, rounded half away from zero. 0 when there is
/// nothing to attend.
pub fn attendance_rate(attending: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * attending as f64 / total as f64).round() as u32
}

/// Mean of the individual rates, not the overall share of attended slots.
pub fn average_rate(rates: impl IntoIterator<Item=u32>) -> u32 {
    let (sum, count) = rates.into_iter().fold((0u64, 0u64), |(sum, count), r| (sum + r as u64, count + 1));
    if count == 0 {
        return 0;
    }
    (sum as f64 / count as f64).round() as u32
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAttendance {
    pub user_id: Uuid,
    pub display_name: String,
    pub attending: u32,
    pub rate: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRates {
    pub team_id: Uuid,
    /// Every match of the team in the window, finished or not.
    pub total_matches: u32,
    pub players: Vec<PlayerAttendance>,
    pub team_average: u32,
}

impl AttendanceRates {
    pub async fn load<C>(db: &C, team_id: Uuid, window: DateWindow) -> Result<Self, anyhow::Error> where C: ConnectionTrait {
        let match_ids = window.matches_of_team(db, team_id).await?.into_iter().map(|m| m.uuid).collect_vec();
        let roster = TeamMember::get_roster(db, team_id).await?;
        let attendances = Attendance::get_all_for_matches(db, match_ids.clone()).await?;

        let mut attending: HashMap<Uuid, u32> = HashMap::new();
        // Only rows seeded for this team count, so a user on both rosters is not
        // credited for playing on the other side.
        for a in attendances.iter().filter(|a| a.team_id == team_id && a.status == AttendanceStatus::Attending) {
            *attending.entry(a.user_id).or_default() += 1;
        }

        let names = Profile::get_display_names(db, roster.iter().map(|m| m.user_id).collect()).await?;
        let total_matches = match_ids.len() as u32;

        let players = roster.into_iter().map(|member| {
            let count = attending.get(&member.user_id).copied().unwrap_or(0);
            PlayerAttendance {
                user_id: member.user_id,
                display_name: names.get(&member.user_id).cloned().unwrap_or_default(),
                attending: count,
                rate: attendance_rate(count, total_matches),
            }
        }).collect_vec();

        Ok(AttendanceRates {
            team_id,
            total_matches,
            team_average: average_rate(players.iter().map(|p| p.rate)),
            players,
        })
    }
}
