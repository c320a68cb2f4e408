use club_entities::prelude::*;
use sea_orm::{prelude::Uuid, ConnectionTrait};
use serde::{Serialize, Deserialize};

use crate::actions::ActionError;


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceLine {
    pub user_id: Uuid,
    pub display_name: String,
    pub team_id: Uuid,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub match_id: Uuid,
    pub is_finished: bool,
    pub attending: u32,
    pub absent: u32,
    pub maybe: u32,
    pub lines: Vec<AttendanceLine>,
}

impl AttendanceSummary {
    pub async fn load<C>(db: &C, match_id: Uuid) -> Result<Self, anyhow::Error> where C: ConnectionTrait {
        let m = Match::get(db, match_id).await?.ok_or(ActionError::not_found("Match", match_id))?;
        let rows = Attendance::get_all_for_match(db, match_id).await?;
        let names = Profile::get_display_names(db, rows.iter().map(|a| a.user_id).collect()).await?;

        let mut summary = AttendanceSummary {
            match_id,
            is_finished: m.is_finished(),
            attending: 0,
            absent: 0,
            maybe: 0,
            lines: Vec::with_capacity(rows.len()),
        };

        for row in rows {
            match row.status {
                AttendanceStatus::Attending => summary.attending += 1,
                AttendanceStatus::Absent => summary.absent += 1,
                AttendanceStatus::Maybe => summary.maybe += 1,
            }
            summary.lines.push(AttendanceLine {
                display_name: names.get(&row.user_id).cloned().unwrap_or_default(),
                user_id: row.user_id,
                team_id: row.team_id,
                status: row.status,
            });
        }

        Ok(summary)
    }
}
