use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use sea_orm::prelude::Uuid;
use serde::{Serialize, Deserialize};
use thiserror::Error;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub team_id: Uuid,
    pub venue: String,
    #[serde(default)]
    pub stadium_id: Option<Uuid>,
    #[serde(default = "default_is_home")]
    pub is_home: bool,
    pub competition_type: String,
    pub game_type: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days_of_week: Vec<Weekday>,
    pub time_slots: Vec<TimeSlot>,
}

fn default_is_home() -> bool {
    true
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Start date {start} is after end date {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    #[error("No days of the week selected")]
    NoDaysOfWeek,
    #[error("No time slots given")]
    NoTimeSlots,
    #[error("Time slot {index} does not end after it starts ({start_time} - {end_time})")]
    InvalidTimeSlot { index: usize, start_time: NaiveTime, end_time: NaiveTime },
    #[error("A registration deadline {hours}h before {match_date} is out of range")]
    DeadlineOutOfRange { match_date: NaiveDateTime, hours: i64 },
}

impl ScheduleRequest {
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.start_date > self.end_date {
            return Err(ScheduleError::InvalidDateRange { start: self.start_date, end: self.end_date });
        }
        if self.days_of_week.is_empty() {
            return Err(ScheduleError::NoDaysOfWeek);
        }
        if self.time_slots.is_empty() {
            return Err(ScheduleError::NoTimeSlots);
        }
        if let Some((index, slot)) = self.time_slots.iter().enumerate().find(|(_, slot)| slot.start_time >= slot.end_time) {
            return Err(ScheduleError::InvalidTimeSlot { index, start_time: slot.start_time, end_time: slot.end_time });
        }
        Ok(())
    }
}
