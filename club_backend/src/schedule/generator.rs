use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDateTime, Weekday};
use club_entities::prelude::*;
use sea_orm::prelude::Uuid;
use serde::{Serialize, Deserialize};
use tracing::debug;

use super::request::{ScheduleError, ScheduleRequest};


pub const DEFAULT_REGISTRATION_DEADLINE_HOURS: i64 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOptions {
    pub registration_deadline_hours: i64,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        ScheduleOptions { registration_deadline_hours: DEFAULT_REGISTRATION_DEADLINE_HOURS }
    }
}

impl ScheduleOptions {
    /// The moment registration closes for a match starting at `match_date`.
    pub fn registration_deadline(&self, match_date: NaiveDateTime) -> Result<NaiveDateTime, ScheduleError> {
        Duration::try_hours(self.registration_deadline_hours)
            .and_then(|offset| match_date.checked_sub_signed(offset))
            .ok_or(ScheduleError::DeadlineOutOfRange { match_date, hours: self.registration_deadline_hours })
    }
}

/// A match that has been generated but not stored yet. Its opponent is always TBD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftMatch {
    pub team_id: Uuid,
    pub match_date: NaiveDateTime,
    pub registration_deadline: NaiveDateTime,
    pub venue: String,
    pub stadium_id: Option<Uuid>,
    pub is_home: bool,
    pub competition_type: String,
    pub game_type: String,
    pub description: Option<String>,
}

impl DraftMatch {
    pub fn into_match(self, uuid: Uuid) -> Match {
        Match {
            uuid,
            team_id: self.team_id,
            match_date: self.match_date,
            registration_deadline: self.registration_deadline,
            venue: self.venue,
            stadium_id: self.stadium_id,
            is_home: self.is_home,
            opponent: Opponent::Tbd,
            score: None,
            competition_type: self.competition_type,
            game_type: self.game_type,
            description: self.description,
        }
    }
}

/// Produces one draft per time slot for every date in `[start_date, end_date]` whose weekday
/// was requested, ordered by date and then by slot order.
///
/// A range without any requested weekday yields no drafts and is not an error.
pub fn generate_schedule(request: &ScheduleRequest, options: &ScheduleOptions) -> Result<Vec<DraftMatch>, ScheduleError> {
    request.validate()?;

    let days: HashSet<Weekday> = request.days_of_week.iter().copied().collect();

    let drafts: Vec<DraftMatch> = request.start_date.iter_days()
        .take_while(|date| *date <= request.end_date)
        .filter(|date| days.contains(&date.weekday()))
        .flat_map(|date| request.time_slots.iter().map(move |slot| date.and_time(slot.start_time)))
        .map(|match_date| -> Result<DraftMatch, ScheduleError> { Ok(DraftMatch {
            team_id: request.team_id,
            match_date,
            registration_deadline: options.registration_deadline(match_date)?,
            venue: request.venue.clone(),
            stadium_id: request.stadium_id,
            is_home: request.is_home,
            competition_type: request.competition_type.clone(),
            game_type: request.game_type.clone(),
            description: request.description.clone(),
        }) })
        .collect::<Result<_, _>>()?;

    debug!("Generated {} draft matches for team {} between {} and {}", drafts.len(), request.team_id, request.start_date, request.end_date);

    Ok(drafts)
}

#[cfg(test)]
mod test {
    use chrono::{NaiveDate, NaiveTime};
    use itertools::Itertools;

    use crate::schedule::TimeSlot;

    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request() -> ScheduleRequest {
        ScheduleRequest {
            team_id: Uuid::from_u128(1000),
            venue: "Riverside".into(),
            stadium_id: None,
            is_home: true,
            competition_type: "league".into(),
            game_type: "11v11".into(),
            description: None,
            start_date: date(2024, 3, 4),
            end_date: date(2024, 3, 17),
            days_of_week: vec![Weekday::Mon, Weekday::Wed],
            time_slots: vec![
                TimeSlot { start_time: time(18, 0), end_time: time(19, 30) },
                TimeSlot { start_time: time(20, 0), end_time: time(21, 30) },
            ],
        }
    }

    #[test]
    fn test_two_weeks_two_days_two_slots() {
        let drafts = generate_schedule(&request(), &Default::default()).unwrap();
        assert_eq!(drafts.len(), 8);
        assert_eq!(
            drafts.iter().map(|d| d.match_date).collect_vec(),
            vec![
                date(2024, 3, 4).and_time(time(18, 0)),
                date(2024, 3, 4).and_time(time(20, 0)),
                date(2024, 3, 6).and_time(time(18, 0)),
                date(2024, 3, 6).and_time(time(20, 0)),
                date(2024, 3, 11).and_time(time(18, 0)),
                date(2024, 3, 11).and_time(time(20, 0)),
                date(2024, 3, 13).and_time(time(18, 0)),
                date(2024, 3, 13).and_time(time(20, 0)),
            ]
        );
    }

    #[test]
    fn test_count_matches_weekdays_times_slots() {
        for (days, slots) in [(vec![Weekday::Sun], 1), (vec![Weekday::Mon, Weekday::Tue, Weekday::Sat], 3), (vec![Weekday::Fri], 2)] {
            let req = ScheduleRequest {
                days_of_week: days.clone(),
                time_slots: (0..slots).map(|i| TimeSlot { start_time: time(10 + i, 0), end_time: time(11 + i, 0) }).collect(),
                start_date: date(2024, 2, 20),
                end_date: date(2024, 4, 2),
                ..request()
            };
            let expected = req.start_date.iter_days()
                .take_while(|d| *d <= req.end_date)
                .filter(|d| days.contains(&d.weekday()))
                .count() * slots as usize;
            assert_eq!(generate_schedule(&req, &Default::default()).unwrap().len(), expected);
        }
    }

    #[test]
    fn test_deadline_is_48_hours_before() {
        let drafts = generate_schedule(&request(), &Default::default()).unwrap();
        for draft in drafts {
            assert_eq!(draft.match_date - draft.registration_deadline, Duration::hours(48));
        }
    }

    #[test]
    fn test_deadline_offset_is_configurable() {
        let drafts = generate_schedule(&request(), &ScheduleOptions { registration_deadline_hours: 24 }).unwrap();
        assert_eq!(drafts[0].registration_deadline, date(2024, 3, 3).and_time(time(18, 0)));
    }

    #[test]
    fn test_deadline_out_of_range_is_an_error() {
        let all_days = vec![Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri, Weekday::Sat, Weekday::Sun];
        let req = ScheduleRequest {
            start_date: NaiveDate::MIN,
            end_date: NaiveDate::MIN,
            days_of_week: all_days,
            ..request()
        };
        assert_eq!(
            generate_schedule(&req, &Default::default()),
            Err(ScheduleError::DeadlineOutOfRange { match_date: NaiveDate::MIN.and_time(time(18, 0)), hours: 48 })
        );

        let options = ScheduleOptions { registration_deadline_hours: i64::MAX };
        assert!(matches!(
            generate_schedule(&request(), &options),
            Err(ScheduleError::DeadlineOutOfRange { hours: i64::MAX, .. })
        ));
    }

    #[test]
    fn test_end_date_is_inclusive() {
        let req = ScheduleRequest {
            start_date: date(2024, 3, 6),
            end_date: date(2024, 3, 6),
            ..request()
        };
        assert_eq!(generate_schedule(&req, &Default::default()).unwrap().len(), 2);
    }

    #[test]
    fn test_range_without_requested_weekday_is_empty() {
        let req = ScheduleRequest {
            start_date: date(2024, 3, 7),
            end_date: date(2024, 3, 10),
            ..request()
        };
        assert_eq!(generate_schedule(&req, &Default::default()), Ok(vec![]));
    }

    #[test]
    fn test_overlapping_slots_produce_separate_matches() {
        let req = ScheduleRequest {
            start_date: date(2024, 3, 4),
            end_date: date(2024, 3, 4),
            time_slots: vec![
                TimeSlot { start_time: time(18, 0), end_time: time(20, 0) },
                TimeSlot { start_time: time(19, 0), end_time: time(21, 0) },
            ],
            ..request()
        };
        assert_eq!(generate_schedule(&req, &Default::default()).unwrap().len(), 2);
    }

    #[test]
    fn test_drafts_are_tbd() {
        let drafts = generate_schedule(&request(), &Default::default()).unwrap();
        let m = drafts[0].clone().into_match(Uuid::from_u128(1));
        assert_eq!(m.opponent, Opponent::Tbd);
        assert_eq!(m.team_id, Uuid::from_u128(1000));
        assert!(!m.is_finished());
    }

    #[test]
    fn test_invalid_requests_are_rejected() {
        assert_eq!(
            generate_schedule(&ScheduleRequest { start_date: date(2024, 3, 18), ..request() }, &Default::default()),
            Err(ScheduleError::InvalidDateRange { start: date(2024, 3, 18), end: date(2024, 3, 17) })
        );
        assert_eq!(
            generate_schedule(&ScheduleRequest { days_of_week: vec![], ..request() }, &Default::default()),
            Err(ScheduleError::NoDaysOfWeek)
        );
        assert_eq!(
            generate_schedule(&ScheduleRequest { time_slots: vec![], ..request() }, &Default::default()),
            Err(ScheduleError::NoTimeSlots)
        );
        assert_eq!(
            generate_schedule(&ScheduleRequest { time_slots: vec![TimeSlot { start_time: time(20, 0), end_time: time(20, 0) }], ..request() }, &Default::default()),
            Err(ScheduleError::InvalidTimeSlot { index: 0, start_time: time(20, 0), end_time: time(20, 0) })
        );
    }
}
