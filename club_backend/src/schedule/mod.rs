//! Expansion of a recurring schedule into draft matches.
//!
//! Generation is pure: nothing is persisted until the drafts are confirmed through
//! [`crate::actions::ConfirmScheduleAction`].

mod request;
mod generator;

pub use self::request::{ScheduleRequest, TimeSlot, ScheduleError};
pub use self::generator::{generate_schedule, DraftMatch, ScheduleOptions, DEFAULT_REGISTRATION_DEADLINE_HOURS};
