pub mod values;
pub mod entity;
pub mod profile;
pub mod team;
pub mod team_member;
pub mod stadium;
pub mod guest_club;
pub mod matches;
pub mod attendance;
pub mod match_event;

pub use entity::ClubEntity;
pub use values::{MemberRole, MemberStatus, AttendanceStatus, GoalType, UnknownValueError};
