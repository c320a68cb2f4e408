pub use crate::domain::profile::Profile;
pub use crate::domain::team::Team;
pub use crate::domain::team_member::TeamMember;
pub use crate::domain::stadium::Stadium;
pub use crate::domain::guest_club::{GuestClub, guest_club_name_key};
pub use crate::domain::matches::{Match, MatchScore, MatchSide, Opponent, MatchParseError};
pub use crate::domain::attendance::Attendance;
pub use crate::domain::match_event::{Goal, Assist, ManOfTheMatch};
pub use crate::domain::{ClubEntity, MemberRole, MemberStatus, AttendanceStatus, GoalType};
pub use crate::group::{Entity, EntityGroup};
