mod base;
mod season_record;
mod head_to_head;
mod leaderboards;
mod attendance_rates;
mod match_list;
mod match_detail;
mod attendance_summary;
mod player_summary;
mod guest_club_list;
mod roster;

pub use self::base::{DateWindow, MatchOutcome};
pub use self::season_record::SeasonRecord;
pub use self::head_to_head::HeadToHead;
pub use self::leaderboards::{Leaderboards, LeaderboardEntry, rank_users, DEFAULT_LEADERBOARD_SIZE};
pub use self::attendance_rates::{AttendanceRates, PlayerAttendance, attendance_rate, average_rate};
pub use self::match_list::{MatchListView, MatchListEntry};
pub use self::match_detail::{MatchDetailView, GoalLine, PlayerLine};
pub use self::attendance_summary::{AttendanceSummary, AttendanceLine};
pub use self::player_summary::PlayerSummary;
pub use self::guest_club_list::GuestClubListView;
pub use self::roster::{TeamView, RosterEntry};
