use std::str::FromStr;

use serde::{Serialize, Deserialize};
use thiserror::Error;


#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown {kind} '{value}'")]
pub struct UnknownValueError {
    pub kind: &'static str,
    pub value: String
}

impl UnknownValueError {
    fn new(kind: &'static str, value: &str) -> Self {
        UnknownValueError { kind, value: value.to_string() }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    Owner,
    Admin,
    Member,
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Owner => "owner",
            MemberRole::Admin => "admin",
            MemberRole::Member => "member",
        }
    }

    pub fn is_staff(&self) -> bool {
        matches!(self, MemberRole::Owner | MemberRole::Admin)
    }
}

impl FromStr for MemberRole {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(MemberRole::Owner),
            // Older rows call the staff role "manager"
            "admin" | "manager" => Ok(MemberRole::Admin),
            "member" => Ok(MemberRole::Member),
            _ => Err(UnknownValueError::new("member role", s))
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    Pending,
    Active,
    Inactive,
}

impl MemberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Pending => "pending",
            MemberStatus::Active => "active",
            MemberStatus::Inactive => "inactive",
        }
    }
}

impl FromStr for MemberStatus {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(MemberStatus::Pending),
            "active" => Ok(MemberStatus::Active),
            "inactive" => Ok(MemberStatus::Inactive),
            _ => Err(UnknownValueError::new("member status", s))
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Attending,
    Absent,
    #[default]
    Maybe,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Attending => "attending",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Maybe => "maybe",
        }
    }
}

impl FromStr for AttendanceStatus {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "attending" => Ok(AttendanceStatus::Attending),
            "absent" => Ok(AttendanceStatus::Absent),
            "maybe" => Ok(AttendanceStatus::Maybe),
            _ => Err(UnknownValueError::new("attendance status", s))
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    Field,
    Freekick,
    Penalty,
}

impl GoalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::Field => "field",
            GoalType::Freekick => "freekick",
            GoalType::Penalty => "penalty",
        }
    }
}

impl FromStr for GoalType {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "field" => Ok(GoalType::Field),
            "freekick" => Ok(GoalType::Freekick),
            "penalty" => Ok(GoalType::Penalty),
            _ => Err(UnknownValueError::new("goal type", s))
        }
    }
}
