use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Role held by an account. Every account has exactly one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[sea_orm(string_value = "member")]
    Member,
    #[sea_orm(string_value = "manager")]
    Manager,
    #[sea_orm(string_value = "administrator")]
    Administrator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "MEMBER",
            Self::Manager => "MANAGER",
            Self::Administrator => "ADMINISTRATOR",
        }
    }
}

/// Playing position of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    #[sea_orm(string_value = "goalkeeper")]
    Goalkeeper,
    #[sea_orm(string_value = "defender")]
    Defender,
    #[sea_orm(string_value = "midfielder")]
    Midfielder,
    #[sea_orm(string_value = "forward")]
    Forward,
}

/// Age bracket a team competes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamCategory {
    #[sea_orm(string_value = "senior")]
    Senior,
    #[sea_orm(string_value = "under18")]
    Under18,
    #[sea_orm(string_value = "under16")]
    Under16,
    #[sea_orm(string_value = "under14")]
    Under14,
    #[sea_orm(string_value = "under12")]
    Under12,
    #[sea_orm(string_value = "under10")]
    Under10,
    #[sea_orm(string_value = "under8")]
    Under8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    #[sea_orm(string_value = "training")]
    Training,
    #[sea_orm(string_value = "match")]
    Match,
    #[sea_orm(string_value = "meeting")]
    Meeting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvailabilityStatus {
    #[sea_orm(string_value = "attending")]
    Attending,
    #[sea_orm(string_value = "not_attending")]
    NotAttending,
    #[sea_orm(string_value = "unsure")]
    Unsure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DueStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "paid")]
    Paid,
    #[sea_orm(string_value = "exempt")]
    Exempt,
}
