use entity::sea_orm_active_enums::Position;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::account::AccountDto;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Self-service sign up. New accounts are always team-less members.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct RegisterDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[schema(value_type = Option<String>)]
    pub position: Option<Position>,
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct TokenDto {
    pub token: String,
    pub account: AccountDto,
}
