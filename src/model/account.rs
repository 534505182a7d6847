use entity::sea_orm_active_enums::{Position, Role};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AccountDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[schema(value_type = String, example = "MEMBER")]
    pub role: Role,
    #[schema(value_type = Option<String>, example = "FORWARD")]
    pub position: Option<Position>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub team_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateAccountDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[schema(value_type = String, example = "MEMBER")]
    pub role: Role,
    #[schema(value_type = Option<String>)]
    pub position: Option<Position>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub team_id: Option<i32>,
}

/// Partial account update. Absent fields are left unchanged.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateAccountDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    #[schema(value_type = Option<String>)]
    pub role: Option<Role>,
    #[schema(value_type = Option<String>)]
    pub position: Option<Position>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub team_id: Option<i32>,
    /// Removes the account from its team. Cannot be combined with `team_id`.
    #[serde(default)]
    pub clear_team: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ChangePasswordDto {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedAccountsDto {
    pub accounts: Vec<AccountDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
