//! Account domain models and parameters.
//!
//! An account is the identity every request resolves to. Its role drives the
//! coarse access table and its team affiliation drives ownership checks.

use entity::sea_orm_active_enums::{Position, Role};

use crate::{
    model::account::{AccountDto, CreateAccountDto, PaginatedAccountsDto, UpdateAccountDto},
    server::model::page::Paginated,
};

/// Club account with role, optional team affiliation and profile data.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Unique login identity.
    pub email: String,
    /// bcrypt hash, never leaves the server.
    pub password_hash: String,
    pub role: Role,
    pub position: Option<Position>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub team_id: Option<i32>,
}

impl Account {
    /// Whether the account is an unprivileged team member.
    pub fn is_member(&self) -> bool {
        self.role == Role::Member
    }

    /// Whether the account manages a team.
    pub fn is_manager(&self) -> bool {
        self.role == Role::Manager
    }

    /// Whether the account has unrestricted access.
    pub fn is_administrator(&self) -> bool {
        self.role == Role::Administrator
    }

    /// Converts the account domain model to a DTO for API responses.
    ///
    /// The password hash is dropped.
    pub fn into_dto(self) -> AccountDto {
        AccountDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            role: self.role,
            position: self.position,
            phone: self.phone,
            photo_url: self.photo_url,
            team_id: self.team_id,
        }
    }

    /// Converts an entity model to an account domain model at the repository boundary.
    pub fn from_entity(entity: entity::account::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            password_hash: entity.password,
            role: entity.role,
            position: entity.position,
            phone: entity.phone,
            photo_url: entity.photo_url,
            team_id: entity.team_id,
        }
    }
}

/// Parameters for creating an account.
///
/// `password` is plain text here; the service hashes it before it reaches
/// the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAccountParam {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub position: Option<Position>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub team_id: Option<i32>,
}

impl CreateAccountParam {
    pub fn from_dto(dto: CreateAccountDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            password: dto.password,
            role: dto.role,
            position: dto.position,
            phone: dto.phone,
            photo_url: dto.photo_url,
            team_id: dto.team_id,
        }
    }
}

/// Parameters for a partial account update. `None` leaves a field untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateAccountParam {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub position: Option<Position>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub team_id: Option<i32>,
    /// Detaches the account from its team.
    pub clear_team: bool,
}

impl UpdateAccountParam {
    pub fn from_dto(dto: UpdateAccountDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            role: dto.role,
            position: dto.position,
            phone: dto.phone,
            photo_url: dto.photo_url,
            team_id: dto.team_id,
            clear_team: dto.clear_team,
        }
    }

    /// Role the account holds once the update is applied.
    pub fn resulting_role(&self, current: &Account) -> Role {
        self.role.unwrap_or(current.role)
    }

    /// Team the account belongs to once the update is applied.
    pub fn resulting_team(&self, current: &Account) -> Option<i32> {
        if self.clear_team {
            None
        } else {
            self.team_id.or(current.team_id)
        }
    }

    /// Whether the update would change the account's role or team affiliation.
    pub fn changes_privileges(&self, current: &Account) -> bool {
        let role_changes = self.role.is_some_and(|role| role != current.role);
        let team_changes = self.resulting_team(current) != current.team_id;

        role_changes || team_changes
    }
}

/// Optional filters for account listings. Combined with AND.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AccountFilter {
    pub team_id: Option<i32>,
    pub role: Option<Role>,
    pub last_name: Option<String>,
    pub position: Option<Position>,
    pub email: Option<String>,
}

impl Paginated<Account> {
    pub fn into_dto(self) -> PaginatedAccountsDto {
        PaginatedAccountsDto {
            accounts: self.items.into_iter().map(Account::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
