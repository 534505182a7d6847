//! Login and registration parameters.

use entity::sea_orm_active_enums::{Position, Role};

use crate::{
    model::auth::{LoginDto, RegisterDto, TokenDto},
    server::model::account::{Account, CreateAccountParam},
};

#[derive(Debug, Clone, PartialEq)]
pub struct LoginParam {
    pub email: String,
    pub password: String,
}

impl LoginParam {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
        }
    }
}

/// Self-service registration. Always produces a team-less Member.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterParam {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub position: Option<Position>,
    pub phone: Option<String>,
}

impl RegisterParam {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            password: dto.password,
            position: dto.position,
            phone: dto.phone,
        }
    }

    pub fn into_create_param(self) -> CreateAccountParam {
        CreateAccountParam {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password: self.password,
            role: Role::Member,
            position: self.position,
            phone: self.phone,
            photo_url: None,
            team_id: None,
        }
    }
}

/// Signed access token together with the account it names.
#[derive(Debug, Clone, PartialEq)]
pub struct IssuedToken {
    pub token: String,
    pub account: Account,
}

impl IssuedToken {
    pub fn into_dto(self) -> TokenDto {
        TokenDto {
            token: self.token,
            account: self.account.into_dto(),
        }
    }
}
