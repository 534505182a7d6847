use crate::server::{
    access::scope::EffectiveScope,
    data::account::AccountRepository,
    model::{
        account::{AccountFilter, CreateAccountParam, UpdateAccountParam},
        page::PageParam,
    },
};
use entity::sea_orm_active_enums::Role;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_email;
mod get_paginated;
mod update;
