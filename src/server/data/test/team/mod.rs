use crate::server::{
    access::scope::EffectiveScope,
    data::team::TeamRepository,
    model::{page::PageParam, team::TeamFilter},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod clear_manager;
mod get_paginated;
