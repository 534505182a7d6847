use crate::server::{
    access::scope::EffectiveScope,
    data::due::DueRepository,
    model::due::{CreateDueParam, DueFilter},
};
use entity::sea_orm_active_enums::DueStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
