use crate::server::{
    access::scope::EffectiveScope,
    data::call_up::CallUpRepository,
    model::call_up::{CallUpFilter, CreateCallUpParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
