use crate::server::{
    access::scope::EffectiveScope,
    data::statistic::StatisticRepository,
    model::statistic::{SaveStatisticParam, StatisticFilter, UpdateStatisticParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod save;
mod update;
