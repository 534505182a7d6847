use crate::server::{
    access::scope::EffectiveScope,
    data::event::EventRepository,
    model::{event::EventFilter, page::PageParam},
};
use chrono::{NaiveDate, NaiveTime};
use entity::sea_orm_active_enums::EventType;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_paginated;
