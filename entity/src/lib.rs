//! SeaORM entity models for the club database.
//!
//! One module per table. Column enums shared between tables live in
//! `sea_orm_active_enums`.

pub mod prelude;

pub mod account;
pub mod availability;
pub mod call_up;
pub mod due;
pub mod event;
pub mod sea_orm_active_enums;
pub mod statistic;
pub mod team;
