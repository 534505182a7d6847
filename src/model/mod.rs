//! Request and response bodies exchanged over the HTTP API.

pub mod account;
pub mod api;
pub mod auth;
pub mod availability;
pub mod call_up;
pub mod due;
pub mod event;
pub mod statistic;
pub mod team;
