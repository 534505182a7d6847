//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod account;
pub mod auth;
pub mod availability;
pub mod call_up;
pub mod due;
pub mod event;
pub mod page;
pub mod statistic;
pub mod team;
