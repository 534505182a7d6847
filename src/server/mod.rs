//! HTTP backend for the club: accounts, teams, events and everything hanging
//! off them.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules; every operation takes an `Access`
//! - **Access** (`access/`) - Role table, ownership guard and scope filter
//! - **Data Layer** (`data/`) - SeaORM repositories; listings take an `EffectiveScope`
//! - **Model Layer** (`model/`) - Domain models and operation parameters
//! - **Middleware** (`middleware/`) - Bearer tokens and caller resolution
//! - **Error Layer** (`error/`) - Error types and their HTTP responses
//!
//! Supporting modules: `config` reads the environment, `startup` connects the
//! database and bootstraps the first administrator, `router` wires the routes
//! and OpenAPI document, and `state` carries what handlers share.
//!
//! # Request Flow
//!
//! 1. **Router** dispatches to a controller
//! 2. **Controller** resolves the caller with `AuthGuard` and wraps it in `Access`
//! 3. **Service** loads the target, asks `Access` whether the caller may touch it, validates
//! 4. **Data** runs the query, restricted to the caller's scope for listings
//! 5. **Controller** converts the result to a DTO

pub mod access;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
