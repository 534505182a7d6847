//! Clubhouse Test Utils
//!
//! Provides shared testing utilities for building unit tests for the clubhouse backend.
//! This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and customizable table schemas, plus factories for seeding accounts, teams
//! and events.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting entities with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_team_accounts() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_club_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let team = factory::team::create_team(db).await?;
//!     let manager = factory::account::AccountFactory::new(db)
//!         .manager()
//!         .team(team.id)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
