//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for customization
//! and a `create_*` convenience function for quick default creation. Defaults are
//! unique per call so several entities of the same kind can coexist in one test.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let team = factory::team::create_team(db).await?;
//! let member = factory::account::AccountFactory::new(db)
//!     .team(team.id)
//!     .build()
//!     .await?;
//! let event = factory::event::create_event(db, team.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `account` - Accounts of any role, optionally attached to a team
//! - `team` - Teams, optionally with a manager id
//! - `event` - Events belonging to a team
//! - `helpers` - Unique id generation and multi-entity setups

pub mod account;
pub mod event;
pub mod helpers;
pub mod team;

pub use account::create_account;
pub use event::create_event;
pub use team::create_team;
