//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into every handler
//! through Axum's state extraction. All fields are cheap to clone: the
//! database connection is a pool and the token keys hold shared key material.

use sea_orm::DatabaseConnection;

use crate::server::{access::Access, middleware::token::TokenKeys, model::account::Account};

#[derive(Clone)]
pub struct AppState {
    /// Connection pool to the club database.
    pub db: DatabaseConnection,

    /// Keys used to issue tokens on login and verify them on every request.
    pub tokens: TokenKeys,

    /// Report reads denied outside the caller's list visibility as not found.
    pub mask_forbidden_reads: bool,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenKeys, mask_forbidden_reads: bool) -> Self {
        Self {
            db,
            tokens,
            mask_forbidden_reads,
        }
    }

    /// Builds the authorization facade for a resolved caller.
    pub fn access<'a>(&self, caller: &'a Account) -> Access<'a> {
        Access::new(caller).mask_forbidden_reads(self.mask_forbidden_reads)
    }
}
