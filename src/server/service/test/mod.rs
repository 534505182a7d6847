use crate::server::{
    access::Access,
    error::{auth::AuthError, AppError},
    model::account::Account,
};
use test_utils::{builder::TestBuilder, factory};

mod auth;
mod availability;
mod statistic;
mod team;

/// Converts a factory-built entity into the domain account used as caller.
fn caller(entity: entity::account::Model) -> Account {
    Account::from_entity(entity)
}

fn is_forbidden(error: &AppError) -> bool {
    matches!(error, AppError::AuthErr(AuthError::Forbidden(_)))
}
