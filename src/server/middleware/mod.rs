//! Request-level authentication plumbing.
//!
//! `token` signs and verifies bearer tokens, and `auth` turns the headers of an
//! incoming request into the stored account that made it.

pub mod auth;
pub mod token;

#[cfg(test)]
mod test;
