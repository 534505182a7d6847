use std::{ops::RangeInclusive, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;
/// One hour up to one year.
const TOKEN_TTL_HOURS: RangeInclusive<i64> = 1..=8760;
const DEFAULT_CORS_ORIGINS: &str =
    "https://my-club-frontend.vercel.app,http://localhost:4200,http://localhost:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,

    pub cors_origins: Vec<String>,

    /// Report reads denied outside the caller's list visibility as not found.
    pub mask_forbidden_reads: bool,

    /// Administrator created at startup when no administrator exists yet.
    pub bootstrap_admin: Option<BootstrapAdmin>,
}

pub struct BootstrapAdmin {
    pub email: String,
    pub password: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bootstrap_admin = match (optional("ADMIN_EMAIL"), optional("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(BootstrapAdmin { email, password }),
            _ => None,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            jwt_secret: required("JWT_SECRET")?,
            jwt_expiration_hours: in_range(
                "JWT_EXPIRATION_HOURS",
                optional("JWT_EXPIRATION_HOURS"),
                DEFAULT_TOKEN_TTL_HOURS,
                TOKEN_TTL_HOURS,
            )?,
            cors_origins: optional("CORS_ORIGINS")
                .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            mask_forbidden_reads: parsed("MASK_FORBIDDEN_READS", false)?,
            bootstrap_admin,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|value| !value.is_empty())
}

fn parsed<T: FromStr>(var: &str, default: T) -> Result<T, ConfigError> {
    parse(var, optional(var), default)
}

fn parse<T: FromStr>(var: &str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
            var: var.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

fn in_range(
    var: &str,
    raw: Option<String>,
    default: i64,
    range: RangeInclusive<i64>,
) -> Result<i64, ConfigError> {
    let value = parse(var, raw, default)?;

    if !range.contains(&value) {
        return Err(ConfigError::InvalidValue {
            var: var.to_string(),
            value: value.to_string(),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_ttl(raw: &str) -> Result<i64, ConfigError> {
        in_range(
            "JWT_EXPIRATION_HOURS",
            Some(raw.to_string()),
            DEFAULT_TOKEN_TTL_HOURS,
            TOKEN_TTL_HOURS,
        )
    }

    /// Tests the token lifetime default when the variable is unset.
    #[test]
    fn token_ttl_defaults_when_unset() {
        let ttl = in_range(
            "JWT_EXPIRATION_HOURS",
            None,
            DEFAULT_TOKEN_TTL_HOURS,
            TOKEN_TTL_HOURS,
        );

        assert_eq!(ttl.unwrap(), DEFAULT_TOKEN_TTL_HOURS);
    }

    /// Tests token lifetimes at the edges of the accepted range.
    ///
    /// Verifies that zero, negative and oversized lifetimes are refused
    /// instead of issuing expired tokens or overflowing the expiry time.
    ///
    /// Expected: Ok for 1 and 8760, Err(InvalidValue) otherwise
    #[test]
    fn token_ttl_rejects_out_of_range_values() {
        assert_eq!(token_ttl("1").unwrap(), 1);
        assert_eq!(token_ttl("8760").unwrap(), 8760);

        for raw in ["0", "-5", "8761", "9223372036854775807", "soon"] {
            assert!(
                matches!(token_ttl(raw), Err(ConfigError::InvalidValue { .. })),
                "{raw} should be rejected"
            );
        }
    }
}
