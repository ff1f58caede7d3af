//! Environment variable helpers backing [`crate::config::Config::new`]

use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads and parses an environment variable, falling back to `default` when
/// the variable is missing or does not parse
///
/// A present-but-unparseable value is logged before the default is used, so a
/// typo in `.env` does not pass silently.
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Reads and parses an optional environment variable
///
/// Returns `None` when the variable is missing or does not parse. Used for
/// the credential slots, which have no default value.
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T> {
    env::var(env_var).ok().and_then(|val| val.parse::<T>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_env_or_default_missing_var() {
        assert_eq!(get_env_or_default("LIFEPLUS_NO_SUCH_VAR", 7u64), 7);
    }

    #[test]
    fn test_get_env_or_none_missing_var() {
        assert_eq!(get_env_or_none::<String>("LIFEPLUS_NO_SUCH_VAR"), None);
    }
}
