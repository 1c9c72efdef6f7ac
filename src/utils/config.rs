/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::{error, warn};

/// Values accepted as `true` by [`parse_flag`] (compared case-insensitively)
pub const TRUTHY_VALUES: [&str; 5] = ["1", "true", "yes", "y", "on"];
/// Values accepted as `false` by [`parse_flag`] (compared case-insensitively)
pub const FALSY_VALUES: [&str; 6] = ["", "0", "false", "no", "n", "off"];

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The default value to use if the environment variable is not found or cannot be parsed
///
/// # Returns
///
/// The parsed value of the environment variable or the default value
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

/// Gets a non-blank string environment variable
///
/// Blank values are treated the same as unset ones so that `KEY=` in a `.env`
/// file never counts as a credential.
pub fn get_env_non_empty(env_var: &str) -> Option<String> {
    env::var(env_var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses a boolean-like string against [`TRUTHY_VALUES`] and [`FALSY_VALUES`]
///
/// Returns `None` for anything outside both sets.
pub fn parse_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    if TRUTHY_VALUES.contains(&normalized.as_str()) {
        Some(true)
    } else if FALSY_VALUES.contains(&normalized.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Reads a boolean-like environment variable through [`parse_flag`]
///
/// Unset variables yield `default`; unrecognized values are reported and also yield `default`.
pub fn get_env_flag(env_var: &str, default: bool) -> bool {
    match env::var(env_var) {
        Ok(val) => parse_flag(&val).unwrap_or_else(|| {
            warn!(
                "Unrecognized boolean value for {}: {:?}, using default {}",
                env_var, val, default
            );
            default
        }),
        Err(_) => default,
    }
}
