use std::{env, fmt};

use crate::constants::DEFAULT_MAX_SOLUTIONS;

pub const MAX_SOLUTIONS_KEY: &str = "MAZE_MAX_SOLUTIONS";
pub const MAX_DEPTH_KEY: &str = "MAZE_MAX_DEPTH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value } => write!(
                f,
                "{} must be a non-negative integer or \"none\", got \"{}\"",
                key, value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Safety limits for a search. `None` means unlimited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverConfig {
    pub max_solutions: Option<usize>,
    /// Deepest the exploration stack may grow, in cells.
    pub max_depth: Option<usize>,
}

impl SolverConfig {
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Reads the limits from the environment, loading `.env` first if there
    /// is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let max_solutions = match lookup(MAX_SOLUTIONS_KEY) {
            Some(value) => parse_limit(MAX_SOLUTIONS_KEY, &value)?,
            None => Some(DEFAULT_MAX_SOLUTIONS),
        };
        let max_depth = match lookup(MAX_DEPTH_KEY) {
            Some(value) => parse_limit(MAX_DEPTH_KEY, &value)?,
            None => None,
        };

        let config = Self {
            max_solutions,
            max_depth,
        };
        log::debug!("solver config: {:?}", config);
        Ok(config)
    }
}

fn parse_limit(key: &'static str, value: &str) -> Result<Option<usize>, ConfigError> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("none") {
        return Ok(None);
    }

    match trimmed.parse::<usize>() {
        Ok(0) => Ok(None),
        Ok(n) => Ok(Some(n)),
        Err(_) => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_cap_solutions_but_not_depth() {
        let config = SolverConfig::from_lookup(lookup_from(&[])).expect("defaults are valid");
        assert_eq!(config.max_solutions, Some(DEFAULT_MAX_SOLUTIONS));
        assert_eq!(config.max_depth, None);
    }

    #[test]
    fn zero_and_none_mean_unlimited() {
        let config = SolverConfig::from_lookup(lookup_from(&[
            (MAX_SOLUTIONS_KEY, "0"),
            (MAX_DEPTH_KEY, " None "),
        ]))
        .expect("values are valid");
        assert_eq!(config, SolverConfig::unlimited());
    }

    #[test]
    fn numbers_are_parsed() {
        let config = SolverConfig::from_lookup(lookup_from(&[
            (MAX_SOLUTIONS_KEY, "24"),
            (MAX_DEPTH_KEY, "500"),
        ]))
        .expect("values are valid");
        assert_eq!(config.max_solutions, Some(24));
        assert_eq!(config.max_depth, Some(500));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(
            SolverConfig::from_lookup(lookup_from(&[(MAX_DEPTH_KEY, "-3")])),
            Err(ConfigError::InvalidValue {
                key: MAX_DEPTH_KEY,
                value: "-3".to_string()
            })
        );
    }
}
