// config.rs

use std::str::FromStr;

use crate::error::ConfigError;

pub const OVERFLOW_POLICY_VAR: &str = "CALC_OVERFLOW_POLICY";

/// What to do when a result does not fit in an `i64`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum OverflowPolicy {
    /// Fail with `CalcError::Overflow`; nothing is logged.
    #[default]
    Checked,
    Wrapping,
    Saturating,
}

impl FromStr for OverflowPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "checked" => Ok(OverflowPolicy::Checked),
            "wrapping" => Ok(OverflowPolicy::Wrapping),
            "saturating" => Ok(OverflowPolicy::Saturating),
            _ => Err(ConfigError::UnknownOverflowPolicy(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CalculatorConfig {
    pub overflow: OverflowPolicy,
}

impl CalculatorConfig {
    pub fn with_overflow(overflow: OverflowPolicy) -> Self {
        Self { overflow }
    }

    /// Reads `CALC_OVERFLOW_POLICY` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let overflow = match lookup(OVERFLOW_POLICY_VAR) {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => OverflowPolicy::default(),
        };
        log::debug!("calculator config: overflow policy {:?}", overflow);
        Ok(Self { overflow })
    }
}
