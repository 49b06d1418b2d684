mod vars;

pub use vars::EnvTable;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvError {
    #[error("environment table is full ({capacity} entries)")]
    CapacityExceeded { capacity: usize },
    #[error("invalid variable name `{name}`: names cannot contain `=`")]
    InvalidName { name: String },
}

/// How a variable name is matched against stored `name=value` entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// The entry's name, up to the first `=`, equals the requested name.
    #[default]
    Exact,
    /// The whole `name=value` string contains the requested name anywhere.
    /// Compatible with the classic bsh lookup, including its false matches
    /// (`PATH` hits `MY_PATH=...`, and values are searched too).
    Substring,
}

impl MatchMode {
    pub fn matches(self, entry: &str, name: &str) -> bool {
        match self {
            MatchMode::Exact => entry_name(entry) == name,
            MatchMode::Substring => entry.contains(name),
        }
    }
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(MatchMode::Exact),
            "substring" => Ok(MatchMode::Substring),
            other => Err(format!("expected `exact` or `substring`, got `{}`", other)),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Exact => write!(f, "exact"),
            MatchMode::Substring => write!(f, "substring"),
        }
    }
}

/// Whether `name` can be stored as the name part of an entry.
pub fn is_valid_name(name: &str) -> bool {
    !name.contains('=')
}

/// Name part of a `name=value` entry. Entries without `=` are all name.
pub fn entry_name(entry: &str) -> &str {
    entry.split_once('=').map_or(entry, |(name, _)| name)
}

/// Value part of a `name=value` entry, empty when there is no `=`.
pub fn entry_value(entry: &str) -> &str {
    entry.split_once('=').map_or("", |(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_compares_names_only() {
        assert!(MatchMode::Exact.matches("PATH=/usr/bin", "PATH"));
        assert!(!MatchMode::Exact.matches("MY_PATH=/opt", "PATH"));
        assert!(!MatchMode::Exact.matches("HOME=/PATH", "PATH"));
    }

    #[test]
    fn test_substring_match_keeps_classic_quirk() {
        assert!(MatchMode::Substring.matches("MY_PATH=/opt", "PATH"));
        assert!(MatchMode::Substring.matches("HOME=/PATH", "PATH"));
        assert!(!MatchMode::Substring.matches("HOME=/root", "PATH"));
    }

    #[test]
    fn test_parse_match_mode() {
        assert_eq!("exact".parse::<MatchMode>(), Ok(MatchMode::Exact));
        assert_eq!("substring".parse::<MatchMode>(), Ok(MatchMode::Substring));
        assert!("fuzzy".parse::<MatchMode>().is_err());
    }

    #[test]
    fn test_entry_parts() {
        assert_eq!(entry_name("A=b=c"), "A");
        assert_eq!(entry_value("A=b=c"), "b=c");
        assert_eq!(entry_name("LONELY"), "LONELY");
        assert_eq!(entry_value("LONELY"), "");
    }
}
