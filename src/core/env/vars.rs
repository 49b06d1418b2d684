use super::{entry_value, is_valid_name, EnvError, MatchMode};
use std::env;

/// The session's environment: ordered `name=value` strings with a hard
/// entry limit.
#[derive(Clone, Debug)]
pub struct EnvTable {
    entries: Vec<String>,
    capacity: usize,
    match_mode: MatchMode,
}

impl EnvTable {
    pub fn new(capacity: usize, match_mode: MatchMode) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
            match_mode,
        }
    }

    /// Seeds the table from `vars`, keeping only the first `capacity`
    /// pairs. The rest are dropped without error.
    pub fn from_vars<I, K, V>(vars: I, capacity: usize, match_mode: MatchMode) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut table = Self::new(capacity, match_mode);
        let mut dropped = 0usize;

        for (key, value) in vars {
            if table.entries.len() < capacity {
                table
                    .entries
                    .push(format!("{}={}", key.as_ref(), value.as_ref()));
            } else {
                dropped += 1;
            }
        }

        if dropped > 0 {
            tracing::debug!(dropped, capacity, "inherited environment truncated");
        }
        table
    }

    /// Copies the process environment into a new table.
    pub fn inherit(capacity: usize, match_mode: MatchMode) -> Self {
        let vars = env::vars_os().map(|(key, value)| {
            (
                key.to_string_lossy().into_owned(),
                value.to_string_lossy().into_owned(),
            )
        });
        Self::from_vars(vars, capacity, match_mode)
    }

    /// Entries in table order, rendered as `name=value`.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| entry_value(&self.entries[i]))
    }

    /// Replaces the first matching entry in place, or appends a new one.
    /// A name containing `=` could never be found again and is refused.
    pub fn upsert(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        if !is_valid_name(name) {
            return Err(EnvError::InvalidName {
                name: name.to_string(),
            });
        }
        let entry = format!("{}={}", name, value);

        match self.position(name) {
            Some(i) => {
                tracing::debug!(name, index = i, "replacing environment entry");
                self.entries[i] = entry;
            }
            None => {
                if self.entries.len() >= self.capacity {
                    return Err(EnvError::CapacityExceeded {
                        capacity: self.capacity,
                    });
                }
                self.entries.push(entry);
            }
        }
        Ok(())
    }

    /// Removes the first matching entry; later entries keep their order.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let i = self.position(name)?;
        Some(self.entries.remove(i))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| self.match_mode.matches(entry, name))
    }
}
