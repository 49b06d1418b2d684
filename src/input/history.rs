use std::collections::VecDeque;
use std::io::{self, Write};

/// Fixed-size log of entered lines, oldest first.
#[derive(Debug, Clone)]
pub struct HistoryRing {
    entries: VecDeque<String>,
    capacity: usize,
}

impl HistoryRing {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends `line`, evicting the oldest entry once the ring is full.
    pub fn record(&mut self, line: &str) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(line.to_owned());
    }

    /// Writes every entry as `n: line`, numbered from 1.
    pub fn print_all(&self, out: &mut dyn Write) -> io::Result<()> {
        for (i, line) in self.entries.iter().enumerate() {
            writeln!(out, "{}: {}", i + 1, line)?;
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_records_in_order() {
        let mut history = HistoryRing::new(500);
        history.record("cd sub");
        history.record("pwd");
        assert_eq!(history.iter().collect::<Vec<_>>(), vec!["cd sub", "pwd"]);
    }

    #[test]
    fn test_evicts_oldest_when_full() {
        let capacity = 5;
        let mut history = HistoryRing::new(capacity);
        for i in 0..=capacity {
            history.record(&format!("cmd {}", i));
        }

        let expected: Vec<String> = (1..=capacity).map(|i| format!("cmd {}", i)).collect();
        assert_eq!(history.len(), capacity);
        assert_eq!(history.iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_default_size_overflow() {
        let mut history = HistoryRing::new(500);
        for i in 0..501 {
            history.record(&i.to_string());
        }
        assert_eq!(history.len(), 500);
        assert_eq!(history.iter().next(), Some("1"));
        assert_eq!(history.iter().last(), Some("500"));
    }

    #[test]
    fn test_print_all_is_one_indexed() -> io::Result<()> {
        let mut history = HistoryRing::new(3);
        history.record("env");
        history.record("");
        history.record("history");

        let mut out = Vec::new();
        history.print_all(&mut out)?;
        assert_eq!(
            String::from_utf8_lossy(&out),
            "1: env\n2: \n3: history\n"
        );
        Ok(())
    }

    #[test]
    fn test_zero_capacity_records_nothing() {
        let mut history = HistoryRing::new(0);
        history.record("pwd");
        assert!(history.is_empty());
    }
}
