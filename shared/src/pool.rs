use serde::{Deserialize, Serialize};

use crate::error::PoolError;
use crate::validation::validate_name;

/// Ordered list of the names still eligible to win.
///
/// Position decides slice placement: entry 0 owns the slice that starts at the
/// wheel's current angle and the rest follow clockwise in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamePool {
    names: Vec<String>,
}

impl NamePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the trimmed name. Blank input is ignored and reported as `false`.
    pub fn add(&mut self, raw: &str) -> bool {
        match validate_name(raw) {
            Ok(name) => {
                self.names.push(name.to_string());
                log::debug!("added {:?} at position {}", name, self.names.len() - 1);
                true
            }
            Err(_) => {
                log::debug!("ignored blank name");
                false
            }
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Result<String, PoolError> {
        if index >= self.names.len() {
            return Err(PoolError::OutOfRange {
                index,
                len: self.names.len(),
            });
        }
        Ok(self.names.remove(index))
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl<S: AsRef<str>> FromIterator<S> for NamePool {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut pool = NamePool::new();
        for name in iter {
            pool.add(name.as_ref());
        }
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_appends() {
        let mut pool = NamePool::new();
        assert!(pool.add("  Ana "));
        assert!(pool.add("Bob"));
        assert_eq!(pool.names(), ["Ana", "Bob"]);
    }

    #[test]
    fn test_add_whitespace_is_noop() {
        let mut pool: NamePool = ["Ana"].into_iter().collect();
        assert!(!pool.add("  "));
        assert!(!pool.add(""));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_remove_at_returns_entry() {
        let mut pool: NamePool = ["Ana", "Bob", "Cleo"].into_iter().collect();
        assert_eq!(pool.remove_at(1).unwrap(), "Bob");
        assert_eq!(pool.names(), ["Ana", "Cleo"]);
    }

    #[test]
    fn test_remove_at_out_of_range_leaves_pool() {
        let mut pool: NamePool = ["Ana", "Bob", "Cleo"].into_iter().collect();
        let err = pool.remove_at(3).unwrap_err();
        assert_eq!(err, PoolError::OutOfRange { index: 3, len: 3 });
        assert_eq!(pool.names(), ["Ana", "Bob", "Cleo"]);
    }

    #[test]
    fn test_clear() {
        let mut pool: NamePool = ["Ana", "Bob", "Cleo"].into_iter().collect();
        pool.clear();
        assert!(pool.is_empty());
        assert_eq!(pool.get(0), None);
    }
}
