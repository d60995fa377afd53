use std::cmp::Ordering;
use std::collections::HashMap;

/// Sorts rows with a stable sort and keeps the first `limit`.
/// Rows comparing equal keep their insertion order.
pub(crate) fn top_n<T, F>(mut rows: Vec<T>, limit: usize, compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    rows.sort_by(compare);
    rows.truncate(limit);
    rows
}

/// Accumulator records keyed by name, remembering first-seen order
pub(crate) struct Tally<T> {
    rows: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Tally<T> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Returns the record for `key`, creating it with `init` on first sight
    pub fn entry_or_insert_with<F>(&mut self, key: &str, init: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        let existing = self.index.get(key).copied();
        let idx = match existing {
            Some(idx) => idx,
            None => {
                self.rows.push(init());
                let idx = self.rows.len() - 1;
                self.index.insert(key.to_string(), idx);
                idx
            }
        };
        &mut self.rows[idx]
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        let idx = *self.index.get(key)?;
        self.rows.get_mut(idx)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_n_is_stable_and_truncates() {
        let rows = vec![("a", 1), ("b", 3), ("c", 1), ("d", 3), ("e", 2), ("f", 0)];
        let ranked = top_n(rows, 5, |x, y| y.1.cmp(&x.1));

        assert_eq!(ranked, vec![("b", 3), ("d", 3), ("e", 2), ("a", 1), ("c", 1)]);
    }

    #[test]
    fn test_top_n_shorter_than_limit() {
        let ranked = top_n(vec![2, 1], 5, |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(ranked, vec![1, 2]);
    }

    #[test]
    fn test_tally_keeps_first_seen_order() {
        let mut tally: Tally<(String, u32)> = Tally::new();
        tally.entry_or_insert_with("x", || ("x".to_string(), 0)).1 += 1;
        tally.entry_or_insert_with("y", || ("y".to_string(), 0)).1 += 5;
        tally.entry_or_insert_with("x", || ("x".to_string(), 100)).1 += 1;

        assert_eq!(tally.len(), 2);
        assert!(tally.get_mut("z").is_none());
        assert_eq!(
            tally.into_vec(),
            vec![("x".to_string(), 2), ("y".to_string(), 5)]
        );
    }
}
