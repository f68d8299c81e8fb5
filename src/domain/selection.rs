/// Names of apartments marked as selected, in the order they were selected.
///
/// A name is stored at most once. Whether a name may enter the set (rent paid)
/// is decided by the registry, not here.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectionSet {
    names: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Adds `name`, returning `false` if it was already present.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut set = SelectionSet::new();
        assert!(set.insert("A1"));
        assert!(!set.insert("A1"));
        assert_eq!(set.len(), 1);
        assert!(set.contains("A1"));
    }

    #[test]
    fn test_names_are_case_sensitive_and_ordered() {
        let mut set = SelectionSet::new();
        set.insert("b");
        set.insert("B");
        set.insert("a");
        assert_eq!(set.names(), ["b", "B", "a"]);
        assert!(!set.contains("A"));
    }
}
