use std::collections::{btree_set, BTreeSet, HashSet};
use std::fmt;

/// Ordering behavior for the unique-name containers, selected on the
/// command line (`-d` / `-s`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetKind {
    /// First-insertion order
    Insertion,
    /// Ascending lexicographic order
    Sorted,
}

/// A duplicate-free collection of domain-name strings.
///
/// The insertion-ordered variant pairs a hash index with a plain vector so
/// membership stays O(1) while iteration preserves first-insertion order.
/// The sorted variant is a `BTreeSet` and iterates in ascending order.
/// The choice never affects which names are members, only their order.
#[derive(Debug)]
pub enum UniqueSet {
    Insertion {
        index: HashSet<String>,
        items: Vec<String>,
    },
    Sorted(BTreeSet<String>),
}

impl UniqueSet {
    pub fn new(kind: SetKind) -> Self {
        match kind {
            SetKind::Insertion => UniqueSet::Insertion {
                index: HashSet::new(),
                items: Vec::new(),
            },
            SetKind::Sorted => UniqueSet::Sorted(BTreeSet::new()),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        match self {
            UniqueSet::Insertion { index, .. } => index.contains(name),
            UniqueSet::Sorted(set) => set.contains(name),
        }
    }

    /// Inserts `name` if it is not already present. Returns whether the
    /// set changed.
    pub fn insert(&mut self, name: String) -> bool {
        match self {
            UniqueSet::Insertion { index, items } => {
                if index.insert(name.clone()) {
                    items.push(name);
                    true
                } else {
                    false
                }
            }
            UniqueSet::Sorted(set) => set.insert(name),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            UniqueSet::Insertion { items, .. } => items.len(),
            UniqueSet::Sorted(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> Iter<'_> {
        match self {
            UniqueSet::Insertion { items, .. } => Iter::Insertion(items.iter()),
            UniqueSet::Sorted(set) => Iter::Sorted(set.iter()),
        }
    }
}

pub enum Iter<'a> {
    Insertion(std::slice::Iter<'a, String>),
    Sorted(btree_set::Iter<'a, String>),
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        match self {
            Iter::Insertion(it) => it.next().map(String::as_str),
            Iter::Sorted(it) => it.next().map(String::as_str),
        }
    }
}

/// Renders as a bracketed comma-separated list, e.g. `[a.com, b.org]`.
impl fmt::Display for UniqueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, name) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_set_preserves_first_insertion_order() {
        let mut set = UniqueSet::new(SetKind::Insertion);
        assert!(set.insert("z.com".to_string()));
        assert!(set.insert("a.com".to_string()));
        assert!(set.insert("m.com".to_string()));

        let names: Vec<&str> = set.iter().collect();
        assert_eq!(names, vec!["z.com", "a.com", "m.com"]);
    }

    #[test]
    fn sorted_set_iterates_in_ascending_order() {
        let mut set = UniqueSet::new(SetKind::Sorted);
        set.insert("z.com".to_string());
        set.insert("a.com".to_string());
        set.insert("m.com".to_string());

        let names: Vec<&str> = set.iter().collect();
        assert_eq!(names, vec!["a.com", "m.com", "z.com"]);
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        for kind in [SetKind::Insertion, SetKind::Sorted] {
            let mut set = UniqueSet::new(kind);
            assert!(set.insert("b.c".to_string()));
            assert!(!set.insert("b.c".to_string()));
            assert_eq!(set.len(), 1);
            assert!(set.contains("b.c"));
        }
    }

    #[test]
    fn equality_is_exact_string_equality() {
        let mut set = UniqueSet::new(SetKind::Insertion);
        set.insert("Example.com".to_string());
        set.insert("example.com".to_string());
        set.insert("example.com.".to_string());
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn display_renders_bracketed_list() {
        let mut set = UniqueSet::new(SetKind::Insertion);
        assert_eq!(set.to_string(), "[]");

        set.insert("b.c".to_string());
        assert_eq!(set.to_string(), "[b.c]");

        set.insert("x.y.z".to_string());
        assert_eq!(set.to_string(), "[b.c, x.y.z]");
    }

    #[test]
    fn empty_set_reports_empty() {
        let set = UniqueSet::new(SetKind::Sorted);
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(!set.contains("a"));
    }
}
