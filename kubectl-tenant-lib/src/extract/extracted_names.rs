use core::fmt;
use serde::Serialize;
use std::collections::BTreeSet;

/// A normalized set of names pulled out of an object body.
///
/// Entries are trimmed, blank entries are dropped, duplicates are removed, and
/// the remaining names are kept in ascending byte order. The order therefore
/// depends only on the content, never on the order of the source data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ExtractedNames(Vec<String>);

impl ExtractedNames {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.binary_search_by(|entry| entry.as_str().cmp(name)).is_ok()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    /// Merge two sets, keeping the normalization invariant.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        self.0.into_iter().chain(other.0).collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExtractedNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let set: BTreeSet<String> = iter
            .into_iter()
            .filter_map(|s| {
                let trimmed = s.as_ref().trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .collect();

        Self(set.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ExtractedNames {
    type Item = &'a String;
    type IntoIter = core::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ExtractedNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_dedupes_and_sorts() {
        let names: ExtractedNames = [" ssd", "gp2", "ssd ", "gp2", "Fast"].into_iter().collect();
        assert_eq!(names.as_slice(), ["Fast", "gp2", "ssd"]);
    }

    #[test]
    fn test_blank_entries_are_dropped() {
        let names: ExtractedNames = ["", "   ", "\t"].into_iter().collect();
        assert!(names.is_empty());
    }

    #[test]
    fn test_order_independent_of_input() {
        let a: ExtractedNames = ["c", "a", "b"].into_iter().collect();
        let b: ExtractedNames = ["b", "c", "a", "a"].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_contains_uses_exact_match() {
        let names: ExtractedNames = ["alpha", "beta"].into_iter().collect();
        assert!(names.contains("alpha"));
        assert!(!names.contains("Alpha"));
        assert!(!names.contains(" alpha"));
    }

    #[test]
    fn test_union() {
        let a: ExtractedNames = ["b", "a"].into_iter().collect();
        let b: ExtractedNames = ["c", "a"].into_iter().collect();
        assert_eq!(a.union(b).as_slice(), ["a", "b", "c"]);
    }

    #[test]
    fn test_display_and_serialize() {
        let names: ExtractedNames = ["b", "a"].into_iter().collect();
        assert_eq!(names.to_string(), "a, b");
        assert_eq!(serde_json::to_string(&names).unwrap(), r#"["a","b"]"#);
    }
}
