use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Identifiers that must never be renamed nor used as a replacement name.
///
/// Keeps the order names were first added in and ignores repeats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservedNames(IndexSet<String>);

impl ReservedNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name` unless already present; returns whether it was added.
    pub fn push_unique(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    pub fn extend_unique<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.push_unique(name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ReservedNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut names = Self::new();
        names.extend_unique(iter);
        names
    }
}

/// Contents of an exceptions file: names to keep for variables and properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExceptionsFile {
    #[serde(default)]
    pub vars: Vec<String>,
    #[serde(default)]
    pub props: Vec<String>,
}

impl ExceptionsFile {
    pub fn parse(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_unique_keeps_first_position() {
        let mut names = ReservedNames::new();
        assert!(names.push_unique("jQuery"));
        assert!(names.push_unique("$"));
        assert!(!names.push_unique("jQuery"));
        assert_eq!(names.iter().collect::<Vec<_>>(), vec!["jQuery", "$"]);
    }

    #[test]
    fn test_from_iter_dedups() {
        let names: ReservedNames = ["a", "b", "a", "c", "b"].into_iter().collect();
        assert_eq!(names.len(), 3);
        assert!(names.contains("c"));
        assert!(!names.contains("d"));
    }

    #[test]
    fn test_serializes_as_list() {
        let names: ReservedNames = ["x", "y"].into_iter().collect();
        assert_eq!(serde_json::to_string(&names).unwrap(), r#"["x","y"]"#);
    }

    #[test]
    fn test_exceptions_file_parse() {
        let parsed = ExceptionsFile::parse(r#"{"vars":["app"],"props":["render","state"]}"#)
            .unwrap();
        assert_eq!(parsed.vars, vec!["app".to_string()]);
        assert_eq!(parsed.props.len(), 2);

        let vars_only = ExceptionsFile::parse(r#"{"vars":["app"]}"#).unwrap();
        assert!(vars_only.props.is_empty());
    }

    #[test]
    fn test_exceptions_file_rejects_non_list() {
        assert!(ExceptionsFile::parse(r#"{"vars":"app"}"#).is_err());
        assert!(ExceptionsFile::parse("not json").is_err());
    }
}
