//! Client-side view of the classifier's delimiter-separated output.
//!
//! The classifier writes candidate problem names separated by [`DELIMITER`],
//! most likely first. The format has no escaping: a `$` inside a problem name
//! cannot be represented.

/// Separator between candidate names in a classification result.
pub const DELIMITER: char = '$';

/// Ordered candidate problem names parsed from a classification result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProblemCandidates {
    names: Vec<String>,
}

impl ProblemCandidates {
    /// Split `raw` on [`DELIMITER`], dropping blank segments. Non-blank
    /// segments are kept verbatim.
    pub fn parse(raw: &str) -> Self {
        let names = raw
            .split(DELIMITER)
            .filter(|name| !name.trim().is_empty())
            .map(str::to_string)
            .collect();
        Self { names }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// The most likely problem, if any.
    pub fn headline(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    /// Remaining segments after the headline, in classifier order.
    pub fn others(&self) -> &[String] {
        self.names.get(1..).unwrap_or_default()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}
