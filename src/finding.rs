//! Validation findings.

use std::fmt;

/// The description of a file whose coordinate reference system could not be resolved.
pub const UNKNOWN_CRS_DESCRIPTION: &str = "not valid or not specified";

/// How bad a finding is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// The file is legal but suspicious.
    Warning,
    /// The file violates the las specification or contradicts itself.
    Fail,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Fail => write!(f, "fail"),
        }
    }
}

/// One reported problem, tied to a header or point field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finding {
    /// How bad it is.
    pub severity: Severity,
    /// The field, e.g. "number of point records".
    pub field: String,
    /// What is wrong with it.
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.field, self.message)
    }
}

/// The overall outcome of a validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// No findings at all.
    Pass,
    /// Only warnings.
    Warning,
    /// At least one failure.
    Fail,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "pass"),
            Verdict::Warning => write!(f, "warning"),
            Verdict::Fail => write!(f, "fail"),
        }
    }
}

/// The ordered findings of one validation run.
///
/// # Examples
///
/// ```
/// use las_validate::{Findings, Verdict};
/// let mut findings = Findings::default();
/// assert_eq!(Verdict::Pass, findings.verdict());
/// findings.warn("x scale factor", "should be factor ten of 0.1 or 0.5 or 0.25 and not 0.017");
/// assert_eq!(Verdict::Warning, findings.verdict());
/// findings.fail("file signature", "should be 'LASF' and not 'LASX'");
/// assert_eq!(Verdict::Fail, findings.verdict());
/// assert_eq!(2, findings.len());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Findings {
    findings: Vec<Finding>,
    /// The description of the resolved coordinate reference system.
    pub crs_description: String,
}

impl Findings {
    /// Appends a failure.
    pub fn fail(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.push(Severity::Fail, field, message);
    }

    /// Appends a warning.
    pub fn warn(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.push(Severity::Warning, field, message);
    }

    /// Appends a finding of the given severity.
    pub fn push(&mut self, severity: Severity, field: impl Into<String>, message: impl Into<String>) {
        self.findings.push(Finding {
            severity,
            field: field.into(),
            message: message.into(),
        });
    }

    /// Returns the findings in the order they were reported.
    pub fn iter(&self) -> std::slice::Iter<'_, Finding> {
        self.findings.iter()
    }

    /// Returns the number of findings.
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    /// Are there no findings?
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Returns the failures.
    pub fn fails(&self) -> impl Iterator<Item = &Finding> {
        self.iter().filter(|f| f.severity == Severity::Fail)
    }

    /// Returns the warnings.
    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.iter().filter(|f| f.severity == Severity::Warning)
    }

    /// Returns the findings about one field.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Finding> {
        self.iter().filter(move |f| f.field == field)
    }

    /// The worst severity reported, as a verdict.
    pub fn verdict(&self) -> Verdict {
        match self.iter().map(|f| f.severity).max() {
            None => Verdict::Pass,
            Some(Severity::Warning) => Verdict::Warning,
            Some(Severity::Fail) => Verdict::Fail,
        }
    }
}

impl Default for Findings {
    fn default() -> Findings {
        Findings {
            findings: Vec::new(),
            crs_description: UNKNOWN_CRS_DESCRIPTION.to_string(),
        }
    }
}

impl<'a> IntoIterator for &'a Findings {
    type Item = &'a Finding;
    type IntoIter = std::slice::Iter<'a, Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_kept() {
        let mut findings = Findings::default();
        findings.fail("a", "1");
        findings.warn("b", "2");
        findings.fail("a", "3");
        let messages: Vec<_> = findings.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(vec!["1", "2", "3"], messages);
        assert_eq!(2, findings.fails().count());
        assert_eq!(1, findings.warnings().count());
        assert_eq!(2, findings.for_field("a").count());
    }

    #[test]
    fn default_crs_description() {
        assert_eq!(
            "not valid or not specified",
            Findings::default().crs_description
        );
    }

    #[test]
    fn display() {
        let finding = Finding {
            severity: Severity::Fail,
            field: "min x".to_string(),
            message: "should be 1.00 and not 2.00".to_string(),
        };
        assert_eq!("fail: min x: should be 1.00 and not 2.00", finding.to_string());
    }
}
