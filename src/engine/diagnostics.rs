use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Category of a non-fatal finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticKind {
    /// A top-level attribute or field entry the registry does not know.
    UnknownAttribute,
    /// A sub-key that is not declared for its struct attribute.
    UnknownSubfield,
    /// A metadata block name that is not part of the schema.
    UnknownBlock,
    /// A field entry that lacks `typeName`, repeats an earlier entry, or
    /// carries a value of the wrong shape.
    MalformedEntry,
    /// A known field filed under a block other than its own.
    MisplacedField,
    /// A required attribute is absent or empty.
    MissingRequired,
    /// A struct element violates a completeness rule.
    IncompleteGroup,
    /// A structural failure folded into a report by `is_valid`.
    Structure,
}

impl DiagnosticKind {
    /// Whether a finding of this kind makes a document invalid.
    pub fn is_violation(&self) -> bool {
        matches!(
            self,
            DiagnosticKind::MissingRequired
                | DiagnosticKind::IncompleteGroup
                | DiagnosticKind::Structure
        )
    }
}

/// One finding, addressed by a JSON-pointer-like path into the flat map or document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub path: String,
    pub message: String,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Ordered collection of findings. Every push is also logged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        kind: DiagnosticKind,
        path: impl Into<String>,
        message: impl Into<String>,
    ) {
        let diagnostic = Diagnostic {
            kind,
            path: path.into(),
            message: message.into(),
        };

        log::warn!("{}", diagnostic);
        self.0.push(diagnostic);
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }

    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter().filter(move |d| d.kind == kind)
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.0
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A transformation result together with everything worth reporting about it.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion<T> {
    pub value: T,
    pub diagnostics: Diagnostics,
}

impl<T> Conversion<T> {
    pub fn new(value: T, diagnostics: Diagnostics) -> Self {
        Conversion { value, diagnostics }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Conversion<U> {
        Conversion {
            value: f(self.value),
            diagnostics: self.diagnostics,
        }
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// Outcome of a validation run. Valid when no violation was recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Diagnostics,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.kind.is_violation())
    }

    pub fn violations(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.kind.is_violation())
    }
}
