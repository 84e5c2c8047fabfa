use super::AttrKind;
use core::fmt;

/// Why a path lookup into an [`Attr`](super::Attr) did not yield a usable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Some segment of the path does not exist, traverses a non-object, or ends on `null`.
    Absent { path: String },

    /// The path exists but ends on a value of the wrong kind.
    WrongShape { path: String, expected: AttrKind, found: AttrKind },
}

impl FieldError {
    #[must_use]
    pub fn absent(path: &[&str]) -> Self {
        Self::Absent { path: format_path(path) }
    }

    #[must_use]
    pub fn wrong_shape(path: &[&str], expected: AttrKind, found: AttrKind) -> Self {
        Self::WrongShape {
            path: format_path(path),
            expected,
            found,
        }
    }

    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent { .. })
    }

    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Absent { path } | Self::WrongShape { path, .. } => path,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent { path } => write!(f, "{path} is not set"),
            Self::WrongShape { path, expected, found } => write!(f, "{path} should be {expected} but is {found}"),
        }
    }
}

impl core::error::Error for FieldError {}

/// Render a field path the way kubectl's JSONPath does, e.g. `.spec.quota`.
#[must_use]
pub fn format_path(path: &[&str]) -> String {
    let mut out = String::with_capacity(path.iter().map(|s| s.len() + 1).sum());
    for segment in path {
        out.push('.');
        out.push_str(segment);
    }
    out
}
