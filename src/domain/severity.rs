use std::fmt::Formatter;

/// Visual style of an alert shown in the message region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

impl Severity {
    /// Maps the `status` field of a server reply onto a severity.
    ///
    /// Anything that is not `success`, `info` or `warning` falls back to
    /// `Danger`, including a missing status.
    pub fn from_status(status: Option<&str>) -> Severity {
        match status {
            Some("success") => Severity::Success,
            Some("info") => Severity::Info,
            Some("warning") => Severity::Warning,
            _ => Severity::Danger,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
