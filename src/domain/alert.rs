use crate::domain::Severity;

pub const PROCESSING_MESSAGE: &str = "Processing...";
pub const FAILURE_MESSAGE: &str = "An error occurred.";

/// A status message as it is shown in the message region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    severity: Severity,
    message: String,
}

impl Alert {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    /// Shown as soon as a submission starts.
    pub fn processing() -> Self {
        Self::new(Severity::Info, PROCESSING_MESSAGE)
    }

    /// Shown when the request fails or the reply cannot be read.
    pub fn failure() -> Self {
        Self::new(Severity::Danger, FAILURE_MESSAGE)
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Markup fragment written into the message region. The message text is
    /// escaped, the server does not get to inject markup.
    pub fn to_html(&self) -> String {
        format!(
            r#"<div class="alert alert-{severity}">{message}</div>"#,
            severity = self.severity,
            message = htmlescape::encode_minimal(&self.message)
        )
    }
}
