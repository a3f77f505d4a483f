use crate::configuration::FormSettings;
use crate::domain::{Alert, ServerResponse, Severity};
use crate::page::{MessageRegion, Navigator, RegistrationForm, SubmitEvent};
use crate::registration_client::RegistrationClient;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Where a submission cycle currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Processing,
    Resolved,
}

/// Decides which severity a server reply is shown with.
pub trait SeverityPolicy: Send + Sync {
    fn resolve(&self, response: &ServerResponse) -> Severity;
}

/// Reads the `status` field of the body and ignores the status code.
#[derive(Debug, Default, Clone, Copy)]
pub struct BodyStatusPolicy;

impl SeverityPolicy for BodyStatusPolicy {
    fn resolve(&self, response: &ServerResponse) -> Severity {
        Severity::from_status(response.body.status.as_deref())
    }
}

/// How a submission cycle ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The server replied with a readable body.
    Answered {
        response: ServerResponse,
        alert: Alert,
        redirect_scheduled: bool,
    },
    /// The request failed or the reply could not be read.
    Failed { alert: Alert },
}

impl SubmissionOutcome {
    pub fn alert(&self) -> &Alert {
        match self {
            SubmissionOutcome::Answered { alert, .. } => alert,
            SubmissionOutcome::Failed { alert } => alert,
        }
    }
}

/// Handles submit events of one form.
///
/// Each submission shows a processing message, posts the form, and replaces
/// the message with the outcome. A successful submission navigates away after
/// a delay; that navigation is cancelled if another submission starts first.
pub struct SubmissionHandler {
    client: RegistrationClient,
    settings: FormSettings,
    form: Arc<dyn RegistrationForm>,
    message_region: Arc<dyn MessageRegion>,
    navigator: Arc<dyn Navigator>,
    severity_policy: Box<dyn SeverityPolicy>,
    state: Mutex<SubmissionState>,
    pending_redirect: Mutex<Option<JoinHandle<()>>>,
}

impl SubmissionHandler {
    pub fn new(
        client: RegistrationClient,
        settings: FormSettings,
        form: Arc<dyn RegistrationForm>,
        message_region: Arc<dyn MessageRegion>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            client,
            settings,
            form,
            message_region,
            navigator,
            severity_policy: Box::new(BodyStatusPolicy),
            state: Mutex::new(SubmissionState::Idle),
            pending_redirect: Mutex::new(None),
        }
    }

    pub fn with_severity_policy(mut self, policy: impl SeverityPolicy + 'static) -> Self {
        self.severity_policy = Box::new(policy);
        self
    }

    pub fn state(&self) -> SubmissionState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether a navigation is scheduled and has not happened yet.
    pub fn redirect_pending(&self) -> bool {
        self.pending_redirect
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map_or(false, |handle| !handle.is_finished())
    }

    /// Must be called from within a tokio runtime: a successful submission
    /// spawns the delayed navigation.
    #[tracing::instrument(
        name = "Handling a form submission",
        skip(self, event),
        fields(submission_id = %Uuid::new_v4())
    )]
    pub async fn on_submit(&self, event: &mut SubmitEvent) -> SubmissionOutcome {
        event.prevent_default();
        self.cancel_pending_redirect();
        self.set_state(SubmissionState::Processing);
        self.render(&Alert::processing());

        let submission = self.form.snapshot();
        let outcome = match self.client.submit(&self.settings.endpoint, submission).await {
            Ok(response) => {
                let severity = self.severity_policy.resolve(&response);
                let alert = Alert::new(severity, response.body.message.clone().unwrap_or_default());
                self.render(&alert);
                let redirect_scheduled = severity == Severity::Success;
                if redirect_scheduled {
                    self.schedule_redirect();
                }
                SubmissionOutcome::Answered {
                    response,
                    alert,
                    redirect_scheduled,
                }
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Form submission failed"
                );
                let alert = Alert::failure();
                self.render(&alert);
                SubmissionOutcome::Failed { alert }
            }
        };

        self.set_state(SubmissionState::Resolved);
        outcome
    }

    fn render(&self, alert: &Alert) {
        self.message_region.set_inner_html(alert.to_html());
    }

    fn set_state(&self, state: SubmissionState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }

    fn schedule_redirect(&self) {
        let navigator = Arc::clone(&self.navigator);
        let location = self.settings.success_redirect.clone();
        // The deadline is fixed here, not when the task first runs.
        let delay = tokio::time::sleep(self.settings.redirect_delay());
        let handle = tokio::spawn(async move {
            delay.await;
            tracing::info!(location = %location, "Redirecting after a successful submission");
            navigator.navigate(&location);
        });

        let previous = self
            .pending_redirect
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(handle);
        if let Some(previous) = previous {
            previous.abort();
        }
    }

    fn cancel_pending_redirect(&self) {
        let pending = self
            .pending_redirect
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = pending {
            if !handle.is_finished() {
                tracing::info!("Cancelling the redirect of the previous submission");
            }
            handle.abort();
        }
    }
}

impl Drop for SubmissionHandler {
    fn drop(&mut self) {
        self.cancel_pending_redirect();
    }
}
