use crate::configuration::{FormSettings, Settings};
use crate::page::{MessageRegion, Navigator, RegistrationForm};
use crate::registration_client::RegistrationClient;
use crate::submission_handler::SubmissionHandler;
use std::sync::Arc;

/// The elements of a page a form handler is bound to.
#[derive(Clone)]
pub struct PageElements {
    pub form: Arc<dyn RegistrationForm>,
    pub message_region: Arc<dyn MessageRegion>,
    pub navigator: Arc<dyn Navigator>,
}

/// Binds a handler to the registration form: posts to `registration.endpoint`
/// and leads to `registration.success_redirect`.
pub fn bind_registration_form(
    configuration: &Settings,
    page: PageElements,
) -> Result<SubmissionHandler, anyhow::Error> {
    bind(configuration, configuration.registration.clone(), page)
}

/// Binds a handler to the login form, which answers with the same
/// `{status, message}` replies as registration.
pub fn bind_login_form(
    configuration: &Settings,
    page: PageElements,
) -> Result<SubmissionHandler, anyhow::Error> {
    bind(configuration, configuration.login.clone(), page)
}

fn bind(
    configuration: &Settings,
    form_settings: FormSettings,
    page: PageElements,
) -> Result<SubmissionHandler, anyhow::Error> {
    let client = RegistrationClient::new(
        configuration.application.base_url.clone(),
        configuration.http_client.timeout(),
    )?;
    tracing::info!(
        endpoint = %form_settings.endpoint,
        success_redirect = %form_settings.success_redirect,
        "Bound a submission handler"
    );
    Ok(SubmissionHandler::new(
        client,
        form_settings,
        page.form,
        page.message_region,
        page.navigator,
    ))
}
