use crate::domain::{FieldValue, FormSubmission, ResponseBody, ServerResponse};
use crate::utils::error_chain_fmt;
use anyhow::Context;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::fmt::Formatter;
use std::time::Duration;

#[derive(thiserror::Error)]
pub enum SubmissionError {
    #[error("Failed to exchange the form submission with the server")]
    Transport(#[source] reqwest::Error),
    #[error("The server replied with a body that could not be read")]
    MalformedBody(#[source] anyhow::Error),
    #[error("A file in the form has an invalid content type")]
    InvalidFilePart(#[source] reqwest::Error),
}

impl std::fmt::Debug for SubmissionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Posts form submissions as multipart bodies.
#[derive(Debug)]
pub struct RegistrationClient {
    http_client: Client,
    base_url: String,
}

impl RegistrationClient {
    /// Without a `timeout` a request waits for as long as the server takes.
    pub fn new(base_url: String, timeout: Option<Duration>) -> Result<Self, anyhow::Error> {
        reqwest::Url::parse(&base_url)
            .with_context(|| format!("{} is not a valid base url", base_url))?;
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().context("Failed to build the http client")?;
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Sends `submission` to `endpoint` and reads the `{status, message}` reply.
    ///
    /// Error status codes are not failures: the body still describes the
    /// outcome.
    #[tracing::instrument(
        name = "Posting a form submission",
        skip(self, submission),
        fields(field_count = submission.len(), status_code = tracing::field::Empty)
    )]
    pub async fn submit(
        &self,
        endpoint: &str,
        submission: FormSubmission,
    ) -> Result<ServerResponse, SubmissionError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let form = multipart_form(submission)?;
        let response = self
            .http_client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(SubmissionError::Transport)?;

        let status_code = response.status().as_u16();
        tracing::Span::current().record("status_code", &status_code);

        let raw_body = response.text().await.map_err(SubmissionError::Transport)?;
        let body = ResponseBody::parse(&raw_body).map_err(SubmissionError::MalformedBody)?;
        Ok(ServerResponse { status_code, body })
    }
}

fn multipart_form(submission: FormSubmission) -> Result<Form, SubmissionError> {
    let mut form = Form::new();
    for (name, value) in submission {
        form = match value {
            FieldValue::Text(text) => form.text(name, text),
            FieldValue::File(file) => {
                let mut part = Part::bytes(file.bytes).file_name(file.file_name);
                if let Some(content_type) = file.content_type {
                    part = part
                        .mime_str(&content_type)
                        .map_err(SubmissionError::InvalidFilePart)?;
                }
                form.part(name, part)
            }
        };
    }
    Ok(form)
}
