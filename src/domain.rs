mod alert;
mod form_submission;
mod server_response;
mod severity;

pub use alert::Alert;
pub use form_submission::{FieldValue, FilePart, FormSubmission};
pub use server_response::{ResponseBody, ServerResponse};
pub use severity::Severity;
