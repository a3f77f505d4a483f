//! The page elements a submission handler works against.
//!
//! The handler never looks elements up by itself; the form, the message
//! region and the navigator are handed to it when it is bound.

use crate::domain::{FieldValue, FilePart, FormSubmission};
use std::sync::{Mutex, PoisonError, RwLock};

pub const REGISTRATION_FORM_ID: &str = "registrationForm";
pub const MESSAGE_REGION_ID: &str = "message";

/// A form whose current field values can be read at submit time.
pub trait RegistrationForm: Send + Sync {
    fn snapshot(&self) -> FormSubmission;
}

/// The element whose content is replaced to show the submission status.
pub trait MessageRegion: Send + Sync {
    fn set_inner_html(&self, html: String);
}

/// Moves the page to another location.
pub trait Navigator: Send + Sync {
    fn navigate(&self, location: &str);
}

/// The submit event dispatched by a form.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops the browser from performing its own form submission.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// An in-process form element holding inputs by name.
#[derive(Debug)]
pub struct FormElement {
    id: String,
    fields: RwLock<Vec<(String, FieldValue)>>,
}

impl FormElement {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: RwLock::new(Vec::new()),
        }
    }

    pub fn registration() -> Self {
        Self::new(REGISTRATION_FORM_ID)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Sets the value of a text input, adding the input if the form lacks it.
    pub fn set_value(&self, name: &str, value: impl Into<String>) {
        self.set(name, FieldValue::Text(value.into()));
    }

    /// Selects a file in a file input, adding the input if the form lacks it.
    pub fn attach_file(&self, name: &str, file: FilePart) {
        self.set(name, FieldValue::File(file));
    }

    pub fn clear(&self) {
        self.fields
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn set(&self, name: &str, value: FieldValue) {
        let mut fields = self.fields.write().unwrap_or_else(PoisonError::into_inner);
        match fields.iter_mut().find(|(field, _)| field == name) {
            Some((_, current)) => *current = value,
            None => fields.push((name.to_string(), value)),
        }
    }
}

impl RegistrationForm for FormElement {
    fn snapshot(&self) -> FormSubmission {
        let fields = self.fields.read().unwrap_or_else(PoisonError::into_inner);
        let mut submission = FormSubmission::new();
        for (name, value) in fields.iter() {
            match value {
                FieldValue::Text(text) => submission.push_text(name.as_str(), text.as_str()),
                FieldValue::File(file) => submission.push_file(name.as_str(), file.clone()),
            }
        }
        submission
    }
}

/// Message region that remembers everything written into it.
#[derive(Debug)]
pub struct InMemoryMessageRegion {
    id: String,
    history: Mutex<Vec<String>>,
}

impl InMemoryMessageRegion {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            history: Mutex::new(Vec::new()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current content, `None` until something was written.
    pub fn inner_html(&self) -> Option<String> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Every content the region held, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for InMemoryMessageRegion {
    fn default() -> Self {
        Self::new(MESSAGE_REGION_ID)
    }
}

impl MessageRegion for InMemoryMessageRegion {
    fn set_inner_html(&self, html: String) {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(html);
    }
}

/// Navigator that records locations instead of leaving the page.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, location: &str) {
        self.visits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(location.to_string());
    }
}
