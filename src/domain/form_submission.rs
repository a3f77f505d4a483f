/// A file selected in a file input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    File(FilePart),
}

/// Field name/value pairs collected from a form at submit time, in the order
/// the form holds them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    fields: Vec<(String, FieldValue)>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields
            .push((name.into(), FieldValue::Text(value.into())));
    }

    pub fn push_file(&mut self, name: impl Into<String>, file: FilePart) {
        self.fields.push((name.into(), FieldValue::File(file)));
    }

    pub fn fields(&self) -> &[(String, FieldValue)] {
        &self.fields
    }

    /// First text value recorded under `name`.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|(field, value)| match value {
            FieldValue::Text(text) if field == name => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl IntoIterator for FormSubmission {
    type Item = (String, FieldValue);
    type IntoIter = std::vec::IntoIter<(String, FieldValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
