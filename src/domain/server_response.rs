use anyhow::Context;
use serde_json::Value;

/// Reply to a form submission: the transport status code plus the JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerResponse {
    pub status_code: u16,
    pub body: ResponseBody,
}

/// `{status, message}` as sent by the server. Both fields are optional on the
/// wire; a non-string `status` is treated as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseBody {
    pub status: Option<String>,
    pub message: Option<String>,
}

impl ResponseBody {
    /// Parses a raw reply body.
    ///
    /// Fails when the body is not JSON or is the JSON literal `null`. Any other
    /// JSON value parses; fields that cannot be found are left empty.
    pub fn parse(raw: &str) -> Result<ResponseBody, anyhow::Error> {
        let value: Value =
            serde_json::from_str(raw).context("The response body is not valid JSON")?;
        match value {
            Value::Null => Err(anyhow::anyhow!("The response body is `null`")),
            Value::Object(mut fields) => Ok(ResponseBody {
                status: match fields.remove("status") {
                    Some(Value::String(status)) => Some(status),
                    _ => None,
                },
                message: match fields.remove("message") {
                    Some(Value::String(message)) => Some(message),
                    Some(Value::Null) | None => None,
                    Some(other) => Some(other.to_string()),
                },
            }),
            _ => Ok(ResponseBody::default()),
        }
    }
}
