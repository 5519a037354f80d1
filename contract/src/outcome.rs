//! Discriminated result of one API call.
//!
//! DESIGN
//! ======
//! The API speaks a small status-code contract: 2xx carries the payload,
//! 422 carries `{field: [messages]}`, 401/403 mean "not authorized", and any
//! other status may carry `{error: string}`. [`ApiOutcome::from_response`]
//! folds a raw status + body into exactly one of those cases so callers
//! never inspect status codes themselves.

#[cfg(test)]
#[path = "outcome_test.rs"]
mod outcome_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Transport or parse failure: the call never produced a usable response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the response could not be read.
    #[error("network request failed: {0}")]
    Network(String),
    /// The response body was not the JSON shape the caller expected.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Per-field validation messages from a 422 response, in body order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: Vec<(String, Vec<String>)>,
}

impl ValidationErrors {
    /// Read a `{field: [messages]}` body. A bare string value counts as one
    /// message; anything else is ignored.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::default();
        };
        let fields = map
            .iter()
            .filter_map(|(field, messages)| {
                let messages: Vec<String> = match messages {
                    Value::Array(items) => items.iter().filter_map(Value::as_str).map(str::to_owned).collect(),
                    Value::String(message) => vec![message.clone()],
                    _ => return None,
                };
                (!messages.is_empty()).then(|| (field.clone(), messages))
            })
            .collect();
        Self { fields }
    }

    /// Build from explicit pairs.
    #[must_use]
    pub fn from_fields<I, F, M>(fields: I) -> Self
    where
        I: IntoIterator<Item = (F, Vec<M>)>,
        F: Into<String>,
        M: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(field, messages)| (field.into(), messages.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }

    /// Every message, field by field.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().flat_map(|(_, messages)| messages.iter().map(String::as_str))
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&[String]> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, messages)| messages.as_slice())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages().next().is_none()
    }
}

/// One of the five ways an API call can end.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiOutcome<T> {
    Success(T),
    Validation(ValidationErrors),
    Unauthorized { status: u16, message: Option<String> },
    Failed { status: u16, message: Option<String> },
    Transport(ApiError),
}

impl<T: DeserializeOwned> ApiOutcome<T> {
    /// Classify a raw response.
    ///
    /// An empty body reads as JSON `null`, so a 2xx with no content decodes
    /// into `()`, `Option<_>` or [`Value`]. Error bodies that are not JSON
    /// are treated as carrying no server message.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = parse_body(body);

        if (200..300).contains(&status) {
            return match parsed {
                Ok(value) => serde_json::from_value(value)
                    .map_or_else(|e| Self::Transport(ApiError::Decode(e.to_string())), Self::Success),
                Err(e) => Self::Transport(e),
            };
        }

        let value = parsed.ok();
        match status {
            422 => {
                let errors = value.as_ref().map(ValidationErrors::from_value).unwrap_or_default();
                if errors.is_empty() {
                    Self::Failed { status, message: server_message(value.as_ref()) }
                } else {
                    Self::Validation(errors)
                }
            }
            401 | 403 => Self::Unauthorized { status, message: server_message(value.as_ref()) },
            _ => Self::Failed { status, message: server_message(value.as_ref()) },
        }
    }
}

impl<T> ApiOutcome<T> {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Transform the success payload, keeping every failure case as is.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiOutcome<U> {
        match self {
            Self::Success(value) => ApiOutcome::Success(f(value)),
            Self::Validation(errors) => ApiOutcome::Validation(errors),
            Self::Unauthorized { status, message } => ApiOutcome::Unauthorized { status, message },
            Self::Failed { status, message } => ApiOutcome::Failed { status, message },
            Self::Transport(error) => ApiOutcome::Transport(error),
        }
    }
}

fn parse_body(body: &str) -> Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn server_message(value: Option<&Value>) -> Option<String> {
    value?
        .get("error")
        .and_then(Value::as_str)
        .filter(|message| !message.trim().is_empty())
        .map(str::to_owned)
}
