use serde::Deserialize;
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

/// Joins the messages of every failed field rule with `"; "`. Identical messages from
/// several fields are reported once.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = Vec::new();
    for errs in errors.field_errors().values() {
        for message in errs.iter().filter_map(|e| e.message.as_ref()) {
            let message = message.to_string();
            if !messages.contains(&message) {
                messages.push(message);
            }
        }
    }
    messages.join("; ")
}

fn blank(message: &'static str) -> ValidationError {
    ValidationError::new("blank").with_message(Cow::Borrowed(message))
}

fn query_present(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(blank("No query provided"));
    }
    Ok(())
}

fn score_query_present(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(blank("Both user_query and solution_query required"));
    }
    Ok(())
}

/// Body of `/execute` and `/validate`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct QueryRequest {
    #[serde(default)]
    #[validate(custom(function = "query_present"))]
    pub query: String,
}

/// Body of `/score`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ScoreRequest {
    #[serde(default)]
    #[validate(custom(function = "score_query_present"))]
    pub user_query: String,
    #[serde(default)]
    #[validate(custom(function = "score_query_present"))]
    pub solution_query: String,
}
