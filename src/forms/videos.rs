use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::types::{VideoAuthor, VideoTitle, ViewCount, YoutubeId};
use crate::domain::video::NewVideo;

const REQUIRED: &str = "This field is required.";

fn validation_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(validation_error("required", REQUIRED));
    }
    Ok(())
}

fn validate_youtube_id(value: &str) -> Result<(), ValidationError> {
    validate_required(value)?;
    if value.trim().chars().any(char::is_whitespace) {
        return Err(validation_error(
            "whitespace",
            "Video id cannot contain spaces.",
        ));
    }
    Ok(())
}

fn validate_view_count(value: &str) -> Result<(), ValidationError> {
    validate_required(value)?;
    match value.trim().parse::<i64>() {
        Ok(count) if count >= 0 => Ok(()),
        Ok(_) => Err(validation_error(
            "negative",
            "Ensure this value is greater than or equal to 0.",
        )),
        Err(_) => Err(validation_error("invalid", "Enter a whole number.")),
    }
}

/// Raw fields of the "add video" form as submitted by the browser.
///
/// Every field is kept as text so that missing or malformed values reach
/// validation and can be shown back to the user unchanged.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct AddVideoForm {
    #[validate(
        custom(function = "validate_youtube_id"),
        length(max = 64, message = "Ensure this value has at most 64 characters.")
    )]
    pub youtube_id: String,
    #[validate(
        custom(function = "validate_required"),
        length(max = 255, message = "Ensure this value has at most 255 characters.")
    )]
    pub title: String,
    #[validate(
        custom(function = "validate_required"),
        length(max = 255, message = "Ensure this value has at most 255 characters.")
    )]
    pub author: String,
    #[validate(custom(function = "validate_view_count"))]
    pub view_count: String,
}

/// Field name to error messages, in field order for stable rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("Add video form has {} invalid field(s)", .fields.len())]
pub struct FormErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl FormErrors {
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.fields.get(field).map_or(&[], Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<ValidationErrors> for FormErrors {
    fn from(value: ValidationErrors) -> Self {
        let mut errors = Self::default();
        for (field, field_errors) in value.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                errors.add(field.to_string(), message);
            }
        }
        errors
    }
}

/// Typed values of a valid [`AddVideoForm`].
#[derive(Debug, Clone, PartialEq)]
pub struct AddVideoFormPayload {
    pub youtube_id: YoutubeId,
    pub title: VideoTitle,
    pub author: VideoAuthor,
    pub view_count: ViewCount,
}

impl AddVideoFormPayload {
    pub fn into_new_video(self) -> NewVideo {
        NewVideo {
            youtube_id: self.youtube_id,
            title: self.title,
            author: self.author,
            view_count: self.view_count,
            created_at: Utc::now().naive_utc(),
        }
    }
}

impl TryFrom<&AddVideoForm> for AddVideoFormPayload {
    type Error = FormErrors;

    fn try_from(form: &AddVideoForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let mut errors = FormErrors::default();
        let youtube_id = YoutubeId::new(form.youtube_id.as_str())
            .map_err(|e| errors.add("youtube_id", e.to_string()))
            .ok();
        let title = VideoTitle::new(form.title.as_str())
            .map_err(|e| errors.add("title", e.to_string()))
            .ok();
        let author = VideoAuthor::new(form.author.as_str())
            .map_err(|e| errors.add("author", e.to_string()))
            .ok();
        let view_count = form
            .view_count
            .trim()
            .parse::<i64>()
            .map_err(|e| e.to_string())
            .and_then(|count| ViewCount::new(count).map_err(|e| e.to_string()))
            .map_err(|message| errors.add("view_count", message))
            .ok();

        match (youtube_id, title, author, view_count) {
            (Some(youtube_id), Some(title), Some(author), Some(view_count)) => Ok(Self {
                youtube_id,
                title,
                author,
                view_count,
            }),
            _ => Err(errors),
        }
    }
}
