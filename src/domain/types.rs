//! Strongly-typed value objects used by domain entities.
//!
//! Entities carry these wrappers instead of raw primitives so identifiers,
//! text lengths and counters are checked once, at the boundary where untyped
//! data enters the application.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A counter was negative.
    #[error("{0} must be zero or greater")]
    NegativeNumber(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// A string exceeded its maximum length in characters.
    #[error("{0} must be at most {1} characters long")]
    TooLong(&'static str, usize),
    /// A token contained whitespace.
    #[error("{0} cannot contain whitespace")]
    ContainsWhitespace(&'static str),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

fn require_max_chars(
    value: String,
    field: &'static str,
    max: usize,
) -> Result<String, TypeConstraintError> {
    if value.chars().count() > max {
        Err(TypeConstraintError::TooLong(field, max))
    } else {
        Ok(value)
    }
}

/// Generates a positive `i32` identifier backed by an `INTEGER` primary key.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }
    };
}

/// Generates a trimmed, non-empty text value with an upper length bound.
macro_rules! text_newtype {
    ($name:ident, $doc:expr, $field:expr, $max:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Maximum length in characters.
            pub const MAX_CHARS: usize = $max;

            /// Constructs a trimmed, non-empty value no longer than [`Self::MAX_CHARS`].
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = trim_and_require_non_empty(value, $field)?;
                require_max_chars(trimmed, $field, $max).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }
    };
}

id_newtype!(CategoryId, "Unique identifier for a category.", "category_id");
id_newtype!(VideoId, "Unique identifier for a video.", "video_id");

text_newtype!(CategoryName, "Display name of a category.", "category name", 100);
text_newtype!(VideoTitle, "Title of a video.", "title", 255);
text_newtype!(VideoAuthor, "Author or channel of a video.", "author", 255);

/// Identifier of a video on the external hosting platform.
///
/// Used verbatim inside embed and thumbnail URLs, so it may not contain
/// whitespace.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct YoutubeId(String);

impl YoutubeId {
    /// Maximum length in characters.
    pub const MAX_CHARS: usize = 64;

    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = trim_and_require_non_empty(value, "youtube id")?;
        if trimmed.chars().any(char::is_whitespace) {
            return Err(TypeConstraintError::ContainsWhitespace("youtube id"));
        }
        require_max_chars(trimmed, "youtube id", Self::MAX_CHARS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for YoutubeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for YoutubeId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Number of views reported for a video. Never negative.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ViewCount(i64);

impl ViewCount {
    pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
        if value >= 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NegativeNumber("view count"))
        }
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Display for ViewCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for ViewCount {
    type Error = TypeConstraintError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl PartialEq<i64> for ViewCount {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_text_values() {
        let title = VideoTitle::new("  Cats compilation  ").unwrap();
        assert_eq!(title.as_str(), "Cats compilation");
    }

    #[test]
    fn rejects_blank_text() {
        assert_eq!(
            VideoAuthor::new("   ").unwrap_err(),
            TypeConstraintError::EmptyString("author")
        );
    }

    #[test]
    fn rejects_overlong_text() {
        let name = "x".repeat(CategoryName::MAX_CHARS + 1);
        assert_eq!(
            CategoryName::new(name).unwrap_err(),
            TypeConstraintError::TooLong("category name", CategoryName::MAX_CHARS)
        );
    }

    #[test]
    fn rejects_non_positive_ids() {
        let err = VideoId::new(0).unwrap_err();
        assert_eq!(err, TypeConstraintError::NonPositiveId("video_id"));
    }

    #[test]
    fn youtube_id_rejects_inner_whitespace() {
        assert!(YoutubeId::new(" dQw4w9WgXcQ ").is_ok());
        assert_eq!(
            YoutubeId::new("dQw4 w9WgXcQ").unwrap_err(),
            TypeConstraintError::ContainsWhitespace("youtube id")
        );
    }

    #[test]
    fn view_count_allows_zero_but_not_negative() {
        assert_eq!(ViewCount::new(0).unwrap().get(), 0);
        assert_eq!(
            ViewCount::new(-1).unwrap_err(),
            TypeConstraintError::NegativeNumber("view count")
        );
    }
}
