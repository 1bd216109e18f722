//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// The value contained a path separator where a single segment is required.
    #[error("{field} must be a single path segment, got {value:?}")]
    NotASegment { field: &'static str, value: String },

    /// The year cannot be represented as a calendar.
    #[error("year {year} is out of range")]
    YearOutOfRange { year: i32 },
}

/// Generates a validated string newtype with common trait implementations.
///
/// Values are embedded as single URL path segments, so slashes and
/// surrounding whitespace are rejected up front.
macro_rules! define_path_segment {
    (
        $(#[$meta:meta])*
        $name:ident, $field_name:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a new value after validation.
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(ValidationError::Empty { field: $field_name });
                }
                if value.contains('/') || value.trim() != value {
                    return Err(ValidationError::NotASegment {
                        field: $field_name,
                        value,
                    });
                }
                Ok(Self(value))
            }

            /// Returns the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_path_segment!(
    /// A validated GitHub login.
    Username, "username"
);

define_path_segment!(
    /// A validated repository name, without the owner prefix.
    RepoName, "repository name"
);
