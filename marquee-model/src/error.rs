use std::fmt::{self, Display};

use crate::image::ImageCategory;

/// Errors produced by the raw record mapper and image size parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A field the domain model cannot exist without was absent on the wire.
    MissingField {
        record: &'static str,
        field: &'static str,
    },
    UnknownSizeToken {
        category: ImageCategory,
        token: String,
    },
    SizeCategoryMismatch {
        expected: ImageCategory,
        actual: ImageCategory,
    },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::MissingField { record, field } => {
                write!(f, "{record} record is missing required field `{field}`")
            }
            ModelError::UnknownSizeToken { category, token } => {
                write!(f, "unknown {category} size token: {token:?}")
            }
            ModelError::SizeCategoryMismatch { expected, actual } => write!(
                f,
                "{actual} size used where a {expected} size is required"
            ),
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
