#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum CreateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

impl From<UpdateError> for CreateError {
    fn from(value: UpdateError) -> Self {
        match value {
            UpdateError::Validation(validation) => CreateError::Validation(validation),
            UpdateError::Storage(storage) => CreateError::Storage(storage),
            UpdateError::Other(other) => CreateError::Other(other),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum UpdateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum DeleteError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

/// Failure of the backend or of the transport to it.
#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("no connection")]
    NoConnection,
    #[error("no session")]
    NoSession,
    /// Non-2xx response. The message is taken from the response body if possible.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

/// Invalid user input, detected before any request is made.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error("Invalid {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_create_error_from_update_error() {
        assert!(matches!(
            CreateError::from(UpdateError::Validation(ValidationError::Missing(vec!["name"]))),
            CreateError::Validation(ValidationError::Missing(fields)) if fields == vec!["name"]
        ));
        assert!(matches!(
            CreateError::from(UpdateError::Storage(StorageError::NoSession)),
            CreateError::Storage(StorageError::NoSession)
        ));
        assert!(matches!(
            CreateError::from(UpdateError::Other("foo".into())),
            CreateError::Other(error) if error.to_string() == "foo"
        ));
    }

    #[test]
    fn test_storage_error_status_message() {
        assert_eq!(
            StorageError::Status {
                status: 400,
                message: "exercise_id is required".to_string()
            }
            .to_string(),
            "exercise_id is required"
        );
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::Missing(vec!["client", "exercise"]).to_string(),
            "Missing: client, exercise"
        );
        assert_eq!(
            ValidationError::Invalid {
                field: "email",
                reason: "must contain @".to_string()
            }
            .to_string(),
            "Invalid email: must contain @"
        );
    }
}
