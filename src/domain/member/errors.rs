//! Member-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | DuplicateEmail | 409 |
//! | ValidationFailed | 400 |
//! | InvalidDate | 400 |
//! | InvalidPackage | 400 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, MemberId, ValidationError};
use crate::domain::membership::MembershipError;

/// Errors raised by member and attendance operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberError {
    /// No member with this id.
    NotFound(MemberId),

    /// Another member already uses this email address.
    DuplicateEmail(String),

    /// A form field failed validation.
    ValidationFailed { field: String, message: String },

    /// A date field is not a valid `YYYY-MM-DD` date.
    InvalidDate { field: String, value: String },

    /// The package cannot be used for this operation.
    InvalidPackage(String),

    /// Storage or other infrastructure failure.
    Infrastructure(String),
}

impl MemberError {
    pub fn not_found(id: MemberId) -> Self {
        MemberError::NotFound(id)
    }

    pub fn duplicate_email(email: impl Into<String>) -> Self {
        MemberError::DuplicateEmail(email.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        MemberError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn invalid_package(package: impl Into<String>) -> Self {
        MemberError::InvalidPackage(package.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        MemberError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            MemberError::NotFound(_) => ErrorCode::MemberNotFound,
            MemberError::DuplicateEmail(_) => ErrorCode::DuplicateMember,
            MemberError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            MemberError::InvalidDate { .. } => ErrorCode::InvalidDate,
            MemberError::InvalidPackage(_) => ErrorCode::InvalidPackage,
            MemberError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            MemberError::NotFound(id) => format!("Member not found: {}", id),
            MemberError::DuplicateEmail(email) => {
                format!("A member with email '{}' already exists", email)
            }
            MemberError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            MemberError::InvalidDate { field, value } => {
                format!("'{}' is not a valid YYYY-MM-DD date for '{}'", value, field)
            }
            MemberError::InvalidPackage(package) => format!("Unknown package: {}", package),
            MemberError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for MemberError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for MemberError {}

impl From<MembershipError> for MemberError {
    fn from(err: MembershipError) -> Self {
        match err {
            MembershipError::InvalidDate { field, value } => {
                MemberError::InvalidDate { field, value }
            }
            MembershipError::BirthDateInFuture { .. } => {
                MemberError::validation("birthdate", err.to_string())
            }
            MembershipError::InvalidPackage(package) => MemberError::InvalidPackage(package),
        }
    }
}

impl From<ValidationError> for MemberError {
    fn from(err: ValidationError) -> Self {
        MemberError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for MemberError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::MemberNotFound => match err.detail("member_id").map(str::parse::<MemberId>) {
                Some(Ok(id)) => MemberError::NotFound(id),
                _ => MemberError::Infrastructure(err.to_string()),
            },
            ErrorCode::DuplicateMember => {
                MemberError::DuplicateEmail(err.detail("email").unwrap_or_default().to_string())
            }
            ErrorCode::ValidationFailed => MemberError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            ErrorCode::InvalidDate => MemberError::InvalidDate {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                value: err.detail("value").map(str::to_string).unwrap_or(err.message),
            },
            ErrorCode::InvalidPackage => MemberError::InvalidPackage(err.message),
            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                MemberError::Infrastructure(err.to_string())
            }
        }
    }
}

impl From<MemberError> for DomainError {
    fn from(err: MemberError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn not_found_message_includes_id() {
        let err = MemberError::not_found(MemberId::from_db(12));
        assert_eq!(err.code(), ErrorCode::MemberNotFound);
        assert!(err.message().contains("12"));
    }

    #[test]
    fn display_matches_message() {
        let err = MemberError::invalid_package("7 Months");
        assert_eq!(format!("{}", err), err.message());
    }

    #[test]
    fn converts_invalid_date_from_calculator() {
        let err: MemberError = MembershipError::invalid_date("birthdate", "oops").into();
        assert_eq!(
            err,
            MemberError::InvalidDate {
                field: "birthdate".to_string(),
                value: "oops".to_string()
            }
        );
    }

    #[test]
    fn future_birthdate_becomes_validation_error() {
        let err: MemberError = MembershipError::BirthDateInFuture {
            birth_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            reference_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
        .into();
        assert!(matches!(
            err,
            MemberError::ValidationFailed { ref field, .. } if field == "birthdate"
        ));
    }

    #[test]
    fn converts_not_found_domain_error_with_member_id() {
        let domain = DomainError::new(ErrorCode::MemberNotFound, "Member not found")
            .with_detail("member_id", "5");
        let err: MemberError = domain.into();
        assert_eq!(err, MemberError::NotFound(MemberId::from_db(5)));
    }

    #[test]
    fn converts_duplicate_domain_error() {
        let domain = DomainError::new(ErrorCode::DuplicateMember, "duplicate")
            .with_detail("email", "a@b.com");
        let err: MemberError = domain.into();
        assert_eq!(err, MemberError::DuplicateEmail("a@b.com".to_string()));
    }

    #[test]
    fn database_errors_become_infrastructure() {
        let err: MemberError = DomainError::database("Failed to save member", "boom").into();
        assert!(matches!(err, MemberError::Infrastructure(_)));
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }
}
