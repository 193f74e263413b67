//! Member profile: the fields entered at the front desk.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::MemberError;
use crate::domain::membership::parse_date;

/// Raw form input for a member, exactly as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberInput {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub birthdate: Option<String>,
    #[serde(default)]
    pub actual_starting_date: Option<String>,
    pub starting_date: String,
    pub package: String,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Validated member profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberProfile {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub birthdate: Option<NaiveDate>,
    /// Day the member actually first trained, if different from the paid start.
    pub actual_starting_date: Option<NaiveDate>,
    pub starting_date: NaiveDate,
    pub package_label: String,
    pub comment: Option<String>,
}

impl MemberProfile {
    /// Validates raw form input.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` for a blank name, blank package or malformed email
    /// - `InvalidDate` for any date field that is not `YYYY-MM-DD`
    pub fn parse(input: MemberInput) -> Result<Self, MemberError> {
        let name = capitalize_name(&input.name);
        if name.is_empty() {
            return Err(MemberError::validation("name", "Name is required"));
        }

        let email = non_blank(input.email);
        if let Some(email) = &email {
            if !email.contains('@') {
                return Err(MemberError::validation("email", "Email must contain '@'"));
            }
        }

        let package_label = input.package.trim().to_string();
        if package_label.is_empty() {
            return Err(MemberError::validation("package", "Package is required"));
        }

        let starting_date = parse_date("starting_date", &input.starting_date)?;
        let birthdate = optional_date("birthdate", input.birthdate)?;
        let actual_starting_date =
            optional_date("actual_starting_date", input.actual_starting_date)?;

        Ok(Self {
            name,
            email,
            phone: non_blank(input.phone),
            gender: non_blank(input.gender),
            birthdate,
            actual_starting_date,
            starting_date,
            package_label,
            comment: non_blank(input.comment),
        })
    }
}

/// Trims a name and capitalizes it: first letter upper case, the rest lower.
pub fn capitalize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn optional_date(field: &str, value: Option<String>) -> Result<Option<NaiveDate>, MemberError> {
    match non_blank(value) {
        Some(raw) => Ok(Some(parse_date(field, &raw)?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> MemberInput {
        MemberInput {
            name: "  ahmed  ".to_string(),
            email: Some("ahmed@example.com".to_string()),
            phone: Some("01000000000".to_string()),
            gender: Some("male".to_string()),
            birthdate: Some("2000-06-15".to_string()),
            actual_starting_date: Some("".to_string()),
            starting_date: "2024-01-01".to_string(),
            package: "3 Months".to_string(),
            comment: None,
        }
    }

    #[test]
    fn parse_normalizes_fields() {
        let profile = MemberProfile::parse(input()).unwrap();
        assert_eq!(profile.name, "Ahmed");
        assert_eq!(profile.actual_starting_date, None);
        assert_eq!(profile.birthdate, NaiveDate::from_ymd_opt(2000, 6, 15));
        assert_eq!(profile.package_label, "3 Months");
    }

    #[test]
    fn blank_name_is_rejected() {
        let result = MemberProfile::parse(MemberInput {
            name: "   ".to_string(),
            ..input()
        });
        assert!(matches!(
            result,
            Err(MemberError::ValidationFailed { ref field, .. }) if field == "name"
        ));
    }

    #[test]
    fn malformed_birthdate_is_invalid_date() {
        let result = MemberProfile::parse(MemberInput {
            birthdate: Some("15/06/2000".to_string()),
            ..input()
        });
        assert!(matches!(
            result,
            Err(MemberError::InvalidDate { ref field, .. }) if field == "birthdate"
        ));
    }

    #[test]
    fn malformed_starting_date_is_invalid_date() {
        let result = MemberProfile::parse(MemberInput {
            starting_date: "not-a-date".to_string(),
            ..input()
        });
        assert!(matches!(result, Err(MemberError::InvalidDate { .. })));
    }

    #[test]
    fn email_without_at_sign_is_rejected() {
        let result = MemberProfile::parse(MemberInput {
            email: Some("nobody".to_string()),
            ..input()
        });
        assert!(result.is_err());
    }

    #[test]
    fn capitalize_lowers_the_rest_of_the_name() {
        assert_eq!(capitalize_name("mOHAMED ali"), "Mohamed ali");
        assert_eq!(capitalize_name(""), "");
    }
}
