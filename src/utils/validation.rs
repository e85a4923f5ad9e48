use crate::domain::subject::Subject;
use crate::utils::error::{ReportCardError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ReportCardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ReportCardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReportCardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Checks a raw subject code against the closed set and returns the parsed subject.
pub fn validate_subject_code(field_name: &str, code: &str) -> Result<Subject> {
    code.parse::<Subject>()
        .map_err(|_| ReportCardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: code.to_string(),
            reason: format!(
                "Unknown subject. Valid codes: {}",
                Subject::ALL
                    .iter()
                    .map(|s| s.code())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "report-card.toml").is_ok());
        assert!(validate_path("config", "").is_err());
        assert!(validate_path("config", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("student.name", "Asha").is_ok());
        assert!(validate_non_empty_string("student.name", "   ").is_err());
    }

    #[test]
    fn test_validate_subject_code() {
        assert_eq!(
            validate_subject_code("marks.subject", "CS").unwrap(),
            Subject::ComputerScience
        );

        let err = validate_subject_code("marks.subject", "BIO").unwrap_err();
        match err {
            ReportCardError::InvalidConfigValueError { value, reason, .. } => {
                assert_eq!(value, "BIO");
                assert!(reason.contains("PHY, CHEM, MATH, CS"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
