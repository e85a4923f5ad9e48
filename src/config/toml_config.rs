use crate::domain::report_card::ReportCard;
use crate::utils::error::{ReportCardError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_subject_code, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A report card described in TOML:
///
/// ```toml
/// [student]
/// name = "Asha"
/// year = 2024
///
/// [[marks]]
/// subject = "MATH"
/// marks = 90
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportCardFile {
    pub student: StudentConfig,
    #[serde(default)]
    pub marks: Vec<MarksEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentConfig {
    pub name: String,
    pub year: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarksEntry {
    pub subject: String,
    pub marks: i32,
}

impl ReportCardFile {
    /// 從 TOML 檔案載入
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ReportCardError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ReportCardError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${STUDENT_NAME})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ReportCardError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("student.name", &self.student.name)?;

        for (idx, entry) in self.marks.iter().enumerate() {
            validate_subject_code(&format!("marks[{}].subject", idx), &entry.subject)?;
        }

        Ok(())
    }

    /// Builds the report card, entering marks in file order so a repeated
    /// subject overwrites the earlier value.
    pub fn into_report_card(self) -> Result<ReportCard> {
        self.validate_config()?;

        let mut card = ReportCard::new(self.student.year, self.student.name);
        for entry in self.marks {
            let subject = entry.subject.parse()?;
            card.enter_subject_marks(subject, entry.marks);
        }

        tracing::debug!(entries = card.len(), "built report card from file");
        Ok(card)
    }
}

impl Validate for ReportCardFile {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
