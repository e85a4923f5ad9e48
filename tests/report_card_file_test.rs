use report_card::utils::validation::Validate;
use report_card::{ReportCardError, ReportCardFile, Subject};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_file_to_text_end_to_end() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[student]
name = "Asha"
year = 2024

[[marks]]
subject = "PHY"
marks = 77

[[marks]]
subject = "MATH"
marks = 40

[[marks]]
subject = "PHY"
marks = 91
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();

    let file = ReportCardFile::from_file(temp_file.path()).unwrap();
    assert!(file.validate().is_ok());

    let card = file.into_report_card().unwrap();
    assert_eq!(card.len(), 2);
    assert_eq!(card.subject_marks(Subject::Physics), Some(91));

    let text = card.to_text();
    let physics = text.find("PHY: A+").unwrap();
    let maths = text.find("MATH: D").unwrap();
    assert!(physics < maths);
}

#[test]
fn test_summary_json_shape() {
    let toml_content = r#"
[student]
name = "Asha"
year = 2024

[[marks]]
subject = "CS"
marks = -4
"#;

    let card = ReportCardFile::from_toml_str(toml_content)
        .unwrap()
        .into_report_card()
        .unwrap();
    let json = serde_json::to_value(card.summary()).unwrap();

    assert_eq!(json["name"], "Asha");
    assert_eq!(json["year"], 2024);
    assert_eq!(json["results"][0]["subject"], "CS");
    assert_eq!(json["results"][0]["marks"], -4);
    assert_eq!(json["results"][0]["grade"], "F(Fail)");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ReportCardFile::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ReportCardError::IoError(_)));
    assert!(err.user_friendly_message().starts_with("Could not read input"));
}
