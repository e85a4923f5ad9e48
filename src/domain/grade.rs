use serde::{Serialize, Serializer};
use std::fmt;

/// Label reported for a subject that has no marks entry.
pub const NOT_APPLICABLE: &str = "Not Applicable";

/// Letter grade derived from a subject's marks.
///
/// | Marks    | Grade   |
/// |----------|---------|
/// | 90..=100 | A+      |
/// | 85..=89  | A       |
/// | 80..=84  | A-      |
/// | 75..=79  | B+      |
/// | 70..=74  | B       |
/// | 65..=69  | B-      |
/// | 60..=64  | C+      |
/// | 55..=59  | C       |
/// | 50..=54  | C-      |
/// | 45..=49  | D+      |
/// | 40..=44  | D       |
/// | 35..=39  | D-      |
/// | <= 34    | F(Fail) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    APlus,
    A,
    AMinus,
    BPlus,
    B,
    BMinus,
    CPlus,
    C,
    CMinus,
    DPlus,
    D,
    DMinus,
    Fail,
}

impl Grade {
    /// Negative marks fall into `Fail`. Anything above 100 is treated as `APlus`.
    pub fn from_marks(marks: i32) -> Grade {
        match marks {
            90.. => Grade::APlus,
            85..=89 => Grade::A,
            80..=84 => Grade::AMinus,
            75..=79 => Grade::BPlus,
            70..=74 => Grade::B,
            65..=69 => Grade::BMinus,
            60..=64 => Grade::CPlus,
            55..=59 => Grade::C,
            50..=54 => Grade::CMinus,
            45..=49 => Grade::DPlus,
            40..=44 => Grade::D,
            35..=39 => Grade::DMinus,
            _ => Grade::Fail,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::CMinus => "C-",
            Grade::DPlus => "D+",
            Grade::D => "D",
            Grade::DMinus => "D-",
            Grade::Fail => "F(Fail)",
        }
    }

    pub fn is_pass(self) -> bool {
        self != Grade::Fail
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Grade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        let cases = [
            (100, "A+"),
            (90, "A+"),
            (89, "A"),
            (85, "A"),
            (84, "A-"),
            (80, "A-"),
            (79, "B+"),
            (75, "B+"),
            (74, "B"),
            (70, "B"),
            (69, "B-"),
            (65, "B-"),
            (64, "C+"),
            (60, "C+"),
            (59, "C"),
            (55, "C"),
            (54, "C-"),
            (50, "C-"),
            (49, "D+"),
            (45, "D+"),
            (44, "D"),
            (40, "D"),
            (39, "D-"),
            (35, "D-"),
            (34, "F(Fail)"),
            (0, "F(Fail)"),
        ];

        for (marks, expected) in cases {
            assert_eq!(Grade::from_marks(marks).label(), expected, "marks = {}", marks);
        }
    }

    #[test]
    fn test_negative_marks_fail() {
        assert_eq!(Grade::from_marks(-1), Grade::Fail);
        assert_eq!(Grade::from_marks(i32::MIN), Grade::Fail);
        assert!(!Grade::Fail.is_pass());
        assert!(Grade::DMinus.is_pass());
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(Grade::AMinus.to_string(), "A-");
        assert_eq!(serde_json::to_string(&Grade::Fail).unwrap(), "\"F(Fail)\"");
    }
}
