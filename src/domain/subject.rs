use crate::utils::error::ReportCardError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The closed set of subjects a report card can hold marks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Subject {
    Physics,
    Chemistry,
    Mathematics,
    ComputerScience,
}

impl Subject {
    pub const ALL: [Subject; 4] = [
        Subject::Physics,
        Subject::Chemistry,
        Subject::Mathematics,
        Subject::ComputerScience,
    ];

    /// Short code used in rendered report cards and input files.
    pub fn code(self) -> &'static str {
        match self {
            Subject::Physics => "PHY",
            Subject::Chemistry => "CHEM",
            Subject::Mathematics => "MATH",
            Subject::ComputerScience => "CS",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Mathematics => "Mathematics",
            Subject::ComputerScience => "Computer Science",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Subject {
    type Err = ReportCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Subject::ALL
            .into_iter()
            .find(|subject| subject.code() == code)
            .ok_or_else(|| ReportCardError::UnknownSubject {
                code: code.to_string(),
            })
    }
}

impl TryFrom<&str> for Subject {
    type Error = ReportCardError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for Subject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Subject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}
