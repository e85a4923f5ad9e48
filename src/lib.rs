pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use config::toml_config::ReportCardFile;
pub use domain::grade::{Grade, NOT_APPLICABLE};
pub use domain::report_card::{
    ReportCard, ReportCardSummary, SubjectResult, MAX_MARKS, NO_ENTRY_MARKS,
};
pub use domain::subject::Subject;
pub use utils::error::{ReportCardError, Result};
