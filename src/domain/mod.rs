// Domain layer: subjects, grade bands and the report card itself. No I/O here.

pub mod grade;
pub mod report_card;
pub mod subject;
