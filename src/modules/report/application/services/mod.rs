pub mod create_report;
pub mod fetch_reports;
