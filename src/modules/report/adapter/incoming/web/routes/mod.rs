pub mod create_report;
pub mod fetch_reports;

pub use create_report::create_report_handler;
pub use fetch_reports::{fetch_report_handler, list_reports_handler};
