mod report_service;

pub use report_service::{ReportService, MAX_REPORT_DAYS};
