//! Service Kit
//!
//! The reporting service and the CSV output it produces.

mod csv_report;
mod price_report;

pub use csv_report::{report_file_name, sort_by_price, write_report};
pub use price_report::{DEFAULT_OUTPUT_DIR, PriceReportingService, ReportConfig};
