// Report content: schema listings, summary rows, screenshot catalogue

pub mod caption;
pub mod check;
pub mod ordering;
pub mod schema;
pub mod screens;
pub mod summary;

pub use caption::{UNDESCRIBED, default_caption, default_file_name, file_stem, table_key};
pub use check::{CheckResult, CheckStatus, CheckSummary, run_content_checks, summarize};
pub use ordering::{OrderEntry, explicit_order, merge_order};
pub use schema::{FieldSpec, KeyKind, SCHEMA, TableSpec};
pub use screens::{Role, RoleTables};
pub use summary::{SUMMARY, SummaryRow};

/// Title of the field-level schema document.
pub const SCHEMA_TITLE: &str = "Lược Đồ Cơ Sở Dữ Liệu Hệ Thống E-Learning";

/// Title of the schema overview document.
pub const SUMMARY_TITLE: &str = "Tổng quan lược đồ cơ sở dữ liệu hệ thống E-Learning";

/// Title of the screenshot chapter for a given chapter number.
pub fn chapter_title(chapter: u32) -> String {
    format!("Chương {chapter}. Giao diện hệ thống")
}
