// Screenshot folders: discovery and the rename batch

pub mod rename;
pub mod screenshots;

pub use rename::{RenameEntry, RenameOutcome, RenameReport, plan_file, rename_screenshots};
pub use screenshots::{is_screenshot, list_screenshots, role_dir};
