use anyhow::{Context, Result};
use report_content::Role;
use report_core::ReportError;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::screenshots::{list_screenshots, role_dir};

/// What happened to one screenshot in a rename batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Renamed, or would be renamed on a dry run.
    Renamed,
    /// Already carries its label.
    Unchanged,
    Skipped(String),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    pub role: Role,
    pub file: String,
    pub target: String,
    pub outcome: RenameOutcome,
}

/// Result of a rename batch across one or more role folders.
#[derive(Debug, Clone, Default)]
pub struct RenameReport {
    pub dry_run: bool,
    pub entries: Vec<RenameEntry>,
}

impl RenameReport {
    fn count(&self, pred: impl Fn(&RenameOutcome) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }

    pub fn renamed(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Renamed))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Unchanged))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Failed(_)))
    }
}

/// Work out the labelled name for `file` and whether it can be applied.
///
/// A mapping entry always wins. A file that is already a known label keeps
/// its name, so running the batch twice is a no-op.
pub fn plan_file(dir: &Path, role: Role, file: &str) -> RenameEntry {
    let tables = role.tables();
    let target = match tables.rename_target(file) {
        Some(target) => target.to_string(),
        None if tables.is_labelled(file) => file.to_string(),
        None => role.renamed_file(file),
    };
    let outcome = classify(dir, file, &target);

    RenameEntry {
        role,
        file: file.to_string(),
        target,
        outcome,
    }
}

fn classify(dir: &Path, file: &str, target: &str) -> RenameOutcome {
    if target == file {
        return RenameOutcome::Unchanged;
    }
    if target.contains(['/', '\\']) {
        let err = ReportError::InvalidTarget {
            file: file.to_string(),
            target: target.to_string(),
        };
        return RenameOutcome::Skipped(err.to_string());
    }

    let to = dir.join(target);
    if to.exists() && !same_file(&dir.join(file), &to) {
        return RenameOutcome::Skipped(format!("{target} already exists"));
    }
    RenameOutcome::Renamed
}

/// Case-only renames on a case-insensitive filesystem see the target as
/// existing already.
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn rename_file(dir: &Path, from: &str, to: &str) -> Result<()> {
    let from_path = dir.join(from);
    let to_path = dir.join(to);
    debug!("Renaming {} -> {}", from_path.display(), to_path.display());
    std::fs::rename(&from_path, &to_path)
        .with_context(|| format!("Failed to rename {} -> {}", from_path.display(), to_path.display()))
}

/// Plan every file of one role folder.
///
/// Only the first of several files mapping to the same label is renamed.
fn plan_role(dir: &Path, role: Role, files: &[String]) -> Vec<RenameEntry> {
    let mut claimed = HashSet::new();
    files
        .iter()
        .map(|file| {
            let mut entry = plan_file(dir, role, file);
            if entry.outcome == RenameOutcome::Renamed && !claimed.insert(entry.target.clone()) {
                entry.outcome =
                    RenameOutcome::Skipped(format!("{} is the target of another file", entry.target));
            }
            entry
        })
        .collect()
}

/// Carry out a plan. A rename that fails is recorded on its entry and the
/// remaining entries are still applied.
fn apply_plan(dir: &Path, entries: &mut [RenameEntry], dry_run: bool) {
    for entry in entries.iter_mut() {
        if entry.outcome == RenameOutcome::Renamed && !dry_run {
            if let Err(e) = rename_file(dir, &entry.file, &entry.target) {
                entry.outcome = RenameOutcome::Failed(format!("{e:#}"));
            }
        }
        log_entry(entry, dry_run);
    }
}

/// Rename every screenshot in the given role folders to its labelled name.
///
/// Missing folders are skipped. A file that cannot be renamed is recorded
/// as failed and the batch carries on; only an unreadable folder aborts.
pub fn rename_screenshots(images_root: &Path, roles: &[Role], dry_run: bool) -> Result<RenameReport> {
    let mut report = RenameReport {
        dry_run,
        entries: Vec::new(),
    };

    for &role in roles {
        let dir = role_dir(images_root, role);
        let Some(files) = list_screenshots(&dir)? else {
            warn!("Skipping {role}: folder {} not found", dir.display());
            continue;
        };

        let mut entries = plan_role(&dir, role, &files);
        apply_plan(&dir, &mut entries, dry_run);
        report.entries.extend(entries);
    }

    info!(
        renamed = report.renamed(),
        unchanged = report.unchanged(),
        skipped = report.skipped(),
        failed = report.failed(),
        dry_run,
        "Rename batch finished"
    );
    Ok(report)
}

fn log_entry(entry: &RenameEntry, dry_run: bool) {
    let role = entry.role;
    match &entry.outcome {
        RenameOutcome::Renamed if dry_run => {
            info!("[{role}] would rename {} -> {}", entry.file, entry.target)
        }
        RenameOutcome::Renamed => info!("[{role}] renamed {} -> {}", entry.file, entry.target),
        RenameOutcome::Unchanged => debug!("[{role}] {} already labelled", entry.file),
        RenameOutcome::Skipped(reason) => warn!("[{role}] skipped {}: {reason}", entry.file),
        RenameOutcome::Failed(err) => warn!("[{role}] failed {}: {err}", entry.file),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn images(layout: &[(Role, &[&str])]) -> TempDir {
        let tmp = tempfile::tempdir().unwrap();
        for (role, files) in layout {
            let dir = role_dir(tmp.path(), *role);
            fs::create_dir_all(&dir).unwrap();
            for file in *files {
                fs::write(dir.join(file), file.as_bytes()).unwrap();
            }
        }
        tmp
    }

    #[test]
    fn test_renames_with_each_roles_mapping() {
        let tmp = images(&[
            (Role::Student, &["dangnhap.png"]),
            (Role::Admin, &["dangnhap.png"]),
        ]);

        let report =
            rename_screenshots(tmp.path(), &[Role::Student, Role::Admin], false).unwrap();
        assert_eq!(report.renamed(), 2);
        assert!(role_dir(tmp.path(), Role::Student).join("Đăng nhập.png").exists());
        assert!(
            role_dir(tmp.path(), Role::Admin)
                .join("Đăng nhập quản trị viên.png")
                .exists()
        );
        assert!(!role_dir(tmp.path(), Role::Admin).join("dangnhap.png").exists());
    }

    #[test]
    fn test_second_run_changes_nothing() {
        let tmp = images(&[(Role::Lecturer, &["quanlylichdaydialog.png", "thong_bao_moi.png"])]);

        let first = rename_screenshots(tmp.path(), &[Role::Lecturer], false).unwrap();
        assert_eq!(first.renamed(), 2);

        let second = rename_screenshots(tmp.path(), &[Role::Lecturer], false).unwrap();
        assert_eq!(second.renamed(), 0);
        assert_eq!(second.unchanged(), 2);

        let files = list_screenshots(&role_dir(tmp.path(), Role::Lecturer))
            .unwrap()
            .unwrap();
        assert_eq!(files, vec!["Quản lý lịch dạy (hộp thoại).png", "Thong bao moi.png"]);
    }

    #[test]
    fn test_dry_run_leaves_disk_alone() {
        let tmp = images(&[(Role::Student, &["dangnhap.png"])]);

        let report = rename_screenshots(tmp.path(), &[Role::Student], true).unwrap();
        assert!(report.dry_run);
        assert_eq!(report.renamed(), 1);
        assert_eq!(report.entries[0].target, "Đăng nhập.png");
        assert!(role_dir(tmp.path(), Role::Student).join("dangnhap.png").exists());
    }

    #[test]
    fn test_existing_target_is_not_overwritten() {
        let tmp = images(&[(Role::Student, &["dangnhap.png", "Đăng nhập.png"])]);
        let dir = role_dir(tmp.path(), Role::Student);

        let report = rename_screenshots(tmp.path(), &[Role::Student], false).unwrap();
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.unchanged(), 1);
        assert_eq!(fs::read(dir.join("Đăng nhập.png")).unwrap(), "Đăng nhập.png".as_bytes());
        assert!(dir.join("dangnhap.png").exists());
    }

    #[test]
    fn test_missing_folder_is_skipped() {
        let tmp = images(&[(Role::Student, &["dangnhap.png"])]);
        let report = rename_screenshots(tmp.path(), &Role::CHAPTER_ORDER, false).unwrap();
        assert_eq!(report.entries.len(), 1);
    }

    #[test]
    fn test_non_png_files_are_ignored() {
        let tmp = images(&[(Role::Student, &["dangnhap.png", "notes.txt"])]);
        let report = rename_screenshots(tmp.path(), &[Role::Student], false).unwrap();
        assert_eq!(report.entries.len(), 1);
        assert!(role_dir(tmp.path(), Role::Student).join("notes.txt").exists());
    }

    #[test]
    fn test_target_with_separator_is_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let outcome = classify(tmp.path(), "a.png", "Quản lý học viên/sinh viên.png");
        match outcome {
            RenameOutcome::Skipped(reason) => assert!(reason.contains("Invalid rename target")),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_vanished_source_does_not_stop_the_batch() {
        let tmp = images(&[(Role::Student, &["dangky.png", "dangnhap.png"])]);
        let dir = role_dir(tmp.path(), Role::Student);
        let files = list_screenshots(&dir).unwrap().unwrap();

        let mut entries = plan_role(&dir, Role::Student, &files);
        assert!(entries.iter().all(|e| e.outcome == RenameOutcome::Renamed));
        fs::remove_file(dir.join("dangky.png")).unwrap();

        apply_plan(&dir, &mut entries, false);
        let report = RenameReport {
            dry_run: false,
            entries,
        };

        assert_eq!(report.failed(), 1);
        assert_eq!(report.renamed(), 1);
        match &report.entries[0].outcome {
            RenameOutcome::Failed(err) => assert!(err.contains("Failed to rename")),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(dir.join("Đăng nhập.png").exists());
    }

    #[test]
    fn test_upper_case_extension_follows_mapping() {
        let tmp = images(&[(Role::Student, &["dangnhap.PNG"])]);

        let report = rename_screenshots(tmp.path(), &[Role::Student], true).unwrap();
        assert_eq!(report.entries[0].target, "Đăng nhập.png");

        rename_screenshots(tmp.path(), &[Role::Student], false).unwrap();
        assert!(role_dir(tmp.path(), Role::Student).join("Đăng nhập.png").exists());
    }

    #[test]
    fn test_duplicate_targets_rename_only_the_first() {
        let tmp = images(&[(Role::Student, &["thong_bao.png", "Thong_Bao.png"])]);
        let report = rename_screenshots(tmp.path(), &[Role::Student], true).unwrap();
        assert_eq!(report.renamed(), 1);
        assert_eq!(report.skipped(), 1);
    }
}
