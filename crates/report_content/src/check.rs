//! Consistency checks over the literal tables.
//!
//! Nothing here is enforced while generating documents; the `check`
//! command runs these to catch drift between hand-maintained tables.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

use crate::caption::file_stem;
use crate::schema::{SCHEMA, TableSpec};
use crate::screens::{Role, RoleTables};
use crate::summary::{SUMMARY, SummaryRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Pass => write!(f, "PASS"),
            CheckStatus::Warn => write!(f, "WARN"),
            CheckStatus::Fail => write!(f, "FAIL"),
        }
    }
}

/// A single check outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub fix_suggestion: Option<String>,
}

impl CheckResult {
    fn pass(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Pass,
            message: message.into(),
            fix_suggestion: None,
        }
    }

    fn warn(name: &str, message: impl Into<String>, fix: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warn,
            message: message.into(),
            fix_suggestion: fix.map(str::to_string),
        }
    }

    fn fail(name: &str, message: impl Into<String>, fix: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Fail,
            message: message.into(),
            fix_suggestion: fix.map(str::to_string),
        }
    }
}

/// Pass/warn/fail counts from a set of checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSummary {
    pub pass: usize,
    pub warn: usize,
    pub fail: usize,
    pub total: usize,
}

impl CheckSummary {
    pub fn is_ok(&self) -> bool {
        self.fail == 0
    }
}

pub fn summarize(results: &[CheckResult]) -> CheckSummary {
    let count = |s: CheckStatus| results.iter().filter(|r| r.status == s).count();
    CheckSummary {
        pass: count(CheckStatus::Pass),
        warn: count(CheckStatus::Warn),
        fail: count(CheckStatus::Fail),
        total: results.len(),
    }
}

/// Collapse an empty finding list into a single pass.
fn or_pass(name: &str, findings: Vec<CheckResult>, ok: &str) -> Vec<CheckResult> {
    if findings.is_empty() {
        vec![CheckResult::pass(name, ok)]
    } else {
        findings
    }
}

/// Run every check that needs no filesystem access.
pub fn run_content_checks() -> Vec<CheckResult> {
    let mut results = Vec::new();
    results.extend(check_primary_keys(SCHEMA));
    results.extend(check_references(SCHEMA));
    results.extend(check_summary(SCHEMA, SUMMARY));
    for role in Role::CHAPTER_ORDER {
        results.extend(check_descriptions(role, role.tables()));
        results.extend(check_rename_targets(role, role.tables()));
        results.extend(check_english_captions(role));
    }
    debug!(count = results.len(), "content checks completed");
    results
}

/// Every table has exactly one primary key.
pub fn check_primary_keys(tables: &[TableSpec]) -> Vec<CheckResult> {
    const NAME: &str = "Primary Keys";
    let findings = tables
        .iter()
        .filter_map(|t| {
            let count = t.fields.iter().filter(|f| f.key.is_primary()).count();
            (count != 1).then(|| {
                CheckResult::fail(
                    NAME,
                    format!("Table {} has {count} primary key fields", t.name),
                    None,
                )
            })
        })
        .collect();
    or_pass(NAME, findings, "Every table has one primary key")
}

/// Foreign keys name an existing table and column.
pub fn check_references(tables: &[TableSpec]) -> Vec<CheckResult> {
    const NAME: &str = "Foreign Keys";
    let mut findings = Vec::new();

    for t in tables {
        for field in t.fields.iter().filter(|f| f.key.is_foreign()) {
            let Some(reference) = field.reference() else {
                findings.push(CheckResult::warn(
                    NAME,
                    format!(
                        "{}.{} has no reference in its description ({:?})",
                        t.name, field.name, field.description
                    ),
                    Some("Describe it as `Tham chiếu <table>(<column>)`"),
                ));
                continue;
            };
            match tables.iter().find(|other| other.name == reference.table) {
                None => findings.push(CheckResult::fail(
                    NAME,
                    format!(
                        "{}.{} references unknown table {}",
                        t.name, field.name, reference.table
                    ),
                    None,
                )),
                Some(target) if target.field(reference.column).is_none() => {
                    findings.push(CheckResult::fail(
                        NAME,
                        format!(
                            "{}.{} references unknown column {}.{}",
                            t.name, field.name, reference.table, reference.column
                        ),
                        None,
                    ))
                }
                Some(_) => {}
            }
        }
    }
    or_pass(NAME, findings, "All foreign keys resolve")
}

/// Summary rows cover the same tables as the schema, numbered from 1.
pub fn check_summary(tables: &[TableSpec], rows: &[SummaryRow]) -> Vec<CheckResult> {
    const NAME: &str = "Schema Summary";
    let mut findings = Vec::new();

    let schema_names: BTreeSet<&str> = tables.iter().map(|t| t.name).collect();
    let summary_names: BTreeSet<&str> = rows.iter().map(|r| r.name).collect();

    for missing in schema_names.difference(&summary_names) {
        findings.push(CheckResult::fail(
            NAME,
            format!("Table {missing} has no summary row"),
            None,
        ));
    }
    for extra in summary_names.difference(&schema_names) {
        findings.push(CheckResult::fail(
            NAME,
            format!("Summary row {extra} has no table listing"),
            None,
        ));
    }
    for (i, row) in rows.iter().enumerate() {
        if row.index as usize != i + 1 {
            findings.push(CheckResult::fail(
                NAME,
                format!("Summary row {} is numbered {}, expected {}", row.name, row.index, i + 1),
                Some("Renumber the summary rows"),
            ));
        }
    }
    or_pass(NAME, findings, "Summary matches schema")
}

/// Ordered screenshots carry a description.
pub fn check_descriptions(role: Role, tables: &RoleTables) -> Vec<CheckResult> {
    let name = format!("Descriptions ({role})");
    let findings = tables
        .ordering
        .iter()
        .filter(|e| !e.excluded)
        .filter(|e| tables.description(e.file.trim()).is_none())
        .map(|e| {
            CheckResult::warn(
                &name,
                format!("{} has no description; the chapter falls back", e.file.trim()),
                None,
            )
        })
        .collect();
    or_pass(&name, findings, "Every ordered screenshot is described")
}

/// Rename targets are plain `.png` file names.
pub fn check_rename_targets(role: Role, tables: &RoleTables) -> Vec<CheckResult> {
    let name = format!("Rename Targets ({role})");
    let mut findings = Vec::new();
    let mut seen = HashSet::new();

    for (from, to) in tables.renames {
        if to.contains(['/', '\\']) {
            findings.push(CheckResult::fail(
                &name,
                format!("{from} -> {to:?} contains a path separator"),
                Some("Remove the separator from the label"),
            ));
        } else if !to.ends_with(".png") {
            findings.push(CheckResult::fail(
                &name,
                format!("{from} -> {to:?} is not a .png file name"),
                None,
            ));
        }
        if !seen.insert(*to) {
            findings.push(CheckResult::fail(
                &name,
                format!("{to:?} is the target of more than one file"),
                None,
            ));
        }
    }
    or_pass(&name, findings, "All rename targets are plain file names")
}

/// Ordered screenshots have an English README caption.
pub fn check_english_captions(role: Role) -> Vec<CheckResult> {
    let name = format!("English Captions ({role})");
    let findings = role
        .explicit_order()
        .into_iter()
        .filter(|file| {
            let stem = file_stem(file);
            Role::README_ORDER
                .iter()
                .all(|r| r.tables().english(stem).is_none())
        })
        .map(|file| {
            CheckResult::warn(
                &name,
                format!("{file} has no English caption; the README uses its Vietnamese name"),
                None,
            )
        })
        .collect();
    or_pass(&name, findings, "Every ordered screenshot has an English caption")
}

/// Compare an ordering list with the files actually in the role folder.
pub fn check_screenshots_on_disk<S: AsRef<str>>(role: Role, present: &[S]) -> Vec<CheckResult> {
    let name = format!("Screenshots ({role})");
    let present: HashSet<&str> = present.iter().map(AsRef::as_ref).collect();
    let explicit = role.explicit_order();
    let listed: HashSet<&str> = explicit.iter().copied().collect();
    let mut findings = Vec::new();

    for file in &explicit {
        if !present.contains(file) {
            findings.push(CheckResult::warn(
                &name,
                format!("{file} is listed but missing from {}", role.folder()),
                Some("Add the screenshot or mark the entry excluded"),
            ));
        }
    }
    let mut unlisted: Vec<&str> = present.difference(&listed).copied().collect();
    unlisted.sort_unstable();
    for file in unlisted {
        findings.push(CheckResult::warn(
            &name,
            format!("{file} is not in the ordering list and will be appended"),
            None,
        ));
    }
    or_pass(&name, findings, "Folder matches the ordering list")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::{hide, show};
    use crate::schema::{FieldSpec, KeyKind};

    const ID: FieldSpec = FieldSpec {
        name: "id",
        sql_type: "bigint",
        key: KeyKind::Primary,
        description: "ID tự tăng",
    };

    #[test]
    fn test_shipped_content_has_no_failures() {
        let results = run_content_checks();
        let summary = summarize(&results);
        let failures: Vec<_> = results
            .iter()
            .filter(|r| r.status == CheckStatus::Fail)
            .collect();
        assert!(summary.is_ok(), "failures: {failures:#?}");
        assert_eq!(summary.total, results.len());
    }

    #[test]
    fn test_shipped_free_text_foreign_keys_warn() {
        let results = check_references(SCHEMA);
        let warned: Vec<_> = results
            .iter()
            .filter(|r| r.status == CheckStatus::Warn)
            .collect();
        assert_eq!(warned.len(), 5);
        assert!(warned.iter().any(|r| r.message.contains("messages.sender_id")));
    }

    #[test]
    fn test_primary_key_count() {
        static NO_PK: &[FieldSpec] = &[FieldSpec {
            name: "x",
            sql_type: "int",
            key: KeyKind::Plain,
            description: "",
        }];
        let tables = [TableSpec {
            name: "broken",
            fields: NO_PK,
        }];
        let results = check_primary_keys(&tables);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status, CheckStatus::Fail);
        assert!(results[0].message.contains("broken has 0"));
    }

    #[test]
    fn test_unknown_reference_fails() {
        static FIELDS: &[FieldSpec] = &[
            ID,
            FieldSpec {
                name: "course_id",
                sql_type: "bigint",
                key: KeyKind::Foreign,
                description: "Tham chiếu courses(id)",
            },
            FieldSpec {
                name: "self_id",
                sql_type: "bigint",
                key: KeyKind::Foreign,
                description: "Tham chiếu lonely(uuid)",
            },
        ];
        let tables = [TableSpec {
            name: "lonely",
            fields: FIELDS,
        }];
        let results = check_references(&tables);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.status == CheckStatus::Fail));
        assert!(results[0].message.contains("unknown table courses"));
        assert!(results[1].message.contains("unknown column lonely.uuid"));
    }

    #[test]
    fn test_summary_mismatch() {
        static FIELDS: &[FieldSpec] = &[ID];
        let tables = [
            TableSpec {
                name: "a",
                fields: FIELDS,
            },
            TableSpec {
                name: "b",
                fields: FIELDS,
            },
        ];
        let rows = [
            SummaryRow {
                index: 1,
                name: "a",
                description: "",
            },
            SummaryRow {
                index: 3,
                name: "c",
                description: "",
            },
        ];
        let results = check_summary(&tables, &rows);
        let messages: Vec<&str> = results.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(results.len(), 3, "{messages:?}");
        assert!(messages.iter().any(|m| m.contains("Table b has no summary row")));
        assert!(messages.iter().any(|m| m.contains("Summary row c has no table")));
        assert!(messages.iter().any(|m| m.contains("numbered 3, expected 2")));
    }

    #[test]
    fn test_rename_target_with_separator_fails() {
        static TABLES: RoleTables = RoleTables {
            renames: &[
                ("a.png", "Quản lý học viên/sinh viên.png"),
                ("b.png", "B.jpg"),
                ("c.png", "C.png"),
                ("d.png", "C.png"),
            ],
            descriptions: &[],
            english: &[],
            ordering: &[],
        };
        let results = check_rename_targets(Role::Lecturer, &TABLES);
        assert_eq!(results.len(), 3);
        assert!(results[0].message.contains("path separator"));
        assert!(results[1].message.contains("not a .png"));
        assert!(results[2].message.contains("more than one"));
    }

    #[test]
    fn test_missing_description_warns_only_for_shown_entries() {
        static TABLES: RoleTables = RoleTables {
            renames: &[],
            descriptions: &[("a.png", "A")],
            english: &[],
            ordering: &[show("a.png"), show("b.png"), hide("c.png")],
        };
        let results = check_descriptions(Role::Student, &TABLES);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status, CheckStatus::Warn);
        assert!(results[0].message.starts_with("b.png"));
    }

    #[test]
    fn test_screenshots_on_disk() {
        let present = vec!["Trang chủ.png".to_string(), "Thêm.png".to_string()];
        let results = check_screenshots_on_disk(Role::Student, &present);
        assert!(results.iter().all(|r| r.status == CheckStatus::Warn));
        assert!(results.iter().any(|r| r.message.contains("Đăng ký.png is listed")));
        assert!(results.iter().any(|r| r.message.contains("Thêm.png is not in")));
        assert!(!results.iter().any(|r| r.message.starts_with("Trang chủ.png")));
    }

    #[test]
    fn test_summarize_counts() {
        let results = vec![
            CheckResult::pass("a", "ok"),
            CheckResult::warn("b", "hm", None),
            CheckResult::fail("c", "bad", Some("fix")),
        ];
        let summary = summarize(&results);
        assert_eq!(summary.pass, 1);
        assert_eq!(summary.warn, 1);
        assert_eq!(summary.fail, 1);
        assert_eq!(summary.total, 3);
        assert!(!summary.is_ok());
    }
}
