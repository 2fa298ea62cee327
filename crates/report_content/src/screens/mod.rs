//! Screenshot catalogue: per-role rename maps, descriptions, captions and ordering.

mod admin;
mod lecturer;
mod student;

use report_core::ReportError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::caption::{default_file_name, file_stem, table_key};
use crate::ordering::{OrderEntry, excluded_files, explicit_order};

/// The literal tables behind one role.
#[derive(Debug)]
pub struct RoleTables {
    pub renames: &'static [(&'static str, &'static str)],
    pub descriptions: &'static [(&'static str, &'static str)],
    pub english: &'static [(&'static str, &'static str)],
    pub ordering: &'static [OrderEntry],
}

fn lookup(pairs: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

impl RoleTables {
    pub fn rename_target(&self, filename: &str) -> Option<&'static str> {
        lookup(self.renames, &table_key(filename))
    }

    pub fn description(&self, filename: &str) -> Option<&'static str> {
        lookup(self.descriptions, &table_key(filename))
    }

    pub fn english(&self, stem: &str) -> Option<&'static str> {
        lookup(self.english, stem)
    }

    /// Whether `filename` is already a labelled name this role knows about.
    pub fn is_labelled(&self, filename: &str) -> bool {
        let key = table_key(filename);
        let key = key.as_ref();
        self.renames.iter().any(|(_, to)| *to == key)
            || self.descriptions.iter().any(|(k, _)| *k == key)
            || self.ordering.iter().any(|e| e.file.trim() == key)
    }
}

/// User role whose screens are documented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Lecturer,
    Admin,
}

impl Role {
    /// Section order in the report chapter.
    pub const CHAPTER_ORDER: [Role; 3] = [Role::Student, Role::Lecturer, Role::Admin];

    /// Section order in the README.
    pub const README_ORDER: [Role; 3] = [Role::Admin, Role::Lecturer, Role::Student];

    /// Screenshot folder name under the images root.
    pub fn folder(self) -> &'static str {
        match self {
            Role::Student => "hocviensinhvien",
            Role::Lecturer => "giangvien",
            Role::Admin => "quantrivien",
        }
    }

    /// 1-based position in the chapter, used for section codes.
    pub fn ordinal(self) -> u32 {
        match self {
            Role::Student => 1,
            Role::Lecturer => 2,
            Role::Admin => 3,
        }
    }

    /// Section code within a chapter, e.g. `5.2`.
    pub fn section_code(self, chapter: u32) -> String {
        format!("{chapter}.{}", self.ordinal())
    }

    /// Vietnamese section title.
    pub fn title(self) -> &'static str {
        match self {
            Role::Student => "Học sinh/sinh viên",
            Role::Lecturer => "Giảng viên",
            Role::Admin => "Quản trị viên",
        }
    }

    /// README section heading text.
    pub fn readme_heading(self) -> &'static str {
        match self {
            Role::Student => "Student Interface",
            Role::Lecturer => "Lecturer Interface",
            Role::Admin => "Administrator Interface",
        }
    }

    pub fn tables(self) -> &'static RoleTables {
        match self {
            Role::Student => &student::TABLES,
            Role::Lecturer => &lecturer::TABLES,
            Role::Admin => &admin::TABLES,
        }
    }

    /// Labelled file name for a screenshot: the mapping entry if there is
    /// one, the default caption otherwise.
    pub fn renamed_file(self, filename: &str) -> String {
        match self.tables().rename_target(filename) {
            Some(target) => target.to_string(),
            None => default_file_name(filename),
        }
    }

    pub fn description(self, filename: &str) -> Option<&'static str> {
        self.tables().description(filename)
    }

    /// English caption for a labelled stem.
    ///
    /// The role's own table wins; other roles are tried in README order,
    /// and the stem itself is the last resort.
    pub fn english_caption(self, stem: &str) -> String {
        std::iter::once(self)
            .chain(Role::README_ORDER.into_iter().filter(|r| *r != self))
            .find_map(|r| r.tables().english(stem))
            .map(str::to_string)
            .unwrap_or_else(|| stem.to_string())
    }

    /// English caption for a labelled file name.
    pub fn english_caption_for_file(self, filename: &str) -> String {
        self.english_caption(file_stem(filename))
    }

    pub fn ordering(self) -> &'static [OrderEntry] {
        self.tables().ordering
    }

    pub fn explicit_order(self) -> Vec<&'static str> {
        explicit_order(self.ordering())
    }

    pub fn excluded_files(self) -> Vec<&'static str> {
        excluded_files(self.ordering())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Student => write!(f, "student"),
            Role::Lecturer => write!(f, "lecturer"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

impl FromStr for Role {
    type Err = ReportError;

    /// Accepts the English role name or the screenshot folder name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "student" | "hocviensinhvien" => Ok(Role::Student),
            "lecturer" | "giangvien" => Ok(Role::Lecturer),
            "admin" | "quantrivien" => Ok(Role::Admin),
            other => Err(ReportError::UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_section_codes() {
        assert_eq!(Role::Student.section_code(5), "5.1");
        assert_eq!(Role::Lecturer.section_code(5), "5.2");
        assert_eq!(Role::Admin.section_code(4), "4.3");
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("student".parse::<Role>().unwrap(), Role::Student);
        assert_eq!("GiangVien".parse::<Role>().unwrap(), Role::Lecturer);
        assert_eq!(" quantrivien ".parse::<Role>().unwrap(), Role::Admin);
        assert!(matches!(
            "guest".parse::<Role>(),
            Err(ReportError::UnknownRole(name)) if name == "guest"
        ));
        for role in Role::CHAPTER_ORDER {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_renamed_file_uses_role_mapping() {
        assert_eq!(Role::Student.renamed_file("dangnhap.png"), "Đăng nhập.png");
        assert_eq!(
            Role::Admin.renamed_file("dangnhap.png"),
            "Đăng nhập quản trị viên.png"
        );
        assert_eq!(
            Role::Lecturer.renamed_file("quanlylichdaydialog.png"),
            "Quản lý lịch dạy (hộp thoại).png"
        );
    }

    #[test]
    fn test_renamed_file_falls_back() {
        assert_eq!(
            Role::Lecturer.renamed_file("thong_bao_moi.png"),
            "Thong bao moi.png"
        );
    }

    #[test]
    fn test_upper_case_extension_uses_tables() {
        assert_eq!(Role::Student.renamed_file("dangnhap.PNG"), "Đăng nhập.png");
        assert_eq!(
            Role::Student.description("Hộp thoại chat.PNG"),
            Role::Student.description("Hộp thoại chat.png")
        );
        assert!(Role::Student.description("Hộp thoại chat.PNG").is_some());
        assert!(Role::Student.tables().is_labelled("Đăng nhập.Png"));
        assert_eq!(
            Role::Lecturer.english_caption_for_file("Quản lý điểm danh.PNG"),
            "Attendance Management"
        );
    }

    #[test]
    fn test_descriptions_are_per_role() {
        let student = Role::Student.description("Hộp thoại chat.png").unwrap();
        let admin = Role::Admin.description("Hộp thoại chat.png").unwrap();
        assert_ne!(student, admin);
        assert!(admin.contains("quản trị viên"));
    }

    #[test]
    fn test_english_caption_lookup_order() {
        assert_eq!(Role::Admin.english_caption("Đăng nhập quản trị viên"), "Admin Login");
        // Only the student table knows this one.
        assert_eq!(Role::Admin.english_caption("Trang chủ"), "Homepage");
        assert_eq!(Role::Student.english_caption("Không có"), "Không có");
        assert_eq!(
            Role::Lecturer.english_caption_for_file("Quản lý điểm danh.png"),
            "Attendance Management"
        );
    }

    #[test]
    fn test_ordering_lists_have_no_duplicates() {
        for role in Role::CHAPTER_ORDER {
            let explicit = role.explicit_order();
            let unique: HashSet<_> = explicit.iter().collect();
            assert_eq!(unique.len(), explicit.len(), "role {role}");
        }
    }

    #[test]
    fn test_ordering_entries_are_described() {
        for role in Role::CHAPTER_ORDER {
            for file in role.explicit_order() {
                assert!(role.description(file).is_some(), "{role}: {file}");
            }
        }
    }

    #[test]
    fn test_excluded_entries_are_listed() {
        assert!(
            Role::Lecturer
                .excluded_files()
                .contains(&"Quản lý tài khoản.png")
        );
        assert!(!Role::Lecturer.explicit_order().contains(&"Quản lý tài khoản.png"));
    }

    #[test]
    fn test_is_labelled() {
        let lecturer = Role::Lecturer.tables();
        assert!(lecturer.is_labelled("Quản lý học sinh sinh viên.png"));
        assert!(!lecturer.is_labelled("quanlyhocviensinhvien.png"));
        assert!(Role::Student.tables().is_labelled("Thông báo mail.png"));
    }
}
