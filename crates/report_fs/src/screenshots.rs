use anyhow::{Context, Result};
use report_content::Role;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Folder holding one role's screenshots.
pub fn role_dir(images_root: &Path, role: Role) -> PathBuf {
    images_root.join(role.folder())
}

/// Whether a file name has a `.png` extension, in any case.
pub fn is_screenshot(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

/// List the screenshots in a folder, sorted by name.
///
/// Returns `Ok(None)` when the folder does not exist. Sub-directories are
/// ignored even if their name ends in `.png`.
pub fn list_screenshots(dir: &Path) -> Result<Option<Vec<String>>> {
    let read_dir = match std::fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Screenshot folder missing: {}", dir.display());
            return Ok(None);
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read directory: {}", dir.display()));
        }
    };

    let mut names = Vec::new();
    for entry in read_dir {
        let entry =
            entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_screenshot(&name) {
            names.push(name);
        }
    }

    names.sort();
    debug!(count = names.len(), "Listed screenshots in {}", dir.display());
    Ok(Some(names))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_screenshot() {
        assert!(is_screenshot("a.png"));
        assert!(is_screenshot("Trang chủ.PNG"));
        assert!(!is_screenshot("notes.txt"));
        assert!(!is_screenshot("png"));
        assert!(!is_screenshot(".png"));
    }

    #[test]
    fn test_list_screenshots_sorted_and_filtered() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.PNG", "c.jpg", "readme.txt"] {
            std::fs::write(tmp.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(tmp.path().join("nested.png")).unwrap();

        let files = list_screenshots(tmp.path()).unwrap().unwrap();
        assert_eq!(files, vec!["a.PNG", "b.png"]);
    }

    #[test]
    fn test_list_screenshots_missing_folder() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(list_screenshots(&tmp.path().join("giangvien")).unwrap().is_none());
    }

    #[test]
    fn test_list_screenshots_empty_folder() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(list_screenshots(tmp.path()).unwrap(), Some(Vec::new()));
    }

    #[test]
    fn test_role_dir() {
        let dir = role_dir(Path::new("images"), Role::Lecturer);
        assert_eq!(dir, PathBuf::from("images/giangvien"));
    }
}
