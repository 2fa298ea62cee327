use report_app::cli::SchemaFormat;
use report_app::pipeline::*;
use report_content::Role;
use report_core::ReportConfig;
use std::io::{Cursor, Read};
use std::path::Path;
use std::process::Command;

fn png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([20, 120, 200]));
    let mut buf = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, image::ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

fn document_xml(path: &Path) -> String {
    let bytes = std::fs::read(path).unwrap();
    assert_eq!(&bytes[0..2], b"PK");
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut part = archive.by_name("word/document.xml").unwrap();
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}

fn add_screens(root: &Path, role: Role, files: &[&str]) {
    let dir = root.join(role.folder());
    std::fs::create_dir_all(&dir).unwrap();
    for file in files {
        std::fs::write(dir.join(file), png(16, 9)).unwrap();
    }
}

fn config_in(root: &Path) -> ReportConfig {
    ReportConfig {
        images_dir: root.join("images"),
        output_dir: root.join("out"),
        log_dir: Some(root.join("logs")),
        ..ReportConfig::default()
    }
}

#[test]
fn test_chapter_orders_explicit_then_remaining() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path());
    add_screens(
        &config.images_dir,
        Role::Student,
        &["zzz_extra.png", "Đăng nhập.png", "Trang chủ.png", "Trang cá nhân.png"],
    );

    let chapter = build_chapter(&config).unwrap();
    assert_eq!(chapter.groups.len(), 1);
    let captions: Vec<&str> = chapter.groups[0]
        .figures
        .iter()
        .map(|f| f.caption.as_str())
        .collect();
    assert_eq!(captions, vec!["Trang chủ", "Đăng nhập", "Trang cá nhân", "Zzz extra"]);

    let path = config.output_path(CHAPTER_FILE);
    assert_eq!(write_chapter(&config, &path).unwrap(), 4);

    let xml = document_xml(&path);
    assert!(xml.contains("5.1 Học sinh/sinh viên"));
    assert!(xml.contains("5.1.1 Trang chủ"));
    assert!(xml.contains("Hình 5.1.4 Zzz extra"));
    assert!(xml.contains("Chức năng chưa được mô tả."));
    assert!(!xml.contains("5.2 Giảng viên"));
}

#[test]
fn test_chapter_can_omit_excluded_screens() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = config_in(tmp.path());
    config.omit_excluded = true;
    add_screens(&config.images_dir, Role::Student, &["Trang chủ.png", "Trang cá nhân.png"]);

    let chapter = build_chapter(&config).unwrap();
    assert_eq!(chapter.figure_count(), 1);
    assert_eq!(chapter.groups[0].figures[0].caption, "Trang chủ");
}

#[test]
fn test_chapter_uses_configured_chapter_number() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = config_in(tmp.path());
    config.chapter_number = 4;
    add_screens(&config.images_dir, Role::Admin, &["Quản lý thống kê.png"]);

    let chapter = build_chapter(&config).unwrap();
    assert_eq!(chapter.title, "Chương 4. Giao diện hệ thống");
    assert_eq!(chapter.groups[0].code, "4.3");
}

#[test]
fn test_broken_screenshot_names_the_file() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path());
    let dir = config.images_dir.join(Role::Lecturer.folder());
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("hong.png"), b"not an image").unwrap();

    let err = build_chapter(&config).unwrap_err();
    assert!(format!("{err:#}").contains("hong.png"));
}

#[test]
fn test_rename_then_chapter_uses_labels() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path());
    add_screens(&config.images_dir, Role::Lecturer, &["quanlylichdaydialog.png"]);

    let report = run_rename(&config, &[], false).unwrap();
    assert_eq!(report.renamed(), 1);

    let chapter = build_chapter(&config).unwrap();
    let figure = &chapter.groups[0].figures[0];
    assert_eq!(figure.caption, "Quản lý lịch dạy (hộp thoại)");
    assert_ne!(figure.description, report_content::UNDESCRIBED);
}

#[test]
fn test_readme_sections_and_links() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path());
    add_screens(&config.images_dir, Role::Student, &["Trang chủ.png"]);
    add_screens(&config.images_dir, Role::Admin, &["Đăng nhập quản trị viên.png"]);

    let path = config.output_path(README_FILE);
    write_readme(&config, &path).unwrap();
    let readme = std::fs::read_to_string(&path).unwrap();

    let admin = readme.find("## Administrator Interface").unwrap();
    let student = readme.find("## Student Interface").unwrap();
    assert!(admin < student);
    assert!(!readme.contains("## Lecturer Interface"));
    assert!(readme.contains("### Admin Login\n"));
    assert!(
        readme.contains("![Homepage](document/images/hocviensinhvien/Trang%20chủ.png)\n")
    );
}

#[test]
fn test_schema_exports() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path());

    let docx = config.output_path(SchemaFormat::Docx.default_file_name());
    write_schema(&docx, SchemaFormat::Docx).unwrap();
    assert!(document_xml(&docx).contains("Bảng: academic_class_courses"));

    let csv = config.output_path(SchemaFormat::Csv.default_file_name());
    write_schema(&csv, SchemaFormat::Csv).unwrap();
    let text = std::fs::read_to_string(&csv).unwrap();
    assert!(text.starts_with("table,field,type,key,description\n"));

    let md = config.output_path(SchemaFormat::Markdown.default_file_name());
    write_schema(&md, SchemaFormat::Markdown).unwrap();
    assert!(std::fs::read_to_string(&md).unwrap().contains("## Bảng: courses"));

    let summary = config.output_path(SUMMARY_FILE);
    write_summary(&summary).unwrap();
    assert!(document_xml(&summary).contains("Tên Bảng"));
}

#[test]
fn test_check_reports_unlisted_screens() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path());
    add_screens(&config.images_dir, Role::Lecturer, &["mystery.png"]);

    let results = run_check(&config).unwrap();
    assert!(
        results
            .iter()
            .any(|r| r.name == "Screenshots (lecturer)" && r.message.contains("mystery.png"))
    );
}

#[test]
fn test_binary_generates_everything() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path());
    add_screens(&config.images_dir, Role::Student, &["Trang chủ.png"]);
    let config_path = tmp.path().join("lms-report.json");
    config.save_to_path(&config_path).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_lms-report"))
        .current_dir(tmp.path())
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(&config_path)
        .arg("all")
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("thành công!").count(), 4);
    for name in [
        "database_schema.docx",
        SUMMARY_FILE,
        CHAPTER_FILE,
        README_FILE,
    ] {
        assert!(config.output_path(name).exists(), "{name}");
    }
}

#[test]
fn test_binary_check_passes_on_shipped_tables() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path());
    let config_path = tmp.path().join("lms-report.json");
    config.save_to_path(&config_path).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_lms-report"))
        .current_dir(tmp.path())
        .arg("--config")
        .arg(&config_path)
        .arg("check")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[WARN]"));
    assert!(stdout.contains("0 failed"));
}

#[test]
fn test_binary_rejects_bad_config() {
    let tmp = tempfile::tempdir().unwrap();
    let config_path = tmp.path().join("bad.json");
    std::fs::write(&config_path, r#"{ "image_width_inches": -1.0 }"#).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_lms-report"))
        .current_dir(tmp.path())
        .arg("--config")
        .arg(&config_path)
        .arg("summary")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("image_width_inches"));
}

#[test]
fn test_binary_failure_reaches_log_file() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path());
    let dir = config.images_dir.join(Role::Student.folder());
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("hong.png"), b"not an image").unwrap();
    let config_path = tmp.path().join("lms-report.json");
    config.save_to_path(&config_path).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_lms-report"))
        .current_dir(tmp.path())
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(&config_path)
        .arg("chapter")
        .output()
        .unwrap();
    assert!(!output.status.success());

    let logged: String = std::fs::read_dir(tmp.path().join("logs"))
        .unwrap()
        .map(|entry| std::fs::read_to_string(entry.unwrap().path()).unwrap())
        .collect();
    let line = logged.lines().find(|l| l.contains("ERROR")).unwrap_or_default();
    assert!(line.contains("hong.png"), "{logged}");
}
