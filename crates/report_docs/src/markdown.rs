use report_content::TableSpec;

const README_TITLE: &str = "# Learning Management System Screenshots\n";
const README_INTRO: &str = "This document contains screenshots of the Learning Management System (LMS) interface for different user roles.\n";

/// One screenshot entry in the README.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadmeImage {
    pub caption: String,
    /// Link target relative to the README, unencoded.
    pub path: String,
}

/// One role section in the README.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadmeSection {
    pub heading: String,
    pub images: Vec<ReadmeImage>,
}

/// Generate a Markdown table from headers and rows.
///
/// Pipes in cell content are escaped to prevent breaking the table structure.
pub fn generate_markdown_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if headers.is_empty() {
        return String::new();
    }

    let mut lines = Vec::new();

    let header_cells: Vec<String> = headers.iter().map(|h| escape_pipe(h)).collect();
    lines.push(format!("| {} |", header_cells.join(" | ")));

    let separators: Vec<&str> = headers.iter().map(|_| "---").collect();
    lines.push(format!("| {} |", separators.join(" | ")));

    for row in rows {
        let cells: Vec<String> = row.iter().map(|c| escape_pipe(c)).collect();
        lines.push(format!("| {} |", cells.join(" | ")));
    }

    lines.join("\n")
}

/// Generate a Markdown document with a title and a series of sections.
///
/// Each section gets an `## heading` followed by its body text.
pub fn generate_markdown_document(title: &str, sections: &[(&str, &str)]) -> String {
    let mut parts = Vec::new();

    parts.push(format!("# {title}"));

    for (heading, body) in sections {
        parts.push(format!("## {heading}"));
        parts.push((*body).to_string());
    }

    parts.join("\n\n")
}

/// The schema as one Markdown table per database table.
pub fn schema_markdown(title: &str, tables: &[TableSpec]) -> String {
    let headers = ["Tên thuộc tính", "Kiểu dữ liệu", "Khóa", "Mô tả"];

    let bodies: Vec<(String, String)> = tables
        .iter()
        .map(|table| {
            let rows: Vec<Vec<String>> = table
                .fields
                .iter()
                .map(|f| f.cells().iter().map(|c| c.to_string()).collect())
                .collect();
            (
                format!("Bảng: {}", table.name),
                generate_markdown_table(&headers, &rows),
            )
        })
        .collect();

    let sections: Vec<(&str, &str)> = bodies
        .iter()
        .map(|(h, b)| (h.as_str(), b.as_str()))
        .collect();

    let mut doc = generate_markdown_document(title, &sections);
    doc.push('\n');
    doc
}

/// Render the screenshot README.
///
/// Every fragment ends in a newline and fragments are joined by another
/// newline, so headings and images are separated by blank lines and the
/// file has no trailing blank line.
pub fn render_readme(sections: &[ReadmeSection]) -> String {
    let mut parts = vec![README_TITLE.to_string(), README_INTRO.to_string()];

    for section in sections {
        parts.push(format!("\n## {}\n", section.heading));
        for image in &section.images {
            parts.push(format!("### {}\n", image.caption));
            parts.push(format!(
                "![{}]({})\n",
                image.caption,
                encode_link(&image.path)
            ));
        }
    }

    parts.join("\n")
}

/// Spaces would end a Markdown link target early.
fn encode_link(path: &str) -> String {
    path.replace(' ', "%20")
}

fn escape_pipe(s: &str) -> String {
    s.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use report_content::SCHEMA;

    #[test]
    fn test_generate_markdown_table_basic() {
        let headers = &["Name", "Score"];
        let rows = vec![
            vec!["Alice".into(), "95".into()],
            vec!["Bob".into(), "87".into()],
        ];
        let table = generate_markdown_table(headers, &rows);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "| Name | Score |");
        assert_eq!(lines[1], "| --- | --- |");
        assert_eq!(lines[2], "| Alice | 95 |");
    }

    #[test]
    fn test_generate_markdown_table_escapes_pipes() {
        let table = generate_markdown_table(&["Data"], &[vec!["a|b".into()]]);
        assert!(table.contains("a\\|b"));
    }

    #[test]
    fn test_generate_markdown_table_empty_headers() {
        assert_eq!(generate_markdown_table(&[], &[]), "");
    }

    #[test]
    fn test_schema_markdown() {
        let doc = schema_markdown("Lược đồ", SCHEMA);
        assert!(doc.starts_with("# Lược đồ\n\n## Bảng: "));
        assert!(doc.contains("| Tên thuộc tính | Kiểu dữ liệu | Khóa | Mô tả |"));
        assert_eq!(doc.matches("## Bảng: ").count(), SCHEMA.len());
        assert!(doc.contains("| FK UNIQUE |"));
        assert!(doc.ends_with("|\n"));
    }

    #[test]
    fn test_render_readme_layout() {
        let sections = vec![
            ReadmeSection {
                heading: "Administrator Interface".into(),
                images: vec![ReadmeImage {
                    caption: "Admin Login".into(),
                    path: "document/images/quantrivien/Đăng nhập quản trị viên.png".into(),
                }],
            },
            ReadmeSection {
                heading: "Lecturer Interface".into(),
                images: Vec::new(),
            },
        ];

        let expected = "# Learning Management System Screenshots\n\
            \n\
            This document contains screenshots of the Learning Management System (LMS) interface for different user roles.\n\
            \n\
            \n## Administrator Interface\n\
            \n\
            ### Admin Login\n\
            \n\
            ![Admin Login](document/images/quantrivien/Đăng%20nhập%20quản%20trị%20viên.png)\n\
            \n\
            \n## Lecturer Interface\n";

        assert_eq!(render_readme(&sections), expected);
    }

    #[test]
    fn test_render_readme_without_sections() {
        let readme = render_readme(&[]);
        assert_eq!(
            readme,
            format!("{README_TITLE}\n{README_INTRO}")
        );
    }

    #[test]
    fn test_encode_link_only_touches_spaces() {
        assert_eq!(encode_link("a b/(c).png"), "a%20b/(c).png");
    }
}
