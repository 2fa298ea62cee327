use anyhow::Result;
use docx_rs::*;
use report_content::{SummaryRow, TableSpec};
use std::io::Cursor;
use tracing::debug;

use crate::chapter::Chapter;

/// Paragraph style for figure captions ("Hình 5.1.1 ...").
pub const FIGURE_CAPTION_STYLE: &str = "hinh";

const TITLE_STYLE: &str = "Title";
const HEADING1_STYLE: &str = "Heading1";
const HEADING2_STYLE: &str = "Heading2";
const HEADING3_STYLE: &str = "Heading3";

const SCHEMA_HEADERS: [&str; 4] = ["Tên thuộc tính", "Kiểu dữ liệu", "Khóa", "Mô tả"];
const SUMMARY_HEADERS: [&str; 3] = ["STT", "Tên Bảng", "Mô Tả"];

/// Register the heading and caption styles every generated document uses.
fn with_styles(docx: Docx) -> Docx {
    let times = RunFonts::new()
        .ascii("Times New Roman")
        .hi_ansi("Times New Roman")
        .cs("Times New Roman");

    // size is in half-points, so 52 = 26pt
    docx.add_style(Style::new(TITLE_STYLE, StyleType::Paragraph).name("Title").size(52).bold())
        .add_style(Style::new(HEADING1_STYLE, StyleType::Paragraph).name("heading 1").size(32).bold())
        .add_style(Style::new(HEADING2_STYLE, StyleType::Paragraph).name("heading 2").size(26).bold())
        .add_style(Style::new(HEADING3_STYLE, StyleType::Paragraph).name("heading 3").size(24).bold())
        .add_style(
            Style::new(FIGURE_CAPTION_STYLE, StyleType::Paragraph)
                .name(FIGURE_CAPTION_STYLE)
                .fonts(times)
                .size(24) // 12pt
                .bold()
                .color("000000"),
        )
}

fn heading(text: &str, style: &str) -> Paragraph {
    Paragraph::new().style(style).add_run(Run::new().add_text(text))
}

fn text_paragraph(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

/// A full-width table with a bold header row.
fn header_table<I, R>(headers: &[&str], rows: I) -> Table
where
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<str>,
{
    let mut table_rows = Vec::new();

    let header_cells: Vec<TableCell> = headers
        .iter()
        .map(|h| {
            let run = Run::new().add_text(*h).bold();
            TableCell::new().add_paragraph(Paragraph::new().add_run(run))
        })
        .collect();
    table_rows.push(TableRow::new(header_cells));

    for row in rows {
        let cells: Vec<TableCell> = row
            .into_iter()
            .map(|cell_text| {
                let run = Run::new().add_text(cell_text.as_ref());
                TableCell::new().add_paragraph(Paragraph::new().add_run(run))
            })
            .collect();
        table_rows.push(TableRow::new(cells));
    }

    Table::new(table_rows)
}

fn pack(docx: Docx) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| anyhow::anyhow!("Failed to pack DOCX: {}", e))?;

    Ok(buf.into_inner())
}

/// Field-level schema listing: one heading and one four-column table per
/// database table.
pub fn schema_document(title: &str, tables: &[TableSpec]) -> Result<Vec<u8>> {
    let mut docx = with_styles(Docx::new()).add_paragraph(heading(title, TITLE_STYLE));

    for table in tables {
        debug!(table = table.name, fields = table.fields.len(), "writing table listing");
        docx = docx
            .add_paragraph(heading(&format!("Bảng: {}", table.name), HEADING1_STYLE))
            .add_table(header_table(
                &SCHEMA_HEADERS,
                table.fields.iter().map(|f| f.cells()),
            ));
    }

    // Trailing spacer after the last table
    docx = docx.add_paragraph(Paragraph::new());

    pack(docx)
}

/// Schema overview: a single table of index, table name and description.
pub fn summary_document(title: &str, rows: &[SummaryRow]) -> Result<Vec<u8>> {
    let docx = with_styles(Docx::new())
        .add_paragraph(heading(title, TITLE_STYLE))
        .add_table(header_table(&SUMMARY_HEADERS, rows.iter().map(|r| r.cells())));

    pack(docx)
}

/// Screenshot chapter.
///
/// Per group: a level-2 heading. Per figure: a level-3 heading, the picture
/// at the chapter's image width, a centred caption in the `hinh` style and
/// the description paragraph.
pub fn chapter_document(chapter: &Chapter) -> Result<Vec<u8>> {
    let mut docx = with_styles(Docx::new()).add_paragraph(heading(&chapter.title, TITLE_STYLE));

    for group in &chapter.groups {
        docx = docx.add_paragraph(heading(
            &format!("{} {}", group.code, group.title),
            HEADING2_STYLE,
        ));

        for (number, figure) in group.numbered() {
            debug!(figure = %number, source = %figure.source.display(), "adding figure");
            let picture = figure.picture(chapter.image_width_inches);
            let caption = Paragraph::new()
                .style(FIGURE_CAPTION_STYLE)
                .align(AlignmentType::Center)
                .add_run(Run::new().add_text(format!("Hình {number} {}", figure.caption)));

            docx = docx
                .add_paragraph(heading(&format!("{number} {}", figure.caption), HEADING3_STYLE))
                .add_paragraph(Paragraph::new().add_run(Run::new().add_image(picture)))
                .add_paragraph(caption)
                .add_paragraph(text_paragraph(&figure.description));
        }
    }

    pack(docx)
}
