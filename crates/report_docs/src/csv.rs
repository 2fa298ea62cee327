use anyhow::{Context, Result};
use report_content::TableSpec;

const SCHEMA_CSV_HEADERS: [&str; 5] = ["table", "field", "type", "key", "description"];

/// Generate a CSV string from headers and rows.
///
/// Each field is properly quoted/escaped by the `csv` crate.
pub fn generate_csv(headers: &[&str], rows: &[Vec<String>]) -> Result<String> {
    generate_delimited(headers, rows, b',')
}

/// Flat export of the schema, one record per field.
pub fn schema_csv(tables: &[TableSpec]) -> Result<String> {
    let rows: Vec<Vec<String>> = tables
        .iter()
        .flat_map(|table| {
            table.fields.iter().map(move |f| {
                vec![
                    table.name.to_string(),
                    f.name.to_string(),
                    f.sql_type.to_string(),
                    f.key.as_str().to_string(),
                    f.description.to_string(),
                ]
            })
        })
        .collect();

    generate_csv(&SCHEMA_CSV_HEADERS, &rows)
}

fn generate_delimited(headers: &[&str], rows: &[Vec<String>], delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer
        .write_record(headers)
        .context("Failed to write header record")?;

    for row in rows {
        writer
            .write_record(row)
            .context("Failed to write data record")?;
    }

    let bytes = writer.into_inner().context("Failed to flush CSV writer")?;

    String::from_utf8(bytes).context("CSV output contained invalid UTF-8")
}
