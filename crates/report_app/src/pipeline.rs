//! The generation pipelines behind each subcommand.
//!
//! Every pipeline is one linear pass: gather content, render it, write the
//! file. Printing is left to the binary.

use anyhow::{Context, Result};
use report_content::{
    CheckResult, Role, SCHEMA, SCHEMA_TITLE, SUMMARY, SUMMARY_TITLE, UNDESCRIBED, chapter_title,
    check::check_screenshots_on_disk, default_caption, file_stem, merge_order,
    run_content_checks,
};
use report_core::ReportConfig;
use report_docs::markdown::{render_readme, schema_markdown};
use report_docs::{Chapter, Figure, FigureGroup, ReadmeImage, ReadmeSection, csv, docx};
use report_fs::{RenameReport, list_screenshots, rename_screenshots, role_dir};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::cli::SchemaFormat;

pub const SUMMARY_FILE: &str = "database_schema_summary.docx";
pub const CHAPTER_FILE: &str = "bao_cao_chuong5.docx";
pub const README_FILE: &str = "README.md";

/// Write `bytes` to `path`, creating parent directories as needed.
fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    debug!(bytes = bytes.len(), "Writing file: {}", path.display());
    std::fs::write(path, bytes).with_context(|| format!("Failed to write file: {}", path.display()))
}

pub fn write_schema(path: &Path, format: SchemaFormat) -> Result<()> {
    let bytes = match format {
        SchemaFormat::Docx => docx::schema_document(SCHEMA_TITLE, SCHEMA)?,
        SchemaFormat::Markdown => schema_markdown(SCHEMA_TITLE, SCHEMA).into_bytes(),
        SchemaFormat::Csv => csv::schema_csv(SCHEMA)?.into_bytes(),
    };
    write_output(path, &bytes)?;
    info!(tables = SCHEMA.len(), ?format, "Schema written to {}", path.display());
    Ok(())
}

pub fn write_summary(path: &Path) -> Result<()> {
    let bytes = docx::summary_document(SUMMARY_TITLE, SUMMARY)?;
    write_output(path, &bytes)?;
    info!(rows = SUMMARY.len(), "Summary written to {}", path.display());
    Ok(())
}

/// Order, caption and load the screenshots of one role folder.
///
/// Returns `None` when the folder does not exist; the chapter then has no
/// section for that role.
fn role_figures(config: &ReportConfig, role: Role) -> Result<Option<Vec<Figure>>> {
    let dir = role_dir(&config.images_dir, role);
    let Some(present) = list_screenshots(&dir)? else {
        warn!("Skipping {role}: folder {} not found", dir.display());
        return Ok(None);
    };

    let mut order = merge_order(&role.explicit_order(), &present);
    if config.omit_excluded {
        let excluded = role.excluded_files();
        order.retain(|file| !excluded.iter().any(|e| *e == file.as_str()));
    }

    let figures = order
        .iter()
        .map(|file| -> Result<Figure> {
            let caption = default_caption(file_stem(file));
            let description = role.description(file).unwrap_or(UNDESCRIBED);
            Ok(Figure::load(&dir.join(file), caption, description)?)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Some(figures))
}

/// Collect every role's screenshots into a chapter, in chapter order.
pub fn build_chapter(config: &ReportConfig) -> Result<Chapter> {
    let mut groups = Vec::new();

    for role in Role::CHAPTER_ORDER {
        let Some(figures) = role_figures(config, role)? else {
            continue;
        };
        debug!(figures = figures.len(), "Collected {role} screenshots");
        groups.push(FigureGroup {
            code: role.section_code(config.chapter_number),
            title: role.title().to_string(),
            figures,
        });
    }

    Ok(Chapter {
        title: chapter_title(config.chapter_number),
        image_width_inches: config.image_width_inches,
        groups,
    })
}

/// Build and write the chapter. Returns the number of figures.
pub fn write_chapter(config: &ReportConfig, path: &Path) -> Result<usize> {
    let chapter = build_chapter(config)?;
    let bytes = docx::chapter_document(&chapter)?;
    write_output(path, &bytes)?;

    let figures = chapter.figure_count();
    info!(groups = chapter.groups.len(), figures, "Chapter written to {}", path.display());
    Ok(figures)
}

/// README sections in README role order, images sorted by file name.
pub fn build_readme(config: &ReportConfig) -> Result<Vec<ReadmeSection>> {
    let prefix = config.readme_image_prefix.trim_end_matches('/');
    let mut sections = Vec::new();

    for role in Role::README_ORDER {
        let Some(files) = list_screenshots(&role_dir(&config.images_dir, role))? else {
            continue;
        };
        let images = files
            .iter()
            .map(|file| ReadmeImage {
                caption: role.english_caption_for_file(file),
                path: format!("{prefix}/{}/{file}", role.folder()),
            })
            .collect();
        sections.push(ReadmeSection {
            heading: role.readme_heading().to_string(),
            images,
        });
    }

    Ok(sections)
}

pub fn write_readme(config: &ReportConfig, path: &Path) -> Result<()> {
    let sections = build_readme(config)?;
    write_output(path, render_readme(&sections).as_bytes())?;
    info!(sections = sections.len(), "README written to {}", path.display());
    Ok(())
}

/// Rename screenshots in the given roles, or in every role when none is given.
pub fn run_rename(config: &ReportConfig, roles: &[Role], dry_run: bool) -> Result<RenameReport> {
    let all = Role::CHAPTER_ORDER;
    let roles = if roles.is_empty() {
        &all[..]
    } else {
        roles
    };
    rename_screenshots(&config.images_dir, roles, dry_run)
}

/// Table checks, plus a comparison with the screenshot folders when the
/// images directory exists.
pub fn run_check(config: &ReportConfig) -> Result<Vec<CheckResult>> {
    let mut results = run_content_checks();

    if config.images_dir.is_dir() {
        for role in Role::CHAPTER_ORDER {
            if let Some(present) = list_screenshots(&role_dir(&config.images_dir, role))? {
                results.extend(check_screenshots_on_disk(role, &present));
            }
        }
    } else {
        debug!("No images directory at {}", config.images_dir.display());
    }

    Ok(results)
}
