//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use report_content::Role;
use std::path::PathBuf;
use std::str::FromStr;

/// lms-report - generate the LMS thesis documents from the compiled-in tables
#[derive(Parser, Debug)]
#[command(name = "lms-report")]
#[command(about = "Generate the schema documents, the interface chapter and the screenshot README", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to ./lms-report.json when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the field-level database schema
    Schema {
        /// Output format
        #[arg(long, value_enum, default_value_t = SchemaFormat::Docx)]
        format: SchemaFormat,

        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write the one-table schema overview
    Summary {
        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write the interface chapter with every screenshot
    Chapter {
        /// Screenshot root with one folder per role
        #[arg(long)]
        images: Option<PathBuf>,

        /// Leave out screenshots marked excluded in the ordering lists
        #[arg(long)]
        omit_excluded: bool,

        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rename screenshots from ASCII slugs to their Vietnamese labels
    Rename {
        /// Screenshot root with one folder per role
        #[arg(long)]
        images: Option<PathBuf>,

        /// Only rename these roles (default: all)
        #[arg(long = "role", value_parser = Role::from_str)]
        roles: Vec<Role>,

        /// Show what would be renamed without touching any file
        #[arg(long)]
        dry_run: bool,
    },

    /// Write the screenshot README with English captions
    Readme {
        /// Screenshot root with one folder per role
        #[arg(long)]
        images: Option<PathBuf>,

        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check the tables for inconsistencies
    Check {
        /// Screenshot root to compare against the ordering lists
        #[arg(long)]
        images: Option<PathBuf>,
    },

    /// Generate the schema, summary, chapter and README in one go
    All {
        /// Screenshot root with one folder per role
        #[arg(long)]
        images: Option<PathBuf>,
    },
}

impl Commands {
    /// Screenshot root given on the command line, if the command takes one.
    pub fn images_override(&self) -> Option<&PathBuf> {
        match self {
            Commands::Chapter { images, .. }
            | Commands::Rename { images, .. }
            | Commands::Readme { images, .. }
            | Commands::Check { images }
            | Commands::All { images } => images.as_ref(),
            Commands::Schema { .. } | Commands::Summary { .. } => None,
        }
    }
}

/// Output format for the schema listing
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaFormat {
    Docx,
    Markdown,
    Csv,
}

impl SchemaFormat {
    pub fn default_file_name(self) -> &'static str {
        match self {
            SchemaFormat::Docx => "database_schema.docx",
            SchemaFormat::Markdown => "database_schema.md",
            SchemaFormat::Csv => "database_schema.csv",
        }
    }
}
