// Document writers (DOCX, Markdown, CSV)

pub mod chapter;
pub mod csv;
pub mod docx;
pub mod markdown;

pub use chapter::{Chapter, Figure, FigureGroup};
pub use markdown::{ReadmeImage, ReadmeSection};
