use docx_rs::Pic;
use report_core::ReportError;
use std::path::{Path, PathBuf};

/// English Metric Units per inch, as used by DrawingML.
const EMU_PER_INCH: f64 = 914_400.0;

/// One screenshot with its caption and description, ready to render.
#[derive(Debug, Clone)]
pub struct Figure {
    pub source: PathBuf,
    pub caption: String,
    pub description: String,
    image: Vec<u8>,
    width_px: u32,
    height_px: u32,
}

impl Figure {
    /// Decode `image` up front so a broken screenshot is reported by name
    /// instead of failing deep inside the DOCX writer.
    pub fn new(
        source: impl Into<PathBuf>,
        caption: impl Into<String>,
        description: impl Into<String>,
        image: Vec<u8>,
    ) -> Result<Self, ReportError> {
        let source = source.into();
        let decoded = image::load_from_memory(&image).map_err(|e| ReportError::ImageDecode {
            path: source.clone(),
            reason: e.to_string(),
        })?;
        let (width_px, height_px) = (decoded.width(), decoded.height());
        if width_px == 0 || height_px == 0 {
            return Err(ReportError::ImageDecode {
                path: source,
                reason: "image has no pixels".into(),
            });
        }

        Ok(Self {
            source,
            caption: caption.into(),
            description: description.into(),
            image,
            width_px,
            height_px,
        })
    }

    /// Read and decode a screenshot from disk.
    pub fn load(
        path: &Path,
        caption: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ReportError> {
        let image = std::fs::read(path).map_err(|source| ReportError::ReadImage {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(path, caption, description, image)
    }

    /// Rendered size in EMU for a given width, keeping the aspect ratio.
    pub fn emu_size(&self, width_inches: f64) -> (u32, u32) {
        let width = (width_inches * EMU_PER_INCH).round();
        let height = (width * f64::from(self.height_px) / f64::from(self.width_px)).round();
        (width as u32, height as u32)
    }

    pub(crate) fn picture(&self, width_inches: f64) -> Pic {
        let (w, h) = self.emu_size(width_inches);
        Pic::new(&self.image).size(w, h)
    }
}

/// The figures of one role, under a section code such as `5.1`.
#[derive(Debug, Clone)]
pub struct FigureGroup {
    pub code: String,
    pub title: String,
    pub figures: Vec<Figure>,
}

impl FigureGroup {
    /// Figure numbers restart at 1 in every group: `5.1.1`, `5.1.2`, ...
    pub fn numbered(&self) -> impl Iterator<Item = (String, &Figure)> {
        self.figures
            .iter()
            .enumerate()
            .map(|(i, f)| (format!("{}.{}", self.code, i + 1), f))
    }
}

/// A screenshot chapter.
#[derive(Debug, Clone)]
pub struct Chapter {
    pub title: String,
    pub image_width_inches: f64,
    pub groups: Vec<FigureGroup>,
}

impl Chapter {
    pub fn figure_count(&self) -> usize {
        self.groups.iter().map(|g| g.figures.len()).sum()
    }
}
