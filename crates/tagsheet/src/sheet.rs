//! End-to-end sheet generation: specs in, SVG (and optional JSON report) out.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use tagsheet_core::{
    build_requests, render_tags, Canvas, ConfigError, LayoutError, LayoutOptions, LayoutStrategy,
    ParseError, PlacedTag,
};
use tagsheet_svg::{RenderError, SvgSurface};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Default output resolution, dots per inch.
pub const DEFAULT_DPI: u32 = 2400;

fn default_dpi() -> u32 {
    DEFAULT_DPI
}

#[derive(thiserror::Error, Debug)]
pub enum SheetIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Anything that can stop a sheet from being produced.
#[derive(thiserror::Error, Debug)]
pub enum SheetError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("failed to write report {}: {source}", path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: SheetIoError,
    },
}

/// Everything needed to produce one sheet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Output SVG path.
    pub file: PathBuf,
    /// `name:size[:range]` specifications, in placement order.
    pub specs: Vec<String>,
    #[serde(default)]
    pub canvas: Canvas,
    #[serde(default = "default_dpi")]
    pub dpi: u32,
    #[serde(default)]
    pub layout: LayoutOptions,
    #[serde(default)]
    pub report_path: Option<PathBuf>,
}

impl SheetConfig {
    pub fn new(file: impl Into<PathBuf>, specs: Vec<String>, layout: LayoutOptions) -> Self {
        Self {
            file: file.into(),
            specs,
            canvas: Canvas::default(),
            dpi: DEFAULT_DPI,
            layout,
            report_path: None,
        }
    }

    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, SheetIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), SheetIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// What ended up on the sheet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SheetReport {
    pub file: PathBuf,
    pub canvas: Canvas,
    pub dpi: u32,
    pub strategy: LayoutStrategy,
    pub tags: Vec<PlacedTag>,
}

impl SheetReport {
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, SheetIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), SheetIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Number of placed tags of `family`.
    pub fn count_of(&self, family: &str) -> usize {
        self.tags.iter().filter(|t| t.family.name == family).count()
    }
}

/// Generate the sheet described by `config`.
///
/// The layout selection is validated before anything else, and the SVG is
/// only published at `config.file` once every tag has been placed and drawn
/// and the report (if requested) has been written. On error the output path
/// is left untouched.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(config), fields(file = %config.file.display()))
)]
pub fn generate_sheet(config: &SheetConfig) -> Result<SheetReport, SheetError> {
    let strategy = config.layout.strategy()?;
    let requests = build_requests(config.specs.as_slice())?;
    debug!(
        "sheet: {} request(s), {} layout, {}x{} mm at {} dpi",
        requests.len(),
        strategy.name(),
        config.canvas.width,
        config.canvas.height,
        config.dpi
    );

    let mut surface = SvgSurface::open(
        &config.file,
        config.canvas.width,
        config.canvas.height,
        config.dpi,
    )?;
    let tags = strategy.layout(&requests, &config.canvas)?;
    render_tags(&mut surface, &tags)?;

    let report = SheetReport {
        file: surface.path().to_path_buf(),
        canvas: config.canvas,
        dpi: config.dpi,
        strategy,
        tags,
    };
    if let Some(path) = &config.report_path {
        report
            .write_json(path)
            .map_err(|source| SheetError::Report {
                path: path.clone(),
                source,
            })?;
        debug!("wrote report to {}", path.display());
    }

    let file = match surface.finish() {
        Ok(file) => file,
        Err(err) => {
            // a report must not describe a sheet that was never published
            if let Some(path) = &config.report_path {
                let _ = fs::remove_file(path);
            }
            return Err(err.into());
        }
    };
    info!("wrote {} tags to {}", report.tags.len(), file.display());
    Ok(report)
}
