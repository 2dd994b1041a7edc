//! File-backed SVG surface with all-or-nothing output.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use log::debug;
use tagsheet_core::{PlacedTag, TagSurface};
use tempfile::NamedTempFile;

use crate::{RenderError, SvgDocument};

/// An SVG sheet that is written to `path` only when [`SvgSurface::finish`]
/// succeeds.
///
/// The document is staged in a temporary file in the target directory.
/// Dropping the surface without finishing (for example on a layout error)
/// deletes the staging file, so the target path never holds a partial sheet.
#[derive(Debug)]
pub struct SvgSurface {
    path: PathBuf,
    staging: NamedTempFile,
    doc: SvgDocument,
}

impl SvgSurface {
    /// Open a surface of `width × height` millimeters at `dpi` dots per inch.
    pub fn open(
        path: impl AsRef<Path>,
        width: f64,
        height: f64,
        dpi: u32,
    ) -> Result<Self, RenderError> {
        let path = path.as_ref().to_path_buf();
        let doc = SvgDocument::new(width, height, dpi)?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let staging = NamedTempFile::new_in(&dir).map_err(|source| RenderError::Open {
            path: path.clone(),
            source,
        })?;
        debug!(
            "svg: staging {} for {}",
            staging.path().display(),
            path.display()
        );
        Ok(Self { path, staging, doc })
    }

    /// Final output path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &SvgDocument {
        &self.doc
    }

    /// Write the document and atomically move it to the output path.
    pub fn finish(mut self) -> Result<PathBuf, RenderError> {
        let svg = self.doc.to_svg_string()?;
        let path = self.path;
        let write = |source| RenderError::Write {
            path: path.clone(),
            source,
        };
        self.staging.write_all(svg.as_bytes()).map_err(write)?;
        self.staging.as_file().sync_all().map_err(write)?;
        self.staging
            .persist(&path)
            .map_err(|err| RenderError::Persist {
                path: path.clone(),
                source: err.error,
            })?;
        debug!("svg: wrote {} tags to {}", self.doc.tag_count(), path.display());
        Ok(path)
    }
}

impl TagSurface for SvgSurface {
    type Error = RenderError;

    fn draw_tag(&mut self, tag: &PlacedTag) -> Result<(), RenderError> {
        self.doc.push_tag(tag)
    }
}
