//! Font capability probing.
//!
//! Cards prefer the named bold/regular faces. When either is missing a single system
//! sans-serif face serves every role, and with no font at all text is skipped.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::FontConfig;
use crate::render::theme::FontRole;

/// Raw font file contents plus the face index inside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontFace {
    pub(crate) bytes: Arc<Vec<u8>>,
    pub(crate) index: u32,
}

impl FontFace {
    pub fn from_bytes(bytes: Vec<u8>, index: u32) -> Self {
        Self {
            bytes: Arc::new(bytes),
            index,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontSource {
    /// Both named faces were found.
    Named,
    /// One system sans-serif face stands in for every role.
    SystemDefault,
    /// No usable font; text is not drawn.
    None,
}

#[derive(Clone, Debug)]
pub struct FontSet {
    bold: Option<FontFace>,
    regular: Option<FontFace>,
    source: FontSource,
}

impl FontSet {
    /// Empty set. Cards render without text.
    pub fn none() -> Self {
        Self {
            bold: None,
            regular: None,
            source: FontSource::None,
        }
    }

    pub fn named(bold: FontFace, regular: FontFace) -> Self {
        Self {
            bold: Some(bold),
            regular: Some(regular),
            source: FontSource::Named,
        }
    }

    pub fn single(face: FontFace) -> Self {
        Self {
            bold: Some(face.clone()),
            regular: Some(face),
            source: FontSource::SystemDefault,
        }
    }

    /// Find the fonts described by `cfg`. Never fails; degradation is logged.
    #[tracing::instrument(skip(cfg))]
    pub fn probe(cfg: &FontConfig) -> Self {
        let bold = find_named(&cfg.dirs, &cfg.bold_file);
        let regular = find_named(&cfg.dirs, &cfg.regular_file);
        if let (Some(bold), Some(regular)) = (bold, regular) {
            tracing::debug!("using named card fonts");
            return Self::named(bold, regular);
        }

        if cfg.system_fallback {
            if let Some(face) = system_sans_serif() {
                tracing::warn!(
                    bold = %cfg.bold_file,
                    regular = %cfg.regular_file,
                    "named fonts not found, using system sans-serif for every role"
                );
                return Self::single(face);
            }
        }

        tracing::warn!("no usable font found, card text will be skipped");
        Self::none()
    }

    pub fn face(&self, role: FontRole) -> Option<&FontFace> {
        match role {
            FontRole::Bold => self.bold.as_ref(),
            FontRole::Regular => self.regular.as_ref(),
        }
    }

    pub fn source(&self) -> FontSource {
        self.source
    }

    pub fn is_empty(&self) -> bool {
        self.bold.is_none() && self.regular.is_none()
    }
}

fn find_named(dirs: &[PathBuf], file: &str) -> Option<FontFace> {
    dirs.iter().find_map(|dir| read_face(&dir.join(file)))
}

fn read_face(path: &Path) -> Option<FontFace> {
    match std::fs::read(path) {
        Ok(bytes) if !bytes.is_empty() => Some(FontFace::from_bytes(bytes, 0)),
        Ok(_) => None,
        Err(e) => {
            tracing::trace!(path = %path.display(), error = %e, "font not readable");
            None
        }
    }
}

fn system_sans_serif() -> Option<FontFace> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    let families = [usvg::fontdb::Family::SansSerif];
    let query = usvg::fontdb::Query {
        families: &families,
        ..usvg::fontdb::Query::default()
    };
    let id = db.query(&query)?;
    db.with_face_data(id, |data, index| FontFace::from_bytes(data.to_vec(), index))
}

#[cfg(test)]
#[path = "../../tests/unit/render/fonts.rs"]
mod tests;
