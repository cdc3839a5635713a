//! Output files: card PNG and the pro JSON sidecar.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::catalog::ProductConcept;
use crate::config::Variant;
use crate::foundation::error::{SparkError, SparkResult};
use crate::render::CardBitmap;

/// Timestamp format recorded in `generated_at`.
pub const GENERATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
const FILE_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// File-name-safe form of a product name.
pub fn slug(name: &str) -> String {
    let mut s = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            ' ' | '-' => s.push('_'),
            c if c.is_alphanumeric() => s.extend(c.to_lowercase()),
            _ => {}
        }
    }
    if s.is_empty() { "spark".to_string() } else { s }
}

/// `spark_<slug>` for classic, `spark_<slug>_<YYYYmmdd_HHMMSS>` for pro.
pub fn card_file_stem(variant: Variant, slug: &str, now: NaiveDateTime) -> String {
    match variant {
        Variant::Classic => format!("spark_{slug}"),
        Variant::Pro => format!("spark_{slug}_{}", now.format(FILE_STAMP_FORMAT)),
    }
}

pub fn ensure_output_dir(dir: &Path) -> SparkResult<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;
    Ok(())
}

pub fn write_png(bitmap: &CardBitmap, path: &Path) -> SparkResult<()> {
    image::save_buffer_with_format(
        path,
        &bitmap.data,
        bitmap.width,
        bitmap.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// JSON record written next to a pro card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sidecar {
    pub generated_at: String,
    pub category: String,
    pub pain_points: Vec<String>,
    pub concept: ProductConcept,
    pub card_path: String,
}

/// Same stem as the card, `.json` extension.
pub fn sidecar_path(card_path: &Path) -> PathBuf {
    card_path.with_extension("json")
}

pub fn write_sidecar(sidecar: &Sidecar, path: &Path) -> SparkResult<()> {
    let json = serde_json::to_string_pretty(sidecar)
        .map_err(|e| SparkError::serde(format!("encode sidecar: {e}")))?;
    std::fs::write(path, json).with_context(|| format!("write sidecar '{}'", path.display()))?;
    Ok(())
}

pub fn read_sidecar(path: &Path) -> SparkResult<Sidecar> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read sidecar '{}'", path.display()))?;
    serde_json::from_str(&s)
        .map_err(|e| SparkError::serde(format!("sidecar '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../tests/unit/persist.rs"]
mod tests;
