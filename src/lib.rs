#![forbid(unsafe_code)]
//! One Spark: a random consumer product idea per run, rendered as a shareable card.
//!
//! A run picks a category, looks up its consumer pain points, produces a product
//! concept (static table, text-generation API, or local remix), renders a fixed-layout
//! PNG card and writes it to an output directory. The pro variant also writes a JSON
//! sidecar next to the card.
//!
//! ```no_run
//! let record = onespark::run_spark(None)?;
//! println!("{} -> {}", record.concept.name, record.card_path.display());
//! # Ok::<(), onespark::SparkError>(())
//! ```

pub mod catalog;
pub mod concept;
pub mod config;
pub mod foundation;
pub mod persist;
pub mod render;
pub mod selection;
pub mod spark;

pub use catalog::{Catalog, Intensity, PainPoint, ProductConcept};
pub use concept::anthropic::AnthropicGenerator;
pub use concept::static_table::{StaticMatch, resolve_static};
pub use concept::{ConceptGenerator, DEMO_PRODUCT_NAME, demo_concept};
pub use config::{ApiConfig, ConceptSource, FontConfig, SparkConfig, Variant};
pub use foundation::core::{Canvas, Rgba8};
pub use foundation::error::{GenerationError, SparkError, SparkResult};
pub use persist::{Sidecar, read_sidecar};
pub use render::{CardBitmap, CardContent, CardTemplate, FontSet, render_card};
pub use spark::{SparkEngine, SparkRecord, run_spark};
