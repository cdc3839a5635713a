//! The one-shot pipeline: select, conceive, render, persist.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, PainPoint, ProductConcept};
use crate::concept::anthropic::AnthropicGenerator;
use crate::concept::prompt::build_prompt;
use crate::concept::remix::remix_concept;
use crate::concept::static_table::resolve_static;
use crate::concept::{ConceptGenerator, demo_concept};
use crate::config::{ConceptSource, SparkConfig, Variant};
use crate::foundation::error::{GenerationError, SparkError, SparkResult};
use crate::persist::{self, GENERATED_AT_FORMAT, Sidecar};
use crate::render::{CardContent, CardTemplate, FontSet, render_card};
use crate::selection::{get_pain_points, pick_primary_pain, sample_pain_points};

/// Pain points offered to the generative and remix sources.
pub const PROMPT_PAIN_POINTS: usize = 4;

/// Source tag used when a concept's pain is not one of the selected ones.
const CONCEPT_SOURCE_TAG: &str = "concept";

/// Outcome of one run. Created once, never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SparkRecord {
    pub category: String,
    pub concept: ProductConcept,
    /// The pain the card is about.
    pub pain_point: PainPoint,
    pub card_path: PathBuf,
    /// Set when a sidecar was written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    /// Pain points considered during the run.
    pub pain_points: Vec<PainPoint>,
    pub concept_source: ConceptSource,
}

struct Conceived {
    concept: ProductConcept,
    pain_point: PainPoint,
    pain_points: Vec<PainPoint>,
}

pub struct SparkEngine {
    catalog: Catalog,
    config: SparkConfig,
    generator: Option<Box<dyn ConceptGenerator>>,
    fonts: FontSet,
}

impl SparkEngine {
    /// Engine over `catalog`. Fonts are probed from `config.fonts`.
    pub fn new(catalog: Catalog, config: SparkConfig) -> Self {
        let fonts = FontSet::probe(&config.fonts);
        Self {
            catalog,
            config,
            generator: None,
            fonts,
        }
    }

    /// Load the configured catalog, falling back to the built-in one for the variant.
    pub fn from_config(config: SparkConfig) -> SparkResult<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::builtin(config.variant)?,
        };
        Ok(Self::new(catalog, config))
    }

    /// Replace the HTTP generator, e.g. with a closure in tests.
    pub fn with_generator(mut self, generator: impl ConceptGenerator + 'static) -> Self {
        self.generator = Some(Box::new(generator));
        self
    }

    pub fn with_fonts(mut self, fonts: FontSet) -> Self {
        self.fonts = fonts;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &SparkConfig {
        &self.config
    }

    pub fn fonts(&self) -> &FontSet {
        &self.fonts
    }

    /// Run with a uniformly drawn category.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R, now: NaiveDateTime) -> SparkResult<SparkRecord> {
        let category = crate::selection::select_category(&self.catalog, rng)
            .ok_or_else(|| SparkError::validation("catalog has no categories"))?
            .to_string();
        self.run_for_category(&category, rng, now)
    }

    #[tracing::instrument(
        skip(self, rng, now),
        fields(variant = %self.config.variant, source = %self.config.concept_source())
    )]
    pub fn run_for_category<R: Rng + ?Sized>(
        &self,
        category: &str,
        rng: &mut R,
        now: NaiveDateTime,
    ) -> SparkResult<SparkRecord> {
        let pains = get_pain_points(&self.catalog, category);
        tracing::debug!(count = pains.len(), "pain points loaded");

        let conceived = match self.config.concept_source() {
            ConceptSource::Static => {
                let primary = pick_primary_pain(&pains, rng)
                    .ok_or_else(|| SparkError::validation("category has no pain points"))?
                    .clone();
                let concept = self.static_concept(category, &primary, rng);
                Conceived {
                    concept,
                    pain_point: primary,
                    pain_points: pains.into_owned(),
                }
            }
            ConceptSource::Generative => {
                let selected = sample_pain_points(&pains, PROMPT_PAIN_POINTS, rng);
                let concept = self.generated_concept(category, &selected);
                conceived_from(concept, selected)
            }
            ConceptSource::Remix => {
                let selected = sample_pain_points(&pains, PROMPT_PAIN_POINTS, rng);
                let concept = remix_concept(&self.catalog, category, &selected, rng)
                    .unwrap_or_else(|| {
                        tracing::warn!("catalog has no concepts to remix, using demo concept");
                        demo_concept(&selected)
                    });
                conceived_from(concept, selected)
            }
        };

        self.finish(category, conceived, now)
    }

    /// Static run about an explicitly chosen pain point.
    pub fn run_with_pain<R: Rng + ?Sized>(
        &self,
        category: &str,
        pain: &PainPoint,
        rng: &mut R,
        now: NaiveDateTime,
    ) -> SparkResult<SparkRecord> {
        let concept = self.static_concept(category, pain, rng);
        let conceived = Conceived {
            concept,
            pain_point: pain.clone(),
            pain_points: get_pain_points(&self.catalog, category).into_owned(),
        };
        self.finish(category, conceived, now)
    }

    fn static_concept<R: Rng + ?Sized>(
        &self,
        category: &str,
        pain: &PainPoint,
        rng: &mut R,
    ) -> ProductConcept {
        match resolve_static(&self.catalog, category, pain, rng) {
            Some(hit) => {
                tracing::debug!(name = %hit.concept.name, matched = ?hit.matched, "static concept");
                hit.concept.clone()
            }
            None => {
                tracing::warn!("catalog has no static concepts, using demo concept");
                demo_concept(std::slice::from_ref(pain))
            }
        }
    }

    /// Ask the configured generator for a concept without falling back.
    ///
    /// Failures surface as [`SparkError::Generation`].
    pub fn generate_concept(
        &self,
        category: &str,
        selected: &[PainPoint],
    ) -> SparkResult<ProductConcept> {
        let prompt = build_prompt(category, selected);
        let concept = match &self.generator {
            Some(g) => g.generate(&prompt)?,
            None => AnthropicGenerator::from_config(&self.config.api)?.generate(&prompt)?,
        };
        Ok(concept)
    }

    fn generated_concept(&self, category: &str, selected: &[PainPoint]) -> ProductConcept {
        match self.generate_concept(category, selected) {
            Ok(concept) => concept,
            Err(SparkError::Generation(GenerationError::MissingCredentials)) => {
                tracing::warn!("no api key configured, using demo concept");
                demo_concept(selected)
            }
            Err(e) => {
                tracing::warn!(error = %e, "concept generation failed, using demo concept");
                demo_concept(selected)
            }
        }
    }

    fn finish(
        &self,
        category: &str,
        conceived: Conceived,
        now: NaiveDateTime,
    ) -> SparkResult<SparkRecord> {
        let variant = self.config.variant;
        let Conceived {
            concept,
            pain_point,
            pain_points,
        } = conceived;

        let problem = match variant {
            Variant::Classic => pain_point.text.as_str(),
            Variant::Pro => concept.pain_solved.as_str(),
        };
        let template = CardTemplate::for_variant(variant);
        let bitmap = render_card(
            &template,
            &CardContent {
                concept: &concept,
                category,
                problem,
                generated_on: Some(now.date()),
            },
            &self.fonts,
        )?;

        let out_dir = self.config.resolved_output_dir();
        persist::ensure_output_dir(&out_dir)?;
        let stem = persist::card_file_stem(variant, &persist::slug(&concept.name), now);
        let card_path = out_dir.join(format!("{stem}.png"));
        persist::write_png(&bitmap, &card_path)?;
        tracing::debug!(path = %card_path.display(), "card written");

        let generated_at = if variant.writes_sidecar() {
            let generated_at = now.format(GENERATED_AT_FORMAT).to_string();
            let sidecar = Sidecar {
                generated_at: generated_at.clone(),
                category: category.to_string(),
                pain_points: pain_points.iter().map(|p| p.text.clone()).collect(),
                concept: concept.clone(),
                card_path: card_path.display().to_string(),
            };
            let sidecar_path = persist::sidecar_path(&card_path);
            persist::write_sidecar(&sidecar, &sidecar_path)?;
            tracing::debug!(path = %sidecar_path.display(), "sidecar written");
            Some(generated_at)
        } else {
            None
        };

        Ok(SparkRecord {
            category: category.to_string(),
            concept,
            pain_point,
            card_path,
            generated_at,
            pain_points,
            concept_source: self.config.concept_source(),
        })
    }
}

/// The selected pain the concept claims to solve, or a synthetic one.
fn conceived_from(concept: ProductConcept, selected: Vec<PainPoint>) -> Conceived {
    let pain_point = selected
        .iter()
        .find(|p| p.text == concept.pain_solved)
        .cloned()
        .unwrap_or_else(|| {
            PainPoint::new(concept.pain_solved.clone()).with_source(CONCEPT_SOURCE_TAG)
        });
    Conceived {
        concept,
        pain_point,
        pain_points: selected,
    }
}

/// Pro defaults with environment overrides, entropy RNG, local clock.
pub fn run_spark(output_dir: Option<&Path>) -> SparkResult<SparkRecord> {
    let mut config = SparkConfig::default().with_env();
    if let Some(dir) = output_dir {
        config.output_dir = Some(dir.to_path_buf());
    }
    let engine = SparkEngine::from_config(config)?;
    engine.run(&mut rand::thread_rng(), chrono::Local::now().naive_local())
}

#[cfg(test)]
#[path = "../tests/unit/spark.rs"]
mod tests;
