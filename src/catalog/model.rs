use serde::{Deserialize, Serialize};

/// How strongly consumers feel a pain point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Minor annoyance.
    Low,
    /// Recurring complaint.
    #[default]
    Medium,
    /// Strong, frequently voiced frustration.
    High,
}

/// A consumer frustration attached to a category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PainPoint {
    /// The frustration, in the consumer's words.
    pub text: String,
    /// Where the complaint was observed. Empty when unknown.
    pub source: String,
    /// How strongly it is felt.
    pub intensity: Intensity,
}

impl PainPoint {
    /// Pain point with unknown source and medium intensity.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: String::new(),
            intensity: Intensity::Medium,
        }
    }

    /// Builder-style source override.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Builder-style intensity override.
    pub fn with_intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = intensity;
        self
    }
}

impl<'de> Deserialize<'de> for PainPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Full {
                #[serde(alias = "pain")]
                text: String,
                #[serde(default)]
                source: String,
                #[serde(default)]
                intensity: Intensity,
            },
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Text(text) => Self::new(text),
            Repr::Full {
                text,
                source,
                intensity,
            } => Self {
                text,
                source,
                intensity,
            },
        })
    }
}

/// An invented product.
///
/// Every field is optional on input: a reply missing a key renders a placeholder
/// instead of failing the run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductConcept {
    /// Brandable product name.
    #[serde(default = "default_name")]
    pub name: String,
    /// One-line pitch.
    #[serde(default)]
    pub tagline: String,
    /// The pain point the concept claims to address.
    #[serde(default)]
    pub pain_solved: String,
    /// How the product works.
    #[serde(default)]
    pub description: String,
    /// Ordered feature bullets.
    #[serde(default)]
    pub features: Vec<String>,
    /// Price or price range, free-form.
    #[serde(default = "default_price_point")]
    pub price_point: String,
    /// "X meets Y" aesthetic comparison.
    #[serde(default)]
    pub vibe: String,
}

fn default_name() -> String {
    "Product".to_string()
}

fn default_price_point() -> String {
    "$TBD".to_string()
}

impl Default for ProductConcept {
    fn default() -> Self {
        Self {
            name: default_name(),
            tagline: String::new(),
            pain_solved: String::new(),
            description: String::new(),
            features: Vec::new(),
            price_point: default_price_point(),
            vibe: String::new(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/model.rs"]
mod tests;
