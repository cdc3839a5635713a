use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;

use onespark::{ConceptSource, SparkConfig, SparkEngine, SparkRecord, Variant};

#[derive(Parser, Debug)]
#[command(name = "onespark", version, about = "Generate one product idea card")]
struct Cli {
    /// Output directory (default: ~/sparks).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Card variant.
    #[arg(long, value_enum)]
    variant: Option<VariantChoice>,

    /// Concept source (default: static for classic, generative for pro).
    #[arg(long, value_enum)]
    source: Option<SourceChoice>,

    /// Use this category instead of a random one.
    #[arg(long)]
    category: Option<String>,

    /// Seed for reproducible selection.
    #[arg(long)]
    seed: Option<u64>,

    /// Custom catalog JSON replacing the built-in tables.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Run configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantChoice {
    Classic,
    Pro,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SourceChoice {
    Static,
    Generative,
    Remix,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = build_config(&cli)?;
    let source = config.concept_source();
    if source == ConceptSource::Generative && config.api.api_key.is_none() {
        eprintln!(
            "warning: {} not set, the demo concept will be used",
            onespark::config::ENV_API_KEY
        );
    }

    let engine = SparkEngine::from_config(config)?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let now = chrono::Local::now().naive_local();

    println!("ONE SPARK ({} / {source})", engine.config().variant);
    let record = match cli.category.as_deref() {
        Some(category) => engine.run_for_category(category, &mut rng, now)?,
        None => engine.run(&mut rng, now)?,
    };
    print_record(&record)?;
    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "onespark=warn",
        1 => "onespark=info",
        _ => "onespark=debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Defaults, then the config file, then the environment, then flags.
fn build_config(cli: &Cli) -> anyhow::Result<SparkConfig> {
    let mut config = match &cli.config {
        Some(path) => SparkConfig::from_path(path)?,
        None => SparkConfig::default(),
    };
    if let Some(v) = cli.variant {
        config.variant = match v {
            VariantChoice::Classic => Variant::Classic,
            VariantChoice::Pro => Variant::Pro,
        };
    }
    let mut config = config.with_env();
    if let Some(out) = &cli.out {
        config.output_dir = Some(out.clone());
    }
    if let Some(s) = cli.source {
        config.source = Some(match s {
            SourceChoice::Static => ConceptSource::Static,
            SourceChoice::Generative => ConceptSource::Generative,
            SourceChoice::Remix => ConceptSource::Remix,
        });
    }
    if let Some(catalog) = &cli.catalog {
        config.catalog_path = Some(catalog.clone());
    }
    Ok(config)
}

fn print_record(record: &SparkRecord) -> anyhow::Result<()> {
    let c = &record.concept;
    println!("Category: {}", record.category.to_uppercase());
    println!("Pain points considered: {}", record.pain_points.len());
    for p in &record.pain_points {
        println!("  - {}", p.text);
    }
    println!();
    println!("Product: {}", c.name);
    println!("Tagline: {}", c.tagline);
    println!("Solves: {}", record.pain_point.text);
    println!("Price: {}", c.price_point);
    println!("Vibe: {}", c.vibe);
    println!();
    println!("Card: {}", record.card_path.display());
    if record.generated_at.is_some() {
        println!(
            "Data: {}",
            onespark::persist::sidecar_path(&record.card_path).display()
        );
    }
    println!();
    let json = serde_json::to_string_pretty(c).context("encode concept json")?;
    println!("{json}");
    Ok(())
}
