//! Bump and check commands

use crate::cli::{BumpArgs, CheckArgs, SourceArgs};
use crate::output;
use anyhow::{bail, Context, Result};
use camino::Utf8Path;
use kbump_core::{BumpConfig, BumpReport, Bumper, ConfigLoader, Manifest, TagPolicy};
use kbump_feed::AtomFeedClient;
use tracing::debug;

/// Bump image tags and write the manifest back
pub async fn run(args: BumpArgs, config_file: Option<&Utf8Path>) -> Result<()> {
    let config = load_config(&args.source, config_file)?;
    let (manifest, report) = process(&config).await?;

    print_report(&report);

    let path = &config.manifest.path;
    if args.dry_run {
        output::info(&format!("Dry run: {} was not written", path));
    } else {
        manifest
            .save(path)
            .with_context(|| format!("Failed to write manifest {}", path))?;
        output::success(&format!("Wrote {}", path));
    }

    Ok(())
}

/// Report pending bumps without writing, failing when any exist
pub async fn check(args: CheckArgs, config_file: Option<&Utf8Path>) -> Result<()> {
    let config = load_config(&args.source, config_file)?;
    let (_, report) = process(&config).await?;

    print_report(&report);

    let pending = report.bumped();
    if pending > 0 {
        bail!(
            "{} image tag(s) in {} can be bumped",
            pending,
            config.manifest.path
        );
    }

    output::success("All image tags are up to date");
    Ok(())
}

/// Resolve configuration from defaults, config file, environment and flags
fn load_config(source: &SourceArgs, config_file: Option<&Utf8Path>) -> Result<BumpConfig> {
    let loader = match config_file {
        Some(path) => ConfigLoader::with_file(path),
        None => ConfigLoader::new(),
    };
    let mut config = loader.load().context("Failed to load configuration")?;

    apply_overrides(&mut config, source);
    debug!("Resolved configuration: {:?}", config);

    Ok(config)
}

/// Apply CLI flags on top of the loaded configuration
fn apply_overrides(config: &mut BumpConfig, source: &SourceArgs) {
    if let Some(file) = &source.file {
        config.manifest.path = file.clone();
    }
    if let Some(words) = &source.forbidden_words {
        config.policy.forbidden_words = TagPolicy::parse_word_list(words);
    }
    if let Some(require_digit) = source.require_digit {
        config.policy.require_digit = require_digit;
    }
    if let Some(url) = &source.feed_url {
        config.feed.base_url = url.clone();
    }
}

/// Load the manifest and run the bump pipeline over it
async fn process(config: &BumpConfig) -> Result<(Manifest, BumpReport)> {
    let path = &config.manifest.path;
    let mut manifest =
        Manifest::load(path).with_context(|| format!("Failed to read manifest {}", path))?;

    let feed = AtomFeedClient::new(&config.feed)?;
    let report = Bumper::new(&feed, &config.policy)
        .run(&mut manifest)
        .await?;

    Ok((manifest, report))
}

fn print_report(report: &BumpReport) {
    for outcome in report.outcomes() {
        output::outcome(outcome);
    }

    let skipped: usize = report.images.iter().map(|i| i.filter.rejected()).sum();

    output::header("Summary");
    output::kv("Images", &report.images.len().to_string());
    output::kv("Bumped", &report.bumped().to_string());
    output::kv("Feed entries skipped", &skipped.to_string());

    if report.images.is_empty() {
        output::warning("Manifest lists no images");
    }
}
