//! clowder - deterministic cat appearance generation
//!
//! Headless harness around the generation pipeline: seeds a colony engine,
//! deals out per-cat seeds and sexes, runs the pipeline and emits one JSON
//! line per cat for inspection and golden-file diffing.

use std::io::Write;
use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use clowder_cats::{AgeStage, Cat, GenerationConfig, Sex};
use clowder_core::SeededRng;

/// One emitted line: the cat plus its resolved stage and sprite frame.
#[derive(Serialize)]
struct CatRecord<'a> {
    #[serde(flatten)]
    cat: &'a Cat,
    stage: AgeStage,
    sprite: u8,
}

fn main() -> Result<()> {
    // Initialize tracing with WARN level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = CliOptions::parse(env::args().skip(1));

    let config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => GenerationConfig::default(),
    };

    info!(
        world_seed = cli.world_seed,
        count = cli.count,
        litter_size = cli.litter_size,
        "generating colony"
    );

    // The colony engine only deals out identities; every cat gets its own
    // engine inside the pipeline.
    let mut colony = SeededRng::new(cli.world_seed);
    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            fs::File::create(path)
                .with_context(|| format!("creating output {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout().lock()),
    };

    let mut next_id = 0u64;
    let deal = |colony: &mut SeededRng| {
        let seed = colony.next_u32();
        let sex = if colony.next_bool() {
            Sex::Female
        } else {
            Sex::Male
        };
        (seed, sex)
    };

    let emit = |out: &mut dyn Write, cat: &Cat| -> Result<()> {
        let record = CatRecord {
            cat,
            stage: cat.stage(cli.moon),
            sprite: cat.sprite_index(cli.moon),
        };
        serde_json::to_writer(&mut *out, &record)?;
        writeln!(out)?;
        Ok(())
    };

    for _ in 0..cli.count {
        let (seed, sex) = deal(&mut colony);
        let cat = Cat::generate(next_id, seed, sex, 0, cli.moon, &config)?;
        emit(&mut *out, &cat)?;
        next_id += 1;
    }

    if cli.litter_size > 0 {
        let (seed, _) = deal(&mut colony);
        let mother = Cat::generate(next_id, seed, Sex::Female, 0, cli.moon, &config)?;
        next_id += 1;
        let (seed, _) = deal(&mut colony);
        let father = Cat::generate(next_id, seed, Sex::Male, 0, cli.moon, &config)?;
        next_id += 1;
        emit(&mut *out, &mother)?;
        emit(&mut *out, &father)?;
        for _ in 0..cli.litter_size {
            let (seed, sex) = deal(&mut colony);
            let kit = Cat::from_parents(
                next_id,
                seed,
                sex,
                cli.moon,
                cli.moon,
                (&mother.looks, &father.looks),
                &config,
            )?;
            emit(&mut *out, &kit)?;
            next_id += 1;
        }
    }

    info!(cats = next_id, "done");
    Ok(())
}

/// Command line options
struct CliOptions {
    world_seed: u32,
    count: u64,
    litter_size: u64,
    moon: u32,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl CliOptions {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Self {
        let mut opts = CliOptions {
            world_seed: 0,
            count: 12,
            litter_size: 0,
            moon: 60,
            config: None,
            output: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--world-seed" => {
                    if let Some(raw) = args.next() {
                        match raw.parse::<u32>() {
                            Ok(value) => opts.world_seed = value,
                            Err(err) => {
                                tracing::error!(%err, value = %raw, "--world-seed must be an integer");
                            }
                        }
                    } else {
                        tracing::error!("--world-seed requires an integer");
                    }
                }
                "--count" => {
                    if let Some(raw) = args.next() {
                        match raw.parse::<u64>() {
                            Ok(value) => opts.count = value,
                            Err(err) => {
                                tracing::error!(%err, value = %raw, "--count must be an integer");
                            }
                        }
                    } else {
                        tracing::error!("--count requires an integer");
                    }
                }
                "--litter-size" => {
                    if let Some(raw) = args.next() {
                        match raw.parse::<u64>() {
                            Ok(value) => opts.litter_size = value,
                            Err(err) => {
                                tracing::error!(%err, value = %raw, "--litter-size must be an integer");
                            }
                        }
                    } else {
                        tracing::error!("--litter-size requires an integer");
                    }
                }
                "--moon" => {
                    if let Some(raw) = args.next() {
                        match raw.parse::<u32>() {
                            Ok(value) => opts.moon = value,
                            Err(err) => {
                                tracing::error!(%err, value = %raw, "--moon must be an integer");
                            }
                        }
                    } else {
                        tracing::error!("--moon requires an integer");
                    }
                }
                "--config" => {
                    if let Some(path) = args.next() {
                        opts.config = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--config requires a file path");
                    }
                }
                "--output" => {
                    if let Some(path) = args.next() {
                        opts.output = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--output requires a file path");
                    }
                }
                other => {
                    tracing::warn!(argument = %other, "ignoring unknown argument");
                }
            }
        }

        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliOptions {
        CliOptions::parse(args.iter().map(|s| (*s).to_owned()))
    }

    #[test]
    fn defaults_without_arguments() {
        let opts = parse(&[]);
        assert_eq!(opts.world_seed, 0);
        assert_eq!(opts.count, 12);
        assert_eq!(opts.litter_size, 0);
        assert_eq!(opts.moon, 60);
        assert!(opts.config.is_none());
        assert!(opts.output.is_none());
    }

    #[test]
    fn parses_all_flags() {
        let opts = parse(&[
            "--world-seed",
            "2007",
            "--count",
            "3",
            "--litter-size",
            "2",
            "--moon",
            "5",
            "--config",
            "rates.toml",
            "--output",
            "cats.jsonl",
        ]);
        assert_eq!(opts.world_seed, 2007);
        assert_eq!(opts.count, 3);
        assert_eq!(opts.litter_size, 2);
        assert_eq!(opts.moon, 5);
        assert_eq!(opts.config, Some(PathBuf::from("rates.toml")));
        assert_eq!(opts.output, Some(PathBuf::from("cats.jsonl")));
    }

    #[test]
    fn malformed_values_keep_defaults() {
        let opts = parse(&["--count", "many", "--world-seed"]);
        assert_eq!(opts.count, 12);
        assert_eq!(opts.world_seed, 0);
    }
}
