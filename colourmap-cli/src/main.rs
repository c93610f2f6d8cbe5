use std::{
    error::Error,
    fs, io,
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand};
use colourmap::{Colour, ColourFile, ColourMapRegistry, GradientCache, RecoveryPolicy};
use log::{info, LevelFilter};
use serde::Serialize;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Colour file with extra colours and colour maps
    #[arg(short, long)]
    colours: Option<PathBuf>,
    /// Reject descriptors containing characters that are not part of any word
    #[arg(long)]
    strict: bool,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available colour maps
    List,
    /// Print the anchors of a colour map as JSON
    Resolve { name: String },
    /// Print colours of a colour map for evenly spaced values as CSV
    Sample {
        name: String,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        min: f64,
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        max: f64,
        #[arg(short, long, default_value_t = 11)]
        steps: usize,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        offset: f64,
        #[arg(long = "loop")]
        looped: bool,
        /// Hex colour used for a value of zero
        #[arg(long)]
        background: Option<String>,
    },
}

#[derive(Serialize)]
struct Sample {
    value: f64,
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn load_colour_file(path: &Path) -> Result<ColourFile, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let file = ColourFile::parse(&text)?;
    info!(
        "Loaded {} colours and {} colour maps from {}",
        file.colours().count(),
        file.maps().count(),
        path.display()
    );
    Ok(file)
}

/// Evenly spaced values from `min` to `max`, both included.
fn sample_points(min: f64, max: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![min],
        _ => (0..steps)
            .map(|i| min + (max - min) * (i as f64 / (steps - 1) as f64))
            .collect(),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    TermLogger::init(
        log_level(cli.verbose),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let colour_file = cli.colours.as_deref().map(load_colour_file).transpose()?;
    let policy = if cli.strict {
        RecoveryPolicy::Strict
    } else {
        RecoveryPolicy::Lenient
    };
    let registry = colour_file
        .as_ref()
        .map(ColourMapRegistry::from_colour_file)
        .unwrap_or_default()
        .with_policy(policy);

    match cli.command {
        Commands::List => {
            for name in registry.names() {
                let descriptor = registry.descriptor(name).unwrap_or_default();
                match colour_file.as_ref().and_then(|f| f.capabilities(name)) {
                    Some(capabilities) => println!(
                        "{name}\t{descriptor}\ttracks={} clicks={} keyboard={}",
                        capabilities.tracks, capabilities.clicks, capabilities.keyboard
                    ),
                    None => println!("{name}\t{descriptor}"),
                }
            }
        }
        Commands::Resolve { name } => {
            let gradient = registry.resolve(&name)?;
            println!("{}", serde_json::to_string_pretty(&gradient)?);
        }
        Commands::Sample {
            name,
            min,
            max,
            steps,
            offset,
            looped,
            background,
        } => {
            let background = background
                .map(|code| {
                    Colour::from_hex_str(&code)
                        .ok_or_else(|| format!("invalid background colour: {code}"))
                })
                .transpose()?;

            let gradient = registry.resolve(&name)?;
            info!("Building cache for {} anchors over [{}, {})", gradient.len(), min, max);
            let cache = GradientCache::builder(gradient, min, max)
                .offset(offset)
                .looped(looped)
                .background(background)
                .build();

            let mut writer = csv::Writer::from_writer(io::stdout());
            for value in sample_points(min, max, steps) {
                let Colour { r, g, b, a } = cache.lookup(value);
                writer.serialize(Sample { value, r, g, b, a })?;
            }
            writer.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_sample_arguments() {
        let cli = Cli::parse_from([
            "colourmap", "sample", "jet", "--min", "-5", "--max", "5", "--loop",
        ]);
        match cli.command {
            Commands::Sample {
                name,
                min,
                max,
                looped,
                ..
            } => {
                assert_eq!(name, "jet");
                assert_eq!((min, max), (-5.0, 5.0));
                assert!(looped);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn sample_points_include_both_ends() {
        assert_eq!(sample_points(0.0, 10.0, 3), vec![0.0, 5.0, 10.0]);
        assert_eq!(sample_points(2.0, 10.0, 1), vec![2.0]);
        assert!(sample_points(0.0, 1.0, 0).is_empty());
    }
}
