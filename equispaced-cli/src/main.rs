mod parsers;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use equispaced::{ResampleOptions, Variant, resample_signal};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about = "Resample an (x, y) signal onto an equally spaced grid")]
struct Cli {
    /// Two-column input file, or `-` for stdin
    input: PathBuf,
    /// First output x (defaults to the first input x)
    #[arg(long, allow_negative_numbers = true)]
    from: Option<f64>,
    /// Last output x (defaults to the last input x)
    #[arg(long, allow_negative_numbers = true)]
    to: Option<f64>,
    /// Number of output points
    #[arg(short = 'n', long)]
    points: Option<usize>,
    /// smooth, slot or unit
    #[arg(short, long)]
    variant: Option<Variant>,
    /// JSON file with resampling options; flags take precedence
    #[arg(long)]
    options: Option<PathBuf>,
    /// Write JSON instead of tab-separated columns
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn resample_options(&self) -> Result<ResampleOptions> {
        let mut opts = match &self.options {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                serde_json::from_str(&content)
                    .with_context(|| format!("invalid options in {}", path.display()))?
            }
            None => ResampleOptions::default(),
        };
        if self.from.is_some() {
            opts.from = self.from;
        }
        if self.to.is_some() {
            opts.to = self.to;
        }
        if let Some(n) = self.points {
            opts.number_of_points = n;
        }
        if let Some(variant) = self.variant {
            opts.variant = variant;
        }
        Ok(opts)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let opts = cli.resample_options()?;
    let (x, y) = parsers::read_columns(&cli.input)?;
    tracing::info!(
        input = %cli.input.display(),
        points = x.len(),
        variant = %opts.variant,
        "read signal"
    );

    let signal = resample_signal(&x, &y, &opts)
        .with_context(|| format!("failed to resample {}", cli.input.display()))?;

    let mut stdout = std::io::stdout().lock();
    if cli.json {
        serde_json::to_writer(&mut stdout, &signal).context("failed to write JSON")?;
        writeln!(stdout)?;
    } else {
        stdout.write_all(parsers::format_columns(&signal.x, &signal.y).as_bytes())?;
    }
    Ok(())
}
