//! Gradix CLI
//!
//! Compile gradient descriptions to CSS snippets and Tailwind class
//! strings, sample colors along the axis, or build a spec from a palette.
//!
//! Gradient JSON comes from a file argument or stdin (`-`). Structural
//! validation happens here, at the boundary: specs that deserialize but
//! carry bad stop colors or too few stops are rejected before any engine
//! call.

use std::fs;
use std::io::Read;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gradix_core::{color_at_percent, GradientSpec};
use gradix_css::{css_snippet, tailwind_arbitrary, tailwind_from_via_to};

#[derive(Parser)]
#[command(name = "gradix")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Multi-stop gradient engine: CSS and Tailwind code generation", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a CSS background-image snippet for a gradient
    Css {
        /// Gradient JSON file, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,

        /// Preview opacity; adds an opacity line when below 1
        #[arg(long, default_value_t = 1.0)]
        opacity: f32,
    },

    /// Print Tailwind classes: the bg-[...] arbitrary value and the
    /// from/via/to shorthand
    Tailwind {
        /// Gradient JSON file, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,
    },

    /// Sample the gradient color at a percentage along the axis
    Sample {
        /// Gradient JSON file, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,

        /// Sample position in percent; out-of-range values saturate
        #[arg(long)]
        at: f32,
    },

    /// Build a gradient from an ordered list of hex colors and print its JSON
    Preset {
        /// Hex colors, first to last; positions are distributed evenly
        #[arg(required = true, num_args = 2..)]
        colors: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Css { input, opacity } => cmd_css(&input, opacity),
        Commands::Tailwind { input } => cmd_tailwind(&input),
        Commands::Sample { input, at } => cmd_sample(&input, at),
        Commands::Preset { colors } => cmd_preset(&colors),
    }
}

fn cmd_css(input: &str, opacity: f32) -> Result<()> {
    let spec = load_spec(input)?;
    println!("{}", css_snippet(&spec, opacity)?);
    Ok(())
}

fn cmd_tailwind(input: &str) -> Result<()> {
    let spec = load_spec(input)?;
    let css = gradix_css::build_css_gradient(&spec)?;
    println!("{}", tailwind_arbitrary(&css));
    println!("{}", tailwind_from_via_to(&spec.stops));
    Ok(())
}

fn cmd_sample(input: &str, at: f32) -> Result<()> {
    let spec = load_spec(input)?;
    let color = color_at_percent(&spec.stops, at)?;
    println!("{}", color.to_css_string());
    Ok(())
}

fn cmd_preset(colors: &[String]) -> Result<()> {
    let spec = GradientSpec::from_palette(colors);
    spec.validate()
        .context("palette contains an invalid hex color")?;
    println!("{}", serde_json::to_string_pretty(&spec)?);
    Ok(())
}

fn load_spec(input: &str) -> Result<GradientSpec> {
    let json = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading gradient JSON from stdin")?;
        buf
    } else {
        fs::read_to_string(input).with_context(|| format!("reading {input}"))?
    };

    let spec: GradientSpec =
        serde_json::from_str(&json).context("parsing gradient JSON")?;
    spec.validate().context("validating gradient")?;
    debug!(kind = spec.kind.as_str(), stops = spec.stops.len(), "loaded gradient");
    Ok(spec)
}
