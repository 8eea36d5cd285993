//! Quokka regression harness CLI.
//!
//! Renders laid-out box trees from JSON fixtures and checks them against
//! authored pixel patterns. A fixture is the output of the upstream
//! layout stage frozen to disk: no markup or stylesheet is parsed here.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use quokka_paint::{BoxNode, SamplingImagePainter, SolidFragmentPainter, render_page};
use quokka_pattern::{PixelPattern, assert_pixels};
use quokka_raster::write_png_scaled;
use serde::Deserialize;

/// A render regression fixture: one laid-out page plus its expectation.
#[derive(Debug, Deserialize)]
struct Fixture {
    /// Test case name, used in diagnostics and artifact file names.
    name: String,
    /// Render with hinting (crisp pixel-aligned fills). Defaults to on;
    /// pixel-exact comparison needs it.
    #[serde(default = "default_hinting")]
    hinting: bool,
    /// The laid-out page box tree.
    page: BoxNode,
    /// Expected pixel pattern; omit to only render.
    #[serde(default)]
    expected: Option<String>,
}

fn default_hinting() -> bool {
    true
}

#[derive(Parser)]
#[command(name = "quokka", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a fixture and compare it against its expected pattern.
    Check {
        /// Path to the fixture JSON file.
        fixture: PathBuf,
        /// Directory to write PNG artifacts into.
        #[arg(long)]
        artifacts: Option<PathBuf>,
        /// Version or build tag appended to artifact file names.
        #[arg(long, default_value = env!("CARGO_PKG_VERSION"))]
        tag: String,
        /// Integer upscale factor for artifact previews.
        #[arg(long, default_value_t = 20)]
        scale: u32,
    },
    /// Render a fixture to a PNG without comparing.
    Render {
        /// Path to the fixture JSON file.
        fixture: PathBuf,
        /// Directory to write the PNG into.
        #[arg(long, default_value = "target/render")]
        output: PathBuf,
        /// Version or build tag appended to the file name.
        #[arg(long, default_value = env!("CARGO_PKG_VERSION"))]
        tag: String,
        /// Integer upscale factor.
        #[arg(long, default_value_t = 20)]
        scale: u32,
    },
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Command::Check {
            fixture,
            artifacts,
            tag,
            scale,
        } => check(&fixture, artifacts.as_deref(), &tag, scale),
        Command::Render {
            fixture,
            output,
            tag,
            scale,
        } => {
            let fixture = load_fixture(&fixture)?;
            let pixels = render_fixture_page(fixture.page, fixture.hinting)?;
            let path = write_png_scaled(&output, &fixture.name, &tag, &pixels, scale)?;
            println!("rendered {} to {}", fixture.name, path.display());
            Ok(())
        }
    }
}

fn check(
    fixture_path: &std::path::Path,
    artifacts: Option<&std::path::Path>,
    tag: &str,
    scale: u32,
) -> Result<()> {
    let fixture = load_fixture(fixture_path)?;
    let pixels = render_fixture_page(fixture.page, fixture.hinting)?;

    if let Some(dir) = artifacts {
        let path = write_png_scaled(dir, &fixture.name, tag, &pixels, scale)?;
        println!("artifact: {}", path.display());
    }

    let Some(expected) = fixture.expected else {
        println!("{} {} (no expected pattern)", "RENDERED".yellow(), fixture.name);
        return Ok(());
    };
    let pattern = PixelPattern::parse(&expected)
        .with_context(|| format!("fixture '{}' has a malformed expected pattern", fixture.name))?;

    match assert_pixels(&fixture.name, &pattern, &pixels) {
        Ok(()) => {
            println!("{} {}", "PASS".green().bold(), fixture.name);
            Ok(())
        }
        Err(error) => {
            eprintln!("{} {error}", "FAIL".red().bold());
            std::process::exit(1);
        }
    }
}

fn load_fixture(path: &std::path::Path) -> Result<Fixture> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read fixture '{}'", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse fixture '{}'", path.display()))
}

fn render_fixture_page(page: BoxNode, hinting: bool) -> Result<quokka_raster::Pixels> {
    render_page(page, hinting, &SolidFragmentPainter, &SamplingImagePainter)
        .context("render failed")
}
