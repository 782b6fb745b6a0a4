//! `glyphwarp` CLI: render deformed block letters to PNG, compare glyphs
//! and walk their parameter space.

mod error;
mod png;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use log::{debug, info};
use serde_json::json;

use glyphwarp_core::explore::{combinations, interpolate, sample, sweep_steps};
use glyphwarp_core::{KeyPolicy, Letter, ParamMap, ParamSchema, Renderer};
use glyphwarp_graphics::Raster;
use glyphwarp_metric::{MetricOptions, similarity, try_distance};

use crate::error::CliError;

#[derive(Parser)]
#[command(version, about = "glyphwarp: render and compare parametrically deformed letters")]
struct Cli {
    /// JSON file overriding the built-in parameter ranges
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Reject parameter names the letter does not define
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render one letter to a PNG file
    Render {
        /// Letter to draw (A, B, C, F, X or W)
        letter: Letter,

        /// Parameter override, repeatable
        #[arg(short, long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
        params: Vec<(String, f64)>,

        /// Output PNG path
        #[arg(short, long, default_value = "glyph.png")]
        output: PathBuf,
    },

    /// Print the blurred distance between two PNG files
    Distance {
        first: PathBuf,
        second: PathBuf,

        /// Compare raw pixel values without blurring
        #[arg(long)]
        plain: bool,
    },

    /// Move one parameter from its minimum to its maximum and print the
    /// distance to the canonical glyph at each step
    Sweep {
        letter: Letter,
        param: String,

        /// Number of evenly spaced steps, endpoints included
        #[arg(long, default_value_t = 11)]
        steps: usize,

        /// Directory for the rendered frames
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// Move every combination of parameters together from minimum to
    /// maximum and print each step as a JSON line
    Grid {
        letter: Letter,

        /// Parameters to combine; all of the letter's parameters if omitted
        #[arg(long, value_delimiter = ',', value_name = "NAME,...")]
        params: Vec<String>,

        /// Number of evenly spaced steps per combination, endpoints included
        #[arg(long, default_value_t = 5)]
        steps: usize,

        /// Directory for the rendered frames, one subdirectory per combination
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// Render random deformations and print each as a JSON line
    Sample {
        letter: Letter,

        #[arg(long, default_value_t = 10)]
        count: usize,

        #[arg(long, default_value_t = 1)]
        seed: u64,

        /// Directory for the rendered samples
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// Print the plain similarity between every pair of canonical letters
    Matrix {
        /// Emit JSON instead of a text table
        #[arg(long)]
        json: bool,
    },
}

fn parse_param(s: &str) -> Result<(String, f64), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got \"{s}\""))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing parameter name in \"{s}\""));
    }
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("bad value for {key}: {e}"))?;
    Ok((key.to_owned(), value))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let schema = match &cli.config {
        Some(path) => ParamSchema::from_json_file(path)?,
        None => ParamSchema::builtin(),
    };
    let policy = if cli.strict {
        KeyPolicy::Strict
    } else {
        KeyPolicy::Lenient
    };
    let mut renderer = Renderer::new(&schema)?.with_policy(policy);

    match &cli.command {
        Command::Render {
            letter,
            params,
            output,
        } => render(&mut renderer, *letter, params, output),
        Command::Distance {
            first,
            second,
            plain,
        } => distance(first, second, *plain),
        Command::Sweep {
            letter,
            param,
            steps,
            out,
        } => sweep(&mut renderer, *letter, param, *steps, out.as_deref()),
        Command::Grid {
            letter,
            params,
            steps,
            out,
        } => grid(&mut renderer, *letter, params, *steps, out.as_deref()),
        Command::Sample {
            letter,
            count,
            seed,
            out,
        } => sample_many(&mut renderer, *letter, *count, *seed, out.as_deref()),
        Command::Matrix { json } => matrix(&mut renderer, *json),
    }
}

// ---------------------------------------------------------------------------
// Subcommands
// ---------------------------------------------------------------------------

fn render(
    renderer: &mut Renderer<'_>,
    letter: Letter,
    params: &[(String, f64)],
    output: &Path,
) -> Result<(), CliError> {
    let map: ParamMap = params.iter().cloned().collect();
    let glyph = renderer.render(letter, &map)?;
    let canonical = renderer.canonical(letter)?;
    let d = try_distance(&canonical, &glyph)?;
    png::write(&glyph, output)?;
    println!(
        "{letter} -> {} (distance to canonical {d:.4})",
        output.display()
    );
    Ok(())
}

fn distance(first: &Path, second: &Path, plain: bool) -> Result<(), CliError> {
    let a = png::read(first)?;
    let b = png::read(second)?;
    let d = if plain {
        (1.0 - similarity(&a, &b, &MetricOptions::PLAIN)?).clamp(0.0, 1.0)
    } else {
        try_distance(&a, &b)?
    };
    println!("{d:.6}");
    Ok(())
}

fn sweep(
    renderer: &mut Renderer<'_>,
    letter: Letter,
    param: &str,
    steps: usize,
    out: Option<&Path>,
) -> Result<(), CliError> {
    let schema = renderer.schema();
    let canonical = renderer.canonical(letter)?;
    info!("sweeping {letter}.{param} over {steps} steps");

    println!("t\t{param}\tdistance");
    for (i, t) in sweep_steps(steps).into_iter().enumerate() {
        let values = interpolate(schema, letter, &[param], t)?;
        let glyph = renderer.render(letter, &values)?;
        let d = try_distance(&canonical, &glyph)?;
        let value = values.get(param).copied().unwrap_or(f64::NAN);
        println!("{t:.3}\t{value}\t{d:.6}");
        if let Some(dir) = out {
            png::write(&glyph, &dir.join(format!("{letter}_{param}_{i:03}.png")))?;
        }
    }
    Ok(())
}

fn grid(
    renderer: &mut Renderer<'_>,
    letter: Letter,
    params: &[String],
    steps: usize,
    out: Option<&Path>,
) -> Result<(), CliError> {
    let schema = renderer.schema();
    let requested: Vec<&str> = if params.is_empty() {
        schema.params(letter).collect()
    } else {
        params.iter().map(String::as_str).collect()
    };
    let mut names: Vec<&str> = Vec::with_capacity(requested.len());
    for name in requested {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    let canonical = renderer.canonical(letter)?;
    let families = combinations(&names);
    info!(
        "{} combinations of {} {letter} parameters over {steps} steps",
        families.len(),
        names.len()
    );

    for combo in &families {
        let family = combo.join("+");
        for (i, t) in sweep_steps(steps).into_iter().enumerate() {
            let values = interpolate(schema, letter, combo, t)?;
            let glyph = renderer.render(letter, &values)?;
            let d = try_distance(&canonical, &glyph)?;
            println!(
                "{}",
                json!({ "family": family, "t": t, "distance": d, "params": values })
            );
            if let Some(dir) = out {
                png::write(&glyph, &dir.join(&family).join(format!("{i:03}.png")))?;
            }
        }
    }
    Ok(())
}

fn sample_many(
    renderer: &mut Renderer<'_>,
    letter: Letter,
    count: usize,
    mut seed: u64,
    out: Option<&Path>,
) -> Result<(), CliError> {
    let schema = renderer.schema();
    let canonical = renderer.canonical(letter)?;
    debug!("sampling {count} variants of {letter} from seed {seed}");

    for i in 0..count {
        let values = sample(schema, letter, &mut seed);
        let glyph = renderer.render(letter, &values)?;
        let d = try_distance(&canonical, &glyph)?;
        println!(
            "{}",
            json!({ "index": i, "letter": letter.to_string(), "distance": d, "params": values })
        );
        if let Some(dir) = out {
            png::write(&glyph, &dir.join(format!("{letter}_sample_{i:03}.png")))?;
        }
    }
    Ok(())
}

fn matrix(renderer: &mut Renderer<'_>, as_json: bool) -> Result<(), CliError> {
    let mut glyphs: Vec<(Letter, Raster)> = Vec::with_capacity(Letter::ALL.len());
    for letter in Letter::ALL {
        glyphs.push((letter, renderer.canonical(letter)?));
    }

    let mut table: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
    let mut rows = Vec::with_capacity(glyphs.len());
    for (la, a) in &glyphs {
        let mut row = Vec::with_capacity(glyphs.len());
        for (lb, b) in &glyphs {
            let s = similarity(a, b, &MetricOptions::PLAIN)?;
            table
                .entry(la.to_string())
                .or_default()
                .insert(lb.to_string(), s);
            row.push(s);
        }
        rows.push((*la, row));
    }

    if as_json {
        println!("{:#}", json!(table));
        return Ok(());
    }
    let header: String = glyphs.iter().map(|(l, _)| format!("{l:>8}")).collect();
    println!(" {header}");
    for (letter, row) in rows {
        let cells: String = row.iter().map(|s| format!("{s:>8.4}")).collect();
        println!("{letter}{cells}");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
