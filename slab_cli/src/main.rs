//! # Slabwise CLI
//!
//! Terminal front end for the two-way slab design engine. Inputs come from
//! flags (with the usual defaults for a 4 m x 5 m interior panel) or from a
//! JSON file holding a full `TwoWaySlabInput`.
//!
//! ```text
//! slab_cli --lx 4 --ly 5 --thickness 12 --case 1 --bar RB9
//! slab_cli --input panel.json --settings settings.json --json
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};

use slab_core::calculations::reinforcement::GoverningReason;
use slab_core::loads::{LoadFactorSet, LoadInputs};
use slab_core::materials::{BarSize, MaterialProperties};
use slab_core::{calculate, CalcError, DesignSettings, EdgeCase, PanelGeometry, TwoWaySlabInput, TwoWaySlabResult};

/// Two-way slab design by the ACI Method 2 coefficient procedure
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Panel label
    #[arg(long, default_value = "S-1")]
    label: String,

    /// Short span (m)
    #[arg(long, default_value_t = 4.0)]
    lx: f64,

    /// Long span (m)
    #[arg(long, default_value_t = 5.0)]
    ly: f64,

    /// Slab thickness (cm)
    #[arg(short = 't', long, default_value_t = 12.0)]
    thickness: f64,

    /// Clear cover (cm)
    #[arg(long, default_value_t = 2.5)]
    cover: f64,

    /// Superimposed dead load (kg/m²)
    #[arg(long, default_value_t = 150.0)]
    sdl: f64,

    /// Live load (kg/m²)
    #[arg(long, default_value_t = 200.0)]
    ll: f64,

    /// Concrete strength f'c (ksc)
    #[arg(long, default_value_t = 240.0)]
    fc: f64,

    /// Steel yield strength fy (ksc)
    #[arg(long, default_value_t = 4000.0)]
    fy: f64,

    /// Edge-continuity case (1-9)
    #[arg(short = 'c', long = "case", default_value_t = 1)]
    edge_case: u8,

    /// Bar designation (RB6, RB9, DB10, DB12, DB16)
    #[arg(short = 'b', long, default_value = "RB9")]
    bar: String,

    /// Read the full panel input from a JSON file instead of the flags above
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Design settings JSON file (omitted fields keep their defaults)
    #[arg(short = 's', long)]
    settings: Option<PathBuf>,

    /// Load factor set override ("legacy" = 1.4D + 1.7L, "strength" = 1.2D + 1.6L)
    #[arg(long)]
    load_factors: Option<String>,

    /// Print the result (or error) as JSON
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn parse_log_level(&self) -> tracing::Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => tracing::Level::TRACE,
            "debug" => tracing::Level::DEBUG,
            "info" => tracing::Level::INFO,
            "error" => tracing::Level::ERROR,
            _ => tracing::Level::WARN,
        }
    }

    fn panel_input(&self) -> Result<TwoWaySlabInput> {
        if let Some(path) = &self.input {
            let json = read_file(path)?;
            return serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse panel input {}", path.display()));
        }

        Ok(TwoWaySlabInput {
            label: self.label.clone(),
            geometry: PanelGeometry::new(self.lx, self.ly, self.thickness, self.cover),
            edge_case: EdgeCase::from_number(self.edge_case)?,
            materials: MaterialProperties::new(self.fc, self.fy),
            loads: LoadInputs::new(self.sdl, self.ll),
            bar: BarSize::from_str_flexible(&self.bar)?,
        })
    }

    fn design_settings(&self) -> Result<DesignSettings> {
        let mut settings = match &self.settings {
            Some(path) => {
                let json = read_file(path)?;
                DesignSettings::from_json(&json)
                    .with_context(|| format!("Invalid design settings in {}", path.display()))?
            }
            None => DesignSettings::default(),
        };
        if let Some(name) = &self.load_factors {
            settings.load_factors = LoadFactorSet::from_str_flexible(name)?;
        }
        Ok(settings)
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn init_logging(level: tracing::Level) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    // stdout is reserved for results
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry().with(env_filter).with(fmt_layer).init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.parse_log_level());

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            if let Err(print_err) = report_failure(&e, args.json) {
                eprintln!("Error: {:#} ({})", e, print_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let input = args.panel_input()?;
    let settings = args.design_settings()?;
    info!(
        label = %input.label,
        short_span_m = input.geometry.short_span_m,
        long_span_m = input.geometry.long_span_m,
        thickness_cm = input.geometry.thickness_cm,
        edge_case = input.edge_case.number(),
        bar = %input.bar,
        "Designing panel"
    );
    debug!(load_factors = %settings.load_factors, "Design settings loaded");

    match calculate(&input, &settings) {
        Ok(result) => {
            for warning in &result.warnings {
                warn!("{}", warning);
            }
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_summary(&result, &settings);
            }
            info!(passes = result.passes(), "Design complete");
            Ok(if result.passes() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            })
        }
        Err(e) => {
            tracing::error!(code = e.error_code(), "{}", e);
            report_error(&e, args.json)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Report a failure that happened before or around the design run.
///
/// Engine errors keep their structured form even when wrapped in file
/// context; anything else (I/O, malformed JSON) gets a plain code.
fn report_failure(error: &anyhow::Error, as_json: bool) -> Result<()> {
    match error.downcast_ref::<CalcError>() {
        Some(calc) => tracing::error!(code = calc.error_code(), "{:#}", error),
        None => tracing::error!("{:#}", error),
    }
    if as_json {
        println!("{}", serde_json::to_string_pretty(&failure_body(error))?);
    } else {
        eprintln!("Error: {:#}", error);
    }
    Ok(())
}

fn error_body(error: &CalcError) -> serde_json::Value {
    serde_json::json!({
        "code": error.error_code(),
        "message": error.to_string(),
        "error": error,
    })
}

fn failure_body(error: &anyhow::Error) -> serde_json::Value {
    match error.downcast_ref::<CalcError>() {
        Some(calc) => {
            let mut body = error_body(calc);
            body["message"] = serde_json::Value::String(format!("{:#}", error));
            body
        }
        None => serde_json::json!({
            "code": "INPUT_ERROR",
            "message": format!("{:#}", error),
        }),
    }
}

fn report_error(error: &CalcError, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&error_body(error))?);
    } else {
        eprintln!("Error: {}", error);
        if let CalcError::DesignFailed { source, .. } = error {
            eprintln!("Cause: {}", source.root_cause());
        }
    }
    Ok(())
}

fn print_summary(result: &TwoWaySlabResult, settings: &DesignSettings) {
    let g = &result.geometry;
    let load = &result.factored_load;
    let coeffs = &result.coefficients;

    println!("═══════════════════════════════════════");
    println!("  TWO-WAY SLAB {} (ACI Method 2)", result.label);
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Spans:      {:.2} m x {:.2} m (m = {:.3})", g.short_span_m, g.long_span_m, coeffs.requested_ratio);
    println!("  Thickness:  {:.1} cm, cover {:.1} cm", g.thickness_cm, g.cover_cm);
    println!("  Edges:      {}", result.edge_case);
    println!("  Materials:  f'c = {:.0} ksc, fy = {:.0} ksc", result.materials.fc_ksc, result.materials.fy_ksc);
    println!(
        "  Bar:        {} ({})",
        result.bar,
        if result.bar.is_deformed() { "deformed" } else { "round" }
    );
    println!();
    println!("Loads ({}):", settings.load_factors);
    println!("  Self-weight    {:>8.1} kg/m²", load.self_weight);
    println!("  Dead (total)   {:>8.1} kg/m²", load.total_dead);
    println!("  Factored dead  {:>8.1} kg/m²", load.dead);
    println!("  Factored live  {:>8.1} kg/m²", load.live);
    println!("  wu             {:>8.1} kg/m²", load.total);
    println!();
    println!(
        "Effective depth: d_short = {:.2} cm, d_long = {:.2} cm",
        result.effective_depths.short_cm, result.effective_depths.long_cm
    );
    println!();
    println!("Reinforcement (per metre width):");
    for (case, r) in result.reinforcement.iter() {
        let reason = match r.governing {
            GoverningReason::Flexure => "flexure",
            GoverningReason::MinimumSteel => "min. steel",
        };
        println!(
            "  {:<32} M = {:>8.2} kg-m  As = {:>5.2} cm²  {:<16} ({}, {})",
            case.label(),
            r.moment_kgm,
            r.required_area_cm2,
            r.callout(),
            reason,
            case.placement().to_lowercase()
        );
    }
    println!();
    println!("Checks:");
    println!(
        "  Shear:      Vu = {:.0} kg vs φVc = {:.0} kg {}",
        result.shear.demand_kg,
        result.shear.capacity_kg,
        status_icon(result.shear.passes)
    );
    println!(
        "  Thickness:  h = {:.1} cm vs h_min = {:.1} cm {}",
        result.thickness.provided_cm,
        result.thickness.minimum_required_cm,
        status_icon(result.thickness.passes)
    );
    if !result.warnings.is_empty() {
        println!();
        println!("Warnings:");
        for warning in &result.warnings {
            println!("  - {}", warning);
        }
    }
    println!();
    println!("═══════════════════════════════════════");
    println!("  RESULT: {}", if result.passes() { "PASS" } else { "FAIL" });
    println!("═══════════════════════════════════════");
}

fn status_icon(pass: bool) -> &'static str {
    if pass {
        "[OK]"
    } else {
        "[FAIL]"
    }
}
