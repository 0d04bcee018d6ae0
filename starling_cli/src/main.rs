use clap::{Parser, Subcommand, ValueEnum};
use starling_core::simulation::{SimulationInputs, SimulationSnapshot};
use starling_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "starling")]
#[command(about = "Frank-Starling cardiac output simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show cardiac output at one EDV (default)
    Point {
        #[command(flatten)]
        inputs: InputArgs,
    },

    /// Print the Frank-Starling curve for a preset
    Curve {
        /// Preset name (see `starling presets`)
        #[arg(long, default_value = "baseline")]
        preset: String,

        /// Lowest EDV sampled (mL)
        #[arg(long, allow_negative_numbers = true)]
        min_edv: Option<f64>,

        /// Highest EDV sampled (mL)
        #[arg(long, allow_negative_numbers = true)]
        max_edv: Option<f64>,

        /// Number of intervals; the curve has steps + 1 points
        #[arg(long)]
        steps: Option<usize>,

        #[arg(long, value_enum, default_value_t = CurveFormat::Table)]
        format: CurveFormat,
    },

    /// List built-in parameter presets
    Presets,

    /// Write text, JSON and CSV reports for one set of inputs
    Report {
        #[command(flatten)]
        inputs: InputArgs,

        /// Output directory (defaults to the configured export directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct InputArgs {
    /// End-diastolic volume in mL (defaults to the configured initial EDV)
    #[arg(long, allow_negative_numbers = true)]
    edv: Option<f64>,

    /// Inotropy shift in percent, -100 to 100
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    inotropy: f64,

    /// Afterload shift in percent, -100 to 100
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    afterload: f64,
}

impl InputArgs {
    fn resolve(&self, config: &Config) -> SimulationInputs {
        SimulationInputs {
            edv: self.edv.unwrap_or(config.simulation.initial_edv),
            inotropy_pct: self.inotropy,
            afterload_pct: self.afterload,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CurveFormat {
    Table,
    Csv,
    Json,
}

fn main() -> Result<()> {
    // Initialize logging
    starling_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    tracing::debug!("Simulation config: {:?}", config.simulation);

    match cli.command {
        Some(Commands::Point { inputs }) => cmd_point(inputs.resolve(&config), &config),
        Some(Commands::Curve {
            preset,
            min_edv,
            max_edv,
            steps,
            format,
        }) => cmd_curve(&preset, min_edv, max_edv, steps, format, &config),
        Some(Commands::Presets) => cmd_presets(),
        Some(Commands::Report { inputs, out_dir }) => {
            cmd_report(inputs.resolve(&config), out_dir, &config)
        }
        None => {
            // Default to "point" at the configured initial EDV
            cmd_point(
                SimulationInputs::at_edv(config.simulation.initial_edv),
                &config,
            )
        }
    }
}

fn cmd_point(inputs: SimulationInputs, config: &Config) -> Result<()> {
    let snapshot = simulation::simulate(inputs, &config.simulation)?;
    display_snapshot(&snapshot);
    Ok(())
}

fn cmd_curve(
    preset_name: &str,
    min_edv: Option<f64>,
    max_edv: Option<f64>,
    steps: Option<usize>,
    format: CurveFormat,
    config: &Config,
) -> Result<()> {
    let preset = presets::find(preset_name)
        .ok_or_else(|| Error::UnknownPreset(preset_name.to_string()))?;

    let curve = generate_curve(
        &preset.params,
        min_edv.unwrap_or(config.simulation.min_edv),
        max_edv.unwrap_or(config.simulation.max_edv),
        steps.unwrap_or(config.simulation.curve_steps),
    )?;

    match format {
        CurveFormat::Table => {
            println!("{} ({})", preset.name, preset.description);
            println!("{:>8}  {:>8}  {:>8}", "EDV mL", "SV mL", "CO L/min");
            for point in &curve {
                println!("{:>8.1}  {:>8.1}  {:>8.2}", point.edv, point.sv, point.co);
            }
        }
        CurveFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            for point in &curve {
                writer.serialize(point)?;
            }
            writer.flush()?;
        }
        CurveFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&curve)?);
        }
    }

    Ok(())
}

fn cmd_presets() -> Result<()> {
    println!(
        "{:<22} {:>8} {:>7} {:>7} {:>5} {:>5}",
        "NAME", "MIN EDV", "SV MAX", "KM", "HILL", "HR"
    );
    for preset in presets::catalog() {
        let p = &preset.params;
        println!(
            "{:<22} {:>8.0} {:>7.0} {:>7.0} {:>5.1} {:>5.0}",
            preset.name, p.min_edv_for_ejection, p.sv_max, p.km_effective, p.hill_coefficient,
            p.heart_rate
        );
    }
    Ok(())
}

fn cmd_report(inputs: SimulationInputs, out_dir: Option<PathBuf>, config: &Config) -> Result<()> {
    let snapshot = simulation::simulate(inputs, &config.simulation)?;
    let sim_report = SimulationReport::new(snapshot);
    let out_dir = out_dir.unwrap_or_else(|| config.export.output_dir.clone());

    let files = report::export_all(&out_dir, &sim_report)?;

    print!("{}", report::render_text(&sim_report));
    println!();
    println!("✓ Report written to {}", out_dir.display());
    println!("  Text: {}", files.text.display());
    println!("  JSON: {}", files.json.display());
    println!("  CSV:  {} ({} rows)", files.csv.display(), files.csv_rows);

    Ok(())
}

fn display_snapshot(snapshot: &SimulationSnapshot) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  CARDIAC OUTPUT @ EDV {:.0} mL", snapshot.inputs.edv);
    println!("╰─────────────────────────────────────────╯");
    println!();

    for scenario in snapshot.scenarios() {
        println!("  {}", scenario.label);
        println!("  → CO: {:.2} L/min", scenario.current.co);
        println!("  → SV: {:.1} mL/beat", scenario.current.sv);
        println!();
    }

    println!("  Heart rate: {:.0} beats/min", snapshot.heart_rate);
    println!();
}
