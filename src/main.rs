use clap::Parser;
use gtk4::glib;
use molspin::config::Config;
use molspin::events::TickSource;
use molspin::model::{samples, Molecule};
use molspin::rendering::{CairoSurface, CanvasSize};
use molspin::utils::logger;
use molspin::{MoleculeView, ViewError};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod ui;

#[derive(Parser, Debug)]
#[command(name = "molspin", version, about = "Spinning ball-model molecule viewer")]
struct Cli {
    /// Molecule file (.xyz or .json)
    file: Option<PathBuf>,

    /// Built-in molecule: water, methane, co2, ammonia, ethanol
    #[arg(long, conflicts_with = "file")]
    sample: Option<String>,

    /// Render one frame to a PNG instead of opening a window
    #[arg(long, value_name = "OUT.png")]
    snapshot: Option<PathBuf>,

    #[arg(long)]
    width: Option<f64>,

    #[arg(long)]
    height: Option<f64>,

    /// Seconds of idle spin to apply before the snapshot
    #[arg(long, default_value_t = 0.0, requires = "snapshot")]
    spin: f64,
}

fn load(cli: &Cli) -> Result<Molecule, String> {
    if let Some(path) = &cli.file {
        return molspin::io::load_molecule(path).map_err(|e| format!("Cannot read {:?}: {}", path, e));
    }
    match &cli.sample {
        Some(name) => samples::by_name(name).ok_or_else(|| format!("Unknown sample {:?}", name)),
        None => Ok(samples::water()),
    }
}

fn render_snapshot(
    molecule: &Molecule,
    config: &Config,
    out: &Path,
    (width, height): (f64, f64),
    spin: f64,
) -> Result<(), ViewError> {
    let canvas = CanvasSize::new(width, height, 1.0)?;
    let surface = CairoSurface::new(canvas, config.view.background)?;
    let ticks = TickSource::new();
    let view = MoleculeView::new(&molecule.atoms, surface, canvas, &config.view, &ticks)?;
    if spin > 0.0 {
        ticks.emit(&spin);
    }
    view.with_surface_mut(|s| s.export_png(out))?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logger::init() {
        eprintln!("Logger already installed: {}", e);
    }
    let config = Config::load();

    let molecule = match load(&cli) {
        Ok(m) => m,
        Err(msg) => {
            log::error!("{}", msg);
            return ExitCode::FAILURE;
        }
    };

    if let Some(out) = &cli.snapshot {
        let size = (
            cli.width.unwrap_or(config.window.width as f64),
            cli.height.unwrap_or(config.window.height as f64),
        );
        return match render_snapshot(&molecule, &config, out, size, cli.spin) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                log::error!("Snapshot failed: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let mut config = config;
    if let Some(w) = cli.width {
        config.window.width = w.round() as i32;
    }
    if let Some(h) = cli.height {
        config.window.height = h.round() as i32;
    }

    if ui::run(molecule, config) == glib::ExitCode::SUCCESS {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
