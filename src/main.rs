//! Brickfall headless runner
//!
//! Plays one session with the demo autopilot and reports the result.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use brickfall::consts::FRAME_MS;
use brickfall::demo::Autopilot;
use brickfall::platform::RenderData;
use brickfall::sim::Playfield;
use brickfall::{Preset, Session, Tuning};

/// Play one headless session with the demo autopilot
#[derive(Parser, Debug)]
#[command(name = "brickfall", version, about)]
struct Args {
    /// Tuning preset (classic or coasting)
    #[arg(long, default_value = "classic", value_parser = parse_preset)]
    preset: Preset,

    /// RNG seed; seeded from the OS when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Frames to simulate before stopping
    #[arg(long, default_value_t = 60 * 120)]
    frames: u64,

    /// JSON tuning file, overrides the preset
    #[arg(long, value_name = "FILE")]
    tuning: Option<PathBuf>,

    /// Playfield width
    #[arg(long, default_value_t = 896.0)]
    width: f32,

    /// Playfield height
    #[arg(long, default_value_t = 600.0)]
    height: f32,
}

fn parse_preset(name: &str) -> Result<Preset, String> {
    Preset::from_str(name).ok_or_else(|| format!("unknown preset {name}"))
}

fn run(args: Args) -> Result<(), String> {
    let tuning = match &args.tuning {
        Some(path) => {
            let shown = path.display();
            let json = std::fs::read_to_string(path).map_err(|e| format!("{shown}: {e}"))?;
            Tuning::from_json(&json).map_err(|e| format!("{shown}: {e}"))?
        }
        None => Tuning::from_preset(args.preset),
    };

    let mut session = match args.seed {
        Some(seed) => Session::new(tuning, seed),
        None => Session::from_entropy(tuning),
    }
    .map_err(|e| e.to_string())?;

    session.on_game_over(|state| {
        log::info!("Game over signal after {:.1}s", state.time_ms / 1000.0);
    });

    let field = Playfield::new(args.width, args.height);
    let mut pilot = Autopilot::new();
    let mut frame: Vec<RenderData> = Vec::new();

    for _ in 0..args.frames {
        pilot.plan(session.state(), field);
        session.update(&pilot, field, FRAME_MS);
        frame.clear();
        session.render(&mut frame);
        if !session.is_running() {
            break;
        }
    }

    let state = session.state();
    println!(
        "{} preset: score {} after {} frames ({:?}, {} bricks on screen)",
        args.preset.as_str(),
        state.score,
        state.frame,
        state.phase,
        frame.len().saturating_sub(2)
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    log::info!("Brickfall (headless) starting...");

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
