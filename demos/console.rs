//! Console Tower of Hanoi
//!
//! A line-oriented front end driving the game controller: peg clicks,
//! drag-and-drop, undo/redo, hints and animated auto-solve.
//!
//! Run with: cargo run --example console -- --disks 5 --speed fast
//!
//! Commands:
//!   move <from> <to>   move the top disk (pegs as A/B/C or 0/1/2)
//!   click <peg>        select a peg, or move from the selected peg
//!   drag <disk>        pick up a top disk
//!   drop <peg>         release the picked disk
//!   undo | redo        step through history
//!   hint               show the next optimal move
//!   solve [speed]      reset and animate the optimal solution (Ctrl-C stops)
//!   speed <preset>     slow, medium or fast
//!   reset [disks]      start over, optionally with 3..=12 disks
//!   show | json        print the board, or the full view as JSON
//!   quit               (Ctrl-C at the prompt also exits)

use chrono::Utc;
use clap::Parser;
use hanoi_engine::core::PegId;
use hanoi_engine::game::{
    GameConfig, GameController, GameError, Gestures, Selection, SolveSpeed, StepOutcome,
};
use hanoi_engine::GameBuilder;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Play Tower of Hanoi in the terminal
#[derive(Parser)]
#[command(name = "hanoi-console")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of disks (3..=12)
    #[arg(short, long)]
    disks: Option<u8>,

    /// Auto-solve speed preset
    #[arg(short, long)]
    speed: Option<SolveSpeed>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => GameConfig::from_json(&tokio::fs::read_to_string(path).await?)?,
        None => GameConfig::default(),
    };
    let mut builder = GameBuilder::from_config(&config);
    if let Some(disks) = cli.disks {
        builder = builder.disk_count(disks);
    }
    if let Some(speed) = cli.speed {
        builder = builder.speed(speed);
    }
    let mut game = builder.build()?;
    info!(game = %game.id(), "Session started");

    println!("Move all disks from peg A to peg {}. Type 'help' for commands.", game.target());
    render(&game);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        // Once a solve has listened for Ctrl-C the default handler is gone,
        // so the prompt has to handle it too.
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else {
            break;
        };
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = words.split_first() else {
            continue;
        };
        match command {
            "quit" | "exit" => break,
            "help" => println!("move, click, drag, drop, undo, redo, hint, solve, speed, reset, show, json, quit"),
            "solve" => {
                let speed = match args.first().map(|s| s.parse::<SolveSpeed>()) {
                    Some(Ok(speed)) => speed,
                    Some(Err(e)) => {
                        println!("! {e}");
                        continue;
                    }
                    None => game.speed(),
                };
                animate(&mut game, speed).await;
                continue;
            }
            _ => {
                if let Err(e) = dispatch(&mut game, command, args) {
                    println!("! {e}");
                    continue;
                }
            }
        }
        render(&game);
    }
    Ok(())
}

fn dispatch(game: &mut GameController, command: &str, args: &[&str]) -> Result<(), GameError> {
    match (command, args) {
        ("move", [from, to]) => {
            let mv = game.attempt_move(parse_peg(from)?, parse_peg(to)?)?;
            println!("moved {mv}");
        }
        ("click", [peg]) => match game.on_select(parse_peg(peg)?) {
            Selection::Selected(peg) => println!("selected {peg}"),
            Selection::Deselected => println!("selection cleared"),
            Selection::Moved(mv) => println!("moved {mv}"),
            Selection::Rejected(e) => println!("! {e}"),
            Selection::Ignored => println!("nothing to select"),
        },
        ("drag", [disk]) => {
            let disk = disk.parse().unwrap_or(0);
            if !game.on_drag_pick(disk) {
                println!("! disk {disk} is not on top of a peg");
            }
        }
        ("drop", [peg]) => match game.on_drop(parse_peg(peg)?) {
            Some(result) => println!("moved {}", result?),
            None => println!("! nothing is being dragged"),
        },
        ("undo", []) => {
            if !game.undo() {
                println!("! nothing to undo");
            }
        }
        ("redo", []) => {
            if !game.redo() {
                println!("! nothing to redo");
            }
        }
        ("hint", []) => match game.request_hint(Utc::now()) {
            Some(mv) => println!(
                "hint: {mv} (for {} ms)",
                game.config().hint_ttl.as_millis()
            ),
            None => println!("no hint available"),
        },
        ("speed", [preset]) => game.set_speed(preset.parse()?),
        ("reset", []) => game.restart(),
        ("reset", [disks]) => game.reset(disks.parse().unwrap_or(0))?,
        ("show", []) => {}
        ("json", []) => match serde_json::to_string_pretty(&game.view(Utc::now())) {
            Ok(json) => println!("{json}"),
            Err(e) => error!("Failed to serialize view: {e}"),
        },
        _ => println!("! unknown command, type 'help'"),
    }
    Ok(())
}

fn parse_peg(raw: &str) -> Result<PegId, GameError> {
    let peg = match raw.to_ascii_uppercase().as_str() {
        "A" => PegId::A,
        "B" => PegId::B,
        "C" => PegId::C,
        other => PegId::try_from(other.parse::<usize>().unwrap_or(usize::MAX))?,
    };
    Ok(peg)
}

/// Play the auto-solve with one step per speed delay until done or Ctrl-C.
async fn animate(game: &mut GameController, speed: SolveSpeed) {
    let token = game.start_auto_solve(speed);
    render(game);

    let stopper = token.clone();
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            stopper.cancel();
        }
    });

    loop {
        tokio::time::sleep(game.step_delay()).await;
        match game.auto_solve_step() {
            StepOutcome::Moved(mv) => {
                println!("{mv}");
                render(game);
            }
            StepOutcome::Cancelled => {
                println!("auto-solve stopped");
                break;
            }
            StepOutcome::Finished | StepOutcome::Idle => break,
        }
    }
    ctrl_c.abort();
}

fn render(game: &GameController) {
    let now = Utc::now();
    let view = game.view(now);
    let width = usize::from(view.disk_count) * 3;

    for peg in PegId::ALL {
        let disks: Vec<String> = view.board.peg(peg).iter().map(u8::to_string).collect();
        let mut marks = String::new();
        if view.selected == Some(peg) {
            marks.push_str(" <selected>");
        }
        if let Some(hint) = view.hint {
            if hint.from == peg {
                marks.push_str(" <hint: from>");
            }
            if hint.to == peg {
                marks.push_str(" <hint: to>");
            }
        }
        println!("{peg} | {:<width$}{marks}", disks.join(" "));
    }

    let mut status = format!(
        "moves: {}  optimal: {}  speed: {}",
        view.move_count,
        view.optimal_moves,
        view.speed.name()
    );
    if let Some(disk) = view.dragging {
        status.push_str(&format!("  dragging: {disk}"));
    }
    if view.auto_solving {
        status.push_str("  [auto-solving]");
    }
    println!("{status}");

    if view.is_complete && !view.auto_solving {
        if view.solved_optimally {
            println!("Solved in {} moves, the optimal count!", view.move_count);
        } else {
            println!("Solved in {} moves.", view.move_count);
        }
    }
}
