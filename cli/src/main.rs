//! Replay driver: feeds a pointer-event script through a [`Desk`] and prints
//! every transform and stacking-order write.
//!
//! A script is JSON lines, one [`PointerEvent`] per line; blank lines and
//! lines starting with `#` are ignored. Sheets are referenced by attach
//! order (`"sheet": 0` is the first one); the desk attaches as many sheets
//! as the script mentions.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use paperdesk::{Button, Desk, DeskError, Point, PointerEvent, SheetId, Surface, Transform};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read script: {0}")]
    Io(#[from] io::Error),
    #[error("script line {line}: {source}")]
    Script {
        line: usize,
        source: serde_json::Error,
    },
    #[error("script references sheet {index} but only {sheets} sheet(s) exist")]
    SheetIndex { index: usize, sheets: usize },
    #[error(transparent)]
    Desk(#[from] DeskError),
}

#[derive(Parser, Debug)]
#[command(name = "paperdesk-cli", about = "Replay pointer-event scripts against a paper desk")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON-lines pointer-event script.
    Replay {
        /// Script path, or `-` to read from stdin.
        script: PathBuf,
        /// Fixed initial tilt in degrees for every sheet instead of a
        /// random one, for reproducible output.
        #[arg(long)]
        tilt: Option<f64>,
    },
    /// Run a built-in drag-then-spin demonstration.
    Demo,
}

/// Surface handle that prints every write, labeled by sheet.
struct ConsoleSurface {
    label: String,
}

impl Surface for ConsoleSurface {
    fn set_transform(&mut self, transform: Transform) {
        println!("{}: style.transform = {transform}", self.label);
    }

    fn set_stack_order(&mut self, order: i64) {
        println!("{}: style.zIndex = {order}", self.label);
    }
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Replay { script, tilt } => run_replay(&script, tilt),
        Command::Demo => run_demo(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run_replay(script: &Path, tilt: Option<f64>) -> Result<(), CliError> {
    let text = read_script(script)?;
    let events = parse_script(&text)?;
    let sheets = sheet_count(&events);
    tracing::info!(events = events.len(), sheets, "replaying script");

    let mut desk = Desk::new();
    let ids: Vec<SheetId> = (0..sheets)
        .map(|index| {
            let surface = ConsoleSurface { label: format!("sheet[{index}]") };
            match tilt {
                Some(deg) => desk.attach_with_tilt(surface, deg),
                None => desk.attach(surface),
            }
        })
        .collect();

    for event in events {
        apply_event(&mut desk, &ids, event)?;
    }
    Ok(())
}

fn run_demo() -> Result<(), CliError> {
    let events = [
        PointerEvent::Move { x: 50.0, y: 50.0 },
        PointerEvent::Down { sheet: 0, button: Button::Primary },
        PointerEvent::Move { x: 60.0, y: 65.0 },
        PointerEvent::Move { x: 55.0, y: 60.0 },
        PointerEvent::Up,
        PointerEvent::Down { sheet: 1, button: Button::Secondary },
        PointerEvent::Move { x: 100.0, y: 0.0 },
        PointerEvent::Move { x: 0.0, y: 100.0 },
        PointerEvent::Up,
    ];

    let mut desk = Desk::new();
    let ids: Vec<SheetId> = (0..2)
        .map(|index| {
            desk.attach_with_tilt(ConsoleSurface { label: format!("sheet[{index}]") }, 0.0)
        })
        .collect();

    for event in events {
        apply_event(&mut desk, &ids, event)?;
    }
    Ok(())
}

fn read_script(path: &Path) -> Result<String, CliError> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

/// Parse JSON-lines into events, reporting the 1-based line of any bad one.
fn parse_script(text: &str) -> Result<Vec<PointerEvent>, CliError> {
    let mut events = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(trimmed)
            .map_err(|source| CliError::Script { line: lineno + 1, source })?;
        events.push(event);
    }
    Ok(events)
}

/// Number of sheets a script needs: one past the highest index it presses.
fn sheet_count(events: &[PointerEvent]) -> usize {
    events
        .iter()
        .filter_map(|event| match event {
            PointerEvent::Down { sheet, .. } => Some(sheet + 1),
            _ => None,
        })
        .max()
        .unwrap_or(1)
}

fn apply_event(
    desk: &mut Desk<ConsoleSurface>,
    ids: &[SheetId],
    event: PointerEvent,
) -> Result<(), CliError> {
    match event {
        PointerEvent::Move { x, y } => desk.pointer_move(Point::new(x, y)),
        PointerEvent::Down { sheet, button } => {
            let id = ids
                .get(sheet)
                .copied()
                .ok_or(CliError::SheetIndex { index: sheet, sheets: ids.len() })?;
            desk.pointer_down(id, button)?;
        }
        PointerEvent::Up => desk.pointer_up(),
    }
    Ok(())
}
