//! Console Oven Panel
//!
//! A line-based stand-in for a GUI front-end.
//!
//! Key concepts:
//! - The UI only forwards keypad presses to the controller
//! - Display callbacks arrive from the countdown thread
//! - Shutdown cancels and joins the countdown before exit
//!
//! Commands: digits (e.g. `130`), `start`, `stop`, `show`, `quit`.
//!
//! Run with: cargo run --example console_panel

use microwave::config::PanelConfig;
use microwave::core::OvenState;
use microwave::effects::{OvenController, PanelDisplay};
use std::io::{self, BufRead, Write};
use std::sync::Arc;

struct ConsoleDisplay;

impl PanelDisplay for ConsoleDisplay {
    fn refresh(&self, display: &str) {
        println!("  [{display}]");
    }

    fn indicator_changed(&self, mode: OvenState) {
        let door = match mode {
            OvenState::Cooking => "yellow",
            OvenState::Idle => "grey",
        };
        println!("  door light: {door}");
    }

    fn ping(&self) {
        println!("  Ping!");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => PanelConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => PanelConfig::default(),
    };
    let oven = OvenController::new(Arc::new(ConsoleDisplay), config)?;

    println!("=== Microwave ===");
    println!("digits, start, stop, show, quit");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "start" => oven.press_start(),
            "stop" => oven.press_stop(),
            "show" => println!("  {}", serde_json::to_string(&oven.snapshot())?),
            "quit" | "exit" => break,
            digits => {
                for d in digits.chars() {
                    if let Err(e) = oven.press_digit(d) {
                        println!("  {e}");
                        break;
                    }
                }
            }
        }
        io::stdout().flush()?;
    }

    oven.shutdown();
    println!("=== Panel closed ===");
    Ok(())
}
