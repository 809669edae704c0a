//! Vanguard -- a per-turn movement planner for a territory-conquest game.
//!
//! This binary reads one JSON planning request per stdin line and writes
//! the JSON order list for that turn to stdout. Malformed lines are
//! reported on stderr and skipped; the planner holds no state between
//! lines beyond its tie-break rng.

use std::io::{self, BufRead, Write};

use vanguard::config::StrategyConfig;
use vanguard::protocol::handle_line;
use vanguard::strategy::TurnPlanner;

fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut planner = TurnPlanner::new(StrategyConfig::default());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        match handle_line(&mut planner, &line) {
            Ok(reply) => {
                if writeln!(out, "{}", reply).and_then(|_| out.flush()).is_err() {
                    break;
                }
            }
            Err(e) => {
                eprintln!("{}", e);
            }
        }
    }
}
