//! `sparrow-replay`: folds a recorded event stream into a store snapshot.
//!
//! Reads newline-delimited JSON events from stdin, dispatches them in order
//! and prints the final snapshot as pretty JSON on stdout.
//!
//! ```text
//! sparrow-replay [config.toml] < events.ndjson
//! ```
//!
//! Chat messages without a `time` are stamped with the configured
//! `time_format` before dispatch. Blank lines are skipped. The first line
//! that fails to decode or apply is reported on stderr with its line number
//! and the process exits with status 1 without printing a snapshot.

use sparrow_state::{Config, Event, Result, Store, StoreError};
use std::io::{self, BufRead};
use std::process::ExitCode;

fn load_config() -> Result<Config> {
    match std::env::args_os().nth(1) {
        Some(path) => Config::from_file(path),
        None => Ok(Config::default()),
    }
}

/// Dispatches every event in `input`, stopping at the first failing line.
fn replay(
    store: &mut Store,
    config: &Config,
    input: impl BufRead,
) -> std::result::Result<(), (usize, StoreError)> {
    for (index, line) in input.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|e| (line_number, e.into()))?;
        if line.trim().is_empty() {
            continue;
        }
        let mut event: Event =
            serde_json::from_str(&line).map_err(|e| (line_number, e.into()))?;
        event.stamp_missing_time(config);
        tracing::debug!(line = line_number, kind = event.kind(), "replaying event");
        store.dispatch(&event).map_err(|e| (line_number, e))?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("sparrow-replay: failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut store = sparrow_state::initialize(&config);

    if let Err((line, e)) = replay(&mut store, &config, io::stdin().lock()) {
        eprintln!("sparrow-replay: line {line}: {e}");
        return ExitCode::FAILURE;
    }

    match serde_json::to_string_pretty(store.state()) {
        Ok(snapshot) => {
            println!("{snapshot}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("sparrow-replay: failed to encode snapshot: {e}");
            ExitCode::FAILURE
        }
    }
}
