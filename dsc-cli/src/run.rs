//! One-shot mode: apply a list of textual commands to a single session

use crate::render::Renderer;
use anyhow::{Context, Result};
use dsc_engine::{Engine, EngineError, Outcome, Session};
use serde::Serialize;
use std::io::Write;
use tracing::info;

/// One line of `--json` output
#[derive(Debug, Serialize)]
struct RunRecord<'a> {
    command: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<&'a Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a EngineError>,
}

/// Execute `commands` in order against a fresh session over `values`
///
/// Every command is parsed before any runs, so a typo aborts without
/// touching the session. Engine errors are written out and the remaining
/// commands still run. Returns the number of commands that failed.
pub fn run_commands<E: Engine, W: Write>(
    values: Vec<f64>,
    commands: &[String],
    json: bool,
    renderer: &Renderer,
    out: &mut W,
) -> Result<usize> {
    let mut session: Session<E> = Session::start(values);

    let parsed = commands
        .iter()
        .map(|text| {
            session
                .parse(text)
                .with_context(|| format!("Invalid {} command '{}'", E::STRUCTURE, text))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut failures = 0;
    for (text, command) in commands.iter().zip(parsed) {
        let result = session.execute(command);
        if result.is_err() {
            failures += 1;
        }

        if json {
            let record = RunRecord {
                command: text.as_str(),
                outcome: result.as_ref().ok(),
                error: result.as_ref().err(),
            };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        } else {
            let line = match &result {
                Ok(outcome) => renderer.outcome(E::STRUCTURE, outcome),
                Err(e) => renderer.error(E::STRUCTURE, e),
            };
            writeln!(out, "{}", line)?;
        }
    }

    session.terminate();
    info!(
        session = %session.id(),
        "Ran {} {} command(s), {} failed",
        commands.len(),
        session.structure(),
        failures
    );
    Ok(failures)
}
