// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `agropilot shell` command implementation.
//!
//! Launches an interactive REPL with a colored prompt and readline
//! history. Creates a new conversational session per invocation; the
//! session's memory and reasoning history live only as long as the shell.

use agropilot_config::AgropilotConfig;
use agropilot_core::AgropilotError;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::info;

use crate::session;

/// Runs the `agropilot shell` interactive REPL.
///
/// Text-only: disease detection from the shell answers with the
/// image-upload instructions, and location analysis asks for coordinates.
/// Use `agropilot ask --image/--lat/--lon` for those routes.
pub async fn run_shell(config: &AgropilotConfig) -> Result<(), AgropilotError> {
    let mut orchestrator = session::build_orchestrator(config);
    info!(session_id = %orchestrator.session_id(), "shell session created");

    let mut rl = DefaultEditor::new()
        .map_err(|e| AgropilotError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", "agropilot shell".bold().green());
    println!(
        "Ask about soybean farming. Type {} to reset the conversation, {} to exit.\n",
        "/clear".yellow(),
        "/quit".yellow()
    );

    let prompt = format!("{}> ", "agropilot".green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "/quit" || trimmed == "/exit" {
                    break;
                }
                if trimmed == "/clear" {
                    orchestrator.reset();
                    println!("{}", "conversation cleared".dimmed());
                    continue;
                }
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                let response = orchestrator.handle(trimmed, None, 0.0, 0.0).await;
                println!("{response}\n");
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C
                break;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D
                break;
            }
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    println!("{}", "goodbye".dimmed());
    Ok(())
}
