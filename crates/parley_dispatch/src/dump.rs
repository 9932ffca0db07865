//! Dispatcher-tree JSON dump.
//!
//! Writes a human-inspectable description of every registered command to a
//! configured file, one rewrite per registration.

use std::fs;
use std::path::Path;

use serde::Serialize;

use parley_foundation::{Error, Result, Type};

use crate::registrar::RegisteredCommand;

#[derive(Serialize)]
struct DumpFile {
    commands: Vec<DumpCommand>,
}

#[derive(Serialize)]
struct DumpCommand {
    name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    aliases: Vec<String>,
    executions: Vec<DumpExecution>,
}

#[derive(Serialize)]
struct DumpExecution {
    arguments: Vec<DumpArgument>,
}

#[derive(Serialize)]
struct DumpArgument {
    name: String,
    #[serde(rename = "type")]
    ty: Type,
    literal: bool,
    greedy: bool,
}

/// Writes the dump file for the given registry state.
///
/// # Errors
///
/// Returns an I/O error if serialization or the write fails.
pub fn write_dump(path: &Path, commands: &[RegisteredCommand]) -> Result<()> {
    let dump = DumpFile {
        commands: commands
            .iter()
            .map(|command| DumpCommand {
                name: command.name().to_string(),
                aliases: command.aliases().to_vec(),
                executions: command
                    .executions()
                    .iter()
                    .map(|execution| DumpExecution {
                        arguments: execution
                            .arguments()
                            .iter()
                            .map(|argument| DumpArgument {
                                name: argument.name().to_string(),
                                ty: argument.primitive_type(),
                                literal: argument.is_literal(),
                                greedy: argument.is_greedy(),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect(),
    };

    let json = serde_json::to_string_pretty(&dump)
        .map_err(|e| Error::io(format!("failed to serialize dispatcher dump: {e}")))?;
    fs::write(path, json)
        .map_err(|e| Error::io(format!("failed to write {}: {e}", path.display())))?;
    Ok(())
}
