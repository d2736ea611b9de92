//! Event script parsing.
//!
//! A script is a plain text file with one event per line. Blank lines and
//! lines starting with `#` are ignored; tokens are whitespace separated.
//!
//! ```text
//! tool rect
//! color red
//! fill outlined
//! stroke-width 4
//! down 10 10
//! move 50 30
//! snapshot preview.png
//! down 50 30
//! ```

use crate::draw::{FillMode, PaletteColor, StyleError};
use crate::input::{InputEvent, Tool};
use crate::util::Point;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One parsed script line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Feed an event to the drawing surface
    Input(InputEvent),
    /// Write the current surface to a PNG file
    Snapshot(PathBuf),
}

/// A command together with its 1-based source line.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: Command,
}

/// Errors raised while reading or parsing a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' expects {expected}")]
    MissingArgument {
        line: usize,
        command: &'static str,
        expected: &'static str,
    },

    #[error("line {line}: unexpected trailing input '{extra}'")]
    TrailingInput { line: usize, extra: String },

    #[error("line {line}: invalid coordinate '{value}'")]
    InvalidCoordinate { line: usize, value: String },

    #[error("line {line}: {source}")]
    InvalidControl {
        line: usize,
        #[source]
        source: StyleError,
    },
}

/// Reads and parses a script file.
pub fn load(path: &Path) -> Result<Vec<ScriptLine>, ScriptError> {
    let text = fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text)
}

/// Parses script text into commands, stopping at the first malformed line.
pub fn parse(text: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut commands = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut tokens = trimmed.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };

        let command = match keyword.to_ascii_lowercase().as_str() {
            "down" => Command::Input(InputEvent::PointerDown(parse_point(
                line,
                "down",
                &mut tokens,
            )?)),
            "move" => Command::Input(InputEvent::PointerMove(parse_point(
                line,
                "move",
                &mut tokens,
            )?)),
            "tool" => {
                let name = required(line, "tool", "a shape kind", tokens.next())?;
                let tool = name
                    .parse::<Tool>()
                    .map_err(|source| ScriptError::InvalidControl { line, source })?;
                Command::Input(InputEvent::SelectTool(tool))
            }
            "color" => {
                let name = required(line, "color", "a palette color", tokens.next())?;
                let color = name
                    .parse::<PaletteColor>()
                    .map_err(|source| ScriptError::InvalidControl { line, source })?;
                Command::Input(InputEvent::SelectColor(color))
            }
            "fill" => {
                let name = required(line, "fill", "filled or outlined", tokens.next())?;
                let mode = name
                    .parse::<FillMode>()
                    .map_err(|source| ScriptError::InvalidControl { line, source })?;
                Command::Input(InputEvent::SelectFill(mode))
            }
            // The raw value is validated by the stroke width control itself.
            "stroke-width" => {
                let value = required(line, "stroke-width", "a value", tokens.next())?;
                Command::Input(InputEvent::SetStrokeWidth(value.to_string()))
            }
            "snapshot" => {
                let path = required(line, "snapshot", "an output path", tokens.next())?;
                Command::Snapshot(PathBuf::from(path))
            }
            _ => {
                return Err(ScriptError::UnknownCommand {
                    line,
                    command: keyword.to_string(),
                });
            }
        };

        let extra: Vec<&str> = tokens.collect();
        if !extra.is_empty() {
            return Err(ScriptError::TrailingInput {
                line,
                extra: extra.join(" "),
            });
        }

        commands.push(ScriptLine { line, command });
    }

    Ok(commands)
}

fn required<'a>(
    line: usize,
    command: &'static str,
    expected: &'static str,
    token: Option<&'a str>,
) -> Result<&'a str, ScriptError> {
    token.ok_or(ScriptError::MissingArgument {
        line,
        command,
        expected,
    })
}

fn parse_point<'a>(
    line: usize,
    command: &'static str,
    tokens: &mut impl Iterator<Item = &'a str>,
) -> Result<Point, ScriptError> {
    let mut coordinate = || -> Result<f64, ScriptError> {
        let value = required(line, command, "x and y coordinates", tokens.next())?;
        value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ScriptError::InvalidCoordinate {
                line,
                value: value.to_string(),
            })
    };
    let x = coordinate()?;
    let y = coordinate()?;
    Ok(Point::new(x, y))
}
