//! Command line parsing
//!
//! Lines are parsed as raw bytes: file content is an arbitrary payload and
//! must survive unchanged. Paths and names are decoded lossily, since tree
//! names are strings.

use crate::error::ProtocolError;
use crate::tree::NodeType;

/// A parsed protocol command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `create <path>` / `create_dir <path>`
    Create { path: String, node_type: NodeType },
    /// `read <path>`
    Read { path: String },
    /// `write <path> "<content>"`
    Write { path: String, content: Vec<u8> },
    /// `delete <path>` / `delete_r <path>`
    Delete { path: String, recursive: bool },
    /// `find <name>`
    Find { name: String },
    Exit,
}

/// Classification of one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Empty or whitespace-only; ends the session
    Blank,
    /// Unrecognized command word, skipped without a reply
    Unknown(String),
    Command(Command),
}

fn trim_start(input: &[u8]) -> &[u8] {
    let start = input
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(input.len());
    &input[start..]
}

fn trim(input: &[u8]) -> &[u8] {
    let input = trim_start(input);
    let end = input
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(0, |last| last + 1);
    &input[..end]
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Split off the first whitespace-delimited token
fn next_token(input: &[u8]) -> Option<(&[u8], &[u8])> {
    let input = trim_start(input);
    if input.is_empty() {
        return None;
    }
    match input.iter().position(u8::is_ascii_whitespace) {
        Some(end) => Some((&input[..end], &input[end..])),
        None => Some((input, &input[input.len()..])),
    }
}

fn path_argument(command: &'static str, rest: &[u8]) -> Result<String, ProtocolError> {
    let path = trim(rest);
    if path.is_empty() {
        return Err(ProtocolError::MissingArgument(command));
    }
    Ok(text(path))
}

/// Content between the opening quote run and the next quote
fn quoted_content(rest: &[u8]) -> Result<Vec<u8>, ProtocolError> {
    let body = trim_start(rest);
    let skip = body.iter().take_while(|&&b| b == b'"').count();
    let body = &body[skip..];
    let end = body
        .iter()
        .position(|&b| matches!(b, b'"' | b'\r' | b'\n'))
        .unwrap_or(body.len());
    if end == 0 {
        return Err(ProtocolError::MissingContent);
    }
    Ok(body[..end].to_vec())
}

impl Line {
    /// Parse a single line of input, line terminator optional
    pub fn parse(line: &[u8]) -> Result<Line, ProtocolError> {
        let Some((word, rest)) = next_token(line) else {
            return Ok(Line::Blank);
        };

        let command = match word {
            b"create" => Command::Create {
                path: path_argument("create", rest)?,
                node_type: NodeType::File,
            },
            b"create_dir" => Command::Create {
                path: path_argument("create_dir", rest)?,
                node_type: NodeType::Directory,
            },
            b"read" => Command::Read {
                path: path_argument("read", rest)?,
            },
            b"write" => {
                let (path, rest) =
                    next_token(rest).ok_or(ProtocolError::MissingArgument("write"))?;
                Command::Write {
                    path: text(path),
                    content: quoted_content(rest)?,
                }
            }
            b"delete" => Command::Delete {
                path: path_argument("delete", rest)?,
                recursive: false,
            },
            b"delete_r" => Command::Delete {
                path: path_argument("delete_r", rest)?,
                recursive: true,
            },
            b"find" => {
                let (name, _) = next_token(rest).ok_or(ProtocolError::MissingArgument("find"))?;
                Command::Find { name: text(name) }
            }
            b"exit" => Command::Exit,
            other => return Ok(Line::Unknown(text(other))),
        };
        Ok(Line::Command(command))
    }
}
