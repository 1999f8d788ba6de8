//! Wire rendering of command results

use std::io::{self, Write};

const RES_OK: &[u8] = b"ok";
const RES_FAIL: &[u8] = b"no";
const RES_READ: &[u8] = b"contenuto";

/// Reply to a single command
///
/// Every failure renders as the same `no` line; the protocol does not carry
/// error kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Ok,
    Fail,
    /// `contenuto <content>`, content written as stored
    Content(Vec<u8>),
    /// `ok <bytes written>`
    Written(usize),
    /// One `ok <path>` line per match, already sorted
    Found(Vec<String>),
}

impl Response {
    /// Build a find reply; no matches is a failure
    pub fn found(paths: Vec<String>) -> Self {
        if paths.is_empty() {
            Response::Fail
        } else {
            Response::Found(paths)
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, Response::Fail)
    }

    /// Write the reply, each line terminated by `\n`
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Response::Ok => out.write_all(RES_OK)?,
            Response::Fail => out.write_all(RES_FAIL)?,
            Response::Content(content) => {
                out.write_all(RES_READ)?;
                out.write_all(b" ")?;
                out.write_all(content)?;
            }
            Response::Written(bytes) => {
                out.write_all(RES_OK)?;
                write!(out, " {}", bytes)?;
            }
            Response::Found(paths) => {
                for (i, path) in paths.iter().enumerate() {
                    if i > 0 {
                        out.write_all(b"\n")?;
                    }
                    out.write_all(RES_OK)?;
                    write!(out, " {}", path)?;
                }
            }
        }
        out.write_all(b"\n")
    }
}
