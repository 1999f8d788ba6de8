//! Command dispatch and the line-oriented session loop

use crate::error::{ApiError, TreeError};
use crate::protocol::command::{Command, Line};
use crate::protocol::response::Response;
use crate::tree::{Namespace, Resolution};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Apply one command to the namespace
///
/// Paths always resolve from the root.
pub fn dispatch(namespace: &mut Namespace, command: &Command) -> Result<Response, TreeError> {
    let root = namespace.root();
    match command {
        Command::Create { path, node_type } => {
            match namespace.resolve_path(root, path, true)? {
                Resolution::Missing { parent, name } => {
                    namespace.create(parent, &name, *node_type)?;
                    Ok(Response::Ok)
                }
                Resolution::Found(_) => Err(TreeError::AlreadyExists(path.clone())),
            }
        }
        Command::Read { path } => {
            let id = namespace.lookup(root, path)?;
            Ok(Response::Content(namespace.file_content(id)?.to_vec()))
        }
        Command::Write { path, content } => {
            let id = namespace.lookup(root, path)?;
            namespace.set_file_content(id, content)?;
            Ok(Response::Written(content.len()))
        }
        Command::Delete { path, recursive } => {
            let id = namespace.lookup(root, path)?;
            if *recursive {
                namespace.delete_recursive(id)?;
            } else {
                namespace.delete(id)?;
            }
            Ok(Response::Ok)
        }
        Command::Find { name } => Ok(Response::found(namespace.find_paths(root, name)?)),
        Command::Exit => Ok(Response::Ok),
    }
}

/// Counters for one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub commands: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub ignored: usize,
}

/// What the loop should do after a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Reply(Response),
    /// Unknown command, nothing to print
    Skip,
    Stop,
}

/// Owns a namespace and drives it from command lines
#[derive(Debug, Default)]
pub struct Interpreter {
    namespace: Namespace,
    stats: SessionStats,
}

impl Interpreter {
    pub fn new(namespace: Namespace) -> Self {
        Self {
            namespace,
            stats: SessionStats::default(),
        }
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Execute a command, collapsing any failure into [`Response::Fail`]
    pub fn execute(&mut self, command: &Command) -> Response {
        self.stats.commands += 1;
        match dispatch(&mut self.namespace, command) {
            Ok(response) => {
                self.stats.succeeded += 1;
                response
            }
            Err(e) => {
                debug!(?command, error = e.kind(), "Command rejected: {}", e);
                self.stats.failed += 1;
                Response::Fail
            }
        }
    }

    /// Handle one raw input line
    pub fn handle_line(&mut self, line: &[u8]) -> Step {
        match Line::parse(line) {
            Ok(Line::Blank) | Ok(Line::Command(Command::Exit)) => Step::Stop,
            Ok(Line::Unknown(word)) => {
                debug!(command = %word, "Ignoring unknown command");
                self.stats.ignored += 1;
                Step::Skip
            }
            Ok(Line::Command(command)) => Step::Reply(self.execute(&command)),
            Err(e) => {
                debug!("Malformed command line: {}", e);
                self.stats.commands += 1;
                self.stats.failed += 1;
                Step::Reply(Response::Fail)
            }
        }
    }

    /// Read commands until `exit`, a blank line, or end of input
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        output: &mut W,
    ) -> Result<SessionStats, ApiError> {
        info!("Session started");
        let mut line = Vec::new();
        loop {
            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            match self.handle_line(&line) {
                Step::Reply(response) => response.write_to(output)?,
                Step::Skip => {}
                Step::Stop => break,
            }
        }
        output.flush()?;

        let stats = self.stats;
        info!(
            commands = stats.commands,
            succeeded = stats.succeeded,
            failed = stats.failed,
            ignored = stats.ignored,
            nodes = self.namespace.len(),
            "Session finished"
        );
        Ok(stats)
    }
}
