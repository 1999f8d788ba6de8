//! Line-oriented command protocol
//!
//! One command per line, tokens separated by spaces. Replies go out one line
//! each (`find` may reply with several).

pub mod command;
pub mod interpreter;
pub mod response;

pub use command::{Command, Line};
pub use interpreter::{dispatch, Interpreter, SessionStats, Step};
pub use response::Response;
