//! Integration tests for the SimpleFS namespace and command protocol

mod cli_parse;
mod protocol_transcripts;
mod tree_properties;
