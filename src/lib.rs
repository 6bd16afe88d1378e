//! wowchunks - lua-wow grammar fragment generator
//!
//! Reads hand-curated listings of WoW global functions, FrameXML functions,
//! widget methods and events, and prints CSON highlighting rules for them.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading
//! - `source`: Reading raw listings
//! - `extract`: Per-listing extractors
//! - `hierarchy`: Widget class hierarchy and method hoisting
//! - `fragment`: Rendering groups into grammar rules
//! - `generate`: Running components end to end
//! - `issues`: Diagnostic types
//! - `report`: Printing fragments and diagnostics

pub mod cli;
pub mod config;
pub mod extract;
pub mod fragment;
pub mod generate;
pub mod hierarchy;
pub mod issues;
pub mod report;
pub mod source;
