//! Modloc - translatable text extractor for tModLoader mods
//!
//! Modloc is a CLI tool and library that scans the decoded code of a mod for
//! the instruction patterns that register player-visible text, and writes the
//! text it finds as per-namespace JSON files ready for translation.
//!
//! ## Module Structure
//!
//! - `archive`: Access to the code payload, build properties and resources of a mod
//! - `cli`: Command-line interface layer (argument parsing, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (code model, recognizers, output writer)

pub mod archive;
pub mod cli;
pub mod config;
pub mod core;
