//! Extraction engine.
//!
//! A dump runs in three phases:
//!
//! 1. **Load**: decode the code payload into a [`model::Module`] and resolve
//!    which mod base each type derives from.
//! 2. **Recognize**: run the selected recognizers over every type and collect
//!    their records per category (`extract`).
//! 3. **Write**: group each category by namespace and write one JSON file per
//!    namespace (`writer`), plus the mod info files (`dump`).
//!
//! ## Module Structure
//!
//! - `model`: Decoded code model and the decoder seam
//! - `cursor`: Positional access into an instruction sequence
//! - `recognize`: Per-category recognizers
//! - `records`: Category and translation record types
//! - `extract`: Orchestrator that runs the recognizers
//! - `writer`: Namespace-grouped JSON output
//! - `dump`: End-to-end load, extract and write of one mod

pub mod cursor;
pub mod dump;
pub mod extract;
pub mod model;
pub mod recognize;
pub mod records;
pub mod writer;
