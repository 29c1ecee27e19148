//! Turning a raw code payload into a [`Module`].

use anyhow::{Context, Result};

use super::module::Module;

/// Decodes the primary code payload of a mod archive.
///
/// Implementations must not resolve markers; the caller does that once the
/// configured marker names are known.
pub trait ModuleDecoder {
    fn decode(&self, payload: &[u8]) -> Result<Module>;
}

/// Decoder for modules that were already disassembled into the JSON module format.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonModuleDecoder;

impl ModuleDecoder for JsonModuleDecoder {
    fn decode(&self, payload: &[u8]) -> Result<Module> {
        serde_json::from_slice(payload).context("Failed to decode module payload")
    }
}
