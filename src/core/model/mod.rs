//! The decoded code model that recognizers read.
//!
//! ## Module Structure
//!
//! - `instruction`: Instruction kinds and operand shape matching
//! - `module`: Module, TypeDef, MethodDef and marker resolution
//! - `decoder`: ModuleDecoder trait and the JSON module decoder

pub mod decoder;
pub mod instruction;
pub mod module;

pub use decoder::{JsonModuleDecoder, ModuleDecoder};
pub use instruction::{Instruction, MemberRef};
pub use module::{MarkerNames, MethodBody, MethodDef, ModMarkers, Module, TypeDef};
