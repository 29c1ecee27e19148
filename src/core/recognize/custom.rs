//! Custom translations registered with `CreateTranslation`.
//!
//! The idiom is
//!
//! ```text
//! ldstr "Key"
//! call CreateTranslation
//! stloc N
//! ...
//! ldloc N
//! ldstr "Value"
//! callvirt SetDefault
//! ```
//!
//! i.e. a single-slot def/use: remember the slot the translation is stored
//! in, find its first later load, and take the literal right after it.

use super::Recognizer;
use super::patterns::next_local_load;
use crate::core::cursor::{Cursor, at};
use crate::core::model::{Instruction, TypeDef};
use crate::core::records::{Category, CustomTranslation, TranslationRecord};

pub struct CustomRecognizer;

impl Recognizer for CustomRecognizer {
    fn category(&self) -> Category {
        Category::Customs
    }

    fn recognize(&self, ty: &TypeDef, out: &mut Vec<TranslationRecord>) {
        out.extend(recognize_custom(ty).into_iter().map(Into::into));
    }
}

/// One record per recognized `CreateTranslation` call site, across all methods.
pub fn recognize_custom(ty: &TypeDef) -> Vec<CustomTranslation> {
    ty.methods
        .iter()
        .filter_map(|method| method.instructions())
        .flat_map(custom_pairs)
        .map(|(key, value)| CustomTranslation {
            key: key.to_string(),
            namespace: ty.namespace.clone(),
            value: value.to_string(),
        })
        .collect()
}

fn custom_pairs(instructions: &[Instruction]) -> Vec<(&str, &str)> {
    let mut pairs = Vec::new();
    let mut cursor = Cursor::new(instructions);

    while let Some((position, instruction)) = cursor.advance() {
        if !instruction.is_call_named("CreateTranslation") {
            continue;
        }
        if let Some(pair) = custom_pair_at(instructions, position) {
            pairs.push(pair);
        }
    }

    pairs
}

/// Key and value for the `CreateTranslation` call at `call_position`.
fn custom_pair_at(instructions: &[Instruction], call_position: usize) -> Option<(&str, &str)> {
    let call = call_position as isize;
    let slot = at(instructions, call + 1)?.as_local_store()?;
    let key = at(instructions, call - 1)?.as_string()?;

    let load = next_local_load(instructions, call_position + 1, slot)?;
    let value = at(instructions, load as isize + 1)?.as_string()?;

    Some((key, value))
}
