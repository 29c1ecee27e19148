//! Call-site idioms shared by several recognizers.
//!
//! Each function here is a narrow local scan over one instruction stream.
//! None of them can fail: an idiom that does not match yields nothing.

use crate::core::cursor::{Cursor, at};
use crate::core::model::Instruction;

/// A literal passed to `ModTranslation.SetDefault`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationLiteral<'a> {
    pub value: &'a str,
    /// Name of the getter that produced the `ModTranslation` (e.g., `get_DisplayName`),
    /// when it sits right before the literal. `None` when the translation object
    /// came from somewhere else (a local, the stack, a field).
    pub getter: Option<&'a str>,
}

/// Every `ldstr v; call ModTranslation::SetDefault` pair, in order.
///
/// The expected shape is `call get_X; ldstr v; call SetDefault`, so the getter
/// is looked up two instructions before the `SetDefault` call.
pub fn translation_literals(instructions: &[Instruction]) -> Vec<TranslationLiteral<'_>> {
    let mut found = Vec::new();
    let mut cursor = Cursor::new(instructions);

    while let Some((_, instruction)) = cursor.advance() {
        let Some(value) = instruction.as_string() else {
            continue;
        };
        let sets_default = cursor
            .peek(1)
            .is_some_and(|next| next.is_call_to("ModTranslation", "SetDefault"));
        if !sets_default {
            continue;
        }

        let getter = cursor
            .peek(-1)
            .and_then(Instruction::as_call)
            .map(|m| m.name.as_str());
        found.push(TranslationLiteral { value, getter });
    }

    found
}

/// Every constant string in the stream, in order, duplicates included.
pub fn string_literals(instructions: &[Instruction]) -> impl Iterator<Item = &str> {
    instructions.iter().filter_map(Instruction::as_string)
}

/// Rebuild the string pieces feeding a `string.Concat` call.
///
/// Walks backwards from `end` (exclusive) counting operands: each constant
/// string is collected, each array element load counts as an operand with no
/// recoverable text. The walk stops after `operand_count` operands or at the
/// start of the method. Pieces come back in source (left-to-right) order.
pub fn concat_pieces(instructions: &[Instruction], end: usize, operand_count: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut counted = 0;
    let mut position = end as isize - 1;

    while counted < operand_count {
        let Some(instruction) = at(instructions, position) else {
            break;
        };
        if let Some(value) = instruction.as_string() {
            pieces.push(value.to_string());
            counted += 1;
        } else if instruction.is_array_element_load() {
            counted += 1;
        }
        position -= 1;
    }

    pieces.reverse();
    pieces
}

/// First load of `slot` after the store at `store_position`.
///
/// Scans forward one instruction at a time; `None` if the method ends first.
pub fn next_local_load(instructions: &[Instruction], store_position: usize, slot: u16) -> Option<usize> {
    let mut cursor = Cursor::starting_at(instructions, store_position + 1);

    while let Some((position, instruction)) = cursor.advance() {
        if instruction.as_local_load() == Some(slot) {
            return Some(position);
        }
    }

    None
}
