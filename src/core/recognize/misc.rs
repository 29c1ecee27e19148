//! Chat messages sent through `NewText`, from any method of any type.

use super::Recognizer;
use crate::core::cursor::Cursor;
use crate::core::model::{Instruction, TypeDef};
use crate::core::records::{Category, NewTextTranslation, TranslationRecord};

/// Distance from a `NewText` call back to its message argument:
/// `ldstr msg; ldc r; ldc g; ldc b; ldc force; call NewText`.
const MESSAGE_LOOKBACK: isize = 5;

pub struct MiscRecognizer;

impl Recognizer for MiscRecognizer {
    fn category(&self) -> Category {
        Category::Misc
    }

    fn recognize(&self, ty: &TypeDef, out: &mut Vec<TranslationRecord>) {
        out.extend(recognize_new_texts(ty).into_iter().map(Into::into));
    }
}

/// One record per method with at least one recognized message.
pub fn recognize_new_texts(ty: &TypeDef) -> Vec<NewTextTranslation> {
    ty.methods
        .iter()
        .filter_map(|method| {
            let contents = new_text_messages(method.instructions()?);
            if contents.is_empty() {
                return None;
            }
            Some(NewTextTranslation {
                type_name: ty.name.clone(),
                namespace: ty.namespace.clone(),
                method: method.name.clone(),
                contents,
            })
        })
        .collect()
}

fn new_text_messages(instructions: &[Instruction]) -> Vec<String> {
    let mut messages = Vec::new();
    let mut cursor = Cursor::new(instructions);

    while let Some((_, instruction)) = cursor.advance() {
        if !instruction.is_call_named("NewText") {
            continue;
        }
        if let Some(message) = cursor
            .peek(-MESSAGE_LOOKBACK)
            .and_then(Instruction::as_string)
        {
            messages.push(message.to_string());
        }
    }

    messages
}
