//! Items: display name, tooltip, tooltip lines and armor set bonus.

use super::Recognizer;
use super::patterns::{concat_pieces, translation_literals};
use crate::core::cursor::Cursor;
use crate::core::model::{Instruction, TypeDef};
use crate::core::records::{Category, ItemTranslation, TranslationRecord};

pub struct ItemRecognizer;

impl Recognizer for ItemRecognizer {
    fn category(&self) -> Category {
        Category::Items
    }

    fn recognize(&self, ty: &TypeDef, out: &mut Vec<TranslationRecord>) {
        if let Some(item) = recognize_item(ty) {
            out.push(item.into());
        }
    }
}

/// One record per item type, even when nothing was found in its methods.
pub fn recognize_item(ty: &TypeDef) -> Option<ItemTranslation> {
    if !ty.markers.item {
        return None;
    }

    let mut item = ItemTranslation {
        type_name: ty.name.clone(),
        namespace: ty.namespace.clone(),
        ..Default::default()
    };

    if let Some(instructions) = ty
        .find_instance_void_method("SetStaticDefaults")
        .and_then(|m| m.instructions())
    {
        for literal in translation_literals(instructions) {
            match literal.getter {
                Some("get_Tooltip") => item.tool_tip = Some(literal.value.to_string()),
                Some("get_DisplayName") => item.name = Some(literal.value.to_string()),
                _ => {}
            }
        }
    }

    if let Some(instructions) = ty.find_method("ModifyTooltips").and_then(|m| m.instructions()) {
        item.modify_tooltips = tooltip_lines(instructions);
    }

    if let Some(instructions) = ty.find_method("UpdateArmorSet").and_then(|m| m.instructions())
        && let Some(bonus) = set_bonus(instructions)
    {
        item.set_bonus = Some(bonus.to_string());
    }

    Some(item)
}

/// Text of every `new TooltipLine(...)` whose arguments are literals or a literal concatenation.
fn tooltip_lines(instructions: &[Instruction]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut cursor = Cursor::new(instructions);

    while let Some((position, instruction)) = cursor.advance() {
        let constructs_line = instruction
            .as_newobj()
            .is_some_and(|ctor| ctor.declaring_type_name() == "TooltipLine");
        if !constructs_line {
            continue;
        }

        let previous = cursor.peek(-1);
        let name = cursor.peek(-2).and_then(Instruction::as_string);
        let text = previous.and_then(Instruction::as_string);

        if let (Some(name), Some(text)) = (name, text) {
            lines.push(name.to_string());
            lines.push(text.to_string());
        } else if let Some(concat) = previous
            .and_then(Instruction::as_call)
            .filter(|m| m.name == "Concat")
        {
            lines.extend(concat_pieces(
                instructions,
                position,
                concat.parameter_count + 1,
            ));
        }
    }

    lines
}

/// Last literal stored into `setBonus`.
fn set_bonus(instructions: &[Instruction]) -> Option<&str> {
    let mut bonus = None;
    let mut cursor = Cursor::new(instructions);

    while let Some((_, instruction)) = cursor.advance() {
        let Some(value) = instruction.as_string() else {
            continue;
        };
        let stores_bonus = cursor
            .peek(1)
            .and_then(Instruction::as_field_store)
            .is_some_and(|field| field.name == "setBonus");
        if stores_bonus {
            bonus = Some(value);
        }
    }

    bonus
}
