//! NPCs: display name, chat lines, shop buttons and town names.

use super::Recognizer;
use super::patterns::{string_literals, translation_literals};
use crate::core::cursor::Cursor;
use crate::core::model::{Instruction, TypeDef};
use crate::core::records::{Category, NpcTranslation, TranslationRecord};

pub struct NpcRecognizer;

impl Recognizer for NpcRecognizer {
    fn category(&self) -> Category {
        Category::Npcs
    }

    fn recognize(&self, ty: &TypeDef, out: &mut Vec<TranslationRecord>) {
        if let Some(npc) = recognize_npc(ty) {
            out.push(npc.into());
        }
    }
}

pub fn recognize_npc(ty: &TypeDef) -> Option<NpcTranslation> {
    if !ty.markers.npc {
        return None;
    }

    let mut npc = NpcTranslation {
        type_name: ty.name.clone(),
        namespace: ty.namespace.clone(),
        ..Default::default()
    };

    if let Some(instructions) = ty
        .find_instance_void_method("SetStaticDefaults")
        .and_then(|m| m.instructions())
    {
        for literal in translation_literals(instructions) {
            if literal.getter == Some("get_DisplayName") {
                npc.name = Some(literal.value.to_string());
            }
        }
    }

    if let Some(instructions) = ty.find_method("GetChat").and_then(|m| m.instructions()) {
        npc.chat_texts = string_literals(instructions).map(str::to_string).collect();
    }

    if let Some(instructions) = ty.find_method("SetChatButtons").and_then(|m| m.instructions()) {
        let (first, second) = shop_buttons(instructions);
        npc.shop_button1 = first.map(str::to_string);
        npc.shop_button2 = second.map(str::to_string);
    }

    if let Some(instructions) = ty.find_method("TownNPCName").and_then(|m| m.instructions()) {
        npc.town_npc_names = string_literals(instructions).map(str::to_string).collect();
    }

    Some(npc)
}

/// Literals assigned through the `ref string button` / `ref string button2` arguments.
///
/// Mods that assign the buttons some other way are not recognized.
fn shop_buttons(instructions: &[Instruction]) -> (Option<&str>, Option<&str>) {
    let mut first = None;
    let mut second = None;
    let mut cursor = Cursor::new(instructions);

    while let Some((_, instruction)) = cursor.advance() {
        let Some(value) = instruction.as_string() else {
            continue;
        };
        let Some(previous) = cursor.peek(-1) else {
            continue;
        };

        if previous.is_load_argument(1) {
            first = Some(value);
        } else if previous.is_load_argument(2) {
            second = Some(value);
        }
    }

    (first, second)
}
