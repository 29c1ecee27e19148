//! Buffs: display name and tooltip set in `SetDefaults`.

use super::Recognizer;
use super::patterns::translation_literals;
use crate::core::model::TypeDef;
use crate::core::records::{BuffTranslation, Category, TranslationRecord};

pub struct BuffRecognizer;

impl Recognizer for BuffRecognizer {
    fn category(&self) -> Category {
        Category::Buffs
    }

    fn recognize(&self, ty: &TypeDef, out: &mut Vec<TranslationRecord>) {
        if let Some(buff) = recognize_buff(ty) {
            out.push(buff.into());
        }
    }
}

/// Buff name and tip from `SetDefaults`.
///
/// Unlike items and NPCs, a buff without a `SetDefaults` body yields no record.
pub fn recognize_buff(ty: &TypeDef) -> Option<BuffTranslation> {
    if !ty.markers.buff {
        return None;
    }

    let instructions = ty
        .find_instance_void_method("SetDefaults")
        .and_then(|m| m.instructions())?;

    let mut buff = BuffTranslation {
        type_name: ty.name.clone(),
        namespace: ty.namespace.clone(),
        ..Default::default()
    };

    for literal in translation_literals(instructions) {
        match literal.getter {
            Some("get_DisplayName") => buff.name = Some(literal.value.to_string()),
            Some("get_Description") => buff.tip = Some(literal.value.to_string()),
            _ => {}
        }
    }

    Some(buff)
}
