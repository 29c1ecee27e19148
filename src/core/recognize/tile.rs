//! Tiles: the map entry name set in `SetDefaults`.

use super::Recognizer;
use super::patterns::translation_literals;
use crate::core::model::TypeDef;
use crate::core::records::{Category, MapEntryTranslation, TranslationRecord};

pub struct TileRecognizer;

impl Recognizer for TileRecognizer {
    fn category(&self) -> Category {
        Category::Tiles
    }

    fn recognize(&self, ty: &TypeDef, out: &mut Vec<TranslationRecord>) {
        if let Some(entry) = recognize_map_entry(ty) {
            out.push(entry.into());
        }
    }
}

/// Map entry name of a tile: the last literal handed to `ModTranslation.SetDefault`
/// in `SetDefaults`, whatever translation object it targets.
pub fn recognize_map_entry(ty: &TypeDef) -> Option<MapEntryTranslation> {
    if !ty.markers.tile {
        return None;
    }

    let instructions = ty
        .find_instance_void_method("SetDefaults")
        .and_then(|m| m.instructions())?;

    Some(MapEntryTranslation {
        type_name: ty.name.clone(),
        namespace: ty.namespace.clone(),
        name: translation_literals(instructions)
            .last()
            .map(|literal| literal.value.to_string()),
    })
}
