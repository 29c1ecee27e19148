//! Extraction orchestrator.
//!
//! Runs the selected recognizers over every type of a module and aggregates
//! their records per category. Types are recognized in parallel with rayon;
//! the indexed collect keeps results in module order, so output order is
//! the same as a sequential pass: type order first, then discovery order
//! within a type.

use rayon::prelude::*;

use crate::core::model::Module;
use crate::core::records::{
    BuffTranslation, Category, CustomTranslation, ItemTranslation, MapEntryTranslation,
    NewTextTranslation, NpcTranslation, TranslationRecord,
};
use crate::core::recognize::{Recognizer, recognizer_for};

/// All records of one extraction pass, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedRecords {
    pub items: Vec<ItemTranslation>,
    pub npcs: Vec<NpcTranslation>,
    pub buffs: Vec<BuffTranslation>,
    pub misc: Vec<NewTextTranslation>,
    pub tiles: Vec<MapEntryTranslation>,
    pub customs: Vec<CustomTranslation>,
}

impl ExtractedRecords {
    fn push(&mut self, record: TranslationRecord) {
        match record {
            TranslationRecord::Item(r) => self.items.push(r),
            TranslationRecord::Npc(r) => self.npcs.push(r),
            TranslationRecord::Buff(r) => self.buffs.push(r),
            TranslationRecord::Misc(r) => self.misc.push(r),
            TranslationRecord::MapEntry(r) => self.tiles.push(r),
            TranslationRecord::Custom(r) => self.customs.push(r),
        }
    }

    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Items => self.items.len(),
            Category::Npcs => self.npcs.len(),
            Category::Buffs => self.buffs.len(),
            Category::Misc => self.misc.len(),
            Category::Tiles => self.tiles.len(),
            Category::Customs => self.customs.len(),
        }
    }

    pub fn total(&self) -> usize {
        Category::all().into_iter().map(|c| self.count(c)).sum()
    }
}

/// Extract the records of the given categories from `module`.
///
/// Markers must already be resolved (see `Module::resolve_markers`).
/// Duplicate categories are ignored.
pub fn extract(module: &Module, categories: &[Category]) -> ExtractedRecords {
    let recognizers: Vec<&dyn Recognizer> = Category::all()
        .into_iter()
        .filter(|category| categories.contains(category))
        .map(recognizer_for)
        .collect();

    let per_type: Vec<Vec<TranslationRecord>> = module
        .types
        .par_iter()
        .map(|ty| {
            let mut records = Vec::new();
            for recognizer in &recognizers {
                recognizer.recognize(ty, &mut records);
            }
            records
        })
        .collect();

    let mut extracted = ExtractedRecords::default();
    for record in per_type.into_iter().flatten() {
        extracted.push(record);
    }
    extracted
}
