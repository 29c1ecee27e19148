//! Category recognizers.
//!
//! A recognizer matches the call-site idioms of one category and turns the
//! literals it finds into records. Recognition is best effort: a method that
//! does not follow the expected idiom contributes nothing, and that is never
//! an error or a warning.
//!
//! ## Module Structure
//!
//! - `patterns`: Idioms shared by several recognizers (translation literals,
//!   concat reconstruction, single-slot def/use)
//! - `item`, `npc`, `buff`, `tile`: Recognizers gated on a mod base marker
//! - `misc`, `custom`: Recognizers that scan every method of every type

pub mod buff;
pub mod custom;
pub mod item;
pub mod misc;
pub mod npc;
pub mod patterns;
pub mod tile;

pub use buff::BuffRecognizer;
pub use custom::CustomRecognizer;
pub use item::ItemRecognizer;
pub use misc::MiscRecognizer;
pub use npc::NpcRecognizer;
pub use tile::TileRecognizer;

use crate::core::model::TypeDef;
use crate::core::records::{Category, TranslationRecord};

/// Extracts one category of records from a single type.
///
/// Implementations only read the type, so the orchestrator may run them for
/// different types on different threads.
pub trait Recognizer: Sync {
    fn category(&self) -> Category;

    /// Append the records `ty` contributes, in discovery order.
    fn recognize(&self, ty: &TypeDef, out: &mut Vec<TranslationRecord>);
}

/// The recognizer responsible for `category`.
pub fn recognizer_for(category: Category) -> &'static dyn Recognizer {
    match category {
        Category::Items => &ItemRecognizer,
        Category::Npcs => &NpcRecognizer,
        Category::Buffs => &BuffRecognizer,
        Category::Misc => &MiscRecognizer,
        Category::Tiles => &TileRecognizer,
        Category::Customs => &CustomRecognizer,
    }
}
