//! Translation records produced by the recognizers.
//!
//! Each category has its own flat record type whose serialized shape is the
//! on-disk schema shared with the patching side: PascalCase keys, optionals
//! written as `null`, lists in discovery order.
//!
//! Records are created once per extraction pass and never mutated afterwards.

use std::fmt;

use clap::ValueEnum;
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

/// Output category. One folder per category, one file per namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Items,
    Npcs,
    Buffs,
    Misc,
    Tiles,
    Customs,
}

impl Category {
    pub fn all() -> Vec<Category> {
        vec![
            Category::Items,
            Category::Npcs,
            Category::Buffs,
            Category::Misc,
            Category::Tiles,
            Category::Customs,
        ]
    }

    /// Folder name under the mod output directory.
    pub fn folder(&self) -> &'static str {
        match self {
            Category::Items => "Items",
            Category::Npcs => "NPCs",
            Category::Buffs => "Buffs",
            Category::Misc => "Misc",
            Category::Tiles => "Tiles",
            Category::Customs => "Customs",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.folder())
    }
}

/// Common view over every record type.
#[enum_dispatch]
pub trait Translation {
    /// Namespace of the owning type; used to group records into files.
    fn namespace(&self) -> &str;

    /// Human-readable owner used in diagnostics (type name or custom key).
    fn owner(&self) -> &str;

    fn category(&self) -> Category;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemTranslation {
    pub type_name: String,
    pub namespace: String,
    pub name: Option<String>,
    pub tool_tip: Option<String>,
    pub modify_tooltips: Vec<String>,
    pub set_bonus: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NpcTranslation {
    pub type_name: String,
    pub namespace: String,
    pub name: Option<String>,
    pub chat_texts: Vec<String>,
    pub shop_button1: Option<String>,
    pub shop_button2: Option<String>,
    pub town_npc_names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BuffTranslation {
    pub type_name: String,
    pub namespace: String,
    pub name: Option<String>,
    pub tip: Option<String>,
}

/// Map entry name of a tile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MapEntryTranslation {
    pub type_name: String,
    pub namespace: String,
    pub name: Option<String>,
}

/// Chat lines passed to `NewText` from one method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewTextTranslation {
    pub type_name: String,
    pub namespace: String,
    pub method: String,
    pub contents: Vec<String>,
}

/// A key/value pair registered through `CreateTranslation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomTranslation {
    pub key: String,
    pub namespace: String,
    pub value: String,
}

macro_rules! impl_translation {
    ($record:ty, $owner:ident, $category:expr) => {
        impl Translation for $record {
            fn namespace(&self) -> &str {
                &self.namespace
            }

            fn owner(&self) -> &str {
                &self.$owner
            }

            fn category(&self) -> Category {
                $category
            }
        }
    };
}

impl_translation!(ItemTranslation, type_name, Category::Items);
impl_translation!(NpcTranslation, type_name, Category::Npcs);
impl_translation!(BuffTranslation, type_name, Category::Buffs);
impl_translation!(MapEntryTranslation, type_name, Category::Tiles);
impl_translation!(NewTextTranslation, type_name, Category::Misc);
impl_translation!(CustomTranslation, key, Category::Customs);

/// Any record, tagged by category.
#[enum_dispatch(Translation)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationRecord {
    Item(ItemTranslation),
    Npc(NpcTranslation),
    Buff(BuffTranslation),
    MapEntry(MapEntryTranslation),
    Misc(NewTextTranslation),
    Custom(CustomTranslation),
}
