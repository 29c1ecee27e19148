//! Module model: types, methods and method bodies.
//!
//! The model is produced by a [`ModuleDecoder`](super::decoder::ModuleDecoder)
//! and is never mutated by extraction. The only derived data is the per-type
//! [`ModMarkers`], computed once by [`Module::resolve_markers`] right after
//! decoding.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::instruction::Instruction;

/// Full names of the modding-API base types that identify each recognizable kind of type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerNames {
    #[serde(default = "default_item_marker")]
    pub item: String,
    #[serde(default = "default_npc_marker")]
    pub npc: String,
    #[serde(default = "default_buff_marker")]
    pub buff: String,
    #[serde(default = "default_tile_marker")]
    pub tile: String,
}

fn default_item_marker() -> String {
    "Terraria.ModLoader.ModItem".to_string()
}

fn default_npc_marker() -> String {
    "Terraria.ModLoader.ModNPC".to_string()
}

fn default_buff_marker() -> String {
    "Terraria.ModLoader.ModBuff".to_string()
}

fn default_tile_marker() -> String {
    "Terraria.ModLoader.ModTile".to_string()
}

impl Default for MarkerNames {
    fn default() -> Self {
        Self {
            item: default_item_marker(),
            npc: default_npc_marker(),
            buff: default_buff_marker(),
            tile: default_tile_marker(),
        }
    }
}

/// Which modding-API base types a type derives from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModMarkers {
    pub item: bool,
    pub npc: bool,
    pub buff: bool,
    pub tile: bool,
}

impl ModMarkers {
    fn from_chain<'a>(chain: impl IntoIterator<Item = &'a str>, names: &MarkerNames) -> Self {
        let mut markers = ModMarkers::default();
        for base in chain {
            markers.item |= base == names.item;
            markers.npc |= base == names.npc;
            markers.buff |= base == names.buff;
            markers.tile |= base == names.tile;
        }
        markers
    }
}

/// A decoded code module: an ordered collection of types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    #[serde(default)]
    pub types: Vec<TypeDef>,
}

/// A type definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDef {
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    /// Ancestor full names, nearest first, as far as the decoder could see them.
    #[serde(default)]
    pub base_types: Vec<String>,
    #[serde(default)]
    pub methods: Vec<MethodDef>,
    /// Resolved by [`Module::resolve_markers`].
    #[serde(skip)]
    pub markers: ModMarkers,
}

/// A method definition. `body` is `None` for abstract and external methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDef {
    pub name: String,
    #[serde(default = "default_true")]
    pub is_instance: bool,
    #[serde(default)]
    pub parameter_count: usize,
    #[serde(default = "default_true")]
    pub returns_void: bool,
    #[serde(default)]
    pub body: Option<MethodBody>,
}

fn default_true() -> bool {
    true
}

/// Instruction stream and local slot table of a method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodBody {
    #[serde(default)]
    pub locals: u16,
    #[serde(default)]
    pub instructions: Vec<Instruction>,
}

impl Module {
    /// Compute [`ModMarkers`] for every type.
    ///
    /// Base types declared in this module are followed transitively, so a type
    /// deriving from a mod-local `BaseSword : ModItem` is still an item even when
    /// the decoder only recorded its direct base.
    pub fn resolve_markers(&mut self, names: &MarkerNames) {
        let by_full_name: HashMap<String, usize> = self
            .types
            .iter()
            .enumerate()
            .map(|(index, ty)| (ty.full_name(), index))
            .collect();

        let resolved: Vec<ModMarkers> = self
            .types
            .iter()
            .map(|ty| {
                let chain = ancestor_chain(ty, &self.types, &by_full_name);
                ModMarkers::from_chain(chain.iter().map(|s| s.as_str()), names)
            })
            .collect();

        for (ty, markers) in self.types.iter_mut().zip(resolved) {
            ty.markers = markers;
        }
    }
}

/// All ancestor names reachable from `ty`, including those of in-module base types.
fn ancestor_chain<'a>(
    ty: &'a TypeDef,
    types: &'a [TypeDef],
    by_full_name: &HashMap<String, usize>,
) -> Vec<&'a String> {
    let mut chain = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut pending: Vec<&'a String> = ty.base_types.iter().rev().collect();

    while let Some(base) = pending.pop() {
        if !seen.insert(base.as_str()) {
            continue;
        }
        chain.push(base);
        if let Some(&index) = by_full_name.get(base.as_str()) {
            pending.extend(types[index].base_types.iter().rev());
        }
    }

    chain
}

impl TypeDef {
    /// `Namespace.Name`, or just `Name` for types in the global namespace.
    pub fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// First method with the given name, whatever its signature.
    pub fn find_method(&self, name: &str) -> Option<&MethodDef> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// The zero-argument, void-returning instance method with the given name.
    pub fn find_instance_void_method(&self, name: &str) -> Option<&MethodDef> {
        self.methods.iter().find(|m| {
            m.name == name && m.is_instance && m.parameter_count == 0 && m.returns_void
        })
    }
}

impl MethodDef {
    /// The instruction stream, or `None` for methods without a body.
    pub fn instructions(&self) -> Option<&[Instruction]> {
        self.body.as_ref().map(|body| body.instructions.as_slice())
    }
}
