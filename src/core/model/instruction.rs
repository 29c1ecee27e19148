//! Decoded instructions and the operand shapes recognizers match on.
//!
//! Only the instruction kinds that translation idioms depend on are modelled
//! explicitly. Everything else decodes to [`Instruction::Other`], which still
//! occupies a position so lookbehind/lookahead distances stay faithful to the
//! original method body.

use serde::{Deserialize, Serialize};

/// Reference to a method or field declared on some type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRef {
    /// Full name of the declaring type (e.g., `Terraria.ModLoader.ModTranslation`).
    pub declaring_type: String,
    /// Member name (e.g., `SetDefault`, `get_DisplayName`, `setBonus`).
    pub name: String,
    /// Number of declared parameters. Always 0 for fields.
    #[serde(default)]
    pub parameter_count: usize,
}

impl MemberRef {
    pub fn new(declaring_type: &str, name: &str, parameter_count: usize) -> Self {
        Self {
            declaring_type: declaring_type.to_string(),
            name: name.to_string(),
            parameter_count,
        }
    }

    /// Simple name of the declaring type, without namespace or enclosing types.
    ///
    /// `Terraria.ModLoader.ModTranslation` → `ModTranslation`,
    /// `Outer/Inner` → `Inner`.
    pub fn declaring_type_name(&self) -> &str {
        self.declaring_type
            .rsplit(['.', '/'])
            .next()
            .unwrap_or(&self.declaring_type)
    }

    /// True if this is `member` declared on a type whose simple name is `type_name`.
    pub fn is(&self, type_name: &str, member: &str) -> bool {
        self.name == member && self.declaring_type_name() == type_name
    }
}

/// One decoded instruction. The position is its index in the method body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Instruction {
    /// Push a constant string (`ldstr`).
    Ldstr { value: String },
    /// Non-virtual call.
    Call { method: MemberRef },
    /// Virtual call. Compilers emit this for most instance calls.
    Callvirt { method: MemberRef },
    /// Construct an object; `ctor` is declared on the constructed type.
    Newobj { ctor: MemberRef },
    /// Store into an instance field.
    Stfld { field: MemberRef },
    /// Store into a local slot.
    Stloc { slot: u16 },
    /// Load from a local slot.
    Ldloc { slot: u16 },
    /// Load argument N (`ldarg.N`, argument 0 is `this` on instance methods).
    Ldarg { index: u16 },
    /// Load an object reference from an array element.
    LdelemRef,
    /// Any instruction no recognizer looks at.
    #[serde(other)]
    Other,
}

impl Instruction {
    /// The literal if this pushes a constant string.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Instruction::Ldstr { value } => Some(value),
            _ => None,
        }
    }

    /// The call target for both `call` and `callvirt`.
    pub fn as_call(&self) -> Option<&MemberRef> {
        match self {
            Instruction::Call { method } | Instruction::Callvirt { method } => Some(method),
            _ => None,
        }
    }

    /// True if this calls `member` declared on a type named `type_name`.
    pub fn is_call_to(&self, type_name: &str, member: &str) -> bool {
        self.as_call().is_some_and(|m| m.is(type_name, member))
    }

    /// True if this calls any member named `member`, whatever its declaring type.
    pub fn is_call_named(&self, member: &str) -> bool {
        self.as_call().is_some_and(|m| m.name == member)
    }

    /// The constructor reference of an object construction.
    pub fn as_newobj(&self) -> Option<&MemberRef> {
        match self {
            Instruction::Newobj { ctor } => Some(ctor),
            _ => None,
        }
    }

    /// The field reference of an instance field store.
    pub fn as_field_store(&self) -> Option<&MemberRef> {
        match self {
            Instruction::Stfld { field } => Some(field),
            _ => None,
        }
    }

    pub fn as_local_store(&self) -> Option<u16> {
        match self {
            Instruction::Stloc { slot } => Some(*slot),
            _ => None,
        }
    }

    pub fn as_local_load(&self) -> Option<u16> {
        match self {
            Instruction::Ldloc { slot } => Some(*slot),
            _ => None,
        }
    }

    pub fn is_load_argument(&self, n: u16) -> bool {
        matches!(self, Instruction::Ldarg { index } if *index == n)
    }

    pub fn is_array_element_load(&self) -> bool {
        matches!(self, Instruction::LdelemRef)
    }
}
