//! IR Constants
//!
//! Literal values and named references usable as operands and initializers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Constant operand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Constant {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Null,

    /// Raw string body, emitted between `c"` and `"` without escaping.
    /// Callers include the trailing `\00` themselves.
    String(String),

    /// Function-local value, `%name`
    LocalVariable(String),

    /// Module-level symbol, `@name`
    GlobalVariable(String),
}

/// Field-less tag of a [`Constant`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstantKind {
    Boolean,
    Integer,
    Float,
    Null,
    String,
    LocalVariable,
    GlobalVariable,
}

impl Constant {
    pub fn string(value: impl Into<String>) -> Self {
        Constant::String(value.into())
    }

    pub fn local(name: impl Into<String>) -> Self {
        Constant::LocalVariable(name.into())
    }

    pub fn global(name: impl Into<String>) -> Self {
        Constant::GlobalVariable(name.into())
    }

    pub fn kind(&self) -> ConstantKind {
        match self {
            Constant::Boolean(_) => ConstantKind::Boolean,
            Constant::Integer(_) => ConstantKind::Integer,
            Constant::Float(_) => ConstantKind::Float,
            Constant::Null => ConstantKind::Null,
            Constant::String(_) => ConstantKind::String,
            Constant::LocalVariable(_) => ConstantKind::LocalVariable,
            Constant::GlobalVariable(_) => ConstantKind::GlobalVariable,
        }
    }

    /// Name of the referenced variable, if this is a reference
    pub fn variable_name(&self) -> Option<&str> {
        match self {
            Constant::LocalVariable(name) | Constant::GlobalVariable(name) => Some(name),
            _ => None,
        }
    }
}

impl From<i64> for Constant {
    fn from(value: i64) -> Self {
        Constant::Integer(value)
    }
}

impl From<bool> for Constant {
    fn from(value: bool) -> Self {
        Constant::Boolean(value)
    }
}

impl From<f64> for Constant {
    fn from(value: f64) -> Self {
        Constant::Float(value)
    }
}

impl fmt::Display for ConstantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConstantKind::Boolean => "boolean",
            ConstantKind::Integer => "integer",
            ConstantKind::Float => "float",
            ConstantKind::Null => "null",
            ConstantKind::String => "string",
            ConstantKind::LocalVariable => "local variable",
            ConstantKind::GlobalVariable => "global variable",
        };
        write!(f, "{name}")
    }
}
