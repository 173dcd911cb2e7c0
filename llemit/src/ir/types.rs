//! IR Type System
//!
//! Defines the LLVM types the model can describe. Composite types own
//! their element type outright, so a type tree is always finite.

use serde::{Deserialize, Serialize};
use std::fmt;

/// LLVM type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Void,
    Function,

    /// Integer type with bit width
    Integer(u32),

    // Floating point kinds
    Half,
    BFloat,
    Float,
    Double,
    Fp128,
    X86Fp80,
    PpcFp128,

    X86Amx,
    X86Mmx,

    /// Pointer to the owned pointee type
    Pointer(Box<Type>),

    /// Vector type <size x element>
    Vector { size: u32, element: Box<Type> },

    Label,

    /// Array type [size x element]
    Array { size: u64, element: Box<Type> },

    Structure,
    OpaqueStructure,
}

/// Field-less tag of a [`Type`], used when reporting unsupported kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeKind {
    Void,
    Function,
    Integer,
    Half,
    BFloat,
    Float,
    Double,
    Fp128,
    X86Fp80,
    PpcFp128,
    X86Amx,
    X86Mmx,
    Pointer,
    Vector,
    Label,
    Array,
    Structure,
    OpaqueStructure,
}

impl Type {
    /// `i1`
    pub fn i1() -> Self {
        Type::Integer(1)
    }

    /// `i8`
    pub fn i8() -> Self {
        Type::Integer(8)
    }

    /// `i32`
    pub fn i32() -> Self {
        Type::Integer(32)
    }

    /// `i64`
    pub fn i64() -> Self {
        Type::Integer(64)
    }

    pub fn pointer(pointee: Type) -> Self {
        Type::Pointer(Box::new(pointee))
    }

    pub fn array(element: Type, size: u64) -> Self {
        Type::Array { size, element: Box::new(element) }
    }

    pub fn vector(element: Type, size: u32) -> Self {
        Type::Vector { size, element: Box::new(element) }
    }

    /// Wrap this type in a pointer, consuming it
    pub fn pointer_to(self) -> Self {
        Type::pointer(self)
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            Type::Void => TypeKind::Void,
            Type::Function => TypeKind::Function,
            Type::Integer(_) => TypeKind::Integer,
            Type::Half => TypeKind::Half,
            Type::BFloat => TypeKind::BFloat,
            Type::Float => TypeKind::Float,
            Type::Double => TypeKind::Double,
            Type::Fp128 => TypeKind::Fp128,
            Type::X86Fp80 => TypeKind::X86Fp80,
            Type::PpcFp128 => TypeKind::PpcFp128,
            Type::X86Amx => TypeKind::X86Amx,
            Type::X86Mmx => TypeKind::X86Mmx,
            Type::Pointer(_) => TypeKind::Pointer,
            Type::Vector { .. } => TypeKind::Vector,
            Type::Label => TypeKind::Label,
            Type::Array { .. } => TypeKind::Array,
            Type::Structure => TypeKind::Structure,
            Type::OpaqueStructure => TypeKind::OpaqueStructure,
        }
    }

    /// Get the element type for pointers, arrays and vectors
    pub fn element_type(&self) -> Option<&Type> {
        match self {
            Type::Pointer(pointee) => Some(pointee),
            Type::Array { element, .. } | Type::Vector { element, .. } => Some(element),
            _ => None,
        }
    }

    /// Bit width for integers, element count for arrays and vectors
    pub fn size(&self) -> Option<u64> {
        match self {
            Type::Integer(bits) => Some(u64::from(*bits)),
            Type::Array { size, .. } => Some(*size),
            Type::Vector { size, .. } => Some(u64::from(*size)),
            _ => None,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Type::Integer(_))
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, Type::Pointer(_))
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeKind::Void => "void",
            TypeKind::Function => "function",
            TypeKind::Integer => "integer",
            TypeKind::Half => "half",
            TypeKind::BFloat => "bfloat",
            TypeKind::Float => "float",
            TypeKind::Double => "double",
            TypeKind::Fp128 => "fp128",
            TypeKind::X86Fp80 => "x86_fp80",
            TypeKind::PpcFp128 => "ppc_fp128",
            TypeKind::X86Amx => "x86_amx",
            TypeKind::X86Mmx => "x86_mmx",
            TypeKind::Pointer => "pointer",
            TypeKind::Vector => "vector",
            TypeKind::Label => "label",
            TypeKind::Array => "array",
            TypeKind::Structure => "structure",
            TypeKind::OpaqueStructure => "opaque structure",
        };
        write!(f, "{name}")
    }
}
