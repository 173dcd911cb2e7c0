//! LLVM IR Object Model
//!
//! Plain value types describing a subset of LLVM's textual IR. Nothing in
//! here knows how to print itself; that is the job of [`crate::codegen`].
//!
//! ## Architecture
//!
//! - `types` - Type system (Type, TypeKind)
//! - `constants` - Literal and named operands
//! - `attributes` - Linkage, visibility, calling convention and friends
//! - `opcode` - The full LLVM opcode list
//! - `instructions` - Per-opcode operand structs and `Instruction`
//! - `blocks` - Basic blocks
//! - `globals` - Global variables
//! - `function` - Definitions, declarations and parameters
//! - `module` - Top-level item collection
//! - `builder` - Stateful function body construction

pub use self::types::{Type, TypeKind};
pub use self::constants::{Constant, ConstantKind};
pub use self::attributes::{
    CallingConvention, CodeModel, DllStorageClass, Linkage,
    PreemptionSpecifier, TailCall, ThreadLocal, Visibility,
};
pub use self::opcode::Opcode;
pub use self::instructions::{
    Alloca, Argument, Call, GepIndex, GetElementPtr, Instruction,
    InstructionKind, Load, Ret, Store,
};
pub use self::blocks::BasicBlock;
pub use self::globals::GlobalVariable;
pub use self::function::{ExternalFunction, Function, FunctionParameter};
pub use self::module::{Module, ModuleItem};
pub use self::builder::FunctionBuilder;

mod types;
mod constants;
mod attributes;
mod opcode;
mod instructions;
mod blocks;
mod globals;
mod function;
mod module;
mod builder;
