//! LLVM Textual IR Emitter
//!
//! An in-memory object model for a subset of LLVM IR and a deterministic
//! generator that renders it to `.ll` assembly text.
//!
//! - [`ir`] - types, constants, instructions, blocks, globals, functions
//! - [`codegen`] - the [`Generate`] trait and one renderer per entity
//! - [`error`] - generation and builder errors
//! - [`samples`] - ready-made modules
//!
//! ```
//! use llemit::ir::{ExternalFunction, Type};
//! use llemit::Generate;
//!
//! let puts = ExternalFunction::new("puts", Type::i32()).with_parameter(Type::i8().pointer_to());
//! assert_eq!(puts.generate().unwrap(), "declare i32 @puts(i8*)");
//! ```

pub mod ir;
pub mod codegen;
pub mod error;
pub mod samples;

pub use codegen::{generate, Generate};
pub use error::{BuildError, ErrorKind, GenError};
