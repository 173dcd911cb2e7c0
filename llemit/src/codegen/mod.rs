//! LLVM Assembly Generation
//!
//! Renders the IR model to `.ll` text. Every entity kind implements
//! [`Generate`]; composite entities embed the rendering of their children.
//!
//! Renderers are total only over the variants they implement. Anything
//! else is reported as a [`GenError`] naming the offending kind, wrapped in
//! the path of entities that led to it.

use crate::error::GenError;

mod attributes;
mod types;
mod constants;
mod instructions;
mod blocks;
mod globals;
mod functions;
mod module;

#[cfg(test)]
mod tests;

/// Indentation of instructions inside a basic block
pub const INSTRUCTION_INDENT: &str = "    ";

/// Widest integer type LLVM accepts
pub const MAX_INTEGER_BITS: u32 = 1 << 23;

/// Conversion of an IR entity to LLVM assembly text
pub trait Generate {
    /// Append the rendering of `self` to `out`.
    ///
    /// On error `out` may hold a partial rendering; use [`Generate::generate`]
    /// to get all-or-nothing behaviour.
    fn generate_into(&self, out: &mut String) -> Result<(), GenError>;

    fn generate(&self) -> Result<String, GenError> {
        let mut out = String::new();
        self.generate_into(&mut out)?;
        Ok(out)
    }
}

/// Render one entity to a fresh string
pub fn generate<T: Generate + ?Sized>(entity: &T) -> Result<String, GenError> {
    entity.generate()
}

/// Append `word` and a separating space. Empty words leave no trace.
fn push_word(out: &mut String, word: &str) {
    if !word.is_empty() {
        out.push_str(word);
        out.push(' ');
    }
}

/// Append a space and `word`. Empty words leave no trace.
fn push_trailer(out: &mut String, word: &str) {
    if !word.is_empty() {
        out.push(' ');
        out.push_str(word);
    }
}

fn require_name(entity: &'static str, name: &str) -> Result<(), GenError> {
    if name.is_empty() {
        Err(GenError::malformed(entity, "name is empty"))
    } else {
        Ok(())
    }
}
