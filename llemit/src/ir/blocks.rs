//! Basic Blocks
//!
//! A labeled instruction sequence. Instructions are emitted in the order
//! they were added; nothing checks for a terminator.

use serde::{Deserialize, Serialize};
use crate::ir::Instruction;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicBlock {
    pub name: String,
    #[serde(default)]
    pub instructions: Vec<Instruction>,
}

impl BasicBlock {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: Vec::new(),
        }
    }

    pub fn add_instruction(&mut self, instr: impl Into<Instruction>) {
        self.instructions.push(instr.into());
    }

    pub fn with_instruction(mut self, instr: impl Into<Instruction>) -> Self {
        self.add_instruction(instr);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn has_terminator(&self) -> bool {
        self.instructions.last().is_some_and(Instruction::is_terminator)
    }
}
