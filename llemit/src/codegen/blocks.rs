//! Basic block spelling

use log::trace;
use crate::codegen::{require_name, Generate, INSTRUCTION_INDENT};
use crate::error::{GenError, ResultExt};
use crate::ir::BasicBlock;

impl Generate for BasicBlock {
    fn generate_into(&self, out: &mut String) -> Result<(), GenError> {
        require_name("basic block", &self.name)?;
        trace!("generating block '{}' ({} instructions)", self.name, self.instructions.len());

        out.push_str(&self.name);
        out.push_str(":\n");
        for (i, instr) in self.instructions.iter().enumerate() {
            out.push_str(INSTRUCTION_INDENT);
            instr
                .generate_into(out)
                .within(|| format!("instruction #{i} ({})", instr.opcode()))?;
            out.push('\n');
        }
        Ok(())
    }
}
