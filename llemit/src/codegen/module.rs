//! Module spelling
//!
//! Header lines first, then every item in insertion order separated by a
//! blank line.

use log::debug;
use crate::codegen::Generate;
use crate::error::GenError;
use crate::ir::{Module, ModuleItem};

impl Generate for ModuleItem {
    fn generate_into(&self, out: &mut String) -> Result<(), GenError> {
        match self {
            ModuleItem::Global(global) => global.generate_into(out),
            ModuleItem::Declaration(decl) => {
                decl.generate_into(out)?;
                out.push('\n');
                Ok(())
            }
            ModuleItem::Function(function) => function.generate_into(out),
        }
    }
}

impl Generate for Module {
    fn generate_into(&self, out: &mut String) -> Result<(), GenError> {
        debug!(
            "generating module {:?} ({} items)",
            self.name.as_deref().unwrap_or("<unnamed>"),
            self.items.len()
        );

        let mut header = false;
        if let Some(name) = &self.name {
            out.push_str(&format!("; ModuleID = '{name}'\n"));
            header = true;
        }
        if let Some(filename) = &self.source_filename {
            out.push_str(&format!("source_filename = \"{filename}\"\n"));
            header = true;
        }
        if let Some(triple) = &self.target_triple {
            out.push_str(&format!("target triple = \"{triple}\"\n"));
            header = true;
        }

        for (i, item) in self.items.iter().enumerate() {
            if header || i > 0 {
                out.push('\n');
            }
            item.generate_into(out)?;
        }
        Ok(())
    }
}
