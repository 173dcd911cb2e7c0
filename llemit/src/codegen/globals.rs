//! Global variable spelling
//!
//! `@<name> = [prefix attributes] global|constant <type> <initializer>[, trailers]`
//!
//! The attribute order is fixed by the LLVM grammar.

use log::debug;
use crate::codegen::{push_word, require_name, Generate};
use crate::error::{GenError, ResultExt};
use crate::ir::GlobalVariable;

impl Generate for GlobalVariable {
    fn generate_into(&self, out: &mut String) -> Result<(), GenError> {
        debug!("generating global '@{}'", self.name);
        write_global(self, out)
            .within(|| format!("global '@{}'", self.name))
            .inspect_err(|err| debug!("failed to generate global '@{}': {err}", self.name))
    }
}

fn write_global(var: &GlobalVariable, out: &mut String) -> Result<(), GenError> {
    require_name("global variable", &var.name)?;

    out.push('@');
    out.push_str(&var.name);
    out.push_str(" = ");

    if let Some(linkage) = var.linkage {
        push_word(out, linkage.keyword());
    }
    if let Some(specifier) = var.preemption_specifier {
        push_word(out, specifier.keyword());
    }
    if let Some(visibility) = var.visibility {
        push_word(out, visibility.keyword());
    }
    if let Some(class) = var.dll_storage_class {
        push_word(out, class.keyword());
    }
    if let Some(mode) = var.thread_local {
        push_word(out, &mode.to_string());
    }
    if var.unnamed_addr {
        push_word(out, "unnamed_addr");
    }
    if var.local_unnamed_addr {
        push_word(out, "local_unnamed_addr");
    }
    if let Some(addr_space) = var.addr_space {
        push_word(out, &format!("addrspace({addr_space})"));
    }
    if var.externally_initialized {
        push_word(out, "external");
    }
    push_word(out, if var.global { "global" } else { "constant" });

    var.ty.generate_into(out)?;
    out.push(' ');
    var.initializer.generate_into(out).within(|| "initializer")?;

    if let Some(section) = &var.section {
        out.push_str(&format!(", section \"{section}\""));
    }
    if let Some(partition) = &var.partition {
        out.push_str(&format!(", partition \"{partition}\""));
    }
    if let Some(alignment) = var.alignment {
        out.push_str(&format!(", align {alignment}"));
    }
    if let Some(model) = var.code_model {
        out.push_str(&format!(", codemodel \"{model}\""));
    }
    if var.no_sanitize_address {
        out.push_str(", no_sanitize_address");
    }
    if var.no_sanitize_hwaddress {
        out.push_str(", no_sanitize_hwaddress");
    }
    if var.sanitize_address_dyninit {
        out.push_str(", sanitize_address_dyninit");
    }
    if var.sanitize_memtag {
        out.push_str(", sanitize_memtag");
    }

    out.push('\n');
    Ok(())
}
