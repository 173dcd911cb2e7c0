//! Function definition and declaration spelling
//!
//! ```text
//! define [linkage] [preemption] [visibility] [dll] [cconv] <ret> @<name>(<params>) [trailers] {
//! <blocks>
//! }
//! declare [linkage] [visibility] [dll] [cconv] <ret> @<name>(<params>) [trailers]
//! ```

use log::debug;
use crate::codegen::{push_trailer, push_word, require_name, Generate};
use crate::error::{GenError, ResultExt};
use crate::ir::{ExternalFunction, Function, FunctionParameter, Type};

impl Generate for FunctionParameter {
    fn generate_into(&self, out: &mut String) -> Result<(), GenError> {
        self.ty.generate_into(out)?;
        if let Some(name) = &self.name {
            require_name("parameter", name)?;
            out.push_str(" %");
            out.push_str(name);
        }
        Ok(())
    }
}

/// `<ret> @<name>(<params>)`
fn write_signature(
    return_type: &Type,
    name: &str,
    parameters: &[FunctionParameter],
    out: &mut String,
) -> Result<(), GenError> {
    return_type.generate_into(out).within(|| "return type")?;
    out.push_str(" @");
    out.push_str(name);
    out.push('(');
    for (i, parameter) in parameters.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        parameter.generate_into(out).within(|| format!("parameter #{i}"))?;
    }
    out.push(')');
    Ok(())
}

impl Generate for Function {
    fn generate_into(&self, out: &mut String) -> Result<(), GenError> {
        debug!("generating function '@{}' ({} blocks)", self.name, self.body.len());
        write_definition(self, out)
            .within(|| format!("function '@{}'", self.name))
            .inspect_err(|err| debug!("failed to generate function '@{}': {err}", self.name))
    }
}

fn write_definition(function: &Function, out: &mut String) -> Result<(), GenError> {
    require_name("function", &function.name)?;

    out.push_str("define ");
    if let Some(linkage) = function.linkage {
        push_word(out, linkage.keyword());
    }
    if let Some(specifier) = function.preemption_specifier {
        push_word(out, specifier.keyword());
    }
    if let Some(visibility) = function.visibility {
        push_word(out, visibility.keyword());
    }
    if let Some(class) = function.dll_storage_class {
        push_word(out, class.keyword());
    }
    if let Some(cc) = function.calling_convention {
        push_word(out, cc.keyword());
    }

    write_signature(&function.return_type, &function.name, &function.parameters, out)?;

    if function.unnamed_addr {
        push_trailer(out, "unnamed_addr");
    }
    if function.local_unnamed_addr {
        push_trailer(out, "local_unnamed_addr");
    }
    if let Some(addr_space) = function.addr_space {
        push_trailer(out, &format!("addrspace({addr_space})"));
    }
    if let Some(section) = &function.section {
        push_trailer(out, &format!("section \"{section}\""));
    }
    if let Some(partition) = &function.partition {
        push_trailer(out, &format!("partition \"{partition}\""));
    }
    if let Some(alignment) = function.alignment {
        push_trailer(out, &format!("align {alignment}"));
    }

    out.push_str(" {\n");
    for block in &function.body {
        block
            .generate_into(out)
            .within(|| format!("block '{}'", block.name))?;
    }
    out.push_str("}\n");
    Ok(())
}

impl Generate for ExternalFunction {
    fn generate_into(&self, out: &mut String) -> Result<(), GenError> {
        debug!("generating declaration '@{}'", self.name);
        write_declaration(self, out)
            .within(|| format!("declaration '@{}'", self.name))
            .inspect_err(|err| debug!("failed to generate declaration '@{}': {err}", self.name))
    }
}

/// A single line without a trailing newline
fn write_declaration(decl: &ExternalFunction, out: &mut String) -> Result<(), GenError> {
    require_name("external function", &decl.name)?;

    out.push_str("declare ");
    if let Some(linkage) = decl.linkage {
        push_word(out, linkage.keyword());
    }
    if let Some(visibility) = decl.visibility {
        push_word(out, visibility.keyword());
    }
    if let Some(class) = decl.dll_storage_class {
        push_word(out, class.keyword());
    }
    if let Some(cc) = decl.calling_convention {
        push_word(out, cc.keyword());
    }

    write_signature(&decl.return_type, &decl.name, &decl.parameters, out)?;

    if decl.unnamed_addr {
        push_trailer(out, "unnamed_addr");
    }
    if decl.local_unnamed_addr {
        push_trailer(out, "local_unnamed_addr");
    }
    if let Some(alignment) = decl.alignment {
        push_trailer(out, &format!("align {alignment}"));
    }
    Ok(())
}
