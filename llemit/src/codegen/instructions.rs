//! Instruction spelling
//!
//! One renderer per supported opcode. An instruction whose opcode has no
//! operand model fails with `UnsupportedOpcode`; an implemented opcode
//! recorded without its operands is malformed.

use log::trace;
use crate::codegen::{require_name, Generate};
use crate::error::{GenError, ResultExt};
use crate::ir::{
    Alloca, Argument, Call, GepIndex, GetElementPtr, Instruction,
    InstructionKind, Load, Ret, Store, Type,
};

impl Generate for Instruction {
    fn generate_into(&self, out: &mut String) -> Result<(), GenError> {
        trace!("generating {} instruction", self.opcode());

        if let InstructionKind::Other(op) = &self.kind {
            return Err(if op.is_implemented() {
                GenError::malformed("instruction", format!("`{op}` carries no operands"))
            } else {
                GenError::UnsupportedOpcode(*op)
            });
        }

        if let Some(name) = &self.name {
            require_name("instruction result", name)?;
            out.push('%');
            out.push_str(name);
            out.push_str(" = ");
        }

        match &self.kind {
            InstructionKind::Ret(ret) => ret.generate_into(out),
            InstructionKind::Alloca(alloca) => alloca.generate_into(out),
            InstructionKind::Load(load) => load.generate_into(out),
            InstructionKind::Store(store) => store.generate_into(out),
            InstructionKind::GetElementPtr(gep) => gep.generate_into(out),
            InstructionKind::Call(call) => call.generate_into(out),
            InstructionKind::Other(op) => Err(GenError::UnsupportedOpcode(*op)),
        }
    }
}

impl Generate for Ret {
    fn generate_into(&self, out: &mut String) -> Result<(), GenError> {
        // Only a `void` return may omit its value
        if self.value.is_none() && self.ty != Type::Void {
            return Err(GenError::malformed("instruction", "`ret` of a non-void type needs a value"));
        }
        out.push_str("ret ");
        self.ty.generate_into(out)?;
        if let Some(value) = &self.value {
            out.push(' ');
            value.generate_into(out)?;
        }
        Ok(())
    }
}

impl Generate for Alloca {
    fn generate_into(&self, out: &mut String) -> Result<(), GenError> {
        out.push_str("alloca ");
        if self.inalloca {
            out.push_str("inalloca ");
        }
        self.ty.generate_into(out)?;
        if self.elements > 1 {
            out.push_str(", ");
            self.ty.generate_into(out)?;
            out.push(' ');
            out.push_str(&self.elements.to_string());
        }
        if let Some(alignment) = self.alignment {
            out.push_str(&format!(", align {alignment}"));
        }
        if let Some(addrspace) = self.addrspace {
            out.push_str(&format!(", addrspace({addrspace})"));
        }
        Ok(())
    }
}

impl Generate for Load {
    fn generate_into(&self, out: &mut String) -> Result<(), GenError> {
        out.push_str("load ");
        if self.volatile {
            out.push_str("volatile ");
        }
        self.value_type.generate_into(out)?;
        out.push_str(", ");
        self.pointer_type.generate_into(out)?;
        out.push(' ');
        self.pointer.generate_into(out)?;
        if let Some(alignment) = self.alignment {
            out.push_str(&format!(", align {alignment}"));
        }
        Ok(())
    }
}

impl Generate for Store {
    fn generate_into(&self, out: &mut String) -> Result<(), GenError> {
        out.push_str("store ");
        if self.volatile {
            out.push_str("volatile ");
        }
        self.value_type.generate_into(out)?;
        out.push(' ');
        self.value.generate_into(out)?;
        out.push_str(", ");
        self.pointer_type.generate_into(out)?;
        out.push(' ');
        self.pointer.generate_into(out)?;
        if let Some(alignment) = self.alignment {
            out.push_str(&format!(", align {alignment}"));
        }
        Ok(())
    }
}

impl Generate for GepIndex {
    fn generate_into(&self, out: &mut String) -> Result<(), GenError> {
        self.ty.generate_into(out)?;
        out.push(' ');
        self.value.generate_into(out)
    }
}

impl Generate for GetElementPtr {
    fn generate_into(&self, out: &mut String) -> Result<(), GenError> {
        out.push_str("getelementptr ");
        if self.inbounds {
            out.push_str("inbounds ");
        }
        self.ty.generate_into(out)?;
        out.push_str(", ");
        self.pointer_type.generate_into(out)?;
        out.push(' ');
        self.pointer.generate_into(out)?;
        for (i, index) in self.indices.iter().enumerate() {
            out.push_str(", ");
            index.generate_into(out).within(|| format!("index #{i}"))?;
        }
        Ok(())
    }
}

impl Generate for Argument {
    fn generate_into(&self, out: &mut String) -> Result<(), GenError> {
        self.ty.generate_into(out)?;
        out.push(' ');
        self.value.generate_into(out)
    }
}

impl Generate for Call {
    fn generate_into(&self, out: &mut String) -> Result<(), GenError> {
        require_name("call", &self.callee)?;
        if let Some(tail) = self.tail {
            out.push_str(tail.keyword());
            out.push(' ');
        }
        out.push_str("call ");
        if let Some(cc) = self.calling_convention {
            out.push_str(cc.keyword());
            out.push(' ');
        }
        if let Some(addrspace) = self.addrspace {
            out.push_str(&format!("addrspace({addrspace}) "));
        }
        self.return_type.generate_into(out)?;
        out.push_str(" @");
        out.push_str(&self.callee);
        out.push('(');
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            argument.generate_into(out).within(|| format!("argument #{i}"))?;
        }
        out.push(')');
        Ok(())
    }
}
