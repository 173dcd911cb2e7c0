//! Type spelling
//!
//! Integers, pointers and arrays have a textual form. Every other kind is
//! reported as unsupported.

use crate::codegen::{Generate, MAX_INTEGER_BITS};
use crate::error::GenError;
use crate::ir::Type;

impl Generate for Type {
    fn generate_into(&self, out: &mut String) -> Result<(), GenError> {
        match self {
            Type::Integer(bits) if *bits == 0 || *bits > MAX_INTEGER_BITS => Err(GenError::malformed(
                "type",
                format!("integer width {bits} is outside 1..={MAX_INTEGER_BITS}"),
            )),
            Type::Integer(bits) => {
                out.push('i');
                out.push_str(&bits.to_string());
                Ok(())
            }
            // Suffix notation, so `i32**` nests naturally
            Type::Pointer(pointee) => {
                pointee.generate_into(out)?;
                out.push('*');
                Ok(())
            }
            Type::Array { size, element } => {
                out.push('[');
                out.push_str(&size.to_string());
                out.push_str(" x ");
                element.generate_into(out)?;
                out.push(']');
                Ok(())
            }
            other => Err(GenError::UnsupportedType(other.kind())),
        }
    }
}
