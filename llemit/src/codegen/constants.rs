//! Constant spelling

use crate::codegen::{require_name, Generate};
use crate::error::GenError;
use crate::ir::{Constant, ConstantKind};

impl Generate for Constant {
    fn generate_into(&self, out: &mut String) -> Result<(), GenError> {
        match self {
            Constant::Boolean(value) => out.push(if *value { '1' } else { '0' }),
            Constant::Integer(value) => out.push_str(&value.to_string()),
            Constant::Float(value) => out.push_str(&float_literal(*value)),
            Constant::String(value) => {
                out.push_str("c\"");
                out.push_str(value);
                out.push('"');
            }
            Constant::LocalVariable(name) => {
                require_name("local variable reference", name)?;
                out.push('%');
                out.push_str(name);
            }
            Constant::GlobalVariable(name) => {
                require_name("global variable reference", name)?;
                out.push('@');
                out.push_str(name);
            }
            Constant::Null => return Err(GenError::UnsupportedConstant(ConstantKind::Null)),
        }
        Ok(())
    }
}

/// Decimal literal whose mantissa always has a `.`, as the `.ll` lexer
/// requires. Infinities and NaNs use the 16-digit hexadecimal double form.
fn float_literal(value: f64) -> String {
    if !value.is_finite() {
        return format!("0x{:016X}", value.to_bits());
    }
    let text = format!("{value:?}");
    if text.contains('.') {
        return text;
    }
    match text.find('e') {
        Some(exponent) => format!("{}.0{}", &text[..exponent], &text[exponent..]),
        None => format!("{text}.0"),
    }
}

#[cfg(test)]
mod tests {
    use super::float_literal;

    #[test]
    fn test_float_literal_has_decimal_point() {
        assert_eq!(float_literal(1.0), "1.0");
        assert_eq!(float_literal(2.5), "2.5");
        assert_eq!(float_literal(-0.125), "-0.125");
        assert_eq!(float_literal(1e20), "1.0e20");
        assert_eq!(float_literal(1.5e-7), "1.5e-7");
    }

    #[test]
    fn test_non_finite_floats_are_hex() {
        assert_eq!(float_literal(f64::INFINITY), "0x7FF0000000000000");
        assert_eq!(float_literal(f64::NEG_INFINITY), "0xFFF0000000000000");
    }
}
