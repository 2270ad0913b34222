//! Register and immediate operand parsing.

use num_traits::ToPrimitive;

use crate::error::ErrorKind;

pub const MAX_REGISTER: u8 = 15;

/// A parsed second operand. `Reg(0)` and `Imm(0)` stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Reg(u8),
    Imm(i64),
}

/// Drop a trailing operand separator and surrounding whitespace.
pub fn clean(token: &str) -> &str {
    let t = token.trim();
    t.strip_suffix(',').unwrap_or(t).trim()
}

/// `Ok(None)` when the token is not shaped like a register at all.
pub fn parse_register(token: &str) -> Result<Option<u8>, ErrorKind> {
    let t = clean(token);
    let Some(digits) = t.strip_prefix('r') else { return Ok(None) };
    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(None);
    }
    let idx: u8 = digits
        .parse()
        .map_err(|_| ErrorKind::InvalidRegister(t.to_string()))?;
    if idx > MAX_REGISTER {
        return Err(ErrorKind::InvalidRegister(t.to_string()));
    }
    Ok(Some(idx))
}

/// Like [`parse_register`], but a register is mandatory.
pub fn expect_register(token: &str) -> Result<u8, ErrorKind> {
    parse_register(token)?.ok_or_else(|| ErrorKind::InvalidRegister(clean(token).to_string()))
}

/// Decimal by default, hex with a leading `#`. Either base takes an optional
/// `+` or `-` sign after the prefix (`+5`, `#-5`).
pub fn parse_immediate(token: &str) -> Result<i64, ErrorKind> {
    use std::num::IntErrorKind;

    let t = clean(token);
    let (digits, radix) = match t.strip_prefix('#') {
        Some(hex) => (hex, 16),
        None => (t, 10),
    };
    i64::from_str_radix(digits, radix).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ErrorKind::ImmediateTooLarge {
            value: if digits.starts_with('-') { i64::MIN } else { i64::MAX },
            bits: 64,
        },
        _ => ErrorKind::InvalidImmediate(t.to_string()),
    })
}

/// Register first, then immediate.
pub fn parse_operand(token: &str) -> Result<Operand, ErrorKind> {
    match parse_register(token)? {
        Some(r) => Ok(Operand::Reg(r)),
        None => parse_immediate(token).map(Operand::Imm),
    }
}

/// Fit a value into the 32-bit `imm` field; negatives are stored two's-complement.
pub fn imm32(value: i64) -> Result<u32, ErrorKind> {
    value
        .to_u32()
        .or_else(|| value.to_i32().map(|v| v as u32))
        .ok_or(ErrorKind::ImmediateTooLarge { value, bits: 32 })
}

/// Fit a byte displacement into the 16-bit `off` field.
pub fn off16(value: i64) -> Result<i16, ErrorKind> {
    value
        .to_i16()
        .ok_or(ErrorKind::ImmediateTooLarge { value, bits: 16 })
}

/// Label names: `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
