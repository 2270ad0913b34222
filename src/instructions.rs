use bitflags::bitflags;

bitflags! {
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpBits: u8 {
const SRC_REG = 0x08; // second operand is a register (branch ops)
}
}

/// Operand grammar of a mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// `OP dst, src|imm`
    Alu,
    /// `OP dst`; the width lands in `imm`
    ByteSwap { width: u32 },
    /// `JA target`
    Jump,
    /// `OP dst, src|imm, target`
    Branch,
}

impl Form {
    /// Number of operands following the mnemonic.
    pub fn arity(self) -> usize {
        match self {
            Form::Alu => 2,
            Form::ByteSwap { .. } => 1,
            Form::Jump => 1,
            Form::Branch => 3,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct InstrDesc {
    pub mnemonic: &'static str,
    pub opcode: u8,
    pub form: Form,
}

impl InstrDesc {
    const fn alu(mnemonic: &'static str, opcode: u8) -> Self {
        Self { mnemonic, opcode, form: Form::Alu }
    }
    const fn swap(mnemonic: &'static str, opcode: u8, width: u32) -> Self {
        Self { mnemonic, opcode, form: Form::ByteSwap { width } }
    }
    const fn branch(mnemonic: &'static str, opcode: u8) -> Self {
        Self { mnemonic, opcode, form: Form::Branch }
    }
}

pub const TABLE: &[InstrDesc] = &[
    // 64-bit ALU
    InstrDesc::alu("ADD", 0x07),
    InstrDesc::alu("SUB", 0x17),
    InstrDesc::alu("MUL", 0x27),
    InstrDesc::alu("DIV", 0x37),
    InstrDesc::alu("OR", 0x47),
    InstrDesc::alu("AND", 0x57),
    InstrDesc::alu("LSH", 0x67),
    InstrDesc::alu("RSH", 0x77),
    InstrDesc::alu("NEG", 0x87),
    InstrDesc::alu("MOD", 0x97),
    InstrDesc::alu("XOR", 0xA7),
    InstrDesc::alu("MOV", 0xB7),
    InstrDesc::alu("ARSH", 0xC7),
    // 32-bit ALU
    InstrDesc::alu("ADD32", 0x04),
    InstrDesc::alu("SUB32", 0x14),
    InstrDesc::alu("MUL32", 0x24),
    InstrDesc::alu("DIV32", 0x34),
    InstrDesc::alu("OR32", 0x44),
    InstrDesc::alu("AND32", 0x54),
    InstrDesc::alu("LSH32", 0x64),
    InstrDesc::alu("RSH32", 0x74),
    InstrDesc::alu("NEG32", 0x84),
    InstrDesc::alu("MOD32", 0x94),
    InstrDesc::alu("XOR32", 0xA4),
    InstrDesc::alu("MOV32", 0xB4),
    InstrDesc::alu("ARSH32", 0xC4),
    // byteswap
    InstrDesc::swap("LE16", 0xD4, 16),
    InstrDesc::swap("LE32", 0xD4, 32),
    InstrDesc::swap("LE64", 0xD4, 64),
    InstrDesc::swap("BE16", 0xDC, 16),
    InstrDesc::swap("BE32", 0xDC, 32),
    InstrDesc::swap("BE64", 0xDC, 64),
    // jumps
    InstrDesc { mnemonic: "JA", opcode: 0x05, form: Form::Jump },
    InstrDesc::branch("JEQ", 0x15),
    InstrDesc::branch("JGT", 0x25),
    InstrDesc::branch("JGE", 0x35),
    InstrDesc::branch("JSET", 0x45),
    InstrDesc::branch("JNE", 0x55),
    InstrDesc::branch("JLT", 0xA5),
    InstrDesc::branch("JLE", 0xB5),
];

/// Case-insensitive mnemonic lookup.
pub fn lookup(mnemonic: &str) -> Option<&'static InstrDesc> {
    TABLE
        .iter()
        .find(|d| d.mnemonic.eq_ignore_ascii_case(mnemonic))
}

/// Reverse lookup used by the disassembler. Branch opcodes are matched on their
/// base value (without [`OpBits::SRC_REG`]); byteswaps need the width from `imm`.
pub fn by_opcode(opcode: u8, imm: u32) -> Option<&'static InstrDesc> {
    let base = opcode & !OpBits::SRC_REG.bits();
    TABLE.iter().find(|d| match d.form {
        Form::Alu => d.opcode == opcode,
        Form::ByteSwap { width } => d.opcode == opcode && width == imm,
        Form::Jump => d.opcode == opcode,
        Form::Branch => d.opcode == base,
    })
}
