use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// One 8-byte machine record.
///
/// Layout (little-endian): `imm:u32 | off:i16 | src<<4 | dst | opcode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Instruction {
    pub opcode: u8,
    pub dst: u8, // 0..=15
    pub src: u8, // 0..=15, zero for immediate forms
    pub off: i16,
    pub imm: u32,
}

impl Instruction {
    pub const SIZE: usize = 8;

    pub fn new(opcode: u8, dst: u8) -> Self {
        Self {
            opcode,
            dst,
            ..Self::default()
        }
    }

    pub fn with_src(mut self, src: u8) -> Self {
        self.src = src;
        self
    }

    pub fn with_imm(mut self, imm: u32) -> Self {
        self.imm = imm;
        self
    }

    pub fn with_off(mut self, off: i16) -> Self {
        self.off = off;
        self
    }

    /// Register byte: destination in the low nibble, source in the high one.
    pub fn regs(&self) -> u8 {
        (self.dst & 0xF) | ((self.src & 0xF) << 4)
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        out[0..4].copy_from_slice(&self.imm.to_le_bytes());
        out[4..6].copy_from_slice(&self.off.to_le_bytes());
        out[6] = self.regs();
        out[7] = self.opcode;
        out
    }

    pub fn from_bytes(raw: [u8; Self::SIZE]) -> Self {
        Self {
            imm: u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]),
            off: i16::from_le_bytes([raw[4], raw[5]]),
            dst: raw[6] & 0xF,
            src: raw[6] >> 4,
            opcode: raw[7],
        }
    }

    /// Lowercase hex of the packed record, 16 characters.
    pub fn hex(&self) -> String {
        let mut s = String::with_capacity(Self::SIZE * 2);
        for b in self.to_bytes() {
            let _ = write!(s, "{b:02x}");
        }
        s
    }
}
