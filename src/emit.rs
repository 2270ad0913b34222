use std::io::{self, Write};

use crate::decoder::Instruction;
use crate::program::Program;

/// Concatenated 8-byte records, in program order.
pub fn to_bytes(program: &Program) -> Vec<u8> {
    let mut out = Vec::with_capacity(program.len() * Instruction::SIZE);
    for ins in program.instructions() {
        out.extend_from_slice(&ins.to_bytes());
    }
    out
}

pub fn write_binary<W: Write>(program: &Program, mut w: W) -> io::Result<()> {
    for ins in program.instructions() {
        w.write_all(&ins.to_bytes())?;
    }
    w.flush()
}

/// Lowercase hex, one record per line, no trailing newline.
pub fn to_hex(program: &Program) -> String {
    program.to_string()
}

pub fn to_json(program: &Program) -> serde_json::Result<String> {
    serde_json::to_string_pretty(program)
}

/// Split a byte stream back into records. `None` if the length is not a multiple of 8.
pub fn decode_records(bytes: &[u8]) -> Option<Vec<Instruction>> {
    if bytes.len() % Instruction::SIZE != 0 {
        return None;
    }
    let records = bytes
        .chunks_exact(Instruction::SIZE)
        .map(|c| {
            let mut raw = [0u8; Instruction::SIZE];
            raw.copy_from_slice(c);
            Instruction::from_bytes(raw)
        })
        .collect();
    Some(records)
}
