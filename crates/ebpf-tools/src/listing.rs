use anyhow::Result;
use serde::Serialize;
use std::fmt::Write as _;

use ebpf_asm::disasm::fmt_instruction;
use ebpf_asm::emit::decode_records;
use ebpf_asm::Instruction;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingLine {
    pub offset: u32,
    pub hex: String,
    /// Re-assemblable source text; `None` for unknown opcodes.
    pub text: Option<String>,
    pub record: Instruction,
}

pub fn listing(bytes: &[u8]) -> Result<Vec<ListingLine>> {
    let records = decode_records(bytes).ok_or_else(|| {
        anyhow::anyhow!(
            "object size {} is not a multiple of {} bytes",
            bytes.len(),
            Instruction::SIZE
        )
    })?;
    Ok(records
        .iter()
        .enumerate()
        .map(|(i, ins)| ListingLine {
            offset: (i * Instruction::SIZE) as u32,
            hex: ins.hex(),
            text: fmt_instruction(ins, i),
            record: *ins,
        })
        .collect())
}

pub fn render_listing(lines: &[ListingLine]) -> String {
    let mut buf = String::new();
    for l in lines {
        match &l.text {
            Some(t) => { let _ = writeln!(buf, "{:#06x}: {}  {}", l.offset, l.hex, t); }
            None => { let _ = writeln!(buf, "{:#06x}: {}  .raw {}", l.offset, l.hex, l.hex); }
        }
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use ebpf_asm::{assemble, emit};
    use pretty_assertions::assert_eq;

    #[test]
    fn listing_shows_offsets_and_text() {
        let program = assemble("top:\nMOV r1, 3\nJNE r1, r2, top\n").unwrap();
        let lines = listing(&emit::to_bytes(&program)).unwrap();
        assert_eq!(
            render_listing(&lines),
            "0x0000: 03000000000001b7  MOV r1, 3\n\
             0x0008: 00000000f0ff215d  JNE r1, r2, 0\n"
        );
        assert_eq!(lines[1].text.as_deref(), Some("JNE r1, r2, 0"));
    }

    #[test]
    fn unknown_opcode_is_raw() {
        let lines = listing(&[0, 0, 0, 0, 0, 0, 0, 0xFF]).unwrap();
        assert_eq!(lines[0].text, None);
        assert_eq!(render_listing(&lines), "0x0000: 00000000000000ff  .raw 00000000000000ff\n");
    }

    #[test]
    fn truncated_object_is_rejected() {
        assert!(listing(&[0u8; 9]).is_err());
    }
}
