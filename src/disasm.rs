use crate::decoder::Instruction;
use crate::instructions::{by_opcode, Form, OpBits};

/// Render the record at position `index` as source text that assembles back to
/// the same bytes. Jump targets come out as absolute byte offsets.
/// `None` for opcodes outside the instruction table, and for records that set
/// fields their form has no source syntax for.
pub fn fmt_instruction(ins: &Instruction, index: usize) -> Option<String> {
    let desc = by_opcode(ins.opcode, ins.imm)?;
    if !expressible(desc.form, ins) {
        return None;
    }
    let mn = desc.mnemonic;
    let s = match desc.form {
        Form::ByteSwap { .. } => format!("{} r{}", mn, ins.dst),
        // src == 0 is indistinguishable from an immediate in this encoding
        Form::Alu => {
            if ins.src != 0 { format!("{} r{}, r{}", mn, ins.dst, ins.src) }
            else { format!("{} r{}, {}", mn, ins.dst, ins.imm) }
        }
        Form::Jump => format!("{} {}", mn, target(ins, index)),
        Form::Branch => {
            if OpBits::from_bits_truncate(ins.opcode).contains(OpBits::SRC_REG) {
                format!("{} r{}, r{}, {}", mn, ins.dst, ins.src, target(ins, index))
            } else {
                format!("{} r{}, {}, {}", mn, ins.dst, ins.imm, target(ins, index))
            }
        }
    };
    Some(s)
}

fn expressible(form: Form, ins: &Instruction) -> bool {
    match form {
        Form::ByteSwap { .. } => ins.src == 0 && ins.off == 0,
        Form::Alu => ins.off == 0 && (ins.src == 0 || ins.imm == 0),
        Form::Jump => ins.dst == 0 && ins.src == 0 && ins.imm == 0,
        Form::Branch => {
            if OpBits::from_bits_truncate(ins.opcode).contains(OpBits::SRC_REG) { ins.imm == 0 }
            else { ins.src == 0 }
        }
    }
}

fn target(ins: &Instruction, index: usize) -> i64 {
    i64::from(ins.off) + (index as i64 + 1) * Instruction::SIZE as i64
}
