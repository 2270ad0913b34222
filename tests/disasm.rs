use ebpf_asm::disasm::fmt_instruction;
use ebpf_asm::{assemble, emit, Instruction};
use pretty_assertions::assert_eq;

const SOURCE: &str = "\
entry:
    MOV r1, #10
    MOV32 r2, r1
    LE16 r4
    BE64 r5
loop:
    SUB r1, 1
    JGT r1, 0, loop
    JSET r1, r2, exit
    JA entry
exit:
    NEG r1, 0
";

#[test]
fn listing_text() {
    let program = assemble(SOURCE).unwrap();
    let text: Vec<String> = program
        .instructions()
        .iter()
        .enumerate()
        .map(|(i, ins)| fmt_instruction(ins, i).unwrap())
        .collect();
    assert_eq!(
        text,
        vec![
            "MOV r1, 16",
            "MOV32 r2, r1",
            "LE16 r4",
            "BE64 r5",
            "SUB r1, 1",
            "JGT r1, 0, 32",
            "JSET r1, r2, 64",
            "JA 0",
            "NEG r1, 0",
        ]
    );
}

#[test]
fn disassembly_reassembles_to_same_bytes() {
    let program = assemble(SOURCE).unwrap();
    let bytes = emit::to_bytes(&program);
    let records = emit::decode_records(&bytes).unwrap();
    let text: Vec<String> = records
        .iter()
        .enumerate()
        .map(|(i, ins)| fmt_instruction(ins, i).unwrap())
        .collect();
    let again = assemble(&text.join("\n")).unwrap();
    assert_eq!(emit::to_bytes(&again), bytes);
}

#[test]
fn unknown_opcode_has_no_text() {
    assert_eq!(fmt_instruction(&Instruction::new(0x95, 0), 0), None);
}

#[test]
fn records_without_source_syntax_have_no_text() {
    // both a source register and an immediate on an ALU op
    assert_eq!(fmt_instruction(&Instruction::new(0x07, 1).with_src(2).with_imm(5), 0), None);
    // branch register form carrying an immediate
    assert_eq!(fmt_instruction(&Instruction::new(0x1D, 1).with_src(2).with_imm(1), 0), None);
    // jump with a destination register
    assert_eq!(fmt_instruction(&Instruction::new(0x05, 3), 0), None);
    // byteswap with an offset
    assert_eq!(fmt_instruction(&Instruction::new(0xD4, 1).with_imm(16).with_off(8), 0), None);

    assert_eq!(
        fmt_instruction(&Instruction::new(0x07, 1).with_src(2), 0).as_deref(),
        Some("ADD r1, r2")
    );
}
