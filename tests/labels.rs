use ebpf_asm::{assemble, AsmConfig, Assembler, ErrorKind};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

#[test]
fn offsets_are_eight_times_preceding_instructions() {
    let src = "\
start:
    MOV r1, 0      ; 0
    ADD r1, 1      ; 8
middle:
another:
    JLT r1, 10, middle
    ; comment only

    LE64 r1
finish:
";
    let program = assemble(src).unwrap();
    let expected: BTreeMap<String, u32> = [
        ("start".to_string(), 0),
        ("middle".to_string(), 16),
        ("another".to_string(), 16),
        ("finish".to_string(), 32),
    ]
    .into_iter()
    .collect();
    assert_eq!(program.labels(), &expected);
    assert!(program.labels().values().all(|off| off % 8 == 0));
    assert_eq!(program.len(), 4);
}

#[test]
fn passes_can_run_separately() {
    let asm = Assembler::default();
    let (lines, mut program) = asm.scan(["JA done", "done:", "MOV r0, 1"]).unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(program.lookup("done"), Some(8));
    assert!(program.is_empty());

    asm.encode(&lines, &mut program).unwrap();
    assert_eq!(program.instructions()[0].off, 0);
}

#[test]
fn redefinition_is_rejected_unless_configured() {
    let src = "x:\nMOV r0, 0\nx:\nMOV r0, 1\nJA x\n";
    let err = assemble(src).unwrap_err();
    assert_eq!(err.kind, ErrorKind::DuplicateLabel("x".into()));
    assert_eq!(err.line, 3);

    let program = Assembler::new(AsmConfig::overwrite_labels())
        .assemble(src)
        .unwrap();
    assert_eq!(program.lookup("x"), Some(8));
    assert_eq!(program.instructions()[2].off, 8 - 24);
}

#[test]
fn label_syntax() {
    // a colon line that is not an identifier goes to pass 2 and fails there
    let err = assemble("1abc:\n").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::IllegalInstruction(_)));
    let program = assemble("_tail9:   \nMOV r0, 0").unwrap();
    assert_eq!(program.lookup("_tail9"), Some(0));
}
