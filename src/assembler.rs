//! Two-pass assembler: pass 1 collects labels, pass 2 encodes.

use tracing::{debug, trace, warn};

use crate::config::{AsmConfig, LabelPolicy};
use crate::decoder::Instruction;
use crate::error::{AsmError, ErrorKind};
use crate::instructions::{self, Form, OpBits};
use crate::operand::{self, Operand};
use crate::program::Program;

/// An instruction line that survived pass 1, with its 1-based source line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: usize,
    pub text: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Assembler {
    cfg: AsmConfig,
}

impl Assembler {
    pub fn new(cfg: AsmConfig) -> Self {
        Self { cfg }
    }

    pub fn assemble(&self, source: &str) -> Result<Program, AsmError> {
        let (lines, mut program) = self.scan(source.lines())?;
        self.encode(&lines, &mut program)?;
        Ok(program)
    }

    /// Pass 1. Strips comments and blank lines and records every label at
    /// 8 x (instruction lines seen so far). The returned program holds labels only.
    pub fn scan<'a, I>(&self, source: I) -> Result<(Vec<SourceLine>, Program), AsmError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut program = Program::new();
        let mut lines = Vec::new();

        for (idx, raw) in source.into_iter().enumerate() {
            let number = idx + 1;
            let code = match raw.find(';') {
                Some(p) => &raw[..p],
                None => raw,
            };
            let code = code.trim();
            if code.is_empty() {
                continue;
            }

            if let Some(name) = label_decl(code) {
                let offset = (lines.len() * Instruction::SIZE) as u32;
                if program.lookup(name).is_some() {
                    match self.cfg.labels {
                        LabelPolicy::Reject => {
                            return Err(AsmError::new(
                                number,
                                code,
                                ErrorKind::DuplicateLabel(name.to_string()),
                            ))
                        }
                        LabelPolicy::Overwrite => {
                            warn!(label = name, line = number, "label redefined")
                        }
                    }
                }
                debug!(label = name, offset, "label");
                program.label(name, offset);
                continue;
            }

            lines.push(SourceLine {
                number,
                text: code.to_string(),
            });
        }

        debug!(
            instructions = lines.len(),
            labels = program.labels().len(),
            "pass 1 done"
        );
        Ok((lines, program))
    }

    /// Pass 2. Appends one record per line; the first bad line aborts.
    pub fn encode(&self, lines: &[SourceLine], program: &mut Program) -> Result<(), AsmError> {
        for line in lines {
            let ins = encode_line(program, &line.text)
                .map_err(|kind| AsmError::new(line.number, line.text.as_str(), kind))?;
            trace!(line = line.number, text = %line.text, hex = %ins.hex(), "encoded");
            program.push(ins);
        }
        debug!(instructions = program.len(), "pass 2 done");
        Ok(())
    }
}

/// Assemble with the default configuration.
pub fn assemble(source: &str) -> Result<Program, AsmError> {
    Assembler::default().assemble(source)
}

fn label_decl(code: &str) -> Option<&str> {
    let name = code.strip_suffix(':')?;
    operand::is_identifier(name).then_some(name)
}

fn encode_line(program: &Program, text: &str) -> Result<Instruction, ErrorKind> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    let Some((&mnemonic, operands)) = parts.split_first() else {
        return Err(ErrorKind::IllegalInstruction("empty line".into()));
    };
    let desc = instructions::lookup(mnemonic)
        .ok_or_else(|| ErrorKind::IllegalInstruction(format!("unknown mnemonic `{mnemonic}`")))?;
    let arity = desc.form.arity();
    if operands.len() != arity {
        return Err(ErrorKind::IllegalInstruction(format!(
            "`{}` takes {arity} operand(s), found {}",
            desc.mnemonic,
            operands.len()
        )));
    }

    match desc.form {
        Form::ByteSwap { width } => {
            let dst = operand::expect_register(operands[0])?;
            Ok(Instruction::new(desc.opcode, dst).with_imm(width))
        }
        Form::Alu => {
            let dst = operand::expect_register(operands[0])?;
            let ins = Instruction::new(desc.opcode, dst);
            Ok(match operand::parse_operand(operands[1])? {
                Operand::Reg(src) => ins.with_src(src),
                Operand::Imm(v) => ins.with_imm(operand::imm32(v)?),
            })
        }
        Form::Jump => {
            let off = relative_offset(program, operands[0])?;
            Ok(Instruction::new(desc.opcode, 0).with_off(off))
        }
        Form::Branch => {
            let dst = operand::expect_register(operands[0])?;
            let off = relative_offset(program, operands[2])?;
            Ok(match operand::parse_operand(operands[1])? {
                Operand::Reg(src) => Instruction::new(desc.opcode | OpBits::SRC_REG.bits(), dst)
                    .with_src(src)
                    .with_off(off),
                Operand::Imm(v) => Instruction::new(desc.opcode, dst)
                    .with_imm(operand::imm32(v)?)
                    .with_off(off),
            })
        }
    }
}

/// Absolute byte offset of a branch target: a label, else a numeric literal.
fn resolve_target(program: &Program, token: &str) -> Result<i64, ErrorKind> {
    let t = operand::clean(token);
    if let Some(off) = program.lookup(t) {
        return Ok(i64::from(off));
    }
    match operand::parse_immediate(t) {
        Err(ErrorKind::InvalidImmediate(_)) if operand::is_identifier(t) => {
            Err(ErrorKind::UndefinedLabel(t.to_string()))
        }
        other => other,
    }
}

/// Displacement from the instruction following the one being encoded.
fn relative_offset(program: &Program, token: &str) -> Result<i16, ErrorKind> {
    let target = resolve_target(program, token)?;
    let rel = target
        .checked_sub(program.next_pc())
        .ok_or(ErrorKind::ImmediateTooLarge { value: target, bits: 16 })?;
    operand::off16(rel)
}
