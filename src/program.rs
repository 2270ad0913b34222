use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::decoder::Instruction;

/// Encoded instructions plus the label table they were resolved against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    instructions: Vec<Instruction>,
    labels: BTreeMap<String, u32>, // name -> byte offset
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ins: Instruction) {
        self.instructions.push(ins);
    }

    /// Record a label; returns the offset it previously had, if any.
    pub fn label(&mut self, name: &str, offset: u32) -> Option<u32> {
        self.labels.insert(name.to_string(), offset)
    }

    pub fn lookup(&self, name: &str) -> Option<u32> {
        self.labels.get(name).copied()
    }

    /// Byte address of the instruction after the next one to be pushed.
    /// Relative branch displacements are measured from here.
    pub fn next_pc(&self) -> i64 {
        (self.instructions.len() as i64 + 1) * Instruction::SIZE as i64
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn labels(&self) -> &BTreeMap<String, u32> {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

/// Hex rendering, one record per line.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ins) in self.instructions.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(&ins.hex())?;
        }
        Ok(())
    }
}
