pub mod assembler;
pub mod config;
pub mod decoder;
pub mod disasm;
pub mod emit;
pub mod error;
pub mod instructions;
pub mod operand;
pub mod program;

pub use assembler::{assemble, Assembler, SourceLine};
pub use config::{AsmConfig, LabelPolicy};
pub use decoder::Instruction;
pub use error::{AsmError, ErrorKind};
pub use program::Program;
