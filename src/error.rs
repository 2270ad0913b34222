/// What went wrong with a single line of source.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("illegal instruction: {0}")]
    IllegalInstruction(String),
    #[error("invalid register `{0}` (expected r0..r15)")]
    InvalidRegister(String),
    #[error("invalid immediate `{0}`")]
    InvalidImmediate(String),
    #[error("immediate {value} does not fit in {bits} bits")]
    ImmediateTooLarge { value: i64, bits: u32 },
    #[error("undefined label `{0}`")]
    UndefinedLabel(String),
    #[error("label `{0}` is already defined")]
    DuplicateLabel(String),
}

/// An assembly failure, pinned to the source line that caused it.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {kind}: `{text}`")]
pub struct AsmError {
    pub line: usize,
    pub text: String,
    #[source]
    pub kind: ErrorKind,
}

impl AsmError {
    pub fn new(line: usize, text: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            line,
            text: text.into(),
            kind,
        }
    }
}
