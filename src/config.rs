use serde::{Deserialize, Serialize};

/// How pass 1 treats a label name that was already declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LabelPolicy {
    #[default]
    Reject,
    /// Last declaration wins.
    Overwrite,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsmConfig {
    pub labels: LabelPolicy,
}

impl AsmConfig {
    pub fn overwrite_labels() -> Self {
        Self {
            labels: LabelPolicy::Overwrite,
        }
    }
}
