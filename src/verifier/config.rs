use crate::observability::labels::Labels;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Strip surrounding whitespace before checking the input.
    #[serde(default = "default_trim_whitespace")]
    pub trim_whitespace: bool,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: Labels,
}

fn default_trim_whitespace() -> bool {
    true
}

impl Default for VerifierConfig {
    fn default() -> Self {
        VerifierConfig {
            trim_whitespace: default_trim_whitespace(),
            labels: Labels::empty(),
        }
    }
}

impl VerifierConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trim_whitespace(&self, trim_whitespace: bool) -> Self {
        self.mutate_clone(|x| x.trim_whitespace = trim_whitespace)
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
