use lazy_static::lazy_static;
use metrics::{counter, Counter};

lazy_static! {
    pub static ref GLOBAL_STATS: Stats = Stats::new();
}

pub struct Stats {
    pub verifier_creations: Counter,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            verifier_creations: counter!("cedula.verifier.creations"),
        }
    }
}
