//! 乱数による DieRoller 実装

use rand::Rng;

use crate::domain::{DieRoller, DieType};

/// `rand::thread_rng` による DieRoller 実装
///
/// `dN` は `[1, N]` の一様整数。`d00` はパーセンタイルダイスで、
/// `{10, 20, ..., 100}` の 10 値からの一様選択です。
#[derive(Debug, Clone, Copy, Default)]
pub struct RandDieRoller;

impl RandDieRoller {
    pub fn new() -> Self {
        Self
    }
}

impl DieRoller for RandDieRoller {
    fn roll(&self, die_type: DieType) -> u32 {
        let mut rng = rand::thread_rng();
        match die_type {
            DieType::D00 => rng.gen_range(1..=10) * 10,
            other => rng.gen_range(1..=other.max_value()),
        }
    }
}
