//! DieRoller trait 定義
//!
//! 出目の生成を抽象化します。本番実装は乱数（Infrastructure 層の
//! `RandDieRoller`）ですが、テストでは固定の出目を注入できます。

use super::value_object::DieType;

/// ダイスの出目を生成する trait
///
/// 実装は `die_type` の分布に従う値を返さなければならない：
/// `dN` は `[1, N]` の一様整数、`d00` は `{10, 20, ..., 100}` の一様選択。
#[cfg_attr(test, mockall::automock)]
pub trait DieRoller: Send + Sync {
    fn roll(&self, die_type: DieType) -> u32;
}
