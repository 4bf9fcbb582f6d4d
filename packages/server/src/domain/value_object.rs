//! 値オブジェクト定義
//!
//! ドメイン層で使用する値オブジェクト。
//! 不正な値を型のレベルで排除するため、コンストラクタで検証を行います。

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use uuid::Uuid;

/// 接続 ID
///
/// Connection Gateway（WebSocket ハンドラ）が接続時に採番する不透明な ID。
/// 接続のライフタイム中は不変です。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientId(String);

/// ClientId の検証エラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClientIdError {
    #[error("client_id must not be empty")]
    Empty,
}

impl ClientId {
    /// 検証付きで ClientId を作成
    pub fn new(value: String) -> Result<Self, ClientIdError> {
        if value.trim().is_empty() {
            return Err(ClientIdError::Empty);
        }
        Ok(Self(value))
    }

    /// 新しい接続のための ClientId を採番（UUID v4）
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 表示名
///
/// 参加者が名乗る表示用の文字列。一意性は検証しません。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

/// UserName の検証エラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserNameError {
    #[error("Name must not be empty.")]
    Empty,
    #[error("Name must be {max} characters or less.", max = UserName::MAX_LENGTH)]
    TooLong,
}

impl UserName {
    /// 表示名の最大文字数
    pub const MAX_LENGTH: usize = 32;

    /// 検証付きで UserName を作成
    pub fn new(value: String) -> Result<Self, UserNameError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(UserNameError::Empty);
        }
        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(UserNameError::TooLong);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 参加者のロール
///
/// DM は部屋に 1 人まで。ロールは入室時に固定され、以後変化しません。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Dm,
    Player,
}

/// Role のパースエラー
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid role.")]
pub struct RoleParseError;

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Dm => "dm",
            Role::Player => "player",
        }
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dm" => Ok(Role::Dm),
            "player" => Ok(Role::Player),
            _ => Err(RoleParseError),
        }
    }
}

/// ダイスの種類
///
/// 固定カタログ。`d00` はパーセンタイルダイス（十の位のみ）です。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DieType {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
    D00,
}

/// DieType のパースエラー
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid die type.")]
pub struct DieTypeParseError;

impl DieType {
    /// 出目の最大値
    ///
    /// `d00` は `{10, 20, ..., 100}` の一様選択なので最大値は 100。
    pub fn max_value(self) -> u32 {
        match self {
            DieType::D4 => 4,
            DieType::D6 => 6,
            DieType::D8 => 8,
            DieType::D10 => 10,
            DieType::D12 => 12,
            DieType::D20 => 20,
            DieType::D00 => 100,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DieType::D4 => "d4",
            DieType::D6 => "d6",
            DieType::D8 => "d8",
            DieType::D10 => "d10",
            DieType::D12 => "d12",
            DieType::D20 => "d20",
            DieType::D00 => "d00",
        }
    }
}

impl FromStr for DieType {
    type Err = DieTypeParseError;

    /// ダイス種別は大文字小文字を区別せずにマッチする
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "d4" => Ok(DieType::D4),
            "d6" => Ok(DieType::D6),
            "d8" => Ok(DieType::D8),
            "d10" => Ok(DieType::D10),
            "d12" => Ok(DieType::D12),
            "d20" => Ok(DieType::D20),
            "d00" => Ok(DieType::D00),
            _ => Err(DieTypeParseError),
        }
    }
}

/// ロール ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollId(String);

impl RollId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// RollId の採番器
///
/// プロセス再起動をまたいだグローバル一意性は要求しないため、
/// UUID v4 ベースで衝突確率が無視できる ID を生成します。
pub struct RollIdFactory;

impl RollIdFactory {
    pub fn generate() -> RollId {
        RollId(format!("roll_{}", Uuid::new_v4().simple()))
    }
}

/// タイムスタンプ（JST ミリ秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}
