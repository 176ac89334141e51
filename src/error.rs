//! エラーハンドリングシステム
//!
//! 単語入れ替え処理とホスト連携層で使用するエラー型を定義

use thiserror::Error;

/// クレート全体のエラー型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransposeError {
    /// 単語位置の特定に失敗
    #[error("Word span lookup failed: {0}")]
    Span(#[from] SpanError),

    /// 設定エラー
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// ドキュメント操作エラー
    #[error("Document operation failed: {0}")]
    Document(#[from] DocumentError),

    /// 入力処理エラー
    #[error("Input processing failed: {0}")]
    Input(#[from] InputError),

    /// 入出力エラー
    #[error("IO error: {message}")]
    Io { message: String },
}

/// 単語位置の特定に関するエラー
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanError {
    #[error("position {position} is out of range for a line of {len} characters")]
    OutOfRange { position: usize, len: usize },

    #[error("no word at or after position {position}")]
    NoWordAtCursor { position: usize },

    #[error("no word precedes the word at position {position}")]
    NoPrecedingWord { position: usize },
}

impl SpanError {
    /// 入れ替え対象の単語が2つ揃わない場合（不正な入力ではない）
    pub fn is_not_applicable(&self) -> bool {
        matches!(
            self,
            SpanError::NoWordAtCursor { .. } | SpanError::NoPrecedingWord { .. }
        )
    }
}

/// 設定固有のエラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: String },

    #[error("Invalid configuration file {path}: {message}")]
    InvalidFile { path: String, message: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// ドキュメント操作固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("line {line} is out of range")]
    InvalidLine { line: usize },

    #[error("column {column} is out of range on line {line}")]
    InvalidColumn { line: usize, column: usize },

    #[error("line text must not contain a line break")]
    LineBreakInLine,
}

/// 入力処理固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid key sequence: {sequence}")]
    InvalidKeySequence { sequence: String },

    #[error("Command not found: {command}")]
    CommandNotFound { command: String },
}

impl TransposeError {
    /// コマンド結果に表示するメッセージ
    pub fn user_message(&self) -> String {
        match self {
            TransposeError::Span(SpanError::OutOfRange { position, .. }) => {
                format!("カーソル位置が行の範囲外です: {}", position)
            }
            TransposeError::Span(SpanError::NoWordAtCursor { .. }) => {
                "カーソル位置以降に単語がありません".to_string()
            }
            TransposeError::Span(SpanError::NoPrecedingWord { .. }) => {
                "入れ替える前の単語がありません".to_string()
            }
            TransposeError::Document(DocumentError::InvalidLine { line }) => {
                format!("無効な行番号です: {}", line)
            }
            TransposeError::Input(InputError::CommandNotFound { command }) => {
                format!("コマンドが見つかりません: {}", command)
            }
            TransposeError::Input(InputError::InvalidKeySequence { sequence }) => {
                format!("無効なキー指定です: {}", sequence)
            }
            _ => format!("エラーが発生しました: {}", self),
        }
    }
}

// std::io::Error から TransposeError への変換
impl From<std::io::Error> for TransposeError {
    fn from(error: std::io::Error) -> Self {
        TransposeError::Io { message: error.to_string() }
    }
}

/// プロジェクト標準のResult型
pub type Result<T> = std::result::Result<T, TransposeError>;

/// 単語位置特定用のResult型
pub mod span {
    pub type Result<T> = std::result::Result<T, super::SpanError>;
}
