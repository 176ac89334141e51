//! 入力処理モジュール
//!
//! キーバインドとコマンド処理を提供

pub mod commands;
pub mod keybinding;

// 公開API
pub use commands::{Command, CommandRegistry, CommandResult};
pub use keybinding::{Key, KeyCode, KeyModifiers};
