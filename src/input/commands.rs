//! コマンドシステム
//!
//! 単語入れ替えコマンドの定義、登録、ドキュメントへの適用

use crate::config::Config;
use crate::document::{CursorPosition, LineDocument};
use crate::error::{InputError, Result, TransposeError};
use crate::input::keybinding::Key;
use crate::transpose::Transposer;
use std::collections::HashMap;

/// コマンド実行の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// 実行が成功したか
    pub success: bool,
    /// ドキュメントが変更されたか
    pub modified: bool,
    /// 結果メッセージ
    pub message: Option<String>,
}

impl CommandResult {
    /// 変更ありの成功結果
    pub fn modified() -> Self {
        Self {
            success: true,
            modified: true,
            message: None,
        }
    }

    /// 変更なしの成功結果
    pub fn unchanged(message: Option<String>) -> Self {
        Self {
            success: true,
            modified: false,
            message,
        }
    }

    /// エラー結果
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            modified: false,
            message: Some(message),
        }
    }
}

/// コマンドの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    TransposeWords,
}

impl Command {
    /// コマンドID
    pub fn id(&self) -> &'static str {
        match self {
            Command::TransposeWords => "edit.transpose-words",
        }
    }

    /// メニュー表示名
    pub fn label(&self) -> &'static str {
        match self {
            Command::TransposeWords => "Transpose Words",
        }
    }

    /// 既定のキーバインド
    pub fn default_key(&self) -> Key {
        match self {
            Command::TransposeWords => Key::alt_t(),
        }
    }

    pub fn all() -> &'static [Command] {
        &[Command::TransposeWords]
    }

    /// ドキュメントに対してコマンドを実行
    pub fn execute<D: LineDocument>(&self, transposer: &Transposer, document: &mut D) -> CommandResult {
        let outcome = match self {
            Command::TransposeWords => transpose_at_cursor(transposer, document),
        };

        match outcome {
            Ok(result) => result,
            Err(TransposeError::Span(error)) if error.is_not_applicable() => {
                CommandResult::unchanged(Some(TransposeError::from(error).user_message()))
            }
            Err(error) => {
                log::warn!("{} failed: {}", self.id(), error);
                CommandResult::error(error.user_message())
            }
        }
    }
}

/// カーソル行の単語を入れ替え、カーソルを移動した単語の直後へ移す
fn transpose_at_cursor<D: LineDocument>(transposer: &Transposer, document: &mut D) -> Result<CommandResult> {
    let cursor = document.cursor();
    let line = match document.line(cursor.line) {
        Some(line) if !line.is_empty() => line.to_string(),
        _ => return Ok(CommandResult::unchanged(None)),
    };

    let transposition = transposer.try_transpose(&line, cursor.column)?;
    if transposition.text == line {
        // 同じ単語同士の入れ替え
        return Ok(CommandResult::unchanged(None));
    }

    document.batch_operation(|doc| {
        doc.replace_line(cursor.line, &transposition.text)?;
        doc.set_cursor(CursorPosition::at(cursor.line, transposition.cursor))
    })?;

    Ok(CommandResult::modified())
}

/// コマンドとキーバインドの登録表
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, Command>,
    bindings: HashMap<Key, Command>,
}

impl CommandRegistry {
    /// 空の登録表
    pub fn new() -> Self {
        Self::default()
    }

    /// 全コマンドを既定のキーで登録
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for command in Command::all() {
            registry.register(*command, command.default_key());
        }
        registry
    }

    /// 設定のキーバインドで登録
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut registry = Self::new();
        registry.register(Command::TransposeWords, config.key()?);
        Ok(registry)
    }

    /// コマンドを登録する。同じキーの既存バインドは置き換える。
    pub fn register(&mut self, command: Command, key: Key) {
        log::debug!("register {} ({}) on {}", command.id(), command.label(), key);
        self.bindings.retain(|_, bound| *bound != command);
        self.commands.insert(command.id(), command);
        self.bindings.insert(key, command);
    }

    pub fn lookup_key(&self, key: &Key) -> Option<Command> {
        self.bindings.get(key).copied()
    }

    pub fn lookup_id(&self, id: &str) -> Result<Command> {
        self.commands.get(id).copied().ok_or_else(|| {
            InputError::CommandNotFound { command: id.to_string() }.into()
        })
    }

    /// コマンドに割り当てられたキー
    pub fn key_for(&self, command: Command) -> Option<&Key> {
        self.bindings
            .iter()
            .find(|(_, bound)| **bound == command)
            .map(|(key, _)| key)
    }

    /// キー入力を処理する。未割り当てのキーは `None`。
    pub fn dispatch<D: LineDocument>(
        &self,
        key: &Key,
        transposer: &Transposer,
        document: &mut D,
    ) -> Option<CommandResult> {
        self.lookup_key(key)
            .map(|command| command.execute(transposer, document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TextDocument;

    fn document(text: &str, line: usize, column: usize) -> TextDocument {
        TextDocument::with_cursor(text, CursorPosition::at(line, column)).unwrap()
    }

    #[test]
    fn transposes_cursor_line_and_moves_cursor() {
        let mut doc = document("header\nalpha beta gamma", 1, 8);
        let result = Command::TransposeWords.execute(&Transposer::new(), &mut doc);

        assert_eq!(result, CommandResult::modified());
        assert_eq!(doc.text(), "header\nbeta alpha gamma");
        assert_eq!(doc.cursor(), CursorPosition::at(1, 10));
    }

    #[test]
    fn empty_line_is_left_alone() {
        let mut doc = document("one two\n", 1, 0);
        let result = Command::TransposeWords.execute(&Transposer::new(), &mut doc);

        assert!(result.success);
        assert!(!result.modified);
        assert_eq!(result.message, None);
        assert_eq!(doc.text(), "one two\n");
    }

    #[test]
    fn missing_preceding_word_reports_message() {
        let mut doc = document("single", 0, 3);
        let result = Command::TransposeWords.execute(&Transposer::new(), &mut doc);

        assert!(result.success);
        assert!(!result.modified);
        assert!(result.message.is_some());
        assert_eq!(doc.cursor(), CursorPosition::at(0, 3));
    }

    #[test]
    fn identical_words_do_not_modify() {
        let mut doc = document("na na", 0, 4);
        let result = Command::TransposeWords.execute(&Transposer::new(), &mut doc);
        assert_eq!(result, CommandResult::unchanged(None));
    }

    #[test]
    fn registry_defaults_bind_alt_t() {
        let registry = CommandRegistry::with_defaults();
        assert_eq!(registry.lookup_key(&Key::alt_t()), Some(Command::TransposeWords));
        assert_eq!(registry.lookup_id("edit.transpose-words").unwrap(), Command::TransposeWords);
        assert_eq!(registry.key_for(Command::TransposeWords), Some(&Key::alt_t()));
        assert!(registry.lookup_id("edit.unknown").is_err());
    }

    #[test]
    fn rebinding_replaces_previous_key() {
        let mut registry = CommandRegistry::with_defaults();
        registry.register(Command::TransposeWords, Key::ctrl('t'));

        assert_eq!(registry.lookup_key(&Key::alt_t()), None);
        assert_eq!(registry.lookup_key(&Key::ctrl('t')), Some(Command::TransposeWords));
    }

    #[test]
    fn dispatch_ignores_unbound_keys() {
        let registry = CommandRegistry::with_defaults();
        let mut doc = document("foo bar", 0, 5);
        assert!(registry.dispatch(&Key::plain('t'), &Transposer::new(), &mut doc).is_none());

        let result = registry.dispatch(&Key::alt_t(), &Transposer::new(), &mut doc).unwrap();
        assert!(result.modified);
        assert_eq!(doc.text(), "bar foo");
        assert_eq!(doc.cursor(), CursorPosition::at(0, 7));
    }
}
