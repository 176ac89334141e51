//! キーバインドシステム
//!
//! キーの内部表現、"Alt-T" 形式のキー指定の解析、crossterm イベントの変換

use crate::error::{InputError, Result};
use crossterm::event::{KeyCode as CrosstermKeyCode, KeyEvent, KeyModifiers as CrosstermModifiers};
use std::fmt;

/// キー入力の内部表現
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    /// 修飾キー
    pub modifiers: KeyModifiers,
    /// 基本キー
    pub code: KeyCode,
}

/// 修飾キーの組み合わせ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

/// 基本キーコード
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// 文字キー（英字は小文字に正規化）
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    Up,
    Down,
    Left,
    Right,
    F(u8),
    Esc,
    Unknown,
}

impl Key {
    /// 修飾なしの文字キー
    pub fn plain(ch: char) -> Self {
        Self {
            modifiers: KeyModifiers::default(),
            code: KeyCode::Char(ch.to_ascii_lowercase()),
        }
    }

    pub fn ctrl(ch: char) -> Self {
        Self {
            modifiers: KeyModifiers { ctrl: true, ..KeyModifiers::default() },
            code: KeyCode::Char(ch.to_ascii_lowercase()),
        }
    }

    pub fn alt(ch: char) -> Self {
        Self {
            modifiers: KeyModifiers { alt: true, ..KeyModifiers::default() },
            code: KeyCode::Char(ch.to_ascii_lowercase()),
        }
    }

    /// 単語入れ替えの既定キー
    pub fn alt_t() -> Self {
        Self::alt('t')
    }

    /// "Alt-T" / "M-t" / "Ctrl-Shift-F5" 形式のキー指定を解析
    ///
    /// 修飾キーは `Ctrl` (`C`, `Control`)、`Alt` (`M`, `Meta`)、`Shift` (`S`)。
    /// 大文字小文字は区別しない。
    pub fn parse(binding: &str) -> Result<Self> {
        let invalid = || InputError::InvalidKeySequence { sequence: binding.to_string() };

        let trimmed = binding.trim();
        let (prefix, name) = if trimmed == "-" {
            ("", "-")
        } else if let Some(prefix) = trimmed.strip_suffix("--") {
            (prefix, "-")
        } else {
            trimmed.rsplit_once('-').unwrap_or(("", trimmed))
        };

        let mut modifiers = KeyModifiers::default();
        if !prefix.is_empty() {
            for part in prefix.split('-') {
                match part.to_ascii_lowercase().as_str() {
                    "c" | "ctrl" | "control" => modifiers.ctrl = true,
                    "m" | "alt" | "meta" => modifiers.alt = true,
                    "s" | "shift" => modifiers.shift = true,
                    _ => return Err(invalid().into()),
                }
            }
        }

        let code = parse_key_name(name).ok_or_else(invalid)?;
        Ok(Self { modifiers, code })
    }
}

fn parse_key_name(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(ch.to_ascii_lowercase()));
    }

    let lower = name.to_ascii_lowercase();
    let code = match lower.as_str() {
        "enter" | "return" | "ret" => KeyCode::Enter,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "tab" => KeyCode::Tab,
        "space" | "spc" => KeyCode::Char(' '),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "esc" | "escape" => KeyCode::Esc,
        _ => {
            let number: u8 = lower.strip_prefix('f')?.parse().ok()?;
            if !(1..=12).contains(&number) {
                return None;
            }
            KeyCode::F(number)
        }
    };
    Some(code)
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.ctrl {
            write!(f, "Ctrl-")?;
        }
        if self.modifiers.alt {
            write!(f, "Alt-")?;
        }
        if self.modifiers.shift {
            write!(f, "Shift-")?;
        }
        match &self.code {
            KeyCode::Char(' ') => write!(f, "Space"),
            KeyCode::Char(ch) => write!(f, "{}", ch.to_ascii_uppercase()),
            KeyCode::Enter => write!(f, "Enter"),
            KeyCode::Backspace => write!(f, "Backspace"),
            KeyCode::Delete => write!(f, "Delete"),
            KeyCode::Tab => write!(f, "Tab"),
            KeyCode::Up => write!(f, "Up"),
            KeyCode::Down => write!(f, "Down"),
            KeyCode::Left => write!(f, "Left"),
            KeyCode::Right => write!(f, "Right"),
            KeyCode::F(n) => write!(f, "F{}", n),
            KeyCode::Esc => write!(f, "Esc"),
            KeyCode::Unknown => write!(f, "Unknown"),
        }
    }
}

/// crossterm統合
impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        let modifiers = KeyModifiers {
            ctrl: event.modifiers.contains(CrosstermModifiers::CONTROL),
            alt: event.modifiers.contains(CrosstermModifiers::ALT),
            shift: event.modifiers.contains(CrosstermModifiers::SHIFT),
        };

        let code = match event.code {
            CrosstermKeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            CrosstermKeyCode::Enter => KeyCode::Enter,
            CrosstermKeyCode::Backspace => KeyCode::Backspace,
            CrosstermKeyCode::Delete => KeyCode::Delete,
            CrosstermKeyCode::Tab => KeyCode::Tab,
            CrosstermKeyCode::Up => KeyCode::Up,
            CrosstermKeyCode::Down => KeyCode::Down,
            CrosstermKeyCode::Left => KeyCode::Left,
            CrosstermKeyCode::Right => KeyCode::Right,
            CrosstermKeyCode::F(n) => KeyCode::F(n),
            CrosstermKeyCode::Esc => KeyCode::Esc,
            _ => KeyCode::Unknown,
        };

        Key { modifiers, code }
    }
}
