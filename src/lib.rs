//! transpose-words - Emacs風の単語入れ替え
//!
//! カーソル直前の単語とカーソル位置の単語を入れ替えるコアと、
//! エディタへ組み込むためのコマンド層

// コアモジュール
pub mod error;
pub mod logging;
pub mod config;

// 単語入れ替え
pub mod transpose;

// ホスト連携層
pub mod document;
pub mod input;

// 公開API
pub use config::Config;
pub use error::{Result, SpanError, TransposeError};
pub use transpose::{is_word_char, Transposer, Transposition, WordClassifier, WordPair, WordSpan};

/// カーソル位置の前後にある2つの単語の範囲を求める
pub fn word_positions(line: &str, position: usize) -> error::span::Result<WordPair> {
    Transposer::new().word_positions(line, position)
}

/// 単語を入れ替える。入れ替えできない場合は行をそのまま返す。
pub fn transpose_words(line: &str, position: usize) -> String {
    Transposer::new().transpose(line, position)
}
