//! 単語入れ替えモジュール
//!
//! カーソル直前の単語とカーソル位置（以降）の単語を入れ替える。
//!
//! ```text
//! alpha beta gamma      ->  beta alpha gamma
//!         ^ cursor                    ^ new cursor
//! ```
//!
//! 入れ替えできない入力（空行、行末のカーソル、単語が2つ揃わない等）では
//! 行をそのまま返す。理由が必要な場合は [`Transposer::try_transpose`] を使う。

pub mod classifier;
pub mod locator;

pub use classifier::{is_word_char, WordClassifier};
pub use locator::{WordPair, WordSpan};

use crate::config::Config;
use crate::error::span::Result;
use crate::error::SpanError;
use locator::{LineSnapshot, Scanner};

/// 入れ替え結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transposition {
    /// 入れ替え後の行
    pub text: String,
    /// 新しいカーソル位置（文字単位）
    pub cursor: usize,
    /// 入れ替えた単語の組（入れ替え前の位置）
    pub pair: WordPair,
}

/// 単語入れ替え器
///
/// 状態を持たないため、複数スレッドから共有して呼び出せる。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transposer {
    classifier: WordClassifier,
}

impl Transposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classifier(classifier: WordClassifier) -> Self {
        Self { classifier }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_classifier(WordClassifier::with_extra_chars(&config.extra_word_chars))
    }

    pub fn classifier(&self) -> &WordClassifier {
        &self.classifier
    }

    /// カーソル位置の前後にある2つの単語の範囲を求める
    pub fn word_positions(&self, line: &str, position: usize) -> Result<WordPair> {
        let snapshot = LineSnapshot::new(line);
        Scanner::new(&snapshot, &self.classifier).word_pair(position)
    }

    /// 単語を入れ替え、失敗時はその理由を返す
    ///
    /// カーソルが行末にある場合（カーソル位置に文字がない場合）は
    /// `NoWordAtCursor` となる。
    pub fn try_transpose(&self, line: &str, position: usize) -> Result<Transposition> {
        let snapshot = LineSnapshot::new(line);
        let len = snapshot.len();
        if position > len {
            return Err(SpanError::OutOfRange { position, len });
        }
        if position == len {
            return Err(SpanError::NoWordAtCursor { position });
        }

        let pair = Scanner::new(&snapshot, &self.classifier).word_pair(position)?;

        let mut text = String::with_capacity(line.len());
        text.extend(snapshot.slice(0..pair.a.start));
        text.push_str(&pair.b.text);
        text.extend(snapshot.slice(pair.separator_range()));
        text.push_str(&pair.a.text);
        text.extend(snapshot.slice(pair.b.end..len));

        let cursor = self.cursor_after(&text, position);
        log::debug!(
            "transposed {:?} and {:?} at {} (cursor -> {})",
            pair.a.text,
            pair.b.text,
            position,
            cursor
        );

        Ok(Transposition { text, cursor, pair })
    }

    /// 単語を入れ替える。入れ替えできない場合は行をそのまま返す。
    pub fn transpose(&self, line: &str, position: usize) -> String {
        match self.try_transpose(line, position) {
            Ok(transposition) => transposition.text,
            Err(error) => {
                log::debug!("transpose skipped: {}", error);
                line.to_string()
            }
        }
    }

    /// 入れ替え後のカーソル位置
    ///
    /// 元のカーソル位置から単語文字が続く限り前進した位置を返す。
    pub fn cursor_after(&self, transposed: &str, position: usize) -> usize {
        let snapshot = LineSnapshot::new(transposed);
        let start = position.min(snapshot.len());
        Scanner::new(&snapshot, &self.classifier).word_end(start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swaps_words_around_cursor() {
        let transposer = Transposer::new();
        assert_eq!(transposer.transpose("alpha beta gamma", 8), "beta alpha gamma");
        assert_eq!(transposer.transpose("one   two three", 6), "two   one three");
    }

    #[test]
    fn returns_cursor_after_relocated_word() {
        let result = Transposer::new().try_transpose("alpha beta gamma", 8).unwrap();
        assert_eq!(result.text, "beta alpha gamma");
        assert_eq!(result.cursor, 10);
        assert_eq!(result.pair.b.end, 10);
    }

    #[test]
    fn keeps_punctuation_between_words() {
        let transposer = Transposer::new();
        assert_eq!(transposer.transpose("foo, bar.", 6), "bar, foo.");
        assert_eq!(transposer.transpose("a->b", 3), "b->a");
    }

    #[test]
    fn no_op_conditions_return_input() {
        let transposer = Transposer::new();
        assert_eq!(transposer.transpose("", 0), "");
        assert_eq!(transposer.transpose("", 5), "");
        assert_eq!(transposer.transpose("x", 0), "x");
        assert_eq!(transposer.transpose("foo bar", 0), "foo bar");
        assert_eq!(transposer.transpose("foo bar", 7), "foo bar");
        assert_eq!(transposer.transpose("foo bar", 42), "foo bar");
    }

    #[test]
    fn try_transpose_reports_reason() {
        let transposer = Transposer::new();
        assert_eq!(
            transposer.try_transpose("foo bar", 7),
            Err(SpanError::NoWordAtCursor { position: 7 })
        );
        assert_eq!(
            transposer.try_transpose("foo bar", 1),
            Err(SpanError::NoPrecedingWord { position: 1 })
        );
        assert_eq!(
            transposer.try_transpose("foo", 9),
            Err(SpanError::OutOfRange { position: 9, len: 3 })
        );
    }

    #[test]
    fn extra_word_chars_from_config() {
        let config = Config {
            extra_word_chars: "-".to_string(),
            ..Config::default()
        };
        let transposer = Transposer::from_config(&config);
        assert_eq!(
            transposer.transpose("(let-values x-y)", 12),
            "(x-y let-values)"
        );
        assert_eq!(Transposer::new().transpose("(let-values x-y)", 12), "(let-x values-y)");
    }

    #[test]
    fn cursor_after_stops_at_line_end() {
        let transposer = Transposer::new();
        assert_eq!(transposer.cursor_after("bar foo", 5), 7);
        assert_eq!(transposer.cursor_after("bar foo", 3), 3);
        assert_eq!(transposer.cursor_after("bar", 10), 3);
    }
}
