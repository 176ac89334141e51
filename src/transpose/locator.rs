//! 単語位置の特定
//!
//! カーソル位置の前後にある2つの単語の範囲を求める。
//! 位置はすべて文字単位（0ベース）で、範囲は終端を含まない。

use super::classifier::WordClassifier;
use crate::error::span::Result;
use crate::error::SpanError;
use std::ops::Range;

/// 1つの単語の範囲
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSpan {
    pub text: String,
    /// 開始位置（含む）
    pub start: usize,
    /// 終了位置（含まない）
    pub end: usize,
}

impl WordSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// 入れ替え対象の単語の組。`a` は `b` より前にある。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPair {
    pub a: WordSpan,
    pub b: WordSpan,
}

impl WordPair {
    /// 2語の間にある区切り文字列の範囲
    pub fn separator_range(&self) -> Range<usize> {
        self.a.end..self.b.start
    }
}

/// 文字単位でアクセスするための行のスナップショット
#[derive(Debug, Clone)]
pub(crate) struct LineSnapshot {
    chars: Vec<char>,
}

impl LineSnapshot {
    pub(crate) fn new(line: &str) -> Self {
        Self { chars: line.chars().collect() }
    }

    pub(crate) fn len(&self) -> usize {
        self.chars.len()
    }

    pub(crate) fn char_at(&self, idx: usize) -> Option<char> {
        self.chars.get(idx).copied()
    }

    pub(crate) fn slice(&self, range: Range<usize>) -> &[char] {
        &self.chars[range]
    }

    pub(crate) fn text(&self, range: Range<usize>) -> String {
        self.slice(range).iter().collect()
    }
}

/// 単語境界の走査
pub(crate) struct Scanner<'a> {
    line: &'a LineSnapshot,
    classifier: &'a WordClassifier,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(line: &'a LineSnapshot, classifier: &'a WordClassifier) -> Self {
        Self { line, classifier }
    }

    /// 範囲外は単語文字ではない
    fn is_word(&self, idx: usize) -> bool {
        self.line
            .char_at(idx)
            .map_or(false, |ch| self.classifier.is_word_char(ch))
    }

    /// `idx` の直前から単語文字が続く限り後退した位置
    fn word_start(&self, mut idx: usize) -> usize {
        while idx > 0 && self.is_word(idx - 1) {
            idx -= 1;
        }
        idx
    }

    /// `idx` から単語文字が続く限り前進した位置
    pub(crate) fn word_end(&self, mut idx: usize) -> usize {
        while idx < self.line.len() && self.is_word(idx) {
            idx += 1;
        }
        idx
    }

    /// `idx` の直前から非単語文字が続く限り後退した位置
    fn skip_separator_backward(&self, mut idx: usize) -> usize {
        while idx > 0 && !self.is_word(idx - 1) {
            idx -= 1;
        }
        idx
    }

    /// カーソル位置にある（またはその後にある）単語内の位置
    fn anchor(&self, position: usize) -> Option<usize> {
        if !self.is_word(position) && position > 0 && self.is_word(position - 1) {
            // 単語の直後にカーソルがある
            return Some(position - 1);
        }
        (position..self.line.len()).find(|&idx| self.is_word(idx))
    }

    pub(crate) fn word_pair(&self, position: usize) -> Result<WordPair> {
        let len = self.line.len();
        if position > len {
            return Err(SpanError::OutOfRange { position, len });
        }

        let anchor = self
            .anchor(position)
            .ok_or(SpanError::NoWordAtCursor { position })?;

        let b_start = self.word_start(anchor);
        let b_end = self.word_end(b_start);

        let a_end = self.skip_separator_backward(b_start);
        if a_end == 0 {
            return Err(SpanError::NoPrecedingWord { position });
        }
        let a_start = self.word_start(a_end);

        log::trace!(
            "word spans at {}: a={}..{}, b={}..{}",
            position,
            a_start,
            a_end,
            b_start,
            b_end
        );

        Ok(WordPair {
            a: WordSpan {
                text: self.line.text(a_start..a_end),
                start: a_start,
                end: a_end,
            },
            b: WordSpan {
                text: self.line.text(b_start..b_end),
                start: b_start,
                end: b_end,
            },
        })
    }
}
