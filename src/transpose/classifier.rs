//! 単語文字の判定

/// 単語文字かどうかを判定
///
/// ASCII英数字とアンダースコアに加え、大文字と小文字の形が異なる文字
/// （アクセント付きラテン文字など）も単語文字として扱う。
pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || has_case(ch)
}

fn has_case(ch: char) -> bool {
    !ch.to_uppercase().eq(ch.to_lowercase())
}

/// 設定で拡張可能な単語文字判定器
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordClassifier {
    extra: Vec<char>,
}

impl WordClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加の単語文字を指定して作成（`"-"` で lisp 風の識別子を1語として扱う等）
    pub fn with_extra_chars(chars: &str) -> Self {
        let mut extra: Vec<char> = chars.chars().filter(|ch| !is_word_char(*ch)).collect();
        extra.sort_unstable();
        extra.dedup();
        Self { extra }
    }

    pub fn extra_chars(&self) -> &[char] {
        &self.extra
    }

    pub fn is_word_char(&self, ch: char) -> bool {
        is_word_char(ch) || self.extra.binary_search(&ch).is_ok()
    }
}
