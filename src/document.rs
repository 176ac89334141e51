//! ドキュメント連携
//!
//! 単語入れ替えコマンドが操作するホスト側ドキュメントの契約と、
//! そのメモリ上の実装。

use crate::error::{DocumentError, Result};

/// カーソル位置（行・列ともに0ベース、列は文字単位）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

impl CursorPosition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// 行単位で編集できるドキュメント
pub trait LineDocument {
    /// 行数
    fn line_count(&self) -> usize;

    /// 指定行のテキスト（改行を含まない）
    fn line(&self, index: usize) -> Option<&str>;

    /// 現在のカーソル位置
    fn cursor(&self) -> CursorPosition;

    /// カーソルを移動
    fn set_cursor(&mut self, cursor: CursorPosition) -> Result<()>;

    /// 指定行を置き換える
    fn replace_line(&mut self, index: usize, text: &str) -> Result<()>;

    /// 一括操作。失敗した場合はすべての変更を取り消す。
    fn batch_operation<F, T>(&mut self, operation: F) -> Result<T>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> Result<T>;
}

/// メモリ上のテキストドキュメント
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    lines: Vec<String>,
    cursor: CursorPosition,
}

impl TextDocument {
    /// テキストから作成（カーソルは先頭）
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
            cursor: CursorPosition::new(),
        }
    }

    /// カーソル位置を指定して作成
    pub fn with_cursor(text: &str, cursor: CursorPosition) -> Result<Self> {
        let mut document = Self::new(text);
        document.set_cursor(cursor)?;
        Ok(document)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// 全体のテキスト
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    fn line_len(&self, index: usize) -> Option<usize> {
        self.lines.get(index).map(|line| line.chars().count())
    }
}

impl Default for TextDocument {
    fn default() -> Self {
        Self::new("")
    }
}

impl LineDocument for TextDocument {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    fn set_cursor(&mut self, cursor: CursorPosition) -> Result<()> {
        let len = self
            .line_len(cursor.line)
            .ok_or(DocumentError::InvalidLine { line: cursor.line })?;
        if cursor.column > len {
            return Err(DocumentError::InvalidColumn {
                line: cursor.line,
                column: cursor.column,
            }
            .into());
        }
        self.cursor = cursor;
        Ok(())
    }

    fn replace_line(&mut self, index: usize, text: &str) -> Result<()> {
        if text.contains('\n') {
            return Err(DocumentError::LineBreakInLine.into());
        }
        let line = self
            .lines
            .get_mut(index)
            .ok_or(DocumentError::InvalidLine { line: index })?;
        *line = text.to_string();
        Ok(())
    }

    fn batch_operation<F, T>(&mut self, operation: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        let lines = self.lines.clone();
        let cursor = self.cursor;

        let result = operation(self);
        if let Err(error) = &result {
            log::warn!("batch operation rolled back: {}", error);
            self.lines = lines;
            self.cursor = cursor;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransposeError;

    #[test]
    fn splits_lines() {
        let document = TextDocument::new("first\nsecond\n");
        assert_eq!(document.line_count(), 3);
        assert_eq!(document.line(1), Some("second"));
        assert_eq!(document.line(2), Some(""));
        assert_eq!(document.text(), "first\nsecond\n");
    }

    #[test]
    fn cursor_must_stay_inside_the_document() {
        let mut document = TextDocument::new("héllo\nab");
        assert!(document.set_cursor(CursorPosition::at(0, 5)).is_ok());
        assert_eq!(
            document.set_cursor(CursorPosition::at(1, 3)),
            Err(TransposeError::Document(DocumentError::InvalidColumn { line: 1, column: 3 }))
        );
        assert_eq!(
            document.set_cursor(CursorPosition::at(2, 0)),
            Err(TransposeError::Document(DocumentError::InvalidLine { line: 2 }))
        );
        assert_eq!(document.cursor(), CursorPosition::at(0, 5));
    }

    #[test]
    fn replace_line_rejects_line_breaks() {
        let mut document = TextDocument::new("one");
        assert!(document.replace_line(0, "a\nb").is_err());
        document.replace_line(0, "two").unwrap();
        assert_eq!(document.text(), "two");
    }

    #[test]
    fn batch_operation_rolls_back_on_failure() {
        let mut document = TextDocument::new("keep\nthis");
        let result: Result<()> = document.batch_operation(|doc| {
            doc.replace_line(0, "changed")?;
            doc.set_cursor(CursorPosition::at(1, 2))?;
            doc.replace_line(5, "missing")
        });

        assert!(result.is_err());
        assert_eq!(document.text(), "keep\nthis");
        assert_eq!(document.cursor(), CursorPosition::new());
    }

    #[test]
    fn batch_operation_commits_on_success() {
        let mut document = TextDocument::new("keep\nthis");
        document
            .batch_operation(|doc| {
                doc.replace_line(1, "that")?;
                doc.set_cursor(CursorPosition::at(1, 4))
            })
            .unwrap();

        assert_eq!(document.text(), "keep\nthat");
        assert_eq!(document.cursor(), CursorPosition::at(1, 4));
    }
}
