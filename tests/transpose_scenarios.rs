// transpose_scenarios.rs - 単語入れ替えの公開API統合テスト

use transpose_words::{transpose_words, word_positions, SpanError, Transposer};

#[test]
fn test_cursor_inside_second_word() {
    assert_eq!(transpose_words("alpha beta gamma", 8), "beta alpha gamma");
}

#[test]
fn test_wide_separator_is_preserved() {
    assert_eq!(transpose_words("one   two three", 6), "two   one three");
}

#[test]
fn test_single_word_is_unchanged() {
    assert_eq!(transpose_words("x", 0), "x");
    assert_eq!(transpose_words("x", 1), "x");
    assert_eq!(
        word_positions("x", 0),
        Err(SpanError::NoPrecedingWord { position: 0 })
    );
}

#[test]
fn test_cursor_directly_after_word() {
    // "|" は単語文字ではないので、カーソル直前の "bar" が後ろ側の単語になる
    let pair = word_positions("foo bar|baz", 7).unwrap();
    assert_eq!(pair.b.text, "bar");
    assert_eq!(transpose_words("foo bar|baz", 7), "bar foo|baz");
}

#[test]
fn test_cursor_at_line_start_and_end() {
    assert_eq!(transpose_words("foo bar", 0), "foo bar");
    assert_eq!(transpose_words("foo bar", 7), "foo bar");
    // 行末でも単語位置は求められる
    assert_eq!(word_positions("foo bar", 7).unwrap().b.text, "bar");
}

#[test]
fn test_only_nearest_pair_changes() {
    let line = "(setq alpha beta) ; gamma";
    let result = transpose_words(line, 13);
    assert_eq!(result, "(setq beta alpha) ; gamma");
}

#[test]
fn test_accented_words() {
    assert_eq!(transpose_words("naïve café", 7), "café naïve");
}

#[test]
fn test_out_of_range_position() {
    assert_eq!(transpose_words("foo bar", 99), "foo bar");
    assert_eq!(
        word_positions("foo bar", 99),
        Err(SpanError::OutOfRange { position: 99, len: 7 })
    );
}

#[test]
fn test_repeated_transpose_drags_word_forward() {
    // Emacs の M-t を繰り返したときと同様に、単語が右へ移動していく
    let transposer = Transposer::new();
    let first = transposer.try_transpose("a b c d", 2).unwrap();
    assert_eq!(first.text, "b a c d");
    assert_eq!(first.cursor, 3);

    let second = transposer.try_transpose(&first.text, first.cursor + 1).unwrap();
    assert_eq!(second.text, "b c a d");
}
