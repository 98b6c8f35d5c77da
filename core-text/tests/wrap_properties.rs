//! Behavioural tests for the public text API.

use core_text::{pad_text, wrap, Pad, TextError};

#[test]
fn test_documented_scenarios() {
    assert_eq!(wrap("hello world", 5).unwrap(), vec!["hello", "world"]);
    assert_eq!(wrap("a\nb", 10).unwrap(), vec!["a", "b"]);
    assert_eq!(wrap("", 10).unwrap(), vec![""]);
    assert_eq!(
        wrap("supercalifragilistic", 5).unwrap(),
        vec!["super", "calif", "ragil", "istic"]
    );
    assert!(matches!(wrap("hi", 0), Err(TextError::InvalidArgument(_))));
}

#[test]
fn test_width_of_one_terminates_on_long_input() {
    let word = "x".repeat(10_000);
    let text = format!("{} {}", word, word);

    let lines = wrap(&text, 1).unwrap();

    assert_eq!(lines.len(), 20_000);
    assert!(lines.iter().all(|line| line == "x"));
}

#[test]
fn test_large_input_does_not_recurse() {
    // Deep enough to overflow the stack if line breaks were expanded recursively
    let text = "word\n".repeat(200_000);

    let lines = wrap(&text, 4).unwrap();

    assert_eq!(lines.len(), 200_001);
    assert_eq!(lines.last().map(String::as_str), Some(""));
}

#[test]
fn test_force_split_chunks_reassemble_the_word() {
    let word = "antidisestablishmentarianism";

    for width in 1..word.len() {
        let lines = wrap(word, width).unwrap();
        assert_eq!(lines.concat(), word);
        assert!(lines[..lines.len() - 1]
            .iter()
            .all(|line| line.chars().count() == width));
    }
}

#[test]
fn test_wrapped_lines_pad_to_a_column() {
    let lines = wrap("left aligned column text", 8).unwrap();
    let padded: Vec<String> = lines
        .iter()
        .map(|line| pad_text(line, 8, Pad::Right, '.').unwrap())
        .collect();

    assert_eq!(padded, vec!["left....", "aligned.", "column..", "text...."]);
}
