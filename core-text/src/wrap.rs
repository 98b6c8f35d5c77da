//! Monospace line wrapping.
//!
//! Only deals with left-to-right text, and only produces sensible layouts for
//! monospaced fonts: every `char` is assumed to take one cell.

use std::collections::VecDeque;

use crate::error::{Result, TextError};

const LINE_BREAK: char = '\n';
const SPACE: &str = " ";

/// Wraps `full_text` so that it fits in `characters_available`, over however
/// many lines it takes.
///
/// Wraps on the spaces between words where possible, otherwise breaks
/// mid-word. Every `'\n'` starts a new line. Runs of spaces are not kept: the
/// words of a line are always joined by a single space. Tabs and other
/// control characters stay part of the word they touch.
///
/// A segment between two adjacent line breaks (or an empty `full_text`)
/// produces an empty line, while a segment holding nothing but whitespace
/// produces a line containing a single space.
///
/// # Errors
///
/// Returns [`TextError::InvalidArgument`] if `characters_available` is zero.
///
/// # Examples
///
/// ```
/// use core_text::wrap;
///
/// let lines = wrap("supercalifragilistic", 5).unwrap();
/// assert_eq!(lines, vec!["super", "calif", "ragil", "istic"]);
///
/// let lines = wrap("a\n\nb", 10).unwrap();
/// assert_eq!(lines, vec!["a", "", "b"]);
/// ```
pub fn wrap(full_text: &str, characters_available: usize) -> Result<Vec<String>> {
    if characters_available == 0 {
        return Err(TextError::InvalidArgument(format!(
            "characters_available needs to be larger than 0, characters_available: {}",
            characters_available
        )));
    }

    let mut lines = Vec::new();

    for segment in full_text.split(LINE_BREAK) {
        if segment.is_empty() {
            lines.push(String::new());
        } else if segment.chars().all(is_blank) {
            lines.push(SPACE.to_string());
        } else {
            wrap_words(segment, characters_available, &mut lines);
        }
    }

    Ok(lines)
}

/// A word along with its width in chars.
type Word<'a> = (&'a str, usize);

/// Greedily packs the words of a single line-break-free segment into lines.
fn wrap_words<'a>(segment: &'a str, characters_available: usize, lines: &mut Vec<String>) {
    let mut remaining: VecDeque<Word<'a>> = segment
        .split(SPACE)
        .filter(|word| !word.is_empty())
        .map(|word| (word, char_len(word)))
        .collect();

    // Width of every remaining word, not counting the joining spaces
    let mut remaining_chars: usize = remaining.iter().map(|&(_, len)| len).sum();

    while !remaining.is_empty() {
        // Everything left fits on one line: done.
        if remaining_chars + remaining.len() - 1 <= characters_available {
            let words: Vec<&str> = remaining.drain(..).map(|(word, _)| word).collect();
            lines.push(words.join(SPACE));
            break;
        }

        let mut line: Vec<&str> = Vec::new();
        let mut used = 0;

        while let Some(&(word, len)) = remaining.front() {
            let cost = if line.is_empty() { len } else { used + 1 + len };
            if cost > characters_available {
                break;
            }
            used = cost;
            line.push(word);
            remaining_chars -= len;
            remaining.pop_front();
        }

        // The next word alone is wider than a line, take what fits off its front.
        if line.is_empty() {
            if let Some((word, len)) = remaining.pop_front() {
                let (head, tail) = split_at_char(word, characters_available);
                line.push(head);
                if !tail.is_empty() {
                    remaining.push_front((tail, len - characters_available));
                }
                remaining_chars -= characters_available.min(len);
            }
        }

        lines.push(line.join(SPACE));
    }
}

fn is_blank(c: char) -> bool {
    c <= ' '
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn split_at_char(word: &str, chars: usize) -> (&str, &str) {
    match word.char_indices().nth(chars) {
        Some((index, _)) => word.split_at(index),
        None => (word, ""),
    }
}
