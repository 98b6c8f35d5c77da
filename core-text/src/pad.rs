//! Fixed-width text padding.

use crate::error::{Result, TextError};

/// Side of the text the padding characters are placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pad {
    /// Padding goes before the text, right-aligning it.
    Left,
    /// Padding goes after the text, left-aligning it.
    Right,
}

/// Pads `original` with `padding` until it is `desired_length` characters long.
///
/// # Errors
///
/// Returns [`TextError::InvalidArgument`] if `original` is already longer than
/// `desired_length`.
///
/// # Examples
///
/// ```
/// use core_text::{pad_text, Pad};
///
/// assert_eq!(pad_text("42", 5, Pad::Left, '0').unwrap(), "00042");
/// assert_eq!(pad_text("tag", 5, Pad::Right, ' ').unwrap(), "tag  ");
/// ```
pub fn pad_text(original: &str, desired_length: usize, pad: Pad, padding: char) -> Result<String> {
    let length = original.chars().count();

    let Some(required) = desired_length.checked_sub(length) else {
        return Err(TextError::InvalidArgument(format!(
            "text is already longer than the desired length, length: {} desired_length: {}",
            length, desired_length
        )));
    };

    let fill: String = std::iter::repeat(padding).take(required).collect();

    Ok(match pad {
        Pad::Left => fill + original,
        Pad::Right => format!("{}{}", original, fill),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_left() {
        assert_eq!(pad_text("7", 3, Pad::Left, '0').unwrap(), "007");
    }

    #[test]
    fn test_pad_right() {
        assert_eq!(pad_text("ab", 4, Pad::Right, '.').unwrap(), "ab..");
    }

    #[test]
    fn test_exact_length_is_unchanged() {
        assert_eq!(pad_text("abc", 3, Pad::Left, ' ').unwrap(), "abc");
        assert_eq!(pad_text("", 0, Pad::Right, ' ').unwrap(), "");
    }

    #[test]
    fn test_counts_characters() {
        assert_eq!(pad_text("né", 4, Pad::Right, '-').unwrap(), "né--");
    }

    #[test]
    fn test_text_longer_than_desired_length() {
        let result = pad_text("toolong", 3, Pad::Right, ' ');
        assert!(matches!(result, Err(TextError::InvalidArgument(_))));
    }
}
