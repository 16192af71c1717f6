use crate::error::{CliError, Result};
use std::io::Read;
use std::path::Path;

/// Read the whole batch input; `-` reads stdin.
pub fn read_input(source: &str) -> Result<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    let path = Path::new(source);
    if !path.is_file() {
        return Err(CliError::InputNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Split the trailing check character pair off a model reference argument.
///
/// Inputs shorter than two characters are returned whole as the pair so the
/// library reports the length problem.
pub fn split_trailing_pair(value: &str) -> (&str, &str) {
    let count = value.chars().count();
    let at = value
        .char_indices()
        .nth(count.saturating_sub(2))
        .map_or(value.len(), |(i, _)| i);
    value.split_at(at)
}

/// Marker line with `^` under every rejected character.
pub fn marker_line(positions: &[bool]) -> String {
    positions
        .iter()
        .map(|&ok| if ok { ' ' } else { '^' })
        .collect::<String>()
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_trailing_pair_takes_last_two_chars() {
        assert_eq!(split_trailing_pair("Ad4X4bL5ttr2310c2K"), ("Ad4X4bL5ttr2310c", "2K"));
        assert_eq!(split_trailing_pair("A£K"), ("A", "£K"));
        assert_eq!(split_trailing_pair("K"), ("", "K"));
        assert_eq!(split_trailing_pair(""), ("", ""));
    }

    #[test]
    fn marker_line_marks_rejected_positions() {
        assert_eq!(marker_line(&[true, false, true, false, true]), " ^ ^");
        assert_eq!(marker_line(&[true, true]), "");
    }
}
