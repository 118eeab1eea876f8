use crate::parser::{leading_digits, split_extension};

/// Derive a human-readable title from a filename.
///
/// Rules:
/// - Remove the extension
/// - Remove a leading `\d+-` prefix (hyphen only; `01_intro` keeps its number)
/// - Replace `-` and `_` with spaces
/// - Uppercase the first character of each word, leave the rest untouched
///
/// # Examples
///
/// ```
/// use fsml_core::title_from_filename;
///
/// assert_eq!(title_from_filename("01-getting-started.md"), "Getting Started");
/// assert_eq!(title_from_filename("my_cool_doc.md"), "My Cool Doc");
/// assert_eq!(title_from_filename("README.md"), "README");
/// assert_eq!(title_from_filename("01_intro.md"), "01 Intro");
/// assert_eq!(title_from_filename(""), "");
/// ```
pub fn title_from_filename(filename: &str) -> String {
    if filename.is_empty() {
        return String::new();
    }

    let (stem, _) = split_extension(filename);
    let stem = strip_hyphen_prefix(stem);

    stem.replace(['-', '_'], " ")
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_hyphen_prefix(stem: &str) -> &str {
    let digits = leading_digits(stem);
    if digits > 0 && stem[digits..].starts_with('-') {
        &stem[digits + 1..]
    } else {
        stem
    }
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_filename() {
        assert_eq!(title_from_filename("01-getting-started.md"), "Getting Started");
        assert_eq!(title_from_filename("my_cool_doc.md"), "My Cool Doc");
        assert_eq!(title_from_filename("README.md"), "README");
        assert_eq!(title_from_filename("index.md"), "Index");
        assert_eq!(title_from_filename("getting_started.md"), "Getting Started");
    }

    #[test]
    fn test_title_keeps_underscore_prefix() {
        // order parsing accepts `02_`, title derivation does not
        assert_eq!(title_from_filename("02_setup.md"), "02 Setup");
        assert_eq!(title_from_filename("02-setup.md"), "Setup");
    }

    #[test]
    fn test_title_folder_and_edge_cases() {
        assert_eq!(title_from_filename("03-tutorials"), "Tutorials");
        assert_eq!(title_from_filename("archive.tar.gz"), "Archive.tar");
        assert_eq!(title_from_filename("a--b"), "A  B"); // empty word preserved
        assert_eq!(title_from_filename("-lead"), " Lead");
        assert_eq!(title_from_filename("12"), "12");
        assert_eq!(title_from_filename("éclair"), "Éclair");
        assert_eq!(title_from_filename("iPhone-notes"), "IPhone Notes");
    }
}
