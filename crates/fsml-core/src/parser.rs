use crate::model::PathDescriptor;
use crate::title::title_from_filename;

/// Parse a relative path into its FSML components.
///
/// Never fails: anything without a recognizable structure falls back to
/// `order: None`, empty strings and `false` flags.
///
/// # Examples
///
/// ```
/// use fsml_core::parse_path;
///
/// let p = parse_path("02-getting-started/01-installation.md");
/// assert_eq!(p.order, Some(1));
/// assert_eq!(p.name, "installation");
/// assert_eq!(p.title, "Installation");
/// assert_eq!(p.extension, ".md");
/// assert!(!p.is_folder);
/// assert_eq!(p.depth, 1);
/// assert_eq!(p.parent, "02-getting-started");
/// ```
pub fn parse_path(path: &str) -> PathDescriptor {
    let trimmed = path.trim_end_matches('/');
    let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

    let Some((&filename, ancestors)) = segments.split_last() else {
        return PathDescriptor::default();
    };

    let (stem, extension) = split_extension(filename);
    let (order, name) = match split_order_prefix(stem) {
        Some((order, rest)) => (order, rest),
        None => (None, stem),
    };

    // hidden/system status comes from the top-level segment only
    let first = segments[0];

    PathDescriptor {
        path: trimmed.to_string(),
        order,
        name: name.to_string(),
        title: title_from_filename(filename),
        extension: extension.to_string(),
        is_folder: extension.is_empty(),
        is_hidden: first.starts_with('_'),
        is_system: first.starts_with('.'),
        depth: ancestors.len(),
        parent: ancestors.join("/"),
    }
}

/// Order prefix of a single path segment, ignoring its extension
pub(crate) fn segment_order(segment: &str) -> Option<u32> {
    let (stem, _) = split_extension(segment);
    split_order_prefix(stem).and_then(|(order, _)| order)
}

/// Split `name.ext` into (`name`, `.ext`).
/// A trailing dot or a name without dots has no extension.
pub(crate) fn split_extension(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(idx) if idx + 1 < filename.len() => filename.split_at(idx),
        _ => (filename, ""),
    }
}

/// Match `^\d+[-_]` against a stem.
///
/// Returns the parsed number (None when it overflows) and the remainder after
/// the separator, or None when the stem carries no prefix at all.
pub(crate) fn split_order_prefix(stem: &str) -> Option<(Option<u32>, &str)> {
    let digits = leading_digits(stem);
    if digits == 0 {
        return None;
    }
    let rest = &stem[digits..];
    let rest = rest.strip_prefix('-').or_else(|| rest.strip_prefix('_'))?;
    Some((stem[..digits].parse::<u32>().ok(), rest))
}

/// Byte length of the leading ASCII digit run
pub(crate) fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(|b| b.is_ascii_digit()).count()
}
