use std::borrow::Cow;

/// Chapter text used when a screenshot has no description.
pub const UNDESCRIBED: &str = "Chức năng chưa được mô tả.";

/// Strip the last extension from a file name.
///
/// Leading dots do not start an extension, so `.png` stays `.png`.
/// The name is never interpreted as a path.
pub fn file_stem(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(i) if filename[..i].chars().any(|c| c != '.') => &filename[..i],
        _ => filename,
    }
}

/// Default caption for a file stem with no explicit label.
///
/// Underscores become spaces, the first character is upper-cased and the
/// rest lower-cased. When the first character upper-cases to several
/// characters (`ß` -> `SS`), only the first of them stays upper-case, which
/// keeps the transform idempotent.
pub fn default_caption(stem: &str) -> String {
    let spaced = stem.replace('_', " ");
    let mut chars = spaced.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut upper = first.to_uppercase();
    let mut caption = String::with_capacity(spaced.len());
    caption.extend(upper.next());
    caption.extend(upper.chain(chars).flat_map(char::to_lowercase));
    caption
}

/// Name a screenshot is looked up under in the per-role tables.
///
/// Folders are listed case-insensitively, but every table key ends in a
/// lower-case `.png`.
pub fn table_key(filename: &str) -> Cow<'_, str> {
    let stem = file_stem(filename);
    let ext = &filename[stem.len()..];
    if ext != ".png" && ext.eq_ignore_ascii_case(".png") {
        Cow::Owned(format!("{stem}.png"))
    } else {
        Cow::Borrowed(filename)
    }
}

/// Default file name for a screenshot with no mapping entry.
pub fn default_file_name(filename: &str) -> String {
    format!("{}.png", default_caption(file_stem(filename)))
}
