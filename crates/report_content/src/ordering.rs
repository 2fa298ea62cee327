use std::collections::HashSet;

/// One entry of a hand-maintained ordering list.
///
/// `excluded` entries keep their slot in the source list so they can be
/// switched back on, but never take part in explicit ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderEntry {
    pub file: &'static str,
    pub excluded: bool,
}

pub const fn show(file: &'static str) -> OrderEntry {
    OrderEntry {
        file,
        excluded: false,
    }
}

pub const fn hide(file: &'static str) -> OrderEntry {
    OrderEntry {
        file,
        excluded: true,
    }
}

/// File names that take part in explicit ordering, trimmed, in list order.
pub fn explicit_order(entries: &[OrderEntry]) -> Vec<&'static str> {
    entries
        .iter()
        .filter(|e| !e.excluded)
        .map(|e| e.file.trim())
        .collect()
}

/// File names switched off in the ordering list, trimmed.
pub fn excluded_files(entries: &[OrderEntry]) -> Vec<&'static str> {
    entries
        .iter()
        .filter(|e| e.excluded)
        .map(|e| e.file.trim())
        .collect()
}

/// Order `present` files by an explicit list.
///
/// Explicit names that are present come first, in explicit order; every
/// other present file follows in its incoming order. Each present file
/// appears exactly once, and explicit names with no present file are dropped.
pub fn merge_order<S: AsRef<str>>(explicit: &[&str], present: &[S]) -> Vec<String> {
    let available: HashSet<&str> = present.iter().map(AsRef::as_ref).collect();
    let mut seen: HashSet<&str> = HashSet::with_capacity(present.len());
    let mut merged = Vec::with_capacity(available.len());

    for &name in explicit {
        if available.contains(name) && seen.insert(name) {
            merged.push(name.to_string());
        }
    }
    for name in present.iter().map(AsRef::as_ref) {
        if seen.insert(name) {
            merged.push(name.to_string());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_order_skips_excluded() {
        let entries = [show("a.png"), hide("b.png"), show(" c.png ")];
        assert_eq!(explicit_order(&entries), vec!["a.png", "c.png"]);
        assert_eq!(excluded_files(&entries), vec!["b.png"]);
    }

    #[test]
    fn test_hash_in_filename_is_not_a_comment() {
        let entries = [show("Bài #1.png"), hide("Bài 2.png")];
        assert_eq!(explicit_order(&entries), vec!["Bài #1.png"]);

        let merged = merge_order(&explicit_order(&entries), &["x.png", "Bài #1.png"]);
        assert_eq!(merged, vec!["Bài #1.png", "x.png"]);
    }

    #[test]
    fn test_merge_explicit_first_then_listing_order() {
        let present = ["d.png", "b.png", "a.png", "c.png"];
        let merged = merge_order(&["c.png", "a.png"], &present);
        assert_eq!(merged, vec!["c.png", "a.png", "d.png", "b.png"]);
    }

    #[test]
    fn test_merge_drops_missing_explicit() {
        let merged = merge_order(&["ghost.png", "a.png"], &["a.png"]);
        assert_eq!(merged, vec!["a.png"]);
    }

    #[test]
    fn test_merge_keeps_every_present_file_once() {
        let present = vec![
            "a.png".to_string(),
            "b.png".to_string(),
            "a.png".to_string(),
            "c.png".to_string(),
        ];
        let merged = merge_order(&["b.png", "b.png", "z.png"], &present);
        assert_eq!(merged, vec!["b.png", "a.png", "c.png"]);

        let unique: HashSet<&str> = present.iter().map(String::as_str).collect();
        assert_eq!(merged.len(), unique.len());
        for name in unique {
            assert_eq!(merged.iter().filter(|m| *m == name).count(), 1);
        }
    }

    #[test]
    fn test_merge_with_nothing_present() {
        let present: [&str; 0] = [];
        assert!(merge_order(&["a.png"], &present).is_empty());
    }

    #[test]
    fn test_merge_without_explicit_keeps_listing() {
        assert_eq!(merge_order(&[], &["b.png", "a.png"]), vec!["b.png", "a.png"]);
    }

    #[test]
    fn test_excluded_file_still_appended_when_present() {
        let entries = [show("a.png"), hide("b.png")];
        let merged = merge_order(&explicit_order(&entries), &["b.png", "a.png"]);
        assert_eq!(merged, vec!["a.png", "b.png"]);
    }
}
