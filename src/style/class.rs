//! Dotted class paths: suffix walking and dot-boundary matching.
//!
//! A class path like `"toggle.active.border"` names a widget part from the most
//! specific segment on the left to the most general on the right. Its suffixes
//! (`"active.border"`, `"border"`, and finally the root `""`) are the ancestor
//! rules it may inherit from. Matching only ever happens on `.` boundaries, so
//! `"xlist"` is never taken for `"list"`.

/// Pseudo-state suffix applied while the owning widget has keyboard focus.
pub const FOCUS_SUFFIX: &str = ":focus";

/// The `:focus` variant of a class path.
pub fn focus_variant(class: &str) -> String {
    let mut name = String::with_capacity(class.len() + FOCUS_SUFFIX.len());
    name.push_str(class);
    name.push_str(FOCUS_SUFFIX);
    name
}

/// Iterate over `class` and every suffix obtained by stripping leading dotted
/// segments, ending with the root class `""`.
///
/// `"list.items"` yields `"list.items"`, `"items"`, `""`.
pub fn suffixes(class: &str) -> Suffixes<'_> {
    Suffixes {
        rest: Some(class),
    }
}

/// Iterator returned by [`suffixes`].
#[derive(Debug, Clone)]
pub struct Suffixes<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for Suffixes<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let current = self.rest?;
        self.rest = if current.is_empty() {
            None
        } else {
            Some(current.find('.').map_or("", |dot| &current[dot + 1..]))
        };
        Some(current)
    }
}

/// Whether `name` equals `target` or ends with `"." + target`.
pub fn is_dot_suffix(target: &str, name: &str) -> bool {
    if name == target {
        return true;
    }
    if name.len() <= target.len() || !name.ends_with(target) {
        return false;
    }
    name.as_bytes()[name.len() - target.len() - 1] == b'.'
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn suffixes_walk_to_root() {
        let all: Vec<&str> = suffixes("toggle.active.border").collect();
        assert_eq!(all, vec!["toggle.active.border", "active.border", "border", ""]);
    }

    #[test]
    fn suffixes_of_single_segment() {
        let all: Vec<&str> = suffixes("text").collect();
        assert_eq!(all, vec!["text", ""]);
    }

    #[test]
    fn suffixes_of_root_is_root_only() {
        let all: Vec<&str> = suffixes("").collect();
        assert_eq!(all, vec![""]);
    }

    #[test]
    fn focus_variant_appends_suffix() {
        assert_eq!(focus_variant("border"), "border:focus");
        assert_eq!(focus_variant(""), ":focus");
    }

    #[test]
    fn dot_suffix_matches_on_boundaries_only() {
        assert!(is_dot_suffix("list", "list"));
        assert!(is_dot_suffix("items", "list.items"));
        assert!(is_dot_suffix("list.items", "dialog.list.items"));
        assert!(!is_dot_suffix("list", "xlist"));
        assert!(!is_dot_suffix("items", "listitems"));
        assert!(!is_dot_suffix("list.items", "items"));
    }

    #[test]
    fn dot_suffix_with_focus_names() {
        assert!(is_dot_suffix("border:focus", "text.border:focus"));
        assert!(!is_dot_suffix("border", "text.border:focus"));
    }
}
