//! Style resolution: base table plus a frame-scoped override stack.
//!
//! Resolution starts from an empty [`Style`] and folds matching rules into it
//! with [`Style::merge`], so whichever rule is visited first wins a field and
//! later rules only fill the fields still unset. The visiting order encodes
//! specificity:
//!
//! 1. base rules for each suffix of the class path, longest first, with the
//!    `:focus` variant visited before the plain name at every step;
//! 2. override rules in push order, matching when the rule name equals the
//!    class or has it as a dotted suffix (again `:focus` first).

use crate::style::attribute::Attribute;
use crate::style::class::{focus_variant, is_dot_suffix, suffixes};
use crate::style::rule::{Style, StyleRule, StyleTable};

// ---------------------------------------------------------------------------
// ResolvedStyle
// ---------------------------------------------------------------------------

/// Final foreground/background attributes ready for a cell write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ResolvedStyle {
    pub fg: Attribute,
    pub bg: Attribute,
}

impl ResolvedStyle {
    /// Flatten a cascaded [`Style`]: color and flags are OR-ed per side.
    pub fn from_style(style: &Style) -> Self {
        Self {
            fg: style.fg_color | style.fg_style,
            bg: style.bg_color | style.bg_style,
        }
    }

    /// The same style with `flags` added on both sides.
    pub fn with_flags(self, flags: Attribute) -> Self {
        Self {
            fg: self.fg | flags,
            bg: self.bg | flags,
        }
    }
}

// ---------------------------------------------------------------------------
// StyleCascade
// ---------------------------------------------------------------------------

/// Base rules and the override stack for one UI context.
#[derive(Debug, Clone, Default)]
pub struct StyleCascade {
    base: StyleTable,
    overrides: Vec<StyleRule>,
}

impl StyleCascade {
    /// Create a cascade over the given base rules.
    pub fn new(base: StyleTable) -> Self {
        Self {
            base,
            overrides: Vec::new(),
        }
    }

    /// The base rule table.
    pub fn base(&self) -> &StyleTable {
        &self.base
    }

    /// Mutable access to the base rule table.
    pub fn base_mut(&mut self) -> &mut StyleTable {
        &mut self.base
    }

    /// Push an override rule.
    pub fn push(&mut self, rule: StyleRule) {
        self.overrides.push(rule);
    }

    /// Pop the most recently pushed override.
    ///
    /// # Panics
    ///
    /// Panics if the override stack is empty.
    pub fn pop(&mut self) -> StyleRule {
        match self.overrides.pop() {
            Some(rule) => rule,
            None => panic!("style override stack popped while empty"),
        }
    }

    /// Pop the `n` most recently pushed overrides.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `n` overrides are on the stack.
    pub fn pop_n(&mut self, n: usize) {
        let depth = self.overrides.len();
        assert!(
            n <= depth,
            "style override stack popped {n} entries but only {depth} were pushed"
        );
        self.overrides.truncate(depth - n);
    }

    /// Drop every pushed override, returning how many there were.
    pub fn clear_overrides(&mut self) -> usize {
        let depth = self.overrides.len();
        self.overrides.clear();
        depth
    }

    /// Number of pushed overrides.
    pub fn override_depth(&self) -> usize {
        self.overrides.len()
    }

    /// Cascade the base table and the override stack for `class`.
    pub fn cascade(&self, class: &str, focused: bool) -> Style {
        let focus_class = focused.then(|| focus_variant(class));
        let mut acc = Style::new();

        for suffix in suffixes(class) {
            if focused {
                if let Some(style) = self.base.get(&focus_variant(suffix)) {
                    acc = acc.merge(style);
                }
            }
            if let Some(style) = self.base.get(suffix) {
                acc = acc.merge(style);
            }
        }

        for rule in &self.overrides {
            if let Some(focus_class) = &focus_class {
                if is_dot_suffix(focus_class, &rule.name) {
                    acc = acc.merge(&rule.value);
                }
            }
            if is_dot_suffix(class, &rule.name) {
                acc = acc.merge(&rule.value);
            }
        }

        acc
    }

    /// Resolve `class` to final foreground/background attributes.
    pub fn resolve(&self, class: &str, focused: bool) -> ResolvedStyle {
        ResolvedStyle::from_style(&self.cascade(class, focused))
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cascade(rules: &[(&str, Style)]) -> StyleCascade {
        StyleCascade::new(rules.iter().map(|(n, s)| (*n, *s)).collect())
    }

    #[test]
    fn unknown_class_resolves_to_unset() {
        let c = cascade(&[]);
        assert_eq!(c.resolve("text.text", false), ResolvedStyle::default());
    }

    #[test]
    fn longer_class_wins_and_parent_fills_gaps() {
        let c = cascade(&[
            ("b", Style::new().fg(Attribute::RED).bg(Attribute::BLUE)),
            ("a.b", Style::new().fg(Attribute::GREEN)),
        ]);
        let s = c.cascade("a.b", false);
        assert_eq!(s.fg_color, Attribute::GREEN);
        assert_eq!(s.bg_color, Attribute::BLUE);
    }

    #[test]
    fn prefix_rule_does_not_apply_to_longer_class() {
        // "a" is not a suffix of "a.b", so it never contributes.
        let c = cascade(&[
            ("a", Style::new().fg(Attribute::RED).bg(Attribute::WHITE)),
            ("a.b", Style::new().fg(Attribute::GREEN)),
        ]);
        let s = c.cascade("a.b", false);
        assert_eq!(s.fg_color, Attribute::GREEN);
        assert!(s.bg_color.is_unset());
    }

    #[test]
    fn root_rule_is_universal_fallback() {
        let c = cascade(&[("", Style::new().bg(Attribute::BLACK))]);
        assert_eq!(c.resolve("list.items", false).bg, Attribute::BLACK);
        assert_eq!(c.resolve("", false).bg, Attribute::BLACK);
    }

    #[test]
    fn focus_variant_only_applies_when_focused() {
        let c = cascade(&[
            ("border:focus", Style::new().fg_flags(Attribute::BOLD)),
            ("border", Style::new().fg(Attribute::WHITE)),
        ]);
        assert_eq!(c.resolve("text.border", false).fg, Attribute::WHITE);
        assert_eq!(
            c.resolve("text.border", true).fg,
            Attribute::WHITE | Attribute::BOLD
        );
    }

    #[test]
    fn focus_variant_beats_plain_at_same_level() {
        let c = cascade(&[
            ("x:focus", Style::new().fg(Attribute::YELLOW)),
            ("x", Style::new().fg(Attribute::BLUE)),
        ]);
        assert_eq!(c.resolve("x", true).fg, Attribute::YELLOW);
        assert_eq!(c.resolve("x", false).fg, Attribute::BLUE);
    }

    #[test]
    fn default_rules_color_active_toggle_border() {
        let c = StyleCascade::new(StyleTable::defaults());
        assert_eq!(c.resolve("toggle.active.border", false).fg, Attribute::GREEN);
        assert_eq!(c.resolve("toggle.border", false).fg, Attribute::UNSET);
        assert_eq!(
            c.resolve("toggle.active.border", true).fg,
            Attribute::GREEN | Attribute::BOLD
        );
    }

    #[test]
    fn override_fills_fields_left_unset_by_base() {
        let mut c = cascade(&[("items", Style::new().fg(Attribute::WHITE))]);
        c.push(StyleRule::new(
            "items",
            Style::new().fg(Attribute::RED).bg(Attribute::BLUE),
        ));
        let r = c.resolve("items", false);
        assert_eq!(r.fg, Attribute::WHITE);
        assert_eq!(r.bg, Attribute::BLUE);
    }

    #[test]
    fn override_matches_dotted_rule_names() {
        let mut c = cascade(&[]);
        c.push(StyleRule::new("dialog.items", Style::new().fg(Attribute::CYAN)));
        assert_eq!(c.resolve("items", false).fg, Attribute::CYAN);

        c.pop();
        c.push(StyleRule::new("xitems", Style::new().fg(Attribute::CYAN)));
        assert_eq!(c.resolve("items", false).fg, Attribute::UNSET);
    }

    #[test]
    fn earlier_override_wins_over_later() {
        let mut c = cascade(&[]);
        c.push(StyleRule::new("a", Style::new().fg(Attribute::RED)));
        c.push(StyleRule::new("a", Style::new().fg(Attribute::BLUE).bg(Attribute::BLACK)));
        let r = c.resolve("a", false);
        assert_eq!(r.fg, Attribute::RED);
        assert_eq!(r.bg, Attribute::BLACK);
    }

    #[test]
    fn focus_override_applies_only_when_focused() {
        let mut c = cascade(&[]);
        c.push(StyleRule::new("input.border:focus", Style::new().fg(Attribute::MAGENTA)));
        assert_eq!(c.resolve("border", false).fg, Attribute::UNSET);
        assert_eq!(c.resolve("border", true).fg, Attribute::MAGENTA);
    }

    #[test]
    fn resolved_style_combines_color_and_flags() {
        let s = Style::new()
            .fg(Attribute::GREEN)
            .fg_flags(Attribute::UNDERLINE)
            .bg(Attribute::BLACK)
            .bg_flags(Attribute::REVERSE);
        let r = ResolvedStyle::from_style(&s);
        assert_eq!(r.fg, Attribute::GREEN | Attribute::UNDERLINE);
        assert_eq!(r.bg, Attribute::BLACK | Attribute::REVERSE);
        let u = r.with_flags(Attribute::BOLD);
        assert!(u.fg.contains(Attribute::BOLD));
        assert!(u.bg.contains(Attribute::BOLD));
    }

    #[test]
    fn pop_n_truncates() {
        let mut c = cascade(&[]);
        c.push(StyleRule::new("a", Style::new()));
        c.push(StyleRule::new("b", Style::new()));
        c.push(StyleRule::new("c", Style::new()));
        c.pop_n(2);
        assert_eq!(c.override_depth(), 1);
        assert_eq!(c.pop().name, "a");
        assert_eq!(c.clear_overrides(), 0);
    }

    #[test]
    #[should_panic(expected = "popped while empty")]
    fn pop_empty_panics() {
        let mut c = cascade(&[]);
        c.pop();
    }

    #[test]
    #[should_panic(expected = "popped 2 entries but only 1 were pushed")]
    fn pop_n_too_many_panics() {
        let mut c = cascade(&[]);
        c.push(StyleRule::new("a", Style::new()));
        c.pop_n(2);
    }
}
