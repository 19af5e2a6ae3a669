//! Style records, named rules, and the base rule table.
//!
//! A [`Style`] has four independently inheritable fields. Every field that is
//! [`Attribute::UNSET`] falls back to whatever a less specific rule provides.

use std::collections::HashMap;

use crate::style::attribute::Attribute;

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// Foreground/background color and flag attributes for one class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub fg_color: Attribute,
    pub bg_color: Attribute,
    pub fg_style: Attribute,
    pub bg_style: Attribute,
}

impl Style {
    /// Create a new `Style` with all fields unset.
    pub const fn new() -> Self {
        Self {
            fg_color: Attribute::UNSET,
            bg_color: Attribute::UNSET,
            fg_style: Attribute::UNSET,
            bg_style: Attribute::UNSET,
        }
    }

    /// Set the foreground color (builder pattern).
    pub fn fg(mut self, color: Attribute) -> Self {
        self.fg_color = color;
        self
    }

    /// Set the background color (builder pattern).
    pub fn bg(mut self, color: Attribute) -> Self {
        self.bg_color = color;
        self
    }

    /// Set the foreground flags (builder pattern).
    pub fn fg_flags(mut self, flags: Attribute) -> Self {
        self.fg_style = flags;
        self
    }

    /// Set the background flags (builder pattern).
    pub fn bg_flags(mut self, flags: Attribute) -> Self {
        self.bg_style = flags;
        self
    }

    /// Whether every field is unset.
    pub fn is_empty(&self) -> bool {
        self.fg_color.is_unset()
            && self.bg_color.is_unset()
            && self.fg_style.is_unset()
            && self.bg_style.is_unset()
    }

    /// Fill every unset field of `self` from `base`.
    ///
    /// Fields already set on `self` are kept, so the more specific style is the
    /// receiver and the fallback is the argument. Each field is decided on its
    /// own: a rule can override the foreground and inherit the background.
    pub fn merge(&self, base: &Style) -> Style {
        fn pick(own: Attribute, base: Attribute) -> Attribute {
            if own.is_unset() {
                base
            } else {
                own
            }
        }

        Style {
            fg_color: pick(self.fg_color, base.fg_color),
            bg_color: pick(self.bg_color, base.bg_color),
            fg_style: pick(self.fg_style, base.fg_style),
            bg_style: pick(self.bg_style, base.bg_style),
        }
    }
}

// ---------------------------------------------------------------------------
// StyleRule
// ---------------------------------------------------------------------------

/// A style bound to a dotted class path such as `"list.items"` or
/// `"border:focus"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    pub name: String,
    pub value: Style,
}

impl StyleRule {
    /// Create a new rule.
    pub fn new(name: impl Into<String>, value: Style) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

// ---------------------------------------------------------------------------
// StyleTable
// ---------------------------------------------------------------------------

/// The base rules: class path to style, fixed for the lifetime of a `Ui`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleTable {
    rules: HashMap<String, Style>,
}

impl StyleTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in rules: bold focused borders and labels, green borders on
    /// active toggles, and a red filled gauge bar.
    pub fn defaults() -> Self {
        Self::new()
            .with("border:focus", Style::new().fg_flags(Attribute::BOLD))
            .with("border.label:focus", Style::new().fg_flags(Attribute::BOLD))
            .with("active.border", Style::new().fg(Attribute::GREEN))
            .with("gauge.bar.on", Style::new().bg(Attribute::RED))
    }

    /// Add or replace a rule (builder pattern).
    pub fn with(mut self, name: impl Into<String>, style: Style) -> Self {
        self.insert(name, style);
        self
    }

    /// Add or replace a rule, returning the previous style for that name.
    pub fn insert(&mut self, name: impl Into<String>, style: Style) -> Option<Style> {
        self.rules.insert(name.into(), style)
    }

    /// Remove a rule.
    pub fn remove(&mut self, name: &str) -> Option<Style> {
        self.rules.remove(name)
    }

    /// Look up the rule with exactly this name.
    pub fn get(&self, name: &str) -> Option<&Style> {
        self.rules.get(name)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, Style)> for StyleTable {
    fn from_iter<I: IntoIterator<Item = (N, Style)>>(iter: I) -> Self {
        let mut table = StyleTable::new();
        for (name, style) in iter {
            table.insert(name, style);
        }
        table
    }
}

impl<N: Into<String>> Extend<(N, Style)> for StyleTable {
    fn extend<I: IntoIterator<Item = (N, Style)>>(&mut self, iter: I) {
        for (name, style) in iter {
            self.insert(name, style);
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
