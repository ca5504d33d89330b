//! Literal substitution rules
//!
//! A [`Rule`] is a plain `pattern -> replacement` pair. Rules never look at
//! the structure of the text they rewrite: every occurrence of the pattern is
//! replaced, left to right, exactly like [`str::replace`].
//!
//! A [`RuleSet`] applies its rules one after another, so a later rule sees the
//! output of the earlier ones. Callers rely on that ordering; it is part of
//! the template contract.

use crate::error::{Result, TplgenError};

/// A single literal substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pattern: String,
    replacement: String,
}

impl Rule {
    /// Create a rule. The pattern must be non-empty.
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(TplgenError::EmptyPattern);
        }

        Ok(Self {
            pattern,
            replacement: replacement.into(),
        })
    }

    /// Rule for a built-in placeholder; placeholders are non-empty constants
    pub(crate) fn placeholder(pattern: &'static str, replacement: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
        }
    }

    /// Parse a `-D` argument of the form `from=to`
    ///
    /// The pattern ends at the first `=`; the replacement may contain more.
    ///
    /// # Errors
    ///
    /// Returns [`TplgenError::InvalidDefine`] if there is no `=` or the
    /// pattern before it is empty.
    pub fn parse_define(define: &str) -> Result<Self> {
        match define.split_once('=') {
            Some((pattern, replacement)) if !pattern.is_empty() => {
                Self::new(pattern, replacement)
            }
            _ => Err(TplgenError::InvalidDefine {
                define: define.to_string(),
            }),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Replace every occurrence of the pattern in `text`
    pub fn apply(&self, text: &str) -> String {
        text.replace(&self.pattern, &self.replacement)
    }
}

/// Ordered list of rules applied in sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule; it runs after every rule already in the set
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule over `line` in order
    pub fn apply(&self, line: &str) -> String {
        let mut out = line.to_string();
        for rule in &self.rules {
            if out.contains(rule.pattern()) {
                out = rule.apply(&out);
            }
        }
        out
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl Extend<Rule> for RuleSet {
    fn extend<I: IntoIterator<Item = Rule>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}
