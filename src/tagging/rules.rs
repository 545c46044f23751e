//! Ordered rewrite rules.
//!
//! Every pattern-driven stage consumes an ordered table of
//! (pattern, action) records through the same driver. Order within a
//! table is significant: tables are not commutative.

use regex::Regex;

/// What to do with text matched by a rule's pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
    /// Delete every match of the whole pattern.
    Delete,
    /// Replace every match of the whole pattern with the given text.
    Replace(&'static str),
    /// Delete the captured `phrase` and `article` groups of the first
    /// match. A pattern that does not define those groups falls back to
    /// [`RuleAction::Delete`] behavior.
    DeleteCaptured { article: usize, phrase: usize },
}

/// One (pattern, action) record in a rewrite table.
#[derive(Debug, Clone, Copy)]
pub struct RewriteRule {
    pub pattern: &'static str,
    pub action: RuleAction,
}

/// A rewrite rule with its compiled pattern.
#[derive(Debug)]
pub struct CompiledRule {
    regex: Regex,
    action: RuleAction,
}

/// Compile a single pattern, warning instead of failing.
pub(crate) fn compile_pattern(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            log::warn!("skipping unparseable pattern {pattern:?}: {e}");
            None
        }
    }
}

/// Compile a rule table, skipping entries whose pattern fails to compile.
pub fn compile(rules: &[RewriteRule]) -> Vec<CompiledRule> {
    rules
        .iter()
        .filter_map(|rule| {
            compile_pattern(rule.pattern).map(|regex| CompiledRule {
                regex,
                action: rule.action,
            })
        })
        .collect()
}

/// Apply a compiled rule table to `input` in declared order.
///
/// With `trim_end` the intermediate string is right-trimmed after every
/// rule, which the post-structuring fixup table relies on.
pub fn apply(input: &str, rules: &[CompiledRule], trim_end: bool) -> String {
    let mut out = input.to_string();
    for rule in rules {
        out = rule.apply(&out);
        if trim_end {
            out.truncate(out.trim_end().len());
        }
    }
    out
}

impl CompiledRule {
    fn apply(&self, input: &str) -> String {
        match self.action {
            RuleAction::Delete => self.regex.replace_all(input, "").into_owned(),
            RuleAction::Replace(replacement) => {
                self.regex.replace_all(input, replacement).into_owned()
            }
            RuleAction::DeleteCaptured { article, phrase } => {
                self.delete_captured(input, article, phrase)
            }
        }
    }

    /// Delete the `phrase` and `article` capture spans of the first match,
    /// keeping whatever sits between them. Whole matches are deleted when
    /// the pattern does not provide the groups.
    fn delete_captured(&self, input: &str, article: usize, phrase: usize) -> String {
        let caps = match self.regex.captures(input) {
            Some(caps) => caps,
            None => return input.to_string(),
        };
        let (article_m, phrase_m) = match (caps.get(article), caps.get(phrase)) {
            (Some(a), Some(p)) => (a, p),
            _ => return self.regex.replace_all(input, "").into_owned(),
        };
        // Delete the later span first so the earlier range stays valid.
        let (first, second) = if article_m.start() <= phrase_m.start() {
            (article_m.range(), phrase_m.range())
        } else {
            (phrase_m.range(), article_m.range())
        };
        let mut out = input.to_string();
        out.replace_range(second, "");
        out.replace_range(first, "");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_in_declared_order() {
        let rules = compile(&[
            RewriteRule {
                pattern: "ab",
                action: RuleAction::Replace("b"),
            },
            RewriteRule {
                pattern: "b+",
                action: RuleAction::Delete,
            },
        ]);
        // "ab" collapses to "b" first, then every "b" run is deleted.
        assert_eq!(apply("cabb", &rules, false), "c");
    }

    #[test]
    fn test_invalid_pattern_is_skipped() {
        let rules = compile(&[
            RewriteRule {
                pattern: "(unclosed",
                action: RuleAction::Delete,
            },
            RewriteRule {
                pattern: "x",
                action: RuleAction::Delete,
            },
        ]);
        assert_eq!(rules.len(), 1);
        assert_eq!(apply("axb", &rules, false), "ab");
    }

    #[test]
    fn test_delete_captured_spans() {
        let rules = compile(&[RewriteRule {
            pattern: "(An*)([^.]*)(Deck Building Game)",
            action: RuleAction::DeleteCaptured {
                article: 1,
                phrase: 3,
            },
        }]);
        assert_eq!(apply("An Awesome Deck Building Game", &rules, false), " Awesome ");
        // The middle capture survives untouched.
        assert_eq!(
            apply("Legendary: A Marvel Deck Building Game", &rules, false),
            "Legendary:  Marvel "
        );
    }

    #[test]
    fn test_delete_captured_falls_back_to_whole_match() {
        let rules = compile(&[RewriteRule {
            pattern: r"(First|Second)\s*Edition",
            action: RuleAction::DeleteCaptured {
                article: 3,
                phrase: 5,
            },
        }]);
        // Groups 3/5 do not exist, so every whole match goes.
        assert_eq!(apply("Catan Second Edition", &rules, false), "Catan ");
    }

    #[test]
    fn test_unmatched_rule_is_noop() {
        let rules = compile(&[RewriteRule {
            pattern: "zzz",
            action: RuleAction::Delete,
        }]);
        assert_eq!(apply("Pandemic", &rules, false), "Pandemic");
    }

    #[test]
    fn test_trim_end_between_rules() {
        let rules = compile(&[RewriteRule {
            pattern: "#Extra$",
            action: RuleAction::Replace(" "),
        }]);
        assert_eq!(apply("#Game #Extra", &rules, true), "#Game");
    }
}
