// Rule text synthesis for the injected style block.
//
// Live stylesheet rules are kept as plain text, one rule per line, and
// rewritten with a selector-prefix match. A single text substitution per
// parameter change is O(1) in the number of ambient elements, where
// per-element inline styling would touch every one of them.

/// Synthesize a one-line rule for `selector`.
pub fn rule(selector: &str, declarations: &str) -> String {
    format!("{selector} {{ {declarations} }}")
}

/// Initial block content: one empty placeholder rule per dynamic selector.
/// `replace_rule` only ever rewrites rules that exist, so every selector
/// that will be rewritten later must be seeded here.
pub fn seed(selectors: &[&str]) -> String {
    let mut out = String::from("\n");
    for sel in selectors {
        out.push_str(sel);
        out.push_str(" { }\n");
    }
    out
}

/// Replace the existing rule for `selector` with `new_rule`, matching from
/// the first occurrence of the selector to the end of that line. The prefix
/// must be followed by whitespace or `{` so `.caustic` cannot match a rule
/// for a longer class name. Returns `None` when no rule matches; the caller
/// decides whether to log the drop.
pub fn replace_rule(css: &str, selector: &str, new_rule: &str) -> Option<String> {
    let mut search_from = 0;
    while let Some(rel) = css[search_from..].find(selector) {
        let start = search_from + rel;
        let after = start + selector.len();
        let boundary = match css[after..].chars().next() {
            None => true,
            Some(c) => c.is_whitespace() || c == '{',
        };
        if boundary {
            let line_end = css[start..]
                .find('\n')
                .map(|n| start + n)
                .unwrap_or(css.len());
            let mut out = String::with_capacity(css.len() + new_rule.len());
            out.push_str(&css[..start]);
            out.push_str(new_rule);
            out.push_str(&css[line_end..]);
            return Some(out);
        }
        search_from = after;
    }
    None
}
