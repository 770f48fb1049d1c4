// src/page.rs
//! Page assembly: literal placeholder substitution in the template text.

use crate::config::consts::{CARDS_PLACEHOLDER, SUBTITLE_PLACEHOLDER};

/// Replace every occurrence of each placeholder with its replacement.
/// Plain substring replacement; placeholders are disjoint literals so order does not matter.
pub fn assemble<I, K, V>(template: &str, replacements: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut html = s!(template);
    for (token, value) in replacements {
        let token = token.as_ref();
        if token.is_empty() {
            continue;
        }
        html = html.replace(token, value.as_ref());
    }
    html
}

/// Heading shown above the cards.
pub fn subtitle(choice: &str) -> String {
    format!("<h2>Animals filtered by skin type: {choice}</h2>")
}

/// The two substitutions the animals template expects.
pub fn replacements(choice: &str, cards: String) -> [(&'static str, String); 2] {
    [(SUBTITLE_PLACEHOLDER, subtitle(choice)), (CARDS_PLACEHOLDER, cards)]
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "<html><body>\n\
        __REPLACE_SUBTITLE_FILTERED_BY_SKIN_TYPE__\n\
        <ul class=\"cards\">__REPLACE_ANIMALS_INFO__</ul>\n\
        </body></html>";

    #[test]
    fn empty_mapping_is_identity() {
        assert_eq!(assemble(TEMPLATE, Vec::<(&str, &str)>::new()), TEMPLATE);
    }

    #[test]
    fn fills_both_placeholders() {
        let out = assemble(TEMPLATE, replacements("Fur", s!("<li>Fox</li>")));
        assert!(out.contains("<h2>Animals filtered by skin type: Fur</h2>"));
        assert!(out.contains("<ul class=\"cards\"><li>Fox</li></ul>"));
        assert!(!out.contains("__REPLACE_"));
    }

    #[test]
    fn replaces_every_occurrence_literally() {
        let out = assemble("$X $X [$X]", [("$X", "a.b")]);
        assert_eq!(out, "a.b a.b [a.b]");
    }

    #[test]
    fn unknown_tokens_leave_template_alone() {
        assert_eq!(assemble(TEMPLATE, [("__NOPE__", "x")]), TEMPLATE);
    }
}
