use super::token::{tokenize, trim_outer_parens, TokenKind};

pub const PROPOSITIONAL_WORDS: [&str; 5] = ["and", "or", "implies", "equivalent", "not"];

/// Words of `text` outside the propositional fragment, in order of appearance.
pub fn disallowed_words(text: &str) -> Vec<String> {
    tokenize(trim_outer_parens(text))
        .into_iter()
        .filter_map(|t| match t.kind {
            TokenKind::Atom(_) | TokenKind::Paren => None,
            TokenKind::Unary(w) | TokenKind::Binary(w) | TokenKind::Unknown(w) => {
                if PROPOSITIONAL_WORDS.contains(&w) {
                    None
                } else {
                    Some(w.to_owned())
                }
            }
        })
        .collect()
}

pub fn is_propositional(text: &str) -> bool {
    disallowed_words(text).is_empty()
}
