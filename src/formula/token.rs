use crate::cnf::cnf::Atom;

pub const UNARY_WORDS: [&str; 4] = ["not", "always", "eventually", "next"];
pub const BINARY_WORDS: [&str; 5] = ["and", "or", "implies", "equivalent", "until"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'a> {
    Atom(Atom),
    Unary(&'a str),
    Binary(&'a str),
    Unknown(&'a str),
    /// Nothing but parentheses, e.g. a standalone `(`.
    Paren,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub core: &'a str,
    pub open: usize,
    pub close: usize,
    pub kind: TokenKind<'a>,
}

pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.split_whitespace().map(classify).collect()
}

fn classify(text: &str) -> Token<'_> {
    let body = text.trim_start_matches('(');
    let open = text.len() - body.len();

    let core = body.trim_end_matches(')');
    let close = body.len() - core.len();

    let mut chars = core.chars();
    let single = match (chars.next(), chars.next()) {
        (Some(c), None) => Atom::new(c),
        _ => None,
    };

    // closing parens only attach to atoms, but every one is counted
    let (core, kind) = match single {
        Some(atom) => (core, TokenKind::Atom(atom)),
        None if core.is_empty() => (core, TokenKind::Paren),
        None if close > 0 => (body, TokenKind::Unknown(body)),
        None => (core, word_kind(core)),
    };

    Token {
        text,
        core,
        open,
        close,
        kind,
    }
}

fn word_kind(word: &str) -> TokenKind<'_> {
    if UNARY_WORDS.contains(&word) {
        TokenKind::Unary(word)
    } else if BINARY_WORDS.contains(&word) {
        TokenKind::Binary(word)
    } else {
        TokenKind::Unknown(word)
    }
}

/// Strips one leading and one trailing parenthesis while the text starts with
/// `((` and ends with `)`.
pub fn trim_outer_parens(text: &str) -> &str {
    let mut trimmed = text.trim();
    while trimmed.len() >= 3
        && trimmed.starts_with("((")
        && trimmed.ends_with(')')
    {
        trimmed = &trimmed[1..trimmed.len() - 1];
    }
    trimmed
}
