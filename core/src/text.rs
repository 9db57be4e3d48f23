use alloc::string::String;

const ITALIC_OPEN: &str = "<i>";
const ITALIC_CLOSE: &str = "</i>";

/// Removes an italic wrapper from provider text, but only when it encloses the whole string.
pub fn strip_italics(raw: &str) -> &str {
    raw.strip_prefix(ITALIC_OPEN)
        .and_then(|rest| rest.strip_suffix(ITALIC_CLOSE))
        .unwrap_or(raw)
}

/// Lowercases `raw`, then uppercases each word character at the start or after whitespace.
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut at_word_start = true;
    for ch in raw.chars().flat_map(char::to_lowercase) {
        if at_word_start && is_word_char(ch) {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = ch.is_whitespace();
    }
    out
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
