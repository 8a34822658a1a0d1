/// Splits a raw query into lowercase, non-empty terms.
///
/// The query is trimmed, commas become spaces, the text is lowercased and a
/// trailing space is appended so the final term is cut off by the same rule
/// as every interior one. Only the space character separates terms.
/// Duplicates are kept in the order they appear.
pub fn tokenize(raw_query: &str) -> Vec<String> {
    let mut remainder = raw_query.trim().replace(',', " ").to_lowercase();
    remainder.push(' ');

    let mut tokens = Vec::new();
    let mut rest = remainder.as_str();
    while let Some((head, tail)) = rest.split_once(' ') {
        if !head.is_empty() {
            tokens.push(head.to_string());
        }
        rest = tail;
    }
    tokens
}
