pub mod parallelism;

#[inline]
pub fn splitting_chars() -> &'static str {
    r##"«»'’`´‘],.:;!?/\()<=>„“”"+#…*"##
}

/// Split a text at the points where the given function is true.
/// Keeps the separators. See https://stackoverflow.com/a/40296745.
fn split<F>(text: &str, split_func: F) -> Vec<&str>
where
    F: Fn(char) -> bool,
{
    let mut result = Vec::new();
    let mut last = 0;
    for (index, matched) in text.match_indices(split_func) {
        if last != index {
            result.push(&text[last..index]);
        }
        result.push(matched);
        last = index + matched.len();
    }
    if last < text.len() {
        result.push(&text[last..]);
    }

    result
}

/// Splits a text into words and punctuation. Whitespace is dropped.
pub fn split_tokens(text: &str) -> Vec<&str> {
    split(text, |c: char| {
        c.is_whitespace() || splitting_chars().contains(c)
    })
    .into_iter()
    .filter(|token| !token.trim().is_empty())
    .collect()
}
