//! Display name to slug transliteration.
//!
//! Names are split into words the way a camel-case aware kebab-caser would:
//! acronym runs, capitalized or lowercase words with optional trailing
//! digits, lone capitals, and digit runs. Characters that belong to none of
//! those (spaces, punctuation, non-ASCII letters) are carried through as-is,
//! and separator runs (whitespace, `_`, `-`) become single hyphens.

/// Derive a slug from a game's display name.
///
/// # Examples
///
/// ```
/// use gale_catalog::slug::derive_slug;
///
/// assert_eq!(derive_slug("Risk of Rain 2"), "risk-of-rain-2");
/// assert_eq!(derive_slug("GDWeave"), "gd-weave");
/// assert_eq!(derive_slug("NASAMission"), "nasa-mission");
/// assert_eq!(derive_slug(""), "");
/// ```
pub fn derive_slug(name: &str) -> String {
    spaced_words(name)
        .split(is_separator)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '_' || c == '-'
}

/// Rewrite every recognized token as a space followed by its lowercase form.
fn spaced_words(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        match token_end(&chars, i) {
            Some(end) => {
                out.push(' ');
                out.extend(chars[i..end].iter().map(|c| c.to_ascii_lowercase()));
                i = end;
            }
            None => {
                out.push(chars[i]);
                i += 1;
            }
        }
    }

    out
}

/// End index of the token starting at `start`, trying each token kind in
/// priority order.
fn token_end(chars: &[char], start: usize) -> Option<usize> {
    acronym_end(chars, start)
        .or_else(|| word_end(chars, start))
        .or_else(|| chars[start].is_ascii_uppercase().then_some(start + 1))
        .or_else(|| digits_end(chars, start))
}

/// Two or more capitals, longest first, that end either where a capitalized
/// word begins ("NASAMission" -> "NASA") or at a word boundary.
fn acronym_end(chars: &[char], start: usize) -> Option<usize> {
    let run = count_while(chars, start, |c| c.is_ascii_uppercase());
    (2..=run)
        .rev()
        .map(|len| start + len)
        .find(|&end| starts_capitalized_word(chars, end) || is_word_boundary(chars, end))
}

/// Optional capital, one or more lowercase letters, optional digits.
fn word_end(chars: &[char], start: usize) -> Option<usize> {
    let mut i = start;
    if chars[i].is_ascii_uppercase() {
        i += 1;
    }

    let lower = count_while(chars, i, |c| c.is_ascii_lowercase());
    if lower == 0 {
        return None;
    }
    i += lower;

    Some(i + count_while(chars, i, |c| c.is_ascii_digit()))
}

fn digits_end(chars: &[char], start: usize) -> Option<usize> {
    match count_while(chars, start, |c| c.is_ascii_digit()) {
        0 => None,
        n => Some(start + n),
    }
}

fn starts_capitalized_word(chars: &[char], at: usize) -> bool {
    matches!(
        (chars.get(at), chars.get(at + 1)),
        (Some(upper), Some(lower)) if upper.is_ascii_uppercase() && lower.is_ascii_lowercase()
    )
}

/// Boundary after a word character: the next character is not a word
/// character, or the input ends.
fn is_word_boundary(chars: &[char], at: usize) -> bool {
    chars.get(at).is_none_or(|&c| !is_word_char(c))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn count_while(chars: &[char], start: usize, pred: impl Fn(char) -> bool) -> usize {
    chars[start..].iter().take_while(|&&c| pred(c)).count()
}
