/// Lowercases text and squeezes punctuation to single spaces, so that
/// `"When is the wedding?"` and `"when's the wedding"` compare on their
/// lexical content rather than their typography.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_space = true;
        }
    }

    out
}

/// Splits already-normalized text into tokens.
pub fn tokenize(normalized: &str) -> Vec<String> {
    normalized
        .split_whitespace()
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(normalize("When is the wedding?"), "when is the wedding");
        assert_eq!(normalize("when's the wedding"), "when s the wedding");
    }

    #[test]
    fn collapses_runs_of_separators() {
        assert_eq!(normalize("  How --  do I   RSVP?! "), "how do i rsvp");
    }

    #[test]
    fn keeps_digits_and_non_ascii_letters() {
        assert_eq!(normalize("8 AM, pagi"), "8 am pagi");
    }

    #[test]
    fn tokenizes_normalized_text() {
        assert_eq!(tokenize("when is the wedding"), ["when", "is", "the", "wedding"]);
        assert!(tokenize("").is_empty());
    }
}
