//! Answer matching for submitted answers.
//!
//! Matching is exact after trimming: no case folding and no whitespace
//! collapsing inside the answer.

/// Normalize a submitted answer (trim surrounding whitespace).
pub fn normalize_answer(raw: &str) -> &str {
    raw.trim()
}

/// Whether `raw` matches one of `accepted`.
///
/// A blank submission is never accepted, so a card whose answer column is
/// empty cannot be satisfied.
pub fn is_accepted(raw: &str, accepted: &[String]) -> bool {
    let normalized = normalize_answer(raw);
    if normalized.is_empty() {
        return false;
    }
    accepted.iter().any(|answer| answer == normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_match() {
        assert!(is_accepted("I eat", &answers(&["I eat", "i eat"])));
        assert!(is_accepted("i eat", &answers(&["I eat", "i eat"])));
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert!(is_accepted("  the dog \n", &answers(&["the dog"])));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!is_accepted("The Dog", &answers(&["the dog"])));
    }

    #[test]
    fn test_inner_whitespace_is_significant() {
        assert!(!is_accepted("the  dog", &answers(&["the dog"])));
    }

    #[test]
    fn test_blank_never_accepted() {
        assert!(!is_accepted("", &answers(&[""])));
        assert!(!is_accepted("   ", &answers(&["", "x"])));
    }

    #[test]
    fn test_same_input_same_verdict() {
        let accepted = answers(&["the dog"]);
        assert_eq!(is_accepted("the cat", &accepted), is_accepted("the cat", &accepted));
        assert_eq!(is_accepted(" the dog", &accepted), is_accepted("the dog ", &accepted));
    }
}
