/**
 * Profanity Filter
 *
 * Replaces banned words in a chirp body with `****`. Matching is whole-word
 * and case-insensitive: a banned word with punctuation attached survives
 * unchanged. Runs of whitespace collapse to single spaces.
 */

/// Words replaced with `****` in chirp bodies
const PROFANE_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Clean a chirp body
pub fn clean_body(body: &str) -> String {
    body.split_whitespace()
        .map(|word| {
            if PROFANE_WORDS.contains(&word.to_lowercase().as_str()) {
                "****"
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clean_word_is_untouched() {
        assert_eq!(clean_body("I had something interesting for breakfast"), "I had something interesting for breakfast");
    }

    #[test]
    fn test_profane_word_is_replaced() {
        assert_eq!(
            clean_body("I hear Mastodon is better than Chirpy. sharbert I need to migrate"),
            "I hear Mastodon is better than Chirpy. **** I need to migrate"
        );
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(
            clean_body("I really need a KERFUFFLE to go to bed sooner, Fornax !"),
            "I really need a **** to go to bed sooner, **** !"
        );
    }

    #[test]
    fn test_punctuation_defeats_the_match() {
        // Whole-word only: "Sharbert!" is not "sharbert".
        assert_eq!(
            clean_body("I hear Mastodon is better than Chirpy. Sharbert!"),
            "I hear Mastodon is better than Chirpy. Sharbert!"
        );
    }

    #[test]
    fn test_whitespace_collapses() {
        assert_eq!(clean_body("hello    world"), "hello world");
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(clean_body(""), "");
    }
}
