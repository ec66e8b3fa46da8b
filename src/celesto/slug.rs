//! Topic to folder-name normalization.
//!
//! A slug is the topic trimmed, lowercased, with every whitespace run turned
//! into a single `_` and everything outside `[a-z0-9_]` dropped:
//!
//! ```
//! use celesto::slug::to_underscore_case;
//!
//! assert_eq!(to_underscore_case("   Hello World!   "), "hello_world");
//! assert_eq!(to_underscore_case("Hello@World#2023!"), "helloworld2023");
//! ```
//!
//! Applying it twice gives the same result as applying it once.

pub fn to_underscore_case(topic: &str) -> String {
    let mut slug = String::with_capacity(topic.len());
    let mut in_whitespace = false;

    for c in topic.trim().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('_');
                in_whitespace = true;
            }
            continue;
        }
        in_whitespace = false;

        for lower in c.to_lowercase() {
            if lower.is_ascii_lowercase() || lower.is_ascii_digit() || lower == '_' {
                slug.push(lower);
            }
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_words_and_digits() {
        assert_eq!(to_underscore_case("Hello World 2023"), "hello_world_2023");
    }

    #[test]
    fn strips_punctuation() {
        assert_eq!(to_underscore_case("Hello World!"), "hello_world");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(to_underscore_case("   Hello World!   "), "hello_world");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(to_underscore_case("Hello    World 2023"), "hello_world_2023");
        assert_eq!(to_underscore_case("Hello \t\n World"), "hello_world");
    }

    #[test]
    fn drops_special_characters() {
        assert_eq!(to_underscore_case("Hello@World#2023!"), "helloworld2023");
    }

    #[test]
    fn keeps_existing_underscores() {
        assert_eq!(to_underscore_case("snake_case topic"), "snake_case_topic");
    }

    #[test]
    fn drops_non_ascii_letters() {
        assert_eq!(to_underscore_case("Café Ünïcode"), "caf_ncode");
    }

    #[test]
    fn is_idempotent() {
        let topics = [
            "Hello World 2023",
            "Hello World!",
            "   Hello World!   ",
            "Hello    World 2023",
            "Hello@World#2023!",
            "AI",
            "",
            "  !! ",
        ];
        for topic in topics {
            let once = to_underscore_case(topic);
            assert_eq!(to_underscore_case(&once), once, "topic: {:?}", topic);
        }
    }
}
