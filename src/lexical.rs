//! Pure string transforms backing the derived naming conventions.
//!
//! The pluralization and underscore rules are deliberately naive and are
//! load-bearing for generated output: `"day"` pluralizes to `"daies"` and
//! acronym runs are not split. Consumers depend on these exact strings, so
//! the heuristics must not be "corrected".

/// Uppercase the first character, leave the rest unchanged.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Naive English pluralization: `-s` → `-ses`, `-y` → `-ies`, else append `s`.
pub fn pluralize(word: &str) -> String {
    if word.ends_with('s') {
        format!("{word}es")
    } else if let Some(stem) = word.strip_suffix('y') {
        format!("{stem}ies")
    } else {
        format!("{word}s")
    }
}

/// Insert `_` at every lowercase-then-uppercase boundary, lowercasing the
/// uppercase letter. Consecutive uppercase letters are left alone.
pub fn underscore(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lowercase = false;
    for ch in name.chars() {
        if prev_lowercase && ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
        prev_lowercase = ch.is_ascii_lowercase();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_uppercases_only_the_first_character() {
        assert_eq!(capitalize("fooBar"), "FooBar");
        assert_eq!(capitalize("post"), "Post");
        assert_eq!(capitalize("Post"), "Post");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn pluralize_follows_the_three_rules() {
        assert_eq!(pluralize("cow"), "cows");
        assert_eq!(pluralize("dress"), "dresses");
        assert_eq!(pluralize("bunny"), "bunnies");
    }

    #[test]
    fn pluralize_keeps_the_known_vowel_y_quirk() {
        // Incorrect English, but fixed behavior consumers rely on.
        assert_eq!(pluralize("day"), "daies");
    }

    #[test]
    fn underscore_splits_camel_case_boundaries() {
        assert_eq!(underscore("fooBar"), "foo_bar");
        assert_eq!(underscore("fooBarBaz"), "foo_bar_baz");
        assert_eq!(underscore("title"), "title");
    }

    #[test]
    fn underscore_leaves_acronym_runs_alone() {
        assert_eq!(underscore("HTTPServer"), "HTTPServer");
        assert_eq!(underscore("useTLS"), "use_tLS");
    }
}
