//! Case conversion
//!
//! Class names and css keys are stored as written (`backgroundColor`,
//! `MyButton`) and rendered kebab-cased (`background-color`, `my-button`).

/// Convert camelCase / PascalCase / snake_case to kebab-case
///
/// Word boundaries: `-`, `_` and whitespace; a lowercase letter or digit
/// followed by an uppercase letter; the last capital of an uppercase run
/// that is followed by a lowercase letter (`HTMLButton` -> `html-button`).
pub fn to_kebab_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);
    let mut pending_hyphen = false;

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == '_' || c.is_whitespace() {
            pending_hyphen = !result.is_empty();
            continue;
        }

        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
                pending_hyphen = !result.is_empty();
            }
        }

        if pending_hyphen {
            result.push('-');
            pending_hyphen = false;
        }
        result.extend(c.to_lowercase());
    }

    result
}
