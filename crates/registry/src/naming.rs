//! PascalCase class name to snake_case module file name.

/// Module file name generated for a PascalCase class name.
///
/// A separator goes before an uppercase letter that follows a non-uppercase
/// character, or that ends an acronym run (next char lowercase), and before a
/// digit that follows a lowercase letter. Acronym runs stay together:
/// `UUIDValue` -> `uuid_value`.
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 {
            let prev = chars[i - 1];
            let boundary = if c.is_uppercase() {
                !prev.is_uppercase() || chars.get(i + 1).is_some_and(|n| n.is_lowercase())
            } else if c.is_ascii_digit() {
                prev.is_lowercase()
            } else {
                false
            };
            if boundary && prev != '_' {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }
    out
}
