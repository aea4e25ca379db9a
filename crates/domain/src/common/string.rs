//! String conversion utilities.

/// Upper-cases the first character of `word`, leaving the rest untouched.
///
/// Provider resource names are lower-case slugs (`"bulbasaur"`, `"fire"`);
/// this is the display form used for names and category labels.
///
/// # Examples
///
/// ```
/// use pokedex_domain::common::capitalize;
///
/// assert_eq!(capitalize("bulbasaur"), "Bulbasaur");
/// assert_eq!(capitalize("mr-mime"), "Mr-mime");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
