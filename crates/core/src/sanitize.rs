/// Cleans a caller-supplied value before it is placed into a prompt.
///
/// An absent or empty `input` is replaced by `fallback`. Every character
/// outside `[A-Za-z0-9_ -]` is then removed. The result may be empty when
/// nothing allowed is left.
pub fn clean(input: Option<&str>, fallback: &str) -> String {
    let raw = match input {
        Some(value) if !value.is_empty() => value,
        _ => fallback,
    };

    raw.chars().filter(|c| is_allowed(*c)).collect()
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | ' ' | '-')
}
