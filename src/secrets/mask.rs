//! Display masking for configured credentials.

/// Mask shown for values too short to reveal any part of.
pub const FULL_MASK: &str = "****";

/// Number of characters revealed at each end of a long value.
const REVEAL: usize = 4;

/// Mask a configured value for display.
///
/// Values longer than eight characters show their first and last four
/// characters around an ellipsis; anything shorter is fully masked.
/// Lengths are counted in characters, not bytes.
///
/// # Example
///
/// ```
/// use workshop_check::secrets::mask_value;
///
/// assert_eq!(mask_value("123456789"), "1234...6789");
/// assert_eq!(mask_value("12345678"), "****");
/// ```
pub fn mask_value(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= REVEAL * 2 {
        return FULL_MASK.to_string();
    }

    let head: String = chars[..REVEAL].iter().collect();
    let tail: String = chars[chars.len() - REVEAL..].iter().collect();
    format!("{}...{}", head, tail)
}
