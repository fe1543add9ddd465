//! Free-text number extraction.
//!
//! Color inputs arrive as whatever the user typed: `rgb(12, 34, 56)`,
//! `12 34 56`, `hsl(120, 50%, 50%)`. Rather than demanding an exact
//! grammar, the session scans the text for embedded numbers in order of
//! appearance and defaults anything missing to zero, so input parsing can
//! never fail outright.

/// Extracts the first `N` signed decimal numbers from `input`.
///
/// A number is an optional `-` followed by digits and an optional
/// fractional part. Missing numbers default to `0.0`; extras beyond `N`
/// are ignored. Never panics or errors.
pub fn numbers<const N: usize>(input: &str) -> [f32; N] {
    let mut out = [0.0; N];
    let mut found = 0;
    let bytes = input.as_bytes();
    let mut i = 0;

    while i < bytes.len() && found < N {
        let starts_number = bytes[i].is_ascii_digit()
            || (bytes[i] == b'-' && bytes.get(i + 1).is_some_and(u8::is_ascii_digit));
        if !starts_number {
            i += 1;
            continue;
        }

        let start = i;
        if bytes[i] == b'-' {
            i += 1;
        }
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        // Fractional part only counts when digits follow the dot.
        if i < bytes.len() && bytes[i] == b'.' && bytes.get(i + 1).is_some_and(u8::is_ascii_digit)
        {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }

        if let Ok(value) = input[start..i].parse::<f32>() {
            out[found] = value;
            found += 1;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::numbers;

    #[test]
    fn extracts_in_order_of_appearance() {
        assert_eq!(numbers::<3>("rgb(12, 34, 56)"), [12.0, 34.0, 56.0]);
        assert_eq!(numbers::<3>("56 34 12"), [56.0, 34.0, 12.0]);
    }

    #[test]
    fn missing_numbers_default_to_zero() {
        assert_eq!(numbers::<3>("rgb(12)"), [12.0, 0.0, 0.0]);
        assert_eq!(numbers::<4>(""), [0.0; 4]);
        assert_eq!(numbers::<4>("cmyk"), [0.0; 4]);
    }

    #[test]
    fn extras_are_ignored() {
        assert_eq!(numbers::<2>("1 2 3 4"), [1.0, 2.0]);
    }

    #[test]
    fn handles_signs_and_decimals() {
        assert_eq!(numbers::<3>("-5, 0.25, -0.5"), [-5.0, 0.25, -0.5]);
        // A dash without digits is a separator, not a sign.
        assert_eq!(numbers::<2>("3 - 4"), [3.0, 4.0]);
        // A trailing dot belongs to the text, not the number.
        assert_eq!(numbers::<2>("12. 5"), [12.0, 5.0]);
    }
}
