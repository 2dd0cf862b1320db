//! CNPJ (Brazilian company registry number) helpers

/// Number of digits in a CNPJ
pub const CNPJ_LEN: usize = 14;

/// Strip everything that is not an ASCII digit
pub fn normalize_cnpj(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Render as `00.000.000/0000-00`, or `None` if the input does not hold
/// exactly fourteen digits
pub fn format_cnpj(input: &str) -> Option<String> {
    let digits = normalize_cnpj(input);
    if digits.len() != CNPJ_LEN {
        return None;
    }
    Some(format!(
        "{}.{}.{}/{}-{}",
        &digits[0..2],
        &digits[2..5],
        &digits[5..8],
        &digits[8..12],
        &digits[12..14]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation() {
        assert_eq!(normalize_cnpj("12.345.678/0001-90"), "12345678000190");
        assert_eq!(normalize_cnpj(" abc "), "");
    }

    #[test]
    fn formats_only_complete_numbers() {
        assert_eq!(format_cnpj("12345678000190").as_deref(), Some("12.345.678/0001-90"));
        assert_eq!(format_cnpj("1234"), None);
    }
}
