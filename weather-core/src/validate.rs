//! Format checks for user-supplied location codes.
//!
//! These are the only guard between argv and the request URL: the URL builder
//! embeds both codes verbatim, so anything that passes here must already be
//! URL-safe (ASCII digits and ASCII letters).

/// Exactly five ASCII digits.
pub fn is_valid_zip(zip: &str) -> bool {
    zip.len() == 5 && zip.bytes().all(|b| b.is_ascii_digit())
}

/// Two or three ASCII letters, case is left untouched.
pub fn is_valid_country(country: &str) -> bool {
    (2..=3).contains(&country.len()) && country.bytes().all(|b| b.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_five_digit_zips() {
        for zip in ["10001", "00000", "99999", "02134"] {
            assert!(is_valid_zip(zip), "{zip} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_zips() {
        for zip in ["", "1000", "100011", "1000a", "10 01", " 1000", "1000١", "-1000"] {
            assert!(!is_valid_zip(zip), "{zip:?} should be invalid");
        }
    }

    #[test]
    fn accepts_two_or_three_letter_countries() {
        for country in ["US", "us", "GBR", "Ca", "deu"] {
            assert!(is_valid_country(country), "{country} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_countries() {
        for country in ["", "U", "U1", "ABCD", "U S", "ÉS", "G-B"] {
            assert!(!is_valid_country(country), "{country:?} should be invalid");
        }
    }
}
