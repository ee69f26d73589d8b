//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Uzbek mobile number in international form: +998 plus 9 digits
static UZ_MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+998\d{9}$").unwrap());

// International phone number regex (E.164 format)
static INTERNATIONAL_PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").unwrap());

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a phone number is a valid Uzbek mobile number
pub fn is_valid_uzbek_mobile(phone: &str) -> bool {
    UZ_MOBILE_REGEX.is_match(&normalize_phone(phone))
}

/// Check if a phone number is valid E.164
pub fn is_valid_international_phone(phone: &str) -> bool {
    INTERNATIONAL_PHONE_REGEX.is_match(&normalize_phone(phone))
}

/// Check if a phone number is acceptable for verification
/// (Uzbek mobile or any E.164 number)
pub fn is_valid_phone(phone: &str) -> bool {
    let normalized = normalize_phone(phone);
    is_valid_uzbek_mobile(&normalized) || is_valid_international_phone(&normalized)
}

/// Mask a phone number for logs and error messages (e.g. +998****4567)
pub fn mask_phone(phone: &str) -> String {
    let normalized = normalize_phone(phone);
    if normalized.len() >= 8 {
        format!(
            "{}****{}",
            &normalized[0..4],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}
