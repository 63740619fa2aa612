//! # Field Validation
//!
//! Input validation for the reservation flow. Every function takes the raw
//! text a user typed into the chat and returns either the cleaned value or
//! an error whose `Display` is the ready-to-send reply.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Validation Layers                            │
//! │                                                                     │
//! │  Layer 1: Chat transport                                            │
//! │  ├── delivers raw message text (any language, any junk)             │
//! │  └── guarantees nothing about structure                             │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE                                               │
//! │  ├── trim / strip separators / normalize                            │
//! │  └── bound and format checks with user-facing messages              │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Reservation state machine (host application)              │
//! │  └── stores only values that passed Layer 2                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Length bounds count characters, not bytes. Most input here is Cyrillic
//! and two bytes per character, so byte lengths would halve every limit.
//!
//! Date and time validators return `Option` instead of a message-carrying
//! error: the reservation flow re-prompts with its own text for those two
//! fields (see [`crate::error`]).
//!
//! ## Usage
//! ```rust
//! use parkbot_core::validation::{validate_name, validate_phone};
//!
//! assert_eq!(validate_phone("+7 (999) 123-45-67").unwrap(), "89991234567");
//! assert!(validate_name("Ян").is_ok());
//! assert!(validate_name("Я").is_err());
//! ```

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ValidationSettings;
use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// Field Bounds
// =============================================================================
// All bounds are in characters.

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 50;
pub const SPOT_MAX: usize = 10;
pub const PLATE_MIN: usize = 2;
pub const PLATE_MAX: usize = 15;
pub const BRAND_MIN: usize = 2;
pub const BRAND_MAX: usize = 50;
pub const COLOR_MIN: usize = 2;
pub const COLOR_MAX: usize = 30;

/// Digits in a normalized Russian phone number.
pub const PHONE_DIGITS: usize = 11;
/// Digits in a bank card number.
pub const CARD_DIGITS: usize = 16;

// =============================================================================
// Patterns
// =============================================================================

/// Russian mobile numbers as people actually type them: optional +7/7/8
/// prefix, optional spaces, dashes and parens, body starting with 4, 8 or 9.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+7|7|8)?[\s\-]?\(?[489][0-9]{2}\)?[\s\-]?[0-9]{3}[\s\-]?[0-9]{2}[\s\-]?[0-9]{2}$")
        .expect("phone pattern is valid")
});

/// Zero-padded `DD.MM.YYYY`. Calendar validity is checked by chrono
/// afterwards; chrono alone would also accept unpadded `1.1.2025`.
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0[1-9]|[12]\d|3[01])\.(0[1-9]|1[0-2])\.\d{4}$").expect("date pattern is valid"));

/// Zero-padded 24-hour `HH:MM`.
static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]\d|2[0-3]):([0-5]\d)$").expect("time pattern is valid"));

// =============================================================================
// Contact Fields
// =============================================================================

/// Validates the customer's display name.
///
/// ## Rules
/// - trimmed
/// - 2 to 50 characters
pub fn validate_name(input: &str) -> ValidationResult<String> {
    validate_length(input, "Имя", NAME_MIN, NAME_MAX)
}

/// Validates and normalizes a Russian mobile number.
///
/// Accepts the forms people type, `+7 (999) 123-45-67` or `89991234567`
/// or `7 999 123 45 67`, and normalizes all of them to 11 digits with a
/// leading `8`.
///
/// ## Example
/// ```rust
/// use parkbot_core::validation::validate_phone;
///
/// assert_eq!(validate_phone("+79991234567").unwrap(), "89991234567");
/// assert_eq!(validate_phone("79991234567").unwrap(), "89991234567");
/// assert_eq!(validate_phone("89991234567").unwrap(), "89991234567");
/// assert!(validate_phone("12345").is_err());
/// ```
pub fn validate_phone(input: &str) -> ValidationResult<String> {
    let input = input.trim();
    if !PHONE_RE.is_match(input) {
        return Err(ValidationError::PhoneFormat);
    }

    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    let cleaned = if let Some(rest) = cleaned.strip_prefix("+7") {
        format!("8{}", rest)
    } else if cleaned.len() == PHONE_DIGITS && cleaned.starts_with('7') {
        format!("8{}", &cleaned[1..])
    } else {
        cleaned
    };

    if cleaned.len() != PHONE_DIGITS {
        return Err(ValidationError::DigitCount {
            expected: PHONE_DIGITS,
        });
    }

    Ok(cleaned)
}

/// Validates a bank card number.
///
/// Separators are stripped first, so `1234 5678 9012 3456` works. With
/// [`ValidationSettings::strict_card`] set the number must also pass
/// [`luhn_check`]; lenient mode only checks the digit count, because the
/// bot merely relays the number for a manual transfer.
pub fn validate_card(input: &str, settings: &ValidationSettings) -> ValidationResult<String> {
    let cleaned: String = input.chars().filter(char::is_ascii_digit).collect();

    if cleaned.len() != CARD_DIGITS {
        return Err(ValidationError::DigitCount {
            expected: CARD_DIGITS,
        });
    }

    if settings.strict_card && !luhn_check(&cleaned) {
        return Err(ValidationError::CardChecksum);
    }

    Ok(cleaned)
}

/// Luhn checksum over a digit string.
///
/// Doubles every second digit from the right, folds doubles above 9 back
/// into one digit, sums everything. Valid when the sum is a multiple of 10.
///
/// ## Example
/// ```rust
/// use parkbot_core::validation::luhn_check;
///
/// assert!(luhn_check("4532015112830366"));
/// assert!(!luhn_check("4532015112830367"));
/// ```
pub fn luhn_check(digits: &str) -> bool {
    let sum: u32 = digits
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}

// =============================================================================
// Date & Time Fields
// =============================================================================

/// Validates a reservation date in `DD.MM.YYYY` form.
///
/// ## Rules
/// - zero-padded `DD.MM.YYYY` (`1.1.2025` is rejected)
/// - a real calendar date (`31.02.2025` is rejected)
/// - not before today in local time, compared at date granularity,
///   so booking for later today stays possible
///
/// `None` carries no reason; the reservation flow re-prompts with its
/// own message for this field.
pub fn validate_date(input: &str) -> Option<NaiveDate> {
    validate_date_on(input, Local::now().date_naive())
}

/// Clock-free core of [`validate_date`].
fn validate_date_on(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let input = input.trim();
    if !DATE_RE.is_match(input) {
        return None;
    }

    let parsed = NaiveDate::parse_from_str(input, "%d.%m.%Y").ok()?;
    if parsed < today {
        return None;
    }

    Some(parsed)
}

/// Validates a time of day in 24-hour `HH:MM` form.
///
/// Returns the trimmed input on success. Unpadded `9:30` is rejected;
/// the flow's inline keyboards only ever offer padded values.
pub fn validate_time(input: &str) -> Option<&str> {
    let input = input.trim();
    if TIME_RE.is_match(input) {
        Some(input)
    } else {
        None
    }
}

// =============================================================================
// Parking & Vehicle Fields
// =============================================================================

/// Validates a parking spot label (`A-12`, `7`, `B03`).
///
/// ## Rules
/// - trimmed, non-empty
/// - at most 10 characters
pub fn validate_spot_number(input: &str) -> ValidationResult<String> {
    let value = input.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: "Номер места",
        });
    }
    if value.chars().count() > SPOT_MAX {
        return Err(ValidationError::TooLong {
            field: "Номер места",
            max: SPOT_MAX,
        });
    }

    Ok(value.to_string())
}

/// Validates a license plate and uppercases it (`а123вс777` → `А123ВС777`).
///
/// ## Rules
/// - trimmed, uppercased
/// - 2 to 15 characters
pub fn validate_license_plate(input: &str) -> ValidationResult<String> {
    validate_length(&input.trim().to_uppercase(), "Госномер", PLATE_MIN, PLATE_MAX)
}

/// Validates a car brand ("Lada", "Kia Rio").
///
/// ## Rules
/// - trimmed
/// - 2 to 50 characters
pub fn validate_car_brand(input: &str) -> ValidationResult<String> {
    validate_length(input, "Марка", BRAND_MIN, BRAND_MAX)
}

/// Validates a car color.
///
/// ## Rules
/// - trimmed
/// - 2 to 30 characters
pub fn validate_car_color(input: &str) -> ValidationResult<String> {
    validate_length(input, "Цвет", COLOR_MIN, COLOR_MAX)
}

/// Shared trim-and-bound check for free-text fields.
fn validate_length(
    input: &str,
    field: &'static str,
    min: usize,
    max: usize,
) -> ValidationResult<String> {
    let value = input.trim();
    let chars = value.chars().count();

    if chars < min {
        return Err(ValidationError::TooShort { field, min });
    }
    if chars > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("  Ян  ").unwrap(), "Ян");
        assert_eq!(validate_name("Анна-Мария").unwrap(), "Анна-Мария");

        assert!(matches!(
            validate_name("Я"),
            Err(ValidationError::TooShort { min: 2, .. })
        ));
        assert!(matches!(
            validate_name(""),
            Err(ValidationError::TooShort { min: 2, .. })
        ));
        let long = "а".repeat(51);
        assert!(matches!(
            validate_name(&long),
            Err(ValidationError::TooLong { max: 50, .. })
        ));
    }

    #[test]
    fn test_length_bounds_count_chars_not_bytes() {
        // 50 Cyrillic characters are 100 bytes and still a valid name
        let name = "а".repeat(50);
        assert_eq!(validate_name(&name).unwrap(), name);
    }

    #[test]
    fn test_validate_phone_normalizes_prefixes() {
        assert_eq!(validate_phone("+79991234567").unwrap(), "89991234567");
        assert_eq!(validate_phone("79991234567").unwrap(), "89991234567");
        assert_eq!(validate_phone("89991234567").unwrap(), "89991234567");
    }

    #[test]
    fn test_validate_phone_accepts_formatted_input() {
        assert_eq!(validate_phone("+7 (999) 123-45-67").unwrap(), "89991234567");
        assert_eq!(validate_phone("8 999 123 45 67").unwrap(), "89991234567");
        assert_eq!(validate_phone("8(999)123-45-67").unwrap(), "89991234567");
    }

    #[test]
    fn test_validate_phone_rejects_garbage() {
        assert!(matches!(
            validate_phone("12345"),
            Err(ValidationError::PhoneFormat)
        ));
        assert!(matches!(
            validate_phone("abc"),
            Err(ValidationError::PhoneFormat)
        ));
        assert!(matches!(
            validate_phone(""),
            Err(ValidationError::PhoneFormat)
        ));
    }

    #[test]
    fn test_validate_phone_rejects_short_body() {
        // looks like a phone, but normalizes to 10 digits
        assert!(matches!(
            validate_phone("9991234567"),
            Err(ValidationError::DigitCount { expected: 11 })
        ));
    }

    #[test]
    fn test_luhn_check() {
        assert!(luhn_check("4532015112830366"));
        assert!(!luhn_check("4532015112830367"));
    }

    #[test]
    fn test_validate_card_lenient_skips_checksum() {
        let settings = ValidationSettings { strict_card: false };

        // checksum-failing number is still accepted when lenient
        assert_eq!(
            validate_card("4532 0151 1283 0367", &settings).unwrap(),
            "4532015112830367"
        );
    }

    #[test]
    fn test_validate_card_strict_enforces_checksum() {
        let settings = ValidationSettings { strict_card: true };

        assert_eq!(
            validate_card("4532015112830366", &settings).unwrap(),
            "4532015112830366"
        );
        assert!(matches!(
            validate_card("4532015112830367", &settings),
            Err(ValidationError::CardChecksum)
        ));
    }

    #[test]
    fn test_validate_card_digit_count() {
        let settings = ValidationSettings::default();

        assert!(matches!(
            validate_card("1234", &settings),
            Err(ValidationError::DigitCount { expected: 16 })
        ));
        assert!(matches!(
            validate_card("12345678901234567", &settings),
            Err(ValidationError::DigitCount { expected: 16 })
        ));
    }

    #[test]
    fn test_validate_date_rules() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();

        assert_eq!(validate_date_on("10.06.2025", today), Some(today));
        assert_eq!(
            validate_date_on("11.06.2025", today),
            NaiveDate::from_ymd_opt(2025, 6, 11)
        );
        // before today
        assert_eq!(validate_date_on("09.06.2025", today), None);
        // not a real calendar date
        assert_eq!(validate_date_on("31.02.2025", today), None);
        // unpadded
        assert_eq!(validate_date_on("1.1.2026", today), None);
        // wrong separator
        assert_eq!(validate_date_on("10/06/2025", today), None);
    }

    #[test]
    fn test_validate_date_uses_wall_clock() {
        assert!(validate_date("31.12.2099").is_some());
        assert!(validate_date("01.01.2020").is_none());
    }

    #[test]
    fn test_validate_time() {
        assert_eq!(validate_time("00:00"), Some("00:00"));
        assert_eq!(validate_time("23:59"), Some("23:59"));
        assert_eq!(validate_time(" 09:30 "), Some("09:30"));

        assert_eq!(validate_time("24:00"), None);
        assert_eq!(validate_time("12:60"), None);
        assert_eq!(validate_time("9:30"), None);
        assert_eq!(validate_time("12-30"), None);
        assert_eq!(validate_time(""), None);
    }

    #[test]
    fn test_validate_spot_number() {
        assert_eq!(validate_spot_number(" A-12 ").unwrap(), "A-12");
        assert_eq!(validate_spot_number("7").unwrap(), "7");

        assert!(matches!(
            validate_spot_number("   "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_spot_number("12345678901"),
            Err(ValidationError::TooLong { max: 10, .. })
        ));
    }

    #[test]
    fn test_validate_license_plate_uppercases() {
        assert_eq!(validate_license_plate("а123вс777").unwrap(), "А123ВС777");
        assert_eq!(validate_license_plate(" x555xx ").unwrap(), "X555XX");

        assert!(validate_license_plate("a").is_err());
        assert!(validate_license_plate(&"A".repeat(16)).is_err());
    }

    #[test]
    fn test_validate_car_brand_and_color() {
        assert_eq!(validate_car_brand(" Lada ").unwrap(), "Lada");
        assert_eq!(validate_car_color("красный").unwrap(), "красный");

        assert!(matches!(
            validate_car_brand("L"),
            Err(ValidationError::TooShort { min: 2, .. })
        ));
        assert!(matches!(
            validate_car_color(&"к".repeat(31)),
            Err(ValidationError::TooLong { max: 30, .. })
        ));
    }

    #[test]
    fn test_error_messages_are_reply_ready() {
        let err = validate_name("Я").unwrap_err();
        assert_eq!(err.to_string(), "❌ Имя: не менее 2 символов");

        let err = validate_phone("abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "❌ Неверный формат. +7XXXXXXXXXX или 8XXXXXXXXXX"
        );
    }
}
