//! # Error Types
//!
//! Typed errors for parkbot-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Error Types                             │
//! │                                                                 │
//! │  ValidationError  Bad user input. Display renders the exact     │
//! │                   Russian message the bot sends back, marker    │
//! │                   included, so callers just .to_string() it.    │
//! │                                                                 │
//! │  ConfigError      Broken config.toml or environment. English,   │
//! │                   for the operator log, never shown to users.   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Date and time input is the one exception: those validators signal
//! failure with `Option::None` and no message, because the reservation
//! flow re-prompts with its own text for them. No variant exists here.
//!
//! ## Design Principles
//! 1. `thiserror` derives, no hand-written `Display` impls
//! 2. Errors are enum variants, never bare `String`s
//! 3. Every `ValidationError` variant renders a complete user-facing message

use thiserror::Error;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Input validation errors.
///
/// The `Display` output is the reply text for the chat, in Russian with
/// the `❌` marker the reservation flow uses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Field is empty after trimming.
    #[error("❌ {field}: значение не может быть пустым")]
    Required { field: &'static str },

    /// Field has fewer characters than allowed.
    #[error("❌ {field}: не менее {min} символов")]
    TooShort { field: &'static str, min: usize },

    /// Field has more characters than allowed.
    #[error("❌ {field}: не более {max} символов")]
    TooLong { field: &'static str, max: usize },

    /// Input does not look like a Russian mobile number.
    #[error("❌ Неверный формат. +7XXXXXXXXXX или 8XXXXXXXXXX")]
    PhoneFormat,

    /// Digit sequence has the wrong length (phone: 11, card: 16).
    #[error("❌ Номер должен содержать {expected} цифр")]
    DigitCount { expected: usize },

    /// Card number failed the Luhn checksum.
    #[error("❌ Неверный номер карты")]
    CardChecksum,
}

/// Configuration errors. Logged by the host at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML (or has wrong field types).
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config parsed but violates an invariant (tier order, signs).
    #[error("Invalid config: {0}")]
    Invalid(String),
}
