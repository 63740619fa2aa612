//! # parkbot-core: Pure Business Logic for ParkBot
//!
//! Validation, pricing and display helpers for a parking-reservation chat
//! bot. Everything here is a plain function over its inputs: the host
//! application owns the conversation state machine, persistence and the
//! chat transport, and calls into this crate with raw user text.
//!
//! ## Architecture Position
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                       ParkBot Architecture                        │
//! │                                                                   │
//! │  ┌─────────────────────────────────────────────────────────────┐  │
//! │  │                 Chat transport (Telegram)                   │  │
//! │  └─────────────────────────────┬───────────────────────────────┘  │
//! │                                │ raw message text                 │
//! │  ┌─────────────────────────────▼───────────────────────────────┐  │
//! │  │           Reservation flow (host application)               │  │
//! │  │   ask name → phone → date → time → spot → car → confirm     │  │
//! │  └─────────────────────────────┬───────────────────────────────┘  │
//! │                                │                                  │
//! │  ┌─────────────────────────────▼───────────────────────────────┐  │
//! │  │               ★ parkbot-core (THIS CRATE) ★                  │  │
//! │  │                                                              │  │
//! │  │  ┌────────────┐ ┌──────────┐ ┌─────────┐ ┌───────────────┐  │  │
//! │  │  │ validation │ │ datetime │ │ pricing │ │ money/display │  │  │
//! │  │  └────────────┘ └──────────┘ └─────────┘ └───────────────┘  │  │
//! │  │                                                              │  │
//! │  │  config: loaded once by the host, passed in by reference     │  │
//! │  └──────────────────────────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`validation`]: field validators returning cleaned values or
//!   ready-to-send Russian error messages
//! - [`datetime`]: `DD.MM.YYYY` / `HH:MM` helpers and the day picker
//! - [`pricing`]: tiered hourly rates and span pricing
//! - [`money`]: integer-kopeck `Money` (no floating point!)
//! - [`display`]: card masking for summaries
//! - [`config`]: the explicit configuration the helpers read from
//! - [`error`]: typed validation and config errors
//!
//! ## Design Principles
//! 1. **Pure functions**: same input, same output; the wall clock is the
//!    only ambient read (`validate_date`, `next_days`) and both have
//!    clock-free cores under test
//! 2. **Explicit configuration**: the strict-card flag and the tariff
//!    table are always parameters, never globals
//! 3. **Integer money**: amounts are kopecks in an `i64`
//! 4. **Typed errors**: a failed validation is an enum variant whose
//!    `Display` is the exact message the user sees
//!
//! ## Example
//! ```rust
//! use parkbot_core::config::BotConfig;
//! use parkbot_core::datetime::parse_datetime;
//! use parkbot_core::pricing::calculate_price;
//! use parkbot_core::validation::validate_phone;
//!
//! let config = BotConfig::default();
//!
//! let phone = validate_phone("+7 (999) 123-45-67").unwrap();
//! assert_eq!(phone, "89991234567");
//!
//! let start = parse_datetime("10.06.2025", "10:00").unwrap();
//! let end = parse_datetime("10.06.2025", "12:00").unwrap();
//! let price = calculate_price(start, end, &config.pricing);
//! assert_eq!(price.to_string(), "300₽");
//! ```

pub mod config;
pub mod datetime;
pub mod display;
pub mod error;
pub mod money;
pub mod pricing;
pub mod validation;

// Re-export the types callers touch on every code path.
pub use config::{BotConfig, PriceTier, PricingSettings, ValidationSettings};
pub use error::{ConfigError, ValidationError, ValidationResult};
pub use money::Money;
