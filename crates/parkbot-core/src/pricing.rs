//! # Pricing
//!
//! Tariff math for reservation spans.
//!
//! ## Tariff Model
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │               Tiered hourly rates (default table)                │
//! │                                                                  │
//! │    span ≤  3h   →  150₽/ч    ─┐                                  │
//! │    span ≤  6h   →  120₽/ч     │  first tier that covers          │
//! │    span ≤ 10h   →   90₽/ч     │  the span wins                   │
//! │    span ≤ 24h   →   60₽/ч    ─┘                                  │
//! │    longer       →  default_rate (60₽/ч)                          │
//! │                                                                  │
//! │    price = rate(span) × span, rounded to whole rubles            │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The table always arrives as an explicit [`PricingSettings`] reference.
//! Nothing here reads global state, so two calls may legitimately see two
//! different tables if the host reloaded its config in between.

use chrono::NaiveDateTime;

use crate::config::PricingSettings;
use crate::money::Money;

/// Hourly rate for a span of `hours`.
///
/// Walks the tier table in order and returns the first tier whose bound
/// covers the span (bounds are inclusive). Beyond the last bound the
/// default rate applies, and an empty table means every span gets it.
///
/// ## Example
/// ```rust
/// use parkbot_core::config::PricingSettings;
/// use parkbot_core::pricing::price_per_hour;
///
/// let pricing = PricingSettings::default();
/// assert_eq!(price_per_hour(2.0, &pricing).rubles(), 150);
/// assert_eq!(price_per_hour(30.0, &pricing).rubles(), 60);
/// ```
pub fn price_per_hour(hours: f64, pricing: &PricingSettings) -> Money {
    for tier in &pricing.tiers {
        if hours <= f64::from(tier.max_hours) {
            return Money::from_rubles(tier.rate_per_hour);
        }
    }

    Money::from_rubles(pricing.default_rate)
}

/// Price for the span between `start` and `end`.
///
/// The span is taken as a real number of hours, so partial hours are
/// billed proportionally. A zero or negative span costs nothing. The
/// total is `rate × hours` rounded to whole rubles, half away from zero
/// (`f64::round`).
///
/// ## Example
/// ```rust
/// use parkbot_core::config::PricingSettings;
/// use parkbot_core::datetime::parse_datetime;
/// use parkbot_core::pricing::calculate_price;
///
/// let pricing = PricingSettings::default();
/// let start = parse_datetime("10.06.2025", "10:00").unwrap();
/// let end = parse_datetime("10.06.2025", "12:00").unwrap();
/// assert_eq!(calculate_price(start, end, &pricing).to_string(), "300₽");
/// ```
pub fn calculate_price(start: NaiveDateTime, end: NaiveDateTime, pricing: &PricingSettings) -> Money {
    let hours = (end - start).num_seconds() as f64 / 3600.0;
    if hours <= 0.0 {
        return Money::zero();
    }

    let rate = price_per_hour(hours, pricing);
    let total_rubles = (rate.rubles() as f64 * hours).round() as i64;

    Money::from_rubles(total_rubles)
}

/// Human-readable tariff table for the chat, in the bot's HTML parse mode.
///
/// Derived from the configured tiers, so the table users see can never
/// drift from the one [`calculate_price`] bills with.
///
/// With the default table:
/// ```text
/// 💰 <b>Тарифы:</b>
/// • 1-3ч → 150₽/ч
/// • 4-6ч → 120₽/ч
/// • 7-10ч → 90₽/ч
/// • 11-24ч → 60₽/ч
/// • 24ч+ → 60₽/ч
/// ```
pub fn price_info(pricing: &PricingSettings) -> String {
    let mut lines = vec!["💰 <b>Тарифы:</b>".to_string()];

    let mut lower = 1u32;
    for tier in &pricing.tiers {
        if tier.max_hours == lower {
            lines.push(format!("• {}ч → {}₽/ч", tier.max_hours, tier.rate_per_hour));
        } else {
            lines.push(format!(
                "• {}-{}ч → {}₽/ч",
                lower, tier.max_hours, tier.rate_per_hour
            ));
        }
        lower = tier.max_hours + 1;
    }

    let beyond = pricing.tiers.last().map_or(1, |tier| tier.max_hours);
    lines.push(format!("• {}ч+ → {}₽/ч", beyond, pricing.default_rate));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PriceTier;
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_price_per_hour_tier_lookup() {
        let pricing = PricingSettings::default();

        assert_eq!(price_per_hour(2.0, &pricing), Money::from_rubles(150));
        // bounds are inclusive
        assert_eq!(price_per_hour(3.0, &pricing), Money::from_rubles(150));
        assert_eq!(price_per_hour(3.5, &pricing), Money::from_rubles(120));
        assert_eq!(price_per_hour(10.0, &pricing), Money::from_rubles(90));
        assert_eq!(price_per_hour(24.0, &pricing), Money::from_rubles(60));
        // beyond the table
        assert_eq!(price_per_hour(30.0, &pricing), Money::from_rubles(60));
    }

    #[test]
    fn test_price_per_hour_empty_table_uses_default() {
        let pricing = PricingSettings {
            tiers: vec![],
            default_rate: 80,
        };
        assert_eq!(price_per_hour(1.0, &pricing), Money::from_rubles(80));
    }

    #[test]
    fn test_calculate_price_whole_hours() {
        let pricing = PricingSettings::default();

        let start = dt(2025, 6, 10, 10, 0);
        assert_eq!(
            calculate_price(start, dt(2025, 6, 10, 12, 0), &pricing),
            Money::from_rubles(300)
        );
        // 5h falls into the 4-6h tier
        assert_eq!(
            calculate_price(start, dt(2025, 6, 10, 15, 0), &pricing),
            Money::from_rubles(600)
        );
        // 25h crosses midnight into the default rate
        assert_eq!(
            calculate_price(start, dt(2025, 6, 11, 11, 0), &pricing),
            Money::from_rubles(1500)
        );
    }

    #[test]
    fn test_calculate_price_partial_hours() {
        let pricing = PricingSettings::default();
        let start = dt(2025, 6, 10, 10, 0);

        // 1.5h × 150₽ = 225₽ exactly
        assert_eq!(
            calculate_price(start, dt(2025, 6, 10, 11, 30), &pricing),
            Money::from_rubles(225)
        );
    }

    #[test]
    fn test_calculate_price_rounds_half_away_from_zero() {
        let pricing = PricingSettings::default();
        let start = dt(2025, 6, 10, 10, 0);

        // 0.25h × 150₽ = 37.5₽ → 38₽
        assert_eq!(
            calculate_price(start, dt(2025, 6, 10, 10, 15), &pricing),
            Money::from_rubles(38)
        );
        // 0.75h × 150₽ = 112.5₽ → 113₽ (not banker's 112)
        assert_eq!(
            calculate_price(start, dt(2025, 6, 10, 10, 45), &pricing),
            Money::from_rubles(113)
        );
    }

    #[test]
    fn test_calculate_price_zero_or_negative_span() {
        let pricing = PricingSettings::default();
        let start = dt(2025, 6, 10, 10, 0);

        assert_eq!(calculate_price(start, start, &pricing), Money::zero());
        assert_eq!(
            calculate_price(start, dt(2025, 6, 10, 8, 0), &pricing),
            Money::zero()
        );
    }

    #[test]
    fn test_price_info_matches_default_table() {
        let pricing = PricingSettings::default();

        assert_eq!(
            price_info(&pricing),
            "💰 <b>Тарифы:</b>\n\
             • 1-3ч → 150₽/ч\n\
             • 4-6ч → 120₽/ч\n\
             • 7-10ч → 90₽/ч\n\
             • 11-24ч → 60₽/ч\n\
             • 24ч+ → 60₽/ч"
        );
    }

    #[test]
    fn test_price_info_collapses_single_hour_tier() {
        let pricing = PricingSettings {
            tiers: vec![PriceTier {
                max_hours: 1,
                rate_per_hour: 200,
            }],
            default_rate: 100,
        };

        assert_eq!(
            price_info(&pricing),
            "💰 <b>Тарифы:</b>\n• 1ч → 200₽/ч\n• 1ч+ → 100₽/ч"
        );
    }

    #[test]
    fn test_price_info_follows_custom_table() {
        let pricing = PricingSettings {
            tiers: vec![
                PriceTier {
                    max_hours: 2,
                    rate_per_hour: 300,
                },
                PriceTier {
                    max_hours: 8,
                    rate_per_hour: 150,
                },
            ],
            default_rate: 90,
        };

        assert_eq!(
            price_info(&pricing),
            "💰 <b>Тарифы:</b>\n• 1-2ч → 300₽/ч\n• 3-8ч → 150₽/ч\n• 8ч+ → 90₽/ч"
        );
    }
}
