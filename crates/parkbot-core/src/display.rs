//! Display helpers for reservation summaries.

/// Masks a card number down to its last four characters.
///
/// The reservation summary and the admin notification never show a full
/// card number. Missing or too-short values render as a dash.
///
/// ## Example
/// ```rust
/// use parkbot_core::display::mask_card;
///
/// assert_eq!(mask_card(Some("1234567890123456")), "****3456");
/// assert_eq!(mask_card(None), "—");
/// ```
pub fn mask_card(card: Option<&str>) -> String {
    match card {
        Some(value) => {
            let chars: Vec<char> = value.chars().collect();
            if chars.len() < 4 {
                return "—".to_string();
            }
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("****{}", tail)
        }
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_card_keeps_last_four() {
        assert_eq!(mask_card(Some("1234567890123456")), "****3456");
        assert_eq!(mask_card(Some("3456")), "****3456");
    }

    #[test]
    fn test_mask_card_placeholder() {
        assert_eq!(mask_card(None), "—");
        assert_eq!(mask_card(Some("")), "—");
        assert_eq!(mask_card(Some("123")), "—");
    }
}
