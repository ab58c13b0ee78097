use crate::shared::utils::{first_parseable, first_positive, is_blank};

/// Brings upstream rating fields onto the canonical 0-10 scale
#[derive(Debug, Clone, Copy, Default)]
pub struct RatingNormalizer;

impl RatingNormalizer {
    /// Critic rating as a ten-point value.
    ///
    /// Decimal strings are taken as already ten-point; percentages such as
    /// `"85%"` are divided by ten.
    pub fn critic_rating(raw: Option<&str>) -> Option<f32> {
        if is_blank(raw) {
            return None;
        }
        let raw = raw?.trim();

        let parsers: [fn(&str) -> Option<f32>; 2] = [Self::parse_decimal, Self::parse_percentage];
        first_parseable(parsers, |parse| parse(raw))
    }

    fn parse_decimal(raw: &str) -> Option<f32> {
        raw.parse::<f32>().ok().filter(|rating| rating.is_finite())
    }

    fn parse_percentage(raw: &str) -> Option<f32> {
        raw.replace('%', "")
            .trim()
            .parse::<i32>()
            .ok()
            .map(|pct| pct as f32 * 0.1)
    }

    /// Primary community rating, or the secondary one; zero means not provided
    pub fn community_rating(primary: Option<f64>, secondary: Option<f64>) -> Option<f32> {
        first_positive([primary, secondary]).map(|rating| rating as f32)
    }
}
