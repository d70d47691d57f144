//! Recommendation scoring
//!
//! `overall = 0.6 * weather + 0.4 * traffic` where the weather term is 1 for
//! clear skies and 0 otherwise, and the traffic term is `1 / (seconds + 1)`.

use crate::models::{Recommendation, WeatherSnapshot};

/// Weight of the clear-weather indicator
pub const WEATHER_WEIGHT: f64 = 0.6;
/// Weight of the inverse travel-time term
pub const TRAFFIC_WEIGHT: f64 = 0.4;
/// Case-sensitive marker looked for in the capitalized weather description
pub const CLEAR_MARKER: &str = "Clear";

/// 1 when the description mentions clear weather, else 0
#[must_use]
pub fn weather_score(description: &str) -> f64 {
    if description.contains(CLEAR_MARKER) {
        1.0
    } else {
        0.0
    }
}

/// Decreasing in travel time, bounded in (0, 1]. The +1 keeps a zero
/// duration finite.
#[must_use]
pub fn traffic_score(seconds: u64) -> f64 {
    1.0 / (seconds as f64 + 1.0)
}

#[must_use]
pub fn overall_score(weather: &WeatherSnapshot, traffic_seconds: u64) -> f64 {
    WEATHER_WEIGHT * weather_score(&weather.description)
        + TRAFFIC_WEIGHT * traffic_score(traffic_seconds)
}

/// Sort by score, best first. The sort is stable so equal scores keep
/// dataset order.
pub fn rank(recommendations: &mut [Recommendation]) {
    recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CityRecord;
    use rstest::rstest;

    const EPSILON: f64 = 1e-12;

    fn snapshot(description: &str) -> WeatherSnapshot {
        WeatherSnapshot::new(description, 25.0, 50.0)
    }

    fn recommendation(city: &str, score: f64) -> Recommendation {
        Recommendation::new(&CityRecord::new(city, None), snapshot("haze"), 0, score)
    }

    #[rstest]
    #[case("Clear sky", 1.0)]
    #[case("Mostly Clear", 1.0)]
    #[case("Light rain", 0.0)]
    #[case("clear sky", 0.0)]
    #[case("Unclear", 0.0)]
    fn test_weather_score(#[case] description: &str, #[case] expected: f64) {
        assert_eq!(weather_score(description), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(9)]
    #[case(3_600)]
    #[case(86_400)]
    fn test_overall_score_formula(#[case] seconds: u64) {
        let d = seconds as f64;
        let clear = overall_score(&snapshot("clear sky"), seconds);
        let rainy = overall_score(&snapshot("light rain"), seconds);
        assert!((clear - (0.6 + 0.4 / (d + 1.0))).abs() < EPSILON);
        assert!((rainy - 0.4 / (d + 1.0)).abs() < EPSILON);
    }

    #[test]
    fn test_traffic_score_bounds() {
        assert_eq!(traffic_score(0), 1.0);
        assert!(traffic_score(u64::MAX) > 0.0);
    }

    #[test]
    fn test_score_strictly_decreasing_in_duration() {
        let weather = snapshot("light rain");
        let durations = [0_u64, 1, 2, 10, 600, 7_200, 100_000];
        for pair in durations.windows(2) {
            assert!(overall_score(&weather, pair[0]) > overall_score(&weather, pair[1]));
        }
    }

    #[test]
    fn test_clear_beats_non_clear_with_equal_or_worse_traffic() {
        for (clear_seconds, other_seconds) in [(0, 0), (10, 0), (50_000, 1), (5, 5)] {
            let clear = overall_score(&snapshot("clear sky"), clear_seconds);
            let other = overall_score(&snapshot("overcast clouds"), other_seconds);
            assert!(clear > other, "{clear_seconds}s clear vs {other_seconds}s overcast");
        }
    }

    #[test]
    fn test_rank_descending_and_stable() {
        let mut recommendations = vec![
            recommendation("A", 0.2),
            recommendation("B", 0.9),
            recommendation("C", 0.2),
            recommendation("D", 0.5),
            recommendation("E", 0.2),
        ];
        rank(&mut recommendations);

        let order: Vec<&str> = recommendations.iter().map(|r| r.city.as_str()).collect();
        assert_eq!(order, vec!["B", "D", "A", "C", "E"]);
    }
}
