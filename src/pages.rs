//! Server-rendered HTML pages: landing page, trip planner form and results

use std::fmt::Write as _;

use axum::{Form, Router, extract::State, response::Html, routing::get};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    models::{Preferences, Recommendation},
    web::AppState,
};

/// Form body of `POST /plan`
#[derive(Debug, Default, Deserialize)]
pub struct PlanForm {
    #[serde(default)]
    pub preferences: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/plan", get(plan_form).post(plan_trip))
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(state.engine.origin()))
}

async fn plan_form() -> Html<String> {
    Html(render_plan_form())
}

async fn plan_trip(State(state): State<AppState>, Form(form): Form<PlanForm>) -> Html<String> {
    let preferences = Preferences::from(form.preferences);
    let recommendations = state.engine.recommend(&preferences).await;
    Html(render_results(&preferences, &recommendations))
}

/// Escape text for use in HTML element content and quoted attributes
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} · TravelRank</title>
  <link rel="stylesheet" href="/static/style.css">
</head>
<body>
  <header><a href="/">TravelRank</a> <nav><a href="/plan">Plan a trip</a></nav></header>
  <main>
{body}
  </main>
</body>
</html>
"#,
        title = escape_html(title),
    )
}

#[must_use]
pub fn render_index(origin: &str) -> String {
    let body = format!(
        r#"    <h1>Find your next destination</h1>
    <p>TravelRank ranks cities by their current weather and by how long the
    drive from {origin} takes right now. Clear skies count most; shorter
    travel times break the rest.</p>
    <p><a class="button" href="/plan">Plan a trip</a></p>
    <h2>JSON API</h2>
    <pre>POST /api/recommend
Content-Type: application/json

{{"preferences": "mountains"}}</pre>"#,
        origin = escape_html(origin),
    );
    layout("Home", &body)
}

#[must_use]
pub fn render_plan_form() -> String {
    layout(
        "Plan a trip",
        r#"    <h1>Plan a trip</h1>
    <form method="post" action="/plan">
      <label for="preferences">What are you looking for?</label>
      <input id="preferences" name="preferences" type="text" placeholder="beaches, hill stations, heritage...">
      <button type="submit">Get recommendations</button>
    </form>
    <p class="note">Ranking checks live weather and traffic for every city and can take a moment.</p>"#,
    )
}

#[must_use]
pub fn render_results(preferences: &Preferences, recommendations: &[Recommendation]) -> String {
    let mut body = String::from("    <h1>Recommended destinations</h1>\n");

    if !preferences.as_str().is_empty() {
        let _ = writeln!(
            body,
            "    <p class=\"note\">Your preferences: {}</p>",
            escape_html(preferences.as_str())
        );
    }

    if recommendations.is_empty() {
        body.push_str(
            "    <p>No destinations could be ranked right now. Weather or traffic data was unavailable for every city.</p>\n",
        );
    } else {
        body.push_str("    <ol class=\"recommendations\">\n");
        for recommendation in recommendations {
            render_recommendation(&mut body, recommendation);
        }
        body.push_str("    </ol>\n");
    }

    let _ = writeln!(
        body,
        "    <p class=\"note\">Generated {}. <a href=\"/plan\">Plan another trip</a></p>",
        Utc::now().format("%Y-%m-%d %H:%M UTC")
    );

    layout("Results", &body)
}

fn render_recommendation(body: &mut String, recommendation: &Recommendation) {
    let _ = write!(
        body,
        r#"      <li>
        <h2>{city} <span class="score">{score:.4}</span></h2>
        <p>Rating: {rating} · Best time to visit: {best_time}</p>
        <p>Weather: {weather}, {temp}, humidity {humidity}</p>
        <p>Travel time: {travel} ({seconds} s)</p>
        <p>{description}</p>
      </li>
"#,
        city = escape_html(&recommendation.city),
        rating = recommendation.format_rating(),
        score = recommendation.score,
        best_time = escape_html(&recommendation.best_time),
        weather = escape_html(&recommendation.weather.description),
        temp = escape_html(&recommendation.weather.format_temperature()),
        humidity = recommendation.weather.format_humidity(),
        travel = recommendation.format_traffic(),
        seconds = recommendation.traffic,
        description = escape_html(&recommendation.description),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CityRecord, WeatherSnapshot};

    fn recommendation(city: &str, score: f64) -> Recommendation {
        let mut record = CityRecord::new(city, Some(4.3));
        record.description = "Forts & <palaces>".to_string();
        record.best_time = "October to March".to_string();
        Recommendation::new(&record, WeatherSnapshot::new("clear sky", 29.5, 35.0), 3_900, score)
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#x27;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_results_list_in_given_order() {
        let html = render_results(
            &Preferences::default(),
            &[recommendation("Jaipur", 0.64), recommendation("Agra", 0.4)],
        );

        let jaipur = html.find("Jaipur").unwrap();
        let agra = html.find("Agra").unwrap();
        assert!(jaipur < agra);
        assert!(html.contains("0.6400"));
        assert!(html.contains("Rating: 4.3"));
        assert!(html.contains("Clear sky"));
        assert!(html.contains("1h 05m (3900 s)"));
        assert!(html.contains("Forts &amp; &lt;palaces&gt;"));
        assert!(!html.contains("<palaces>"));
    }

    #[test]
    fn test_results_escape_preferences() {
        let html = render_results(&Preferences::new("<script>"), &[]);
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("No destinations could be ranked"));
    }

    #[test]
    fn test_index_names_configured_origin() {
        let html = render_index("Mumbai & Thane");
        assert!(html.contains("drive from Mumbai &amp; Thane takes"));
        assert!(!html.contains("New Delhi"));
        assert!(html.contains(r#"{"preferences": "mountains"}"#));
    }

    #[test]
    fn test_plan_form_posts_preferences() {
        let html = render_plan_form();
        assert!(html.contains(r#"method="post" action="/plan""#));
        assert!(html.contains(r#"name="preferences""#));
    }
}
