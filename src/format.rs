//! Display formatting for prices, usernames and score tones.

use std::f64::consts::PI;

/// `$12,500`; cents shown only when present.
pub fn format_price(price: f64) -> String {
    let cents = (price.abs() * 100.0).round() as u64;
    let (whole, fraction) = (cents / 100, cents % 100);
    let sign = if price < 0.0 && cents > 0 { "-" } else { "" };
    let grouped = group_thousands(whole);
    if fraction == 0 {
        format!("{sign}${grouped}")
    } else {
        format!("{sign}${grouped}.{fraction:02}")
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `@name` in lowercase, tolerating a stored leading `@`.
pub fn display_username(username: &str) -> String {
    format!("@{}", username.trim_start_matches('@').to_lowercase())
}

/// Tone of a 0..100 gauge
pub fn radial_tone(value: u32) -> &'static str {
    if value < 40 {
        "tone-red"
    } else if value < 70 {
        "tone-yellow"
    } else {
        "tone-green"
    }
}

pub const RADIAL_RADIUS: f64 = 16.0;

/// (circumference, dash offset) of a gauge filled to `value` percent
pub fn radial_dash(value: u32) -> (f64, f64) {
    let circumference = 2.0 * PI * RADIAL_RADIUS;
    let offset = circumference - (value.min(100) as f64 / 100.0) * circumference;
    (circumference, offset)
}

/// Tone of a detail-page score
pub fn score_tone(score: f64) -> &'static str {
    if score >= 75.0 {
        "tone-green"
    } else if score >= 50.0 {
        "tone-yellow"
    } else if score >= 25.0 {
        "tone-orange"
    } else {
        "tone-red"
    }
}

pub fn demand_tone(demand: &str) -> &'static str {
    match demand {
        "High" => "tone-green",
        "Mid-High" => "tone-lightgreen",
        "Mid" => "tone-yellow",
        "Low-Mid" => "tone-orange",
        _ => "tone-red",
    }
}

/// Round an optional 0..100 score for a gauge.
pub fn gauge_value(score: Option<f64>) -> u32 {
    score.unwrap_or(0.0).round().clamp(0.0, 100.0) as u32
}
