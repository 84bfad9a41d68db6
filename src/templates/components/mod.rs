use crate::domain::logic::Trend;
use maud::{html, Markup};

pub mod error;

pub use error::error_page;

const DEFAULT_GLYPH: &str = "📦";

/// Glyph for a commodity's symbolic icon name. Unknown names get a generic
/// crate so a typo in the admin form never breaks the page.
pub fn icon_glyph(name: &str) -> &'static str {
    match name.trim().to_ascii_lowercase().as_str() {
        "droplets" | "droplet" | "oil" => "🛢️",
        "bean" | "beans" | "coffee" => "🫘",
        "leaf" | "ginger" => "🫚",
        "wheat" | "rice" | "grain" => "🌾",
        "corn" | "maize" => "🌽",
        "sprout" | "seedling" => "🌱",
        "nut" | "peanut" => "🥜",
        "pepper" | "chili" => "🌶️",
        "apple" | "fruit" => "🍎",
        _ => DEFAULT_GLYPH,
    }
}

/// Naira amount with thousands separators; kobo only when present.
pub fn format_naira(amount: f64) -> String {
    let kobo_total = (amount.abs() * 100.0).round() as u64;
    let whole = kobo_total / 100;
    let kobo = kobo_total % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && kobo_total > 0 { "-" } else { "" };
    if kobo == 0 {
        format!("{sign}₦{grouped}")
    } else {
        format!("{sign}₦{grouped}.{kobo:02}")
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{value:+.1}%")
}

pub fn trend_badge(trend: Trend, percent: f64) -> Markup {
    let arrow = match trend {
        Trend::Up => "▲",
        Trend::Down => "▼",
    };
    html! {
        span class=(format!("trend trend-{}", trend.label())) {
            (arrow) " " (format_percent(percent))
        }
    }
}

/// Signed per-region change, coloured by direction.
pub fn change_cell(change: f64) -> Markup {
    let class = if change > 0.0 {
        "change up"
    } else if change < 0.0 {
        "change down"
    } else {
        "change flat"
    };
    html! {
        span class=(class) { (format_percent(change)) }
    }
}
