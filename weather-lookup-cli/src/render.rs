//! Plain-text rendering of the shell view.

use chrono::Local;
use weather_lookup_core::{ShellView, TemperatureUnit, WeatherPanel};

pub fn render(view: &ShellView<'_>) -> String {
    let mut out = String::new();

    if view.loading {
        out.push_str("Loading...\n");
    }

    if let Some(error) = view.error {
        out.push_str(&format!("Error: {error}\n"));
    }

    if let Some(panel) = &view.weather {
        out.push_str(&render_panel(panel));
    }

    out.push_str(&render_recent(view.recent));
    out.push_str(&render_unit_toggle(view.unit));
    out
}

pub fn render_panel(panel: &WeatherPanel) -> String {
    let mut out = format!(
        "\n{}\n  Temperature: {}\n  Condition: {}\n  Icon: {}\n  {}\n",
        panel.heading,
        panel.temperature_label(),
        panel.condition,
        icon_url(&panel.icon),
        panel.details_line(),
    );
    if let Some(updated) = panel.last_updated {
        out.push_str(&format!(
            "  Updated: {}\n",
            updated.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        ));
    }
    out
}

pub fn render_recent(recent: &[String]) -> String {
    let mut out = String::from("\nRecent Searches\n");
    if recent.is_empty() {
        out.push_str("  (none yet)\n");
    }
    for (i, city) in recent.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, city));
    }
    out
}

/// Both units, the active one in brackets.
pub fn render_unit_toggle(active: TemperatureUnit) -> String {
    let buttons: Vec<String> = TemperatureUnit::all()
        .iter()
        .map(|unit| {
            if *unit == active {
                format!("[{}]", unit.label())
            } else {
                format!(" {} ", unit.label())
            }
        })
        .collect();

    format!("\nUnit: {}\n", buttons.join(" "))
}

/// WeatherAPI.com icons come protocol-relative (`//cdn...`).
fn icon_url(icon: &str) -> String {
    if icon.starts_with("//") {
        format!("https:{icon}")
    } else {
        icon.to_string()
    }
}
