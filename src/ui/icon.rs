use leptos::prelude::*;

/// Inline stroke icon drawn from [`icons`]. Unknown names render a circle.
#[component]
pub fn Icon(
    /// Icon name, one of the [`icons`] constants
    name: &'static str,
    /// CSS classes for sizing and colour
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon_paths(name).iter().map(|d| view! { <path d=*d/> }).collect_view()}
        </svg>
    }
}

/// Predefined icon names
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ALERT_TRIANGLE: &str = "alert-triangle";
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const BAR_CHART: &str = "bar-chart";
    pub const BOT: &str = "bot";
    pub const CALCULATOR: &str = "calculator";
    pub const CALENDAR: &str = "calendar";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const CLOCK: &str = "clock";
    pub const COG: &str = "cog";
    pub const DOLLAR: &str = "dollar";
    pub const MAIL: &str = "mail";
    pub const MENU: &str = "menu";
    pub const MINUS: &str = "minus";
    pub const PHONE: &str = "phone";
    pub const PLUS: &str = "plus";
    pub const ROCKET: &str = "rocket";
    pub const SEARCH: &str = "search";
    pub const SEND: &str = "send";
    pub const SHIELD: &str = "shield";
    pub const TRENDING_DOWN: &str = "trending-down";
    pub const TRENDING_UP: &str = "trending-up";
    pub const USERS: &str = "users";
    pub const X: &str = "x";
}

const FALLBACK: &[&str] = &["M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z"];

/// SVG path data for a 24x24 viewbox
fn icon_paths(name: &str) -> &'static [&'static str] {
    match name {
        icons::ALERT_CIRCLE => &[
            "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z",
            "M12 8v4",
            "M12 16h.01",
        ],
        icons::ALERT_TRIANGLE => &[
            "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z",
            "M12 9v4",
            "M12 17h.01",
        ],
        icons::ARROW_LEFT => &["m12 19-7-7 7-7", "M19 12H5"],
        icons::BAR_CHART => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
        icons::BOT => &[
            "M12 8V4H8",
            "M6 8h12a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2v-8a2 2 0 0 1 2-2z",
            "M2 14h2",
            "M20 14h2",
            "M15 13v2",
            "M9 13v2",
        ],
        icons::CALCULATOR => &[
            "M6 2h12a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
            "M8 6h8",
            "M16 14v4",
            "M16 10h.01",
            "M12 10h.01",
            "M8 10h.01",
            "M12 14h.01",
            "M8 14h.01",
            "M12 18h.01",
            "M8 18h.01",
        ],
        icons::CALENDAR => &[
            "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "M16 2v4",
            "M8 2v4",
            "M3 10h18",
        ],
        icons::CHECK_CIRCLE => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"],
        icons::CHEVRON_LEFT => &["m15 18-6-6 6-6"],
        icons::CHEVRON_RIGHT => &["m9 18 6-6-6-6"],
        icons::CLOCK => &["M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z", "M12 6v6l4 2"],
        icons::COG => &[
            "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
            "M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 1 1-4 0v-.09A1.65 1.65 0 0 0 9 19.4a1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06A1.65 1.65 0 0 0 4.68 15a1.65 1.65 0 0 0-1.51-1H3a2 2 0 1 1 0-4h.09A1.65 1.65 0 0 0 4.6 9a1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06A1.65 1.65 0 0 0 9 4.68a1.65 1.65 0 0 0 1-1.51V3a2 2 0 1 1 4 0v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06A1.65 1.65 0 0 0 19.4 9a1.65 1.65 0 0 0 1.51 1H21a2 2 0 1 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z",
        ],
        icons::DOLLAR => &["M12 2v20", "M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"],
        icons::MAIL => &[
            "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "m22 6-10 7L2 6",
        ],
        icons::MENU => &["M4 6h16", "M4 12h16", "M4 18h16"],
        icons::MINUS => &["M5 12h14"],
        icons::PHONE => &[
            "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
        ],
        icons::PLUS => &["M5 12h14", "M12 5v14"],
        icons::ROCKET => &[
            "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z",
            "m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z",
            "M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0",
            "M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5",
        ],
        icons::SEARCH => &["M11 3a8 8 0 1 0 0 16 8 8 0 1 0 0-16z", "m21 21-4.3-4.3"],
        icons::SEND => &["m22 2-7 20-4-9-9-4Z", "M22 2 11 13"],
        icons::SHIELD => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
        icons::TRENDING_DOWN => &["m22 17-8.5-8.5-5 5L2 7", "M16 17h6v-6"],
        icons::TRENDING_UP => &["m22 7-8.5 8.5-5-5L2 17", "M16 7h6v6"],
        icons::USERS => &[
            "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
            "M9 3a4 4 0 1 0 0 8 4 4 0 1 0 0-8z",
            "M22 21v-2a4 4 0 0 0-3-3.87",
            "M16 3.13a4 4 0 0 1 0 7.75",
        ],
        icons::X => &["M18 6 6 18", "m6 6 12 12"],
        _ => FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_icons_have_paths() {
        for name in [
            icons::BOT,
            icons::CALENDAR,
            icons::CHECK_CIRCLE,
            icons::PHONE,
            icons::X,
        ] {
            let paths = icon_paths(name);
            assert!(!paths.is_empty());
            assert_ne!(paths, FALLBACK, "{name} fell back");
        }
    }

    #[test]
    fn test_unknown_icon_falls_back() {
        assert_eq!(icon_paths("does-not-exist"), FALLBACK);
    }
}
