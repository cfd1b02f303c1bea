use std::str::FromStr;

/// The recency presets offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Window {
    Day,
    ThreeDays,
    Week,
    TwoWeeks,
    Month,
}

impl Window {
    pub const ALL: [Window; 5] = [
        Window::Day,
        Window::ThreeDays,
        Window::Week,
        Window::TwoWeeks,
        Window::Month,
    ];

    #[must_use]
    pub fn days(self) -> u32 {
        match self {
            Window::Day => 1,
            Window::ThreeDays => 3,
            Window::Week => 7,
            Window::TwoWeeks => 14,
            Window::Month => 30,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Window::Day => "24 Hours",
            Window::ThreeDays => "3 Days",
            Window::Week => "1 Week",
            Window::TwoWeeks => "2 Weeks",
            Window::Month => "1 Month",
        }
    }

    #[must_use]
    pub fn from_days(days: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.days() == days)
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Window {
    type Err = String;

    /// Accepts a day count (`7`) or a day count with a `d` suffix (`7d`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let raw = trimmed
            .strip_suffix(['d', 'D'])
            .unwrap_or(trimmed);
        let days: u32 = raw
            .parse()
            .map_err(|_| format!("invalid window '{s}': expected one of 1, 3, 7, 14, 30"))?;
        Self::from_days(days)
            .ok_or_else(|| format!("unsupported window '{s}': expected one of 1, 3, 7, 14, 30"))
    }
}
