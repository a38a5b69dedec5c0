use super::ColorToken;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdvisoryKind {
    HighTemperature,
    ColdWeather,
    PoorAirQuality,
    HighHumidity,
    Windy,
    PerfectWeather,
    Normal,
}

impl AdvisoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdvisoryKind::HighTemperature => "High Temperature",
            AdvisoryKind::ColdWeather => "Cold Weather",
            AdvisoryKind::PoorAirQuality => "Air Quality",
            AdvisoryKind::HighHumidity => "Humidity",
            AdvisoryKind::Windy => "Wind",
            AdvisoryKind::PerfectWeather => "Outdoor",
            AdvisoryKind::Normal => "General",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AdvisoryKind::HighTemperature => "🌡️",
            AdvisoryKind::ColdWeather => "🧥",
            AdvisoryKind::PoorAirQuality => "😷",
            AdvisoryKind::HighHumidity => "💧",
            AdvisoryKind::Windy => "🌪️",
            AdvisoryKind::PerfectWeather => "✨",
            AdvisoryKind::Normal => "👍",
        }
    }

    pub fn color_token(&self) -> ColorToken {
        match self {
            AdvisoryKind::HighTemperature => ColorToken::RED,
            AdvisoryKind::ColdWeather => ColorToken::BLUE,
            AdvisoryKind::PoorAirQuality => ColorToken::ORANGE,
            AdvisoryKind::HighHumidity => ColorToken::CYAN,
            AdvisoryKind::Windy => ColorToken::VIOLET,
            AdvisoryKind::PerfectWeather | AdvisoryKind::Normal => ColorToken::EMERALD,
        }
    }
}

impl std::fmt::Display for AdvisoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: String,
    pub source: String,
}

impl DataPoint {
    pub fn new(label: &str, value: impl std::fmt::Display, source: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            source: source.to_string(),
        }
    }
}

/// An advisory shown on the recommendations screen.
///
/// Only `title`, `description` and `color` are display contract; `id` and
/// `data_points` explain which rule fired and on what values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub id: String,
    pub kind: AdvisoryKind,
    pub title: String,
    pub description: String,
    pub color: ColorToken,
    pub data_points: Vec<DataPoint>,
}

impl Recommendation {
    pub fn new(
        id: impl Into<String>,
        kind: AdvisoryKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            description: description.into(),
            color: kind.color_token(),
            data_points: Vec::new(),
        }
    }

    pub fn with_color(mut self, color: ColorToken) -> Self {
        self.color = color;
        self
    }

    pub fn with_data_point(
        mut self,
        label: &str,
        value: impl std::fmt::Display,
        source: &str,
    ) -> Self {
        self.data_points.push(DataPoint::new(label, value, source));
        self
    }

    /// Title prefixed with the advisory glyph.
    pub fn display_title(&self) -> String {
        format!("{} {}", self.kind.icon(), self.title)
    }

    /// The (title, description, color) triple consumed by the dashboard.
    pub fn as_triple(&self) -> (&str, &str, ColorToken) {
        (&self.title, &self.description, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_data_points() {
        let rec = Recommendation::new(
            "wind",
            AdvisoryKind::Windy,
            "Windy Conditions",
            "Secure loose objects",
        )
        .with_data_point("Wind", "12.0 m/s", "OpenWeatherMap")
        .with_data_point("Gusts", 15, "OpenWeatherMap");

        assert_eq!(rec.data_points.len(), 2);
        assert_eq!(rec.data_points[1].value, "15");
        assert_eq!(rec.color, ColorToken::VIOLET);
    }

    #[test]
    fn triple_and_display_title() {
        let rec = Recommendation::new(
            "normal",
            AdvisoryKind::Normal,
            "Normal Conditions",
            "Enjoy your day!",
        );
        assert_eq!(
            rec.as_triple(),
            ("Normal Conditions", "Enjoy your day!", ColorToken::EMERALD)
        );
        assert_eq!(rec.display_title(), "👍 Normal Conditions");
    }

    #[test]
    fn color_override() {
        let rec = Recommendation::new("x", AdvisoryKind::Normal, "t", "d")
            .with_color(ColorToken::PINK);
        assert_eq!(rec.color, ColorToken::PINK);
    }
}
