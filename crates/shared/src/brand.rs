use serde::Deserialize;
use strum::{Display, EnumString, VariantArray};

pub const BRAND_BLUE: &str = "#0C4C8A";
pub const BRAND_MAGENTA: &str = "#C23B8E";
pub const BRAND_GREEN: &str = "#3FAE49";

/// Alpha suffix used for the tinted icon tile behind a card icon.
pub const TINT_ALPHA: &str = "18";

/// Colour accent a presentational component can pick.
///
/// `blue`, `magenta` and `green` are accepted as aliases so markup written
/// against the colour names keeps working.
#[derive(
    EnumString, Display, VariantArray, Default, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Accent {
    #[default]
    #[strum(to_string = "primary", serialize = "blue")]
    Primary,
    #[strum(to_string = "secondary", serialize = "magenta")]
    Secondary,
    #[strum(to_string = "tertiary", serialize = "green")]
    Tertiary,
}

impl Accent {
    /// Parses an accent name, falling back to [`Accent::Primary`] for anything unknown.
    pub fn from_name(name: &str) -> Self {
        name.trim().parse().unwrap_or_default()
    }

    /// Cycles through the accents in page order: primary, secondary, tertiary.
    pub fn cycle(index: usize) -> Self {
        Self::VARIANTS[index % Self::VARIANTS.len()]
    }
}

/// Brand palette shared by every component.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Brand {
    #[serde(default = "default_blue")]
    pub blue: String,
    #[serde(default = "default_magenta")]
    pub magenta: String,
    #[serde(default = "default_green")]
    pub green: String,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            blue: default_blue(),
            magenta: default_magenta(),
            green: default_green(),
        }
    }
}

fn default_blue() -> String {
    BRAND_BLUE.to_owned()
}

fn default_magenta() -> String {
    BRAND_MAGENTA.to_owned()
}

fn default_green() -> String {
    BRAND_GREEN.to_owned()
}

impl Brand {
    pub fn color(&self, accent: Accent) -> &str {
        match accent {
            Accent::Primary => &self.blue,
            Accent::Secondary => &self.magenta,
            Accent::Tertiary => &self.green,
        }
    }

    /// Accent colour with the icon-tile alpha appended (`#RRGGBBAA`).
    pub fn tint(&self, accent: Accent) -> String {
        format!("{}{TINT_ALPHA}", self.color(accent))
    }

    /// Horizontal blue → magenta → green gradient.
    pub fn gradient(&self) -> String {
        format!(
            "linear-gradient(90deg, {}, {}, {})",
            self.blue, self.magenta, self.green
        )
    }

    /// Soft diagonal wash used behind callout panels, one opacity per stop
    /// (blue, magenta, green).
    pub fn wash(&self, strengths: [u8; 3]) -> String {
        let [a, b, c] = [
            rgba(&self.blue, strengths[0]),
            rgba(&self.magenta, strengths[1]),
            rgba(&self.green, strengths[2]),
        ];

        format!("linear-gradient(135deg, {a}, {b}, {c})")
    }

    /// Three radial glows layered behind the hero.
    pub fn glow(&self) -> String {
        format!(
            "radial-gradient(1000px 500px at 20% 10%, {}, transparent 60%), \
             radial-gradient(900px 500px at 80% 20%, {}, transparent 55%), \
             radial-gradient(900px 500px at 60% 90%, {}, transparent 55%)",
            rgba(&self.blue, 20),
            rgba(&self.magenta, 18),
            rgba(&self.green, 18),
        )
    }

    /// Returns the name of the first colour that is not a `#RRGGBB` literal.
    pub fn invalid_color(&self) -> Option<&'static str> {
        [
            ("blue", &self.blue),
            ("magenta", &self.magenta),
            ("green", &self.green),
        ]
        .into_iter()
        .find(|(_, hex)| !is_hex_color(hex))
        .map(|(name, _)| name)
    }
}

pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// `#RRGGBB` plus an opacity percentage to a CSS `rgba()` literal.
fn rgba(hex: &str, percent: u8) -> String {
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|v| u8::from_str_radix(v, 16).ok())
            .unwrap_or(0)
    };

    format!(
        "rgba({},{},{},{:.2})",
        channel(1..3),
        channel(3..5),
        channel(5..7),
        f32::from(percent.min(100)) / 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_parses_names_and_aliases() {
        assert_eq!(Accent::from_name("primary"), Accent::Primary);
        assert_eq!(Accent::from_name("Secondary"), Accent::Secondary);
        assert_eq!(Accent::from_name("green"), Accent::Tertiary);
        assert_eq!(Accent::from_name("magenta"), Accent::Secondary);
    }

    #[test]
    fn test_unknown_accent_falls_back_to_primary() {
        assert_eq!(Accent::from_name("orange"), Accent::Primary);
        assert_eq!(Accent::from_name(""), Accent::Primary);
    }

    #[test]
    fn test_accent_cycle() {
        assert_eq!(Accent::cycle(0), Accent::Primary);
        assert_eq!(Accent::cycle(1), Accent::Secondary);
        assert_eq!(Accent::cycle(2), Accent::Tertiary);
        assert_eq!(Accent::cycle(3), Accent::Primary);
    }

    #[test]
    fn test_brand_colors() {
        let brand = Brand::default();

        assert_eq!(brand.color(Accent::Primary), "#0C4C8A");
        assert_eq!(brand.color(Accent::Secondary), "#C23B8E");
        assert_eq!(brand.color(Accent::Tertiary), "#3FAE49");
        assert_eq!(brand.tint(Accent::Tertiary), "#3FAE4918");
        assert_eq!(
            brand.gradient(),
            "linear-gradient(90deg, #0C4C8A, #C23B8E, #3FAE49)"
        );
    }

    #[test]
    fn test_brand_wash() {
        let brand = Brand::default();

        assert_eq!(
            brand.wash([12, 10, 10]),
            "linear-gradient(135deg, rgba(12,76,138,0.12), rgba(194,59,142,0.10), rgba(63,174,73,0.10))"
        );
        assert_eq!(
            brand.wash([10, 8, 8]),
            "linear-gradient(135deg, rgba(12,76,138,0.10), rgba(194,59,142,0.08), rgba(63,174,73,0.08))"
        );
    }

    #[test]
    fn test_invalid_color() {
        let mut brand = Brand::default();
        assert_eq!(brand.invalid_color(), None);

        brand.magenta = "purple".to_owned();
        assert_eq!(brand.invalid_color(), Some("magenta"));
    }
}
