//! Stateless presentational primitives.
//!
//! Each primitive is an askama template; parents embed the rendered markup.

use askama::Template;
use mindbridge_shared::{Accent, Brand};

use super::Icon;

/// Centered, max-width, responsively padded content column.
pub const CONTAINER: &str = "mx-auto w-full max-w-6xl px-4 sm:px-6 lg:px-8";

#[derive(Template, Clone, Debug)]
#[template(path = "components/pill.html")]
pub struct Pill {
    pub icon: Icon,
    pub label: String,
}

impl Pill {
    pub fn new(icon: Icon, label: impl Into<String>) -> Self {
        Self {
            icon,
            label: label.into(),
        }
    }
}

/// Eyebrow, heading and description. Missing parts are left out entirely.
#[derive(Template, Clone, Debug)]
#[template(path = "components/section-title.html")]
pub struct SectionTitle {
    pub eyebrow: Option<String>,
    pub title: String,
    pub desc: Option<String>,
    pub eyebrow_color: String,
}

impl SectionTitle {
    pub fn new(brand: &Brand, title: impl Into<String>) -> Self {
        Self {
            eyebrow: None,
            title: title.into(),
            desc: None,
            eyebrow_color: brand.magenta.to_owned(),
        }
    }

    pub fn eyebrow(mut self, eyebrow: impl Into<String>) -> Self {
        self.eyebrow = Some(eyebrow.into()).filter(|v: &String| !v.is_empty());
        self
    }

    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into()).filter(|v: &String| !v.is_empty());
        self
    }
}

#[derive(Template, Clone, Debug)]
#[template(path = "components/card.html")]
pub struct Card {
    pub icon: Icon,
    pub title: String,
    pub body: String,
    pub color: String,
    pub tint: String,
    pub rule: String,
}

impl Card {
    pub fn new(
        brand: &Brand,
        icon: Icon,
        title: impl Into<String>,
        body: impl Into<String>,
        accent: Accent,
    ) -> Self {
        Self {
            icon,
            title: title.into(),
            body: body.into(),
            color: brand.color(accent).to_owned(),
            tint: brand.tint(accent),
            rule: brand.gradient(),
        }
    }

    /// Builds a card from a free-form accent name; unknown names use the primary colour.
    pub fn with_accent_name(
        brand: &Brand,
        icon: Icon,
        title: impl Into<String>,
        body: impl Into<String>,
        accent: &str,
    ) -> Self {
        Self::new(brand, icon, title, body, Accent::from_name(accent))
    }
}

#[derive(Template, Clone, Debug)]
#[template(path = "components/gradient-text.html")]
pub struct GradientText {
    pub text: String,
    pub gradient: String,
}

impl GradientText {
    pub fn new(brand: &Brand, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            gradient: brand.gradient(),
        }
    }
}

#[derive(Template, Clone, Debug)]
#[template(path = "components/wave.html")]
pub struct Wave {
    pub class: String,
    pub blue: String,
    pub magenta: String,
    pub green: String,
}

impl Wave {
    pub fn new(brand: &Brand, class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            blue: brand.blue.to_owned(),
            magenta: brand.magenta.to_owned(),
            green: brand.green.to_owned(),
        }
    }
}

/// Logo, name and tagline shown in the header and footer.
#[derive(Template, Clone, Debug)]
#[template(path = "components/brand-mark.html")]
pub struct BrandMark {
    pub logo: String,
    pub name: String,
    pub tagline: String,
    pub tagline_color: String,
}

#[derive(Template, Clone, Debug)]
#[template(path = "components/contact-details.html")]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub blue: String,
    pub green: String,
    pub magenta: String,
}

impl ContactDetails {
    pub fn mail_svg(&self) -> String {
        Icon::Mail.svg("h-4 w-4")
    }

    pub fn phone_svg(&self) -> String {
        Icon::Phone.svg("h-4 w-4")
    }

    pub fn location_svg(&self) -> String {
        Icon::MapPin.svg("h-4 w-4")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_title_omits_missing_parts() -> askama::Result<()> {
        let brand = Brand::default();
        let html = SectionTitle::new(&brand, "Only a heading").render()?;

        assert!(html.contains("Only a heading"));
        assert!(!html.contains("<p"));

        let html = SectionTitle::new(&brand, "Heading")
            .eyebrow("Services")
            .desc("Details")
            .render()?;

        assert_eq!(html.matches("<p").count(), 2);
        assert!(html.contains("color: #C23B8E"));

        Ok(())
    }

    #[test]
    fn test_section_title_treats_empty_as_missing() -> askama::Result<()> {
        let brand = Brand::default();
        let html = SectionTitle::new(&brand, "Heading")
            .eyebrow("")
            .desc("")
            .render()?;

        assert!(!html.contains("<p"));

        Ok(())
    }

    #[test]
    fn test_card_accents() -> askama::Result<()> {
        let brand = Brand::default();
        let green = Card::new(&brand, Icon::Users, "T", "B", Accent::Tertiary).render()?;

        assert!(green.contains("background-color: #3FAE4918"));
        assert!(green.contains("color: #3FAE49"));
        assert!(green.contains("linear-gradient(90deg, #0C4C8A, #C23B8E, #3FAE49)"));

        Ok(())
    }

    #[test]
    fn test_unknown_accent_renders_like_primary() -> askama::Result<()> {
        let brand = Brand::default();
        let primary = Card::new(&brand, Icon::Handshake, "T", "B", Accent::Primary).render()?;

        for name in ["orange", "", "PRIMARY-ish", "blue"] {
            let card = Card::with_accent_name(&brand, Icon::Handshake, "T", "B", name).render()?;
            assert_eq!(card, primary, "accent {name:?}");
        }

        Ok(())
    }

    #[test]
    fn test_card_escapes_text() -> askama::Result<()> {
        let brand = Brand::default();
        let html = Card::new(&brand, Icon::Mail, "<b>", "a & b", Accent::Primary).render()?;

        assert!(html.contains("&#60;b&#62;") || html.contains("&lt;b&gt;"));
        assert!(!html.contains("<b>"));

        Ok(())
    }

    #[test]
    fn test_wave_uses_brand_stops() -> askama::Result<()> {
        let html = Wave::new(&Brand::default(), "absolute bottom-0").render()?;

        assert!(html.contains(r##"stop-color="#0C4C8A""##));
        assert!(html.contains(r##"offset="0.5" stop-color="#C23B8E""##));
        assert!(html.contains(r##"offset="1" stop-color="#3FAE49""##));

        Ok(())
    }

    #[test]
    fn test_pill_renders_icon_and_label() -> askama::Result<()> {
        let html = Pill::new(Icon::ShieldCheck, "Trauma-informed").render()?;

        assert!(html.contains(r#"data-icon="shield-check""#));
        assert!(html.contains("Trauma-informed"));

        Ok(())
    }
}
