//! The single landing page: nav, hero, five anchored sections and the footer.

use askama::Template;
use mindbridge_contact::ContactDraft;
use mindbridge_shared::{Anchors, SectionId};

use crate::config::Config;

mod components;
mod icon;
mod sections;

pub use components::*;
pub use icon::Icon;
pub use sections::*;

/// Order in which the anchored sections appear below the hero.
pub const PAGE_SECTIONS: &[SectionId] = &[
    SectionId::Services,
    SectionId::Approach,
    SectionId::Training,
    SectionId::Resources,
    SectionId::Contact,
];

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: String,
    pub nav: String,
    pub hero: String,
    pub sections: Vec<String>,
    pub footer: String,
}

/// Renders every piece of the page for the given draft and footer year.
pub fn index(config: &Config, draft: &ContactDraft, year: i32) -> askama::Result<IndexTemplate> {
    let site = &config.site;
    let brand = &config.brand;

    let sections = PAGE_SECTIONS
        .iter()
        .map(|section| {
            let body = match section {
                SectionId::Services => services(brand)?.render()?,
                SectionId::Approach => approach(brand)?.render()?,
                SectionId::Training => training(brand)?.render()?,
                SectionId::Resources => resources(brand)?.render()?,
                SectionId::Contact => contact(site, brand, &config.contact, draft)?.render()?,
            };

            SectionFrame::new(*section, body).render()
        })
        .collect::<askama::Result<Vec<_>>>()?;

    Ok(IndexTemplate {
        title: format!("{} | {}", site.name, site.tagline),
        nav: Nav::new(site, brand)?.render()?,
        hero: Hero::new(site, brand)?.render()?,
        sections,
        footer: Footer::new(site, brand, year)?.render()?,
    })
}

/// Anchors present on the rendered page.
pub fn anchors() -> Anchors {
    Anchors::sections(PAGE_SECTIONS)
}

#[cfg(test)]
mod tests {
    use mindbridge_contact::Field;
    use mindbridge_shared::{Jump, jump};

    use super::*;

    #[test]
    fn test_index_has_every_anchor_once() -> askama::Result<()> {
        let html = index(&Config::default(), &ContactDraft::new(), 2026)?.render()?;

        for section in PAGE_SECTIONS {
            let id = format!(r#"id="{}""#, section.id());
            assert_eq!(html.matches(&id).count(), 1, "{id}");
        }

        Ok(())
    }

    #[test]
    fn test_sections_follow_page_order() -> askama::Result<()> {
        let html = index(&Config::default(), &ContactDraft::new(), 2026)?.render()?;

        let positions = PAGE_SECTIONS
            .iter()
            .map(|section| html.find(&format!(r#"id="{}""#, section.id())))
            .collect::<Option<Vec<_>>>()
            .unwrap_or_default();

        assert_eq!(positions.len(), PAGE_SECTIONS.len());
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        Ok(())
    }

    #[test]
    fn test_footer_shows_given_year() -> askama::Result<()> {
        let html = index(&Config::default(), &ContactDraft::new(), 2031)?.render()?;

        assert!(html.contains("© 2031 MindBridge Education. All rights reserved."));

        Ok(())
    }

    #[test]
    fn test_draft_values_flow_into_form_and_link() -> askama::Result<()> {
        let draft = ContactDraft::new().with(Field::Name, "Ada");
        let html = index(&Config::default(), &draft, 2026)?.render()?;

        assert!(html.contains(r#"value="Ada""#));
        assert!(html.contains("Name%3A%20Ada%0A"));

        Ok(())
    }

    #[test]
    fn test_page_anchors_accept_every_section() {
        let mut anchors = anchors();

        for section in PAGE_SECTIONS {
            assert_eq!(jump(&mut anchors, section.id()), Jump::Scrolled);
            assert_eq!(anchors.target(), Some(section.id()));
        }

        assert_eq!(jump(&mut anchors, "pricing"), Jump::Missing);
    }
}
