use strum::{Display, EnumString, VariantArray};

/// Stable anchors a deployment may link to from outside the page.
#[derive(EnumString, Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum SectionId {
    Services,
    Approach,
    Training,
    Resources,
    Contact,
}

impl SectionId {
    /// Label shown on navigation buttons.
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Services => "Services",
            SectionId::Approach => "Our Approach",
            SectionId::Training => "Training",
            SectionId::Resources => "Resources",
            SectionId::Contact => "Contact",
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            SectionId::Services => "services",
            SectionId::Approach => "approach",
            SectionId::Training => "training",
            SectionId::Resources => "resources",
            SectionId::Contact => "contact",
        }
    }
}
