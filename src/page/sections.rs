//! Page sections, top to bottom.

use askama::Template;
use mindbridge_contact::{ContactDraft, Field, Mailto};
use mindbridge_shared::{Accent, Brand, SectionId};
use strum::VariantArray;

use super::{
    BrandMark, CONTAINER, Card, ContactDetails, GradientText, Icon, Pill, SectionTitle, Wave,
};
use crate::config::SiteConfig;

/// Anchors linked from the footer; the header links every section.
pub const FOOTER_LINKS: &[SectionId] = &[
    SectionId::Services,
    SectionId::Training,
    SectionId::Resources,
    SectionId::Contact,
];

#[derive(Clone, Debug)]
pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
}

impl From<&SectionId> for NavLink {
    fn from(section: &SectionId) -> Self {
        Self {
            id: section.id(),
            label: section.label(),
        }
    }
}

pub fn brand_mark(site: &SiteConfig, brand: &Brand) -> BrandMark {
    BrandMark {
        logo: site.logo.to_owned(),
        name: site.name.to_owned(),
        tagline: site.tagline.to_owned(),
        tagline_color: brand.green.to_owned(),
    }
}

pub fn contact_details(site: &SiteConfig, brand: &Brand) -> ContactDetails {
    ContactDetails {
        email: site.email.to_owned(),
        phone: site.phone.to_owned(),
        location: site.location.to_owned(),
        blue: brand.blue.to_owned(),
        green: brand.green.to_owned(),
        magenta: brand.magenta.to_owned(),
    }
}

#[derive(Template)]
#[template(path = "sections/nav.html")]
pub struct Nav {
    pub container: &'static str,
    pub brand_mark: String,
    pub links: Vec<NavLink>,
    pub cta_color: String,
    pub arrow: String,
}

impl Nav {
    pub fn new(site: &SiteConfig, brand: &Brand) -> askama::Result<Self> {
        Ok(Self {
            container: CONTAINER,
            brand_mark: brand_mark(site, brand).render()?,
            links: SectionId::VARIANTS.iter().map(NavLink::from).collect(),
            cta_color: brand.blue.to_owned(),
            arrow: Icon::ArrowRight.svg("h-4 w-4"),
        })
    }
}

#[derive(Clone, Debug)]
pub struct Highlight {
    pub kicker: &'static str,
    pub value: &'static str,
}

#[derive(Template)]
#[template(path = "sections/hero.html")]
pub struct Hero {
    pub container: &'static str,
    pub glow: String,
    pub pills: Vec<String>,
    pub gradient_text: String,
    pub lead: String,
    pub explore_color: String,
    pub arrow: String,
    pub sparkles: String,
    pub highlights: Vec<Highlight>,
    pub blue: String,
    pub magenta: String,
    pub green: String,
    pub panel_wash: String,
    pub cards: Vec<String>,
    pub quick_contact: String,
    pub wave: String,
}

impl Hero {
    pub fn new(site: &SiteConfig, brand: &Brand) -> askama::Result<Self> {
        let pills = [
            Pill::new(Icon::ShieldCheck, "Trauma-informed"),
            Pill::new(Icon::Users, "Student-centered"),
            Pill::new(Icon::LineChart, "Data-driven"),
        ]
        .iter()
        .map(Template::render)
        .collect::<askama::Result<Vec<_>>>()?;

        let cards = [
            Card::new(
                brand,
                Icon::GraduationCap,
                "Capacity-building PD",
                "Practical strategies educators can use tomorrow.",
                Accent::Primary,
            ),
            Card::new(
                brand,
                Icon::HeartHandshake,
                "Restorative & reintegration",
                "Support students returning from suspension/expulsion.",
                Accent::Tertiary,
            ),
            Card::new(
                brand,
                Icon::ClipboardCheck,
                "Grant strategy + writing",
                "From needs assessment to award-ready narratives.",
                Accent::Secondary,
            ),
        ]
        .iter()
        .map(Template::render)
        .collect::<askama::Result<Vec<_>>>()?;

        Ok(Self {
            container: CONTAINER,
            glow: brand.glow(),
            pills,
            gradient_text: GradientText::new(brand, "educational services").render()?,
            lead: format!(
                "{} partners with schools, districts, and organizations to strengthen \
                 systems, build capacity, and support students — especially those facing barriers.",
                site.name
            ),
            explore_color: brand.blue.to_owned(),
            arrow: Icon::ArrowRight.svg("h-4 w-4"),
            sparkles: Icon::Sparkles.svg("h-4 w-4"),
            highlights: vec![
                Highlight {
                    kicker: "Leadership",
                    value: "Development",
                },
                Highlight {
                    kicker: "School",
                    value: "Consulting",
                },
                Highlight {
                    kicker: "Grant",
                    value: "Writing",
                },
            ],
            blue: brand.blue.to_owned(),
            magenta: brand.magenta.to_owned(),
            green: brand.green.to_owned(),
            panel_wash: brand.wash([12, 10, 10]),
            cards,
            quick_contact: contact_details(site, brand).render()?,
            wave: Wave::new(brand, "absolute bottom-0 left-0 right-0").render()?,
        })
    }
}

/// Outer block of an anchored section: id, vertical rhythm and container.
#[derive(Template)]
#[template(path = "sections/frame.html")]
pub struct SectionFrame {
    pub id: &'static str,
    pub tinted: bool,
    pub container: &'static str,
    pub body: String,
}

impl SectionFrame {
    pub fn new(section: SectionId, body: String) -> Self {
        Self {
            id: section.id(),
            tinted: matches!(section, SectionId::Approach | SectionId::Resources),
            container: CONTAINER,
            body,
        }
    }
}

#[derive(Template)]
#[template(path = "sections/card-grid.html")]
pub struct CardGrid {
    pub title: String,
    pub cards: Vec<String>,
}

impl CardGrid {
    fn new(title: SectionTitle, cards: &[Card]) -> askama::Result<Self> {
        Ok(Self {
            title: title.render()?,
            cards: cards
                .iter()
                .map(Template::render)
                .collect::<askama::Result<_>>()?,
        })
    }
}

pub fn services(brand: &Brand) -> askama::Result<CardGrid> {
    let title = SectionTitle::new(
        brand,
        "Educational products and services built for real-world needs",
    )
    .eyebrow("Services")
    .desc(
        "Consulting and capacity-building that strengthens systems, supports educators, \
         and improves outcomes for students.",
    );

    let cards = [
        Card::new(
            brand,
            Icon::Handshake,
            "Organizational Development",
            "Leadership coaching, team alignment, and implementation supports that move plans into practice.",
            Accent::Primary,
        ),
        Card::new(
            brand,
            Icon::Users,
            "Leadership Development",
            "Training and coaching for administrators, teacher leaders, and student support teams.",
            Accent::Secondary,
        ),
        Card::new(
            brand,
            Icon::BookOpen,
            "Instructional & Student Supports",
            "Strategies for engagement, behavior support, and equitable learning environments.",
            Accent::Tertiary,
        ),
        Card::new(
            brand,
            Icon::HeartHandshake,
            "Restorative Practices",
            "Circles, conferences, and relationship-centered responses to harm.",
            Accent::Tertiary,
        ),
        Card::new(
            brand,
            Icon::ShieldCheck,
            "Reintegration Systems",
            "Practical protocols for students returning from suspension, in-school suspension, or expulsion.",
            Accent::Primary,
        ),
        Card::new(
            brand,
            Icon::ClipboardCheck,
            "Consulting & Grant Writing",
            "Needs assessment, program design, evidence alignment, budgets, and full narrative writing.",
            Accent::Secondary,
        ),
    ];

    CardGrid::new(title, &cards)
}

pub fn training(brand: &Brand) -> askama::Result<CardGrid> {
    let title = SectionTitle::new(brand, "Trainings educators actually use")
        .eyebrow("Professional Learning")
        .desc(
            "Interactive sessions with tools, scripts, and implementation plans — designed \
             for both elementary and secondary contexts.",
        );

    let cards = [
        Card::new(
            brand,
            Icon::ShieldCheck,
            "STARR Strategy",
            "De-escalation and reflection routines that build self-regulation and accountability.",
            Accent::Primary,
        ),
        Card::new(
            brand,
            Icon::HeartHandshake,
            "Restorative Practices",
            "Circles, conferences, and repair-focused conversations.",
            Accent::Tertiary,
        ),
        Card::new(
            brand,
            Icon::Users,
            "Reintegration Systems",
            "Protocols, checklists, and role-plays for successful student re-entry.",
            Accent::Secondary,
        ),
        Card::new(
            brand,
            Icon::LineChart,
            "Data & Discipline Review",
            "Identify patterns, disproportionality, and high-leverage intervention points.",
            Accent::Primary,
        ),
        Card::new(
            brand,
            Icon::GraduationCap,
            "Leadership for Student Support",
            "Build functioning teams (MTSS/PBIS), clear roles, and sustainable routines.",
            Accent::Secondary,
        ),
        Card::new(
            brand,
            Icon::ClipboardCheck,
            "Grant Readiness Workshop",
            "Align needs, evidence-based programs, and measurable outcomes.",
            Accent::Tertiary,
        ),
    ];

    CardGrid::new(title, &cards)
}

#[derive(Clone, Debug)]
pub struct Step {
    pub lead: &'static str,
    pub text: &'static str,
    pub color: String,
}

#[derive(Clone, Debug)]
pub struct Outcome {
    pub label: &'static str,
    pub symbol: &'static str,
    pub color: String,
}

#[derive(Template)]
#[template(path = "sections/approach.html")]
pub struct Approach {
    pub title: String,
    pub steps: Vec<Step>,
    pub tools: &'static str,
    pub wash: String,
    pub outcomes: Vec<Outcome>,
}

pub fn approach(brand: &Brand) -> askama::Result<Approach> {
    let title = SectionTitle::new(brand, "Practical, restorative, and data-informed")
        .eyebrow("Our Approach")
        .desc(
            "We blend strong systems, skill-building, and relationship-centered practices — \
             especially for students who are vulnerable or experiencing behavioral challenges.",
        );

    let steps = [
        (
            "Listen first:",
            "Walkthroughs, interviews, and data review to understand the real problem.",
        ),
        (
            "Design for implementation:",
            "Clear roles, routines, and tools staff can sustain.",
        ),
        (
            "Coach & calibrate:",
            "Side-by-side support, feedback loops, and continuous improvement.",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(idx, (lead, text))| Step {
        lead,
        text,
        color: brand.color(Accent::cycle(idx)).to_owned(),
    })
    .collect();

    let outcomes = [
        ("Fewer repeat incidents", "↓"),
        ("More instructional time", "↑"),
        ("Stronger adult-student relationships", "↑"),
        ("Clear, consistent processes", "✓"),
    ]
    .into_iter()
    .enumerate()
    .map(|(idx, (label, symbol))| Outcome {
        label,
        symbol,
        color: brand.color(Accent::cycle(idx)).to_owned(),
    })
    .collect();

    Ok(Approach {
        title: title.render()?,
        steps,
        tools: "STARR Strategy • Restorative Conversations • Reintegration Protocols • Staff \
                Role-Plays • Student-Facing Scripts • Checklists & Tracking",
        wash: brand.wash([10, 8, 8]),
        outcomes,
    })
}

#[derive(Clone, Debug)]
pub struct ResourceTile {
    pub title: &'static str,
    pub text: &'static str,
    pub color: String,
}

#[derive(Template)]
#[template(path = "sections/resources.html")]
pub struct Resources {
    pub title: String,
    pub tiles: Vec<ResourceTile>,
}

pub fn resources(brand: &Brand) -> askama::Result<Resources> {
    let title = SectionTitle::new(brand, "Tools you can download and use")
        .eyebrow("Resources")
        .desc(
            "Your website can link to your PDFs (protocols, checklists, scripts) and collect \
             requests for trainings.",
        );

    let tiles = [
        (
            "Reintegration Protocols",
            "Elementary + Secondary versions with printable and fillable options.",
        ),
        (
            "Student-Facing Scripts",
            "Reflection prompts and restorative language educators can use immediately.",
        ),
        (
            "Training Toolkits",
            "Agendas, facilitation guides, role-plays, and implementation checklists.",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(idx, (title, text))| ResourceTile {
        title,
        text,
        color: brand.color(Accent::cycle(idx)).to_owned(),
    })
    .collect();

    Ok(Resources {
        title: title.render()?,
        tiles,
    })
}

/// Send button carrying the `mailto:` link for the current draft.
#[derive(Template)]
#[template(path = "partials/contact-send.html")]
pub struct ContactSend {
    pub href: String,
    pub label: String,
    pub color: String,
    pub mail: String,
}

impl ContactSend {
    pub fn new(site: &SiteConfig, brand: &Brand, mailto: &Mailto, draft: &ContactDraft) -> Self {
        Self {
            href: mailto.href(draft),
            label: format!("Email {}", site.short_name),
            color: brand.blue.to_owned(),
            mail: Icon::Mail.svg("h-4 w-4"),
        }
    }
}

/// Hint text shown inside an empty form control.
pub fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "Name",
        Field::Email => "Email",
        Field::Organization => "School / Organization",
        Field::Message => "What are you looking to build or improve?",
    }
}

#[derive(Clone, Debug)]
pub struct FormField {
    pub name: String,
    pub placeholder: &'static str,
    pub value: String,
    pub multiline: bool,
    pub wide: bool,
}

#[derive(Template)]
#[template(path = "sections/contact.html")]
pub struct Contact {
    pub title: String,
    pub details: String,
    pub wash: String,
    pub requests: Vec<&'static str>,
    pub fields: Vec<FormField>,
    pub focus_color: String,
    pub recipient: String,
    pub subject: String,
    pub send: String,
    pub send_label: String,
}

pub fn contact(
    site: &SiteConfig,
    brand: &Brand,
    mailto: &Mailto,
    draft: &ContactDraft,
) -> askama::Result<Contact> {
    let title = SectionTitle::new(
        brand,
        "Let’s build a plan that fits your students and staff",
    )
    .eyebrow("Contact")
    .desc("Send a quick message and we’ll follow up to schedule a consult.");

    let fields = Field::VARIANTS
        .iter()
        .map(|field| FormField {
            name: field.to_string(),
            placeholder: placeholder(*field),
            value: draft.get(*field).to_owned(),
            multiline: *field == Field::Message,
            wide: matches!(field, Field::Organization | Field::Message),
        })
        .collect();

    let send = ContactSend::new(site, brand, mailto, draft);

    Ok(Contact {
        title: title.render()?,
        details: contact_details(site, brand).render()?,
        wash: brand.wash([10, 8, 8]),
        requests: vec![
            "Reintegration & restorative implementation",
            "Leadership development & team coaching",
            "Grant strategy + writing support",
        ],
        fields,
        focus_color: brand.blue.to_owned(),
        recipient: mailto.recipient.to_owned(),
        subject: mailto.subject.to_owned(),
        send: send.render()?,
        send_label: send.label,
    })
}

#[derive(Template)]
#[template(path = "sections/footer.html")]
pub struct Footer {
    pub container: &'static str,
    pub brand_mark: String,
    pub links: Vec<NavLink>,
    pub name: String,
    pub short_name: String,
    pub year: i32,
    pub blue: String,
    pub magenta: String,
    pub green: String,
}

impl Footer {
    pub fn new(site: &SiteConfig, brand: &Brand, year: i32) -> askama::Result<Self> {
        Ok(Self {
            container: CONTAINER,
            brand_mark: brand_mark(site, brand).render()?,
            links: FOOTER_LINKS.iter().map(NavLink::from).collect(),
            name: site.name.to_owned(),
            short_name: site.short_name.to_owned(),
            year,
            blue: brand.blue.to_owned(),
            magenta: brand.magenta.to_owned(),
            green: brand.green.to_owned(),
        })
    }
}
