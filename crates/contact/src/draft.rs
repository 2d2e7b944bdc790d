use strum::{Display, EnumString, VariantArray};

#[derive(EnumString, Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    #[strum(to_string = "organization", serialize = "org")]
    Organization,
    Message,
}

impl Field {
    /// Label written in front of the value in the mail body.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Organization => "Organization",
            Field::Message => "Message",
        }
    }
}

/// Unsaved contents of the contact form.
///
/// Every field is free text and defaults to empty; nothing is validated.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub message: String,
}

impl ContactDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a draft from form or query pairs, applied in order.
    ///
    /// Unknown keys are skipped. A field given more than once (including
    /// `org` next to `organization`) keeps its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        pairs
            .into_iter()
            .fold(Self::new(), |mut draft, (key, value)| {
                if let Ok(field) = key.as_ref().parse::<Field>() {
                    draft.edit(field, value);
                }
                draft
            })
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Organization => &self.organization,
            Field::Message => &self.message,
        }
    }

    /// Replaces one field, leaving the other three untouched.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Organization => &mut self.organization,
            Field::Message => &mut self.message,
        };

        *slot = value.into();
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.edit(field, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        Field::VARIANTS.iter().all(|f| self.get(*f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_is_empty() {
        let draft = ContactDraft::new();

        assert!(draft.is_empty());
        for field in Field::VARIANTS {
            assert_eq!(draft.get(*field), "");
        }
    }

    #[test]
    fn test_edit_replaces_only_one_field() {
        let mut draft = ContactDraft::new()
            .with(Field::Name, "Ada")
            .with(Field::Email, "ada@example.org");

        draft.edit(Field::Name, "Grace");

        assert_eq!(draft.name, "Grace");
        assert_eq!(draft.email, "ada@example.org");
        assert_eq!(draft.organization, "");
        assert_eq!(draft.message, "");
    }

    #[test]
    fn test_field_accepts_org_alias() {
        assert_eq!("org".parse::<Field>().ok(), Some(Field::Organization));
        assert_eq!(
            "organization".parse::<Field>().ok(),
            Some(Field::Organization)
        );
        assert_eq!(Field::Organization.to_string(), "organization");
        assert!("phone".parse::<Field>().is_err());
    }

    #[test]
    fn test_from_pairs_last_value_wins() {
        let draft = ContactDraft::from_pairs([
            ("org", "First School"),
            ("name", "Ada"),
            ("organization", "Second School"),
            ("phone", "555"),
        ]);

        assert_eq!(draft.organization, "Second School");
        assert_eq!(draft.name, "Ada");
        assert_eq!(draft.email, "");
    }
}
