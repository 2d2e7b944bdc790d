use serde::Deserialize;

use crate::{ContactDraft, Field};

pub const DEFAULT_RECIPIENT: &str = "info@mindbridgeeducation.com";
pub const DEFAULT_SUBJECT: &str = "MindBridge Education — Consultation Request";

/// Where the contact form hands off to the visitor's mail client.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Mailto {
    #[serde(default = "default_recipient")]
    pub recipient: String,
    #[serde(default = "default_subject")]
    pub subject: String,
}

impl Default for Mailto {
    fn default() -> Self {
        Self {
            recipient: default_recipient(),
            subject: default_subject(),
        }
    }
}

fn default_recipient() -> String {
    DEFAULT_RECIPIENT.to_owned()
}

fn default_subject() -> String {
    DEFAULT_SUBJECT.to_owned()
}

impl Mailto {
    pub fn new(recipient: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            subject: subject.into(),
        }
    }

    /// Plain-text mail body for a draft.
    ///
    /// ```text
    /// Name: …
    /// Email: …
    /// Organization: …
    ///
    /// Message:
    /// …
    /// ```
    pub fn body(&self, draft: &ContactDraft) -> String {
        format!(
            "{}: {}\n{}: {}\n{}: {}\n\n{}:\n{}",
            Field::Name.label(),
            draft.name,
            Field::Email.label(),
            draft.email,
            Field::Organization.label(),
            draft.organization,
            Field::Message.label(),
            draft.message,
        )
    }

    /// `mailto:` URI with percent-encoded subject and body.
    pub fn href(&self, draft: &ContactDraft) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body(draft)),
        )
    }
}
