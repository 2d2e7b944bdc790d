//! Anchor navigation.
//!
//! Every "jump to section" control on the page goes through [`jump`]. The
//! viewport is injected so the behaviour can be exercised without a browser.

use std::collections::BTreeSet;

use crate::SectionId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBlock {
    Start,
}

/// Something that can locate an element by id and bring it into view.
pub trait Viewport {
    fn has_anchor(&self, id: &str) -> bool;

    fn scroll_into_view(&mut self, id: &str, behavior: ScrollBehavior, block: ScrollBlock);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Jump {
    Scrolled,
    Missing,
}

/// Smooth-scrolls `id` to the top of the viewport. Unknown ids are a no-op.
pub fn jump<V: Viewport + ?Sized>(viewport: &mut V, id: &str) -> Jump {
    if !viewport.has_anchor(id) {
        return Jump::Missing;
    }

    viewport.scroll_into_view(id, ScrollBehavior::Smooth, ScrollBlock::Start);

    Jump::Scrolled
}

/// Anchors present on a rendered page.
///
/// Scrolling only records the target; the caller decides how to surface it
/// (a fragment redirect on the server, `scrollIntoView` in the browser).
#[derive(Clone, Debug, Default)]
pub struct Anchors {
    ids: BTreeSet<String>,
    target: Option<String>,
}

impl Anchors {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            target: None,
        }
    }

    pub fn sections(sections: &[SectionId]) -> Self {
        Self::new(sections.iter().map(SectionId::id))
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

impl Viewport for Anchors {
    fn has_anchor(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    fn scroll_into_view(&mut self, id: &str, _behavior: ScrollBehavior, _block: ScrollBlock) {
        self.target = Some(id.to_owned());
    }
}
