//! At-most-once holder for singleton sections.

use super::{RenderContext, Section};
use crate::izpack::{
    error::{Error, Result},
    markup::Node,
};

/// Holds zero or one section of kind `T`.
///
/// | held    | attach   | result                     |
/// |---------|----------|----------------------------|
/// | none    | none     | none                       |
/// | some(x) | none     | none (cleared)             |
/// | some(x) | some(y)  | `Error::DuplicateSection`  |
/// | none    | some(y)  | some(y)                    |
#[derive(Clone, Debug)]
pub struct Slot<T> {
    value: Option<T>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self { value: None }
    }
}

impl<T: Section> Slot<T> {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches or clears the section. Fails immediately on a second attach.
    pub fn attach(&mut self, section: Option<T>) -> Result<()> {
        match (self.value.is_some(), section) {
            (_, None) => {
                if self.value.take().is_some() {
                    log::debug!("Cleared {} section", T::KIND);
                }
                Ok(())
            }
            (true, Some(_)) => Err(Error::DuplicateSection { kind: T::KIND }),
            (false, Some(section)) => {
                log::debug!("Attached {} section", T::KIND);
                self.value = Some(section);
                Ok(())
            }
        }
    }

    /// The held section.
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// The held section, mutably.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    /// True when a section is held.
    pub fn is_attached(&self) -> bool {
        self.value.is_some()
    }

    /// Renders the held section, or a `no <kind> section` comment.
    pub fn render_or_placeholder(&self, ctx: &RenderContext) -> Result<Node> {
        match &self.value {
            Some(section) => section.render(ctx).map(Node::from),
            None => Ok(Node::comment(format!("no {} section", T::KIND))),
        }
    }
}
