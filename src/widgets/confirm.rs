//! Deferred confirmation.
//!
//! A deletion that needs the user's consent is split in two: the widget
//! hands out a [`DeleteRequest`], the UI asks, and the answer comes back
//! through the widget's `resolve_delete`. Nothing blocks in between.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Cancel,
}

/// A pending deletion of the record at `position`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest<R> {
    position: usize,
    target: R,
    prompt: &'static str,
}

impl<R> DeleteRequest<R> {
    pub(crate) fn new(position: usize, target: R, prompt: &'static str) -> Self {
        Self {
            position,
            target,
            prompt,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// The record as it was when the request was made
    pub fn target(&self) -> &R {
        &self.target
    }

    pub fn prompt(&self) -> &'static str {
        self.prompt
    }
}
