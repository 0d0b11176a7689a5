//! Modal stack for managing overlays
//!
//! Only the top modal receives input; everything below it is drawn but inert.

/// Represents a modal overlay that can be displayed on top of the main UI
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// One-time "before you go" offer shown on the first quit attempt
    ExitIntent,
    /// Explanation of how the fares can be so low
    LowPriceInfo,
    /// Help dialog showing all keyboard shortcuts
    Help,
}

/// A stack of modal overlays
///
/// Modals are rendered from bottom to top, with only the top modal
/// receiving input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    /// Create a new empty modal stack
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Push a modal onto the stack
    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    /// Pop the top modal from the stack
    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    /// Get a reference to the top modal without removing it
    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Close everything, e.g. on restart
    pub fn clear(&mut self) {
        self.stack.clear();
    }

    /// Number of open modals
    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::ExitIntent);
        assert!(stack.top().is_some());

        stack.push(Modal::QuitConfirm);

        let top = stack.pop();
        assert_eq!(top, Some(Modal::QuitConfirm));

        let top = stack.pop();
        assert_eq!(top, Some(Modal::ExitIntent));
        assert!(stack.top().is_none());
    }

    #[test]
    fn test_clear_and_depth() {
        let mut stack = ModalStack::new();
        stack.push(Modal::LowPriceInfo);
        stack.push(Modal::Help);
        assert_eq!(stack.depth(), 2);

        stack.clear();
        assert!(stack.is_empty());
    }
}
