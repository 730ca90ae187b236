use crate::models::ContactMethod;

/// Picker over the fixed set of contact methods.
///
/// Changing the selection emits nothing; the parent only learns the choice
/// through [`ContactMethodSelector::submit`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactMethodSelector {
    selected: ContactMethod,
}

impl ContactMethodSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> ContactMethod {
        self.selected
    }

    pub fn select(&mut self, method: ContactMethod) {
        self.selected = method;
    }

    pub fn select_next(&mut self) {
        self.selected = self.selected.next();
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.previous();
    }

    /// Explicit submission: hand the chosen method to the caller
    pub fn submit(&self) -> ContactMethod {
        self.selected
    }
}
