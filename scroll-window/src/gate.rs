/// Single-flight gate: at most one fetch may be outstanding per window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConcurrencyGate {
    loading: bool,
}

impl ConcurrencyGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Closes the gate. Returns `false` (and changes nothing) if it was already closed.
    #[must_use]
    pub fn try_enter(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    pub fn leave(&mut self) {
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
