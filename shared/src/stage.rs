//! Explicit view state for the diagnosis flow, in place of state scattered
//! across the visible interface. The results area is always rendered
//! wholesale from the current `Stage`; nothing is patched incrementally.

use serde::Serialize;

use crate::report::DiagnosisView;

#[derive(Serialize, Clone, Debug, PartialEq, Default)]
pub enum Stage {
    #[default]
    Idle,
    FileSelected,
    Submitting,
    Result(DiagnosisView),
}

impl Stage {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Stage::Submitting)
    }

    /// A capture event moves any settled state to `FileSelected`; an
    /// in-flight submission keeps its state.
    pub fn file_selected(&mut self) {
        if !self.is_submitting() {
            *self = Stage::FileSelected;
        }
    }

    /// Starts a submission unless one is already outstanding. Returns
    /// whether the transition happened; callers must not issue a request
    /// when it did not.
    pub fn begin_submission(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = Stage::Submitting;
        true
    }

    pub fn finish(&mut self, view: DiagnosisView) {
        *self = Stage::Result(view);
    }

    /// Back to the initial capture-ready state.
    pub fn reset(&mut self) {
        *self = Stage::Idle;
    }
}
