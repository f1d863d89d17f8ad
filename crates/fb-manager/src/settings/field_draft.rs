use fb_core::ValidationOutcome;

/// What an input field currently shows, and whether it would be accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldDraft {
    pub value: String,
    pub outcome: ValidationOutcome,
}

impl FieldDraft {
    pub fn accepted<S: Into<String>>(value: S) -> Self {
        Self {
            value: value.into(),
            outcome: ValidationOutcome::accepted(),
        }
    }
}
