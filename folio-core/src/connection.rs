//! Data-saving decision for slow or metered connections.

/// What the browser reports about the current network, when it reports
/// anything at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionHint {
    pub save_data: bool,
    pub effective_type: Option<String>,
}

impl ConnectionHint {
    /// True when the visitor asked to save data or the link is 2G class
    /// (`2g` and `slow-2g`).
    #[must_use]
    pub fn wants_reduced_data(&self) -> bool {
        self.save_data
            || self
                .effective_type
                .as_deref()
                .is_some_and(|kind| kind.contains("2g"))
    }
}
