use chrono::Local;

/// Defines the contract for supplying document identifiers to the builder.
///
/// The identifier is generated once per document and reused as the prefix
/// for the decision, decision-table, rule and diagram element ids. Injecting
/// the source keeps the builder deterministic and testable without a
/// wall-clock dependence.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> String;
}

/// Derives the identifier from the current wall-clock second:
/// `decision_` followed by `YYYYMMDDhhmmss`.
///
/// Two documents built within the same second share an identifier. That
/// collision window is an accepted property of this source, not guarded
/// against; use a [`FixedIdSource`] (or your own) where it matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampIdSource;

impl IdSource for TimestampIdSource {
    fn next_id(&self) -> String {
        format!("decision_{}", Local::now().format("%Y%m%d%H%M%S"))
    }
}

/// Always yields the same caller-chosen identifier.
#[derive(Debug, Clone)]
pub struct FixedIdSource {
    id: String,
}

impl FixedIdSource {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

impl IdSource for FixedIdSource {
    fn next_id(&self) -> String {
        self.id.clone()
    }
}
