use serde::Deserialize;

/// One homework entry as returned by the review API. Both fields are optional
/// so that the status translator owns the missing-field error paths instead
/// of the deserializer.
#[derive(Debug, Clone, Deserialize)]
pub struct Homework {
    pub homework_name: Option<String>,
    pub status: Option<String>,
}
