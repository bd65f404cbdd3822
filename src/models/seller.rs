use serde::{Deserialize, Serialize};

/// Seller card from the input dataset
///
/// Unknown fields such as `start_date` or `position` are accepted and ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Seller {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Seller {
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Name shown in the report: "first last"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
