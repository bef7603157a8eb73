use serde::{Deserialize, Serialize};

/// An author submitted through the home page.
///
/// Carries no data yet. It is created by the presentation layer and handed
/// down to the repository untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {}

impl Author {
    pub fn new() -> Self {
        Self {}
    }
}
