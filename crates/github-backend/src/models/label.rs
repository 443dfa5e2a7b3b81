use serde::Deserialize;

/// GitHub label
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubLabel {
    pub name: String,
}
