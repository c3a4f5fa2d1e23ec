use serde::Deserialize;

fn default_take() -> usize {
    50
}

/// Offset pagination for staff-facing list endpoints.
#[derive(Debug, Deserialize)]
pub struct Paging {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_take")]
    pub take: usize,
}
