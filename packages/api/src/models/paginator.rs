use serde::{Deserialize, Serialize};

/// Envelope the backend wraps collection responses in.
///
/// Only `data` is used by the client. The page counters are informational and
/// tolerate being absent or `null`; a missing `data` field reads as an empty
/// page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginator<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub last_page: Option<u32>,
    #[serde(default)]
    pub from: Option<u32>,
    #[serde(default)]
    pub to: Option<u32>,
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

impl<T> Paginator<T> {
    /// Single page holding every item.
    pub fn single_page(data: Vec<T>) -> Self {
        let total = u32::try_from(data.len()).unwrap_or(u32::MAX);
        Self {
            current_page: Some(1),
            last_page: Some(1),
            from: Some(u32::from(total > 0)),
            to: Some(total),
            total: Some(total),
            per_page: Some(total),
            data,
        }
    }
}
