use serde::{Deserialize, Serialize};

/// Top-level administrative region, e.g. "Jawa Timur".
///
/// Loaded once per session from `GET /provinsis`; never mutated by the
/// application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    pub id: i64,
    pub nama_provinsi: String,
}

impl Province {
    pub fn new(id: i64, nama_provinsi: impl Into<String>) -> Self {
        Self {
            id,
            nama_provinsi: nama_provinsi.into(),
        }
    }
}
