use serde::{Deserialize, Serialize};

/// Sub-province area ("daerah") that destinations belong to.
///
/// `id_provinsi` references a [`Province`](crate::Province); a missing
/// province is a display concern (resolved to "Unknown"), never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: i64,
    pub id_provinsi: i64,
    pub nama_daerah: String,
}

impl Region {
    pub fn new(id: i64, id_provinsi: i64, nama_daerah: impl Into<String>) -> Self {
        Self {
            id,
            id_provinsi,
            nama_daerah: nama_daerah.into(),
        }
    }
}
