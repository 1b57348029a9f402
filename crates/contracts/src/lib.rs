//! Shared data contracts for the East Java tourism directory.
//!
//! The types here mirror the JSON documents exchanged with the backend
//! one-to-one: field names are the wire names (`nama_provinsi`,
//! `id_daerah`, ...), so serde derives need no renames.

pub mod domain;

pub use domain::daerah::Region;
pub use domain::provinsi::Province;
pub use domain::wisata::{Destination, DestinationDraft, RATING_MAX, RATING_MIN};
