pub mod daerah;
pub mod provinsi;
pub mod wisata;
