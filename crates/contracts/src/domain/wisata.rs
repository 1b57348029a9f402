use serde::{Deserialize, Serialize};

/// Lowest accepted destination rating.
pub const RATING_MIN: f32 = 1.0;
/// Highest accepted destination rating.
pub const RATING_MAX: f32 = 5.0;

/// A tourism destination ("wisata") as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: i64,
    pub id_daerah: i64,
    pub nama: String,
    pub alamat: String,
    pub rating: f32,
    pub link_gmaps: String,
}

impl Destination {
    /// Number of filled stars on the 5-star display scale.
    ///
    /// The continuous rating is rounded half away from zero: 4.4 shows
    /// four stars, 4.5 shows five.
    pub fn star_count(&self) -> u8 {
        self.rating.round().clamp(0.0, 5.0) as u8
    }
}

/// Payload for creating a destination (`POST /wisatas`).
///
/// The backend assigns the `id` and returns the stored [`Destination`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationDraft {
    pub id_daerah: i64,
    pub nama: String,
    pub alamat: String,
    pub rating: f32,
    pub link_gmaps: String,
}

impl DestinationDraft {
    /// Form-level validation. The mutation path itself does not validate;
    /// the form calls this before submitting.
    pub fn validate(&self) -> Result<(), String> {
        if self.id_daerah <= 0 {
            return Err("Pilih daerah/kota terlebih dahulu.".into());
        }
        if self.nama.trim().is_empty() {
            return Err("Nama destinasi wisata wajib diisi.".into());
        }
        if self.alamat.trim().is_empty() {
            return Err("Alamat lengkap wajib diisi.".into());
        }
        if !(RATING_MIN..=RATING_MAX).contains(&self.rating) {
            return Err("Rating harus antara 1.0 hingga 5.0.".into());
        }
        if self.link_gmaps.trim().is_empty() {
            return Err("Link Google Maps wajib diisi.".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> DestinationDraft {
        DestinationDraft {
            id_daerah: 3,
            nama: "Pantai Klayar".to_string(),
            alamat: "Kalak, Donorojo, Pacitan".to_string(),
            rating: 4.6,
            link_gmaps: "https://maps.google.com/?q=pantai+klayar".to_string(),
        }
    }

    #[test]
    fn star_count_rounds_half_away_from_zero() {
        let mut dest = Destination {
            id: 1,
            id_daerah: 3,
            nama: "Candi Borobudur".to_string(),
            alamat: "Magelang".to_string(),
            rating: 4.4,
            link_gmaps: String::new(),
        };
        assert_eq!(dest.star_count(), 4);
        dest.rating = 4.5;
        assert_eq!(dest.star_count(), 5);
        dest.rating = 1.0;
        assert_eq!(dest.star_count(), 1);
    }

    #[test]
    fn star_count_stays_on_the_five_star_scale() {
        let dest = Destination {
            id: 1,
            id_daerah: 3,
            nama: "X".to_string(),
            alamat: String::new(),
            rating: 7.2,
            link_gmaps: String::new(),
        };
        assert_eq!(dest.star_count(), 5);
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn draft_requires_region_and_name() {
        let mut d = draft();
        d.id_daerah = 0;
        assert!(d.validate().is_err());

        let mut d = draft();
        d.nama = "   ".to_string();
        assert!(d.validate().is_err());
    }

    #[test]
    fn draft_rejects_out_of_range_rating() {
        let mut d = draft();
        d.rating = 0.5;
        assert!(d.validate().is_err());
        d.rating = 5.5;
        assert!(d.validate().is_err());
        d.rating = 5.0;
        assert!(d.validate().is_ok());
    }

    #[test]
    fn destination_parses_backend_payload() {
        let json = r#"{
            "id": 12,
            "id_daerah": 4,
            "nama": "Gunung Bromo",
            "alamat": "Podokoyo, Tosari, Pasuruan",
            "rating": 4.8,
            "link_gmaps": "https://maps.google.com/?q=bromo"
        }"#;
        let dest: Destination = serde_json::from_str(json).expect("payload should parse");
        assert_eq!(dest.id, 12);
        assert_eq!(dest.id_daerah, 4);
        assert_eq!(dest.nama, "Gunung Bromo");
        assert_eq!(dest.star_count(), 5);
    }

    #[test]
    fn draft_serializes_with_wire_field_names() {
        let value = serde_json::to_value(draft()).expect("draft should serialize");
        let obj = value.as_object().expect("draft is a JSON object");
        for key in ["id_daerah", "nama", "alamat", "rating", "link_gmaps"] {
            assert!(obj.contains_key(key), "missing wire field `{key}`");
        }
        assert!(!obj.contains_key("id"), "drafts must not carry an id");
    }
}
