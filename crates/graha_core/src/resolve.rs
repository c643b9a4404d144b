//! Caller-facing body and ayanamsa names.
//!
//! Lookups are exact and case-sensitive. Unknown names are not errors:
//! bodies fall back to the Sun and ayanamsas to Lahiri.

use graha_engine::{BodyId, SiderealModeId};

/// Bodies a position query can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

impl Graha {
    /// English name, as accepted by [`resolve_body`].
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Exact, case-sensitive lookup by English name.
    pub fn from_english_name(name: &str) -> Option<Self> {
        ALL_GRAHAS.into_iter().find(|g| g.english_name() == name)
    }

    /// Engine body queried for this graha. Both nodes use the true node.
    pub const fn body_id(self) -> BodyId {
        match self {
            Self::Surya => BodyId::SUN,
            Self::Chandra => BodyId::MOON,
            Self::Mangal => BodyId::MARS,
            Self::Buddh => BodyId::MERCURY,
            Self::Guru => BodyId::JUPITER,
            Self::Shukra => BodyId::VENUS,
            Self::Shani => BodyId::SATURN,
            Self::Rahu | Self::Ketu => BodyId::TRUE_NODE,
        }
    }

    /// Degrees added to the engine longitude. Ketu is opposite Rahu.
    pub const fn longitude_offset_deg(self) -> f64 {
        match self {
            Self::Ketu => 180.0,
            _ => 0.0,
        }
    }
}

/// Resolve a caller body name; unknown names resolve to the Sun.
pub fn resolve_body(name: &str) -> Graha {
    Graha::from_english_name(name).unwrap_or_else(|| {
        log::debug!("unknown body name {name:?}, using Sun");
        Graha::Surya
    })
}

/// Sidereal modes a query can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ayanamsa {
    #[default]
    Lahiri,
}

impl Ayanamsa {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lahiri => "Lahiri",
        }
    }

    pub const fn mode_id(self) -> SiderealModeId {
        match self {
            Self::Lahiri => SiderealModeId::LAHIRI,
        }
    }
}

/// Resolve an optional ayanamsa name; absent or unknown names resolve to Lahiri.
pub fn resolve_sidereal_mode(name: Option<&str>) -> Ayanamsa {
    match name {
        Some("Lahiri") | None => Ayanamsa::Lahiri,
        Some(other) => {
            log::debug!("unknown ayanamsa {other:?}, using Lahiri");
            Ayanamsa::Lahiri
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_names_resolve() {
        for g in ALL_GRAHAS {
            assert_eq!(resolve_body(g.english_name()), g);
        }
    }

    #[test]
    fn body_codes() {
        assert_eq!(resolve_body("Sun").body_id(), BodyId(0));
        assert_eq!(resolve_body("Moon").body_id(), BodyId(1));
        assert_eq!(resolve_body("Mercury").body_id(), BodyId(2));
        assert_eq!(resolve_body("Venus").body_id(), BodyId(3));
        assert_eq!(resolve_body("Mars").body_id(), BodyId(4));
        assert_eq!(resolve_body("Jupiter").body_id(), BodyId(5));
        assert_eq!(resolve_body("Saturn").body_id(), BodyId(6));
    }

    #[test]
    fn nodes_use_true_node() {
        assert_eq!(Graha::Rahu.body_id(), BodyId::TRUE_NODE);
        assert_eq!(Graha::Ketu.body_id(), BodyId::TRUE_NODE);
        assert_eq!(Graha::Ketu.longitude_offset_deg(), 180.0);
        assert_eq!(Graha::Rahu.longitude_offset_deg(), 0.0);
    }

    #[test]
    fn unknown_and_miscased_names_fall_back_to_sun() {
        assert_eq!(resolve_body("Pluto"), Graha::Surya);
        assert_eq!(resolve_body("moon"), Graha::Surya);
        assert_eq!(resolve_body(""), Graha::Surya);
    }

    #[test]
    fn ayanamsa_defaults_to_lahiri() {
        assert_eq!(resolve_sidereal_mode(None), Ayanamsa::Lahiri);
        assert_eq!(resolve_sidereal_mode(Some("Lahiri")), Ayanamsa::Lahiri);
        assert_eq!(resolve_sidereal_mode(Some("Raman")), Ayanamsa::Lahiri);
        assert_eq!(Ayanamsa::default().mode_id(), SiderealModeId::LAHIRI);
    }
}
