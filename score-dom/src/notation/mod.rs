//! Notation payloads that attach to notes and chords.
//!
//! These are plain ordered value objects: the score tree owns them in
//! per-kind lists and the rebuild pass clones them around. Types whose
//! list insertion is idempotent-by-kind expose a `kind` discriminator.

pub mod articulations;
pub mod directions;
pub mod lines;
pub mod note_heads;
pub mod ornaments;
pub mod technicals;

pub use articulations::{Articulation, ArticulationKind};
pub use directions::{
    Coda, DalSegno, DalSegnoKind, Damp, Dynamics, DynamicsKind, Eyeglasses,
    Fermata, FermataKind, OtherDynamics, Segno, Slash, Syllable,
    SyllableKind, Words,
};
pub use lines::{
    Beam, BeamKind, Ligature, LigatureKind, Pedal, PedalKind, Slur,
    SlurKind, Spanner, SpannerKind, SpanDirection, Tie, TieKind, Wedge,
    WedgeKind,
};
pub use note_heads::{NoteHeadKind, Stem, StemKind};
pub use ornaments::{
    Glissando, GlissandoKind, Ornament, OrnamentKind, Slide, SlideKind,
};
pub use technicals::{
    Technical, TechnicalKind, TechnicalWithInteger,
    TechnicalWithIntegerKind, TechnicalWithString, TechnicalWithStringKind,
};

/// Vertical placement of a notation relative to the staff.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum PlacementKind {
    #[default]
    Unspecified,
    Above,
    Below,
}
impl ToString for PlacementKind {
    fn to_string(&self) -> String {
        match self {
            Self::Unspecified => "".to_string(),
            Self::Above => "above".to_string(),
            Self::Below => "below".to_string(),
        }
    }
}
