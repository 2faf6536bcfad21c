//! Exact-arithmetic building blocks every score element is made of.
//!
//! Durations and positions are fractions of a whole note and stay exact
//! through every accumulation. Tuplet ratios are pairs of exact fractions
//! so that nesting can be un-composed without truncation. Pitches carry
//! quarter-tone alterations and spell themselves in a selectable
//! language.

pub mod pitch;
pub mod placement;
pub mod tuplet_factor;
pub mod whole_notes;

pub use pitch::{
    Alteration, DiatonicStep, Octave, PitchLanguage, QuarterTonesPitch,
};
pub use placement::{
    cmp_by_position_in_measure, MeasurePlacement, MeasurePositioned,
};
pub use tuplet_factor::TupletFactor;
pub use whole_notes::WholeNotes;
