//! Explicit configuration passed into the code that needs it.
//!
//! Two structs, deliberately separate: [ScoreSettings] changes the data
//! the library produces, [TraceSettings] only changes what gets printed.

use serde::{Deserialize, Serialize};

use crate::primitives::PitchLanguage;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSettings {
    /// Spelling language for pitch names in traces and generated sources.
    pub pitch_language: PitchLanguage,
    /// Fold runs of consecutive full-measure rests into one aggregate
    /// during the master-voice rebuild.
    pub compress_full_measure_rests: bool,
    /// A rest with a known display octave keeps that pitch in its
    /// sounding slots, so relative-octave computation downstream can see
    /// it.
    pub pitched_rests_carry_pitch: bool,
}
impl Default for ScoreSettings {
    fn default() -> Self {
        Self {
            pitch_language: PitchLanguage::default(),
            compress_full_measure_rests: false,
            pitched_rests_carry_pitch: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TraceSettings {
    /// Print positions and durations for every element in traces.
    pub positions: bool,
    /// Print one line per visit while browsing, not only per element.
    pub visits: bool,
}
