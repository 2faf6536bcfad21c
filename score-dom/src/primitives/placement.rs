use std::cmp::Ordering;
use std::fmt;

use super::WholeNotes;

/// Position bookkeeping shared by every element that lives inside a
/// measure: the measure's number, the offset from the measure start, the
/// offset from the voice start, and the sounding duration.
///
/// All four slots start unknown. The setters refuse the unknown sentinel:
/// a caller that has no real value yet must simply not call them. Setting
/// position-in-measure never recomputes position-in-voice; the caller is
/// responsible for keeping both in step.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct MeasurePlacement {
    measure_number: String,
    position_in_measure: WholeNotes,
    position_in_voice: WholeNotes,
    sounding_whole_notes: WholeNotes,
}
impl MeasurePlacement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn measure_number(&self) -> &str {
        &self.measure_number
    }
    pub fn set_measure_number(&mut self, number: impl Into<String>) {
        self.measure_number = number.into();
    }

    pub fn position_in_measure(&self) -> &WholeNotes {
        &self.position_in_measure
    }
    pub fn set_position_in_measure(&mut self, value: WholeNotes, context: &str) {
        assert!(
            !value.is_unknown(),
            "attempt to set an unknown position in measure ({})",
            context
        );
        self.position_in_measure = value;
    }

    pub fn position_in_voice(&self) -> &WholeNotes {
        &self.position_in_voice
    }
    pub fn set_position_in_voice(&mut self, value: WholeNotes, context: &str) {
        assert!(
            !value.is_unknown(),
            "attempt to set an unknown position in voice ({})",
            context
        );
        self.position_in_voice = value;
    }

    pub fn sounding_whole_notes(&self) -> &WholeNotes {
        &self.sounding_whole_notes
    }
    pub fn set_sounding_whole_notes(&mut self, value: WholeNotes, context: &str) {
        assert!(
            !value.is_unknown(),
            "attempt to set unknown sounding whole notes ({})",
            context
        );
        self.sounding_whole_notes = value;
    }
}
impl fmt::Display for MeasurePlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "measure {} at {}, sounding {}",
            self.measure_number, self.position_in_measure, self.sounding_whole_notes
        )
    }
}

/// Access to the placement block, for code generic over measure elements.
pub trait MeasurePositioned {
    fn placement(&self) -> &MeasurePlacement;
    fn placement_mut(&mut self) -> &mut MeasurePlacement;
}

/// Strict weak ordering of parallel measure elements by their position in
/// measure. Panics on unknown positions, so sort only finalized content.
pub fn cmp_by_position_in_measure<T: MeasurePositioned>(a: &T, b: &T) -> Ordering {
    a.placement()
        .position_in_measure()
        .partial_cmp(b.placement().position_in_measure())
        .expect("comparing elements with unknown positions")
}

#[cfg(test)]
mod tests {
    use super::{MeasurePlacement, WholeNotes};

    #[test]
    fn setters_accept_known_values() {
        let mut placement = MeasurePlacement::new();
        placement.set_measure_number("17");
        placement.set_position_in_measure(WholeNotes::new(3, 8), "test");
        placement.set_sounding_whole_notes(WholeNotes::new(1, 8), "test");
        assert_eq!(placement.position_in_measure(), &WholeNotes::new(3, 8));
        assert_eq!(placement.measure_number(), "17");
    }

    #[test]
    #[should_panic]
    fn position_refuses_sentinel() {
        let mut placement = MeasurePlacement::new();
        placement.set_position_in_measure(WholeNotes::unknown(), "test");
    }

    #[test]
    #[should_panic]
    fn sounding_refuses_sentinel() {
        let mut placement = MeasurePlacement::new();
        placement.set_sounding_whole_notes(WholeNotes::unknown(), "test");
    }
}
