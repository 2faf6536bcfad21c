//! A recursive container squeezing its members into actual:normal time.
//!
//! Members form a closed set (note, chord or nested tuplet), so routing
//! is an exhaustive match and "none of the above" can not exist at run
//! time. Accumulated durations are kept in step with the element list:
//! appending adds, removing subtracts, and every chord contributes its
//! duration exactly once.

use std::fmt;

use log::debug;
use thiserror::Error;

use crate::primitives::{
    MeasurePlacement, MeasurePositioned, TupletFactor, WholeNotes,
};

use super::chord::Chord;
use super::note::Note;
use super::voice::Voice;

#[derive(Debug, Error)]
pub enum TupletError {
    #[error("tuplet at line {line} is empty, nothing to remove")]
    RemoveFromEmpty { line: u32 },
    #[error("first element of tuplet at line {line} is not a note")]
    FirstElementNotANote { line: u32 },
    #[error("last element of tuplet at line {line} is not a note")]
    LastElementNotANote { line: u32 },
}

#[derive(Debug, PartialEq, Clone)]
pub enum TupletMember {
    Note(Note),
    Chord(Chord),
    Tuplet(Tuplet),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum TupletBracketKind {
    #[default]
    Yes,
    No,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum TupletShowNumberKind {
    #[default]
    Actual,
    Both,
    None,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Tuplet {
    pub line: u32,
    pub number: i32,
    placement: MeasurePlacement,
    factor: TupletFactor,
    member_notes_sounding_whole_notes: WholeNotes,
    member_notes_display_whole_notes: WholeNotes,
    display_whole_notes: WholeNotes,
    pub bracket: TupletBracketKind,
    pub show_number: TupletShowNumberKind,
    elements: Vec<TupletMember>,
}

impl Tuplet {
    pub fn new(
        line: u32,
        number: i32,
        factor: TupletFactor,
        member_notes_sounding_whole_notes: WholeNotes,
        member_notes_display_whole_notes: WholeNotes,
    ) -> Self {
        let mut placement = MeasurePlacement::new();
        placement.set_sounding_whole_notes(WholeNotes::zero(), "tuplet construction");
        Self {
            line,
            number,
            placement,
            factor,
            member_notes_sounding_whole_notes,
            member_notes_display_whole_notes,
            display_whole_notes: WholeNotes::zero(),
            bracket: TupletBracketKind::default(),
            show_number: TupletShowNumberKind::default(),
            elements: Vec::new(),
        }
    }

    /// Identity and factor copied, element list empty and accumulated
    /// durations back to zero: members re-accumulate as the rebuild
    /// re-appends them.
    pub fn newborn_clone(&self) -> Self {
        let mut clone = Self::new(
            self.line,
            self.number,
            self.factor.clone(),
            self.member_notes_sounding_whole_notes.clone(),
            self.member_notes_display_whole_notes.clone(),
        );
        clone.placement.set_measure_number(self.placement.measure_number());
        clone.bracket = self.bracket;
        clone.show_number = self.show_number;
        clone
    }

    pub fn factor(&self) -> &TupletFactor {
        &self.factor
    }
    pub fn elements(&self) -> &[TupletMember] {
        &self.elements
    }
    pub fn sounding_whole_notes(&self) -> &WholeNotes {
        self.placement.sounding_whole_notes()
    }
    pub fn display_whole_notes(&self) -> &WholeNotes {
        &self.display_whole_notes
    }
    pub fn member_notes_sounding_whole_notes(&self) -> &WholeNotes {
        &self.member_notes_sounding_whole_notes
    }
    pub fn member_notes_display_whole_notes(&self) -> &WholeNotes {
        &self.member_notes_display_whole_notes
    }

    fn add_sounding(&mut self, amount: &WholeNotes) {
        let sum = (self.placement.sounding_whole_notes().clone() + amount.clone())
            .rationalised();
        self.placement
            .set_sounding_whole_notes(sum, "tuplet accumulation");
    }
    fn add_display(&mut self, amount: &WholeNotes) {
        self.display_whole_notes =
            (self.display_whole_notes.clone() + amount.clone()).rationalised();
    }

    /// Append a member note: mark it, position it within the tuplet,
    /// propagate this tuplet's factor onto it, accumulate its durations
    /// and let the voice's bookkeeping see it.
    pub fn append_note(&mut self, mut note: Note, voice: &mut Voice) {
        note.set_belongs_to_a_tuplet();
        note.set_position_in_tuplet(self.elements.len() + 1);
        note.set_tuplet_factor(self.factor.clone());
        if !self.placement.measure_number().is_empty() {
            note.set_measure_number(self.placement.measure_number());
        }
        self.add_sounding(&note.sounding_whole_notes().clone());
        self.add_display(&note.display_whole_notes().clone());
        voice.register_shortest_note_if_relevant(&note);
        voice.account_for_tuplet_member_note_duration(&note);
        self.elements.push(TupletMember::Note(note));
    }

    /// Append a member chord. Its sounding duration, the one its first
    /// member note carries, is accumulated exactly once here; member
    /// notes share it, so nothing else may add it again.
    pub fn append_chord(&mut self, chord: Chord) {
        self.add_sounding(&chord.sounding_whole_notes().clone());
        self.add_display(&chord.display_whole_notes().clone());
        self.elements.push(TupletMember::Chord(chord));
    }

    /// Nest a tuplet built from source order.
    pub fn add_tuplet(&mut self, nested: Tuplet) {
        self.add_sounding(&nested.sounding_whole_notes().clone());
        self.add_display(&nested.display_whole_notes().clone());
        self.elements.push(TupletMember::Tuplet(nested));
    }

    /// Nest a finished tuplet clone during a rebuild. Accumulation is
    /// the same as [Tuplet::add_tuplet]; only the caller differs.
    pub fn add_tuplet_clone(&mut self, nested: Tuplet) {
        debug!(
            "nesting tuplet clone from line {} into tuplet at line {}",
            nested.line, self.line
        );
        self.add_tuplet(nested);
    }

    /// Divide this tuplet's factor by the containing one. Required
    /// exactly once per nesting level: source encodings compose nested
    /// ratios multiplicatively, the model keeps them relative to the
    /// immediate container.
    pub fn unapply_sounding_factor_to_members(&mut self, containing: &TupletFactor) {
        self.factor = self.factor.unapply(containing);
    }

    /// Defined for the note case only: chord or nested-tuplet ends are a
    /// structural error.
    pub fn remove_first_note(&mut self) -> Result<Note, TupletError> {
        match self.elements.first() {
            None => return Err(TupletError::RemoveFromEmpty { line: self.line }),
            Some(TupletMember::Note(_)) => {}
            Some(_) => {
                return Err(TupletError::FirstElementNotANote { line: self.line })
            }
        }
        let TupletMember::Note(note) = self.elements.remove(0) else {
            unreachable!()
        };
        self.subtract_note_durations(&note);
        Ok(note)
    }

    pub fn remove_last_note(&mut self) -> Result<Note, TupletError> {
        match self.elements.last() {
            None => return Err(TupletError::RemoveFromEmpty { line: self.line }),
            Some(TupletMember::Note(_)) => {}
            Some(_) => {
                return Err(TupletError::LastElementNotANote { line: self.line })
            }
        }
        let Some(TupletMember::Note(note)) = self.elements.pop() else {
            unreachable!()
        };
        self.subtract_note_durations(&note);
        Ok(note)
    }

    fn subtract_note_durations(&mut self, note: &Note) {
        let sounding = (self.placement.sounding_whole_notes().clone()
            - note.sounding_whole_notes().clone())
        .rationalised();
        self.placement
            .set_sounding_whole_notes(sounding, "tuplet member removal");
        self.display_whole_notes = (self.display_whole_notes.clone()
            - note.display_whole_notes().clone())
        .rationalised();
    }

    /// Depth-first position assignment: every member gets the running
    /// position, which advances by that member's sounding duration.
    ///
    /// # Returns
    /// The position immediately after the tuplet's last member, so the
    /// caller can lay out whatever follows.
    pub fn set_members_position_in_measure(
        &mut self,
        measure_number: &str,
        start_position: WholeNotes,
    ) -> WholeNotes {
        self.placement.set_measure_number(measure_number);
        self.placement
            .set_position_in_measure(start_position.clone(), "tuplet position");
        let mut current = start_position;
        for member in self.elements.iter_mut() {
            match member {
                TupletMember::Note(note) => {
                    note.set_measure_number(measure_number);
                    note.set_position_in_measure(current.clone(), "tuplet member note");
                    current =
                        (current + note.sounding_whole_notes().clone()).rationalised();
                }
                TupletMember::Chord(chord) => {
                    chord.set_members_position_in_measure(measure_number, current.clone());
                    current =
                        (current + chord.sounding_whole_notes().clone()).rationalised();
                }
                TupletMember::Tuplet(nested) => {
                    current =
                        nested.set_members_position_in_measure(measure_number, current);
                }
            }
        }
        current
    }

    /// The first member note that is not a grace note, looking through
    /// chords and into nested tuplets in element order.
    pub fn first_non_grace_note(&self) -> Option<&Note> {
        for member in self.elements.iter() {
            match member {
                TupletMember::Note(note) if !note.kind().is_grace() => {
                    return Some(note)
                }
                TupletMember::Note(_) => continue,
                TupletMember::Chord(chord) => {
                    if let Some(note) = chord.first_note() {
                        return Some(note);
                    }
                }
                TupletMember::Tuplet(nested) => {
                    if let Some(note) = nested.first_non_grace_note() {
                        return Some(note);
                    }
                }
            }
        }
        None
    }
}

impl MeasurePositioned for Tuplet {
    fn placement(&self) -> &MeasurePlacement {
        &self.placement
    }
    fn placement_mut(&mut self) -> &mut MeasurePlacement {
        &mut self.placement
    }
}

impl fmt::Display for Tuplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tuplet {} of {} elements, sounding {}, line {}",
            self.factor,
            self.elements.len(),
            self.placement.sounding_whole_notes(),
            self.line
        )
    }
}
