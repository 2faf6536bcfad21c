//! One measure of one voice, holding its content in source order.
//!
//! The measure assigns positions: every appended element gets the
//! current accumulated position, which then advances by the element's
//! sounding duration. Tuplet members that live inside a tuplet clone
//! still account their duration here through
//! [Measure::account_for_tuplet_member_note_duration].

use std::fmt;

use crate::primitives::WholeNotes;

use super::barlines::{
    BarCheck, BarNumberCheck, Barline, KeySignature, LineBreak, PageBreak,
    Rehearsal, Scordatura, Tempo, TimeSignature,
};
use super::chord::Chord;
use super::harmony::{FiguredBass, Harmony};
use super::note::Note;
use super::tuplet::Tuplet;
use crate::notation::{Coda, Segno};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum MeasureKind {
    #[default]
    Unknown,
    Regular,
    Anacrusis,
    IncompleteStandalone,
    IncompleteInRepeatCommonPart,
    IncompleteInRepeatEnding,
    Overcomplete,
    Cadenza,
    MusicallyEmpty,
}
impl MeasureKind {
    /// Whether a measure of this kind should be followed by a bar check
    /// in a rebuilt voice.
    pub fn warrants_bar_check(&self) -> bool {
        !matches!(self, Self::Unknown | Self::MusicallyEmpty)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum MeasureEndKind {
    #[default]
    Unknown,
    RegularYes,
    RegularNo,
}

#[derive(Debug, PartialEq, Clone)]
pub enum MeasureContent {
    Note(Note),
    Chord(Chord),
    Tuplet(Tuplet),
    Harmony(Harmony),
    FiguredBass(FiguredBass),
    Barline(Barline),
    BarCheck(BarCheck),
    BarNumberCheck(BarNumberCheck),
    KeySignature(KeySignature),
    TimeSignature(TimeSignature),
    Tempo(Tempo),
    Rehearsal(Rehearsal),
    Segno(Segno),
    Coda(Coda),
    Scordatura(Scordatura),
    LineBreak(LineBreak),
    PageBreak(PageBreak),
}

#[derive(Debug, PartialEq, Clone)]
pub struct Measure {
    pub line: u32,
    number: String,
    purist_number: i32,
    next_measure_number: String,
    kind: MeasureKind,
    end_kind: MeasureEndKind,
    full_measure_rest: bool,
    full_whole_notes: WholeNotes,
    current_position: WholeNotes,
    contents: Vec<MeasureContent>,
}

impl Measure {
    pub fn new(line: u32, number: impl Into<String>) -> Self {
        Self {
            line,
            number: number.into(),
            purist_number: 0,
            next_measure_number: String::new(),
            kind: MeasureKind::default(),
            end_kind: MeasureEndKind::default(),
            full_measure_rest: false,
            full_whole_notes: WholeNotes::unknown(),
            current_position: WholeNotes::zero(),
            contents: Vec::new(),
        }
    }

    /// Identity copied, contents empty, position back to the measure
    /// start.
    pub fn newborn_clone(&self) -> Self {
        let mut clone = Self::new(self.line, self.number.clone());
        clone.purist_number = self.purist_number;
        clone.next_measure_number = self.next_measure_number.clone();
        clone.kind = self.kind;
        clone.end_kind = self.end_kind;
        clone.full_measure_rest = self.full_measure_rest;
        clone.full_whole_notes = self.full_whole_notes.clone();
        clone
    }

    /// Propagate the definitive data of the original measure onto this
    /// clone, once the original has been fully visited.
    pub fn finalize_clone(&mut self, line: u32, original: &Measure) {
        log::debug!(
            "finalizing clone of measure {} at line {}",
            original.number,
            line
        );
        self.purist_number = original.purist_number;
        self.next_measure_number = original.next_measure_number.clone();
        self.kind = original.kind;
        self.end_kind = original.end_kind;
        self.full_measure_rest = original.full_measure_rest;
        self.full_whole_notes = original.full_whole_notes.clone();
    }

    pub fn number(&self) -> &str {
        &self.number
    }
    pub fn purist_number(&self) -> i32 {
        self.purist_number
    }
    pub fn set_purist_number(&mut self, purist_number: i32) {
        self.purist_number = purist_number;
    }
    pub fn next_measure_number(&self) -> &str {
        &self.next_measure_number
    }
    pub fn set_next_measure_number(&mut self, number: impl Into<String>) {
        self.next_measure_number = number.into();
    }
    pub fn kind(&self) -> MeasureKind {
        self.kind
    }
    pub fn set_kind(&mut self, kind: MeasureKind) {
        self.kind = kind;
    }
    pub fn end_kind(&self) -> MeasureEndKind {
        self.end_kind
    }
    pub fn set_end_kind(&mut self, end_kind: MeasureEndKind) {
        self.end_kind = end_kind;
    }
    pub fn is_full_measure_rest(&self) -> bool {
        self.full_measure_rest
    }
    pub fn set_full_measure_rest(&mut self) {
        self.full_measure_rest = true;
    }
    pub fn full_whole_notes(&self) -> &WholeNotes {
        &self.full_whole_notes
    }
    pub fn set_full_whole_notes(&mut self, value: WholeNotes) {
        self.full_whole_notes = value;
    }
    pub fn current_position(&self) -> &WholeNotes {
        &self.current_position
    }
    pub fn contents(&self) -> &[MeasureContent] {
        &self.contents
    }

    fn advance(&mut self, amount: &WholeNotes) {
        if !amount.is_unknown() {
            self.current_position =
                (self.current_position.clone() + amount.clone()).rationalised();
        }
    }

    pub fn append_note(&mut self, mut note: Note) {
        note.set_measure_number(self.number.clone());
        note.set_position_in_measure(self.current_position.clone(), "measure append");
        let sounding = note.sounding_whole_notes().clone();
        self.advance(&sounding);
        self.contents.push(MeasureContent::Note(note));
    }

    pub fn append_chord(&mut self, mut chord: Chord) {
        let number = self.number.clone();
        chord.set_members_position_in_measure(&number, self.current_position.clone());
        let sounding = chord.sounding_whole_notes().clone();
        self.advance(&sounding);
        self.contents.push(MeasureContent::Chord(chord));
    }

    /// Append a tuplet whose members have not yet been accounted here:
    /// they get positions from the measure's current position onward.
    pub fn append_tuplet(&mut self, tuplet: Tuplet) {
        let start = self.current_position.clone();
        self.append_tuplet_at(tuplet, start);
    }

    /// Append a tuplet that started at `start` while its member notes
    /// were being accounted into this measure one by one. The walk
    /// returns the definitive end position, which also absorbs member
    /// chords the per-note accounting could not see.
    pub fn append_tuplet_at(&mut self, mut tuplet: Tuplet, start: WholeNotes) {
        let number = self.number.clone();
        self.current_position = tuplet.set_members_position_in_measure(&number, start);
        self.contents.push(MeasureContent::Tuplet(tuplet));
    }

    /// A tuplet member note never enters the measure's content list, but
    /// its duration still advances the measure position.
    pub fn account_for_tuplet_member_note_duration(&mut self, note: &Note) {
        let sounding = note.sounding_whole_notes().clone();
        self.advance(&sounding);
    }

    pub fn append_harmony(&mut self, mut harmony: Harmony) {
        harmony.set_position_in_measure(self.current_position.clone(), "measure harmony");
        self.contents.push(MeasureContent::Harmony(harmony));
    }
    pub fn append_figured_bass(&mut self, mut figured_bass: FiguredBass) {
        figured_bass
            .set_position_in_measure(self.current_position.clone(), "measure figures");
        self.contents.push(MeasureContent::FiguredBass(figured_bass));
    }
    pub fn append_barline(&mut self, barline: Barline) {
        self.contents.push(MeasureContent::Barline(barline));
    }
    pub fn append_bar_check(&mut self, bar_check: BarCheck) {
        self.contents.push(MeasureContent::BarCheck(bar_check));
    }
    pub fn append_bar_number_check(&mut self, check: BarNumberCheck) {
        self.contents.push(MeasureContent::BarNumberCheck(check));
    }
    pub fn append_key_signature(&mut self, key: KeySignature) {
        self.contents.push(MeasureContent::KeySignature(key));
    }
    pub fn append_time_signature(&mut self, time: TimeSignature) {
        self.full_whole_notes = time.whole_notes();
        self.contents.push(MeasureContent::TimeSignature(time));
    }
    pub fn append_tempo(&mut self, tempo: Tempo) {
        self.contents.push(MeasureContent::Tempo(tempo));
    }
    pub fn append_rehearsal(&mut self, rehearsal: Rehearsal) {
        self.contents.push(MeasureContent::Rehearsal(rehearsal));
    }
    pub fn append_segno(&mut self, segno: Segno) {
        self.contents.push(MeasureContent::Segno(segno));
    }
    pub fn append_coda(&mut self, coda: Coda) {
        self.contents.push(MeasureContent::Coda(coda));
    }
    pub fn append_scordatura(&mut self, scordatura: Scordatura) {
        self.contents.push(MeasureContent::Scordatura(scordatura));
    }
    pub fn append_line_break(&mut self, line_break: LineBreak) {
        self.contents.push(MeasureContent::LineBreak(line_break));
    }
    pub fn append_page_break(&mut self, page_break: PageBreak) {
        self.contents.push(MeasureContent::PageBreak(page_break));
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "measure {} ({:?}, purist {}), {} elements, line {}",
            self.number,
            self.kind,
            self.purist_number,
            self.contents.len(),
            self.line
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::primitives::WholeNotes;

    use super::{Measure, MeasureKind};

    #[test]
    fn positions_advance_by_sounding_duration() {
        let mut measure = Measure::new(1, "2");
        let first = crate::dom::Note::rest(
            1,
            WholeNotes::new(1, 4),
            WholeNotes::new(1, 4),
            0,
        );
        let second = crate::dom::Note::rest(
            2,
            WholeNotes::new(1, 8),
            WholeNotes::new(1, 8),
            0,
        );
        measure.append_note(first);
        measure.append_note(second);
        assert_eq!(measure.current_position(), &WholeNotes::new(3, 8));
        use crate::primitives::MeasurePositioned;
        match &measure.contents()[1] {
            crate::dom::MeasureContent::Note(note) => {
                assert_eq!(
                    note.placement().position_in_measure(),
                    &WholeNotes::new(1, 4)
                );
                assert_eq!(note.placement().measure_number(), "2");
            }
            other => panic!("expected a note, got {:?}", other),
        }
    }

    #[test]
    fn bar_check_warrants() {
        assert!(MeasureKind::Regular.warrants_bar_check());
        assert!(MeasureKind::Cadenza.warrants_bar_check());
        assert!(!MeasureKind::MusicallyEmpty.warrants_bar_check());
        assert!(!MeasureKind::Unknown.warrants_bar_check());
    }
}
