//! Re-synthesis of a voice: walk a source voice's tree once, in order,
//! and build a master voice from clones of everything visited.
//!
//! The builder never looks ahead or behind. Everything it needs between
//! callbacks lives in a stack of in-progress tuplet clones and a handful
//! of "current clone" slots. Each slot is emptied the moment its content
//! is handed to its parent, so no stale reference survives into the next
//! sibling's visits.

use std::rc::Rc;

use log::{debug, warn};
use thiserror::Error;

use crate::dom::{
    BarCheck, BarNumberCheck, Barline, Chord, ChordBeamLink,
    ChordGraceNotesGroupLink, ChordSlurLink, Figure, FiguredBass, Frame,
    GraceNotesGroup, Harmony, HarmonyDegree, KeySignature, LineBreak,
    Measure, MeasuresRepeat, Note, NoteKind, PageBreak, Rehearsal, Repeat,
    RepeatEnding, RestMeasures, Scordatura, Segment, Tempo, TimeSignature,
    Tuplet, Voice, VoiceError, VoiceKind,
};
use crate::notation::{
    Articulation, Beam, Coda, DalSegno, Damp, Dynamics, Eyeglasses,
    Fermata, Glissando, Ligature, Ornament, OtherDynamics, Pedal, Segno,
    Slash, Slide, Slur, Spanner, Stem, Syllable, Technical,
    TechnicalWithInteger, TechnicalWithString, Tie, Wedge, Words,
};
use crate::settings::ScoreSettings;
use crate::visitor::{browse_voice, ScoreVisitor};

#[derive(Debug, Error)]
pub enum RebuildError {
    #[error("chord member note at line {line} visited with no chord in progress")]
    ChordMemberWithoutChord { line: u32 },
    #[error("tuplet member note at line {line} visited with an empty tuplet stack")]
    TupletMemberWithoutTuplet { line: u32 },
    #[error("tuplet end at line {line} visited with an empty tuplet stack")]
    TupletStackUnderflow { line: u32 },
    #[error("note end at line {line} visited with no note clone in progress")]
    NoteSlotEmpty { line: u32 },
    #[error("chord end at line {line} visited with no chord clone in progress")]
    ChordSlotEmpty { line: u32 },
    #[error("rest measure at line {line} has no aggregate to join")]
    RestRunWithoutAggregate { line: u32 },
    #[error(transparent)]
    Voice(#[from] VoiceError),
}

/// Rebuild `source` into a fresh master voice.
pub fn rebuild_master_voice(
    source: &Voice,
    settings: &ScoreSettings,
) -> Result<Voice, RebuildError> {
    let mut builder = MasterVoiceBuilder::new(source, settings);
    browse_voice(source, &mut builder)?;
    builder.into_master_voice()
}

pub struct MasterVoiceBuilder<'a> {
    settings: &'a ScoreSettings,
    master: Voice,
    source_line: u32,
    tuplet_stack: Vec<Tuplet>,
    current_note: Option<Note>,
    current_grace_note: Option<Note>,
    current_chord: Option<Chord>,
    current_harmony: Option<Harmony>,
    current_figured_bass: Option<FiguredBass>,
    current_grace_group: Option<GraceNotesGroup>,
    on_going_note: bool,
    on_going_chord: bool,
    on_going_harmony_voice: bool,
    in_source_rest_measures: bool,
    pending_rest_measures: Option<RestMeasures>,
    current_measure_folded: bool,
    deferred_bar_check: Option<(BarCheck, BarNumberCheck)>,
    outer_tuplet_start: Option<crate::primitives::WholeNotes>,
    first_note_line: Option<u32>,
}

impl<'a> MasterVoiceBuilder<'a> {
    pub fn new(source: &Voice, settings: &'a ScoreSettings) -> Self {
        Self {
            settings,
            master: source.newborn_clone(),
            source_line: source.line,
            tuplet_stack: Vec::new(),
            current_note: None,
            current_grace_note: None,
            current_chord: None,
            current_harmony: None,
            current_figured_bass: None,
            current_grace_group: None,
            on_going_note: false,
            on_going_chord: false,
            on_going_harmony_voice: !matches!(source.kind(), VoiceKind::Regular),
            in_source_rest_measures: false,
            pending_rest_measures: None,
            current_measure_folded: false,
            deferred_bar_check: None,
            outer_tuplet_start: None,
            first_note_line: None,
        }
    }

    pub fn first_note_line(&self) -> Option<u32> {
        self.first_note_line
    }

    /// Finish whatever is still open and surrender the master voice.
    pub fn into_master_voice(mut self) -> Result<Voice, RebuildError> {
        if let Some(rest_measures) = self.pending_rest_measures.take() {
            let line = rest_measures.line;
            self.master.append_rest_measures(line, rest_measures)?;
        }
        if let Some((bar_check, _)) = self.deferred_bar_check.take() {
            warn!(
                "dropping bar check from line {} left unresolved at voice end",
                bar_check.line
            );
        }
        self.master.finish(self.source_line)?;
        Ok(self.master)
    }

    fn flush_deferred_bar_check(&mut self) -> Result<(), RebuildError> {
        if let Some((bar_check, bar_number_check)) = self.deferred_bar_check.take() {
            self.master.append_bar_check(bar_check)?;
            self.master.append_bar_number_check(bar_number_check)?;
        }
        Ok(())
    }

    fn flush_pending_rest_measures(&mut self, line: u32) -> Result<(), RebuildError> {
        if let Some(rest_measures) = self.pending_rest_measures.take() {
            debug!(
                "flushing {} compressed rest measures at line {}",
                rest_measures.measures_count(),
                line
            );
            self.master.append_rest_measures(line, rest_measures)?;
        }
        Ok(())
    }

    /// The measure clone every plain element of the current measure goes
    /// into: the aggregate's last measure while a rest run is folded,
    /// the master voice's last measure otherwise.
    fn append_note_to_destination(&mut self, note: Note) -> Result<(), RebuildError> {
        let line = note.line;
        if self.in_source_rest_measures {
            self.master
                .pending_rest_measures_mut()
                .and_then(|rest_measures| rest_measures.last_measure_mut())
                .ok_or(RebuildError::RestRunWithoutAggregate { line })?
                .append_note(note);
            return Ok(());
        }
        if self.current_measure_folded {
            self.pending_rest_measures
                .as_mut()
                .and_then(|rest_measures| rest_measures.last_measure_mut())
                .ok_or(RebuildError::RestRunWithoutAggregate { line })?
                .append_note(note);
            return Ok(());
        }
        self.master.append_note(note)?;
        Ok(())
    }
}

impl<'a> ScoreVisitor for MasterVoiceBuilder<'a> {
    type Error = RebuildError;

    fn visit_voice_start(&mut self, voice: &Voice) -> Result<(), RebuildError> {
        debug!("rebuilding {}", voice);
        self.first_note_line = None;
        Ok(())
    }

    fn visit_voice_end(&mut self, _voice: &Voice) -> Result<(), RebuildError> {
        Ok(())
    }

    fn visit_segment_start(&mut self, segment: &Segment) -> Result<(), RebuildError> {
        self.master.set_last_segment(segment.newborn_clone());
        Ok(())
    }

    fn visit_segment_end(&mut self, segment: &Segment) -> Result<(), RebuildError> {
        self.flush_deferred_bar_check()?;
        self.flush_pending_rest_measures(segment.line)?;
        self.master.finish_segment(segment.line)?;
        Ok(())
    }

    fn visit_measure_start(&mut self, measure: &Measure) -> Result<(), RebuildError> {
        if let Some((mut bar_check, bar_number_check)) = self.deferred_bar_check.take() {
            bar_check.set_purist_number(measure.purist_number());
            self.master.append_bar_check(bar_check)?;
            self.master.append_bar_number_check(bar_number_check)?;
        }
        if self.in_source_rest_measures {
            let line = measure.line;
            self.master
                .pending_rest_measures_mut()
                .ok_or(RebuildError::RestRunWithoutAggregate { line })?
                .append_measure_clone(measure.newborn_clone());
            self.current_measure_folded = true;
            return Ok(());
        }
        if measure.is_full_measure_rest() && self.settings.compress_full_measure_rests {
            self.pending_rest_measures
                .get_or_insert_with(|| RestMeasures::new(measure.line))
                .append_measure_clone(measure.newborn_clone());
            self.current_measure_folded = true;
            return Ok(());
        }
        self.flush_pending_rest_measures(measure.line)?;
        self.master
            .append_measure_clone(measure.line, measure.newborn_clone())?;
        self.current_measure_folded = false;
        Ok(())
    }

    fn visit_measure_end(&mut self, measure: &Measure) -> Result<(), RebuildError> {
        let line = measure.line;
        if self.in_source_rest_measures {
            if let Some(clone) = self
                .master
                .pending_rest_measures_mut()
                .and_then(|rest_measures| rest_measures.last_measure_mut())
            {
                clone.finalize_clone(line, measure);
            }
        } else if self.current_measure_folded {
            self.pending_rest_measures
                .as_mut()
                .and_then(|rest_measures| rest_measures.last_measure_mut())
                .ok_or(RebuildError::RestRunWithoutAggregate { line })?
                .finalize_clone(line, measure);
        } else {
            self.master
                .last_measure_mut(line)?
                .finalize_clone(line, measure);
        }
        let folded = self.current_measure_folded || self.in_source_rest_measures;
        if !folded
            && measure.kind().warrants_bar_check()
            && !measure.next_measure_number().is_empty()
        {
            self.deferred_bar_check = Some((
                BarCheck::new(
                    line,
                    measure.next_measure_number(),
                    self.master.current_purist_number(),
                ),
                BarNumberCheck::new(line, measure.next_measure_number()),
            ));
        }
        self.current_measure_folded = false;
        Ok(())
    }

    fn visit_note_start(&mut self, note: &Note) -> Result<(), RebuildError> {
        let clone = note.newborn_clone();
        match note.kind().is_grace() {
            true => self.current_grace_note = Some(clone),
            false => {
                if self.first_note_line.is_none() {
                    self.first_note_line = Some(note.line);
                    debug!("first note in voice: {}", note);
                }
                self.current_note = Some(clone);
                self.on_going_note = true;
            }
        }
        Ok(())
    }

    fn visit_note_end(&mut self, note: &Note) -> Result<(), RebuildError> {
        let line = note.line;
        match note.kind() {
            NoteKind::Regular | NoteKind::Rest | NoteKind::Skip | NoteKind::Unpitched => {
                let clone = self
                    .current_note
                    .take()
                    .ok_or(RebuildError::NoteSlotEmpty { line })?;
                self.append_note_to_destination(clone)?;
            }
            NoteKind::ChordMember => {
                let clone = self
                    .current_note
                    .take()
                    .ok_or(RebuildError::NoteSlotEmpty { line })?;
                let chord = self
                    .current_chord
                    .as_mut()
                    .ok_or(RebuildError::ChordMemberWithoutChord { line })?;
                chord.add_note(clone, &mut self.master);
            }
            NoteKind::GraceChordMember => {
                let clone = self
                    .current_grace_note
                    .take()
                    .ok_or(RebuildError::NoteSlotEmpty { line })?;
                let chord = self
                    .current_chord
                    .as_mut()
                    .ok_or(RebuildError::ChordMemberWithoutChord { line })?;
                chord.add_note(clone, &mut self.master);
            }
            NoteKind::TupletMember
            | NoteKind::TupletRestMember
            | NoteKind::TupletUnpitchedMember => {
                let clone = self
                    .current_note
                    .take()
                    .ok_or(RebuildError::NoteSlotEmpty { line })?;
                let tuplet = self
                    .tuplet_stack
                    .last_mut()
                    .ok_or(RebuildError::TupletMemberWithoutTuplet { line })?;
                tuplet.append_note(clone, &mut self.master);
            }
            NoteKind::GraceTupletMember => {
                let clone = self
                    .current_grace_note
                    .take()
                    .ok_or(RebuildError::NoteSlotEmpty { line })?;
                let tuplet = self
                    .tuplet_stack
                    .last_mut()
                    .ok_or(RebuildError::TupletMemberWithoutTuplet { line })?;
                tuplet.append_note(clone, &mut self.master);
            }
            NoteKind::Grace | NoteKind::GraceSkip => {
                let clone = self
                    .current_grace_note
                    .take()
                    .ok_or(RebuildError::NoteSlotEmpty { line })?;
                match self.current_grace_group.as_mut() {
                    Some(group) => group.append_note(clone),
                    None => debug!(
                        "grace note at line {} outside any grace group, left alone",
                        line
                    ),
                }
            }
            NoteKind::DoubleTremoloMember => {
                // Handled by a separate pass over double tremolos.
                self.current_note.take();
                debug!("double tremolo member at line {} left alone", line);
            }
        }
        // A grace member note ends inside its principal note's visit;
        // clearing the flag for it would wipe that note's context.
        if !note.kind().is_grace() {
            self.on_going_note = false;
        }
        Ok(())
    }

    fn visit_chord_start(&mut self, chord: &Chord) -> Result<(), RebuildError> {
        self.current_chord = Some(chord.newborn_clone());
        self.on_going_chord = true;
        Ok(())
    }

    /// The chord clone's structural parent is decided here, eagerly: the
    /// innermost in-progress tuplet if there is one, the voice
    /// otherwise.
    fn visit_chord_end(&mut self, chord: &Chord) -> Result<(), RebuildError> {
        let line = chord.line;
        let clone = self
            .current_chord
            .take()
            .ok_or(RebuildError::ChordSlotEmpty { line })?;
        match self.tuplet_stack.last_mut() {
            Some(tuplet) => tuplet.append_chord(clone),
            None => self.master.append_chord(clone)?,
        }
        self.on_going_chord = false;
        Ok(())
    }

    fn visit_tuplet_start(&mut self, tuplet: &Tuplet) -> Result<(), RebuildError> {
        if self.tuplet_stack.is_empty() {
            // Member notes will advance the measure position while they
            // are appended; remember where the whole tuplet begins.
            self.outer_tuplet_start = self
                .master
                .last_measure(tuplet.line)
                .ok()
                .map(|measure| measure.current_position().clone());
        }
        self.tuplet_stack.push(tuplet.newborn_clone());
        Ok(())
    }

    fn visit_tuplet_end(&mut self, tuplet: &Tuplet) -> Result<(), RebuildError> {
        let popped = self
            .tuplet_stack
            .pop()
            .ok_or(RebuildError::TupletStackUnderflow { line: tuplet.line })?;
        match self.tuplet_stack.last_mut() {
            Some(top) => top.add_tuplet_clone(popped),
            None => match self.outer_tuplet_start.take() {
                Some(start) => self.master.append_tuplet_at(popped, start)?,
                None => self.master.append_tuplet(popped)?,
            },
        }
        Ok(())
    }

    fn visit_grace_notes_group_start(
        &mut self,
        group: &GraceNotesGroup,
    ) -> Result<(), RebuildError> {
        self.current_grace_group = Some(group.newborn_clone());
        Ok(())
    }

    fn visit_grace_notes_group_end(
        &mut self,
        group: &GraceNotesGroup,
    ) -> Result<(), RebuildError> {
        let clone = match self.current_grace_group.take() {
            Some(clone) => clone,
            None => return Ok(()),
        };
        if self.on_going_note {
            if let Some(note) = self.current_note.as_mut() {
                note.set_grace_group(clone);
                return Ok(());
            }
        }
        if self.on_going_chord {
            if let Some(chord) = self.current_chord.as_mut() {
                chord.append_grace_group_link(ChordGraceNotesGroupLink::new(
                    group.line,
                    Rc::new(clone),
                ));
                return Ok(());
            }
        }
        debug!(
            "grace notes group at line {} visited outside note and chord, dropped",
            group.line
        );
        Ok(())
    }

    fn visit_harmony_start(&mut self, harmony: &Harmony) -> Result<(), RebuildError> {
        self.current_harmony = Some(harmony.newborn_clone());
        Ok(())
    }

    fn visit_harmony_degree(
        &mut self,
        degree: &HarmonyDegree,
    ) -> Result<(), RebuildError> {
        match self.current_harmony.as_mut() {
            Some(harmony) => harmony.append_degree(degree.clone()),
            None => debug!(
                "harmony degree at line {} outside any harmony, dropped",
                degree.line
            ),
        }
        Ok(())
    }

    fn visit_frame(&mut self, frame: &Frame) -> Result<(), RebuildError> {
        match self.current_harmony.as_mut() {
            Some(harmony) => harmony.set_frame(frame.clone()),
            None => debug!("frame at line {} outside any harmony, dropped", frame.line),
        }
        Ok(())
    }

    /// A harmony visited with no note, chord or harmony-voice context is
    /// a defined no-op, reported at debug level.
    fn visit_harmony_end(&mut self, harmony: &Harmony) -> Result<(), RebuildError> {
        let clone = match self.current_harmony.take() {
            Some(clone) => clone,
            None => return Ok(()),
        };
        if self.on_going_note {
            if let Some(note) = self.current_note.as_mut() {
                note.append_harmony(clone);
                return Ok(());
            }
        }
        if self.on_going_chord {
            if let Some(chord) = self.current_chord.as_mut() {
                chord.append_harmony(clone);
                return Ok(());
            }
        }
        if self.on_going_harmony_voice {
            self.master.append_harmony(clone)?;
            return Ok(());
        }
        debug!(
            "harmony at line {} visited outside any context, dropped",
            harmony.line
        );
        Ok(())
    }

    fn visit_figured_bass_start(
        &mut self,
        figured_bass: &FiguredBass,
    ) -> Result<(), RebuildError> {
        self.current_figured_bass = Some(figured_bass.newborn_clone());
        Ok(())
    }

    fn visit_figure(&mut self, figure: &Figure) -> Result<(), RebuildError> {
        match self.current_figured_bass.as_mut() {
            Some(figured_bass) => figured_bass.append_figure(figure.clone()),
            None => debug!(
                "figure at line {} outside any figured bass, dropped",
                figure.line
            ),
        }
        Ok(())
    }

    fn visit_figured_bass_end(
        &mut self,
        figured_bass: &FiguredBass,
    ) -> Result<(), RebuildError> {
        let clone = match self.current_figured_bass.take() {
            Some(clone) => clone,
            None => return Ok(()),
        };
        if self.on_going_note {
            if let Some(note) = self.current_note.as_mut() {
                note.append_figured_bass(clone);
                return Ok(());
            }
        }
        if self.on_going_chord {
            if let Some(chord) = self.current_chord.as_mut() {
                chord.append_figured_bass(clone);
                return Ok(());
            }
        }
        if self.on_going_harmony_voice {
            self.master.append_figured_bass(clone)?;
            return Ok(());
        }
        debug!(
            "figured bass at line {} visited outside any context, dropped",
            figured_bass.line
        );
        Ok(())
    }

    fn visit_repeat_start(&mut self, repeat: &Repeat) -> Result<(), RebuildError> {
        self.master.handle_repeat_start(repeat.line);
        Ok(())
    }
    fn visit_repeat_end(&mut self, repeat: &Repeat) -> Result<(), RebuildError> {
        self.master.handle_repeat_end(repeat.line)?;
        Ok(())
    }
    fn visit_repeat_common_part_start(
        &mut self,
        repeat: &Repeat,
    ) -> Result<(), RebuildError> {
        self.master.handle_repeat_common_part_start(repeat.line);
        Ok(())
    }
    fn visit_repeat_common_part_end(
        &mut self,
        repeat: &Repeat,
    ) -> Result<(), RebuildError> {
        self.master.handle_repeat_common_part_end(repeat.line)?;
        Ok(())
    }
    fn visit_repeat_ending_start(
        &mut self,
        ending: &RepeatEnding,
    ) -> Result<(), RebuildError> {
        self.master
            .handle_repeat_ending_start(ending.line, ending.kind, ending.number.clone());
        Ok(())
    }
    fn visit_repeat_ending_end(
        &mut self,
        ending: &RepeatEnding,
    ) -> Result<(), RebuildError> {
        self.master.handle_repeat_ending_end(ending.line)?;
        Ok(())
    }

    fn visit_rest_measures_start(
        &mut self,
        rest_measures: &RestMeasures,
    ) -> Result<(), RebuildError> {
        self.in_source_rest_measures = true;
        self.master.handle_rest_measures_start(rest_measures.line);
        Ok(())
    }
    fn visit_rest_measures_end(
        &mut self,
        rest_measures: &RestMeasures,
    ) -> Result<(), RebuildError> {
        self.master.handle_rest_measures_end(rest_measures.line)?;
        self.in_source_rest_measures = false;
        Ok(())
    }
    fn visit_rest_measures_contents_start(
        &mut self,
        rest_measures: &RestMeasures,
    ) -> Result<(), RebuildError> {
        debug!(
            "rest measures contents start at line {}",
            rest_measures.line
        );
        Ok(())
    }
    fn visit_rest_measures_contents_end(
        &mut self,
        rest_measures: &RestMeasures,
    ) -> Result<(), RebuildError> {
        debug!("rest measures contents end at line {}", rest_measures.line);
        Ok(())
    }

    fn visit_measures_repeat_start(
        &mut self,
        measures_repeat: &MeasuresRepeat,
    ) -> Result<(), RebuildError> {
        self.master
            .handle_measures_repeat_start(measures_repeat.line);
        Ok(())
    }
    fn visit_measures_repeat_end(
        &mut self,
        measures_repeat: &MeasuresRepeat,
    ) -> Result<(), RebuildError> {
        self.master.handle_measures_repeat_end(measures_repeat.line)?;
        Ok(())
    }
    fn visit_measures_repeat_pattern_start(
        &mut self,
        measures_repeat: &MeasuresRepeat,
    ) -> Result<(), RebuildError> {
        self.master
            .handle_measures_repeat_pattern_start(measures_repeat.line);
        Ok(())
    }
    fn visit_measures_repeat_pattern_end(
        &mut self,
        measures_repeat: &MeasuresRepeat,
    ) -> Result<(), RebuildError> {
        self.master
            .handle_measures_repeat_pattern_end(measures_repeat.line)?;
        Ok(())
    }
    fn visit_measures_repeat_replicas_start(
        &mut self,
        measures_repeat: &MeasuresRepeat,
    ) -> Result<(), RebuildError> {
        self.master
            .handle_measures_repeat_replicas_start(measures_repeat.line);
        Ok(())
    }
    fn visit_measures_repeat_replicas_end(
        &mut self,
        measures_repeat: &MeasuresRepeat,
    ) -> Result<(), RebuildError> {
        self.master
            .handle_measures_repeat_replicas_end(measures_repeat.line)?;
        Ok(())
    }

    fn visit_barline(&mut self, barline: &Barline) -> Result<(), RebuildError> {
        self.master.append_barline(barline.clone())?;
        Ok(())
    }
    fn visit_key_signature(&mut self, key: &KeySignature) -> Result<(), RebuildError> {
        self.master.append_key_signature(key.clone())?;
        Ok(())
    }
    fn visit_time_signature(&mut self, time: &TimeSignature) -> Result<(), RebuildError> {
        self.master.append_time_signature(*time)?;
        Ok(())
    }
    fn visit_tempo(&mut self, tempo: &Tempo) -> Result<(), RebuildError> {
        self.master.append_tempo(tempo.clone())?;
        Ok(())
    }
    fn visit_rehearsal(&mut self, rehearsal: &Rehearsal) -> Result<(), RebuildError> {
        self.master.append_rehearsal(rehearsal.clone())?;
        Ok(())
    }
    fn visit_scordatura(&mut self, scordatura: &Scordatura) -> Result<(), RebuildError> {
        self.master.append_scordatura(scordatura.clone())?;
        Ok(())
    }
    fn visit_line_break(&mut self, line_break: &LineBreak) -> Result<(), RebuildError> {
        self.master.append_line_break(line_break.clone())?;
        Ok(())
    }
    fn visit_page_break(&mut self, page_break: &PageBreak) -> Result<(), RebuildError> {
        self.master.append_page_break(page_break.clone())?;
        Ok(())
    }
    fn visit_bar_check(&mut self, bar_check: &BarCheck) -> Result<(), RebuildError> {
        self.master.append_bar_check(bar_check.clone())?;
        Ok(())
    }
    fn visit_bar_number_check(
        &mut self,
        check: &BarNumberCheck,
    ) -> Result<(), RebuildError> {
        self.master.append_bar_number_check(check.clone())?;
        Ok(())
    }

    fn visit_stem(&mut self, stem: &Stem) -> Result<(), RebuildError> {
        if self.on_going_note {
            if let Some(note) = self.current_note.as_mut() {
                note.set_stem(Rc::new(stem.clone()));
                return Ok(());
            }
        }
        if self.on_going_chord {
            if let Some(chord) = self.current_chord.as_mut() {
                chord.append_stem(stem.clone());
                return Ok(());
            }
        }
        Ok(())
    }
    fn visit_tie(&mut self, tie: &Tie) -> Result<(), RebuildError> {
        if self.on_going_note {
            if let Some(note) = self.current_note.as_mut() {
                note.set_tie(Rc::new(tie.clone()));
            }
        }
        Ok(())
    }
    fn visit_beam(&mut self, beam: &Beam) -> Result<(), RebuildError> {
        if self.on_going_note {
            if let Some(note) = self.current_note.as_mut() {
                note.append_beam(beam.clone());
                return Ok(());
            }
        }
        if self.on_going_chord {
            if let Some(chord) = self.current_chord.as_mut() {
                chord.append_beam_link(ChordBeamLink::new(beam.line, Rc::new(beam.clone())));
                return Ok(());
            }
        }
        Ok(())
    }
    fn visit_slur(&mut self, slur: &Slur) -> Result<(), RebuildError> {
        if self.on_going_note {
            if let Some(note) = self.current_note.as_mut() {
                note.append_slur(slur.clone());
                return Ok(());
            }
        }
        if self.on_going_chord {
            if let Some(chord) = self.current_chord.as_mut() {
                chord.append_slur_link(ChordSlurLink::new(slur.line, Rc::new(slur.clone())));
                return Ok(());
            }
        }
        Ok(())
    }

    /// The shared object behind a chord link is not cloned: the link
    /// clone keeps pointing at the same beam, slur or grace group.
    fn visit_chord_beam_link(&mut self, link: &ChordBeamLink) -> Result<(), RebuildError> {
        if let Some(chord) = self.current_chord.as_mut() {
            chord.append_beam_link(ChordBeamLink::new(link.line, Rc::clone(link.beam())));
        }
        Ok(())
    }
    fn visit_chord_slur_link(&mut self, link: &ChordSlurLink) -> Result<(), RebuildError> {
        if let Some(chord) = self.current_chord.as_mut() {
            chord.append_slur_link(ChordSlurLink::new(link.line, Rc::clone(link.slur())));
        }
        Ok(())
    }
    fn visit_chord_grace_group_link(
        &mut self,
        link: &ChordGraceNotesGroupLink,
    ) -> Result<(), RebuildError> {
        if let Some(chord) = self.current_chord.as_mut() {
            chord.append_grace_group_link(ChordGraceNotesGroupLink::new(
                link.line,
                Rc::clone(link.group()),
            ));
        }
        Ok(())
    }

    fn visit_articulation(
        &mut self,
        articulation: &Articulation,
    ) -> Result<(), RebuildError> {
        if self.on_going_note {
            if let Some(note) = self.current_note.as_mut() {
                note.append_articulation(articulation.clone());
                return Ok(());
            }
        }
        if self.on_going_chord {
            if let Some(chord) = self.current_chord.as_mut() {
                chord.append_articulation(articulation.clone());
                return Ok(());
            }
        }
        Ok(())
    }
    fn visit_spanner(&mut self, spanner: &Spanner) -> Result<(), RebuildError> {
        if self.on_going_note {
            if let Some(note) = self.current_note.as_mut() {
                note.append_spanner(spanner.clone());
                return Ok(());
            }
        }
        if self.on_going_chord {
            if let Some(chord) = self.current_chord.as_mut() {
                chord.append_spanner(spanner.clone());
                return Ok(());
            }
        }
        Ok(())
    }
    fn visit_technical(&mut self, technical: &Technical) -> Result<(), RebuildError> {
        if self.on_going_note {
            if let Some(note) = self.current_note.as_mut() {
                note.append_technical(technical.clone());
                return Ok(());
            }
        }
        if self.on_going_chord {
            if let Some(chord) = self.current_chord.as_mut() {
                chord.append_technical(technical.clone());
                return Ok(());
            }
        }
        Ok(())
    }
    fn visit_technical_with_integer(
        &mut self,
        technical: &TechnicalWithInteger,
    ) -> Result<(), RebuildError> {
        if self.on_going_note {
            if let Some(note) = self.current_note.as_mut() {
                note.append_technical_with_integer(technical.clone());
                return Ok(());
            }
        }
        if self.on_going_chord {
            if let Some(chord) = self.current_chord.as_mut() {
                chord.append_technical_with_integer(technical.clone());
                return Ok(());
            }
        }
        Ok(())
    }
    fn visit_technical_with_string(
        &mut self,
        technical: &TechnicalWithString,
    ) -> Result<(), RebuildError> {
        if self.on_going_note {
            if let Some(note) = self.current_note.as_mut() {
                note.append_technical_with_string(technical.clone());
                return Ok(());
            }
        }
        if self.on_going_chord {
            if let Some(chord) = self.current_chord.as_mut() {
                chord.append_technical_with_string(technical.clone());
                return Ok(());
            }
        }
        Ok(())
    }
    fn visit_ornament(&mut self, ornament: &Ornament) -> Result<(), RebuildError> {
        if self.on_going_note {
            if let Some(note) = self.current_note.as_mut() {
                note.append_ornament(ornament.clone());
                return Ok(());
            }
        }
        if self.on_going_chord {
            if let Some(chord) = self.current_chord.as_mut() {
                chord.append_ornament(ornament.clone());
                return Ok(());
            }
        }
        Ok(())
    }
    fn visit_glissando(&mut self, glissando: &Glissando) -> Result<(), RebuildError> {
        if self.on_going_note {
            if let Some(note) = self.current_note.as_mut() {
                note.append_glissando(glissando.clone());
                return Ok(());
            }
        }
        if self.on_going_chord {
            if let Some(chord) = self.current_chord.as_mut() {
                chord.append_glissando(glissando.clone());
                return Ok(());
            }
        }
        Ok(())
    }
    fn visit_slide(&mut self, slide: &Slide) -> Result<(), RebuildError> {
        if self.on_going_note {
            if let Some(note) = self.current_note.as_mut() {
                note.append_slide(slide.clone());
                return Ok(());
            }
        }
        if self.on_going_chord {
            if let Some(chord) = self.current_chord.as_mut() {
                chord.append_slide(slide.clone());
                return Ok(());
            }
        }
        Ok(())
    }
    fn visit_dynamics(&mut self, dynamics: &Dynamics) -> Result<(), RebuildError> {
        if self.on_going_note {
            if let Some(note) = self.current_note.as_mut() {
                note.append_dynamics(dynamics.clone());
                return Ok(());
            }
        }
        if self.on_going_chord {
            if let Some(chord) = self.current_chord.as_mut() {
                chord.append_dynamics(dynamics.clone());
                return Ok(());
            }
        }
        Ok(())
    }
    fn visit_other_dynamics(
        &mut self,
        other: &OtherDynamics,
    ) -> Result<(), RebuildError> {
        if self.on_going_note {
            if let Some(note) = self.current_note.as_mut() {
                note.append_other_dynamics(other.clone());
                return Ok(());
            }
        }
        if self.on_going_chord {
            if let Some(chord) = self.current_chord.as_mut() {
                chord.append_other_dynamics(other.clone());
                return Ok(());
            }
        }
        Ok(())
    }
    fn visit_words(&mut self, words: &Words) -> Result<(), RebuildError> {
        if self.on_going_note {
            if let Some(note) = self.current_note.as_mut() {
                note.append_words(words.clone());
                return Ok(());
            }
        }
        if self.on_going_chord {
            if let Some(chord) = self.current_chord.as_mut() {
                chord.append_words(words.clone());
                return Ok(());
            }
        }
        Ok(())
    }
    fn visit_ligature(&mut self, ligature: &Ligature) -> Result<(), RebuildError> {
        if self.on_going_note {
            if let Some(note) = self.current_note.as_mut() {
                note.append_ligature(ligature.clone());
                return Ok(());
            }
        }
        debug!(
            "ligature at line {} visited outside a note, dropped",
            ligature.line
        );
        Ok(())
    }
    fn visit_pedal(&mut self, pedal: &Pedal) -> Result<(), RebuildError> {
        if self.on_going_note {
            if let Some(note) = self.current_note.as_mut() {
                note.append_pedal(pedal.clone());
                return Ok(());
            }
        }
        debug!("pedal at line {} visited outside a note, dropped", pedal.line);
        Ok(())
    }

    /// Fermatas and slashes are per-note or per-chord notations: they go
    /// to whichever of the two is in progress.
    fn visit_fermata(&mut self, fermata: &Fermata) -> Result<(), RebuildError> {
        if self.on_going_note {
            if let Some(note) = self.current_note.as_mut() {
                note.append_fermata(fermata.clone());
                return Ok(());
            }
        }
        if self.on_going_chord {
            if let Some(chord) = self.current_chord.as_mut() {
                chord.append_fermata(fermata.clone());
                return Ok(());
            }
        }
        debug!(
            "fermata at line {} visited outside note and chord, dropped",
            fermata.line
        );
        Ok(())
    }
    fn visit_slash(&mut self, slash: &Slash) -> Result<(), RebuildError> {
        if self.on_going_note {
            if let Some(note) = self.current_note.as_mut() {
                note.append_slash(slash.clone());
                return Ok(());
            }
        }
        if self.on_going_chord {
            if let Some(chord) = self.current_chord.as_mut() {
                chord.append_slash(slash.clone());
                return Ok(());
            }
        }
        debug!(
            "slash at line {} visited outside note and chord, dropped",
            slash.line
        );
        Ok(())
    }

    fn visit_segno(&mut self, segno: &Segno) -> Result<(), RebuildError> {
        if self.on_going_note {
            if let Some(note) = self.current_note.as_mut() {
                note.append_segno(segno.clone());
                return Ok(());
            }
        }
        if self.on_going_chord {
            if let Some(chord) = self.current_chord.as_mut() {
                chord.append_segno(segno.clone());
                return Ok(());
            }
        }
        self.master.append_segno(segno.clone())?;
        Ok(())
    }
    fn visit_dal_segno(&mut self, dal_segno: &DalSegno) -> Result<(), RebuildError> {
        if self.on_going_note {
            if let Some(note) = self.current_note.as_mut() {
                note.append_dal_segno(dal_segno.clone());
                return Ok(());
            }
        }
        if self.on_going_chord {
            if let Some(chord) = self.current_chord.as_mut() {
                chord.append_dal_segno(dal_segno.clone());
                return Ok(());
            }
        }
        debug!(
            "dal segno at line {} visited outside note and chord, dropped",
            dal_segno.line
        );
        Ok(())
    }
    fn visit_coda(&mut self, coda: &Coda) -> Result<(), RebuildError> {
        if self.on_going_note {
            if let Some(note) = self.current_note.as_mut() {
                note.append_coda(coda.clone());
                return Ok(());
            }
        }
        if self.on_going_chord {
            if let Some(chord) = self.current_chord.as_mut() {
                chord.append_coda(coda.clone());
                return Ok(());
            }
        }
        self.master.append_coda(coda.clone())?;
        Ok(())
    }
    fn visit_eyeglasses(&mut self, eyeglasses: &Eyeglasses) -> Result<(), RebuildError> {
        if self.on_going_note {
            if let Some(note) = self.current_note.as_mut() {
                note.append_eyeglasses(eyeglasses.clone());
                return Ok(());
            }
        }
        if self.on_going_chord {
            if let Some(chord) = self.current_chord.as_mut() {
                chord.append_eyeglasses(eyeglasses.clone());
                return Ok(());
            }
        }
        Ok(())
    }
    fn visit_damp(&mut self, damp: &Damp) -> Result<(), RebuildError> {
        if self.on_going_note {
            if let Some(note) = self.current_note.as_mut() {
                note.append_damp(damp.clone());
                return Ok(());
            }
        }
        if self.on_going_chord {
            if let Some(chord) = self.current_chord.as_mut() {
                chord.append_damp(damp.clone());
                return Ok(());
            }
        }
        Ok(())
    }
    fn visit_wedge(&mut self, wedge: &Wedge) -> Result<(), RebuildError> {
        if self.on_going_note {
            if let Some(note) = self.current_note.as_mut() {
                note.append_wedge(wedge.clone());
                return Ok(());
            }
        }
        if self.on_going_chord {
            if let Some(chord) = self.current_chord.as_mut() {
                chord.append_wedge(wedge.clone());
                return Ok(());
            }
        }
        Ok(())
    }
    fn visit_syllable(&mut self, syllable: &Syllable) -> Result<(), RebuildError> {
        if self.on_going_note {
            if let Some(note) = self.current_note.as_mut() {
                note.append_syllable(syllable.clone());
                return Ok(());
            }
        }
        debug!(
            "syllable at line {} visited outside a note, dropped",
            syllable.line
        );
        Ok(())
    }
}
