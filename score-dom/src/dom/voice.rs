//! A single voice: the ordered structure everything else hangs in, and
//! the destination of the master-voice rebuild.
//!
//! Plain music accumulates in the current segment. Structural constructs
//! (repeats, compressed rest runs, measure repeats) are assembled from
//! start/end handler pairs: the caller recognizes the boundaries, the
//! voice keeps the in-progress builders and owns every routing decision.

use std::fmt;

use log::debug;
use thiserror::Error;

use crate::primitives::WholeNotes;

use super::barlines::{
    BarCheck, BarNumberCheck, Barline, KeySignature, LineBreak, PageBreak,
    Rehearsal, Scordatura, Tempo, TimeSignature,
};
use super::chord::Chord;
use super::harmony::{FiguredBass, Harmony};
use super::measure::Measure;
use super::note::Note;
use super::repeats::{
    MeasuresRepeat, MeasuresRepeatPattern, MeasuresRepeatReplicas, Repeat,
    RepeatCommonPart, RepeatEnding, RepeatEndingKind, RestMeasures,
};
use super::segment::Segment;
use super::tuplet::Tuplet;
use crate::notation::{Coda, Segno};

#[derive(Debug, Error)]
pub enum VoiceError {
    #[error("voice {voice}: no active segment at line {line}")]
    NoActiveSegment { voice: String, line: u32 },
    #[error("voice {voice}: no active measure at line {line}")]
    NoActiveMeasure { voice: String, line: u32 },
    #[error("voice {voice}: no repeat in progress at line {line}")]
    NoPendingRepeat { voice: String, line: u32 },
    #[error("voice {voice}: no repeat common part in progress at line {line}")]
    NoPendingCommonPart { voice: String, line: u32 },
    #[error("voice {voice}: no repeat ending in progress at line {line}")]
    NoPendingEnding { voice: String, line: u32 },
    #[error("voice {voice}: no measures repeat in progress at line {line}")]
    NoPendingMeasuresRepeat { voice: String, line: u32 },
    #[error("voice {voice}: no rest measures in progress at line {line}")]
    NoPendingRestMeasures { voice: String, line: u32 },
    #[error("voice {voice}: empty rest measures aggregate at line {line}")]
    EmptyRestMeasures { voice: String, line: u32 },
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum VoiceKind {
    #[default]
    Regular,
    Harmony,
    FiguredBass,
}

#[derive(Debug, Clone)]
pub enum VoiceElement {
    Segment(Segment),
    Repeat(Repeat),
    RestMeasures(RestMeasures),
    MeasuresRepeat(MeasuresRepeat),
}

#[derive(Debug, Clone)]
pub struct Voice {
    pub line: u32,
    number: i32,
    name: String,
    kind: VoiceKind,
    elements: Vec<VoiceElement>,
    last_segment: Option<Segment>,
    pending_repeats: Vec<Repeat>,
    pending_common_part: Option<RepeatCommonPart>,
    pending_ending: Option<RepeatEnding>,
    pending_measures_repeat: Option<MeasuresRepeat>,
    pending_pattern: Option<MeasuresRepeatPattern>,
    pending_replicas: Option<MeasuresRepeatReplicas>,
    pending_rest_measures: Option<RestMeasures>,
    current_purist_number: i32,
    shortest_note_duration: WholeNotes,
}

impl Voice {
    pub fn new(line: u32, number: i32, name: impl Into<String>, kind: VoiceKind) -> Self {
        Self {
            line,
            number,
            name: name.into(),
            kind,
            elements: Vec::new(),
            last_segment: None,
            pending_repeats: Vec::new(),
            pending_common_part: None,
            pending_ending: None,
            pending_measures_repeat: None,
            pending_pattern: None,
            pending_replicas: None,
            pending_rest_measures: None,
            current_purist_number: 0,
            shortest_note_duration: WholeNotes::unknown(),
        }
    }

    /// Same identity, no contents: the starting point of a rebuild.
    pub fn newborn_clone(&self) -> Self {
        Self::new(self.line, self.number, self.name.clone(), self.kind)
    }

    pub fn number(&self) -> i32 {
        self.number
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn kind(&self) -> VoiceKind {
        self.kind
    }
    pub fn elements(&self) -> &[VoiceElement] {
        &self.elements
    }
    pub fn last_segment(&self) -> Option<&Segment> {
        self.last_segment.as_ref()
    }
    pub fn current_purist_number(&self) -> i32 {
        self.current_purist_number
    }
    pub fn shortest_note_duration(&self) -> &WholeNotes {
        &self.shortest_note_duration
    }

    fn no_measure(&self, line: u32) -> VoiceError {
        VoiceError::NoActiveMeasure {
            voice: self.name.clone(),
            line,
        }
    }

    /// Install the segment music accumulates into from now on.
    pub fn set_last_segment(&mut self, segment: Segment) {
        if let Some(previous) = self.last_segment.take() {
            if !previous.is_empty() {
                self.route_segment(previous);
            }
        }
        self.last_segment = Some(segment);
    }

    /// Hand the finished current segment over to whatever structure is
    /// collecting segments right now.
    pub fn finish_segment(&mut self, line: u32) -> Result<(), VoiceError> {
        let segment = self.last_segment.take().ok_or(VoiceError::NoActiveSegment {
            voice: self.name.clone(),
            line,
        })?;
        self.route_segment(segment);
        Ok(())
    }

    fn route_segment(&mut self, segment: Segment) {
        if segment.is_empty() {
            debug!(
                "voice {}: dropping empty segment from line {}",
                self.name, segment.line
            );
            return;
        }
        if let Some(ending) = self.pending_ending.as_mut() {
            ending.append_segment(segment);
        } else if let Some(common_part) = self.pending_common_part.as_mut() {
            common_part.append_segment(segment);
        } else if let Some(replicas) = self.pending_replicas.as_mut() {
            replicas.append_segment(segment);
        } else if let Some(pattern) = self.pending_pattern.as_mut() {
            pattern.append_segment(segment);
        } else {
            self.elements.push(VoiceElement::Segment(segment));
        }
    }

    /// Flush a non-empty current segment and open a fresh one, so that a
    /// structural element lands between them in document order.
    fn split_segment_here(&mut self) {
        if let Some(segment) = self.last_segment.take() {
            let line = segment.line;
            if segment.is_empty() {
                self.last_segment = Some(segment);
                return;
            }
            self.route_segment(segment);
            self.last_segment = Some(Segment::new(line));
        }
    }

    pub fn append_measure_clone(
        &mut self,
        line: u32,
        measure: Measure,
    ) -> Result<(), VoiceError> {
        self.current_purist_number = measure.purist_number();
        self.last_segment
            .as_mut()
            .ok_or(VoiceError::NoActiveSegment {
                voice: self.name.clone(),
                line,
            })?
            .append_measure(measure);
        Ok(())
    }

    pub fn last_measure_mut(&mut self, line: u32) -> Result<&mut Measure, VoiceError> {
        let error = self.no_measure(line);
        self.last_segment
            .as_mut()
            .and_then(|segment| segment.last_measure_mut())
            .ok_or(error)
    }
    pub fn last_measure(&self, line: u32) -> Result<&Measure, VoiceError> {
        self.last_segment
            .as_ref()
            .and_then(|segment| segment.last_measure())
            .ok_or(VoiceError::NoActiveMeasure {
                voice: self.name.clone(),
                line,
            })
    }

    /// Keep track of the shortest sounding duration seen, for downstream
    /// spacing decisions. Unknown and zero durations are not relevant.
    pub fn register_shortest_note_if_relevant(&mut self, note: &Note) {
        let sounding = note.sounding_whole_notes();
        if sounding.is_unknown() || sounding <= &WholeNotes::zero() {
            return;
        }
        if self.shortest_note_duration.is_unknown()
            || sounding < &self.shortest_note_duration
        {
            debug!(
                "voice {}: shortest note now {} (line {})",
                self.name, sounding, note.line
            );
            self.shortest_note_duration = sounding.clone();
        }
    }

    pub fn account_for_tuplet_member_note_duration(&mut self, note: &Note) {
        if let Some(measure) = self
            .last_segment
            .as_mut()
            .and_then(|segment| segment.last_measure_mut())
        {
            measure.account_for_tuplet_member_note_duration(note);
        }
    }

    pub fn append_note(&mut self, note: Note) -> Result<(), VoiceError> {
        self.register_shortest_note_if_relevant(&note);
        let line = note.line;
        self.last_measure_mut(line)?.append_note(note);
        Ok(())
    }
    pub fn append_chord(&mut self, chord: Chord) -> Result<(), VoiceError> {
        let line = chord.line;
        self.last_measure_mut(line)?.append_chord(chord);
        Ok(())
    }
    pub fn append_tuplet(&mut self, tuplet: Tuplet) -> Result<(), VoiceError> {
        let line = tuplet.line;
        self.last_measure_mut(line)?.append_tuplet(tuplet);
        Ok(())
    }
    pub fn append_tuplet_at(
        &mut self,
        tuplet: Tuplet,
        start: WholeNotes,
    ) -> Result<(), VoiceError> {
        let line = tuplet.line;
        self.last_measure_mut(line)?.append_tuplet_at(tuplet, start);
        Ok(())
    }
    pub fn append_harmony(&mut self, harmony: Harmony) -> Result<(), VoiceError> {
        let line = harmony.line;
        self.last_measure_mut(line)?.append_harmony(harmony);
        Ok(())
    }
    pub fn append_figured_bass(
        &mut self,
        figured_bass: FiguredBass,
    ) -> Result<(), VoiceError> {
        let line = figured_bass.line;
        self.last_measure_mut(line)?.append_figured_bass(figured_bass);
        Ok(())
    }
    pub fn append_barline(&mut self, barline: Barline) -> Result<(), VoiceError> {
        let line = barline.line;
        self.last_measure_mut(line)?.append_barline(barline);
        Ok(())
    }
    pub fn append_bar_check(&mut self, bar_check: BarCheck) -> Result<(), VoiceError> {
        let line = bar_check.line;
        self.last_measure_mut(line)?.append_bar_check(bar_check);
        Ok(())
    }
    pub fn append_bar_number_check(
        &mut self,
        check: BarNumberCheck,
    ) -> Result<(), VoiceError> {
        let line = check.line;
        self.last_measure_mut(line)?.append_bar_number_check(check);
        Ok(())
    }
    pub fn append_key_signature(&mut self, key: KeySignature) -> Result<(), VoiceError> {
        let line = key.line;
        self.last_measure_mut(line)?.append_key_signature(key);
        Ok(())
    }
    pub fn append_time_signature(
        &mut self,
        time: TimeSignature,
    ) -> Result<(), VoiceError> {
        let line = time.line;
        self.last_measure_mut(line)?.append_time_signature(time);
        Ok(())
    }
    pub fn append_tempo(&mut self, tempo: Tempo) -> Result<(), VoiceError> {
        let line = tempo.line;
        self.last_measure_mut(line)?.append_tempo(tempo);
        Ok(())
    }
    pub fn append_rehearsal(&mut self, rehearsal: Rehearsal) -> Result<(), VoiceError> {
        let line = rehearsal.line;
        self.last_measure_mut(line)?.append_rehearsal(rehearsal);
        Ok(())
    }
    pub fn append_segno(&mut self, segno: Segno) -> Result<(), VoiceError> {
        let line = segno.line;
        self.last_measure_mut(line)?.append_segno(segno);
        Ok(())
    }
    pub fn append_coda(&mut self, coda: Coda) -> Result<(), VoiceError> {
        let line = coda.line;
        self.last_measure_mut(line)?.append_coda(coda);
        Ok(())
    }
    pub fn append_scordatura(&mut self, scordatura: Scordatura) -> Result<(), VoiceError> {
        let line = scordatura.line;
        self.last_measure_mut(line)?.append_scordatura(scordatura);
        Ok(())
    }
    pub fn append_line_break(&mut self, line_break: LineBreak) -> Result<(), VoiceError> {
        let line = line_break.line;
        self.last_measure_mut(line)?.append_line_break(line_break);
        Ok(())
    }
    pub fn append_page_break(&mut self, page_break: PageBreak) -> Result<(), VoiceError> {
        let line = page_break.line;
        self.last_measure_mut(line)?.append_page_break(page_break);
        Ok(())
    }

    /// Append a finished rest-measures aggregate between segments.
    pub fn append_rest_measures(
        &mut self,
        line: u32,
        rest_measures: RestMeasures,
    ) -> Result<(), VoiceError> {
        if rest_measures.is_empty() {
            return Err(VoiceError::EmptyRestMeasures {
                voice: self.name.clone(),
                line,
            });
        }
        self.split_segment_here();
        self.elements
            .push(VoiceElement::RestMeasures(rest_measures));
        Ok(())
    }

    pub fn handle_repeat_start(&mut self, line: u32) {
        debug!("voice {}: repeat starts at line {}", self.name, line);
        self.split_segment_here();
        self.pending_repeats.push(Repeat::new(line, 2));
    }
    pub fn handle_repeat_end(&mut self, line: u32) -> Result<(), VoiceError> {
        let repeat = self
            .pending_repeats
            .pop()
            .ok_or(VoiceError::NoPendingRepeat {
                voice: self.name.clone(),
                line,
            })?;
        self.elements.push(VoiceElement::Repeat(repeat));
        Ok(())
    }
    pub fn handle_repeat_common_part_start(&mut self, line: u32) {
        self.pending_common_part = Some(RepeatCommonPart::new(line));
    }
    pub fn handle_repeat_common_part_end(&mut self, line: u32) -> Result<(), VoiceError> {
        let common_part =
            self.pending_common_part
                .take()
                .ok_or(VoiceError::NoPendingCommonPart {
                    voice: self.name.clone(),
                    line,
                })?;
        self.pending_repeats
            .last_mut()
            .ok_or(VoiceError::NoPendingRepeat {
                voice: self.name.clone(),
                line,
            })?
            .set_common_part(common_part);
        Ok(())
    }
    pub fn handle_repeat_ending_start(
        &mut self,
        line: u32,
        kind: RepeatEndingKind,
        number: impl Into<String>,
    ) {
        self.pending_ending = Some(RepeatEnding::new(line, kind, number));
    }
    pub fn handle_repeat_ending_end(&mut self, line: u32) -> Result<(), VoiceError> {
        let ending = self
            .pending_ending
            .take()
            .ok_or(VoiceError::NoPendingEnding {
                voice: self.name.clone(),
                line,
            })?;
        self.pending_repeats
            .last_mut()
            .ok_or(VoiceError::NoPendingRepeat {
                voice: self.name.clone(),
                line,
            })?
            .append_ending(ending);
        Ok(())
    }

    pub fn handle_measures_repeat_start(&mut self, line: u32) {
        self.split_segment_here();
        self.pending_measures_repeat = Some(MeasuresRepeat::new(line));
    }
    pub fn handle_measures_repeat_end(&mut self, line: u32) -> Result<(), VoiceError> {
        let measures_repeat = self.pending_measures_repeat.take().ok_or(
            VoiceError::NoPendingMeasuresRepeat {
                voice: self.name.clone(),
                line,
            },
        )?;
        self.elements
            .push(VoiceElement::MeasuresRepeat(measures_repeat));
        Ok(())
    }
    pub fn handle_measures_repeat_pattern_start(&mut self, line: u32) {
        self.pending_pattern = Some(MeasuresRepeatPattern::new(line));
    }
    pub fn handle_measures_repeat_pattern_end(
        &mut self,
        line: u32,
    ) -> Result<(), VoiceError> {
        let pattern = self
            .pending_pattern
            .take()
            .ok_or(VoiceError::NoPendingMeasuresRepeat {
                voice: self.name.clone(),
                line,
            })?;
        self.pending_measures_repeat
            .as_mut()
            .ok_or(VoiceError::NoPendingMeasuresRepeat {
                voice: self.name.clone(),
                line,
            })?
            .set_pattern(pattern);
        Ok(())
    }
    pub fn handle_measures_repeat_replicas_start(&mut self, line: u32) {
        self.pending_replicas = Some(MeasuresRepeatReplicas::new(line));
    }
    pub fn handle_measures_repeat_replicas_end(
        &mut self,
        line: u32,
    ) -> Result<(), VoiceError> {
        let replicas = self
            .pending_replicas
            .take()
            .ok_or(VoiceError::NoPendingMeasuresRepeat {
                voice: self.name.clone(),
                line,
            })?;
        self.pending_measures_repeat
            .as_mut()
            .ok_or(VoiceError::NoPendingMeasuresRepeat {
                voice: self.name.clone(),
                line,
            })?
            .set_replicas(replicas);
        Ok(())
    }

    /// The source voice already carried a compressed rest run: collect
    /// its measure clones into a fresh aggregate.
    pub fn handle_rest_measures_start(&mut self, line: u32) {
        self.split_segment_here();
        self.pending_rest_measures = Some(RestMeasures::new(line));
    }
    pub fn handle_rest_measures_end(&mut self, line: u32) -> Result<(), VoiceError> {
        let rest_measures = self.pending_rest_measures.take().ok_or(
            VoiceError::NoPendingRestMeasures {
                voice: self.name.clone(),
                line,
            },
        )?;
        if rest_measures.is_empty() {
            return Err(VoiceError::EmptyRestMeasures {
                voice: self.name.clone(),
                line,
            });
        }
        self.elements
            .push(VoiceElement::RestMeasures(rest_measures));
        Ok(())
    }
    pub fn pending_rest_measures_mut(&mut self) -> Option<&mut RestMeasures> {
        self.pending_rest_measures.as_mut()
    }

    /// Flush whatever is still open. Called once at the very end of a
    /// rebuild.
    pub fn finish(&mut self, line: u32) -> Result<(), VoiceError> {
        if self.last_segment.is_some() {
            self.finish_segment(line)?;
        }
        Ok(())
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "voice {} \"{}\" ({:?}), {} elements, line {}",
            self.number,
            self.name,
            self.kind,
            self.elements.len(),
            self.line
        )
    }
}
