//! Renders a voice tree as an indented, human-readable trace.
//!
//! The exact column layout is cosmetic; tests only rely on one line per
//! element and on indentation following the tree's nesting.

use std::fmt;

use itertools::Itertools;

use crate::dom::{
    BarCheck, BarNumberCheck, Barline, Chord, FiguredBass, GraceNotesGroup,
    Harmony, KeySignature, Measure, MeasuresRepeat, Note, Repeat,
    RepeatEnding, RestMeasures, Scordatura, Segment, Tempo, TimeSignature,
    Tuplet, Voice,
};
use crate::notation::{Articulation, Dynamics, Words};
use crate::settings::TraceSettings;

use super::{browse_voice, ScoreVisitor};

pub struct TracePrinter<'a, W: fmt::Write> {
    out: &'a mut W,
    settings: TraceSettings,
    indent: usize,
}

impl<'a, W: fmt::Write> TracePrinter<'a, W> {
    pub fn new(out: &'a mut W, settings: TraceSettings) -> Self {
        Self {
            out,
            settings,
            indent: 0,
        }
    }

    fn line(&mut self, text: impl fmt::Display) -> fmt::Result {
        writeln!(self.out, "{:indent$}{}", "", text, indent = self.indent * 2)
    }

    fn open(&mut self, text: impl fmt::Display) -> fmt::Result {
        self.line(text)?;
        self.indent += 1;
        Ok(())
    }

    fn close(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }
}

impl<'a, W: fmt::Write> ScoreVisitor for TracePrinter<'a, W> {
    type Error = fmt::Error;

    fn visit_voice_start(&mut self, voice: &Voice) -> fmt::Result {
        self.open(voice)
    }
    fn visit_voice_end(&mut self, _voice: &Voice) -> fmt::Result {
        self.close();
        Ok(())
    }
    fn visit_segment_start(&mut self, segment: &Segment) -> fmt::Result {
        self.open(segment)
    }
    fn visit_segment_end(&mut self, _segment: &Segment) -> fmt::Result {
        self.close();
        Ok(())
    }
    fn visit_measure_start(&mut self, measure: &Measure) -> fmt::Result {
        self.open(measure)
    }
    fn visit_measure_end(&mut self, _measure: &Measure) -> fmt::Result {
        self.close();
        Ok(())
    }
    fn visit_note_start(&mut self, note: &Note) -> fmt::Result {
        match self.settings.positions {
            true => {
                use crate::primitives::MeasurePositioned;
                let placement = note.placement().clone();
                self.open(format_args!("note {} [{}]", note, placement))
            }
            false => self.open(format_args!("note {}", note)),
        }
    }
    fn visit_note_end(&mut self, _note: &Note) -> fmt::Result {
        self.close();
        Ok(())
    }
    fn visit_chord_start(&mut self, chord: &Chord) -> fmt::Result {
        self.open(chord)
    }
    fn visit_chord_end(&mut self, _chord: &Chord) -> fmt::Result {
        self.close();
        Ok(())
    }
    fn visit_tuplet_start(&mut self, tuplet: &Tuplet) -> fmt::Result {
        self.open(tuplet)
    }
    fn visit_tuplet_end(&mut self, _tuplet: &Tuplet) -> fmt::Result {
        self.close();
        Ok(())
    }
    fn visit_grace_notes_group_start(&mut self, group: &GraceNotesGroup) -> fmt::Result {
        self.open(format_args!(
            "grace notes group ({:?}), line {}",
            group.kind, group.line
        ))
    }
    fn visit_grace_notes_group_end(&mut self, _group: &GraceNotesGroup) -> fmt::Result {
        self.close();
        Ok(())
    }
    fn visit_harmony_start(&mut self, harmony: &Harmony) -> fmt::Result {
        self.open(format_args!(
            "harmony {} {:?}, line {}",
            harmony.root, harmony.kind, harmony.line
        ))
    }
    fn visit_harmony_end(&mut self, _harmony: &Harmony) -> fmt::Result {
        self.close();
        Ok(())
    }
    fn visit_figured_bass_start(&mut self, figured_bass: &FiguredBass) -> fmt::Result {
        self.open(format_args!(
            "figured bass of {} figures, line {}",
            figured_bass.figures().len(),
            figured_bass.line
        ))
    }
    fn visit_figured_bass_end(&mut self, _figured_bass: &FiguredBass) -> fmt::Result {
        self.close();
        Ok(())
    }
    fn visit_repeat_start(&mut self, repeat: &Repeat) -> fmt::Result {
        self.open(repeat)
    }
    fn visit_repeat_end(&mut self, _repeat: &Repeat) -> fmt::Result {
        self.close();
        Ok(())
    }
    fn visit_repeat_common_part_start(&mut self, _repeat: &Repeat) -> fmt::Result {
        self.open("common part")
    }
    fn visit_repeat_common_part_end(&mut self, _repeat: &Repeat) -> fmt::Result {
        self.close();
        Ok(())
    }
    fn visit_repeat_ending_start(&mut self, ending: &RepeatEnding) -> fmt::Result {
        self.open(format_args!(
            "ending {} ({:?}), line {}",
            ending.number, ending.kind, ending.line
        ))
    }
    fn visit_repeat_ending_end(&mut self, _ending: &RepeatEnding) -> fmt::Result {
        self.close();
        Ok(())
    }
    fn visit_rest_measures_start(&mut self, rest_measures: &RestMeasures) -> fmt::Result {
        self.open(rest_measures)
    }
    fn visit_rest_measures_end(&mut self, _rest_measures: &RestMeasures) -> fmt::Result {
        self.close();
        Ok(())
    }
    fn visit_measures_repeat_start(
        &mut self,
        measures_repeat: &MeasuresRepeat,
    ) -> fmt::Result {
        self.open(format_args!(
            "measures repeat, line {}",
            measures_repeat.line
        ))
    }
    fn visit_measures_repeat_end(
        &mut self,
        _measures_repeat: &MeasuresRepeat,
    ) -> fmt::Result {
        self.close();
        Ok(())
    }
    fn visit_barline(&mut self, barline: &Barline) -> fmt::Result {
        self.line(format_args!(
            "barline {:?} {:?}, line {}",
            barline.location, barline.style, barline.line
        ))
    }
    fn visit_bar_check(&mut self, bar_check: &BarCheck) -> fmt::Result {
        self.line(bar_check)
    }
    fn visit_bar_number_check(&mut self, check: &BarNumberCheck) -> fmt::Result {
        self.line(format_args!(
            "bar number check before measure {}, line {}",
            check.next_bar_number, check.line
        ))
    }
    fn visit_key_signature(&mut self, key: &KeySignature) -> fmt::Result {
        self.line(format_args!(
            "key {} {:?}, line {}",
            key.tonic, key.mode, key.line
        ))
    }
    fn visit_time_signature(&mut self, time: &TimeSignature) -> fmt::Result {
        self.line(format_args!("time {}, line {}", time, time.line))
    }
    fn visit_tempo(&mut self, tempo: &Tempo) -> fmt::Result {
        self.line(format_args!(
            "tempo {} = {}, line {}",
            tempo.beat_unit, tempo.per_minute, tempo.line
        ))
    }
    fn visit_scordatura(&mut self, scordatura: &Scordatura) -> fmt::Result {
        let tunings = scordatura
            .tunings()
            .iter()
            .map(|tuning| {
                format!(
                    "string {} -> {}{}",
                    tuning.string_number, tuning.pitch, tuning.octave
                )
            })
            .join(", ");
        self.line(format_args!(
            "scordatura [{}], line {}",
            tunings, scordatura.line
        ))
    }
    fn visit_articulation(&mut self, articulation: &Articulation) -> fmt::Result {
        self.line(format_args!(
            "articulation {}, line {}",
            articulation.kind.to_string(),
            articulation.line
        ))
    }
    fn visit_dynamics(&mut self, dynamics: &Dynamics) -> fmt::Result {
        self.line(format_args!(
            "dynamics {}, line {}",
            dynamics.kind.to_string(),
            dynamics.line
        ))
    }
    fn visit_words(&mut self, words: &Words) -> fmt::Result {
        self.line(format_args!("words \"{}\", line {}", words.text, words.line))
    }
}

/// Render the whole voice as an indented trace.
pub fn print_voice(voice: &Voice, settings: &TraceSettings) -> String {
    let mut out = String::new();
    let mut printer = TracePrinter::new(&mut out, settings.clone());
    browse_voice(voice, &mut printer)
        .expect("writing a trace to a string can not fail");
    out
}
