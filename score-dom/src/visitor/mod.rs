//! Depth-first traversal of a voice's tree with one statically-typed
//! callback per node kind.
//!
//! Children are visited in the exact order they sit in their parent's
//! list, between the parent's `_start` and `_end` callbacks. That order
//! is load-bearing: duration accumulation and position assignment both
//! depend on it. Every callback defaults to a no-op, and the visitor
//! picks its own error type; the browse functions abort on the first
//! error.

pub mod printer;

pub use printer::TracePrinter;

use crate::dom::{
    Chord, ChordBeamLink, ChordGraceNotesGroupLink, ChordSlurLink, Figure,
    FiguredBass, Frame, GraceNotesGroup, Harmony, HarmonyDegree, Measure,
    MeasureContent, MeasuresRepeat, Note, Repeat, RestMeasures, Segment,
    Tuplet, TupletMember, Voice, VoiceElement,
};
use crate::dom::{
    BarCheck, BarNumberCheck, Barline, KeySignature, LineBreak, PageBreak,
    Rehearsal, RepeatEnding, Scordatura, Tempo, TimeSignature,
};
use crate::notation::{
    Articulation, Beam, Coda, DalSegno, Damp, Dynamics, Eyeglasses,
    Fermata, Glissando, Ligature, Ornament, OtherDynamics, Pedal, Segno,
    Slash, Slide, Slur, Spanner, Stem, Syllable, Technical,
    TechnicalWithInteger, TechnicalWithString, Tie, Wedge, Words,
};

#[allow(unused_variables)]
pub trait ScoreVisitor {
    type Error;

    fn visit_voice_start(&mut self, voice: &Voice) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_voice_end(&mut self, voice: &Voice) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_segment_start(&mut self, segment: &Segment) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_segment_end(&mut self, segment: &Segment) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_measure_start(&mut self, measure: &Measure) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_measure_end(&mut self, measure: &Measure) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_note_start(&mut self, note: &Note) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_note_end(&mut self, note: &Note) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_chord_start(&mut self, chord: &Chord) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_chord_end(&mut self, chord: &Chord) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_tuplet_start(&mut self, tuplet: &Tuplet) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_tuplet_end(&mut self, tuplet: &Tuplet) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_grace_notes_group_start(
        &mut self,
        group: &GraceNotesGroup,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_grace_notes_group_end(
        &mut self,
        group: &GraceNotesGroup,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_harmony_start(&mut self, harmony: &Harmony) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_harmony_end(&mut self, harmony: &Harmony) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_harmony_degree(&mut self, degree: &HarmonyDegree) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_frame(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_figured_bass_start(
        &mut self,
        figured_bass: &FiguredBass,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_figured_bass_end(
        &mut self,
        figured_bass: &FiguredBass,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_figure(&mut self, figure: &Figure) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_repeat_start(&mut self, repeat: &Repeat) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_repeat_end(&mut self, repeat: &Repeat) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_repeat_common_part_start(
        &mut self,
        repeat: &Repeat,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_repeat_common_part_end(
        &mut self,
        repeat: &Repeat,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_repeat_ending_start(
        &mut self,
        ending: &RepeatEnding,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_repeat_ending_end(
        &mut self,
        ending: &RepeatEnding,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_rest_measures_start(
        &mut self,
        rest_measures: &RestMeasures,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_rest_measures_end(
        &mut self,
        rest_measures: &RestMeasures,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_rest_measures_contents_start(
        &mut self,
        rest_measures: &RestMeasures,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_rest_measures_contents_end(
        &mut self,
        rest_measures: &RestMeasures,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_measures_repeat_start(
        &mut self,
        measures_repeat: &MeasuresRepeat,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_measures_repeat_end(
        &mut self,
        measures_repeat: &MeasuresRepeat,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_measures_repeat_pattern_start(
        &mut self,
        measures_repeat: &MeasuresRepeat,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_measures_repeat_pattern_end(
        &mut self,
        measures_repeat: &MeasuresRepeat,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_measures_repeat_replicas_start(
        &mut self,
        measures_repeat: &MeasuresRepeat,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_measures_repeat_replicas_end(
        &mut self,
        measures_repeat: &MeasuresRepeat,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_barline(&mut self, barline: &Barline) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_bar_check(&mut self, bar_check: &BarCheck) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_bar_number_check(
        &mut self,
        check: &BarNumberCheck,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_key_signature(&mut self, key: &KeySignature) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_time_signature(&mut self, time: &TimeSignature) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_tempo(&mut self, tempo: &Tempo) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_rehearsal(&mut self, rehearsal: &Rehearsal) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_scordatura(&mut self, scordatura: &Scordatura) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_line_break(&mut self, line_break: &LineBreak) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_page_break(&mut self, page_break: &PageBreak) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_stem(&mut self, stem: &Stem) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_beam(&mut self, beam: &Beam) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_articulation(
        &mut self,
        articulation: &Articulation,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_spanner(&mut self, spanner: &Spanner) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_technical(&mut self, technical: &Technical) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_technical_with_integer(
        &mut self,
        technical: &TechnicalWithInteger,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_technical_with_string(
        &mut self,
        technical: &TechnicalWithString,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_ornament(&mut self, ornament: &Ornament) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_glissando(&mut self, glissando: &Glissando) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_slide(&mut self, slide: &Slide) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_dynamics(&mut self, dynamics: &Dynamics) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_other_dynamics(
        &mut self,
        other: &OtherDynamics,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_words(&mut self, words: &Words) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_slur(&mut self, slur: &Slur) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_ligature(&mut self, ligature: &Ligature) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_pedal(&mut self, pedal: &Pedal) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_slash(&mut self, slash: &Slash) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_wedge(&mut self, wedge: &Wedge) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_segno(&mut self, segno: &Segno) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_dal_segno(&mut self, dal_segno: &DalSegno) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_coda(&mut self, coda: &Coda) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_eyeglasses(&mut self, eyeglasses: &Eyeglasses) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_damp(&mut self, damp: &Damp) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_fermata(&mut self, fermata: &Fermata) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_syllable(&mut self, syllable: &Syllable) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_tie(&mut self, tie: &Tie) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_chord_beam_link(&mut self, link: &ChordBeamLink) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_chord_slur_link(&mut self, link: &ChordSlurLink) -> Result<(), Self::Error> {
        Ok(())
    }
    fn visit_chord_grace_group_link(
        &mut self,
        link: &ChordGraceNotesGroupLink,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}

pub fn browse_voice<V: ScoreVisitor>(
    voice: &Voice,
    visitor: &mut V,
) -> Result<(), V::Error> {
    visitor.visit_voice_start(voice)?;
    for element in voice.elements() {
        browse_voice_element(element, visitor)?;
    }
    if let Some(segment) = voice.last_segment() {
        browse_segment(segment, visitor)?;
    }
    visitor.visit_voice_end(voice)
}

pub fn browse_voice_element<V: ScoreVisitor>(
    element: &VoiceElement,
    visitor: &mut V,
) -> Result<(), V::Error> {
    match element {
        VoiceElement::Segment(segment) => browse_segment(segment, visitor),
        VoiceElement::Repeat(repeat) => browse_repeat(repeat, visitor),
        VoiceElement::RestMeasures(rest_measures) => {
            browse_rest_measures(rest_measures, visitor)
        }
        VoiceElement::MeasuresRepeat(measures_repeat) => {
            browse_measures_repeat(measures_repeat, visitor)
        }
    }
}

pub fn browse_segment<V: ScoreVisitor>(
    segment: &Segment,
    visitor: &mut V,
) -> Result<(), V::Error> {
    visitor.visit_segment_start(segment)?;
    for measure in segment.measures() {
        browse_measure(measure, visitor)?;
    }
    visitor.visit_segment_end(segment)
}

pub fn browse_measure<V: ScoreVisitor>(
    measure: &Measure,
    visitor: &mut V,
) -> Result<(), V::Error> {
    visitor.visit_measure_start(measure)?;
    for content in measure.contents() {
        match content {
            MeasureContent::Note(note) => browse_note(note, visitor)?,
            MeasureContent::Chord(chord) => browse_chord(chord, visitor)?,
            MeasureContent::Tuplet(tuplet) => browse_tuplet(tuplet, visitor)?,
            MeasureContent::Harmony(harmony) => browse_harmony(harmony, visitor)?,
            MeasureContent::FiguredBass(figured_bass) => {
                browse_figured_bass(figured_bass, visitor)?
            }
            MeasureContent::Barline(barline) => visitor.visit_barline(barline)?,
            MeasureContent::BarCheck(bar_check) => visitor.visit_bar_check(bar_check)?,
            MeasureContent::BarNumberCheck(check) => {
                visitor.visit_bar_number_check(check)?
            }
            MeasureContent::KeySignature(key) => visitor.visit_key_signature(key)?,
            MeasureContent::TimeSignature(time) => visitor.visit_time_signature(time)?,
            MeasureContent::Tempo(tempo) => visitor.visit_tempo(tempo)?,
            MeasureContent::Rehearsal(rehearsal) => visitor.visit_rehearsal(rehearsal)?,
            MeasureContent::Segno(segno) => visitor.visit_segno(segno)?,
            MeasureContent::Coda(coda) => visitor.visit_coda(coda)?,
            MeasureContent::Scordatura(scordatura) => {
                visitor.visit_scordatura(scordatura)?
            }
            MeasureContent::LineBreak(line_break) => {
                visitor.visit_line_break(line_break)?
            }
            MeasureContent::PageBreak(page_break) => {
                visitor.visit_page_break(page_break)?
            }
        }
    }
    visitor.visit_measure_end(measure)
}

/// Attachments are browsed between the note's start and end callbacks,
/// in a fixed per-list order.
pub fn browse_note<V: ScoreVisitor>(
    note: &Note,
    visitor: &mut V,
) -> Result<(), V::Error> {
    visitor.visit_note_start(note)?;
    if let Some(stem) = note.stem() {
        visitor.visit_stem(stem)?;
    }
    for beam in note.beams() {
        visitor.visit_beam(beam)?;
    }
    for articulation in note.articulations() {
        visitor.visit_articulation(articulation)?;
    }
    for spanner in note.spanners() {
        visitor.visit_spanner(spanner)?;
    }
    for technical in note.technicals() {
        visitor.visit_technical(technical)?;
    }
    for technical in note.technicals_with_integer() {
        visitor.visit_technical_with_integer(technical)?;
    }
    for technical in note.technicals_with_string() {
        visitor.visit_technical_with_string(technical)?;
    }
    for ornament in note.ornaments() {
        visitor.visit_ornament(ornament)?;
    }
    for glissando in note.glissandos() {
        visitor.visit_glissando(glissando)?;
    }
    for slide in note.slides() {
        visitor.visit_slide(slide)?;
    }
    for dynamics in note.dynamics() {
        visitor.visit_dynamics(dynamics)?;
    }
    for other in note.other_dynamics() {
        visitor.visit_other_dynamics(other)?;
    }
    for words in note.words() {
        visitor.visit_words(words)?;
    }
    for slur in note.slurs() {
        visitor.visit_slur(slur)?;
    }
    for ligature in note.ligatures() {
        visitor.visit_ligature(ligature)?;
    }
    for pedal in note.pedals() {
        visitor.visit_pedal(pedal)?;
    }
    for slash in note.slashes() {
        visitor.visit_slash(slash)?;
    }
    for wedge in note.wedges() {
        visitor.visit_wedge(wedge)?;
    }
    for segno in note.segnos() {
        visitor.visit_segno(segno)?;
    }
    for dal_segno in note.dal_segnos() {
        visitor.visit_dal_segno(dal_segno)?;
    }
    for coda in note.codas() {
        visitor.visit_coda(coda)?;
    }
    for eyeglasses in note.eyeglasses() {
        visitor.visit_eyeglasses(eyeglasses)?;
    }
    for damp in note.damps() {
        visitor.visit_damp(damp)?;
    }
    for fermata in note.fermatas() {
        visitor.visit_fermata(fermata)?;
    }
    for syllable in note.syllables() {
        visitor.visit_syllable(syllable)?;
    }
    for harmony in note.harmonies() {
        browse_harmony(harmony, visitor)?;
    }
    for figured_bass in note.figured_basses() {
        browse_figured_bass(figured_bass, visitor)?;
    }
    if let Some(tie) = note.tie() {
        visitor.visit_tie(tie)?;
    }
    if let Some(group) = note.grace_group() {
        browse_grace_notes_group(group, visitor)?;
    }
    visitor.visit_note_end(note)
}

/// Member notes come first, then the chord's own attachments, so a
/// visitor that tracks "inside a note" state sees the attachments with
/// that state already cleared.
pub fn browse_chord<V: ScoreVisitor>(
    chord: &Chord,
    visitor: &mut V,
) -> Result<(), V::Error> {
    visitor.visit_chord_start(chord)?;
    for note in chord.notes() {
        browse_note(note, visitor)?;
    }
    for stem in chord.stems() {
        visitor.visit_stem(stem)?;
    }
    for articulation in chord.articulations() {
        visitor.visit_articulation(articulation)?;
    }
    for spanner in chord.spanners() {
        visitor.visit_spanner(spanner)?;
    }
    for technical in chord.technicals() {
        visitor.visit_technical(technical)?;
    }
    for technical in chord.technicals_with_integer() {
        visitor.visit_technical_with_integer(technical)?;
    }
    for technical in chord.technicals_with_string() {
        visitor.visit_technical_with_string(technical)?;
    }
    for ornament in chord.ornaments() {
        visitor.visit_ornament(ornament)?;
    }
    for glissando in chord.glissandos() {
        visitor.visit_glissando(glissando)?;
    }
    for slide in chord.slides() {
        visitor.visit_slide(slide)?;
    }
    for dynamics in chord.dynamics() {
        visitor.visit_dynamics(dynamics)?;
    }
    for other in chord.other_dynamics() {
        visitor.visit_other_dynamics(other)?;
    }
    for words in chord.words() {
        visitor.visit_words(words)?;
    }
    for link in chord.beam_links() {
        visitor.visit_chord_beam_link(link)?;
    }
    for link in chord.slur_links() {
        visitor.visit_chord_slur_link(link)?;
    }
    for link in chord.grace_group_links() {
        visitor.visit_chord_grace_group_link(link)?;
    }
    for segno in chord.segnos() {
        visitor.visit_segno(segno)?;
    }
    for dal_segno in chord.dal_segnos() {
        visitor.visit_dal_segno(dal_segno)?;
    }
    for coda in chord.codas() {
        visitor.visit_coda(coda)?;
    }
    for eyeglasses in chord.eyeglasses() {
        visitor.visit_eyeglasses(eyeglasses)?;
    }
    for damp in chord.damps() {
        visitor.visit_damp(damp)?;
    }
    for slash in chord.slashes() {
        visitor.visit_slash(slash)?;
    }
    for wedge in chord.wedges() {
        visitor.visit_wedge(wedge)?;
    }
    for fermata in chord.fermatas() {
        visitor.visit_fermata(fermata)?;
    }
    for harmony in chord.harmonies() {
        browse_harmony(harmony, visitor)?;
    }
    for figured_bass in chord.figured_basses() {
        browse_figured_bass(figured_bass, visitor)?;
    }
    visitor.visit_chord_end(chord)
}

pub fn browse_tuplet<V: ScoreVisitor>(
    tuplet: &Tuplet,
    visitor: &mut V,
) -> Result<(), V::Error> {
    visitor.visit_tuplet_start(tuplet)?;
    for member in tuplet.elements() {
        match member {
            TupletMember::Note(note) => browse_note(note, visitor)?,
            TupletMember::Chord(chord) => browse_chord(chord, visitor)?,
            TupletMember::Tuplet(nested) => browse_tuplet(nested, visitor)?,
        }
    }
    visitor.visit_tuplet_end(tuplet)
}

pub fn browse_grace_notes_group<V: ScoreVisitor>(
    group: &GraceNotesGroup,
    visitor: &mut V,
) -> Result<(), V::Error> {
    visitor.visit_grace_notes_group_start(group)?;
    for note in group.notes() {
        browse_note(note, visitor)?;
    }
    visitor.visit_grace_notes_group_end(group)
}

pub fn browse_harmony<V: ScoreVisitor>(
    harmony: &Harmony,
    visitor: &mut V,
) -> Result<(), V::Error> {
    visitor.visit_harmony_start(harmony)?;
    for degree in harmony.degrees() {
        visitor.visit_harmony_degree(degree)?;
    }
    if let Some(frame) = harmony.frame() {
        visitor.visit_frame(frame)?;
    }
    visitor.visit_harmony_end(harmony)
}

pub fn browse_figured_bass<V: ScoreVisitor>(
    figured_bass: &FiguredBass,
    visitor: &mut V,
) -> Result<(), V::Error> {
    visitor.visit_figured_bass_start(figured_bass)?;
    for figure in figured_bass.figures() {
        visitor.visit_figure(figure)?;
    }
    visitor.visit_figured_bass_end(figured_bass)
}

pub fn browse_repeat<V: ScoreVisitor>(
    repeat: &Repeat,
    visitor: &mut V,
) -> Result<(), V::Error> {
    visitor.visit_repeat_start(repeat)?;
    if let Some(common_part) = repeat.common_part() {
        visitor.visit_repeat_common_part_start(repeat)?;
        for segment in common_part.segments() {
            browse_segment(segment, visitor)?;
        }
        visitor.visit_repeat_common_part_end(repeat)?;
    }
    for ending in repeat.endings() {
        visitor.visit_repeat_ending_start(ending)?;
        for segment in ending.segments() {
            browse_segment(segment, visitor)?;
        }
        visitor.visit_repeat_ending_end(ending)?;
    }
    visitor.visit_repeat_end(repeat)
}

pub fn browse_rest_measures<V: ScoreVisitor>(
    rest_measures: &RestMeasures,
    visitor: &mut V,
) -> Result<(), V::Error> {
    visitor.visit_rest_measures_start(rest_measures)?;
    visitor.visit_rest_measures_contents_start(rest_measures)?;
    for measure in rest_measures.measures() {
        browse_measure(measure, visitor)?;
    }
    visitor.visit_rest_measures_contents_end(rest_measures)?;
    visitor.visit_rest_measures_end(rest_measures)
}

pub fn browse_measures_repeat<V: ScoreVisitor>(
    measures_repeat: &MeasuresRepeat,
    visitor: &mut V,
) -> Result<(), V::Error> {
    visitor.visit_measures_repeat_start(measures_repeat)?;
    if let Some(pattern) = measures_repeat.pattern() {
        visitor.visit_measures_repeat_pattern_start(measures_repeat)?;
        for segment in pattern.segments() {
            browse_segment(segment, visitor)?;
        }
        visitor.visit_measures_repeat_pattern_end(measures_repeat)?;
    }
    if let Some(replicas) = measures_repeat.replicas() {
        visitor.visit_measures_repeat_replicas_start(measures_repeat)?;
        for segment in replicas.segments() {
            browse_segment(segment, visitor)?;
        }
        visitor.visit_measures_repeat_replicas_end(measures_repeat)?;
    }
    visitor.visit_measures_repeat_end(measures_repeat)
}
