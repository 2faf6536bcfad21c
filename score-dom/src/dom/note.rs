//! The atomic musical event, and everything that can hang off it.
//!
//! A note's `kind` decides which duration slots are meaningful: grace
//! kinds only use display whole notes, tuplet members derive sounding
//! from display through the tuplet factor, rests and skips have no pitch
//! unless they are "pitched rests" carrying a display octave.
//!
//! `Clone` is the deep copy: every attachment list is duplicated
//! element by element (stems and ties stay shared behind `Rc`).
//! [Note::newborn_clone] is the shallow one: scalars copied, attachment
//! lists left empty for a rebuild pass to refill.

use std::fmt;
use std::rc::Rc;

use log::{debug, warn};

use crate::notation::{
    Articulation, Beam, Coda, DalSegno, Damp, Dynamics, Eyeglasses,
    Fermata, Glissando, Ligature, LigatureKind, NoteHeadKind,
    OtherDynamics, Pedal, PedalKind, Slash, Slide, Slur, Spanner, Stem,
    Syllable, Technical, TechnicalWithInteger, TechnicalWithString, Tie,
    Wedge, Words, Ornament, Segno,
};
use crate::primitives::{
    MeasurePlacement, MeasurePositioned, Octave, QuarterTonesPitch,
    TupletFactor, WholeNotes,
};
use crate::settings::ScoreSettings;

use super::grace_notes::GraceNotesGroup;
use super::harmony::{FiguredBass, Harmony};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NoteKind {
    Regular,
    Rest,
    Skip,
    Unpitched,
    ChordMember,
    TupletMember,
    TupletRestMember,
    TupletUnpitchedMember,
    Grace,
    GraceSkip,
    GraceChordMember,
    GraceTupletMember,
    DoubleTremoloMember,
}
impl NoteKind {
    pub fn is_grace(&self) -> bool {
        matches!(
            self,
            Self::Grace | Self::GraceSkip | Self::GraceChordMember | Self::GraceTupletMember
        )
    }
    pub fn is_rest_or_skip(&self) -> bool {
        matches!(
            self,
            Self::Rest | Self::Skip | Self::TupletRestMember | Self::GraceSkip
        )
    }
}

/// Everything the generic note constructor needs. Convenience factories
/// fill the fields that do not apply to their kind with the obvious
/// defaults.
#[derive(Debug, Clone)]
pub struct NoteValues {
    pub line: u32,
    pub kind: NoteKind,
    pub pitch: Option<QuarterTonesPitch>,
    pub octave: Option<Octave>,
    pub display_pitch: Option<QuarterTonesPitch>,
    pub display_octave: Option<Octave>,
    pub sounding_whole_notes: WholeNotes,
    pub display_whole_notes: WholeNotes,
    pub dots_count: u8,
    pub tuplet_factor: TupletFactor,
    pub head: NoteHeadKind,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Note {
    pub line: u32,
    kind: NoteKind,
    placement: MeasurePlacement,
    pitch: Option<QuarterTonesPitch>,
    octave: Option<Octave>,
    display_pitch: Option<QuarterTonesPitch>,
    display_octave: Option<Octave>,
    display_whole_notes: WholeNotes,
    dots_count: u8,
    tuplet_factor: TupletFactor,
    head: NoteHeadKind,
    stem: Option<Rc<Stem>>,
    tie: Option<Rc<Tie>>,
    grace_group: Option<Box<GraceNotesGroup>>,
    belongs_to_a_chord: bool,
    is_chord_first_member: bool,
    belongs_to_a_tuplet: bool,
    position_in_tuplet: Option<usize>,
    beams: Vec<Beam>,
    articulations: Vec<Articulation>,
    spanners: Vec<Spanner>,
    technicals: Vec<Technical>,
    technicals_with_integer: Vec<TechnicalWithInteger>,
    technicals_with_string: Vec<TechnicalWithString>,
    ornaments: Vec<Ornament>,
    glissandos: Vec<Glissando>,
    slides: Vec<Slide>,
    dynamics: Vec<Dynamics>,
    other_dynamics: Vec<OtherDynamics>,
    words: Vec<Words>,
    slurs: Vec<Slur>,
    ligatures: Vec<Ligature>,
    pedals: Vec<Pedal>,
    slashes: Vec<Slash>,
    wedges: Vec<Wedge>,
    segnos: Vec<Segno>,
    dal_segnos: Vec<DalSegno>,
    codas: Vec<Coda>,
    eyeglasses: Vec<Eyeglasses>,
    damps: Vec<Damp>,
    fermatas: Vec<Fermata>,
    syllables: Vec<Syllable>,
    harmonies: Vec<Harmony>,
    figured_basses: Vec<FiguredBass>,
}

impl Note {
    fn with_values(values: NoteValues) -> Self {
        let mut placement = MeasurePlacement::new();
        if !values.sounding_whole_notes.is_unknown() {
            placement
                .set_sounding_whole_notes(values.sounding_whole_notes, "note construction");
        }
        Self {
            line: values.line,
            kind: values.kind,
            placement,
            pitch: values.pitch,
            octave: values.octave,
            display_pitch: values.display_pitch,
            display_octave: values.display_octave,
            display_whole_notes: values.display_whole_notes,
            dots_count: values.dots_count,
            tuplet_factor: values.tuplet_factor,
            head: values.head,
            stem: None,
            tie: None,
            grace_group: None,
            belongs_to_a_chord: false,
            is_chord_first_member: false,
            belongs_to_a_tuplet: false,
            position_in_tuplet: None,
            beams: Vec::new(),
            articulations: Vec::new(),
            spanners: Vec::new(),
            technicals: Vec::new(),
            technicals_with_integer: Vec::new(),
            technicals_with_string: Vec::new(),
            ornaments: Vec::new(),
            glissandos: Vec::new(),
            slides: Vec::new(),
            dynamics: Vec::new(),
            other_dynamics: Vec::new(),
            words: Vec::new(),
            slurs: Vec::new(),
            ligatures: Vec::new(),
            pedals: Vec::new(),
            slashes: Vec::new(),
            wedges: Vec::new(),
            segnos: Vec::new(),
            dal_segnos: Vec::new(),
            codas: Vec::new(),
            eyeglasses: Vec::new(),
            damps: Vec::new(),
            fermatas: Vec::new(),
            syllables: Vec::new(),
            harmonies: Vec::new(),
            figured_basses: Vec::new(),
        }
    }

    /// The generic constructor: builds the note, then runs the
    /// post-construction normalization.
    pub fn new(values: NoteValues, settings: &ScoreSettings) -> Self {
        let mut note = Self::with_values(values);
        note.initialize(settings);
        note
    }

    /// A plain unpitched rest.
    pub fn rest(
        line: u32,
        sounding_whole_notes: WholeNotes,
        display_whole_notes: WholeNotes,
        dots_count: u8,
    ) -> Self {
        Self::with_values(NoteValues {
            line,
            kind: NoteKind::Rest,
            pitch: None,
            octave: None,
            display_pitch: None,
            display_octave: None,
            sounding_whole_notes,
            display_whole_notes,
            dots_count,
            tuplet_factor: TupletFactor::default(),
            head: NoteHeadKind::default(),
        })
    }

    /// An invisible filler taking up time without printing anything.
    pub fn skip(line: u32, sounding_whole_notes: WholeNotes) -> Self {
        Self::with_values(NoteValues {
            line,
            kind: NoteKind::Skip,
            pitch: None,
            octave: None,
            display_pitch: None,
            display_octave: None,
            sounding_whole_notes: sounding_whole_notes.clone(),
            display_whole_notes: sounding_whole_notes,
            dots_count: 0,
            tuplet_factor: TupletFactor::default(),
            head: NoteHeadKind::default(),
        })
    }

    /// A skip inside a grace-notes group: no sounding time at all.
    pub fn grace_skip(line: u32, display_whole_notes: WholeNotes) -> Self {
        Self::with_values(NoteValues {
            line,
            kind: NoteKind::GraceSkip,
            pitch: None,
            octave: None,
            display_pitch: None,
            display_octave: None,
            sounding_whole_notes: WholeNotes::zero(),
            display_whole_notes,
            dots_count: 0,
            tuplet_factor: TupletFactor::default(),
            head: NoteHeadKind::default(),
        })
    }

    /// A regular pitched note.
    pub fn from_pitch_and_octave(
        line: u32,
        pitch: QuarterTonesPitch,
        octave: Octave,
        sounding_whole_notes: WholeNotes,
        display_whole_notes: WholeNotes,
        dots_count: u8,
    ) -> Self {
        Self::with_values(NoteValues {
            line,
            kind: NoteKind::Regular,
            pitch: Some(pitch),
            octave: Some(octave),
            display_pitch: None,
            display_octave: None,
            sounding_whole_notes,
            display_whole_notes,
            dots_count,
            tuplet_factor: TupletFactor::default(),
            head: NoteHeadKind::default(),
        })
    }

    /// Post-construction normalization. A rest with a known display
    /// octave is a "pitched rest": its display pitch and octave move
    /// into the sounding slots so downstream relative-octave code can
    /// see them.
    fn initialize(&mut self, settings: &ScoreSettings) {
        if settings.pitched_rests_carry_pitch
            && self.kind == NoteKind::Rest
            && self.display_octave.is_some()
        {
            debug!(
                "pitched rest at line {}: keeping display pitch in sounding slots",
                self.line
            );
            self.pitch = self.display_pitch;
            self.octave = self.display_octave;
        }
    }

    pub fn kind(&self) -> NoteKind {
        self.kind
    }
    pub fn pitch(&self) -> Option<&QuarterTonesPitch> {
        self.pitch.as_ref()
    }
    pub fn octave(&self) -> Option<Octave> {
        self.octave
    }
    pub fn display_pitch(&self) -> Option<&QuarterTonesPitch> {
        self.display_pitch.as_ref()
    }
    pub fn display_octave(&self) -> Option<Octave> {
        self.display_octave
    }
    pub fn sounding_whole_notes(&self) -> &WholeNotes {
        self.placement.sounding_whole_notes()
    }
    pub fn display_whole_notes(&self) -> &WholeNotes {
        &self.display_whole_notes
    }
    pub fn dots_count(&self) -> u8 {
        self.dots_count
    }
    pub fn tuplet_factor(&self) -> &TupletFactor {
        &self.tuplet_factor
    }
    pub fn set_tuplet_factor(&mut self, factor: TupletFactor) {
        self.tuplet_factor = factor;
    }
    pub fn head(&self) -> NoteHeadKind {
        self.head
    }
    pub fn set_head(&mut self, head: NoteHeadKind) {
        self.head = head;
    }

    pub fn stem(&self) -> Option<&Rc<Stem>> {
        self.stem.as_ref()
    }
    pub fn set_stem(&mut self, stem: Rc<Stem>) {
        self.stem = Some(stem);
    }
    pub fn tie(&self) -> Option<&Rc<Tie>> {
        self.tie.as_ref()
    }
    pub fn set_tie(&mut self, tie: Rc<Tie>) {
        self.tie = Some(tie);
    }
    pub fn grace_group(&self) -> Option<&GraceNotesGroup> {
        self.grace_group.as_deref()
    }
    pub fn set_grace_group(&mut self, group: GraceNotesGroup) {
        self.grace_group = Some(Box::new(group));
    }

    pub fn belongs_to_a_chord(&self) -> bool {
        self.belongs_to_a_chord
    }
    pub fn set_belongs_to_a_chord(&mut self) {
        self.belongs_to_a_chord = true;
    }
    pub fn is_chord_first_member(&self) -> bool {
        self.is_chord_first_member
    }
    pub fn set_is_chord_first_member(&mut self) {
        self.is_chord_first_member = true;
    }
    pub fn belongs_to_a_tuplet(&self) -> bool {
        self.belongs_to_a_tuplet
    }
    pub fn set_belongs_to_a_tuplet(&mut self) {
        self.belongs_to_a_tuplet = true;
    }
    pub fn position_in_tuplet(&self) -> Option<usize> {
        self.position_in_tuplet
    }
    pub fn set_position_in_tuplet(&mut self, position: usize) {
        self.position_in_tuplet = Some(position);
    }

    /// Set this note's position and propagate it to every attached
    /// harmony, figured bass and dal segno, which keep their own copies.
    /// Offsets, if any, must have been applied by the caller already.
    pub fn set_position_in_measure(&mut self, value: WholeNotes, context: &str) {
        self.placement
            .set_position_in_measure(value.clone(), context);
        for harmony in self.harmonies.iter_mut() {
            harmony.set_position_in_measure(value.clone(), context);
        }
        for figured_bass in self.figured_basses.iter_mut() {
            figured_bass.set_position_in_measure(value.clone(), context);
        }
        for dal_segno in self.dal_segnos.iter_mut() {
            dal_segno.set_position_in_measure(value.clone());
        }
    }

    pub fn set_measure_number(&mut self, number: impl Into<String>) {
        self.placement.set_measure_number(number);
    }
    pub fn set_sounding_whole_notes(&mut self, value: WholeNotes, context: &str) {
        self.placement.set_sounding_whole_notes(value, context);
    }

    /// The single place sounding duration is inferred from display
    /// duration: sounding = display × normal / actual, re-reduced.
    /// Sources encode tuplet members by their notated type only.
    pub fn determine_tuplet_member_sounding_whole_notes(
        &mut self,
        factor: &TupletFactor,
    ) {
        let sounding =
            (self.display_whole_notes.clone() * factor.diminution()).rationalised();
        self.placement
            .set_sounding_whole_notes(sounding, "tuplet member sounding");
    }

    pub fn append_beam(&mut self, beam: Beam) {
        self.beams.push(beam);
    }
    pub fn append_articulation(&mut self, articulation: Articulation) {
        if self
            .articulations
            .iter()
            .any(|present| present.kind == articulation.kind)
        {
            debug!(
                "dropping duplicate articulation {} at line {}",
                articulation.kind.to_string(),
                articulation.line
            );
            return;
        }
        self.articulations.push(articulation);
    }
    pub fn append_spanner(&mut self, spanner: Spanner) {
        self.spanners.push(spanner);
    }
    pub fn append_technical(&mut self, technical: Technical) {
        if self
            .technicals
            .iter()
            .any(|present| present.kind == technical.kind)
        {
            debug!(
                "dropping duplicate technical {:?} at line {}",
                technical.kind, technical.line
            );
            return;
        }
        self.technicals.push(technical);
    }
    pub fn append_technical_with_integer(&mut self, technical: TechnicalWithInteger) {
        if self
            .technicals_with_integer
            .iter()
            .any(|present| present.kind == technical.kind)
        {
            debug!(
                "dropping duplicate technical {:?} at line {}",
                technical.kind, technical.line
            );
            return;
        }
        self.technicals_with_integer.push(technical);
    }
    pub fn append_technical_with_string(&mut self, technical: TechnicalWithString) {
        if self
            .technicals_with_string
            .iter()
            .any(|present| present.kind == technical.kind)
        {
            debug!(
                "dropping duplicate technical {:?} at line {}",
                technical.kind, technical.line
            );
            return;
        }
        self.technicals_with_string.push(technical);
    }
    pub fn append_ornament(&mut self, ornament: Ornament) {
        if self
            .ornaments
            .iter()
            .any(|present| present.kind == ornament.kind)
        {
            debug!(
                "dropping duplicate ornament {:?} at line {}",
                ornament.kind, ornament.line
            );
            return;
        }
        self.ornaments.push(ornament);
    }
    pub fn append_glissando(&mut self, glissando: Glissando) {
        if self
            .glissandos
            .iter()
            .any(|present| present.kind == glissando.kind)
        {
            debug!(
                "dropping duplicate glissando {:?} at line {}",
                glissando.kind, glissando.line
            );
            return;
        }
        self.glissandos.push(glissando);
    }
    pub fn append_slide(&mut self, slide: Slide) {
        if self.slides.iter().any(|present| present.kind == slide.kind) {
            debug!(
                "dropping duplicate slide {:?} at line {}",
                slide.kind, slide.line
            );
            return;
        }
        self.slides.push(slide);
    }
    pub fn append_dynamics(&mut self, dynamics: Dynamics) {
        self.dynamics.push(dynamics);
    }
    pub fn append_other_dynamics(&mut self, other: OtherDynamics) {
        self.other_dynamics.push(other);
    }
    pub fn append_words(&mut self, words: Words) {
        self.words.push(words);
    }
    pub fn append_slur(&mut self, slur: Slur) {
        self.slurs.push(slur);
    }

    /// A ligature that starts and stops on the very same note is a no-op
    /// signal, not a one-note notation: the adjacent pair is dropped.
    pub fn append_ligature(&mut self, ligature: Ligature) {
        let collapses = matches!(
            self.ligatures.last(),
            Some(last) if last.kind == LigatureKind::Start
                && ligature.kind == LigatureKind::Stop
                && last.number == ligature.number
        );
        if collapses {
            warn!(
                "ligature number {} starts and stops on the note at line {}, \
                 dropping both",
                ligature.number, ligature.line
            );
            self.ligatures.pop();
        } else {
            self.ligatures.push(ligature);
        }
    }

    /// Same collapse rule as for ligatures.
    pub fn append_pedal(&mut self, pedal: Pedal) {
        let collapses = matches!(
            self.pedals.last(),
            Some(last) if last.kind == PedalKind::Start && pedal.kind == PedalKind::Stop
        );
        if collapses {
            warn!(
                "pedal starts and stops on the note at line {}, dropping both",
                pedal.line
            );
            self.pedals.pop();
        } else {
            self.pedals.push(pedal);
        }
    }

    pub fn append_slash(&mut self, slash: Slash) {
        self.slashes.push(slash);
    }
    pub fn append_wedge(&mut self, wedge: Wedge) {
        self.wedges.push(wedge);
    }
    pub fn append_segno(&mut self, segno: Segno) {
        self.segnos.push(segno);
    }
    pub fn append_dal_segno(&mut self, dal_segno: DalSegno) {
        self.dal_segnos.push(dal_segno);
    }
    pub fn append_coda(&mut self, coda: Coda) {
        self.codas.push(coda);
    }
    pub fn append_eyeglasses(&mut self, eyeglasses: Eyeglasses) {
        self.eyeglasses.push(eyeglasses);
    }
    pub fn append_damp(&mut self, damp: Damp) {
        self.damps.push(damp);
    }
    pub fn append_fermata(&mut self, fermata: Fermata) {
        self.fermatas.push(fermata);
    }
    pub fn append_syllable(&mut self, syllable: Syllable) {
        self.syllables.push(syllable);
    }
    pub fn append_harmony(&mut self, harmony: Harmony) {
        self.harmonies.push(harmony);
    }
    pub fn append_figured_bass(&mut self, figured_bass: FiguredBass) {
        self.figured_basses.push(figured_bass);
    }

    pub fn beams(&self) -> &[Beam] {
        &self.beams
    }
    pub fn articulations(&self) -> &[Articulation] {
        &self.articulations
    }
    pub fn spanners(&self) -> &[Spanner] {
        &self.spanners
    }
    pub fn technicals(&self) -> &[Technical] {
        &self.technicals
    }
    pub fn technicals_with_integer(&self) -> &[TechnicalWithInteger] {
        &self.technicals_with_integer
    }
    pub fn technicals_with_string(&self) -> &[TechnicalWithString] {
        &self.technicals_with_string
    }
    pub fn ornaments(&self) -> &[Ornament] {
        &self.ornaments
    }
    pub fn glissandos(&self) -> &[Glissando] {
        &self.glissandos
    }
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }
    pub fn dynamics(&self) -> &[Dynamics] {
        &self.dynamics
    }
    pub fn other_dynamics(&self) -> &[OtherDynamics] {
        &self.other_dynamics
    }
    pub fn words(&self) -> &[Words] {
        &self.words
    }
    pub fn slurs(&self) -> &[Slur] {
        &self.slurs
    }
    pub fn ligatures(&self) -> &[Ligature] {
        &self.ligatures
    }
    pub fn pedals(&self) -> &[Pedal] {
        &self.pedals
    }
    pub fn slashes(&self) -> &[Slash] {
        &self.slashes
    }
    pub fn wedges(&self) -> &[Wedge] {
        &self.wedges
    }
    pub fn segnos(&self) -> &[Segno] {
        &self.segnos
    }
    pub fn dal_segnos(&self) -> &[DalSegno] {
        &self.dal_segnos
    }
    pub fn codas(&self) -> &[Coda] {
        &self.codas
    }
    pub fn eyeglasses(&self) -> &[Eyeglasses] {
        &self.eyeglasses
    }
    pub fn damps(&self) -> &[Damp] {
        &self.damps
    }
    pub fn fermatas(&self) -> &[Fermata] {
        &self.fermatas
    }
    pub fn syllables(&self) -> &[Syllable] {
        &self.syllables
    }
    pub fn harmonies(&self) -> &[Harmony] {
        &self.harmonies
    }
    pub fn figured_basses(&self) -> &[FiguredBass] {
        &self.figured_basses
    }

    /// Shallow clone: all scalar fields copied, stem and tie shared,
    /// every attachment list left empty. The rebuild pass refills the
    /// lists one visited notation at a time.
    pub fn newborn_clone(&self) -> Self {
        let mut clone = Self::with_values(NoteValues {
            line: self.line,
            kind: self.kind,
            pitch: self.pitch,
            octave: self.octave,
            display_pitch: self.display_pitch,
            display_octave: self.display_octave,
            sounding_whole_notes: WholeNotes::unknown(),
            display_whole_notes: self.display_whole_notes.clone(),
            dots_count: self.dots_count,
            tuplet_factor: self.tuplet_factor.clone(),
            head: self.head,
        });
        clone.placement = self.placement.clone();
        clone.stem = self.stem.clone();
        clone.tie = self.tie.clone();
        clone.belongs_to_a_chord = self.belongs_to_a_chord;
        clone.is_chord_first_member = self.is_chord_first_member;
        clone.belongs_to_a_tuplet = self.belongs_to_a_tuplet;
        clone.position_in_tuplet = self.position_in_tuplet;
        clone
    }
}

impl MeasurePositioned for Note {
    fn placement(&self) -> &MeasurePlacement {
        &self.placement
    }
    fn placement_mut(&mut self) -> &mut MeasurePlacement {
        &mut self.placement
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.pitch, self.octave) {
            (Some(pitch), Some(octave)) => write!(
                f,
                "{:?} {}{} sounding {}, display {}, line {}",
                self.kind,
                pitch,
                octave,
                self.placement.sounding_whole_notes(),
                self.display_whole_notes,
                self.line
            ),
            _ => write!(
                f,
                "{:?} sounding {}, display {}, line {}",
                self.kind,
                self.placement.sounding_whole_notes(),
                self.display_whole_notes,
                self.line
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::notation::{
        Articulation, ArticulationKind, Ligature, LigatureKind, Pedal,
        PedalKind, PlacementKind, Stem, StemKind,
    };
    use crate::primitives::{
        Alteration, DiatonicStep, Octave, QuarterTonesPitch, TupletFactor,
        WholeNotes,
    };
    use crate::settings::ScoreSettings;

    use super::{Note, NoteKind, NoteValues};

    fn quarter_c(line: u32) -> Note {
        Note::from_pitch_and_octave(
            line,
            QuarterTonesPitch::new(DiatonicStep::C, Alteration::Natural),
            Octave(4),
            WholeNotes::new(1, 4),
            WholeNotes::new(1, 4),
            0,
        )
    }

    #[test]
    fn idempotent_articulations() {
        let mut note = quarter_c(1);
        note.append_articulation(Articulation::new(
            1,
            ArticulationKind::Staccato,
            PlacementKind::Above,
        ));
        note.append_articulation(Articulation::new(
            2,
            ArticulationKind::Staccato,
            PlacementKind::Below,
        ));
        assert_eq!(note.articulations().len(), 1);
        assert_eq!(note.articulations()[0].line, 1);
        note.append_articulation(Articulation::new(
            3,
            ArticulationKind::Accent,
            PlacementKind::Above,
        ));
        assert_eq!(note.articulations().len(), 2);
    }

    #[test]
    fn ligature_start_stop_collapse() {
        let mut note = quarter_c(1);
        note.append_ligature(Ligature::new(
            1,
            1,
            LigatureKind::Start,
            PlacementKind::Above,
        ));
        note.append_ligature(Ligature::new(
            1,
            1,
            LigatureKind::Stop,
            PlacementKind::Above,
        ));
        assert!(note.ligatures().is_empty());
        // different numbers do not collapse
        note.append_ligature(Ligature::new(
            2,
            1,
            LigatureKind::Start,
            PlacementKind::Above,
        ));
        note.append_ligature(Ligature::new(
            2,
            2,
            LigatureKind::Stop,
            PlacementKind::Above,
        ));
        assert_eq!(note.ligatures().len(), 2);
    }

    #[test]
    fn pedal_start_stop_collapse() {
        let mut note = quarter_c(1);
        note.append_pedal(Pedal::new(1, PedalKind::Start, true));
        note.append_pedal(Pedal::new(1, PedalKind::Stop, true));
        assert!(note.pedals().is_empty());
    }

    #[test]
    fn tuplet_member_sounding_from_display() {
        let mut note = quarter_c(1);
        note.determine_tuplet_member_sounding_whole_notes(&TupletFactor::new(3, 2));
        assert_eq!(note.sounding_whole_notes(), &WholeNotes::new(1, 6));
    }

    #[test]
    fn pitched_rest_copies_display_pitch() {
        let settings = ScoreSettings::default();
        let rest = Note::new(
            NoteValues {
                line: 5,
                kind: NoteKind::Rest,
                pitch: None,
                octave: None,
                display_pitch: Some(QuarterTonesPitch::new(
                    DiatonicStep::D,
                    Alteration::Natural,
                )),
                display_octave: Some(Octave(3)),
                sounding_whole_notes: WholeNotes::new(1, 1),
                display_whole_notes: WholeNotes::new(1, 1),
                dots_count: 0,
                tuplet_factor: TupletFactor::default(),
                head: Default::default(),
            },
            &settings,
        );
        assert_eq!(rest.octave(), Some(Octave(3)));
        assert_eq!(
            rest.pitch(),
            Some(&QuarterTonesPitch::new(DiatonicStep::D, Alteration::Natural))
        );
    }

    #[test]
    fn newborn_clone_shares_stem_but_not_lists() {
        let mut note = quarter_c(1);
        note.set_stem(Rc::new(Stem::new(1, StemKind::Up)));
        note.append_articulation(Articulation::new(
            1,
            ArticulationKind::Accent,
            PlacementKind::Above,
        ));
        let mut clone = note.newborn_clone();
        assert_eq!(clone.kind(), note.kind());
        assert_eq!(clone.sounding_whole_notes(), note.sounding_whole_notes());
        assert!(Rc::ptr_eq(note.stem().unwrap(), clone.stem().unwrap()));
        assert!(clone.articulations().is_empty());
        clone.append_articulation(Articulation::new(
            2,
            ArticulationKind::Tenuto,
            PlacementKind::Above,
        ));
        assert_eq!(note.articulations().len(), 1);
        assert_eq!(note.articulations()[0].kind, ArticulationKind::Accent);
    }

    #[test]
    fn deep_copy_duplicates_lists() {
        let mut note = quarter_c(1);
        note.append_articulation(Articulation::new(
            1,
            ArticulationKind::Accent,
            PlacementKind::Above,
        ));
        let mut copy = note.clone();
        copy.append_articulation(Articulation::new(
            2,
            ArticulationKind::Tenuto,
            PlacementKind::Above,
        ));
        assert_eq!(note.articulations().len(), 1);
        assert_eq!(copy.articulations().len(), 2);
    }
}
