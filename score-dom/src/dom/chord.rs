//! An ordered set of simultaneous notes sharing one duration and one
//! position.
//!
//! A beam, slur or grace-notes group that belongs to the chord as a
//! whole is not cloned per member: the chord wraps the one shared object
//! in a link, so every rendering of the chord sees the same underlying
//! notation.

use std::fmt;
use std::rc::Rc;

use log::{debug, warn};

use crate::notation::{
    Articulation, Beam, Coda, DalSegno, Damp, Dynamics, Eyeglasses,
    Fermata, Glissando, Ornament, OtherDynamics, Segno, Slash, Slide, Slur,
    Spanner, Stem, Technical, TechnicalWithInteger, TechnicalWithString,
    Wedge, Words,
};
use crate::primitives::{
    MeasurePlacement, MeasurePositioned, WholeNotes,
};

use super::grace_notes::GraceNotesGroup;
use super::harmony::{FiguredBass, Harmony};
use super::note::Note;
use super::voice::Voice;

/// Wraps a beam shared by the whole chord without duplicating it.
#[derive(Debug, PartialEq, Clone)]
pub struct ChordBeamLink {
    pub line: u32,
    beam: Rc<Beam>,
}
impl ChordBeamLink {
    pub fn new(line: u32, beam: Rc<Beam>) -> Self {
        Self { line, beam }
    }
    pub fn beam(&self) -> &Rc<Beam> {
        &self.beam
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct ChordSlurLink {
    pub line: u32,
    slur: Rc<Slur>,
}
impl ChordSlurLink {
    pub fn new(line: u32, slur: Rc<Slur>) -> Self {
        Self { line, slur }
    }
    pub fn slur(&self) -> &Rc<Slur> {
        &self.slur
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct ChordGraceNotesGroupLink {
    pub line: u32,
    group: Rc<GraceNotesGroup>,
}
impl ChordGraceNotesGroupLink {
    pub fn new(line: u32, group: Rc<GraceNotesGroup>) -> Self {
        Self { line, group }
    }
    pub fn group(&self) -> &Rc<GraceNotesGroup> {
        &self.group
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Chord {
    pub line: u32,
    placement: MeasurePlacement,
    display_whole_notes: WholeNotes,
    notes: Vec<Note>,
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
    stems: Vec<Stem>,
    beam_links: Vec<ChordBeamLink>,
    slur_links: Vec<ChordSlurLink>,
    grace_group_links: Vec<ChordGraceNotesGroupLink>,
    segnos: Vec<Segno>,
    dal_segnos: Vec<DalSegno>,
    codas: Vec<Coda>,
    eyeglasses: Vec<Eyeglasses>,
    damps: Vec<Damp>,
    slashes: Vec<Slash>,
    wedges: Vec<Wedge>,
    fermatas: Vec<Fermata>,
    harmonies: Vec<Harmony>,
    figured_basses: Vec<FiguredBass>,
}

impl Chord {
    pub fn new(line: u32) -> Self {
        Self {
            line,
            placement: MeasurePlacement::new(),
            display_whole_notes: WholeNotes::unknown(),
            notes: Vec::new(),
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
            stems: Vec::new(),
            beam_links: Vec::new(),
            slur_links: Vec::new(),
            grace_group_links: Vec::new(),
            segnos: Vec::new(),
            dal_segnos: Vec::new(),
            codas: Vec::new(),
            eyeglasses: Vec::new(),
            damps: Vec::new(),
            slashes: Vec::new(),
            wedges: Vec::new(),
            fermatas: Vec::new(),
            harmonies: Vec::new(),
            figured_basses: Vec::new(),
        }
    }

    /// Scalars and placement copied, member notes and attachment lists
    /// left empty for the rebuild to refill.
    pub fn newborn_clone(&self) -> Self {
        let mut clone = Self::new(self.line);
        clone.placement = self.placement.clone();
        clone.display_whole_notes = self.display_whole_notes.clone();
        clone
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }
    pub fn first_note(&self) -> Option<&Note> {
        self.notes.first()
    }
    pub fn display_whole_notes(&self) -> &WholeNotes {
        &self.display_whole_notes
    }
    pub fn sounding_whole_notes(&self) -> &WholeNotes {
        self.placement.sounding_whole_notes()
    }

    /// The first member note defines the chord's duration; it is marked
    /// as the chord's first member and the voice's shortest-note tracker
    /// gets a chance to see it.
    pub fn add_first_note(&mut self, mut note: Note, voice: &mut Voice) {
        note.set_belongs_to_a_chord();
        note.set_is_chord_first_member();
        voice.register_shortest_note_if_relevant(&note);
        if self.placement.sounding_whole_notes().is_unknown() {
            self.placement.set_sounding_whole_notes(
                note.sounding_whole_notes().clone(),
                "chord first note",
            );
        }
        if self.display_whole_notes.is_unknown() {
            self.display_whole_notes = note.display_whole_notes().clone();
        }
        self.notes.push(note);
    }

    pub fn add_another_note(&mut self, mut note: Note, voice: &mut Voice) {
        note.set_belongs_to_a_chord();
        voice.register_shortest_note_if_relevant(&note);
        self.notes.push(note);
    }

    /// Route a member note to [Chord::add_first_note] or
    /// [Chord::add_another_note] depending on whether one is already
    /// present.
    pub fn add_note(&mut self, note: Note, voice: &mut Voice) {
        match self.notes.is_empty() {
            true => self.add_first_note(note, voice),
            false => self.add_another_note(note, voice),
        }
    }

    /// Chord members are simultaneous: every one gets the chord's own
    /// position and measure number. Attached dal segnos keep their own
    /// copies and get the position too.
    pub fn set_members_position_in_measure(
        &mut self,
        measure_number: &str,
        position: WholeNotes,
    ) {
        self.placement.set_measure_number(measure_number);
        self.placement
            .set_position_in_measure(position.clone(), "chord members position");
        for note in self.notes.iter_mut() {
            note.set_measure_number(measure_number);
            note.set_position_in_measure(position.clone(), "chord member note");
        }
        for dal_segno in self.dal_segnos.iter_mut() {
            dal_segno.set_position_in_measure(position.clone());
        }
    }

    /// The single call site of member-position propagation, once the
    /// chord's own position is known.
    pub fn finalize(&mut self, line: u32) {
        let position = self.placement.position_in_measure().clone();
        assert!(
            !position.is_unknown(),
            "finalizing a chord at line {} whose position is still unknown",
            line
        );
        let measure_number = self.placement.measure_number().to_string();
        self.set_members_position_in_measure(&measure_number, position);
    }

    pub fn append_articulation(&mut self, articulation: Articulation) {
        if self
            .articulations
            .iter()
            .any(|present| present.kind == articulation.kind)
        {
            debug!(
                "dropping duplicate chord articulation {} at line {}",
                articulation.kind.to_string(),
                articulation.line
            );
            return;
        }
        self.articulations.push(articulation);
    }
    pub fn append_spanner(&mut self, spanner: Spanner) {
        if self
            .spanners
            .iter()
            .any(|present| present.kind == spanner.kind)
        {
            debug!(
                "dropping duplicate chord spanner {:?} at line {}",
                spanner.kind, spanner.line
            );
            return;
        }
        self.spanners.push(spanner);
    }
    pub fn append_technical(&mut self, technical: Technical) {
        if self
            .technicals
            .iter()
            .any(|present| present.kind == technical.kind)
        {
            debug!(
                "dropping duplicate chord technical {:?} at line {}",
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
                "dropping duplicate chord technical {:?} at line {}",
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
                "dropping duplicate chord technical {:?} at line {}",
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
                "dropping duplicate chord ornament {:?} at line {}",
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
                "dropping duplicate chord glissando {:?} at line {}",
                glissando.kind, glissando.line
            );
            return;
        }
        self.glissandos.push(glissando);
    }
    pub fn append_slide(&mut self, slide: Slide) {
        if self.slides.iter().any(|present| present.kind == slide.kind) {
            debug!(
                "dropping duplicate chord slide {:?} at line {}",
                slide.kind, slide.line
            );
            return;
        }
        self.slides.push(slide);
    }

    /// A chord's notes are rendered with one shared stem direction. A
    /// mismatching direction is musically tolerable, so it is warned
    /// about and appended anyway.
    pub fn append_stem(&mut self, stem: Stem) {
        if let Some(present) = self.stems.iter().find(|s| s.kind != stem.kind) {
            warn!(
                "chord at line {} already has a {:?} stem, appending {:?} anyway",
                self.line, present.kind, stem.kind
            );
        }
        self.stems.push(stem);
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
    pub fn append_beam_link(&mut self, link: ChordBeamLink) {
        self.beam_links.push(link);
    }
    pub fn append_slur_link(&mut self, link: ChordSlurLink) {
        self.slur_links.push(link);
    }
    pub fn append_grace_group_link(&mut self, link: ChordGraceNotesGroupLink) {
        self.grace_group_links.push(link);
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
    pub fn append_slash(&mut self, slash: Slash) {
        self.slashes.push(slash);
    }
    pub fn append_wedge(&mut self, wedge: Wedge) {
        self.wedges.push(wedge);
    }
    pub fn append_fermata(&mut self, fermata: Fermata) {
        self.fermatas.push(fermata);
    }
    pub fn append_harmony(&mut self, harmony: Harmony) {
        self.harmonies.push(harmony);
    }
    pub fn append_figured_bass(&mut self, figured_bass: FiguredBass) {
        self.figured_basses.push(figured_bass);
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
    pub fn stems(&self) -> &[Stem] {
        &self.stems
    }
    pub fn beam_links(&self) -> &[ChordBeamLink] {
        &self.beam_links
    }
    pub fn slur_links(&self) -> &[ChordSlurLink] {
        &self.slur_links
    }
    pub fn grace_group_links(&self) -> &[ChordGraceNotesGroupLink] {
        &self.grace_group_links
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
    pub fn slashes(&self) -> &[Slash] {
        &self.slashes
    }
    pub fn wedges(&self) -> &[Wedge] {
        &self.wedges
    }
    pub fn fermatas(&self) -> &[Fermata] {
        &self.fermatas
    }
    pub fn harmonies(&self) -> &[Harmony] {
        &self.harmonies
    }
    pub fn figured_basses(&self) -> &[FiguredBass] {
        &self.figured_basses
    }
}

impl MeasurePositioned for Chord {
    fn placement(&self) -> &MeasurePlacement {
        &self.placement
    }
    fn placement_mut(&mut self) -> &mut MeasurePlacement {
        &mut self.placement
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "chord of {} notes, sounding {}, line {}",
            self.notes.len(),
            self.placement.sounding_whole_notes(),
            self.line
        )
    }
}
