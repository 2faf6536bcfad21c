use std::rc::Rc;

use score_dom::dom::{
    Chord, ChordBeamLink, ChordSlurLink, Note, NoteKind, NoteValues, Voice,
    VoiceKind,
};
use score_dom::notation::{
    Beam, BeamKind, Ornament, OrnamentKind, PlacementKind, Slur, SlurKind,
    Stem, StemKind,
};
use score_dom::primitives::{
    Alteration, DiatonicStep, MeasurePositioned, Octave, QuarterTonesPitch,
    WholeNotes,
};
use score_dom::ScoreSettings;

fn scratch_voice() -> Voice {
    Voice::new(1, 1, "piano right hand", VoiceKind::Regular)
}

fn member_note(line: u32, step: DiatonicStep) -> Note {
    Note::new(
        NoteValues {
            line,
            kind: NoteKind::ChordMember,
            pitch: Some(QuarterTonesPitch::new(step, Alteration::Natural)),
            octave: Some(Octave(4)),
            display_pitch: None,
            display_octave: None,
            sounding_whole_notes: WholeNotes::new(1, 4),
            display_whole_notes: WholeNotes::new(1, 4),
            dots_count: 0,
            tuplet_factor: Default::default(),
            head: Default::default(),
        },
        &ScoreSettings::default(),
    )
}

#[test]
fn members_share_the_chord_position() {
    let mut voice = scratch_voice();
    let mut chord = Chord::new(1);
    chord.add_first_note(member_note(2, DiatonicStep::C), &mut voice);
    chord.add_another_note(member_note(3, DiatonicStep::E), &mut voice);
    chord.add_another_note(member_note(4, DiatonicStep::G), &mut voice);

    chord.set_members_position_in_measure("3", WholeNotes::new(1, 2));
    chord.finalize(5);

    assert_eq!(
        chord.placement().position_in_measure(),
        &WholeNotes::new(1, 2)
    );
    for note in chord.notes() {
        assert_eq!(
            note.placement().position_in_measure(),
            &WholeNotes::new(1, 2)
        );
        assert_eq!(note.placement().measure_number(), "3");
        assert!(note.belongs_to_a_chord());
    }
    assert!(chord.notes()[0].is_chord_first_member());
    assert!(!chord.notes()[1].is_chord_first_member());
}

#[test]
fn first_note_defines_the_duration() {
    let mut voice = scratch_voice();
    let mut chord = Chord::new(1);
    chord.add_first_note(member_note(2, DiatonicStep::C), &mut voice);
    chord.add_another_note(member_note(3, DiatonicStep::E), &mut voice);
    assert_eq!(chord.sounding_whole_notes(), &WholeNotes::new(1, 4));
    assert_eq!(chord.display_whole_notes(), &WholeNotes::new(1, 4));
    assert_eq!(voice.shortest_note_duration(), &WholeNotes::new(1, 4));
}

#[test]
fn ornament_insertion_is_idempotent_by_kind() {
    let mut voice = scratch_voice();
    let mut chord = Chord::new(1);
    chord.add_first_note(member_note(2, DiatonicStep::C), &mut voice);
    chord.append_ornament(Ornament::new(2, OrnamentKind::Trill, PlacementKind::Above));
    chord.append_ornament(Ornament::new(3, OrnamentKind::Trill, PlacementKind::Below));
    chord.append_ornament(Ornament::new(4, OrnamentKind::Mordent, PlacementKind::Above));
    assert_eq!(chord.ornaments().len(), 2);
    assert_eq!(chord.ornaments()[0].line, 2);
}

#[test]
fn mismatched_stem_directions_are_kept_with_a_warning() {
    let mut chord = Chord::new(1);
    chord.append_stem(Stem::new(1, StemKind::Up));
    chord.append_stem(Stem::new(2, StemKind::Down));
    assert_eq!(chord.stems().len(), 2);
    assert_eq!(chord.stems()[0].kind, StemKind::Up);
    assert_eq!(chord.stems()[1].kind, StemKind::Down);
}

#[test]
fn links_share_the_underlying_notation() {
    let beam = Rc::new(Beam::new(1, 1, BeamKind::Begin));
    let slur = Rc::new(Slur::new(1, 1, SlurKind::RegularStart));

    let mut chord = Chord::new(1);
    chord.append_beam_link(ChordBeamLink::new(2, Rc::clone(&beam)));
    chord.append_slur_link(ChordSlurLink::new(2, Rc::clone(&slur)));

    let mut other = Chord::new(3);
    other.append_beam_link(ChordBeamLink::new(4, Rc::clone(&beam)));

    assert!(Rc::ptr_eq(chord.beam_links()[0].beam(), &beam));
    assert!(Rc::ptr_eq(
        chord.beam_links()[0].beam(),
        other.beam_links()[0].beam()
    ));
    assert!(Rc::ptr_eq(chord.slur_links()[0].slur(), &slur));
}

#[test]
fn newborn_clone_keeps_placement_but_no_members() {
    let mut voice = scratch_voice();
    let mut chord = Chord::new(1);
    chord.add_first_note(member_note(2, DiatonicStep::C), &mut voice);
    chord.set_members_position_in_measure("8", WholeNotes::new(1, 4));

    let clone = chord.newborn_clone();
    assert_eq!(
        clone.placement().position_in_measure(),
        &WholeNotes::new(1, 4)
    );
    assert_eq!(clone.sounding_whole_notes(), chord.sounding_whole_notes());
    assert!(clone.notes().is_empty());
}
