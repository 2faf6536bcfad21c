use fraction::Fraction;
use score_dom::dom::{
    Chord, Note, NoteKind, NoteValues, Tuplet, TupletMember, Voice,
    VoiceKind,
};
use score_dom::primitives::{
    Alteration, DiatonicStep, MeasurePositioned, Octave, QuarterTonesPitch,
    TupletFactor, WholeNotes,
};
use score_dom::ScoreSettings;

fn scratch_voice() -> Voice {
    Voice::new(1, 1, "violin", VoiceKind::Regular)
}

fn member_note(line: u32, step: DiatonicStep) -> Note {
    Note::new(
        NoteValues {
            line,
            kind: NoteKind::TupletMember,
            pitch: Some(QuarterTonesPitch::new(step, Alteration::Natural)),
            octave: Some(Octave(4)),
            display_pitch: None,
            display_octave: None,
            sounding_whole_notes: WholeNotes::new(1, 6),
            display_whole_notes: WholeNotes::new(1, 4),
            dots_count: 0,
            tuplet_factor: TupletFactor::new(3, 2),
            head: Default::default(),
        },
        &ScoreSettings::default(),
    )
}

fn triplet(line: u32) -> Tuplet {
    Tuplet::new(
        line,
        1,
        TupletFactor::new(3, 2),
        WholeNotes::new(1, 6),
        WholeNotes::new(1, 4),
    )
}

#[test]
fn triplet_accumulates_member_durations() {
    let mut voice = scratch_voice();
    let mut tuplet = triplet(10);
    for (line, step) in [
        (11, DiatonicStep::C),
        (12, DiatonicStep::D),
        (13, DiatonicStep::E),
    ] {
        tuplet.append_note(member_note(line, step), &mut voice);
    }
    assert_eq!(tuplet.sounding_whole_notes(), &WholeNotes::new(1, 2));
    assert_eq!(tuplet.display_whole_notes(), &WholeNotes::new(3, 4));
    let first = tuplet.first_non_grace_note().expect("triplet has notes");
    assert_eq!(first.line, 11);
    assert_eq!(
        first.pitch(),
        Some(&QuarterTonesPitch::new(DiatonicStep::C, Alteration::Natural))
    );
    assert_eq!(voice.shortest_note_duration(), &WholeNotes::new(1, 6));
}

#[test]
fn member_notes_carry_the_tuplet_factor() {
    let mut voice = scratch_voice();
    let mut tuplet = triplet(1);
    tuplet.append_note(member_note(2, DiatonicStep::C), &mut voice);
    match &tuplet.elements()[0] {
        TupletMember::Note(note) => {
            assert!(note.belongs_to_a_tuplet());
            assert_eq!(note.position_in_tuplet(), Some(1));
            assert_eq!(note.tuplet_factor(), &TupletFactor::new(3, 2));
        }
        other => panic!("expected a note, got {:?}", other),
    }
}

#[test]
fn chord_contributes_its_duration_once() {
    let mut voice = scratch_voice();
    let mut tuplet = triplet(1);
    tuplet.append_note(member_note(2, DiatonicStep::C), &mut voice);
    tuplet.append_note(member_note(3, DiatonicStep::D), &mut voice);

    let mut chord = Chord::new(4);
    chord.add_first_note(member_note(5, DiatonicStep::E), &mut voice);
    chord.add_another_note(member_note(5, DiatonicStep::G), &mut voice);
    tuplet.append_chord(chord);

    // 1/6 + 1/6 + 1/6, the chord's second note adds nothing.
    assert_eq!(tuplet.sounding_whole_notes(), &WholeNotes::new(1, 2));
}

#[test]
fn nested_factor_unapply_is_exact() {
    // The source encodes a {5,4} inside a {3,2} as the composed {15,8}.
    let mut inner = Tuplet::new(
        2,
        2,
        TupletFactor::new(15, 8),
        WholeNotes::new(1, 20),
        WholeNotes::new(1, 8),
    );
    inner.unapply_sounding_factor_to_members(&TupletFactor::new(3, 2));
    assert_eq!(inner.factor().actual_notes(), Fraction::new(5u64, 1u64));
    assert_eq!(inner.factor().normal_notes(), Fraction::new(4u64, 1u64));

    let mut odd = Tuplet::new(
        3,
        2,
        TupletFactor::new(5, 4),
        WholeNotes::new(1, 20),
        WholeNotes::new(1, 8),
    );
    odd.unapply_sounding_factor_to_members(&TupletFactor::new(3, 2));
    assert_eq!(odd.factor().actual_notes(), Fraction::new(5u64, 3u64));
    assert_eq!(odd.factor().normal_notes(), Fraction::new(2u64, 1u64));
}

#[test]
fn position_walk_returns_end_position() {
    let mut voice = scratch_voice();
    let mut outer = triplet(1);
    outer.append_note(member_note(2, DiatonicStep::C), &mut voice);
    outer.append_note(member_note(3, DiatonicStep::D), &mut voice);

    let mut nested = triplet(4);
    for (line, step) in [
        (5, DiatonicStep::E),
        (6, DiatonicStep::F),
        (7, DiatonicStep::G),
    ] {
        nested.append_note(member_note(line, step), &mut voice);
    }
    outer.add_tuplet(nested);

    let start = WholeNotes::new(1, 4);
    let end = outer.set_members_position_in_measure("7", start.clone());
    // 1/4 + (1/6 + 1/6 + 1/2)
    assert_eq!(end, WholeNotes::new(13, 12));
    assert_eq!(
        end,
        (start.clone() + outer.sounding_whole_notes().clone()).rationalised()
    );

    let mut previous = start;
    for member in outer.elements() {
        let position = match member {
            TupletMember::Note(note) => {
                note.placement().position_in_measure().clone()
            }
            TupletMember::Chord(chord) => {
                chord.placement().position_in_measure().clone()
            }
            TupletMember::Tuplet(tuplet) => {
                tuplet.placement().position_in_measure().clone()
            }
        };
        assert!(position >= previous, "positions must not decrease");
        previous = position;
    }
    match outer.elements().last() {
        Some(TupletMember::Tuplet(nested)) => {
            assert_eq!(nested.placement().measure_number(), "7");
            match &nested.elements()[2] {
                TupletMember::Note(note) => assert_eq!(
                    note.placement().position_in_measure(),
                    &WholeNotes::new(11, 12)
                ),
                other => panic!("expected a note, got {:?}", other),
            }
        }
        other => panic!("expected the nested tuplet, got {:?}", other),
    }
}

#[test]
fn removal_is_defined_for_notes_only() {
    let mut voice = scratch_voice();
    let mut tuplet = triplet(1);
    tuplet.append_note(member_note(2, DiatonicStep::C), &mut voice);

    let mut chord = Chord::new(3);
    chord.add_first_note(member_note(4, DiatonicStep::E), &mut voice);
    tuplet.append_chord(chord);

    let first = tuplet.remove_first_note().expect("first element is a note");
    assert_eq!(first.line, 2);
    assert_eq!(tuplet.sounding_whole_notes(), &WholeNotes::new(1, 6));

    assert!(tuplet.remove_last_note().is_err());
    assert!(tuplet.remove_first_note().is_err());

    let mut empty = triplet(9);
    assert!(empty.remove_first_note().is_err());
}
