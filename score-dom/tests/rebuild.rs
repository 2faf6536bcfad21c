use once_cell::sync::Lazy;
use score_dom::dom::{
    Chord, Measure, MeasureContent, MeasureKind, Note, NoteKind,
    NoteValues, RepeatEndingKind, Segment, Tuplet, TupletMember, Voice,
    VoiceElement, VoiceKind,
};
use score_dom::notation::{
    Articulation, ArticulationKind, Dynamics, DynamicsKind, PlacementKind,
    Slur, SlurKind, Stem, StemKind, Tie, TieKind,
};
use score_dom::primitives::{
    Alteration, DiatonicStep, MeasurePositioned, Octave, QuarterTonesPitch,
    TupletFactor, WholeNotes,
};
use score_dom::rebuild::{rebuild_master_voice, RebuildError};
use score_dom::ScoreSettings;
use std::rc::Rc;

static COMPRESS: Lazy<ScoreSettings> = Lazy::new(|| ScoreSettings {
    compress_full_measure_rests: true,
    ..ScoreSettings::default()
});

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn scratch_voice() -> Voice {
    Voice::new(1, 1, "scratch", VoiceKind::Regular)
}

fn note_of_kind(line: u32, kind: NoteKind, step: DiatonicStep, sounding: WholeNotes) -> Note {
    Note::new(
        NoteValues {
            line,
            kind,
            pitch: Some(QuarterTonesPitch::new(step, Alteration::Natural)),
            octave: Some(Octave(4)),
            display_pitch: None,
            display_octave: None,
            sounding_whole_notes: sounding.clone(),
            display_whole_notes: sounding,
            dots_count: 0,
            tuplet_factor: Default::default(),
            head: Default::default(),
        },
        &ScoreSettings::default(),
    )
}

fn quarter(line: u32, step: DiatonicStep) -> Note {
    note_of_kind(line, NoteKind::Regular, step, WholeNotes::new(1, 4))
}

fn triplet_member(line: u32, step: DiatonicStep) -> Note {
    let mut note =
        note_of_kind(line, NoteKind::TupletMember, step, WholeNotes::new(1, 6));
    note.set_tuplet_factor(TupletFactor::new(3, 2));
    note
}

fn regular_measure(line: u32, number: &str, purist: i32, next: &str) -> Measure {
    let mut measure = Measure::new(line, number);
    measure.set_kind(MeasureKind::Regular);
    measure.set_purist_number(purist);
    measure.set_next_measure_number(next);
    measure.set_full_whole_notes(WholeNotes::new(1, 1));
    measure
}

fn rest_measure(line: u32, number: &str, purist: i32, next: &str) -> Measure {
    let mut measure = regular_measure(line, number, purist, next);
    measure.set_full_measure_rest();
    measure.append_note(Note::rest(
        line,
        WholeNotes::new(1, 1),
        WholeNotes::new(1, 1),
        0,
    ));
    measure
}

fn voice_with_measures(measures: Vec<Measure>) -> Voice {
    let mut voice = Voice::new(1, 1, "violin", VoiceKind::Regular);
    voice.set_last_segment(Segment::new(1));
    for measure in measures {
        let line = measure.line;
        voice
            .append_measure_clone(line, measure)
            .expect("segment is installed");
    }
    voice
}

fn segments_of(voice: &Voice) -> Vec<&Segment> {
    voice
        .elements()
        .iter()
        .filter_map(|element| match element {
            VoiceElement::Segment(segment) => Some(segment),
            _ => None,
        })
        .collect()
}

#[test]
fn plain_notes_are_recreated_in_place() {
    init_logs();
    let mut measure = regular_measure(10, "1", 1, "");
    measure.append_note(quarter(11, DiatonicStep::C));
    measure.append_note(quarter(12, DiatonicStep::D));
    let source = voice_with_measures(vec![measure]);

    let master =
        rebuild_master_voice(&source, &ScoreSettings::default()).expect("rebuild");

    assert_eq!(master.name(), "violin");
    let segments = segments_of(&master);
    assert_eq!(segments.len(), 1);
    let measures = segments[0].measures();
    assert_eq!(measures.len(), 1);
    let contents = measures[0].contents();
    assert_eq!(contents.len(), 2);
    match (&contents[0], &contents[1]) {
        (MeasureContent::Note(first), MeasureContent::Note(second)) => {
            assert_eq!(
                first.placement().position_in_measure(),
                &WholeNotes::zero()
            );
            assert_eq!(
                second.placement().position_in_measure(),
                &WholeNotes::new(1, 4)
            );
            assert_eq!(first.placement().measure_number(), "1");
        }
        other => panic!("expected two notes, got {:?}", other),
    }
    assert_eq!(master.shortest_note_duration(), &WholeNotes::new(1, 4));
}

#[test]
fn rest_measure_run_is_compressed_into_one_aggregate() {
    init_logs();
    let mut m4 = regular_measure(40, "4", 4, "");
    m4.append_note(quarter(41, DiatonicStep::C));
    let source = voice_with_measures(vec![
        rest_measure(10, "1", 1, "2"),
        rest_measure(20, "2", 2, "3"),
        rest_measure(30, "3", 3, "4"),
        m4,
    ]);

    let master = rebuild_master_voice(&source, &COMPRESS).expect("rebuild");

    assert_eq!(master.elements().len(), 2);
    match &master.elements()[0] {
        VoiceElement::RestMeasures(rest_measures) => {
            assert_eq!(rest_measures.measures_count(), 3);
            assert_eq!(rest_measures.measures()[0].number(), "1");
            assert_eq!(rest_measures.measures()[2].number(), "3");
            assert_eq!(rest_measures.measures()[0].contents().len(), 1);
        }
        other => panic!("expected the aggregate first, got {:?}", other),
    }
    match &master.elements()[1] {
        VoiceElement::Segment(segment) => {
            assert_eq!(segment.measures().len(), 1);
            assert_eq!(segment.measures()[0].number(), "4");
        }
        other => panic!("expected the regular measure's segment, got {:?}", other),
    }
}

#[test]
fn without_compression_rest_measures_stay_individual() {
    let mut m4 = regular_measure(40, "4", 4, "");
    m4.append_note(quarter(41, DiatonicStep::C));
    let source = voice_with_measures(vec![
        rest_measure(10, "1", 1, ""),
        rest_measure(20, "2", 2, ""),
        rest_measure(30, "3", 3, ""),
        m4,
    ]);

    let master =
        rebuild_master_voice(&source, &ScoreSettings::default()).expect("rebuild");

    let segments = segments_of(&master);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].measures().len(), 4);
}

#[test]
fn bar_check_pair_follows_the_measure_content() {
    let mut m1 = regular_measure(10, "1", 1, "2");
    m1.append_note(quarter(11, DiatonicStep::C));
    let mut m2 = regular_measure(20, "2", 2, "");
    m2.append_note(quarter(21, DiatonicStep::D));
    let source = voice_with_measures(vec![m1, m2]);

    let master =
        rebuild_master_voice(&source, &ScoreSettings::default()).expect("rebuild");

    let segments = segments_of(&master);
    let measures = segments[0].measures();
    assert_eq!(measures.len(), 2);
    let contents = measures[0].contents();
    assert_eq!(contents.len(), 3);
    assert!(matches!(contents[0], MeasureContent::Note(_)));
    match &contents[1] {
        MeasureContent::BarCheck(bar_check) => {
            assert_eq!(bar_check.next_bar_number(), "2");
            // resolved against the following measure's purist number
            assert_eq!(bar_check.purist_number(), 2);
        }
        other => panic!("expected a bar check, got {:?}", other),
    }
    match &contents[2] {
        MeasureContent::BarNumberCheck(check) => {
            assert_eq!(check.next_bar_number, "2");
        }
        other => panic!("expected a bar number check, got {:?}", other),
    }
    assert_eq!(measures[1].contents().len(), 1);
}

#[test]
fn tuplet_is_rebuilt_with_positions_and_duration() {
    let mut tuplet = Tuplet::new(
        10,
        1,
        TupletFactor::new(3, 2),
        WholeNotes::new(1, 6),
        WholeNotes::new(1, 4),
    );
    let mut scratch = scratch_voice();
    for (line, step) in [
        (11, DiatonicStep::C),
        (12, DiatonicStep::D),
        (13, DiatonicStep::E),
    ] {
        tuplet.append_note(triplet_member(line, step), &mut scratch);
    }
    let mut measure = regular_measure(10, "1", 1, "");
    measure.append_tuplet(tuplet);
    let source = voice_with_measures(vec![measure]);

    let master =
        rebuild_master_voice(&source, &ScoreSettings::default()).expect("rebuild");

    let segments = segments_of(&master);
    let measure = &segments[0].measures()[0];
    assert_eq!(measure.current_position(), &WholeNotes::new(1, 2));
    match &measure.contents()[0] {
        MeasureContent::Tuplet(tuplet) => {
            assert_eq!(tuplet.sounding_whole_notes(), &WholeNotes::new(1, 2));
            assert_eq!(tuplet.elements().len(), 3);
            let expected = [
                WholeNotes::zero(),
                WholeNotes::new(1, 6),
                WholeNotes::new(1, 3),
            ];
            for (member, expected) in tuplet.elements().iter().zip(expected) {
                match member {
                    TupletMember::Note(note) => {
                        assert_eq!(note.placement().position_in_measure(), &expected);
                    }
                    other => panic!("expected a note, got {:?}", other),
                }
            }
        }
        other => panic!("expected a tuplet, got {:?}", other),
    }
}

#[test]
fn nested_tuplets_keep_their_nesting() {
    let mut scratch = scratch_voice();
    let mut outer = Tuplet::new(
        10,
        1,
        TupletFactor::new(3, 2),
        WholeNotes::new(1, 6),
        WholeNotes::new(1, 4),
    );
    outer.append_note(triplet_member(11, DiatonicStep::C), &mut scratch);
    outer.append_note(triplet_member(12, DiatonicStep::D), &mut scratch);
    let mut inner = Tuplet::new(
        13,
        2,
        TupletFactor::new(3, 2),
        WholeNotes::new(1, 6),
        WholeNotes::new(1, 4),
    );
    for (line, step) in [
        (14, DiatonicStep::E),
        (15, DiatonicStep::F),
        (16, DiatonicStep::G),
    ] {
        inner.append_note(triplet_member(line, step), &mut scratch);
    }
    outer.add_tuplet(inner);
    let mut measure = regular_measure(10, "1", 1, "");
    measure.append_tuplet(outer);
    let source = voice_with_measures(vec![measure]);

    let master =
        rebuild_master_voice(&source, &ScoreSettings::default()).expect("rebuild");

    let segments = segments_of(&master);
    match &segments[0].measures()[0].contents()[0] {
        MeasureContent::Tuplet(outer) => {
            assert_eq!(outer.elements().len(), 3);
            assert_eq!(outer.sounding_whole_notes(), &WholeNotes::new(5, 6));
            match &outer.elements()[2] {
                TupletMember::Tuplet(inner) => {
                    assert_eq!(inner.elements().len(), 3);
                    assert_eq!(
                        inner.sounding_whole_notes(),
                        &WholeNotes::new(1, 2)
                    );
                }
                other => panic!("expected the nested tuplet, got {:?}", other),
            }
        }
        other => panic!("expected the outer tuplet, got {:?}", other),
    }
}

#[test]
fn chord_members_are_routed_into_the_chord_clone() {
    let mut scratch = scratch_voice();
    let mut chord = Chord::new(10);
    chord.add_first_note(
        note_of_kind(11, NoteKind::ChordMember, DiatonicStep::C, WholeNotes::new(1, 4)),
        &mut scratch,
    );
    chord.add_another_note(
        note_of_kind(12, NoteKind::ChordMember, DiatonicStep::E, WholeNotes::new(1, 4)),
        &mut scratch,
    );
    let mut measure = regular_measure(10, "1", 1, "");
    measure.append_chord(chord);
    let source = voice_with_measures(vec![measure]);

    let master =
        rebuild_master_voice(&source, &ScoreSettings::default()).expect("rebuild");

    let segments = segments_of(&master);
    match &segments[0].measures()[0].contents()[0] {
        MeasureContent::Chord(chord) => {
            assert_eq!(chord.notes().len(), 2);
            assert!(chord.notes()[0].is_chord_first_member());
            for note in chord.notes() {
                assert_eq!(
                    note.placement().position_in_measure(),
                    &WholeNotes::zero()
                );
            }
        }
        other => panic!("expected a chord, got {:?}", other),
    }
}

#[test]
fn chord_inside_a_tuplet_lands_in_the_tuplet_clone() {
    let mut scratch = scratch_voice();
    let mut tuplet = Tuplet::new(
        10,
        1,
        TupletFactor::new(3, 2),
        WholeNotes::new(1, 6),
        WholeNotes::new(1, 4),
    );
    tuplet.append_note(triplet_member(11, DiatonicStep::C), &mut scratch);
    let mut chord = Chord::new(12);
    chord.add_first_note(
        note_of_kind(13, NoteKind::ChordMember, DiatonicStep::E, WholeNotes::new(1, 6)),
        &mut scratch,
    );
    chord.add_another_note(
        note_of_kind(14, NoteKind::ChordMember, DiatonicStep::G, WholeNotes::new(1, 6)),
        &mut scratch,
    );
    tuplet.append_chord(chord);
    let mut measure = regular_measure(10, "1", 1, "");
    measure.append_tuplet(tuplet);
    let source = voice_with_measures(vec![measure]);

    let master =
        rebuild_master_voice(&source, &ScoreSettings::default()).expect("rebuild");

    let segments = segments_of(&master);
    match &segments[0].measures()[0].contents()[0] {
        MeasureContent::Tuplet(tuplet) => {
            assert_eq!(tuplet.elements().len(), 2);
            assert_eq!(tuplet.sounding_whole_notes(), &WholeNotes::new(1, 3));
            match &tuplet.elements()[1] {
                TupletMember::Chord(chord) => {
                    assert_eq!(chord.notes().len(), 2);
                }
                other => panic!("expected a chord member, got {:?}", other),
            }
        }
        other => panic!("expected a tuplet, got {:?}", other),
    }
}

#[test]
fn note_attachments_are_reattached_one_by_one() {
    let mut note = quarter(11, DiatonicStep::C);
    note.append_articulation(Articulation::new(
        11,
        ArticulationKind::Staccato,
        PlacementKind::Above,
    ));
    note.append_dynamics(Dynamics::new(11, DynamicsKind::F, PlacementKind::Below));
    note.append_slur(Slur::new(11, 1, SlurKind::RegularStart));
    note.set_stem(Rc::new(Stem::new(11, StemKind::Up)));
    note.set_tie(Rc::new(Tie::new(11, TieKind::Start)));
    let mut measure = regular_measure(10, "1", 1, "");
    measure.append_note(note);
    let source = voice_with_measures(vec![measure]);

    let master =
        rebuild_master_voice(&source, &ScoreSettings::default()).expect("rebuild");

    let segments = segments_of(&master);
    match &segments[0].measures()[0].contents()[0] {
        MeasureContent::Note(note) => {
            assert_eq!(note.articulations().len(), 1);
            assert_eq!(note.articulations()[0].kind, ArticulationKind::Staccato);
            assert_eq!(note.dynamics().len(), 1);
            assert_eq!(note.slurs().len(), 1);
            assert_eq!(note.stem().expect("stem rebuilt").kind, StemKind::Up);
            assert_eq!(note.tie().expect("tie rebuilt").kind, TieKind::Start);
        }
        other => panic!("expected a note, got {:?}", other),
    }
}

#[test]
fn harmony_outside_any_context_is_a_quiet_no_op() {
    use score_dom::dom::{Harmony, HarmonyKind};
    init_logs();
    let mut measure = regular_measure(10, "1", 1, "");
    measure.append_note(quarter(11, DiatonicStep::C));
    measure.append_harmony(Harmony::new(
        12,
        QuarterTonesPitch::new(DiatonicStep::C, Alteration::Natural),
        HarmonyKind::Major,
    ));
    let source = voice_with_measures(vec![measure]);

    let master =
        rebuild_master_voice(&source, &ScoreSettings::default()).expect("rebuild");

    let segments = segments_of(&master);
    let contents = segments[0].measures()[0].contents();
    assert_eq!(contents.len(), 1);
    assert!(matches!(contents[0], MeasureContent::Note(_)));
}

#[test]
fn harmony_voice_appends_harmonies_directly() {
    use score_dom::dom::{Harmony, HarmonyDegree, HarmonyDegreeKind, HarmonyKind};
    let mut harmony = Harmony::new(
        12,
        QuarterTonesPitch::new(DiatonicStep::G, Alteration::Natural),
        HarmonyKind::Dominant,
    );
    harmony.append_degree(HarmonyDegree::new(
        12,
        7,
        Alteration::Flat,
        HarmonyDegreeKind::Add,
    ));
    let mut measure = regular_measure(10, "1", 1, "");
    measure.append_harmony(harmony);

    let mut source = Voice::new(1, 2, "harmonies", VoiceKind::Harmony);
    source.set_last_segment(Segment::new(1));
    source.append_measure_clone(10, measure).expect("segment");

    let master =
        rebuild_master_voice(&source, &ScoreSettings::default()).expect("rebuild");

    let segments = segments_of(&master);
    match &segments[0].measures()[0].contents()[0] {
        MeasureContent::Harmony(harmony) => {
            assert_eq!(harmony.kind, HarmonyKind::Dominant);
            assert_eq!(harmony.degrees().len(), 1);
        }
        other => panic!("expected a harmony, got {:?}", other),
    }
}

#[test]
fn repeat_boundaries_are_forwarded_to_the_voice() {
    let mut source = Voice::new(1, 1, "violin", VoiceKind::Regular);
    source.handle_repeat_start(10);
    source.handle_repeat_common_part_start(10);
    source.set_last_segment(Segment::new(10));
    let mut m1 = regular_measure(11, "1", 1, "");
    m1.append_note(quarter(12, DiatonicStep::C));
    source.append_measure_clone(11, m1).expect("segment");
    source.finish_segment(13).expect("segment open");
    source.handle_repeat_common_part_end(13).expect("common part");
    source.handle_repeat_ending_start(14, RepeatEndingKind::Hooked, "1");
    source.set_last_segment(Segment::new(14));
    let mut m2 = regular_measure(15, "2", 2, "");
    m2.append_note(quarter(16, DiatonicStep::D));
    source.append_measure_clone(15, m2).expect("segment");
    source.finish_segment(17).expect("segment open");
    source.handle_repeat_ending_end(17).expect("ending");
    source.handle_repeat_end(18).expect("repeat");
    source.set_last_segment(Segment::new(19));
    let mut m3 = regular_measure(20, "3", 3, "");
    m3.append_note(quarter(21, DiatonicStep::E));
    source.append_measure_clone(20, m3).expect("segment");

    let master =
        rebuild_master_voice(&source, &ScoreSettings::default()).expect("rebuild");

    assert_eq!(master.elements().len(), 2);
    match &master.elements()[0] {
        VoiceElement::Repeat(repeat) => {
            let common_part = repeat.common_part().expect("common part rebuilt");
            assert_eq!(common_part.segments().len(), 1);
            assert_eq!(common_part.segments()[0].measures().len(), 1);
            assert_eq!(repeat.endings().len(), 1);
            assert_eq!(repeat.endings()[0].number, "1");
            assert_eq!(repeat.endings()[0].kind, RepeatEndingKind::Hooked);
        }
        other => panic!("expected a repeat, got {:?}", other),
    }
    assert!(matches!(&master.elements()[1], VoiceElement::Segment(_)));
}

#[test]
fn source_rest_measures_are_collected_again() {
    let mut source = Voice::new(1, 1, "violin", VoiceKind::Regular);
    source.handle_rest_measures_start(10);
    source
        .pending_rest_measures_mut()
        .expect("aggregate open")
        .append_measure_clone(rest_measure(11, "1", 1, ""));
    source
        .pending_rest_measures_mut()
        .expect("aggregate open")
        .append_measure_clone(rest_measure(12, "2", 2, ""));
    source.handle_rest_measures_end(13).expect("aggregate");
    source.set_last_segment(Segment::new(14));
    let mut m3 = regular_measure(15, "3", 3, "");
    m3.append_note(quarter(16, DiatonicStep::C));
    source.append_measure_clone(15, m3).expect("segment");

    let master =
        rebuild_master_voice(&source, &ScoreSettings::default()).expect("rebuild");

    assert_eq!(master.elements().len(), 2);
    match &master.elements()[0] {
        VoiceElement::RestMeasures(rest_measures) => {
            assert_eq!(rest_measures.measures_count(), 2);
        }
        other => panic!("expected the rest measures, got {:?}", other),
    }
}

#[test]
fn chord_member_without_a_chord_is_fatal() {
    let mut measure = regular_measure(10, "1", 1, "");
    measure.append_note(note_of_kind(
        11,
        NoteKind::ChordMember,
        DiatonicStep::C,
        WholeNotes::new(1, 4),
    ));
    let source = voice_with_measures(vec![measure]);

    let result = rebuild_master_voice(&source, &ScoreSettings::default());
    assert!(matches!(
        result,
        Err(RebuildError::ChordMemberWithoutChord { line: 11 })
    ));
}
