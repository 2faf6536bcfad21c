use std::io::{Read, Write};

use score_dom::dom::{
    Measure, MeasureKind, Note, Segment, TimeSignature, Voice, VoiceKind,
};
use score_dom::primitives::{
    Alteration, DiatonicStep, Octave, QuarterTonesPitch, WholeNotes,
};
use score_dom::visitor::printer::print_voice;
use score_dom::TraceSettings;

fn sample_voice() -> Voice {
    let mut measure = Measure::new(10, "1");
    measure.set_kind(MeasureKind::Regular);
    measure.set_purist_number(1);
    measure.append_time_signature(TimeSignature::new(10, 4, 4));
    measure.append_note(Note::from_pitch_and_octave(
        11,
        QuarterTonesPitch::new(DiatonicStep::C, Alteration::Natural),
        Octave(4),
        WholeNotes::new(1, 4),
        WholeNotes::new(1, 4),
        0,
    ));
    measure.append_note(Note::rest(
        12,
        WholeNotes::new(3, 4),
        WholeNotes::new(3, 4),
        0,
    ));
    let mut voice = Voice::new(1, 1, "flute", VoiceKind::Regular);
    voice.set_last_segment(Segment::new(1));
    voice.append_measure_clone(10, measure).expect("segment");
    voice
}

#[test]
fn trace_has_one_line_per_element() {
    let voice = sample_voice();
    let trace = print_voice(&voice, &TraceSettings::default());

    let lines: Vec<&str> = trace.lines().collect();
    // voice, segment, measure, time, note, rest
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("voice 1 \"flute\""));
    assert!(lines[1].trim_start().starts_with("segment"));
    assert!(lines[2].trim_start().starts_with("measure 1"));
    assert!(lines[3].trim_start().starts_with("time 4/4"));
    assert!(lines[4].trim_start().starts_with("note"));
    assert!(lines[5].trim_start().contains("Rest"));
}

#[test]
fn indentation_follows_nesting() {
    let voice = sample_voice();
    let trace = print_voice(&voice, &TraceSettings::default());
    let lines: Vec<&str> = trace.lines().collect();

    let depth =
        |line: &str| line.len() - line.trim_start().len();
    assert_eq!(depth(lines[0]), 0);
    assert!(depth(lines[1]) > depth(lines[0]));
    assert!(depth(lines[2]) > depth(lines[1]));
    assert!(depth(lines[4]) > depth(lines[2]));
}

#[test]
fn positions_flag_adds_placement_details() {
    let voice = sample_voice();
    let plain = print_voice(&voice, &TraceSettings::default());
    let detailed = print_voice(
        &voice,
        &TraceSettings {
            positions: true,
            ..TraceSettings::default()
        },
    );
    assert!(!plain.contains("measure 1 at"));
    assert!(detailed.contains("measure 1 at"));
}

#[test]
fn trace_survives_a_file_round_trip() {
    let voice = sample_voice();
    let trace = print_voice(&voice, &TraceSettings::default());

    let mut file = tempfile::tempfile().expect("temp file");
    file.write_all(trace.as_bytes()).expect("write trace");
    use std::io::Seek;
    file.rewind().expect("rewind");
    let mut read_back = String::new();
    file.read_to_string(&mut read_back).expect("read trace");
    assert_eq!(read_back, trace);
}
