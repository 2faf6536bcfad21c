//! Elements, from which the score DOM is constructed.
//!
//! Ownership flows strictly downward: a voice owns its segments and
//! structural containers, a segment owns measures, a measure owns
//! tuplets, chords and notes, a chord or tuplet owns its members. What
//! the source format models as back-pointers lives here as plain flags
//! and copied identifiers (measure number, position, tuplet factor) on
//! the child itself.

pub mod barlines;
pub mod chord;
pub mod grace_notes;
pub mod harmony;
pub mod measure;
pub mod note;
pub mod repeats;
pub mod segment;
pub mod tuplet;
pub mod voice;

pub use barlines::{
    BarCheck, BarNumberCheck, Barline, BarlineLocation, BarlineRepeatKind,
    BarlineStyle, KeyMode, KeySignature, LineBreak, PageBreak, Rehearsal,
    RehearsalKind, Scordatura, StringTuning, Tempo, TimeSignature,
};
pub use chord::{
    Chord, ChordBeamLink, ChordGraceNotesGroupLink, ChordSlurLink,
};
pub use grace_notes::{GraceNotesGroup, GraceNotesGroupKind};
pub use harmony::{
    Figure, FigurePrefixKind, FiguredBass, Frame, FrameNote, Harmony,
    HarmonyDegree, HarmonyDegreeKind, HarmonyKind,
};
pub use measure::{Measure, MeasureContent, MeasureEndKind, MeasureKind};
pub use note::{Note, NoteKind, NoteValues};
pub use repeats::{
    MeasuresRepeat, MeasuresRepeatPattern, MeasuresRepeatReplicas, Repeat,
    RepeatCommonPart, RepeatEnding, RepeatEndingKind, RestMeasures,
};
pub use segment::Segment;
pub use tuplet::{
    Tuplet, TupletBracketKind, TupletError, TupletMember,
    TupletShowNumberKind,
};
pub use voice::{Voice, VoiceElement, VoiceError, VoiceKind};
