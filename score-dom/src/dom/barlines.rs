//! Per-measure markers: barlines, checks, breaks, signatures, tempo.

use std::fmt;

use crate::primitives::{Octave, QuarterTonesPitch, WholeNotes};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BarlineLocation {
    Left,
    Middle,
    Right,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BarlineStyle {
    Regular,
    Dotted,
    Dashed,
    Heavy,
    LightLight,
    LightHeavy,
    HeavyLight,
    HeavyHeavy,
    Tick,
    Short,
    None,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BarlineRepeatKind {
    Forward,
    Backward,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Barline {
    pub line: u32,
    pub location: BarlineLocation,
    pub style: BarlineStyle,
    pub repeat: Option<BarlineRepeatKind>,
}
impl Barline {
    pub fn new(
        line: u32,
        location: BarlineLocation,
        style: BarlineStyle,
        repeat: Option<BarlineRepeatKind>,
    ) -> Self {
        Self {
            line,
            location,
            style,
            repeat,
        }
    }
}

/// A checkpoint emitted after a measure, referencing the number of the
/// measure that follows it. The purist number is filled in once that
/// following measure is reached.
#[derive(Debug, PartialEq, Clone)]
pub struct BarCheck {
    pub line: u32,
    next_bar_number: String,
    purist_number: i32,
}
impl BarCheck {
    pub fn new(line: u32, next_bar_number: impl Into<String>, purist_number: i32) -> Self {
        Self {
            line,
            next_bar_number: next_bar_number.into(),
            purist_number,
        }
    }
    pub fn next_bar_number(&self) -> &str {
        &self.next_bar_number
    }
    pub fn purist_number(&self) -> i32 {
        self.purist_number
    }
    pub fn set_purist_number(&mut self, purist_number: i32) {
        self.purist_number = purist_number;
    }
}
impl fmt::Display for BarCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bar check before measure {} (purist {})",
            self.next_bar_number, self.purist_number
        )
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct BarNumberCheck {
    pub line: u32,
    pub next_bar_number: String,
}
impl BarNumberCheck {
    pub fn new(line: u32, next_bar_number: impl Into<String>) -> Self {
        Self {
            line,
            next_bar_number: next_bar_number.into(),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct LineBreak {
    pub line: u32,
    pub next_bar_number: String,
}
impl LineBreak {
    pub fn new(line: u32, next_bar_number: impl Into<String>) -> Self {
        Self {
            line,
            next_bar_number: next_bar_number.into(),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct PageBreak {
    pub line: u32,
}
impl PageBreak {
    pub fn new(line: u32) -> Self {
        Self { line }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum KeyMode {
    Major,
    Minor,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
}

#[derive(Debug, PartialEq, Clone)]
pub struct KeySignature {
    pub line: u32,
    pub tonic: QuarterTonesPitch,
    pub mode: KeyMode,
}
impl KeySignature {
    pub fn new(line: u32, tonic: QuarterTonesPitch, mode: KeyMode) -> Self {
        Self { line, tonic, mode }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct TimeSignature {
    pub line: u32,
    pub numerator: u64,
    pub denominator: u64,
}
impl TimeSignature {
    pub fn new(line: u32, numerator: u64, denominator: u64) -> Self {
        Self {
            line,
            numerator,
            denominator,
        }
    }
    /// The full duration of a measure under this signature.
    pub fn whole_notes(&self) -> WholeNotes {
        WholeNotes::new(self.numerator, self.denominator)
    }
}
impl fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Tempo {
    pub line: u32,
    pub beat_unit: WholeNotes,
    pub per_minute: u32,
}
impl Tempo {
    pub fn new(line: u32, beat_unit: WholeNotes, per_minute: u32) -> Self {
        Self {
            line,
            beat_unit,
            per_minute,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum RehearsalKind {
    #[default]
    None,
    Rectangle,
    Oval,
    Circle,
    Bracket,
    Triangle,
    Diamond,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Rehearsal {
    pub line: u32,
    pub kind: RehearsalKind,
    pub text: String,
}
impl Rehearsal {
    pub fn new(line: u32, kind: RehearsalKind, text: impl Into<String>) -> Self {
        Self {
            line,
            kind,
            text: text.into(),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct StringTuning {
    pub string_number: i32,
    pub pitch: QuarterTonesPitch,
    pub octave: Octave,
}

/// Alternative tuning instructions for string instruments.
#[derive(Debug, PartialEq, Clone)]
pub struct Scordatura {
    pub line: u32,
    tunings: Vec<StringTuning>,
}
impl Scordatura {
    pub fn new(line: u32) -> Self {
        Self {
            line,
            tunings: Vec::new(),
        }
    }
    pub fn tunings(&self) -> &[StringTuning] {
        &self.tunings
    }
    pub fn append_tuning(&mut self, tuning: StringTuning) {
        self.tunings.push(tuning);
    }
}
