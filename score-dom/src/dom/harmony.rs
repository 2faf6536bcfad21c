//! Chord-symbol and figured-bass payloads.
//!
//! Both are measure-positioned: they keep their own placement copy, and
//! the note they hang off propagates its position into it.

use crate::primitives::{
    Alteration, MeasurePlacement, MeasurePositioned, QuarterTonesPitch,
    WholeNotes,
};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum HarmonyKind {
    Major,
    Minor,
    Augmented,
    Diminished,
    Dominant,
    MajorSeventh,
    MinorSeventh,
    DiminishedSeventh,
    HalfDiminished,
    MajorSixth,
    MinorSixth,
    SuspendedSecond,
    SuspendedFourth,
    Power,
    Other,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum HarmonyDegreeKind {
    Add,
    Alter,
    Subtract,
}

#[derive(Debug, PartialEq, Clone)]
pub struct HarmonyDegree {
    pub line: u32,
    pub value: i32,
    pub alteration: Alteration,
    pub kind: HarmonyDegreeKind,
}
impl HarmonyDegree {
    pub fn new(
        line: u32,
        value: i32,
        alteration: Alteration,
        kind: HarmonyDegreeKind,
    ) -> Self {
        Self {
            line,
            value,
            alteration,
            kind,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Harmony {
    pub line: u32,
    placement: MeasurePlacement,
    pub root: QuarterTonesPitch,
    pub kind: HarmonyKind,
    pub bass: Option<QuarterTonesPitch>,
    pub inversion: Option<i32>,
    degrees: Vec<HarmonyDegree>,
    frame: Option<Frame>,
}
impl Harmony {
    pub fn new(line: u32, root: QuarterTonesPitch, kind: HarmonyKind) -> Self {
        Self {
            line,
            placement: MeasurePlacement::new(),
            root,
            kind,
            bass: None,
            inversion: None,
            degrees: Vec::new(),
            frame: None,
        }
    }
    pub fn degrees(&self) -> &[HarmonyDegree] {
        &self.degrees
    }
    pub fn append_degree(&mut self, degree: HarmonyDegree) {
        self.degrees.push(degree);
    }
    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }
    pub fn set_frame(&mut self, frame: Frame) {
        self.frame = Some(frame);
    }
    pub fn set_position_in_measure(&mut self, value: WholeNotes, context: &str) {
        self.placement.set_position_in_measure(value, context);
    }
    /// Scalars and placement copied, degrees and frame left for a
    /// rebuild to refill.
    pub fn newborn_clone(&self) -> Self {
        let mut clone = Self::new(self.line, self.root, self.kind);
        clone.placement = self.placement.clone();
        clone.bass = self.bass;
        clone.inversion = self.inversion;
        clone
    }
}
impl MeasurePositioned for Harmony {
    fn placement(&self) -> &MeasurePlacement {
        &self.placement
    }
    fn placement_mut(&mut self) -> &mut MeasurePlacement {
        &mut self.placement
    }
}

/// A fretboard diagram attached to a harmony.
#[derive(Debug, PartialEq, Clone)]
pub struct Frame {
    pub line: u32,
    pub strings_count: i32,
    pub frets_count: i32,
    notes: Vec<FrameNote>,
}
impl Frame {
    pub fn new(line: u32, strings_count: i32, frets_count: i32) -> Self {
        Self {
            line,
            strings_count,
            frets_count,
            notes: Vec::new(),
        }
    }
    pub fn notes(&self) -> &[FrameNote] {
        &self.notes
    }
    pub fn append_note(&mut self, note: FrameNote) {
        self.notes.push(note);
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct FrameNote {
    pub line: u32,
    pub string_number: i32,
    pub fret_number: i32,
    pub fingering: Option<i32>,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FigurePrefixKind {
    DoubleFlat,
    Flat,
    FlatFlat,
    Natural,
    Sharp,
    SharpSharp,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Figure {
    pub line: u32,
    pub number: i32,
    pub prefix: Option<FigurePrefixKind>,
    pub suffix: Option<FigurePrefixKind>,
}
impl Figure {
    pub fn new(
        line: u32,
        number: i32,
        prefix: Option<FigurePrefixKind>,
        suffix: Option<FigurePrefixKind>,
    ) -> Self {
        Self {
            line,
            number,
            prefix,
            suffix,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct FiguredBass {
    pub line: u32,
    placement: MeasurePlacement,
    figures: Vec<Figure>,
    pub parentheses: bool,
}
impl FiguredBass {
    pub fn new(line: u32) -> Self {
        Self {
            line,
            placement: MeasurePlacement::new(),
            figures: Vec::new(),
            parentheses: false,
        }
    }
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }
    pub fn append_figure(&mut self, figure: Figure) {
        self.figures.push(figure);
    }
    pub fn set_position_in_measure(&mut self, value: WholeNotes, context: &str) {
        self.placement.set_position_in_measure(value, context);
    }
    pub fn newborn_clone(&self) -> Self {
        let mut clone = Self::new(self.line);
        clone.placement = self.placement.clone();
        clone.parentheses = self.parentheses;
        clone
    }
}
impl MeasurePositioned for FiguredBass {
    fn placement(&self) -> &MeasurePlacement {
        &self.placement
    }
    fn placement_mut(&mut self) -> &mut MeasurePlacement {
        &mut self.placement
    }
}
