use super::PlacementKind;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OrnamentKind {
    AccidentalMark,
    DelayedInvertedTurn,
    DelayedTurn,
    InvertedMordent,
    InvertedTurn,
    Mordent,
    Schleifer,
    Shake,
    Trill,
    Turn,
    VerticalTurn,
    WavyLine,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Ornament {
    pub line: u32,
    pub kind: OrnamentKind,
    pub placement: PlacementKind,
}
impl Ornament {
    pub fn new(line: u32, kind: OrnamentKind, placement: PlacementKind) -> Self {
        Self {
            line,
            kind,
            placement,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GlissandoKind {
    Start,
    Stop,
}

/// A continuous slide along intermediate pitches.
#[derive(Debug, PartialEq, Clone)]
pub struct Glissando {
    pub line: u32,
    pub number: i32,
    pub kind: GlissandoKind,
}
impl Glissando {
    pub fn new(line: u32, number: i32, kind: GlissandoKind) -> Self {
        Self { line, number, kind }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SlideKind {
    Start,
    Stop,
}

/// A portamento-style slide between two adjacent notes.
#[derive(Debug, PartialEq, Clone)]
pub struct Slide {
    pub line: u32,
    pub number: i32,
    pub kind: SlideKind,
}
impl Slide {
    pub fn new(line: u32, number: i32, kind: SlideKind) -> Self {
        Self { line, number, kind }
    }
}
