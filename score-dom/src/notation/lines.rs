//! Notations that span from one note to another: they come in
//! start/continue/stop flavors and carry a number so that overlapping
//! spans of the same type can be told apart.

use super::PlacementKind;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SlurKind {
    RegularStart,
    RegularContinue,
    RegularStop,
    PhrasingStart,
    PhrasingContinue,
    PhrasingStop,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Slur {
    pub line: u32,
    pub number: i32,
    pub kind: SlurKind,
}
impl Slur {
    pub fn new(line: u32, number: i32, kind: SlurKind) -> Self {
        Self { line, number, kind }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LigatureKind {
    Start,
    Continue,
    Stop,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Ligature {
    pub line: u32,
    pub number: i32,
    pub kind: LigatureKind,
    pub placement: PlacementKind,
}
impl Ligature {
    pub fn new(
        line: u32,
        number: i32,
        kind: LigatureKind,
        placement: PlacementKind,
    ) -> Self {
        Self {
            line,
            number,
            kind,
            placement,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PedalKind {
    Start,
    Continue,
    Change,
    Stop,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Pedal {
    pub line: u32,
    pub kind: PedalKind,
    pub with_line: bool,
}
impl Pedal {
    pub fn new(line: u32, kind: PedalKind, with_line: bool) -> Self {
        Self {
            line,
            kind,
            with_line,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum WedgeKind {
    Crescendo,
    Decrescendo,
    Stop,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Wedge {
    pub line: u32,
    pub kind: WedgeKind,
    pub placement: PlacementKind,
}
impl Wedge {
    pub fn new(line: u32, kind: WedgeKind, placement: PlacementKind) -> Self {
        Self {
            line,
            kind,
            placement,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TieKind {
    Start,
    Continue,
    Stop,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Tie {
    pub line: u32,
    pub kind: TieKind,
}
impl Tie {
    pub fn new(line: u32, kind: TieKind) -> Self {
        Self { line, kind }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BeamKind {
    Begin,
    Continue,
    End,
    ForwardHook,
    BackwardHook,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Beam {
    pub line: u32,
    pub number: i32,
    pub kind: BeamKind,
}
impl Beam {
    pub fn new(line: u32, number: i32, kind: BeamKind) -> Self {
        Self { line, number, kind }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SpannerKind {
    Dashes,
    WavyLine,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SpanDirection {
    Start,
    Stop,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Spanner {
    pub line: u32,
    pub number: i32,
    pub kind: SpannerKind,
    pub direction: SpanDirection,
}
impl Spanner {
    pub fn new(
        line: u32,
        number: i32,
        kind: SpannerKind,
        direction: SpanDirection,
    ) -> Self {
        Self {
            line,
            number,
            kind,
            direction,
        }
    }
}
