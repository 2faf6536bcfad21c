use super::PlacementKind;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TechnicalKind {
    Arrow,
    DoubleTongue,
    DownBow,
    Fingernails,
    Harmonic,
    Heel,
    Hole,
    OpenString,
    SnapPizzicato,
    Stopped,
    Tap,
    Thumb,
    Toe,
    TripleTongue,
    UpBow,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Technical {
    pub line: u32,
    pub kind: TechnicalKind,
    pub placement: PlacementKind,
}
impl Technical {
    pub fn new(line: u32, kind: TechnicalKind, placement: PlacementKind) -> Self {
        Self {
            line,
            kind,
            placement,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TechnicalWithIntegerKind {
    Fingering,
    Fret,
    String,
}

#[derive(Debug, PartialEq, Clone)]
pub struct TechnicalWithInteger {
    pub line: u32,
    pub kind: TechnicalWithIntegerKind,
    pub value: i32,
    pub placement: PlacementKind,
}
impl TechnicalWithInteger {
    pub fn new(
        line: u32,
        kind: TechnicalWithIntegerKind,
        value: i32,
        placement: PlacementKind,
    ) -> Self {
        Self {
            line,
            kind,
            value,
            placement,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TechnicalWithStringKind {
    HammerOn,
    Handbell,
    OtherTechnical,
    Pluck,
    PullOff,
}

#[derive(Debug, PartialEq, Clone)]
pub struct TechnicalWithString {
    pub line: u32,
    pub kind: TechnicalWithStringKind,
    pub text: String,
    pub placement: PlacementKind,
}
impl TechnicalWithString {
    pub fn new(
        line: u32,
        kind: TechnicalWithStringKind,
        text: impl Into<String>,
        placement: PlacementKind,
    ) -> Self {
        Self {
            line,
            kind,
            text: text.into(),
            placement,
        }
    }
}
