use crate::primitives::WholeNotes;

use super::PlacementKind;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[allow(clippy::upper_case_acronyms)]
pub enum DynamicsKind {
    PPPPP,
    PPPP,
    PPP,
    PP,
    P,
    MP,
    MF,
    F,
    FF,
    FFF,
    FFFF,
    FFFFF,
    FP,
    SF,
    SFP,
    SFPP,
    SFZ,
    RF,
    RFZ,
}
impl ToString for DynamicsKind {
    fn to_string(&self) -> String {
        format!("{:?}", self).to_lowercase()
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Dynamics {
    pub line: u32,
    pub kind: DynamicsKind,
    pub placement: PlacementKind,
}
impl Dynamics {
    pub fn new(line: u32, kind: DynamicsKind, placement: PlacementKind) -> Self {
        Self {
            line,
            kind,
            placement,
        }
    }
}

/// Free-text dynamics the fixed vocabulary can not express.
#[derive(Debug, PartialEq, Clone)]
pub struct OtherDynamics {
    pub line: u32,
    pub text: String,
    pub placement: PlacementKind,
}
impl OtherDynamics {
    pub fn new(line: u32, text: impl Into<String>, placement: PlacementKind) -> Self {
        Self {
            line,
            text: text.into(),
            placement,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Words {
    pub line: u32,
    pub text: String,
    pub placement: PlacementKind,
}
impl Words {
    pub fn new(line: u32, text: impl Into<String>, placement: PlacementKind) -> Self {
        Self {
            line,
            text: text.into(),
            placement,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Segno {
    pub line: u32,
}
impl Segno {
    pub fn new(line: u32) -> Self {
        Self { line }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DalSegnoKind {
    DalSegno,
    DalSegnoAlFine,
    DalSegnoAlCoda,
}

/// A "D.S." jump mark. It keeps its own copy of the position in measure:
/// the note it hangs off propagates its position here (offset-adjusted by
/// the caller beforehand).
#[derive(Debug, PartialEq, Clone)]
pub struct DalSegno {
    pub line: u32,
    pub kind: DalSegnoKind,
    pub text: String,
    position_in_measure: WholeNotes,
}
impl DalSegno {
    pub fn new(line: u32, kind: DalSegnoKind, text: impl Into<String>) -> Self {
        Self {
            line,
            kind,
            text: text.into(),
            position_in_measure: WholeNotes::unknown(),
        }
    }
    pub fn position_in_measure(&self) -> &WholeNotes {
        &self.position_in_measure
    }
    pub fn set_position_in_measure(&mut self, value: WholeNotes) {
        assert!(
            !value.is_unknown(),
            "attempt to set an unknown position on a dal segno"
        );
        self.position_in_measure = value;
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Coda {
    pub line: u32,
}
impl Coda {
    pub fn new(line: u32) -> Self {
        Self { line }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Eyeglasses {
    pub line: u32,
}
impl Eyeglasses {
    pub fn new(line: u32) -> Self {
        Self { line }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Damp {
    pub line: u32,
}
impl Damp {
    pub fn new(line: u32) -> Self {
        Self { line }
    }
}

/// Beat-slash notation on a note or chord stem.
#[derive(Debug, PartialEq, Clone)]
pub struct Slash {
    pub line: u32,
}
impl Slash {
    pub fn new(line: u32) -> Self {
        Self { line }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum FermataKind {
    #[default]
    Normal,
    Angled,
    Square,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Fermata {
    pub line: u32,
    pub kind: FermataKind,
    pub placement: PlacementKind,
}
impl Fermata {
    pub fn new(line: u32, kind: FermataKind, placement: PlacementKind) -> Self {
        Self {
            line,
            kind,
            placement,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SyllableKind {
    Single,
    Begin,
    Middle,
    End,
}

/// One lyrics syllable, bound to the note it is sung on.
#[derive(Debug, PartialEq, Clone)]
pub struct Syllable {
    pub line: u32,
    pub kind: SyllableKind,
    pub text: String,
    pub stanza_number: String,
}
impl Syllable {
    pub fn new(
        line: u32,
        kind: SyllableKind,
        text: impl Into<String>,
        stanza_number: impl Into<String>,
    ) -> Self {
        Self {
            line,
            kind,
            text: text.into(),
            stanza_number: stanza_number.into(),
        }
    }
}
