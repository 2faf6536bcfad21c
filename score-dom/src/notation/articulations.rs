use super::PlacementKind;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ArticulationKind {
    Accent,
    BreathMark,
    Caesura,
    DetachedLegato,
    Doit,
    Falloff,
    Plop,
    Scoop,
    Spiccato,
    Staccato,
    Staccatissimo,
    Stress,
    StrongAccent,
    Tenuto,
    Unstress,
}
impl ToString for ArticulationKind {
    fn to_string(&self) -> String {
        match self {
            Self::Accent => "accent".to_string(),
            Self::BreathMark => "breath-mark".to_string(),
            Self::Caesura => "caesura".to_string(),
            Self::DetachedLegato => "detached-legato".to_string(),
            Self::Doit => "doit".to_string(),
            Self::Falloff => "falloff".to_string(),
            Self::Plop => "plop".to_string(),
            Self::Scoop => "scoop".to_string(),
            Self::Spiccato => "spiccato".to_string(),
            Self::Staccato => "staccato".to_string(),
            Self::Staccatissimo => "staccatissimo".to_string(),
            Self::Stress => "stress".to_string(),
            Self::StrongAccent => "strong-accent".to_string(),
            Self::Tenuto => "tenuto".to_string(),
            Self::Unstress => "unstress".to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Articulation {
    pub line: u32,
    pub kind: ArticulationKind,
    pub placement: PlacementKind,
}
impl Articulation {
    pub fn new(line: u32, kind: ArticulationKind, placement: PlacementKind) -> Self {
        Self {
            line,
            kind,
            placement,
        }
    }
}
