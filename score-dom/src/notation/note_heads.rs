use std::str::FromStr;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum NoteHeadKind {
    #[default]
    Default,
    AltDefault,
    Baroque,
    Neomensural,
    Mensural,
    Petrucci,
    Harmonic,
    HarmonicBlack,
    HarmonicMixed,
    Diamond,
    Cross,
    XCircle,
    Triangle,
    Slash,
}
impl ToString for NoteHeadKind {
    fn to_string(&self) -> String {
        match *self {
            Self::Default => "default".to_string(),
            Self::AltDefault => "altdefault".to_string(),
            Self::Baroque => "baroque".to_string(),
            Self::Neomensural => "neomensural".to_string(),
            Self::Mensural => "mensural".to_string(),
            Self::Petrucci => "petrucci".to_string(),
            Self::Harmonic => "harmonic".to_string(),
            Self::HarmonicBlack => "harmonic-black".to_string(),
            Self::HarmonicMixed => "harmonic-mixed".to_string(),
            Self::Diamond => "diamond".to_string(),
            Self::Cross => "cross".to_string(),
            Self::XCircle => "xcircle".to_string(),
            Self::Triangle => "triangle".to_string(),
            Self::Slash => "slash".to_string(),
        }
    }
}
impl FromStr for NoteHeadKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "altdefault" => Ok(Self::AltDefault),
            "baroque" => Ok(Self::Baroque),
            "neomensural" => Ok(Self::Neomensural),
            "mensural" => Ok(Self::Mensural),
            "petrucci" => Ok(Self::Petrucci),
            "harmonic" => Ok(Self::Harmonic),
            "harmonic-black" => Ok(Self::HarmonicBlack),
            "harmonic-mixed" => Ok(Self::HarmonicMixed),
            "diamond" => Ok(Self::Diamond),
            "cross" => Ok(Self::Cross),
            "xcircle" => Ok(Self::XCircle),
            "triangle" => Ok(Self::Triangle),
            "slash" => Ok(Self::Slash),
            x => Err(format!("not a note head style: {}", x)),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StemKind {
    Neutral,
    Up,
    Down,
    Double,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Stem {
    pub line: u32,
    pub kind: StemKind,
}
impl Stem {
    pub fn new(line: u32, kind: StemKind) -> Self {
        Self { line, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::NoteHeadKind;

    #[test]
    fn head_round_trip() {
        for head in [
            NoteHeadKind::Default,
            NoteHeadKind::HarmonicMixed,
            NoteHeadKind::XCircle,
        ] {
            assert_eq!(head.to_string().parse::<NoteHeadKind>(), Ok(head));
        }
        assert!("nonsense".parse::<NoteHeadKind>().is_err());
    }
}
