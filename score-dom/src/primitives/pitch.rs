use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, PartialOrd, Clone, Copy)]
pub enum DiatonicStep {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}
impl DiatonicStep {
    fn letter(&self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
            Self::E => "e",
            Self::F => "f",
            Self::G => "g",
        }
    }
}
impl FromStr for DiatonicStep {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" | "A" => Ok(Self::A),
            "b" | "B" => Ok(Self::B),
            "c" | "C" => Ok(Self::C),
            "d" | "D" => Ok(Self::D),
            "e" | "E" => Ok(Self::E),
            "f" | "F" => Ok(Self::F),
            "g" | "G" => Ok(Self::G),
            x => Err(format!("not a diatonic step: {}", x)),
        }
    }
}

/// Chromatic alteration in quarter-tone resolution.
#[derive(Debug, PartialEq, Eq, PartialOrd, Clone, Copy)]
pub enum Alteration {
    DoubleFlat,
    SesquiFlat,
    Flat,
    SemiFlat,
    Natural,
    SemiSharp,
    Sharp,
    SesquiSharp,
    DoubleSharp,
}
impl Alteration {
    /// Alteration in quarter-tone steps, -4..=4.
    pub fn quarter_tones(&self) -> i8 {
        match self {
            Self::DoubleFlat => -4,
            Self::SesquiFlat => -3,
            Self::Flat => -2,
            Self::SemiFlat => -1,
            Self::Natural => 0,
            Self::SemiSharp => 1,
            Self::Sharp => 2,
            Self::SesquiSharp => 3,
            Self::DoubleSharp => 4,
        }
    }
    pub fn from_quarter_tones(quarter_tones: i8) -> Option<Self> {
        match quarter_tones {
            -4 => Some(Self::DoubleFlat),
            -3 => Some(Self::SesquiFlat),
            -2 => Some(Self::Flat),
            -1 => Some(Self::SemiFlat),
            0 => Some(Self::Natural),
            1 => Some(Self::SemiSharp),
            2 => Some(Self::Sharp),
            3 => Some(Self::SesquiSharp),
            4 => Some(Self::DoubleSharp),
            _ => None,
        }
    }
    /// Alteration in semitones, where quarter tones round toward zero.
    pub fn from_semitones(semitones: i8) -> Option<Self> {
        Self::from_quarter_tones(semitones.checked_mul(2)?)
    }
}

/// The language used to spell pitch names in traces and downstream
/// sources. Selected through settings, never through process-wide state.
#[derive(
    Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize,
)]
pub enum PitchLanguage {
    #[default]
    Nederlands,
    English,
    Deutsch,
    Italiano,
    Francais,
}
impl PitchLanguage {
    fn suffix(&self, alteration: Alteration) -> &'static str {
        use Alteration::*;
        match self {
            Self::Nederlands => match alteration {
                DoubleFlat => "eses",
                SesquiFlat => "eseh",
                Flat => "es",
                SemiFlat => "eh",
                Natural => "",
                SemiSharp => "ih",
                Sharp => "is",
                SesquiSharp => "isih",
                DoubleSharp => "isis",
            },
            Self::English => match alteration {
                DoubleFlat => "ff",
                SesquiFlat => "tqf",
                Flat => "f",
                SemiFlat => "qf",
                Natural => "",
                SemiSharp => "qs",
                Sharp => "s",
                SesquiSharp => "tqs",
                DoubleSharp => "x",
            },
            Self::Deutsch => match alteration {
                DoubleFlat => "eses",
                SesquiFlat => "eseh",
                Flat => "es",
                SemiFlat => "eh",
                Natural => "",
                SemiSharp => "ih",
                Sharp => "is",
                SesquiSharp => "isih",
                DoubleSharp => "isis",
            },
            Self::Italiano => match alteration {
                DoubleFlat => "bb",
                SesquiFlat => "bsb",
                Flat => "b",
                SemiFlat => "sb",
                Natural => "",
                SemiSharp => "sd",
                Sharp => "d",
                SesquiSharp => "dsd",
                DoubleSharp => "dd",
            },
            Self::Francais => match alteration {
                DoubleFlat => "bb",
                SesquiFlat => "bsb",
                Flat => "b",
                SemiFlat => "sb",
                Natural => "",
                SemiSharp => "sd",
                Sharp => "d",
                SesquiSharp => "dsd",
                DoubleSharp => "dd",
            },
        }
    }
}

/// A pitch spelling in quarter-tone resolution, without octave.
///
/// # Example
/// ```
/// use score_dom::primitives::{
///     Alteration, DiatonicStep, PitchLanguage, QuarterTonesPitch,
/// };
///
/// let es = QuarterTonesPitch::new(DiatonicStep::E, Alteration::Flat);
/// assert_eq!(es.name(PitchLanguage::Nederlands), "es");
/// assert_eq!(es.name(PitchLanguage::English), "ef");
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct QuarterTonesPitch {
    pub step: DiatonicStep,
    pub alteration: Alteration,
}
impl QuarterTonesPitch {
    pub fn new(step: DiatonicStep, alteration: Alteration) -> Self {
        Self { step, alteration }
    }
    /// Build from a semitone alteration, as delivered by sources that
    /// can not express quarter tones.
    pub fn from_semitones(step: DiatonicStep, semitones: i8) -> Option<Self> {
        Some(Self {
            step,
            alteration: Alteration::from_semitones(semitones)?,
        })
    }
    pub fn name(&self, language: PitchLanguage) -> String {
        let letter = self.step.letter();
        let suffix = language.suffix(self.alteration);
        // Dutch and German contract "aes" to "as" and "ees" to "es".
        match (language, self.step, suffix.starts_with('e')) {
            (
                PitchLanguage::Nederlands | PitchLanguage::Deutsch,
                DiatonicStep::A | DiatonicStep::E,
                true,
            ) => format!("{}{}", letter, &suffix[1..]),
            _ => format!("{}{}", letter, suffix),
        }
    }
}

impl fmt::Display for QuarterTonesPitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name(PitchLanguage::default()))
    }
}

/// Scientific octave number; octave 4 holds middle C.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct Octave(pub i8);
impl fmt::Display for Octave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "o{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Alteration, DiatonicStep, PitchLanguage, QuarterTonesPitch,
    };

    #[test]
    fn names() {
        let cis = QuarterTonesPitch::new(DiatonicStep::C, Alteration::Sharp);
        assert_eq!(cis.name(PitchLanguage::Nederlands), "cis");
        assert_eq!(cis.name(PitchLanguage::English), "cs");
        assert_eq!(cis.name(PitchLanguage::Italiano), "cd");
        let bes = QuarterTonesPitch::new(DiatonicStep::B, Alteration::Flat);
        assert_eq!(bes.name(PitchLanguage::Nederlands), "bes");
        let aes = QuarterTonesPitch::new(DiatonicStep::A, Alteration::Flat);
        assert_eq!(aes.name(PitchLanguage::Nederlands), "as");
        let ees = QuarterTonesPitch::new(DiatonicStep::E, Alteration::DoubleFlat);
        assert_eq!(ees.name(PitchLanguage::Deutsch), "eses");
    }

    #[test]
    fn quarter_tones() {
        assert_eq!(Alteration::from_semitones(-1), Some(Alteration::Flat));
        assert_eq!(Alteration::from_semitones(2), Some(Alteration::DoubleSharp));
        assert_eq!(Alteration::from_semitones(3), None);
        assert_eq!(
            Alteration::from_quarter_tones(1),
            Some(Alteration::SemiSharp)
        );
        assert_eq!(Alteration::SesquiFlat.quarter_tones(), -3);
    }

    #[test]
    fn step_parse() {
        assert_eq!("e".parse::<DiatonicStep>(), Ok(DiatonicStep::E));
        assert!("h".parse::<DiatonicStep>().is_err());
    }
}
