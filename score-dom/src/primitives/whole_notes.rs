use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

use fraction::Fraction;

/// A musical duration or position, expressed as a fraction of a whole note.
///
/// All arithmetic is exact. Results of accumulation are kept in lowest
/// terms by [WholeNotes::rationalised], so two durations compare equal
/// whenever they denote the same fraction of a whole note.
///
/// # Example
/// ```
/// use fraction::Fraction;
/// use score_dom::primitives::WholeNotes;
///
/// let quarter = WholeNotes::new(1, 4);
/// let sixth = WholeNotes::new(1, 6);
/// let sum = (quarter.clone() + sixth).rationalised();
/// assert_eq!(sum, WholeNotes::new(5, 12));
/// assert_eq!(WholeNotes::new(2, 8), quarter);
/// ```
#[derive(Debug, PartialEq, PartialOrd, Clone)]
pub struct WholeNotes {
    fraction: Fraction,
}
impl WholeNotes {
    pub fn new(num: u64, den: u64) -> Self {
        Self {
            fraction: Fraction::new(num, den),
        }
    }
    /// The "not yet known" sentinel. Every position and duration slot
    /// starts in this state, and the asserting setters of
    /// `MeasurePlacement` refuse to store it.
    pub fn unknown() -> Self {
        Self {
            fraction: Fraction::nan(),
        }
    }
    pub fn zero() -> Self {
        Self::new(0, 1)
    }
    pub fn is_unknown(&self) -> bool {
        self.fraction.is_nan()
    }
    pub fn get(&self) -> Fraction {
        self.fraction
    }

    /// Re-reduce to lowest terms.
    ///
    /// `Fraction` keeps results reduced on its own, but every place that
    /// accumulates durations calls this right after, so the contract does
    /// not silently depend on the backing type.
    pub fn rationalised(&self) -> Self {
        let (num, den) = match (self.fraction.numer(), self.fraction.denom()) {
            (Some(num), Some(den)) => (*num, *den),
            _ => return Self::unknown(),
        };
        let fraction = match self.fraction.is_sign_negative() {
            true => Fraction::new_neg(num, den),
            false => Fraction::new(num, den),
        };
        Self { fraction }
    }
}
impl Default for WholeNotes {
    fn default() -> Self {
        Self::unknown()
    }
}
impl From<Fraction> for WholeNotes {
    fn from(value: Fraction) -> Self {
        Self { fraction: value }
    }
}
impl Add for WholeNotes {
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            fraction: self.fraction + rhs.fraction,
        }
    }
    type Output = Self;
}
impl AddAssign for WholeNotes {
    fn add_assign(&mut self, rhs: Self) {
        self.fraction = self.fraction + rhs.fraction;
    }
}
impl Sub for WholeNotes {
    fn sub(self, rhs: Self) -> Self::Output {
        let frac = self.fraction - rhs.fraction;
        if frac.is_sign_negative() {
            panic!(
                "whole notes can not be negative. left: {}, right: {}, result: {}",
                self.fraction, rhs.fraction, frac
            );
        }
        Self { fraction: frac }
    }
    type Output = Self;
}
impl Mul<Fraction> for WholeNotes {
    fn mul(self, rhs: Fraction) -> Self::Output {
        Self {
            fraction: self.fraction * rhs,
        }
    }
    type Output = Self;
}
impl fmt::Display for WholeNotes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.is_unknown() {
            true => write!(f, "unset"),
            false => write!(f, "{}", self.fraction),
        }
    }
}

#[cfg(test)]
mod tests {
    use fraction::Fraction;

    use super::WholeNotes;

    #[test]
    fn whole_notes() {
        let a = WholeNotes::new(1, 4);
        let b = WholeNotes::from(Fraction::new(1u64, 4u64));
        assert_eq!(a, b);
        assert_eq!(a.clone() + b.clone(), WholeNotes::new(1, 2));
        assert_eq!(
            (WholeNotes::new(1, 6) + WholeNotes::new(1, 6) + WholeNotes::new(1, 6))
                .rationalised(),
            WholeNotes::new(1, 2)
        );
    }

    #[test]
    fn unknown_sentinel() {
        let u = WholeNotes::unknown();
        assert!(u.is_unknown());
        assert!(!WholeNotes::zero().is_unknown());
        assert_eq!(format!("{}", u), "unset");
    }

    #[test]
    #[should_panic]
    fn negative_sub() {
        let _ = WholeNotes::new(1, 4) - WholeNotes::new(1, 2);
    }

    #[test]
    fn scaled() {
        let display = WholeNotes::new(1, 4);
        let sounding = (display * Fraction::new(2u64, 3u64)).rationalised();
        assert_eq!(sounding, WholeNotes::new(1, 6));
    }
}
