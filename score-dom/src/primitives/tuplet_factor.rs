use std::fmt;

use fraction::Fraction;

/// The actual:normal ratio of a tuplet: "3 notes in the time of 2" is
/// `TupletFactor::new(3, 2)`.
///
/// Both components are exact fractions: un-applying a containing tuplet's
/// factor divides component-wise and must not truncate. Nested tuplet
/// ratios arrive composed from the source encoding and are normalized
/// relative to the immediate container exactly once, via
/// [TupletFactor::unapply].
///
/// # Example
/// ```
/// use fraction::Fraction;
/// use score_dom::primitives::TupletFactor;
///
/// let outer = TupletFactor::new(3, 2);
/// let composed = TupletFactor::new(15, 8);
/// let inner = composed.unapply(&outer);
/// assert_eq!(inner.actual_notes(), Fraction::new(5u64, 1u64));
/// assert_eq!(inner.normal_notes(), Fraction::new(4u64, 1u64));
/// assert_eq!(inner.apply(&outer), composed);
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct TupletFactor {
    actual_notes: Fraction,
    normal_notes: Fraction,
}
impl TupletFactor {
    pub fn new(actual_notes: u64, normal_notes: u64) -> Self {
        assert!(
            actual_notes > 0 && normal_notes > 0,
            "tuplet factor components must be positive: {}:{}",
            actual_notes,
            normal_notes
        );
        Self {
            actual_notes: Fraction::from(actual_notes),
            normal_notes: Fraction::from(normal_notes),
        }
    }
    pub fn from_fractions(actual_notes: Fraction, normal_notes: Fraction) -> Self {
        Self {
            actual_notes,
            normal_notes,
        }
    }
    pub fn actual_notes(&self) -> Fraction {
        self.actual_notes
    }
    pub fn normal_notes(&self) -> Fraction {
        self.normal_notes
    }
    /// actual / normal: how much notated time is squeezed.
    pub fn ratio(&self) -> Fraction {
        self.actual_notes / self.normal_notes
    }
    /// normal / actual: multiply a display duration by this to obtain the
    /// sounding duration of a tuplet member.
    pub fn diminution(&self) -> Fraction {
        self.normal_notes / self.actual_notes
    }
    /// Divide this factor component-wise by the containing tuplet's one.
    pub fn unapply(&self, containing: &TupletFactor) -> Self {
        Self {
            actual_notes: self.actual_notes / containing.actual_notes,
            normal_notes: self.normal_notes / containing.normal_notes,
        }
    }
    /// Multiply back, the inverse of [TupletFactor::unapply].
    pub fn apply(&self, containing: &TupletFactor) -> Self {
        Self {
            actual_notes: self.actual_notes * containing.actual_notes,
            normal_notes: self.normal_notes * containing.normal_notes,
        }
    }
}
impl Default for TupletFactor {
    fn default() -> Self {
        Self::new(1, 1)
    }
}
impl fmt::Display for TupletFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.actual_notes, self.normal_notes)
    }
}

#[cfg(test)]
mod tests {
    use fraction::Fraction;

    use super::TupletFactor;

    #[test]
    fn unapply_is_exact() {
        let outer = TupletFactor::new(3, 2);
        let composed = TupletFactor::new(15, 8);
        let inner = composed.unapply(&outer);
        assert_eq!(inner.actual_notes(), Fraction::new(5u64, 1u64));
        assert_eq!(inner.normal_notes(), Fraction::new(4u64, 1u64));
    }

    #[test]
    fn unapply_then_apply_restores() {
        let outer = TupletFactor::new(5, 4);
        let composed = TupletFactor::new(15, 8);
        assert_eq!(composed.unapply(&outer).apply(&outer), composed);
    }

    #[test]
    fn fractional_components_survive() {
        // {5,4} inside {3,2}: components need not stay integral.
        let inner = TupletFactor::new(5, 4).unapply(&TupletFactor::new(3, 2));
        assert_eq!(inner.actual_notes(), Fraction::new(5u64, 3u64));
        assert_eq!(inner.normal_notes(), Fraction::new(2u64, 1u64));
    }

    #[test]
    #[should_panic]
    fn zero_component() {
        let _ = TupletFactor::new(0, 2);
    }
}
