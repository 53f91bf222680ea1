use std::ops::{Mul, Neg};

/// Sign of a [`BigInt`](crate::BigInt).
///
/// Variants are declared in ascending order so the derived `Ord` gives
/// `Negative < Zero < Positive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Sign {
    Negative,
    #[default]
    Zero,
    Positive,
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, other: Sign) -> Sign {
        match (self, other) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (Sign::Positive, Sign::Positive) | (Sign::Negative, Sign::Negative) => Sign::Positive,
            (Sign::Positive, Sign::Negative) | (Sign::Negative, Sign::Positive) => Sign::Negative,
        }
    }
}

#[test]
fn test_sign_table() {
    use Sign::*;
    assert_eq!(Negative * Negative, Positive);
    assert_eq!(Negative * Positive, Negative);
    assert_eq!(Positive * Negative, Negative);
    assert_eq!(Zero * Zero, Zero);
    assert_eq!(Zero * Negative, Zero);
    assert_eq!(-Zero, Zero);
    assert_eq!(-Negative, Positive);
    assert!(Negative < Zero && Zero < Positive);
}
