use lazy_static::*;

use crate::big_num_constants::*;
use crate::sign::Sign;
use crate::BigInt;

lazy_static! {
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] =
        std::array::from_fn(|n| BigInt::from_raw(vec![n as u32], Sign::Positive));
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] =
        std::array::from_fn(|n| BigInt::from_raw(vec![n as u32], Sign::Negative));
    pub static ref ONE: BigInt = POS_CACHE[1].clone();
}

/// Cached value for `magnitude <= MAX_CONSTANT`.
pub fn small_value(magnitude: u64, sign: Sign) -> Option<BigInt> {
    if magnitude > MAX_CONSTANT as u64 {
        return None;
    }
    let value = match sign {
        Sign::Zero => BigInt::zero(),
        _ if magnitude == 0 => BigInt::zero(),
        Sign::Positive => POS_CACHE[magnitude as usize].clone(),
        Sign::Negative => NEG_CACHE[magnitude as usize].clone(),
    };
    Some(value)
}

#[test]
fn test_small_value() {
    assert_eq!(small_value(16, Sign::Negative).map(|v| v.to_string()), Some("-16".to_string()));
    assert_eq!(small_value(0, Sign::Positive), Some(BigInt::zero()));
    assert!(small_value(17, Sign::Positive).is_none());
}
