//! # BigInt
//! Arbitrary-precision signed integers. The magnitude is stored as base `2^32`
//! limbs, least significant limb first, next to a three-valued [`Sign`].
//! # Example
//! ```
//! use big_integer::BigInt;
//!
//! let a: BigInt = "10000000000000".into();
//! let b: BigInt = "900000000000".into();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! ```
//!

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::big_num_cache::small_value;
use crate::big_num_constants::*;
use crate::error::ParseBigIntError;
use crate::sign::Sign;

/// Signed integer of unbounded size.
///
/// Every value is kept canonical: `limbs` is never empty, carries no
/// most-significant zero limbs, and zero is exactly `[0]` with [`Sign::Zero`].
#[derive(Debug, Clone)]
pub struct BigInt {
    pub(crate) sign: Sign,
    pub(crate) limbs: Vec<u32>,
}

// 表示与规范化
impl BigInt {
    /// Builds a value from raw limbs (least significant first) and restores
    /// the canonical form.
    pub(crate) fn from_raw(mut limbs: Vec<u32>, sign: Sign) -> BigInt {
        if limbs.is_empty() {
            limbs.push(0);
        }
        let mut value = BigInt { sign, limbs };
        value.trim_zeroes();
        value
    }

    pub fn zero() -> BigInt {
        BigInt { sign: Sign::Zero, limbs: vec![0] }
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive
    }

    pub fn abs(&self) -> BigInt {
        self.clone().abs_take()
    }

    fn abs_take(self) -> BigInt {
        let BigInt { sign, limbs } = self;
        let sign = match sign {
            Sign::Negative => Sign::Positive,
            other => other,
        };
        BigInt { sign, limbs }
    }

    /// Limbs of the magnitude, least significant first.
    pub fn limbs(&self) -> &[u32] {
        &self.limbs
    }

    /// Drops most-significant zero limbs; a vanished magnitude takes the
    /// zero sign.
    pub(crate) fn trim_zeroes(&mut self) {
        while self.limbs.len() > 1 && self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
        if self.is_zero() {
            self.sign = Sign::Zero;
        }
    }

    /// Copy padded with `length` zero limbs at the most-significant end.
    ///
    /// The copy is left untrimmed.
    pub(crate) fn align(&self, length: usize) -> BigInt {
        let mut aligned = self.clone();
        aligned.limbs.resize(self.limbs.len() + length, 0);
        aligned
    }

    /// Multiplies by `B^length` in place.
    pub(crate) fn shift(&mut self, length: usize) {
        if self.is_zero() || length == 0 {
            return;
        }
        self.limbs.splice(0..0, std::iter::repeat(0).take(length));
    }

    /// The value with its `length` least-significant limbs removed.
    pub(crate) fn trim_front(&self, length: usize) -> BigInt {
        if self.limbs.len() > length {
            BigInt::from_raw(self.limbs[length..].to_vec(), self.sign)
        } else {
            BigInt::zero()
        }
    }

    /// The value with its `length` most-significant limbs removed.
    pub(crate) fn trim_back(&self, length: usize) -> BigInt {
        let len = self.limbs.len();
        if len > length {
            BigInt::from_raw(self.limbs[..len - length].to_vec(), self.sign)
        } else {
            BigInt::zero()
        }
    }
}

// 单字运算
impl BigInt {
    /// Adds `value` to the magnitude.
    pub(crate) fn short_add(&mut self, value: u32) {
        let mut carry = value as u64;
        for limb in self.limbs.iter_mut() {
            if carry == 0 {
                break;
            }
            let current = *limb as u64 + carry;
            *limb = current as u32;
            carry = current >> BASE_BITS;
        }
        if carry > 0 {
            self.limbs.push(carry as u32);
        }
        if self.sign == Sign::Zero && value != 0 {
            self.sign = Sign::Positive;
        }
    }

    /// Multiplies the magnitude by `value`.
    pub(crate) fn short_mul(&mut self, value: u32) {
        let mut carry: u64 = 0;
        for limb in self.limbs.iter_mut() {
            let current = (*limb as u64) * (value as u64) + carry;
            *limb = (current & LIMB_MASK) as u32;
            carry = current >> BASE_BITS;
        }
        if carry > 0 {
            self.limbs.push(carry as u32);
        }
        self.trim_zeroes();
    }

    /// Divides the magnitude by `value` in place and returns the remainder.
    ///
    /// `value` must be non-zero.
    pub(crate) fn short_division_mod(&mut self, value: u32) -> u32 {
        let divisor = value as u64;
        let mut remainder: u64 = 0;
        for limb in self.limbs.iter_mut().rev() {
            let current = (remainder << BASE_BITS) | *limb as u64;
            *limb = (current / divisor) as u32;
            remainder = current % divisor;
        }
        self.trim_zeroes();
        remainder as u32
    }
}

// 实现打印
impl BigInt {
    /// Decimal digits of the magnitude, without sign.
    fn magnitude_to_decimal(&self) -> String {
        if self.is_zero() {
            return String::from("0");
        }
        let mut rest = self.abs();
        let mut digits: Vec<u8> = Vec::new();
        while !rest.is_zero() {
            let digit = rest.short_division_mod(DECIMAL_RADIX);
            digits.push(b'0' + digit as u8);
        }
        digits.iter().rev().map(|&d| d as char).collect()
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.magnitude_to_decimal())
    }
}

// 实现解析
impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(val: &str) -> Result<BigInt, ParseBigIntError> {
        let (negative, digits, offset) = match val.strip_prefix('-') {
            Some(rest) => (true, rest, 1),
            None => (false, val, 0),
        };
        if digits.is_empty() {
            return Err(ParseBigIntError::Empty);
        }

        let mut value = BigInt::zero();
        for (position, c) in digits.char_indices() {
            let digit = c.to_digit(DECIMAL_RADIX).ok_or(ParseBigIntError::InvalidDigit {
                digit: c,
                position: offset + position,
            })?;
            value.short_mul(DECIMAL_RADIX);
            value.short_add(digit);
        }

        if negative && !value.is_zero() {
            value.sign = Sign::Negative;
        }
        Ok(value)
    }
}

/// Unchecked parse: malformed text is a caller error and panics.
impl From<&str> for BigInt {
    fn from(val: &str) -> Self {
        match val.parse() {
            Ok(value) => value,
            Err(err) => panic!("invalid decimal integer {:?}: {}", val, err),
        }
    }
}

impl From<String> for BigInt {
    fn from(val: String) -> Self {
        BigInt::from(val.as_str())
    }
}

impl BigInt {
    fn value_of(magnitude: u64, sign: Sign) -> BigInt {
        if magnitude == 0 {
            return BigInt::zero();
        }
        if let Some(cached) = small_value(magnitude, sign) {
            return cached;
        }
        let low = magnitude as u32;
        let high = (magnitude >> BASE_BITS) as u32;
        let limbs = if high == 0 { vec![low] } else { vec![low, high] };
        BigInt { sign, limbs }
    }
}

impl From<i64> for BigInt {
    fn from(val: i64) -> Self {
        if val == 0 {
            BigInt::zero()
        } else if val == i64::MIN {
            BigInt::value_of(I64_MIN_MAGNITUDE, Sign::Negative)
        } else if val < 0 {
            BigInt::value_of((-val) as u64, Sign::Negative)
        } else {
            BigInt::value_of(val as u64, Sign::Positive)
        }
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u64, Sign::Positive)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::from(val as i64)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64);
impl_signed_to_big_int!(i8, i16, i32, isize);

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

// 实现大小比较
impl BigInt {
    pub(crate) fn compare_magnitude(&self, other: &BigInt) -> Ordering {
        let self_len = self.limbs.len();
        let other_len = other.limbs.len();

        if self_len != other_len {
            return self_len.cmp(&other_len);
        }

        for (a, b) in self.limbs.iter().rev().zip(other.limbs.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }

        Ordering::Equal
    }

    /// Three-way comparison behind every relational operator.
    pub fn compare(&self, other: &BigInt) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => {}
            ord => return ord,
        }
        match self.sign {
            Sign::Negative => self.compare_magnitude(other).reverse(),
            Sign::Zero | Sign::Positive => self.compare_magnitude(other),
        }
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other).is_eq()
    }
}
impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign.hash(state);
        self.limbs.hash(state);
    }
}

#[test]
fn test_from_i64() {
    let big = BigInt::from(12_i64);
    assert_eq!(big.limbs, vec![12]);
    assert_eq!(big.sign, Sign::Positive);

    let big = BigInt::from(-(1_i64 << 40) - 7);
    assert_eq!(big.limbs, vec![7, 1 << 8]);
    assert_eq!(big.sign, Sign::Negative);

    let big = BigInt::from(0_i64);
    assert_eq!(big.limbs, vec![0]);
    assert_eq!(big.sign, Sign::Zero);

    let min = BigInt::from(i64::MIN);
    assert_eq!(min.limbs, vec![0, 1 << 31]);
    assert_eq!(min.to_string(), "-9223372036854775808");
    assert_eq!(I64_MIN_MAGNITUDE, i64::MIN.unsigned_abs());

    assert_eq!(BigInt::from(u64::MAX).to_string(), "18446744073709551615");
    assert_eq!(BigInt::from(-3_i8).to_string(), "-3");
    assert_eq!(BigInt::from(4294967296_usize).limbs, vec![0, 1]);
}

#[test]
fn test_parse() {
    let a: BigInt = "123456789012345678901234567890".parse().unwrap();
    assert_eq!(a.to_string(), "123456789012345678901234567890");

    let zero: BigInt = "0".parse().unwrap();
    let neg_zero: BigInt = "-0".parse().unwrap();
    assert_eq!(zero, neg_zero);
    assert_eq!(neg_zero.sign, Sign::Zero);
    assert_eq!(neg_zero.to_string(), "0");

    let padded: BigInt = "-000123".parse().unwrap();
    assert_eq!(padded.to_string(), "-123");
    let zeros: BigInt = "000".parse().unwrap();
    assert_eq!(zeros.sign, Sign::Zero);
    assert_eq!(zeros.limbs, vec![0]);

    assert_eq!("".parse::<BigInt>(), Err(ParseBigIntError::Empty));
    assert_eq!("-".parse::<BigInt>(), Err(ParseBigIntError::Empty));
    assert_eq!(
        "12a4".parse::<BigInt>(),
        Err(ParseBigIntError::InvalidDigit { digit: 'a', position: 2 })
    );
    assert_eq!(
        "-1 2".parse::<BigInt>(),
        Err(ParseBigIntError::InvalidDigit { digit: ' ', position: 2 })
    );
    assert_eq!(
        "+5".parse::<BigInt>(),
        Err(ParseBigIntError::InvalidDigit { digit: '+', position: 0 })
    );
}

#[test]
#[should_panic(expected = "invalid decimal integer")]
fn test_from_str_unchecked_panics() {
    let _ = BigInt::from("1x");
}

#[test]
fn test_display_flags() {
    let a = BigInt::from(-42_i64);
    assert_eq!(format!("{:>6}", a), "   -42");
    assert_eq!(format!("{:+}", BigInt::from(42_i64)), "+42");
    assert_eq!(format!("{:05}", a), "-0042");
    assert_eq!(format!("{}", BigInt::zero()), "0");
}

#[test]
fn test_trim_align_shift() {
    let mut a = BigInt { sign: Sign::Positive, limbs: vec![5, 0, 0] };
    a.trim_zeroes();
    assert_eq!(a.limbs, vec![5]);

    let mut z = BigInt { sign: Sign::Positive, limbs: vec![0, 0] };
    z.trim_zeroes();
    assert_eq!(z.limbs, vec![0]);
    assert_eq!(z.sign, Sign::Zero);

    let aligned = a.align(2);
    assert_eq!(aligned.limbs, vec![5, 0, 0]);
    assert_eq!(a.limbs, vec![5]);

    let mut shifted = BigInt::from(7_i64);
    shifted.shift(2);
    assert_eq!(shifted.limbs, vec![0, 0, 7]);

    let mut zero = BigInt::zero();
    zero.shift(3);
    assert_eq!(zero.limbs, vec![0]);
}

#[test]
fn test_trim_front_back() {
    let a = BigInt::from_raw(vec![1, 2, 3, 4], Sign::Negative);
    assert_eq!(a.trim_front(1).limbs, vec![2, 3, 4]);
    assert_eq!(a.trim_front(1).sign, Sign::Negative);
    assert_eq!(a.trim_back(1).limbs, vec![1, 2, 3]);
    assert_eq!(a.trim_front(4), BigInt::zero());
    assert_eq!(a.trim_back(9), BigInt::zero());

    // the low half keeps no leading zero limbs
    let b = BigInt::from_raw(vec![9, 0, 0, 1], Sign::Positive);
    assert_eq!(b.trim_back(2).limbs, vec![9]);
    let c = BigInt::from_raw(vec![0, 0, 1], Sign::Positive).align(1);
    assert_eq!(c.trim_back(2), BigInt::zero());
}

#[test]
fn test_short_ops() {
    let mut a = BigInt::from(u32::MAX);
    a.short_add(1);
    assert_eq!(a.limbs, vec![0, 1]);

    let mut z = BigInt::zero();
    z.short_add(3);
    assert_eq!(z.sign, Sign::Positive);
    z.short_add(0);
    assert_eq!(z.limbs, vec![3]);

    let mut b = BigInt::from(u32::MAX);
    b.short_mul(u32::MAX);
    assert_eq!(b.limbs, vec![1, u32::MAX - 1]);
    b.short_mul(0);
    assert!(b.is_zero());
    assert_eq!(b.sign, Sign::Zero);

    let mut c = BigInt::from(u64::MAX);
    assert_eq!(c.short_division_mod(10), 5);
    assert_eq!(c.to_string(), "1844674407370955161");

    let mut d = BigInt::from(9_i64);
    assert_eq!(d.short_division_mod(10), 9);
    assert!(d.is_zero());
    assert_eq!(d.sign, Sign::Zero);
}

#[test]
fn test_compare() {
    let values: Vec<BigInt> = [
        "-18446744073709551616", "-4294967296", "-5", "-1", "0", "1", "5", "4294967296",
        "18446744073709551616",
    ]
    .iter()
    .map(|s| BigInt::from(*s))
    .collect();

    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(a.compare(b), i.cmp(&j), "{} vs {}", a, b);
            assert_eq!(a < b, i < j);
            assert_eq!(a <= b, i <= j);
            assert_eq!(a > b, i > j);
            assert_eq!(a >= b, i >= j);
            assert_eq!(a == b, i == j);
            assert_eq!(a != b, i != j);
        }
    }
}
