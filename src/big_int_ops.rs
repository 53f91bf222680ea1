use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Neg,
};

use crate::big_num_cache::ONE;
use crate::big_num_constants::*;
use crate::sign::Sign;
use crate::BigInt;

/// Forwards the owned and mixed operand forms, plus the assigning form, to
/// the `&BigInt op &BigInt` implementation.
macro_rules! forward_binop {
    ($imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident) => {
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                <&BigInt as $imp<&BigInt>>::$method(&self, &rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                <&BigInt as $imp<&BigInt>>::$method(&self, rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                <&BigInt as $imp<&BigInt>>::$method(self, &rhs)
            }
        }

        impl $assign_imp<BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: BigInt) {
                *self = <&BigInt as $imp<&BigInt>>::$method(&*self, &rhs);
            }
        }

        impl $assign_imp<&BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: &BigInt) {
                *self = <&BigInt as $imp<&BigInt>>::$method(&*self, rhs);
            }
        }
    };
}

// 模长加减
impl BigInt {
    /// `|left| + |right|` carrying `sign`.
    fn signed_add(left: &BigInt, right: &BigInt, sign: Sign) -> BigInt {
        let len = left.limbs.len().max(right.limbs.len());
        let mut limbs = Vec::with_capacity(len + 1);
        let mut carry: u64 = 0;
        for i in 0..len {
            let mut current = carry;
            if let Some(&l) = left.limbs.get(i) {
                current += l as u64;
            }
            if let Some(&r) = right.limbs.get(i) {
                current += r as u64;
            }
            limbs.push((current & LIMB_MASK) as u32);
            carry = current >> BASE_BITS;
        }
        if carry > 0 {
            limbs.push(carry as u32);
        }
        BigInt::from_raw(limbs, sign)
    }

    /// `|big| - |little|` carrying `sign`; requires `|big| >= |little|`.
    fn signed_sub(big: &BigInt, little: &BigInt, sign: Sign) -> BigInt {
        let aligned = little.align(big.limbs.len() - little.limbs.len());
        let mut limbs = Vec::with_capacity(big.limbs.len());
        let mut borrow = false;
        for (&b, &l) in big.limbs.iter().zip(aligned.limbs.iter()) {
            let (difference, under) = b.overflowing_sub(l);
            let (difference, under_borrow) = difference.overflowing_sub(borrow as u32);
            limbs.push(difference);
            borrow = under || under_borrow;
        }
        debug_assert!(!borrow, "minuend smaller than subtrahend");
        BigInt::from_raw(limbs, sign)
    }
}

// 实现加法
impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        match (self.sign, rhs.sign) {
            (_, Sign::Zero) => self.clone(),
            (Sign::Zero, _) => rhs.clone(),
            (l, r) if l == r => BigInt::signed_add(self, rhs, l),
            _ => match self.compare_magnitude(rhs) {
                Ordering::Equal => BigInt::zero(),
                Ordering::Greater => BigInt::signed_sub(self, rhs, self.sign),
                Ordering::Less => BigInt::signed_sub(rhs, self, rhs.sign),
            },
        }
    }
}

forward_binop!(Add, add, AddAssign, add_assign);

// 实现减法
impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        match (self.sign, rhs.sign) {
            (_, Sign::Zero) => self.clone(),
            (Sign::Zero, _) => -rhs,
            (l, r) if l != r => BigInt::signed_add(self, rhs, l),
            _ => match self.compare_magnitude(rhs) {
                Ordering::Less => BigInt::signed_sub(rhs, self, -self.sign),
                Ordering::Equal | Ordering::Greater => BigInt::signed_sub(self, rhs, self.sign),
            },
        }
    }
}

forward_binop!(Sub, sub, SubAssign, sub_assign);

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        let BigInt { sign, limbs } = self;
        BigInt { sign: -sign, limbs }
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 自增自减
impl BigInt {
    /// `++x`
    pub fn increment(&mut self) -> &mut Self {
        *self = &*self + &*ONE;
        self
    }

    /// `x++`: returns the value held before the increment.
    pub fn post_increment(&mut self) -> BigInt {
        let previous = self.clone();
        self.increment();
        previous
    }

    /// `--x`
    pub fn decrement(&mut self) -> &mut Self {
        *self = &*self - &*ONE;
        self
    }

    /// `x--`: returns the value held before the decrement.
    pub fn post_decrement(&mut self) -> BigInt {
        let previous = self.clone();
        self.decrement();
        previous
    }
}

// 实现乘法
impl BigInt {
    /// Product of two values: single-limb operands take the short path,
    /// everything else recurses through Karatsuba.
    pub fn recursive_multiplication(left: &BigInt, right: &BigInt) -> BigInt {
        let sign = left.sign * right.sign;
        if sign == Sign::Zero {
            return BigInt::zero();
        }

        let mut product = match (left.limbs.len(), right.limbs.len()) {
            (1, _) => {
                let mut product = right.clone();
                product.short_mul(left.limbs[0]);
                product
            }
            (_, 1) => {
                let mut product = left.clone();
                product.short_mul(right.limbs[0]);
                product
            }
            _ => multiply_chunks(left.abs(), right.abs()),
        };
        product.sign = sign;
        product
    }
}

/// Smallest even length that holds both operands.
fn max_even(left_len: usize, right_len: usize) -> usize {
    let len = left_len.max(right_len);
    len + len % 2
}

/// Multiplies two positive values using the Karatsuba multiplication
/// algorithm. Both operands are padded to a common even length `n` and split
/// into halves of `n/2` limbs, so that
///
/// `x * y = z2 * B^n + (z1 - z0 - z2) * B^(n/2) + z0`
///
/// where `z0 = xl * yl`, `z2 = xh * yh` and `z1 = (xh + xl) * (yh + yl)`.
/// Three half-size products replace the four of the schoolbook method, for
/// a complexity of `O(n^1.585)`.
/// See: http://en.wikipedia.org/wiki/Karatsuba_algorithm
fn multiply_chunks(left: BigInt, right: BigInt) -> BigInt {
    let left_len = left.limbs.len();
    let right_len = right.limbs.len();
    tracing::trace!(left_limbs = left_len, right_limbs = right_len, "karatsuba split");

    let size = max_even(left_len, right_len);
    let half = size / 2;
    let left = left.align(size - left_len);
    let right = right.align(size - right_len);

    // xh/yh are the upper halves, xl/yl the lower halves
    let xh = left.trim_front(half);
    let xl = left.trim_back(half);
    let yh = right.trim_front(half);
    let yl = right.trim_back(half);

    let z0 = BigInt::recursive_multiplication(&xl, &yl);
    let z2 = BigInt::recursive_multiplication(&xh, &yh);
    let z1 = BigInt::recursive_multiplication(&(&xh + &xl), &(&yh + &yl));

    let mut middle = &(&z1 - &z0) - &z2;
    middle.shift(half);
    let mut high = z2;
    high.shift(size);

    let mut result = &(&z0 + &middle) + &high;
    result.trim_zeroes();
    result
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        BigInt::recursive_multiplication(self, rhs)
    }
}

forward_binop!(Mul, mul, MulAssign, mul_assign);

// 实现除法
impl BigInt {
    /// Largest `d` in `[0, B)` with `divisor * d <= window`.
    ///
    /// Requires `window < divisor * B`.
    pub(crate) fn bin_search_division(window: &BigInt, divisor: &BigInt) -> u32 {
        if window.compare_magnitude(divisor) == Ordering::Less {
            return 0;
        }
        // divisor * low <= window < divisor * high
        let mut low: u64 = 0;
        let mut high: u64 = BASE;
        let mut previous: Option<u64> = None;
        while high - low > 1 {
            let middle = low + (high - low) / 2;
            if previous == Some(middle) {
                tracing::debug!(middle, "binary search division stalled");
                break;
            }
            previous = Some(middle);

            let mut probe = divisor.abs();
            probe.short_mul(middle as u32);
            match probe.compare_magnitude(window) {
                Ordering::Greater => high = middle,
                Ordering::Less => low = middle,
                Ordering::Equal => return middle as u32,
            }
        }
        low as u32
    }

    /// Schoolbook long division, one quotient limb per step; requires
    /// `|left| > |right| > 0`.
    pub(crate) fn division(left: &BigInt, right: &BigInt) -> BigInt {
        let dividend = left.abs();
        let divisor = right.abs();
        let divisor_len = divisor.limbs.len();
        tracing::trace!(
            dividend_limbs = dividend.limbs.len(),
            divisor_limbs = divisor_len,
            "long division"
        );

        // limbs of the dividend below the window, still to be pulled in
        let mut pending = dividend.limbs.len() - divisor_len;
        let mut window = dividend.trim_front(pending);
        if window.compare_magnitude(&divisor) == Ordering::Less {
            // |left| > |right| puts at least one more limb below the window
            pending -= 1;
            window = dividend.trim_front(pending);
        }

        let mut digits: Vec<u32> = Vec::with_capacity(pending + 1);
        while pending > 0 {
            let digit = BigInt::bin_search_division(&window, &divisor);
            let mut subtrahend = divisor.clone();
            subtrahend.short_mul(digit);
            window = &window - &subtrahend;
            window.shift(1);
            pending -= 1;
            window.short_add(dividend.limbs[pending]);
            digits.push(digit);
        }
        digits.push(BigInt::bin_search_division(&window, &divisor));

        digits.reverse();
        BigInt::from_raw(digits, left.sign * right.sign)
    }

    /// `None` when `rhs` is zero.
    pub fn checked_div(&self, rhs: &BigInt) -> Option<BigInt> {
        if rhs.is_zero() {
            None
        } else {
            Some(self / rhs)
        }
    }

    /// `None` when `rhs` is zero.
    pub fn checked_rem(&self, rhs: &BigInt) -> Option<BigInt> {
        if rhs.is_zero() {
            None
        } else {
            Some(self % rhs)
        }
    }
}

/// Truncating division. Division by zero yields zero.
impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: &BigInt) -> BigInt {
        if rhs.is_zero() {
            tracing::debug!("division by zero yields zero");
            return BigInt::zero();
        }
        if self.is_zero() {
            return BigInt::zero();
        }
        match self.compare_magnitude(rhs) {
            Ordering::Less => BigInt::zero(),
            Ordering::Equal => BigInt::from_raw(vec![1], self.sign * rhs.sign),
            Ordering::Greater => BigInt::division(self, rhs),
        }
    }
}

forward_binop!(Div, div, DivAssign, div_assign);

// 实现求余
/// Remainder of the truncating division: zero or of the dividend's sign.
/// Remainder by zero yields zero.
impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: &BigInt) -> BigInt {
        if rhs.is_zero() {
            tracing::debug!("remainder by zero yields zero");
            return BigInt::zero();
        }
        if self.is_zero() || self == rhs {
            return BigInt::zero();
        }
        if self.compare_magnitude(rhs) == Ordering::Less {
            return self.clone();
        }
        let quotient = self / rhs;
        self - &(&quotient * rhs)
    }
}

forward_binop!(Rem, rem, RemAssign, rem_assign);

#[cfg(test)]
use crate::tests::schoolbook;

#[test]
fn test_add_sub() {
    let a: BigInt = "1000000000000000000".into();
    let b: BigInt = "999999999999999999".into();
    assert_eq!(&a - &b, BigInt::from(1_i64));
    assert_eq!(&b - &a, BigInt::from(-1_i64));
    assert_eq!(&a + &(-&b), BigInt::from(1_i64));
    assert_eq!(&(-&a) + &b, BigInt::from(-1_i64));
    assert_eq!(&(-&a) - &(-&b), BigInt::from(-1_i64));

    let max: BigInt = "340282366920938463463374607431768211455".into();
    let one = BigInt::from(1_i64);
    let sum = &max + &one;
    assert_eq!(sum.limbs(), &[0, 0, 0, 0, 1]);
    assert_eq!(&sum - &one, max);

    let c: BigInt = "-123456789123456789".into();
    let zero = &c + &BigInt::from("123456789123456789");
    assert!(zero.is_zero());
    assert_eq!(zero.sign(), Sign::Zero);
    assert_eq!(&c - &c, BigInt::zero());
    assert_eq!(&BigInt::zero() - &c, BigInt::from("123456789123456789"));
    assert_eq!(&c - &BigInt::zero(), c);
    assert_eq!(&c + &BigInt::from(-1_i64), BigInt::from("-123456789123456790"));
    assert_eq!(&BigInt::from(5_i64) - &BigInt::from(-7_i64), BigInt::from(12_i64));
    assert_eq!(&BigInt::from(-5_i64) - &BigInt::from(7_i64), BigInt::from(-12_i64));
}

#[test]
fn test_assign_forms() {
    let mut a = BigInt::from(10_i64);
    a += BigInt::from(5_i64);
    a -= &BigInt::from(3_i64);
    a *= BigInt::from(-4_i64);
    assert_eq!(a, BigInt::from(-48_i64));
    a /= &BigInt::from(5_i64);
    assert_eq!(a, BigInt::from(-9_i64));
    a %= BigInt::from(4_i64);
    assert_eq!(a, BigInt::from(-1_i64));
    assert_eq!(BigInt::from(3_i64) + &BigInt::from(4_i64), BigInt::from(7_i64));
    assert_eq!(&BigInt::from(3_i64) * BigInt::from(4_i64), BigInt::from(12_i64));
}

#[test]
fn test_neg() {
    let a: BigInt = "-42".into();
    assert_eq!(-&a, BigInt::from(42_i64));
    assert_eq!(-BigInt::zero(), BigInt::zero());
    assert_eq!((-BigInt::zero()).sign(), Sign::Zero);
    let min = -BigInt::from(i64::MIN);
    assert_eq!(min.to_string(), "9223372036854775808");
    assert_eq!(min, BigInt::from(9223372036854775808_u64));
}

#[test]
fn test_increment_decrement() {
    let mut a = BigInt::from(-1_i64);
    assert_eq!(a.post_increment(), BigInt::from(-1_i64));
    assert!(a.is_zero());
    a.increment();
    assert_eq!(a, BigInt::from(1_i64));
    assert_eq!(a.post_decrement(), BigInt::from(1_i64));
    a.decrement().decrement();
    assert_eq!(a, BigInt::from(-2_i64));

    let mut b = BigInt::from(u32::MAX);
    b.increment();
    assert_eq!(b.limbs(), &[0, 1]);
    b.decrement();
    assert_eq!(b.limbs(), &[u32::MAX]);
}

#[test]
fn test_mul() {
    let a: BigInt = "123456789012345678901234567890".into();
    let b: BigInt = "2".into();
    let c: BigInt = "246913578024691357802469135780".into();
    assert_eq!(&a * &b, c);
    assert_eq!(&b * &a, c);
    assert_eq!(&a * &BigInt::zero(), BigInt::zero());
    assert_eq!(&a * &BigInt::from(1_i64), a);
    assert_eq!(&(-&a) * &b, -&c);
    assert_eq!(&(-&a) * &(-&b), c);

    let a: BigInt = "10000000000000000".into();
    let b: BigInt = "30000000000000000".into();
    let result: BigInt = "300000000000000000000000000000000".into();
    assert_eq!(&a * &b, result);
}

#[test]
fn test_mul_karatsuba() {
    let a: BigInt = concat!(
        "1869453311573993456634306574393586908889230632398541952520898688168215923527",
        "7176197057068536250224262194068484309584118170511105189909575048793518893185",
        "7507727867495819246726159865769898262968667885355361791649192109358497086474",
        "7936932811373813774623125931906054980527575734607403872136608118256271348216",
        "6459826159031091038206102815727850329522533220259255633048039962519253047861",
    ).into();
    let b: BigInt = concat!(
        "1941985585973722703231205568065107548095173955236737997219992501686762366198",
        "8899906966022878224771090562441197514858280539017753153608429153170530889736",
        "6400496619142218693948014537641790214007434607050498425882666156551281363510",
    ).into();
    let expected = BigInt::from_raw(schoolbook(a.limbs(), b.limbs()), Sign::Positive);
    assert_eq!(&a * &b, expected);
    assert_eq!(&b * &a, expected);
    assert_eq!(&(-&a) * &b, -&expected);

    // carries out of the half sums
    let all_ones = BigInt::from_raw(vec![u32::MAX; 7], Sign::Positive);
    let expected = BigInt::from_raw(schoolbook(all_ones.limbs(), all_ones.limbs()), Sign::Positive);
    assert_eq!(&all_ones * &all_ones, expected);
}

#[test]
fn test_bin_search_division() {
    let divisor = BigInt::from(7_u64 << 32);
    let mut window = divisor.clone();
    window.short_mul(123_456);
    assert_eq!(BigInt::bin_search_division(&window, &divisor), 123_456);
    window.short_add(5);
    assert_eq!(BigInt::bin_search_division(&window, &divisor), 123_456);

    let one = BigInt::from(1_i64);
    let top = BigInt::from(u32::MAX);
    assert_eq!(BigInt::bin_search_division(&top, &one), u32::MAX);
    assert_eq!(BigInt::bin_search_division(&one, &top), 0);
}

#[test]
fn test_div() {
    let a = BigInt::from("120");
    let b = BigInt::from("13");
    assert_eq!(&a / &b, BigInt::from("9"));

    let a = BigInt::from("10000000000000000000000000000000000");
    let b = BigInt::from("1000");
    assert_eq!(&a / &b, BigInt::from("10000000000000000000000000000000"));

    let a = BigInt::from("124871287894782164876238905710532895792830741278950327951074309571023759712087492109591287094780219747214567876543245678976547897654367543567654678987654321456789087654325678908765432567890876543245678908765432567890876543876543245678907654356789");
    let b = BigInt::from("5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376");
    let c = BigInt::from("21988300642263136800048566126805476040703295625345756336585704044222781621158596876349726562910906651562104831721609088222205401883168960593370061500432215");
    assert_eq!(&a / &b, c);

    assert_eq!(&BigInt::from(-7_i64) / &BigInt::from(2_i64), BigInt::from(-3_i64));
    assert_eq!(&BigInt::from(7_i64) / &BigInt::from(-7_i64), BigInt::from(-1_i64));
    assert_eq!(&BigInt::from(3_i64) / &BigInt::from(-7_i64), BigInt::zero());
    assert_eq!(&BigInt::from(3_i64) / &BigInt::zero(), BigInt::zero());
    assert_eq!(BigInt::from(3_i64).checked_div(&BigInt::zero()), None);
    assert_eq!(
        BigInt::from(-9_i64).checked_div(&BigInt::from(2_i64)),
        Some(BigInt::from(-4_i64))
    );
}

#[test]
fn test_div_window_needs_extra_limb() {
    // the top divisor-length window of the dividend is below the divisor
    let divisor = BigInt::from_raw(vec![0, u32::MAX], Sign::Positive);
    let dividend = BigInt::from_raw(vec![17, 3, 1], Sign::Positive);
    let quotient = &dividend / &divisor;
    let remainder = &dividend % &divisor;
    assert_eq!(&(&quotient * &divisor) + &remainder, dividend);
    assert!(remainder < divisor);
    assert_eq!(quotient, BigInt::from(1_i64));
}

#[test]
fn test_mod() {
    let a: BigInt = "12".into();
    let b: BigInt = "8".into();
    assert_eq!(&a % &b, BigInt::from("4"));

    let a: BigInt = "10000000000000000".into();
    let b: BigInt = "10".into();
    assert_eq!(&a % &b, BigInt::zero());

    let a: BigInt = "23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245".into();
    let b: BigInt = "526738495607659438721653478560954837265378495607".into();
    let r: BigInt = "393707270751296419349581795408095683999332705291".into();
    assert_eq!(&a % &b, r);
    assert_eq!(&(-&a) % &b, -&r);
    assert_eq!(&a % &(-&b), r);

    assert_eq!(&BigInt::from(-7_i64) % &BigInt::from(2_i64), BigInt::from(-1_i64));
    assert_eq!(&BigInt::from(-3_i64) % &BigInt::from(7_i64), BigInt::from(-3_i64));
    assert_eq!(&BigInt::from(5_i64) % &BigInt::from(5_i64), BigInt::zero());
    assert_eq!(&BigInt::from(5_i64) % &BigInt::from(-5_i64), BigInt::zero());
    assert_eq!(&BigInt::from(5_i64) % &BigInt::zero(), BigInt::zero());
    assert_eq!(BigInt::from(5_i64).checked_rem(&BigInt::zero()), None);
}
