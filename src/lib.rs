//! Big Integer \
//! This crate provides:
//! - [`BigInt`]: arbitrary-precision signed integers built from decimal text or machine
//!   integers, with `+ - * / %`, comparisons and decimal rendering. Multiplication uses
//!   Karatsuba, division a binary-search long division.
//! - [`stream`]: reading whitespace-delimited integers from any `BufRead`.
//!
//! Division and remainder by zero are defined to return zero; use
//! [`BigInt::checked_div`] / [`BigInt::checked_rem`] to detect them.

mod big_int;
mod big_int_ops;
mod big_num_cache;
mod big_num_constants;
pub mod error;
mod sign;
pub mod stream;

pub use big_int::BigInt;
pub use error::{Error, ParseBigIntError};
pub use sign::Sign;

#[cfg(test)]
mod tests;

#[cfg(test)]
mod lib_tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".into();
        let b: BigInt = "900000000000".into();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((&a % &b).to_string(), "100000000000");
    }
}
