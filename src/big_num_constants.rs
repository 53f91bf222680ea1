/// Radix of one limb.
pub const BASE: u64 = 1 << BASE_BITS;

pub const BASE_BITS: u32 = u32::BITS;

pub const LIMB_MASK: u64 = BASE - 1;

pub const DECIMAL_RADIX: u32 = 10;

/// `|i64::MIN|`, which does not fit in an `i64`.
pub const I64_MIN_MAGNITUDE: u64 = 9223372036854775808;

pub const MAX_CONSTANT: usize = 16;
