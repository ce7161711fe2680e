/// Radix of the digit store. Every stored digit is in `0..RADIX`.
pub const RADIX: u8 = 10;

/// Largest value served from the small-value cache.
pub const MAX_CONSTANT: usize = 16;

/// Base used by the bitwise operators.
pub const BINARY: u64 = 2;
