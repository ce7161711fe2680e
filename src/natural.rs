//! # Natural
//! Immutable arbitrary-precision natural numbers (including 0), stored as decimal digits,
//! least significant digit first.
//! # Example
//! ```
//! use big_natural::Natural;
//!
//! let a = Natural::from(17u32);
//! let b = Natural::from(5u32);
//! assert_eq!(&a + &b, 22u32);
//! assert_eq!(&a - &b, 12u32);
//! assert_eq!(&a * &b, 85u32);
//! assert_eq!(&a / &b, 3u32);
//! assert_eq!(&a % &b, 2u32);
//! assert_eq!(Natural::from(2u32).power(&Natural::from(10u32)), 1024u32);
//! assert_eq!(Natural::from(5u32) ^ Natural::from(3u32), 6u32);
//! ```

use std::cmp::Ordering;
use std::fmt::Display;
use std::iter::Sum;
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    BitXor, BitXorAssign,
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
};

use log::{debug, trace};
use num_traits::{CheckedDiv, CheckedRem, CheckedSub, One, Pow, Zero};

use crate::natural_cache::SMALL_CACHE;
use crate::natural_constants::*;
use crate::NaturalError;

macro_rules! trim_leading_zeros {
    ($vec: expr) => {
        while $vec.last() == Some(&0) {
            $vec.pop();
        }
    };
}

/// An arbitrary-precision natural number.
///
/// The digit vector is always canonical: no most significant zero digit, and zero is
/// the empty vector. Operators never mutate their operands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Natural {
    digits: Vec<u8>,
}

fn or_panic<T>(result: Result<T, NaturalError>) -> T {
    match result {
        Ok(val) => val,
        Err(err) => panic!("{}", err),
    }
}

// 实现构造
impl Natural {
    /// Wraps a digit vector that is already canonical.
    pub(crate) fn from_raw(digits: Vec<u8>) -> Self {
        Natural { digits }
    }

    fn from_digits(mut digits: Vec<u8>) -> Self {
        trim_leading_zeros!(digits);
        Natural { digits }
    }

    /// Builds a natural number from a machine integer.
    ///
    /// Fails with [`NaturalError::InvalidConstruction`] when `val` is negative.
    pub fn new(val: i64) -> Result<Natural, NaturalError> {
        Natural::try_from(val)
    }

    pub fn zero() -> Natural {
        Natural::default()
    }

    pub fn one() -> Natural {
        SMALL_CACHE[1].clone()
    }

    /// Little-endian view of the decimal digits. Empty for zero.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn is_one(&self) -> bool {
        self.digits == [1]
    }

    /// Returns the value as a `u64`, or `None` if it does not fit.
    pub fn to_u64(&self) -> Option<u64> {
        self.digits
            .iter()
            .rev()
            .try_fold(0u64, |acc, &d| acc.checked_mul(RADIX as u64)?.checked_add(d as u64))
    }

    fn value_of(mut val: u64) -> Natural {
        if val <= MAX_CONSTANT as u64 {
            return SMALL_CACHE[val as usize].clone();
        }
        let mut digits = Vec::with_capacity(20);
        while val > 0 {
            digits.push((val % RADIX as u64) as u8);
            val /= RADIX as u64;
        }
        Natural::from_raw(digits)
    }

    fn from_machine<T>(val: T) -> Natural
    where
        T: TryInto<Natural>,
        T::Error: Display,
    {
        match val.try_into() {
            Ok(n) => n,
            Err(err) => panic!("{}", err),
        }
    }
}

macro_rules! impl_unsigned_to_natural {
    ($($u: ty),*) => {
    $(
    impl From<$u> for Natural {
        fn from(val: $u) -> Self {
            Natural::value_of(val as u64)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_natural {
    ($($i: ty),*) => {
    $(
    impl TryFrom<$i> for Natural {
        type Error = NaturalError;

        fn try_from(val: $i) -> Result<Self, Self::Error> {
            if val < 0 {
                Err(NaturalError::InvalidConstruction(val as i64))
            } else {
                Ok(Natural::value_of(val as u64))
            }
        }
    }
    )*
    };
}

impl_unsigned_to_natural!(u8, u16, u32, usize, u64);
impl_signed_to_natural!(i8, i16, i32, isize, i64);

// 实现打印
impl Display for Natural {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.digits.is_empty() {
            return f.write_str("0");
        }
        let s: String = self
            .digits
            .iter()
            .rev()
            .map(|&d| char::from(b'0' + d))
            .collect();
        f.write_str(&s)
    }
}

// 实现大小比较
impl Natural {
    fn greater_than(&self, other: &Natural) -> bool {
        let self_len = self.digits.len();
        let other_len = other.digits.len();
        if self_len != other_len {
            return self_len > other_len;
        }

        for (a, b) in self.digits.iter().rev().zip(other.digits.iter().rev()) {
            if a != b {
                return a > b;
            }
        }
        false
    }
}

impl Ord for Natural {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            Ordering::Equal
        } else if self.greater_than(other) {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }
}

impl PartialOrd for Natural {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// A negative operand never equals a natural and is below all of them.
macro_rules! impl_cmp_with_int {
    ($($t: ty),*) => {
    $(
    impl PartialEq<$t> for Natural {
        fn eq(&self, other: &$t) -> bool {
            Natural::try_from(*other).map_or(false, |n| *self == n)
        }
    }

    impl PartialOrd<$t> for Natural {
        fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
            Some(Natural::try_from(*other).map_or(Ordering::Greater, |n| self.cmp(&n)))
        }
    }
    )*
    };
}

impl_cmp_with_int!(u8, u16, u32, usize, u64, i8, i16, i32, isize, i64);

// Owned and mixed operand forms, all delegating to `impl $imp<&Natural> for &Natural`.
macro_rules! forward_binop {
    (impl $imp: ident, $method: ident, $imp_assign: ident, $method_assign: ident) => {
        impl $imp<Natural> for Natural {
            type Output = Natural;

            fn $method(self, rhs: Natural) -> Self::Output {
                <&Natural as $imp<&Natural>>::$method(&self, &rhs)
            }
        }

        impl $imp<&Natural> for Natural {
            type Output = Natural;

            fn $method(self, rhs: &Natural) -> Self::Output {
                <&Natural as $imp<&Natural>>::$method(&self, rhs)
            }
        }

        impl $imp<Natural> for &Natural {
            type Output = Natural;

            fn $method(self, rhs: Natural) -> Self::Output {
                <&Natural as $imp<&Natural>>::$method(self, &rhs)
            }
        }

        impl $imp_assign<Natural> for Natural {
            fn $method_assign(&mut self, rhs: Natural) {
                *self = <&Natural as $imp<&Natural>>::$method(&*self, &rhs);
            }
        }

        impl $imp_assign<&Natural> for Natural {
            fn $method_assign(&mut self, rhs: &Natural) {
                *self = <&Natural as $imp<&Natural>>::$method(&*self, rhs);
            }
        }
    };
}

// Machine integer right-hand operands: convert, then delegate.
macro_rules! forward_int_binop {
    (impl $imp: ident, $method: ident, $imp_assign: ident, $method_assign: ident; $($t: ty),*) => {
    $(
        impl $imp<$t> for Natural {
            type Output = Natural;

            fn $method(self, rhs: $t) -> Self::Output {
                <&Natural as $imp<&Natural>>::$method(&self, &Natural::from_machine(rhs))
            }
        }

        impl $imp<$t> for &Natural {
            type Output = Natural;

            fn $method(self, rhs: $t) -> Self::Output {
                <&Natural as $imp<&Natural>>::$method(self, &Natural::from_machine(rhs))
            }
        }

        impl $imp_assign<$t> for Natural {
            fn $method_assign(&mut self, rhs: $t) {
                *self = <&Natural as $imp<&Natural>>::$method(&*self, &Natural::from_machine(rhs));
            }
        }
    )*
    };
}

// 实现加法
impl Add<&Natural> for &Natural {
    type Output = Natural;

    fn add(self, rhs: &Natural) -> Self::Output {
        if rhs.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return rhs.clone();
        }
        Natural::from_raw(Natural::add_digits(&self.digits, &rhs.digits))
    }
}

impl Natural {
    fn add_digits(x: &[u8], y: &[u8]) -> Vec<u8> {
        let len = x.len().max(y.len());
        let mut result = Vec::with_capacity(len + 1);
        let mut carry = 0u8;
        let mut i = 0;

        while i < len || carry != 0 {
            let sum = x.get(i).copied().unwrap_or(0) + y.get(i).copied().unwrap_or(0) + carry;
            result.push(sum % RADIX);
            carry = sum / RADIX;
            i += 1;
        }
        result
    }
}

forward_binop!(impl Add, add, AddAssign, add_assign);

impl Sum for Natural {
    fn sum<I: Iterator<Item = Natural>>(iter: I) -> Self {
        iter.fold(Natural::zero(), |acc, n| acc + n)
    }
}

impl<'a> Sum<&'a Natural> for Natural {
    fn sum<I: Iterator<Item = &'a Natural>>(iter: I) -> Self {
        iter.fold(Natural::zero(), |acc, n| acc + n)
    }
}

// 实现减法
impl Natural {
    /// `self - rhs`, or [`NaturalError::NegativeResult`] when `rhs > self`.
    pub fn try_sub(&self, rhs: &Natural) -> Result<Natural, NaturalError> {
        if rhs.greater_than(self) {
            return Err(NaturalError::NegativeResult);
        }

        let mut result = self.digits.clone();
        let mut borrow = 0u8;
        let mut i = 0;

        // self >= rhs, so the borrow dies out before running off the end
        while i < rhs.digits.len() || borrow != 0 {
            let subtrahend = rhs.digits.get(i).copied().unwrap_or(0) + borrow;
            if result[i] >= subtrahend {
                result[i] -= subtrahend;
                borrow = 0;
            } else {
                result[i] = result[i] + RADIX - subtrahend;
                borrow = 1;
            }
            i += 1;
        }
        Ok(Natural::from_digits(result))
    }
}

impl Sub<&Natural> for &Natural {
    type Output = Natural;

    fn sub(self, rhs: &Natural) -> Self::Output {
        or_panic(self.try_sub(rhs))
    }
}

forward_binop!(impl Sub, sub, SubAssign, sub_assign);

// 实现乘法
impl Mul<&Natural> for &Natural {
    type Output = Natural;

    fn mul(self, rhs: &Natural) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return Natural::zero();
        }
        if self.is_one() {
            return rhs.clone();
        }
        if rhs.is_one() {
            return self.clone();
        }
        Natural::from_digits(Natural::mul_digits(&self.digits, &rhs.digits))
    }
}

impl Natural {
    fn mul_digits(x: &[u8], y: &[u8]) -> Vec<u8> {
        let mut result = vec![0u8; x.len() + y.len()];
        let radix = RADIX as u32;

        for (i, &a) in x.iter().enumerate() {
            let mut carry = 0u32;
            let mut j = 0;
            while j < y.len() || carry != 0 {
                let b = y.get(j).copied().unwrap_or(0) as u32;
                let product = result[i + j] as u32 + a as u32 * b + carry;
                result[i + j] = (product % radix) as u8;
                carry = product / radix;
                j += 1;
            }
        }
        result
    }
}

forward_binop!(impl Mul, mul, MulAssign, mul_assign);

// 实现除法
impl Natural {
    /// `self / rhs`, or [`NaturalError::DivisionByZero`] when `rhs` is zero.
    pub fn try_div(&self, rhs: &Natural) -> Result<Natural, NaturalError> {
        if rhs.is_zero() {
            return Err(NaturalError::DivisionByZero);
        }
        if rhs.greater_than(self) {
            debug!("divisor {} exceeds dividend {}, quotient is 0", rhs, self);
            return Ok(Natural::zero());
        }
        if rhs == self {
            return Ok(Natural::one());
        }
        if rhs.is_one() {
            return Ok(self.clone());
        }
        Ok(Natural::long_division(self, rhs))
    }

    /// Schoolbook long division, most significant digit first.
    ///
    /// Preconditions: `divisor > 1` and `dividend > divisor`.
    fn long_division(dividend: &Natural, divisor: &Natural) -> Natural {
        let mut next = dividend.digits.len() - divisor.digits.len();
        let mut block = Natural::from_digits(dividend.digits[next..].to_vec());
        let mut quotient = Vec::with_capacity(next + 1);

        loop {
            let digit = match block.cmp(divisor) {
                Ordering::Less => 0,
                Ordering::Equal => {
                    block = Natural::zero();
                    1
                }
                Ordering::Greater => {
                    let (block_quotient, rest) = Natural::divide_by_subtraction(&block, divisor);
                    block = rest;
                    block_quotient.digits.first().copied().unwrap_or(0)
                }
            };
            trace!("long division: quotient digit {}, {} dividend digits left", digit, next);
            quotient.push(digit);

            if next == 0 {
                break;
            }
            next -= 1;
            block.shift_in(dividend.digits[next]);
        }

        quotient.reverse();
        Natural::from_digits(quotient)
    }

    /// Appends `digit` below the current least significant digit, i.e. `self * 10 + digit`.
    fn shift_in(&mut self, digit: u8) {
        self.digits.insert(0, digit);
        trim_leading_zeros!(self.digits);
    }

    /// Finds `(dividend / divisor, dividend % divisor)` by repeated addition of the divisor.
    fn divide_by_subtraction(dividend: &Natural, divisor: &Natural) -> (Natural, Natural) {
        let mut quotient = Natural::one();
        let mut accumulator = divisor.clone();
        while accumulator < *dividend {
            quotient.inc();
            accumulator += divisor;
        }

        let mut remainder = Natural::zero();
        if accumulator > *dividend {
            quotient.dec();
            remainder = dividend - &(&accumulator - divisor);
        }
        (quotient, remainder)
    }
}

impl Div<&Natural> for &Natural {
    type Output = Natural;

    fn div(self, rhs: &Natural) -> Self::Output {
        or_panic(self.try_div(rhs))
    }
}

forward_binop!(impl Div, div, DivAssign, div_assign);

// 实现求余
impl Natural {
    /// `self % rhs`, or [`NaturalError::DivisionByZero`] when `rhs` is zero.
    ///
    /// The remainder is recomputed as `self - (self / rhs) * rhs`.
    pub fn try_rem(&self, rhs: &Natural) -> Result<Natural, NaturalError> {
        if rhs.is_zero() {
            return Err(NaturalError::DivisionByZero);
        }
        if rhs.is_one() || rhs == self {
            return Ok(Natural::zero());
        }
        if rhs.greater_than(self) {
            return Ok(self.clone());
        }
        let quotient = self.try_div(rhs)?;
        self.try_sub(&(&quotient * rhs))
    }
}

impl Rem<&Natural> for &Natural {
    type Output = Natural;

    fn rem(self, rhs: &Natural) -> Self::Output {
        or_panic(self.try_rem(rhs))
    }
}

forward_binop!(impl Rem, rem, RemAssign, rem_assign);

forward_int_binop!(impl Add, add, AddAssign, add_assign; u8, u16, u32, usize, u64, i8, i16, i32, isize, i64);
forward_int_binop!(impl Sub, sub, SubAssign, sub_assign; u8, u16, u32, usize, u64, i8, i16, i32, isize, i64);
forward_int_binop!(impl Mul, mul, MulAssign, mul_assign; u8, u16, u32, usize, u64, i8, i16, i32, isize, i64);
forward_int_binop!(impl Div, div, DivAssign, div_assign; u8, u16, u32, usize, u64, i8, i16, i32, isize, i64);
forward_int_binop!(impl Rem, rem, RemAssign, rem_assign; u8, u16, u32, usize, u64, i8, i16, i32, isize, i64);

// 实现自增自减
impl Natural {
    /// Prefix increment.
    pub fn inc(&mut self) -> &mut Self {
        *self = &*self + &Natural::one();
        self
    }

    /// Prefix decrement. Fails on zero and leaves `self` untouched.
    pub fn try_dec(&mut self) -> Result<&mut Self, NaturalError> {
        *self = self.try_sub(&Natural::one())?;
        Ok(self)
    }

    /// Prefix decrement.
    ///
    /// # Panics
    /// When `self` is zero.
    pub fn dec(&mut self) -> &mut Self {
        or_panic(self.try_dec())
    }
}

// 实现乘方
impl Natural {
    /// Square-and-multiply exponentiation.
    pub fn power(&self, exponent: &Natural) -> Natural {
        if exponent.is_zero() {
            return Natural::one();
        }
        if exponent.is_one() {
            return self.clone();
        }

        let mut result = Natural::one();
        let mut base = self.clone();
        let mut exponent = exponent.clone();
        while !exponent.is_zero() {
            if exponent.digits[0] & 1 == 1 {
                result *= &base;
            }
            base = &base * &base;
            exponent /= 2u8;
        }
        result
    }
}

// 实现进制转换
impl Natural {
    /// Digits of `self` in `base`, least significant first, each as a `Natural`.
    /// Zero has no digits.
    pub fn to_base(&self, base: &Natural) -> Result<Vec<Natural>, NaturalError> {
        if *base < 2u8 {
            return Err(NaturalError::InvalidBase);
        }
        Ok(self.convert_to_base(base))
    }

    pub fn digit_count(&self, base: &Natural) -> Result<Natural, NaturalError> {
        Ok(Natural::from(self.to_base(base)?.len()))
    }

    pub fn digit_sum(&self, base: &Natural) -> Result<Natural, NaturalError> {
        Ok(self.to_base(base)?.into_iter().sum())
    }

    // base >= 2
    fn convert_to_base(&self, base: &Natural) -> Vec<Natural> {
        let mut value = self.clone();
        let mut result = Vec::new();

        while !value.is_zero() {
            let quotient = &value / base;
            let rest = &value - &(&quotient * base);
            result.push(rest);
            value = quotient;
        }
        trace!("{} has {} digits in base {}", self, result.len(), base);
        result
    }
}

// 实现位运算
impl Natural {
    fn bitwise(&self, rhs: &Natural, op: impl Fn(bool, bool) -> bool) -> Natural {
        let binary = Natural::from(BINARY);
        let mut lhs_bits = self.convert_to_base(&binary);
        let mut rhs_bits = rhs.convert_to_base(&binary);
        Natural::align_with_zeroes(&mut lhs_bits, &mut rhs_bits);

        let bits: Vec<bool> = lhs_bits
            .iter()
            .zip(&rhs_bits)
            .map(|(a, b)| op(a.is_one(), b.is_one()))
            .collect();
        Natural::from_binary_digits(&bits)
    }

    /// Pads the shorter digit sequence with zeros at the most significant end.
    fn align_with_zeroes(x: &mut Vec<Natural>, y: &mut Vec<Natural>) {
        let len = x.len().max(y.len());
        x.resize(len, Natural::zero());
        y.resize(len, Natural::zero());
    }

    /// Folds little-endian bits into a value; the weight doubles at each position.
    fn from_binary_digits(bits: &[bool]) -> Natural {
        let mut value = Natural::zero();
        let mut weight = Natural::one();
        for &bit in bits {
            if bit {
                value += &weight;
            }
            weight = &weight + &weight;
        }
        value
    }
}

impl BitXor<&Natural> for &Natural {
    type Output = Natural;

    fn bitxor(self, rhs: &Natural) -> Self::Output {
        self.bitwise(rhs, |a, b| a ^ b)
    }
}

impl BitAnd<&Natural> for &Natural {
    type Output = Natural;

    fn bitand(self, rhs: &Natural) -> Self::Output {
        self.bitwise(rhs, |a, b| a & b)
    }
}

impl BitOr<&Natural> for &Natural {
    type Output = Natural;

    fn bitor(self, rhs: &Natural) -> Self::Output {
        self.bitwise(rhs, |a, b| a | b)
    }
}

forward_binop!(impl BitXor, bitxor, BitXorAssign, bitxor_assign);
forward_binop!(impl BitAnd, bitand, BitAndAssign, bitand_assign);
forward_binop!(impl BitOr, bitor, BitOrAssign, bitor_assign);

// num-traits
impl Zero for Natural {
    fn zero() -> Self {
        Natural::default()
    }

    fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }
}

impl One for Natural {
    fn one() -> Self {
        SMALL_CACHE[1].clone()
    }
}

impl Pow<&Natural> for &Natural {
    type Output = Natural;

    fn pow(self, rhs: &Natural) -> Self::Output {
        self.power(rhs)
    }
}

impl Pow<Natural> for Natural {
    type Output = Natural;

    fn pow(self, rhs: Natural) -> Self::Output {
        self.power(&rhs)
    }
}

impl CheckedSub for Natural {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        self.try_sub(v).ok()
    }
}

impl CheckedDiv for Natural {
    fn checked_div(&self, v: &Self) -> Option<Self> {
        self.try_div(v).ok()
    }
}

impl CheckedRem for Natural {
    fn checked_rem(&self, v: &Self) -> Option<Self> {
        self.try_rem(v).ok()
    }
}

#[test]
fn test_from() {
    crate::tests::init();
    let n: Natural = 0u8.into();
    assert!(n.digits.is_empty());

    let n: Natural = 16u16.into();
    assert_eq!(n.digits, vec![6, 1]);

    let n: Natural = 1200u32.into();
    assert_eq!(n.digits, vec![0, 0, 2, 1]);

    let n = Natural::try_from(9_876_543_210i64).unwrap();
    assert_eq!(n.digits, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);

    let n = Natural::from(u64::MAX);
    assert_eq!(n.to_u64(), Some(u64::MAX));
}

#[test]
fn test_from_negative() {
    assert_eq!(Natural::try_from(-1i8), Err(NaturalError::InvalidConstruction(-1)));
    assert_eq!(Natural::new(-42), Err(NaturalError::InvalidConstruction(-42)));
    assert_eq!(Natural::new(42).unwrap(), 42u8);
}

#[test]
fn test_to_u64() {
    assert_eq!(Natural::zero().to_u64(), Some(0));
    assert_eq!(Natural::from(123456789110u64).to_u64(), Some(123456789110));
    let too_big = Natural::from(u64::MAX) + 1u8;
    assert_eq!(too_big.to_u64(), None);
}

#[test]
fn test_display() {
    assert_eq!(Natural::zero().to_string(), "0");
    assert_eq!(Natural::from(7u8).to_string(), "7");
    assert_eq!(Natural::from(1000200u32).to_string(), "1000200");
}

#[test]
fn test_greater_than() {
    let a = Natural::from(1000u32);
    let b = Natural::from(999u32);
    assert!(a.greater_than(&b));
    assert!(!b.greater_than(&a));
    assert!(!a.greater_than(&a));

    let c = Natural::from(1001u32);
    assert!(c.greater_than(&a));
    assert_eq!(a.cmp(&c), Ordering::Less);
    assert_eq!(c.cmp(&a), Ordering::Greater);
    assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
}

#[test]
fn test_cmp_with_int() {
    let a = Natural::from(50u8);
    assert!(a == 50i32);
    assert!(a != 51u64);
    assert!(a > 49u16);
    assert!(a >= 50usize);
    assert!(a < 51i64);
    assert!(a <= 50isize);
    assert!(a > -1i32);
    assert!(a != -50i32);
    assert!(Natural::zero() > -1i8);
}

#[test]
fn test_sub_trims() {
    let a = Natural::from(1000u32);
    let b = Natural::from(999u32);
    let d = &a - &b;
    assert_eq!(d.digits, vec![1]);

    let d = &a - &a;
    assert!(d.digits.is_empty());

    assert_eq!(b.try_sub(&a), Err(NaturalError::NegativeResult));
}

#[test]
fn test_mul_digits() {
    // carry must run past the end of the shorter operand
    assert_eq!(Natural::mul_digits(&[9, 9, 9], &[9, 9, 9]), vec![1, 0, 0, 8, 9, 9]);
    assert_eq!(Natural::mul_digits(&[5], &[2]), vec![0, 1]);
    assert_eq!(Natural::mul_digits(&[1, 1], &[1]), vec![1, 1, 0]);
}

#[test]
fn test_shift_in() {
    let mut n = Natural::zero();
    n.shift_in(0);
    assert!(n.is_zero());
    n.shift_in(4);
    assert_eq!(n, 4u8);
    n.shift_in(0);
    assert_eq!(n, 40u8);
    n.shift_in(2);
    assert_eq!(n, 402u16);
}

#[test]
fn test_divide_by_subtraction() {
    let (q, r) = Natural::divide_by_subtraction(&Natural::from(47u8), &Natural::from(5u8));
    assert_eq!(q, 9u8);
    assert_eq!(r, 2u8);

    let (q, r) = Natural::divide_by_subtraction(&Natural::from(45u8), &Natural::from(5u8));
    assert_eq!(q, 9u8);
    assert!(r.is_zero());

    let (q, r) = Natural::divide_by_subtraction(&Natural::from(130u8), &Natural::from(13u8));
    assert_eq!(q, 10u8);
    assert!(r.is_zero());
}

#[test]
fn test_long_division() {
    crate::tests::init();
    let q = Natural::long_division(&Natural::from(120u8), &Natural::from(13u8));
    assert_eq!(q, 9u8);

    // zero quotient digits in the middle
    let q = Natural::long_division(&Natural::from(1_000_005u32), &Natural::from(5u8));
    assert_eq!(q, 200_001u32);

    // block equal to the divisor
    let q = Natural::long_division(&Natural::from(252_525u32), &Natural::from(25u8));
    assert_eq!(q, 10_101u32);

    let q = Natural::long_division(&Natural::from(u64::MAX), &Natural::from(4_294_967_296u64));
    assert_eq!(q, u64::MAX / 4_294_967_296);
}

#[test]
fn test_rem_fast_paths() {
    let a = Natural::from(17u8);
    assert_eq!(a.try_rem(&Natural::one()).unwrap(), 0u8);
    assert_eq!(a.try_rem(&a).unwrap(), 0u8);
    assert_eq!(a.try_rem(&Natural::from(20u8)).unwrap(), 17u8);
    assert_eq!(a.try_rem(&Natural::zero()), Err(NaturalError::DivisionByZero));
}

#[test]
fn test_align_with_zeroes() {
    let mut x = vec![Natural::one()];
    let mut y = vec![Natural::one(), Natural::zero(), Natural::one()];
    Natural::align_with_zeroes(&mut x, &mut y);
    assert_eq!(x, vec![Natural::one(), Natural::zero(), Natural::zero()]);
    assert_eq!(y.len(), 3);

    let mut x = Vec::new();
    let mut y = Vec::new();
    Natural::align_with_zeroes(&mut x, &mut y);
    assert!(x.is_empty() && y.is_empty());
}

#[test]
fn test_from_binary_digits() {
    assert!(Natural::from_binary_digits(&[]).is_zero());
    assert!(Natural::from_binary_digits(&[false, false]).is_zero());
    assert_eq!(Natural::from_binary_digits(&[false, true, true]), 6u8);
    let bits = vec![true; 64];
    assert_eq!(Natural::from_binary_digits(&bits), u64::MAX);
}

#[test]
fn test_to_base() {
    let digits = Natural::from(255u8).to_base(&Natural::from(16u8)).unwrap();
    assert_eq!(digits, vec![Natural::from(15u8), Natural::from(15u8)]);

    let digits = Natural::from(6u8).to_base(&Natural::from(2u8)).unwrap();
    assert_eq!(digits, vec![Natural::zero(), Natural::one(), Natural::one()]);

    assert!(Natural::zero().to_base(&Natural::from(10u8)).unwrap().is_empty());
    assert_eq!(Natural::from(5u8).to_base(&Natural::one()), Err(NaturalError::InvalidBase));
    assert_eq!(Natural::from(5u8).to_base(&Natural::zero()), Err(NaturalError::InvalidBase));
}
