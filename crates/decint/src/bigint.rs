//! A signed integer of arbitrary size, stored as decimal digits

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// A single decimal digit, always in `0..=9`
pub type Digit = u8;

const BASE: Digit = 10;

/// A signed integer of arbitrary size.
///
/// The digits are stored least significant first, so `1203` is kept as `[3, 0, 2, 1]`. After
/// every operation, the value is normalized:
///
/// - there is at least one digit
/// - the most significant digit is not `0`, unless the whole value is zero
/// - zero is never negative
///
/// Values are immutable, every operation returns a new [BigInteger].
#[derive(Clone)]
pub struct BigInteger {
    negative: bool,
    digits: Cow<'static, [Digit]>,
}

impl BigInteger {
    pub const ZERO: BigInteger = Self::from_static(&[0]);
    pub const ONE: BigInteger = Self::from_static(&[1]);
    pub const TEN: BigInteger = Self::from_static(&[0, 1]);

    #[inline]
    const fn from_static(digits: &'static [Digit]) -> Self {
        Self {
            negative: false,
            digits: Cow::Borrowed(digits),
        }
    }

    /// Parse a decimal number, like `"1337"` or `"-42"`.
    ///
    /// Leading zeros are allowed and dropped, `"-0"` is zero. Anything but a single leading `-`
    /// and at least one ASCII digit is an [Error::InvalidFormat].
    pub fn new(text: &str) -> Result<Self> {
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidFormat(text.to_string()));
        }

        let digits: Vec<Digit> = body.bytes().rev().map(|b| b - b'0').collect();
        Ok(Self::from_parts(negative, digits))
    }

    /// Build a value from least significant first digits and restore the invariants.
    fn from_parts(negative: bool, mut digits: Vec<Digit>) -> Self {
        debug_assert!(digits.iter().all(|d| *d < BASE));
        while digits.len() > 1 && digits.last() == Some(&0) {
            digits.pop();
        }
        if digits.is_empty() {
            digits.push(0);
        }
        let zero = digits.len() == 1 && digits[0] == 0;
        Self {
            negative: negative && !zero,
            digits: Cow::Owned(digits),
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        significant(&self.digits).is_empty()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Amount of decimal digits, `0` counts as one digit.
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// The digits of the magnitude, least significant first.
    pub fn digits(&self) -> impl DoubleEndedIterator<Item = Digit> + '_ {
        self.digits.iter().copied()
    }

    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            digits: self.digits.clone(),
        }
    }

    /// The same magnitude with the other sign. Zero stays zero.
    pub fn negated(&self) -> Self {
        Self {
            negative: !self.negative && !self.is_zero(),
            digits: self.digits.clone(),
        }
    }

    /// `-1`, `0` or `1`, depending on the sign
    pub fn signum(&self) -> Self {
        if self.is_zero() {
            Self::ZERO
        } else {
            Self::from_parts(self.negative, vec![1])
        }
    }

    /// Three way comparison of the mathematical values.
    pub fn compare_to(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => cmp_magnitude(&self.digits, &other.digits),
            // the larger magnitude is the smaller number
            (true, true) => cmp_magnitude(&other.digits, &self.digits),
        }
    }

    /// Get the sum `self + other`
    ///
    /// If the signs differ, this is the subtraction `self - (-other)`.
    pub fn plus(&self, other: &Self) -> Self {
        if other.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return other.clone();
        }

        if self.negative == other.negative {
            Self::from_parts(self.negative, add_magnitudes(&self.digits, &other.digits))
        } else {
            self.minus(&other.negated())
        }
    }

    /// Get the difference `self - other`
    ///
    /// If the signs differ, this is the addition `self + (-other)`. Otherwise, the smaller
    /// magnitude is subtracted from the larger one and the sign is chosen afterwards.
    pub fn minus(&self, other: &Self) -> Self {
        if other.is_zero() {
            return self.clone();
        }
        if self.negative != other.negative {
            return self.plus(&other.negated());
        }

        match cmp_magnitude(&self.digits, &other.digits) {
            Ordering::Equal => Self::ZERO,
            Ordering::Greater => {
                Self::from_parts(self.negative, sub_magnitudes(&self.digits, &other.digits))
            }
            Ordering::Less => {
                Self::from_parts(!self.negative, sub_magnitudes(&other.digits, &self.digits))
            }
        }
    }

    /// Get the product `self * other`
    ///
    /// Plain long multiplication: the longer factor is multiplied with every digit of the
    /// shorter one, each partial product is shifted to its place and added to the total.
    pub fn times(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::ZERO;
        }

        let (longer, shorter) = if self.digits.len() >= other.digits.len() {
            (&self.digits, &other.digits)
        } else {
            (&other.digits, &self.digits)
        };

        let mut total: Vec<Digit> = vec![0];
        for (shift, &digit) in shorter.iter().enumerate() {
            if digit == 0 {
                continue;
            }
            total = add_magnitudes(&total, &partial_product(longer, digit, shift));
        }

        Self::from_parts(self.negative != other.negative, total)
    }

    /// Integer division. Not implemented, always fails with [Error::Unsupported].
    pub fn div(&self, _other: &Self) -> Result<Self> {
        Err(Error::Unsupported("division"))
    }

    /// Remainder of the integer division. Not implemented, always fails with
    /// [Error::Unsupported].
    pub fn rem(&self, _other: &Self) -> Result<Self> {
        Err(Error::Unsupported("remainder"))
    }

    /// Raise to the power of `exp`, with square and multiply.
    pub fn pow(&self, mut exp: u32) -> Self {
        let mut acc = Self::ONE;
        let mut base = self.clone();
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc.times(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.times(&base);
            }
        }
        acc
    }
}

/** Digit sequence helpers ****************************************************/

/// The digits without high order zeros. Zero has no significant digits.
#[inline]
fn significant(digits: &[Digit]) -> &[Digit] {
    let len = digits.iter().rposition(|d| *d != 0).map_or(0, |i| i + 1);
    &digits[..len]
}

fn cmp_magnitude(a: &[Digit], b: &[Digit]) -> Ordering {
    let (a, b) = (significant(a), significant(b));
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

fn add_magnitudes(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
    let width = a.len().max(b.len());
    let mut sum: Vec<Digit> = Vec::with_capacity(width + 1);
    let mut carry: Digit = 0;
    for i in 0..width {
        let mut digit = a.get(i).copied().unwrap_or(0) + b.get(i).copied().unwrap_or(0) + carry;
        carry = 0;
        if digit >= BASE {
            digit -= BASE;
            carry = 1;
        }
        sum.push(digit);
    }
    if carry > 0 {
        sum.push(carry);
    }
    sum
}

/// `minuend - subtrahend`, the magnitude of `minuend` must not be smaller.
fn sub_magnitudes(minuend: &[Digit], subtrahend: &[Digit]) -> Vec<Digit> {
    debug_assert_ne!(cmp_magnitude(minuend, subtrahend), Ordering::Less);
    let width = minuend.len().max(subtrahend.len());
    let mut difference: Vec<Digit> = Vec::with_capacity(width);
    let mut borrow: Digit = 0;
    for i in 0..width {
        let mut top = minuend.get(i).copied().unwrap_or(0);
        let bottom = subtrahend.get(i).copied().unwrap_or(0) + borrow;
        borrow = 0;
        if top < bottom {
            top += BASE;
            borrow = 1;
        }
        difference.push(top - bottom);
    }
    debug_assert_eq!(borrow, 0);
    difference
}

/// `factor * digit * 10^shift`
fn partial_product(factor: &[Digit], digit: Digit, shift: usize) -> Vec<Digit> {
    let mut product: Vec<Digit> = vec![0; shift];
    product.reserve(factor.len() + 1);
    let mut carry: Digit = 0;
    for &d in factor {
        // at most 9 * 9 + 8
        let value = d * digit + carry;
        product.push(value % BASE);
        carry = value / BASE;
    }
    if carry > 0 {
        product.push(carry);
    }
    product
}

/** Comparison ****************************************************************/

impl PartialEq for BigInteger {
    fn eq(&self, other: &Self) -> bool {
        self.compare_to(other) == Ordering::Equal
    }
}

impl Eq for BigInteger {}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other)
    }
}

impl Hash for BigInteger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let digits = significant(&self.digits);
        (self.negative && !digits.is_empty()).hash(state);
        digits.hash(state);
    }
}

/** Calculation stuff *********************************************************/

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $inner:ident) => {
        impl $imp<&BigInteger> for &BigInteger {
            type Output = BigInteger;
            fn $method(self, rhs: &BigInteger) -> BigInteger {
                self.$inner(rhs)
            }
        }

        impl $imp<BigInteger> for &BigInteger {
            type Output = BigInteger;
            fn $method(self, rhs: BigInteger) -> BigInteger {
                self.$inner(&rhs)
            }
        }

        impl $imp<&BigInteger> for BigInteger {
            type Output = BigInteger;
            fn $method(self, rhs: &BigInteger) -> BigInteger {
                self.$inner(rhs)
            }
        }

        impl $imp<BigInteger> for BigInteger {
            type Output = BigInteger;
            fn $method(self, rhs: BigInteger) -> BigInteger {
                self.$inner(&rhs)
            }
        }

        impl $assign_imp<&BigInteger> for BigInteger {
            fn $assign_method(&mut self, rhs: &BigInteger) {
                *self = self.$inner(rhs);
            }
        }

        impl $assign_imp<BigInteger> for BigInteger {
            fn $assign_method(&mut self, rhs: BigInteger) {
                *self = self.$inner(&rhs);
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign, plus);
forward_binop!(Sub, sub, SubAssign, sub_assign, minus);
forward_binop!(Mul, mul, MulAssign, mul_assign, times);

impl Neg for BigInteger {
    type Output = BigInteger;
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl Sum for BigInteger {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc.plus(&x))
    }
}

impl<'a> Sum<&'a BigInteger> for BigInteger {
    fn sum<I: Iterator<Item = &'a BigInteger>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc.plus(x))
    }
}

impl Product for BigInteger {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc.times(&x))
    }
}

impl<'a> Product<&'a BigInteger> for BigInteger {
    fn product<I: Iterator<Item = &'a BigInteger>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc.times(x))
    }
}

/** Text **********************************************************************/

impl FromStr for BigInteger {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for BigInteger {
    type Error = Error;
    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buf: String = self
            .digits
            .iter()
            .rev()
            .map(|d| char::from(b'0' + d))
            .collect();
        f.pad_integral(!self.negative, "", &buf)
    }
}

impl Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInteger({self})")
    }
}

impl Default for BigInteger {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Serialize for BigInteger {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'d> Deserialize<'d> for BigInteger {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'d>,
    {
        let text = String::deserialize(deserializer)?;
        Self::new(&text).map_err(de::Error::custom)
    }
}

/** From **********************************************************************/

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInteger {
            fn from(mut value: $t) -> Self {
                let mut digits: Vec<Digit> = Vec::new();
                loop {
                    digits.push((value % 10) as Digit);
                    value /= 10;
                    if value == 0 {
                        break;
                    }
                }
                Self::from_parts(false, digits)
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInteger {
            fn from(value: $t) -> Self {
                let magnitude = Self::from(value.unsigned_abs());
                if value < 0 {
                    magnitude.negated()
                } else {
                    magnitude
                }
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);
