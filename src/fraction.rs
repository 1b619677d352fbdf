use num_traits::{CheckedAdd, CheckedMul, One, Zero};
use std::{
    cmp::Ordering,
    convert::TryFrom,
    fmt,
    iter::{Product, Sum},
    mem,
    ops::{Add, AddAssign, Mul, MulAssign}
};

const OVERFLOW: &str = "integer overflow";

/// Find the greatest common divisor of two numbers. Signs are ignored, so the
/// result is never negative, and `gcd(0, y)` is `|y|`.
pub fn gcd(x: i32, y: i32) -> u32 {
    // https://en.wikipedia.org/wiki/Binary_GCD_algorithm
    let (mut x, mut y) = (x.unsigned_abs(), y.unsigned_abs());

    // Otherwise this will loop forever since 0 has no lowest set bit
    if x == 0 {
        return y;
    }
    if y == 0 {
        return x;
    }

    // gcd(4, 6) = gcd(2, 3) * 2
    let common = (x | y).trailing_zeros();
    x >>= x.trailing_zeros();

    loop {
        y >>= y.trailing_zeros();

        // Both are odd now, keep x <= y so the subtraction can't underflow
        if x > y {
            mem::swap(&mut x, &mut y);
        }

        y -= x;
        if y == 0 {
            break;
        }
    }

    x << common
}

/// An exact rational number. It's always kept in lowest terms with a
/// positive denominator, which means two fractions are equal exactly when
/// their numerators and denominators are.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: i32,
    denominator: i32
}
impl Default for Fraction {
    fn default() -> Self {
        Self::from(0)
    }
}
impl Fraction {
    /// Construct a new fraction instance, reduced to lowest terms.
    /// ```rust
    /// use fraction_types::Fraction;
    /// assert_eq!(Fraction::new(2, 6), Fraction::new(1, 3));
    /// assert_eq!(Fraction::new(3, -6).to_string(), "-1/2");
    /// ```
    ///
    /// ## Panics
    /// Panics if the denominator is 0, or if the result can't be represented
    /// with a positive denominator (`i32::MIN / -1`)
    pub fn new(numerator: i32, denominator: i32) -> Self {
        Self { numerator, denominator }.normalize().expect(OVERFLOW)
    }
    /// Construct a new fraction instance, but returns None if the denominator
    /// is 0 or on overflow.
    /// ```rust
    /// use fraction_types::Fraction;
    /// assert_eq!(Fraction::checked_new(4, 8), Some(Fraction::new(1, 2)));
    /// assert_eq!(Fraction::checked_new(1, 0), None);
    /// ```
    pub fn checked_new(numerator: i32, denominator: i32) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        Self { numerator, denominator }.normalize()
    }
    /// Return the numerator
    pub fn numerator(self) -> i32 {
        self.numerator
    }
    /// Return the denominator, which is always positive
    pub fn denominator(self) -> i32 {
        self.denominator
    }
    /// Calculates the decimal result of this fraction
    pub fn decimal(self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }

    /// Divide both parts by their greatest common divisor and move the sign
    /// to the numerator. Returns None on overflow.
    ///
    /// ## Panics
    /// Panics if the denominator is 0
    fn normalize(self) -> Option<Self> {
        assert_ne!(self.denominator, 0, "denominator is 0");
        let gcd = i64::from(gcd(self.numerator, self.denominator));
        let mut numerator = i64::from(self.numerator) / gcd;
        let mut denominator = i64::from(self.denominator) / gcd;
        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }
        Some(Self {
            numerator: i32::try_from(numerator).ok()?,
            denominator: i32::try_from(denominator).ok()?
        })
    }

    /// Calculates multiplication with an integer, but returns None on
    /// overflow
    pub fn checked_mul_int(mut self, i: i32) -> Option<Self> {
        self.numerator = self.numerator.checked_mul(i)?;
        self.normalize()
    }
    /// Calculates multiplication, but returns None on overflow
    pub fn checked_mul(mut self, other: Self) -> Option<Self> {
        self.numerator = self.numerator.checked_mul(other.numerator)?;
        self.denominator = self.denominator.checked_mul(other.denominator)?;
        self.normalize()
    }
    /// Calculates addition of an integer, but returns None on overflow.
    /// Never normalizes: n/d + i is (n + i*d)/d, which shares no factor with
    /// d when n/d didn't.
    pub fn checked_add_int(mut self, i: i32) -> Option<Self> {
        self.numerator = i.checked_mul(self.denominator)?.checked_add(self.numerator)?;
        Some(self)
    }
    /// Calculates addition, but returns None on overflow
    pub fn checked_add(mut self, other: Self) -> Option<Self> {
        let left = self.numerator.checked_mul(other.denominator)?;
        let right = other.numerator.checked_mul(self.denominator)?;
        self.numerator = left.checked_add(right)?;
        self.denominator = self.denominator.checked_mul(other.denominator)?;
        self.normalize()
    }
}
impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
    fn lt(&self, other: &Self) -> bool {
        // Denominators are positive, and the product of two i32 fits an i64
        i64::from(self.numerator) * i64::from(other.denominator)
            < i64::from(other.numerator) * i64::from(self.denominator)
    }
    fn gt(&self, other: &Self) -> bool {
        other < self
    }
    fn le(&self, other: &Self) -> bool {
        !(self > other)
    }
    fn ge(&self, other: &Self) -> bool {
        !(self < other)
    }
}
impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        if self < other {
            Ordering::Less
        } else if other < self {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
macro_rules! impl_from {
    ($($int:ident),*) => {
        $(impl From<$int> for Fraction {
            fn from(i: $int) -> Self {
                Self {
                    numerator: i.into(),
                    denominator: 1
                }
            }
        })*
    }
}
impl_from!(u8, u16, i8, i16, i32);

impl MulAssign<i32> for Fraction {
    fn mul_assign(&mut self, i: i32) {
        *self = self.checked_mul_int(i).expect(OVERFLOW);
    }
}
impl MulAssign for Fraction {
    fn mul_assign(&mut self, other: Self) {
        *self = self.checked_mul(other).expect(OVERFLOW);
    }
}
impl AddAssign<i32> for Fraction {
    fn add_assign(&mut self, i: i32) {
        *self = self.checked_add_int(i).expect(OVERFLOW);
    }
}
impl AddAssign for Fraction {
    fn add_assign(&mut self, other: Self) {
        *self = self.checked_add(other).expect(OVERFLOW);
    }
}

// Binary operators are a copy followed by the compound assignment, and the
// integer-on-the-left forms swap their operands.
macro_rules! impl_op {
    ($($trait:ident $fn:ident = ($op_assign:tt) for $rhs:ty),*) => {
        $(impl $trait<$rhs> for Fraction {
            type Output = Self;
            fn $fn(mut self, other: $rhs) -> Self {
                self $op_assign other;
                self
            }
        })*
        $(impl $trait<Fraction> for $rhs {
            type Output = Fraction;
            fn $fn(self, other: Fraction) -> Fraction {
                other.$fn(self)
            }
        })*
    }
}
impl_op! {
    Mul mul = (*=) for i32,
    Add add = (+=) for i32
}
impl Mul for Fraction {
    type Output = Self;
    fn mul(mut self, other: Self) -> Self {
        self *= other;
        self
    }
}
impl Add for Fraction {
    type Output = Self;
    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self::from(0)
    }
    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}
impl One for Fraction {
    fn one() -> Self {
        Self::from(1)
    }
    fn is_one(&self) -> bool {
        self.numerator == 1 && self.denominator == 1
    }
}
impl CheckedAdd for Fraction {
    fn checked_add(&self, other: &Self) -> Option<Self> {
        Fraction::checked_add(*self, *other)
    }
}
impl CheckedMul for Fraction {
    fn checked_mul(&self, other: &Self) -> Option<Self> {
        Fraction::checked_mul(*self, *other)
    }
}

impl Sum for Fraction {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, f| acc + f)
    }
}
impl<'a> Sum<&'a Fraction> for Fraction {
    fn sum<I: Iterator<Item = &'a Fraction>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
impl Product for Fraction {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, f| acc * f)
    }
}
impl<'a> Product<&'a Fraction> for Fraction {
    fn product<I: Iterator<Item = &'a Fraction>>(iter: I) -> Self {
        iter.copied().product()
    }
}
