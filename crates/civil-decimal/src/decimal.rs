//! Decimal - fixed-point numbers with explicit scale and rounding

use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::RoundingStrategy;

use crate::{DecimalError, DecimalResult};

/// Most fractional digits a decimal can carry
pub const MAX_SCALE: u32 = 28;

/// How to drop digits when a result has more than the target scale
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Away from zero
    Up,
    /// Toward zero (truncate)
    Down,
    /// Toward positive infinity
    Ceiling,
    /// Toward negative infinity
    Floor,
    /// Nearest neighbour, ties away from zero
    HalfUp,
    /// Nearest neighbour, ties toward zero
    HalfDown,
    /// Nearest neighbour, ties to the even neighbour (banker's rounding)
    #[default]
    HalfEven,
}

impl RoundingMode {
    fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::Up => RoundingStrategy::AwayFromZero,
            RoundingMode::Down => RoundingStrategy::ToZero,
            RoundingMode::Ceiling => RoundingStrategy::ToPositiveInfinity,
            RoundingMode::Floor => RoundingStrategy::ToNegativeInfinity,
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfDown => RoundingStrategy::MidpointTowardZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

const fn whole(n: u32) -> Decimal {
    Decimal(rust_decimal::Decimal::from_parts(n, 0, 0, false, 0))
}

/// Immutable fixed-point decimal
///
/// Equality, ordering and hashing are numeric: `1.0 == 1.00`. The scale
/// (number of fractional digits) is still kept and shows in `Display`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Decimal(rust_decimal::Decimal);

impl Decimal {
    pub const ZERO: Decimal = whole(0);
    pub const ONE: Decimal = whole(1);
    pub const TWO: Decimal = whole(2);
    pub const THREE: Decimal = whole(3);
    pub const FOUR: Decimal = whole(4);
    pub const FIVE: Decimal = whole(5);
    pub const SIX: Decimal = whole(6);
    pub const TEN: Decimal = whole(10);
    pub const TWELVE: Decimal = whole(12);
    pub const HUNDRED: Decimal = whole(100);

    /// `mantissa * 10^-scale`, e.g. `new(150, 2)` is `1.50`.
    pub fn new(mantissa: i64, scale: u32) -> DecimalResult<Self> {
        rust_decimal::Decimal::try_new(mantissa, scale)
            .map(Decimal)
            .map_err(|_| DecimalError::InvalidScale(scale))
    }

    /// Parse plain (`-12.50`) or scientific (`1.5e3`) notation.
    ///
    /// Empty input is zero; anything else that is not a number fails with
    /// [`DecimalError::Parse`].
    pub fn parse(input: &str) -> DecimalResult<Self> {
        if input.is_empty() {
            return Ok(Decimal::ZERO);
        }

        let parsed = if input.contains(['e', 'E']) {
            rust_decimal::Decimal::from_scientific(input)
        } else {
            rust_decimal::Decimal::from_str(input)
        };
        parsed.map(Decimal).map_err(|err| {
            tracing::debug!(input, %err, "decimal parse failed");
            DecimalError::Parse {
                input: input.to_string(),
                reason: err.to_string(),
            }
        })
    }

    /// Like [`Decimal::parse`], but unparseable input reads as zero.
    pub fn parse_or_zero(input: &str) -> Self {
        Decimal::parse(input).unwrap_or(Decimal::ZERO)
    }

    #[inline]
    pub fn value(self) -> rust_decimal::Decimal {
        self.0
    }

    /// Integer part, truncated toward zero. `None` outside `i64`.
    pub fn to_i64(self) -> Option<i64> {
        self.0.to_i64()
    }

    /// Integer part, truncated toward zero. `None` outside `i32`.
    pub fn to_i32(self) -> Option<i32> {
        self.0.to_i32()
    }

    /// Nearest `f64`; precision beyond 15-17 digits is lost.
    pub fn to_f64(self) -> f64 {
        // every 96-bit mantissa fits in an f64 exponent
        self.0.to_f64().unwrap_or_default()
    }

    // Arithmetic

    pub fn add(self, other: Decimal) -> DecimalResult<Self> {
        self.0
            .checked_add(other.0)
            .map(Decimal)
            .ok_or(DecimalError::Overflow)
    }

    pub fn subtract(self, other: Decimal) -> DecimalResult<Self> {
        self.0
            .checked_sub(other.0)
            .map(Decimal)
            .ok_or(DecimalError::Overflow)
    }

    pub fn multiply(self, other: Decimal) -> DecimalResult<Self> {
        self.0
            .checked_mul(other.0)
            .map(Decimal)
            .ok_or(DecimalError::Overflow)
    }

    /// Quotient at `self`'s scale, rounded half-even.
    pub fn divide(self, divisor: Decimal) -> DecimalResult<Self> {
        self.divide_with(divisor, RoundingMode::HalfEven)
    }

    /// Quotient at `self`'s scale, rounded with `mode`.
    ///
    /// `10 / 4` is `2` (half-even) while `10.0 / 4` is `2.5`.
    pub fn divide_with(self, divisor: Decimal, mode: RoundingMode) -> DecimalResult<Self> {
        if divisor.is_zero() {
            return Err(DecimalError::DivisionByZero);
        }
        let quotient = self
            .0
            .checked_div(divisor.0)
            .ok_or(DecimalError::Overflow)?;
        Decimal(quotient).with_scale(self.scale(), mode)
    }

    #[inline]
    pub fn abs(self) -> Self {
        Decimal(self.0.abs())
    }

    #[inline]
    pub fn negate(self) -> Self {
        -self
    }

    /// `self ^ exponent`; `x.pow(0)` is one.
    pub fn pow(self, exponent: u32) -> DecimalResult<Self> {
        let mut result = rust_decimal::Decimal::ONE;
        let mut base = self.0;
        let mut remaining = exponent;
        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result.checked_mul(base).ok_or(DecimalError::Overflow)?;
            }
            remaining >>= 1;
            if remaining > 0 {
                base = base.checked_mul(base).ok_or(DecimalError::Overflow)?;
            }
        }
        Ok(Decimal(result))
    }

    /// `self` percent of `base`, at the scale of `self * base`.
    pub fn percent_of(self, base: Decimal) -> DecimalResult<Self> {
        self.multiply(base)?.divide(Decimal::HUNDRED)
    }

    // Scale

    #[inline]
    pub fn scale(self) -> u32 {
        self.0.scale()
    }

    /// Same value with exactly `scale` fractional digits, rounded half-even.
    pub fn set_scale(self, scale: u32) -> DecimalResult<Self> {
        self.set_scale_with(scale, RoundingMode::HalfEven)
    }

    /// Same value with exactly `scale` fractional digits, rounded with
    /// `mode`. Scales above [`MAX_SCALE`] fail with
    /// [`DecimalError::InvalidScale`].
    pub fn set_scale_with(self, scale: u32, mode: RoundingMode) -> DecimalResult<Self> {
        if scale > MAX_SCALE {
            return Err(DecimalError::InvalidScale(scale));
        }
        self.with_scale(scale, mode)
    }

    fn with_scale(self, scale: u32, mode: RoundingMode) -> DecimalResult<Self> {
        let mut value = self.0.round_dp_with_strategy(scale, mode.strategy());
        if value.scale() < scale {
            // rescale stops early when the padded mantissa exceeds 96 bits
            value.rescale(scale);
            if value.scale() != scale {
                return Err(DecimalError::Overflow);
            }
        }
        Ok(Decimal(value))
    }

    // Sign

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self < Decimal::ZERO
    }

    /// Not negative. Zero counts as positive, as for
    /// `ExactDuration::is_positive`.
    #[inline]
    pub fn is_positive(self) -> bool {
        !self.is_negative()
    }

    // Comparison

    #[inline]
    pub fn is_greater_than(self, other: Decimal) -> bool {
        self > other
    }

    #[inline]
    pub fn is_greater_equal_to(self, other: Decimal) -> bool {
        self >= other
    }

    #[inline]
    pub fn is_less_than(self, other: Decimal) -> bool {
        self < other
    }

    #[inline]
    pub fn is_less_equal_to(self, other: Decimal) -> bool {
        self <= other
    }

    /// Larger of the two; `self` on a tie.
    pub fn max(self, other: Decimal) -> Self {
        if self >= other {
            self
        } else {
            other
        }
    }

    /// Smaller of the two; `other` on a tie.
    pub fn min(self, other: Decimal) -> Self {
        if self < other {
            self
        } else {
            other
        }
    }
}

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        Decimal(value.into())
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Decimal(value.into())
    }
}

impl From<rust_decimal::Decimal> for Decimal {
    fn from(value: rust_decimal::Decimal) -> Self {
        Decimal(value)
    }
}

impl From<Decimal> for rust_decimal::Decimal {
    fn from(value: Decimal) -> Self {
        value.0
    }
}

/// Keeps as many binary digits of the float as fit in 28 fractional
/// places, so `0.1` is not exactly `1/10`.
impl TryFrom<f64> for Decimal {
    type Error = DecimalError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(DecimalError::NotFinite(value.to_string()));
        }
        rust_decimal::Decimal::from_f64_retain(value)
            .map(Decimal)
            .ok_or(DecimalError::Overflow)
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::parse(s)
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    #[inline]
    fn neg(self) -> Self::Output {
        Decimal(-self.0)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({})", self.0)
    }
}
