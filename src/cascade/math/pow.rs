use super::*;

impl<const N: usize> Cascade<N> {
  /// Integer power by binary exponentiation; negative exponents via the reciprocal of the
  /// positive power. Follows the f64 conventions on edge cases (`0⁰ = 1`, `0⁻ⁿ = ±∞`).
  pub fn powi(self, n: i32) -> Self {
    if n == 0 {
      return Self::ONE;
    }
    if self.is_zero() && n < 0 {
      // 1/0 with the sign of 0^|n|: negative base and odd exponent give -∞.
      let sign = if self.is_sign_negative() && n % 2 != 0 { -1.0 } else { 1.0 };
      return Self::from_f64_raw(f64::INFINITY * sign);
    }

    let mut base = self;
    let mut exp = n.unsigned_abs();
    let mut acc = Self::ONE;
    while exp > 1 {
      if exp % 2 == 1 {
        acc = acc * base;
      }
      base = base.sqr();
      exp /= 2;
    }
    acc = acc * base;
    if n < 0 { acc.recip() } else { acc }
  }

  /// Arbitrary real power: `exp(n · ln self)`. Domain rules follow from [ln](Self::ln): a
  /// negative base yields NaN.
  pub fn powf(self, n: Self) -> Self {
    if n.is_zero() {
      return Self::ONE;
    }
    if self.is_zero() {
      return if n.is_sign_negative() { Self::INFINITY } else { Self::ZERO };
    }
    (n * self.ln()).exp()
  }
}
