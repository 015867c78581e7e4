use super::*;

use core::fmt::{Debug, Display, Formatter};

impl<const N: usize> Debug for Cascade<N> {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("Cascade").field(&self.0).finish()
  }
}

impl<const N: usize> Display for Cascade<N> {
  /// Scientific decimal notation, `-d.ddd…e±x`. As with `{:e}` on a float, the precision is the
  /// number of digits after the point; the default shows the width's full
  /// [DIGITS10](Cascade::DIGITS10) significant digits.
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    if self.is_nan() {
      return write!(f, "NaN");
    }
    let sign = if self.is_sign_negative() { "-" } else { "" };
    if self.is_infinite() {
      return write!(f, "{sign}inf");
    }
    if self.is_zero() {
      return write!(f, "{sign}0");
    }

    let precision = f.precision().unwrap_or(Self::DIGITS10 as usize - 1);
    let (digits, exp10) = self.to_digits(precision + 1);
    write!(f, "{sign}{}", digits[0])?;
    if digits.len() > 1 {
      write!(f, ".")?;
      for &d in &digits[1..] {
        write!(f, "{d}")?;
      }
    }
    write!(f, "e{exp10}")
  }
}

impl<const N: usize> Cascade<N> {
  /// Extract `sig` significant decimal digits of `|self|` (which must be finite and non-zero),
  /// rounded, together with the decimal exponent.
  ///
  /// The workhorse is repeated leading-digit extraction in full cascade precision: scale into
  /// `[1, 10)`, peel off the integer part, multiply the remainder by 10. The scaling power of
  /// ten is itself slightly rounded, so a digit can occasionally drift to -1 or 10; a fix-up
  /// pass ripples those into their neighbours before the final rounding.
  fn to_digits(&self, sig: usize) -> (Vec<u8>, i32) {
    debug_assert!(self.is_finite() && !self.is_zero());
    let mut exp10 = self.0[0].abs().log10().floor() as i32;
    // Scale in two half-power steps: 10^exp10 itself can overflow near the ends of the
    // exponent range (|exp10| > 308) even though the scaled value is fine.
    let half = exp10 / 2;
    let mut r = self.abs() / Self::from(10.0).powi(half) / Self::from(10.0).powi(exp10 - half);
    if r >= Self::from(10.0) {
      r = r.div_f64(10.0);
      exp10 += 1;
    } else if r < Self::ONE {
      r = r.mul_f64(10.0);
      exp10 -= 1;
    }

    // Two guard digits beyond the requested count: one absorbs a possible leading-zero shift,
    // the other decides the rounding.
    let n = sig + 2;
    let mut digits = vec![0i32; n];
    for digit in digits.iter_mut() {
      *digit = r.0[0] as i32;
      r = (r - Self::from(*digit as f64)).mul_f64(10.0);
    }

    // Fix out-of-range digits (borrow/carry into the neighbour).
    for i in (1..n).rev() {
      if digits[i] < 0 {
        digits[i] += 10;
        digits[i - 1] -= 1;
      } else if digits[i] > 9 {
        digits[i] -= 10;
        digits[i - 1] += 1;
      }
    }

    // A borrow can zero the leading digit; shift it out, otherwise drop the spare guard.
    if digits[0] == 0 {
      digits.remove(0);
      exp10 -= 1;
    } else {
      digits.pop();
    }

    // Round on the remaining guard digit.
    let m = digits.len();
    if digits[m - 1] >= 5 {
      digits[m - 2] += 1;
      for i in (1..m - 1).rev() {
        if digits[i] == 10 {
          digits[i] = 0;
          digits[i - 1] += 1;
        }
      }
    }
    digits.truncate(m - 1);

    // A carry out of the leading digit shifts the whole number.
    if digits[0] == 10 {
      digits[0] = 1;
      digits.insert(1, 0);
      digits.pop();
      exp10 += 1;
    }

    (digits.into_iter().map(|d| d as u8).collect(), exp10)
  }
}
