use super::*;

impl<const N: usize> Cascade<N> {
  /// e^self.
  ///
  /// Strategy (QD-style): reduce to `r = (self - m·ln 2) / 2^9` with `m = round(self / ln 2)`,
  /// so `|r| ≤ ln 2 / 1024`; sum the Taylor series of `e^r - 1` (a handful of terms reach full
  /// precision at this magnitude); undo the scaling with nine applications of
  /// `e^(2x) - 1 = 2(e^x - 1) + (e^x - 1)²`; finally multiply by 2^m, limb-wise.
  pub fn exp(self) -> Self {
    if self.is_nan() {
      return self;
    }
    // Fast paths well past where e^x over-/underflows even the widest cascade (±∞ take the
    // same branches). The overflow point of a double is ≈709.78; inputs between it and the
    // cutoff overflow in the final `ldexp`, which canonicalizes them to ∞.
    if self.0[0] >= 710.0 {
      return Self::INFINITY;
    }
    if self.0[0] <= -710.0 {
      return Self::ZERO;
    }
    if self.is_zero() {
      return Self::ONE;
    }

    const K_LOG2: i32 = 9;
    let m = (self.0[0] / core::f64::consts::LN_2).round();
    let r = (self - Self::LN_2.mul_f64(m)).mul_pwr2(crate::eft::pow2(-K_LOG2));

    // Taylor for e^r - 1, term_{k+1} = term_k · r / (k + 1), starting at k = 1.
    let mut sum = r;
    let mut term = r;
    let mut k = 1.0;
    let threshold = Self::EPSILON * crate::eft::pow2(-K_LOG2);
    loop {
      k += 1.0;
      term = (term * r).div_f64(k);
      sum = sum + term;
      if term.0[0].abs() <= threshold || k > 32.0 {
        break;
      }
    }

    // Undo the 2^9 scaling: s ← 2s + s², nine times, still on e^x - 1 to preserve accuracy
    // while the value is near zero.
    for _ in 0..K_LOG2 {
      sum = sum.mul_pwr2(2.0) + sum.sqr();
    }
    (sum + Self::ONE).ldexp(m as i32)
  }

  /// 2^self.
  pub fn exp2(self) -> Self {
    (self * Self::LN_2).exp()
  }
}
