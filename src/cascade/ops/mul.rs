use super::*;

impl<const N: usize> Cascade<N> {
  /// Multiplication: [two_prod] every pair of limbs whose combined order `i + j` still lands in
  /// the significand, accumulate products and errors exactly, and round.
  ///
  /// A product of limbs `a[i] * b[j]` has magnitude ~`|a·b| · 2^(-53(i+j))`; pairs with
  /// `i + j < N` contribute full split products, pairs with `i + j == N` sit right at the last
  /// limb's rounding boundary and are carried as plain doubles, and finer pairs are dropped.
  pub(crate) fn mul(self, rhs: Self) -> Self {
    let (p0, _) = two_prod(self.0[0], rhs.0[0]);
    if !p0.is_finite() {
      return Self::from_f64_raw(self.0[0] * rhs.0[0]);
    }

    // Worst case (N = 4): 10 split pairs + 1 folded tail = 21 terms.
    let mut terms = [0.0; 21];
    let mut len = 0;
    let mut tail = 0.0;
    for i in 0..N {
      // `j < N - i` is exactly `i + j < N`.
      for j in 0..N - i {
        let (p, e) = two_prod(self.0[i], rhs.0[j]);
        terms[len] = p;
        terms[len + 1] = e;
        len += 2;
      }
    }
    for i in 1..N {
      tail += self.0[i] * rhs.0[N - i];
    }
    terms[len] = tail;
    len += 1;

    Self::from_product_terms(&terms[..len], self.0[0] * rhs.0[0])
  }

  /// Squaring, cheaper than `self * self`: the diagonal uses [two_sqr] and each off-diagonal
  /// pair appears once, doubled (scaling by 2 is exact).
  pub fn sqr(self) -> Self {
    let (p0, _) = two_sqr(self.0[0]);
    if !p0.is_finite() {
      return Self::from_f64_raw(self.0[0] * self.0[0]);
    }

    let mut terms = [0.0; 21];
    let mut len = 0;
    let mut tail = 0.0;
    for i in 0..N {
      for j in i..N - i {
        if i == j {
          let (p, e) = two_sqr(self.0[i]);
          terms[len] = p;
          terms[len + 1] = e;
        } else {
          let (p, e) = two_prod(self.0[i], self.0[j]);
          terms[len] = 2.0 * p;
          terms[len + 1] = 2.0 * e;
        }
        len += 2;
      }
    }
    // Order-N pairs: the doubled (i, N-i) products plus, for even N, the (N/2)² diagonal.
    for i in 1..N {
      let j = N - i;
      if i < j {
        tail += 2.0 * self.0[i] * self.0[j];
      } else if i == j {
        tail += self.0[i] * self.0[i];
      }
    }
    terms[len] = tail;
    len += 1;

    Self::from_product_terms(&terms[..len], self.0[0] * self.0[0])
  }

  /// Scale by a plain double.
  pub(crate) fn mul_f64(self, rhs: f64) -> Self {
    let p0 = self.0[0] * rhs;
    if !p0.is_finite() {
      return Self::from_f64_raw(p0);
    }
    let mut terms = [0.0; 8];
    let mut len = 0;
    for i in 0..N {
      let (p, e) = two_prod(self.0[i], rhs);
      terms[len] = p;
      terms[len + 1] = e;
      len += 2;
    }
    Self::from_product_terms(&terms[..len], p0)
  }

  /// Scale by a power of two: exact, limb by limb. The caller guarantees `p` is a (finite)
  /// power of two.
  #[inline]
  pub(crate) fn mul_pwr2(mut self, p: f64) -> Self {
    debug_assert!(p != 0.0 && p.to_bits() & ((1 << 52) - 1) == 0);
    for limb in &mut self.0 {
      *limb *= p;
    }
    self
  }

  /// Scale by 2^k, limb by limb, exactly (modulo overflow/underflow at the extremes).
  pub(crate) fn ldexp(mut self, k: i32) -> Self {
    for limb in &mut self.0 {
      *limb = crate::eft::ldexp(*limb, k);
    }
    if !self.0[0].is_finite() {
      // Only the leading limb overflows; drop the now-meaningless tail to keep the
      // representation canonical.
      return Self::from_f64_raw(self.0[0]);
    }
    self
  }

  /// Sort the partial products canonically and renormalize, degrading to infinity (the exact
  /// result's magnitude is beyond MAX) if the expansion overflows internally.
  fn from_product_terms(terms: &[f64], native: f64) -> Self {
    let mut sorted = [0.0; 21];
    let sorted = &mut sorted[..terms.len()];
    sorted.copy_from_slice(terms);
    sorted.sort_unstable_by(|a, b| {
      b.abs().partial_cmp(&a.abs()).unwrap().then(b.partial_cmp(a).unwrap())
    });
    let mut exp = renorm::Expansion::new();
    for &t in sorted.iter() {
      exp.push(t);
    }
    let out: [f64; N] = exp.round_to();
    if out[0].is_finite() {
      Self(out)
    } else {
      Self::from_f64_raw(f64::INFINITY.copysign(native))
    }
  }
}

#[cfg(test)]
mod tests {
  use crate::{dd, td, qd, Cascade};

  mod mul { use super::super::super::mk_tests; mk_tests!{*, *=, 3} }

  #[test]
  fn exact_products() {
    assert_eq!(dd::from(1.5) * dd::from(2.0), dd::from(3.0));
    assert_eq!(td::from(-4.0) * td::from(0.25), td::NEG_ONE);
    assert_eq!(td::from(0.5) * td::PI, td::PI.mul_pwr2(0.5));
    // 0.1 * 0.1 is inexact in f64; dd holds the 106-bit product of the two *doubles* exactly,
    // so its leading limb is the f64 product.
    assert_eq!((dd::from(0.1) * dd::from(0.1)).to_f64(), 0.1 * 0.1);
    let (p, e) = crate::eft::two_prod(0.1, 0.1);
    assert_eq!((dd::from(0.1) * dd::from(0.1)).limbs(), [p, e]);
  }

  #[test]
  fn specials() {
    assert!((dd::NAN * dd::ONE).is_nan());
    assert_eq!(qd::INFINITY * qd::from(2.0), qd::INFINITY);
    assert_eq!(qd::INFINITY * qd::NEG_ONE, qd::NEG_INFINITY);
    assert!((qd::INFINITY * qd::ZERO).is_nan());
    assert_eq!(dd::MAX * dd::from(2.0), dd::INFINITY);
  }

  use proptest::prelude::*;
  use crate::cascade::rational::agrees_to_bits;
  use malachite::rational::Rational;

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn one_is_identity(a in qd::cases_proptest()) {
      prop_assert_eq!((a * qd::ONE).limbs(), a.limbs());
      prop_assert_eq!((qd::ONE * a).limbs(), a.limbs());
    }

    #[test]
    fn sqr_matches_mul(a in qd::cases_proptest()) {
      let exact = Rational::try_from(a).unwrap() * Rational::try_from(a).unwrap();
      prop_assert!(agrees_to_bits(a.sqr(), &exact, qd::PRECISION - 3));
      prop_assert!(crate::cascade::renorm::is_renormalized(&a.sqr()));
    }

    #[test]
    fn mul_f64_matches_mul(a in td::cases_proptest(), b in -1e300..1e300f64) {
      prop_assert_eq!(a.mul_f64(b).limbs(), (a * td::from(b)).limbs());
    }

    #[test]
    fn mul_pwr2_is_exact(a in qd::cases_proptest(), k in -64..64i32) {
      let p = 2f64.powi(k);
      let exact = Rational::try_from(a).unwrap()
        * Rational::try_from(Cascade::<4>::from(p)).unwrap();
      prop_assert_eq!(Rational::try_from(a.mul_pwr2(p)).unwrap(), exact);
      prop_assert_eq!(a.mul_pwr2(p).limbs(), a.ldexp(k).limbs());
    }
  }
}
