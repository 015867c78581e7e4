use super::*;

/// An exact, fixed-capacity floating-point expansion (Shewchuk): a sum of doubles stored in
/// *increasing* magnitude order, pairwise non-overlapping, with no zero components.
///
/// Every arithmetic operation first accumulates its partial terms into one of these — the
/// accumulation is exact, so even total cancellation (`a - a`) comes out as exactly zero — and
/// then rounds back down to `N` limbs with [round_to](Self::round_to).
///
/// The capacity covers the worst case feeding it: a quad-double multiply pushes 21 terms, and
/// each push grows the expansion by at most one component.
pub(crate) struct Expansion {
  terms: [f64; Self::CAP],
  len: usize,
}

impl Expansion {
  const CAP: usize = 24;

  #[inline]
  pub(crate) fn new() -> Self {
    Self { terms: [0.0; Self::CAP], len: 0 }
  }

  /// Add `b` into the expansion exactly (`grow_expansion`): chain `b` through every component
  /// with [two_sum], keeping the errors and carrying the sum upward. Zero components are
  /// dropped along the way.
  pub(crate) fn push(&mut self, b: f64) {
    if b == 0.0 { return }
    debug_assert!(self.len < Self::CAP);
    let mut q = b;
    let mut k = 0;
    for i in 0..self.len {
      let (s, e) = two_sum(q, self.terms[i]);
      if e != 0.0 {
        self.terms[k] = e;
        k += 1;
      }
      q = s;
    }
    if q != 0.0 {
      self.terms[k] = q;
      k += 1;
    }
    self.len = k;
  }

  /// Round the expansion to `N` limbs (the QD renormalization): walk the components from most
  /// significant down, compacting adjacent ones with [quick_two_sum] and emitting a limb
  /// whenever a non-zero error splits off. Once `N - 1` limbs are out, everything left is
  /// strictly finer than the last limb; fold it in, finest first.
  pub(crate) fn round_to<const N: usize>(&self) -> [f64; N] {
    let mut out = [0.0; N];
    if self.len == 0 { return out }
    let mut k = 0;
    let mut s = self.terms[self.len - 1];
    for i in (0..self.len - 1).rev() {
      if k == N - 1 {
        let mut tail = 0.0;
        for j in 0..=i {
          tail += self.terms[j];
        }
        s += tail;
        break;
      }
      // `s` dominates every remaining component, so quick_two_sum applies.
      let (hi, lo) = quick_two_sum(s, self.terms[i]);
      if lo != 0.0 {
        out[k] = hi;
        k += 1;
        s = lo;
      } else {
        s = hi;
      }
    }
    out[k] = s;
    out
  }
}

impl<const N: usize> Cascade<N> {
  /// Renormalizing constructor: sum the given terms exactly, then round to `N` limbs. The terms
  /// may be in any order and may overlap.
  ///
  /// If an intermediate overflows (or a term is already non-finite), degrades to the native sum
  /// of the terms in `limb[0]`.
  pub(crate) fn from_terms(terms: &[f64]) -> Self {
    let mut native = 0.0;
    for &t in terms {
      native += t;
    }
    if !native.is_finite() {
      return Self::from_f64_raw(native);
    }
    let mut exp = Expansion::new();
    for &t in terms {
      exp.push(t);
    }
    Self(exp.round_to())
  }

  /// A cascade holding a bare double (including NaN/±∞) in the leading limb.
  #[inline]
  pub(crate) const fn from_f64_raw(x: f64) -> Self {
    let mut limbs = [0.0; N];
    limbs[0] = x;
    Self(limbs)
  }
}

/// Check the representation invariant: limbs in decreasing magnitude, adjacent limbs
/// non-overlapping (`|limb[i+1]| <= ulp(limb[i]) / 2`), zero and non-finite values canonical.
#[cfg(test)]
pub(crate) fn is_renormalized<const N: usize>(x: &Cascade<N>) -> bool {
  let limbs = x.limbs();
  if !limbs[0].is_finite() {
    return limbs[1..].iter().all(|&l| l == 0.0);
  }
  for i in 0..N - 1 {
    if limbs[i] == 0.0 {
      // A zero limb ends the cascade.
      if limbs[i + 1] != 0.0 { return false }
    } else if limbs[i + 1].abs() > crate::eft::ulp(limbs[i]) / 2.0 {
      return false;
    }
  }
  true
}
