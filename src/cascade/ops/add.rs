use super::*;

impl<const N: usize> Cascade<N> {
  /// Exact-merge addition: collect the `2N` limbs of both operands, sort them canonically, push
  /// them through an [Expansion](renorm::Expansion), and round back to `N` limbs.
  ///
  /// The intermediate expansion is exact, so cancellation loses nothing: `a - a` is exactly
  /// zero, and a result that suffered massive cancellation is still accurate relative to
  /// *itself*. The canonical sort (decreasing magnitude, ties broken by value) makes the merge
  /// independent of operand order, so `a + b` and `b + a` are bit-identical.
  pub(crate) fn add(self, rhs: Self) -> Self {
    // Non-finite operands, and finite operands whose sum overflows, degrade to the native sum
    // of the leading limbs.
    let native = self.0[0] + rhs.0[0];
    if !native.is_finite() {
      return Self::from_f64_raw(native);
    }

    let mut terms = [0.0; 8];
    terms[..N].copy_from_slice(&self.0);
    terms[N..2 * N].copy_from_slice(&rhs.0);
    let terms = &mut terms[..2 * N];
    terms.sort_unstable_by(|a, b| {
      b.abs().partial_cmp(&a.abs()).unwrap().then(b.partial_cmp(a).unwrap())
    });

    let mut exp = renorm::Expansion::new();
    for &t in terms.iter() {
      exp.push(t);
    }
    let out: [f64; N] = exp.round_to();
    if out[0].is_finite() {
      Self(out)
    } else {
      // The exact sum rounds past MAX even though the leading limbs alone did not.
      Self::from_f64_raw(f64::INFINITY.copysign(native))
    }
  }

  #[inline]
  pub(crate) fn sub(self, rhs: Self) -> Self {
    self.add(-rhs)
  }
}
