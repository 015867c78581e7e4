//! Operation-count instrumentation.
//!
//! An [OpTally] is an explicit, injected counting context: wrap cascades in it with
//! [wrap](OpTally::wrap) and the arithmetic operators on the resulting [Counted] values tally
//! each add, sub, mul, div, and sqrt as they compute. There is no global state and no locking;
//! the counters use [Cell], so a tally belongs to one thread and costs nothing to bump.
//!
//! ```
//! use soft_cascade::{dd, instrument::OpTally};
//!
//! let tally = OpTally::new();
//! let x = tally.wrap(dd::from(2.0));
//! let y = (x * x + x).sqrt();
//! assert_eq!(y.value(), dd::from(6.0).sqrt());
//! assert_eq!(tally.snapshot().muls, 1);
//! assert_eq!(tally.snapshot().sqrts, 1);
//! ```

use core::cell::Cell;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::Cascade;

/// A plain snapshot of the counters of an [OpTally].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
  pub adds: u64,
  pub subs: u64,
  pub muls: u64,
  pub divs: u64,
  pub sqrts: u64,
}

/// Tallies cascade operations performed through [Counted] values borrowing it.
#[derive(Debug, Default)]
pub struct OpTally {
  adds: Cell<u64>,
  subs: Cell<u64>,
  muls: Cell<u64>,
  divs: Cell<u64>,
  sqrts: Cell<u64>,
}

impl OpTally {
  pub fn new() -> Self {
    Self::default()
  }

  /// Attach `value` to this tally; arithmetic on the result is counted.
  pub fn wrap<const N: usize>(&self, value: Cascade<N>) -> Counted<'_, N> {
    Counted { tally: self, value }
  }

  pub fn snapshot(&self) -> Counts {
    Counts {
      adds: self.adds.get(),
      subs: self.subs.get(),
      muls: self.muls.get(),
      divs: self.divs.get(),
      sqrts: self.sqrts.get(),
    }
  }

  pub fn reset(&self) {
    self.adds.set(0);
    self.subs.set(0);
    self.muls.set(0);
    self.divs.set(0);
    self.sqrts.set(0);
  }
}

/// A [Cascade] paired with the [OpTally] its operations are charged to.
#[derive(Debug, Clone, Copy)]
pub struct Counted<'a, const N: usize> {
  tally: &'a OpTally,
  value: Cascade<N>,
}

impl<const N: usize> Counted<'_, N> {
  /// Unwrap the carried value.
  pub fn value(self) -> Cascade<N> {
    self.value
  }

  pub fn sqrt(self) -> Self {
    self.tally.sqrts.set(self.tally.sqrts.get() + 1);
    Self { tally: self.tally, value: self.value.sqrt() }
  }
}

// Negation costs no floating-point operations, so it goes untallied.
impl<const N: usize> Neg for Counted<'_, N> {
  type Output = Self;
  fn neg(self) -> Self {
    Self { tally: self.tally, value: -self.value }
  }
}

/// Counted operators, both against another [Counted] and against a bare [Cascade] operand.
macro_rules! mk_counted_ops {
  ($trait:ident, $method:ident, $counter:ident) => {
    impl<'a, const N: usize> $trait for Counted<'a, N> {
      type Output = Counted<'a, N>;
      #[inline]
      fn $method(self, rhs: Counted<'a, N>) -> Counted<'a, N> {
        self.$method(rhs.value)
      }
    }

    impl<'a, const N: usize> $trait<Cascade<N>> for Counted<'a, N> {
      type Output = Counted<'a, N>;
      #[inline]
      fn $method(self, rhs: Cascade<N>) -> Counted<'a, N> {
        self.tally.$counter.set(self.tally.$counter.get() + 1);
        Counted { tally: self.tally, value: $trait::$method(self.value, rhs) }
      }
    }
  };
}

mk_counted_ops!{Add, add, adds}
mk_counted_ops!{Sub, sub, subs}
mk_counted_ops!{Mul, mul, muls}
mk_counted_ops!{Div, div, divs}
