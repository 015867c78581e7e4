use super::*;

/// Square root (Newton).
mod sqrt;

/// Exponential.
mod exp;

/// Natural, binary, and decimal logarithms.
mod log;

/// Sine, cosine, tangent.
mod trig;

/// Hyperbolic functions and their inverses.
mod hyperbolic;

/// Integer and real powers.
mod pow;
