//! Analytic lens functions applied before the spiral transform
//!
//! Each lens is a pure map on the complex plane, evaluated with the
//! principal branch where the underlying function is multi-valued. The
//! set is closed: every supported lens is a variant here, and each
//! variant carries its own singularity policy rather than relying on a
//! shared guard.

use num_complex::Complex64;
use num_traits::Zero;

/// Complex analytic function applied to each sample point before the
/// spiral rotation and scaling
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Lens {
    /// Principal natural logarithm. The exact origin maps to a
    /// non-finite value that the index wrap treats as index 0.
    #[default]
    Log,
    /// Principal square root
    Sqrt,
    /// Squaring map z²
    Squared,
    /// Modulus |z| placed on the real axis
    Absolute,
    /// Regularized reciprocal 1/(z + [z=0]): the exact-zero sample is
    /// nudged to 1 before inversion so it stays finite. Only the exact
    /// zero is guarded; no other sample produces a pole.
    Inverse,
    /// Möbius-like map log((0.5z + 3)/(0.3z − 3)). The pole at z = 10
    /// and the numerator zero at z = −6 are unguarded and fall back to
    /// index 0 when sampled exactly.
    Mobius,
    /// Complex exponential. Overflow for large re(z) falls back to
    /// index 0.
    Exponential,
}

impl Lens {
    /// Returns all available lenses
    pub const fn all() -> &'static [Self] {
        &[
            Self::Log,
            Self::Sqrt,
            Self::Squared,
            Self::Absolute,
            Self::Inverse,
            Self::Mobius,
            Self::Exponential,
        ]
    }

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Log => "log(z)",
            Self::Sqrt => "√z",
            Self::Squared => "z²",
            Self::Absolute => "|z|",
            Self::Inverse => "1/z",
            Self::Mobius => "log((0.5z+3)/(0.3z-3))",
            Self::Exponential => "exp(z)",
        }
    }

    /// Name accepted on the command line
    pub const fn cli_name(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Sqrt => "sqrt",
            Self::Squared => "squared",
            Self::Absolute => "abs",
            Self::Inverse => "inverse",
            Self::Mobius => "mobius",
            Self::Exponential => "exp",
        }
    }

    /// Parse from a command-line name or numeric id
    pub fn from_cli_name(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "log" | "0" => Some(Self::Log),
            "sqrt" | "1" => Some(Self::Sqrt),
            "squared" | "square" | "2" => Some(Self::Squared),
            "abs" | "absolute" | "3" => Some(Self::Absolute),
            "inverse" | "inv" | "4" => Some(Self::Inverse),
            "mobius" | "5" => Some(Self::Mobius),
            "exp" | "exponential" | "6" => Some(Self::Exponential),
            _ => None,
        }
    }

    /// Apply the lens to one sample point
    pub fn apply(self, z: Complex64) -> Complex64 {
        match self {
            Self::Log => z.ln(),
            Self::Sqrt => z.sqrt(),
            Self::Squared => z * z,
            Self::Absolute => Complex64::new(z.norm(), 0.0),
            Self::Inverse => {
                // Mirror of the zero-test guard: 1/(z + [z==0])
                if z.is_zero() {
                    (z + 1.0).inv()
                } else {
                    z.inv()
                }
            }
            Self::Mobius => ((z * 0.5 + 3.0) / (z * 0.3 - 3.0)).ln(),
            Self::Exponential => z.exp(),
        }
    }
}
