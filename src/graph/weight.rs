use num_traits::{CheckedAdd, Zero};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

/// Numeric type usable as an edge weight.
///
/// Weights must be totally ordered so that the priority queue and the
/// relaxation step compare them exactly. Use `OrderedFloat<f64>` for real
/// valued weights.
pub trait Weight: Copy + Ord + Debug + Zero {
    /// Returns true if the value may be stored on an edge
    fn is_valid_weight(&self) -> bool {
        *self >= Self::zero()
    }

    /// Sum of two path lengths, `None` if it is not representable
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

impl_integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for OrderedFloat<$t> {
                // OrderedFloat sorts NaN above every number
                fn is_valid_weight(&self) -> bool {
                    !self.0.is_nan() && *self >= Self::zero()
                }

                // Overflow saturates to +inf, which still orders correctly
                fn checked_sum(self, other: Self) -> Option<Self> {
                    Some(self + other)
                }
            }
        )*
    };
}

impl_float_weight!(f32, f64);

/// Shortest known distance from the start node.
///
/// `Infinite` marks a node that is not reachable. Every finite distance orders
/// below `Infinite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Distance<W> {
    Finite(W),
    Infinite,
}

impl<W: Copy> Distance<W> {
    /// Returns true if the node is reachable
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns true if the node is unreachable
    pub fn is_infinite(&self) -> bool {
        matches!(self, Distance::Infinite)
    }

    /// Gets the finite value, if any
    pub fn finite(&self) -> Option<W> {
        match self {
            Distance::Finite(w) => Some(*w),
            Distance::Infinite => None,
        }
    }
}

impl<W> From<Option<W>> for Distance<W> {
    fn from(value: Option<W>) -> Self {
        match value {
            Some(w) => Distance::Finite(w),
            None => Distance::Infinite,
        }
    }
}

impl<W: Display> Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(w) => Display::fmt(w, f),
            Distance::Infinite => f.pad("∞"),
        }
    }
}
