use crate::graph::graph::Weight;
use serde::{Serialize, Serializer};
use std::fmt;

/// Shortest-path distance. `INFINITY` marks an unreachable node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(u64);

impl Distance {
    pub const ZERO: Distance = Distance(0);
    pub const INFINITY: Distance = Distance(u64::MAX);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn is_finite(self) -> bool {
        self != Self::INFINITY
    }

    pub fn value(self) -> Option<u64> {
        self.is_finite().then_some(self.0)
    }

    /// Saturates at `INFINITY`.
    pub fn add(self, weight: Weight) -> Self {
        if !self.is_finite() {
            return Self::INFINITY;
        }
        self.0
            .checked_add(weight)
            .map(Self)
            .unwrap_or(Self::INFINITY)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(v) => write!(f, "{}", v),
            None => write!(f, "unreachable"),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value() {
            Some(v) => serializer.serialize_u64(v),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_saturates() {
        assert_eq!(Distance::new(7), Distance::ZERO.add(7));
        assert_eq!(Distance::INFINITY, Distance::INFINITY.add(1));
        assert_eq!(Distance::INFINITY, Distance::new(u64::MAX - 1).add(5));
    }

    #[test]
    fn test_infinity_orders_last() {
        assert!(Distance::new(u64::MAX - 1) < Distance::INFINITY);
        assert_eq!(None, Distance::INFINITY.value());
        assert_eq!(Some(20), Distance::new(20).value());
    }

    #[test]
    fn test_display_and_json() {
        assert_eq!("20", Distance::new(20).to_string());
        assert_eq!("unreachable", Distance::INFINITY.to_string());
        assert_eq!("20", serde_json::to_string(&Distance::new(20)).unwrap());
        assert_eq!("null", serde_json::to_string(&Distance::INFINITY).unwrap());
    }
}
