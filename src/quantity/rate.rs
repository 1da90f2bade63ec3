use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Pence per kilowatt-hour.
#[derive(
    Clone,
    Copy,
    Default,
    Deserialize,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::Sum,
)]
pub struct PencePerKilowattHour(pub f64);

impl PencePerKilowattHour {
    pub const ZERO: Self = Self(0.0);
}

impl Display for PencePerKilowattHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} p/kWh", self.0)
    }
}

impl Debug for PencePerKilowattHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}p/kWh", self.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(PencePerKilowattHour(8.5).to_string(), "8.50 p/kWh");
    }

    #[test]
    fn test_add() {
        let sum = PencePerKilowattHour(1.5) + PencePerKilowattHour(2.0);
        assert_relative_eq!(sum.0, 3.5);
    }
}
