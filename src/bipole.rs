//! The closed vocabulary of two-terminal circuit elements.
//!
//! A [`Bipole`] is the element type placed on a segment: a plain wire, a
//! passive component, a source, a meter, or a switch. The variants map
//! one-to-one onto circuitikz `to[...]` tokens, which is the form the
//! external renderer consumes.

use serde::Deserialize;
use std::fmt;

/// A two-terminal circuit element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum Bipole {
    /// Plain wire
    #[serde(rename = "short")]
    Short,
    /// Open circuit (gap)
    #[serde(rename = "open")]
    Open,
    /// Generic bipole (unspecified rectangle)
    #[serde(rename = "generic")]
    Generic,
    /// Capacitor
    #[serde(rename = "capacitor")]
    Capacitor,
    /// Inductor (cute style)
    #[serde(rename = "cute inductor")]
    CuteInductor,
    /// Single-cell battery
    #[serde(rename = "battery1")]
    Battery,
    /// European-style voltage source
    #[serde(rename = "european voltage source")]
    EuropeanVoltageSource,
    /// European-style current source
    #[serde(rename = "european current source")]
    EuropeanCurrentSource,
    /// Ammeter
    #[serde(rename = "ammeter")]
    Ammeter,
    /// Voltmeter
    #[serde(rename = "voltmeter")]
    Voltmeter,
    /// Normally-open switch
    #[serde(rename = "normal open switch")]
    NormalOpenSwitch,
}

impl Bipole {
    /// The circuitikz token emitted inside `to[...]`.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Open => "open",
            Self::Generic => "generic",
            Self::Capacitor => "capacitor",
            Self::CuteInductor => "cute inductor",
            Self::Battery => "battery1",
            Self::EuropeanVoltageSource => "european voltage source",
            Self::EuropeanCurrentSource => "european current source",
            Self::Ammeter => "ammeter",
            Self::Voltmeter => "voltmeter",
            Self::NormalOpenSwitch => "normal open switch",
        }
    }

    /// Parse a bipole from its circuitikz token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "short" => Some(Self::Short),
            "open" => Some(Self::Open),
            "generic" => Some(Self::Generic),
            "capacitor" => Some(Self::Capacitor),
            "cute inductor" => Some(Self::CuteInductor),
            "battery1" => Some(Self::Battery),
            "european voltage source" => Some(Self::EuropeanVoltageSource),
            "european current source" => Some(Self::EuropeanCurrentSource),
            "ammeter" => Some(Self::Ammeter),
            "voltmeter" => Some(Self::Voltmeter),
            "normal open switch" => Some(Self::NormalOpenSwitch),
            _ => None,
        }
    }
}

impl fmt::Display for Bipole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Default pool of source elements.
pub const SOURCE_POOL: [Bipole; 3] = [
    Bipole::Battery,
    Bipole::EuropeanVoltageSource,
    Bipole::EuropeanCurrentSource,
];

/// Default pool of measurement elements.
pub const MEASURE_POOL: [Bipole; 2] = [Bipole::Ammeter, Bipole::Voltmeter];

/// Default pool of generic bipoles.
pub const GENERIC_POOL: [Bipole; 5] = [
    Bipole::Open,
    Bipole::Generic,
    Bipole::Capacitor,
    Bipole::CuteInductor,
    Bipole::NormalOpenSwitch,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        for pool in [&SOURCE_POOL[..], &MEASURE_POOL[..], &GENERIC_POOL[..]] {
            for bipole in pool {
                assert_eq!(Bipole::from_token(bipole.token()), Some(*bipole));
            }
        }
        assert_eq!(Bipole::from_token("short"), Some(Bipole::Short));
        assert_eq!(Bipole::from_token("transistor"), None);
    }

    #[test]
    fn test_pools_are_disjoint() {
        for source in &SOURCE_POOL {
            assert!(!MEASURE_POOL.contains(source));
            assert!(!GENERIC_POOL.contains(source));
        }
        for meter in &MEASURE_POOL {
            assert!(!GENERIC_POOL.contains(meter));
        }
    }
}
