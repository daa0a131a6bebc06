//! Classification of radio emitters.
//!
//! Every observed emitter is tagged with exactly one [`EmitterType`]. The set
//! is closed: a new radio technology needs a new variant here and a matching
//! arm in [`crate::characteristics::characteristics_for`], which the compiler
//! enforces because that match has no wildcard arm.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter};

use crate::error::RfError;

/// Kind of radio emitter
///
/// # Parsing
/// Names are matched case-insensitively and `-` is accepted in place of `_`.
/// `BLUETOOTH` is accepted as an alias of `BT`.
///
/// ```
/// use rfmodel::EmitterType;
///
/// let t: EmitterType = "nr-fr2".parse().unwrap();
/// assert_eq!(t, EmitterType::NrFr2);
/// assert_eq!(t.to_string(), "NR_FR2");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumCount, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmitterType {
    /// Unclassified or unrecognised emitter
    Invalid,
    /// WiFi, 2.4 GHz band
    Wlan2,
    /// WiFi, 5 GHz band
    Wlan5,
    /// WiFi, 6 GHz band
    Wlan6,
    /// Bluetooth beacon
    #[serde(rename = "BT", alias = "BLUETOOTH")]
    Bluetooth,
    Gsm,
    Cdma,
    Wcdma,
    Tdscdma,
    Lte,
    /// 5G NR, FR1 (sub-6 GHz)
    Nr,
    /// 5G NR, FR2 (mmWave)
    NrFr2,
}

impl EmitterType {
    /// All emitter types in declaration order
    pub const ALL: [EmitterType; EmitterType::COUNT] = [
        EmitterType::Invalid,
        EmitterType::Wlan2,
        EmitterType::Wlan5,
        EmitterType::Wlan6,
        EmitterType::Bluetooth,
        EmitterType::Gsm,
        EmitterType::Cdma,
        EmitterType::Wcdma,
        EmitterType::Tdscdma,
        EmitterType::Lte,
        EmitterType::Nr,
        EmitterType::NrFr2,
    ];

    /// Canonical upper-case name, as used in logs and stored records
    pub fn name(self) -> &'static str {
        match self {
            EmitterType::Invalid => "INVALID",
            EmitterType::Wlan2 => "WLAN2",
            EmitterType::Wlan5 => "WLAN5",
            EmitterType::Wlan6 => "WLAN6",
            EmitterType::Bluetooth => "BT",
            EmitterType::Gsm => "GSM",
            EmitterType::Cdma => "CDMA",
            EmitterType::Wcdma => "WCDMA",
            EmitterType::Tdscdma => "TDSCDMA",
            EmitterType::Lte => "LTE",
            EmitterType::Nr => "NR",
            EmitterType::NrFr2 => "NR_FR2",
        }
    }

    /// WiFi access point of any band
    pub fn is_wlan(self) -> bool {
        matches!(
            self,
            EmitterType::Wlan2 | EmitterType::Wlan5 | EmitterType::Wlan6
        )
    }

    /// Mobile network cell of any generation
    pub fn is_cellular(self) -> bool {
        matches!(
            self,
            EmitterType::Gsm
                | EmitterType::Cdma
                | EmitterType::Wcdma
                | EmitterType::Tdscdma
                | EmitterType::Lte
                | EmitterType::Nr
                | EmitterType::NrFr2
        )
    }
}

impl fmt::Display for EmitterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for EmitterType {
    type Err = RfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");

        if normalized == "BLUETOOTH" {
            return Ok(EmitterType::Bluetooth);
        }

        EmitterType::ALL
            .into_iter()
            .find(|t| t.name() == normalized)
            .ok_or_else(|| RfError::UnknownEmitterType(s.to_string()))
    }
}
