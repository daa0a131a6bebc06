//! Per-technology calibration constants.
//!
//! Each [`EmitterType`] resolves to one process-wide [`RfCharacteristics`]
//! record. Technologies judged to propagate alike share a record: the
//! resolver hands out the same `&'static` instance for all of them.
//!
//! All distances are meters.

use serde::Serialize;

use crate::constants::{KM, METERS, METERS_F32};
use crate::emitter::EmitterType;
use crate::error::{Result, RfError};

/// Calibration constants for one kind of emitter
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RfCharacteristics {
    /// GPS accuracy required before a fix may update this emitter's coverage.
    /// Should be well under half of `minimum_range`, GPS is frequently off by
    /// more than its reported accuracy.
    pub required_gps_accuracy: f32,
    /// Minimum believable coverage radius
    pub minimum_range: f64,
    /// Maximum believable coverage radius
    pub maximum_range: f64,
    /// Minimum number of emitters before a location can be estimated
    pub min_count: u32,
}

impl RfCharacteristics {
    /// Whether a GPS fix with the given accuracy is good enough to update
    /// coverage. Non-positive and NaN accuracies are never trusted.
    pub fn accepts_gps_fix(&self, accuracy: f32) -> bool {
        accuracy > 0.0 && accuracy <= self.required_gps_accuracy
    }

    /// Whether a coverage radius is believable for this emitter type
    pub fn is_plausible_range(&self, radius: f64) -> bool {
        radius.is_finite() && radius >= 0.0 && radius <= self.maximum_range
    }

    /// Limit a coverage radius to the believable interval
    pub fn clamp_range(&self, radius: f64) -> f64 {
        if radius.is_nan() {
            return self.minimum_range;
        }
        radius.clamp(self.minimum_range, self.maximum_range)
    }

    /// Whether `count` emitters of this reliability suffice for an estimate
    pub fn sufficient_count(&self, count: usize) -> bool {
        count >= self.min_count as usize
    }

    /// Check the hard invariants of a calibration record
    pub fn validate(&self) -> Result<()> {
        if self.required_gps_accuracy.is_nan() || self.required_gps_accuracy <= 0.0 {
            return Err(RfError::Calibration(format!(
                "required GPS accuracy must be positive, got {}",
                self.required_gps_accuracy
            )));
        }
        if self.minimum_range.is_nan() || self.minimum_range <= 0.0 {
            return Err(RfError::Calibration(format!(
                "minimum range must be positive, got {}",
                self.minimum_range
            )));
        }
        if self.maximum_range.is_nan() || self.minimum_range >= self.maximum_range {
            return Err(RfError::Calibration(format!(
                "minimum range {} is not below maximum range {}",
                self.minimum_range, self.maximum_range
            )));
        }
        if self.min_count == 0 {
            return Err(RfError::Calibration("min count must be at least 1".into()));
        }
        Ok(())
    }
}

// For 2.4 GHz, indoor range is about 46 m and outdoor about 90 m. Minimum
// range is about 3/4 of indoor range. Very long detections happen in rural
// areas, hence the generous maximum.
static CHARACTERISTICS_WLAN_2: RfCharacteristics = RfCharacteristics {
    required_gps_accuracy: 16.0 * METERS_F32,
    minimum_range: 35.0 * METERS,
    maximum_range: 300.0 * METERS,
    min_count: 2,
};

// Also used for 6 GHz, the frequency difference barely changes range.
static CHARACTERISTICS_WLAN_5: RfCharacteristics = RfCharacteristics {
    required_gps_accuracy: 7.0 * METERS_F32,
    minimum_range: 15.0 * METERS,
    maximum_range: 100.0 * METERS,
    min_count: 2,
};

// Class 1 devices can reach 100 m.
static CHARACTERISTICS_BLUETOOTH: RfCharacteristics = RfCharacteristics {
    required_gps_accuracy: 5.0 * METERS_F32,
    minimum_range: 2.0 * METERS,
    maximum_range: 100.0 * METERS,
    min_count: 2,
};

// Usual maximum is around 35 km, extended range cells reach about 200 km.
static CHARACTERISTICS_GSM: RfCharacteristics = RfCharacteristics {
    required_gps_accuracy: 100.0 * METERS_F32,
    minimum_range: 500.0 * METERS,
    maximum_range: 200.0 * KM,
    min_count: 1,
};

// LTE cells are usually much smaller than GSM cells but may span the same
// huge areas. Small cells can be some 10 m across; assuming every cell is
// small would demand very accurate fixes and make once-seen cells report
// overly precise locations.
static CHARACTERISTICS_LTE: RfCharacteristics = RfCharacteristics {
    required_gps_accuracy: 50.0 * METERS_F32,
    minimum_range: 250.0 * METERS,
    maximum_range: 100.0 * KM,
    min_count: 1,
};

// FR2 reaches about 300 m, up to 1 km with beam forming.
static CHARACTERISTICS_NR_FR2: RfCharacteristics = RfCharacteristics {
    required_gps_accuracy: 25.0 * METERS_F32,
    minimum_range: 70.0 * METERS,
    maximum_range: 1000.0 * KM,
    min_count: 1,
};

// Values chosen so an unknown emitter is practically never used: the GPS
// requirement is too strict and it can never locate on its own.
static CHARACTERISTICS_UNKNOWN: RfCharacteristics = RfCharacteristics {
    required_gps_accuracy: 2.0 * METERS_F32,
    minimum_range: 50.0 * METERS,
    maximum_range: 100.0 * METERS,
    min_count: 99,
};

/// Emitter types that get short-range handling downstream.
///
/// Curated separately from `maximum_range`.
pub const SHORT_RANGE_EMITTER_TYPES: [EmitterType; 5] = [
    EmitterType::Wlan5,
    EmitterType::Wlan6,
    EmitterType::Wlan2,
    EmitterType::Bluetooth,
    EmitterType::NrFr2,
];

/// Calibration constants for an emitter type
///
/// Total over [`EmitterType`]; `Invalid` resolves to a deliberately
/// unfavourable record instead of an error.
pub fn characteristics_for(emitter: EmitterType) -> &'static RfCharacteristics {
    match emitter {
        EmitterType::Wlan2 => &CHARACTERISTICS_WLAN_2,
        EmitterType::Wlan5 | EmitterType::Wlan6 => &CHARACTERISTICS_WLAN_5,
        EmitterType::Bluetooth => &CHARACTERISTICS_BLUETOOTH,
        EmitterType::Gsm => &CHARACTERISTICS_GSM,
        // Strongly frequency dependent, modelled alike until there is better data.
        EmitterType::Cdma
        | EmitterType::Wcdma
        | EmitterType::Tdscdma
        | EmitterType::Lte
        | EmitterType::Nr => &CHARACTERISTICS_LTE,
        EmitterType::NrFr2 => &CHARACTERISTICS_NR_FR2,
        EmitterType::Invalid => &CHARACTERISTICS_UNKNOWN,
    }
}

/// Whether an emitter type belongs to the short-range group
pub fn is_short_range(emitter: EmitterType) -> bool {
    match emitter {
        EmitterType::Wlan2
        | EmitterType::Wlan5
        | EmitterType::Wlan6
        | EmitterType::Bluetooth
        | EmitterType::NrFr2 => true,
        EmitterType::Invalid
        | EmitterType::Gsm
        | EmitterType::Cdma
        | EmitterType::Wcdma
        | EmitterType::Tdscdma
        | EmitterType::Lte
        | EmitterType::Nr => false,
    }
}

/// Emitter types resolving to the same record as `emitter`, itself included
pub fn calibration_group(emitter: EmitterType) -> Vec<EmitterType> {
    let record = characteristics_for(emitter);
    EmitterType::ALL
        .into_iter()
        .filter(|&t| std::ptr::eq(characteristics_for(t), record))
        .collect()
}

impl EmitterType {
    /// See [`characteristics_for`]
    pub fn rf_characteristics(self) -> &'static RfCharacteristics {
        characteristics_for(self)
    }

    /// See [`is_short_range`]
    pub fn is_short_range(self) -> bool {
        is_short_range(self)
    }
}

/// One row of the calibration table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalibrationEntry {
    pub emitter: EmitterType,
    #[serde(flatten)]
    pub characteristics: RfCharacteristics,
    pub short_range: bool,
}

impl CalibrationEntry {
    pub fn new(emitter: EmitterType) -> Self {
        Self {
            emitter,
            characteristics: *characteristics_for(emitter),
            short_range: is_short_range(emitter),
        }
    }
}

/// Calibration rows for every emitter type, in declaration order
pub fn calibration_table() -> Vec<CalibrationEntry> {
    EmitterType::ALL.into_iter().map(CalibrationEntry::new).collect()
}

/// Validate the record of every emitter type
pub fn validate_table() -> Result<()> {
    for emitter in EmitterType::ALL {
        let record = characteristics_for(emitter);
        record
            .validate()
            .map_err(|e| RfError::Calibration(format!("{}: {}", emitter, e)))?;

        if f64::from(record.required_gps_accuracy) >= record.minimum_range / 2.0 {
            log::debug!(
                "{}: required GPS accuracy {} m is not below half the minimum range {} m",
                emitter,
                record.required_gps_accuracy,
                record.minimum_range
            );
        }
    }
    log::info!("Calibration table valid for {} emitter types", EmitterType::ALL.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_record_is_valid() {
        for t in EmitterType::ALL {
            assert!(characteristics_for(t).validate().is_ok(), "{} invalid", t);
        }
        assert!(validate_table().is_ok());
    }

    #[test]
    fn test_short_range_matches_constant_set() {
        for t in EmitterType::ALL {
            assert_eq!(
                is_short_range(t),
                SHORT_RANGE_EMITTER_TYPES.contains(&t),
                "{}",
                t
            );
        }
    }

    #[test]
    fn test_calibration_groups() {
        assert_eq!(
            calibration_group(EmitterType::Wlan6),
            vec![EmitterType::Wlan5, EmitterType::Wlan6]
        );
        assert_eq!(
            calibration_group(EmitterType::Nr),
            vec![
                EmitterType::Cdma,
                EmitterType::Wcdma,
                EmitterType::Tdscdma,
                EmitterType::Lte,
                EmitterType::Nr,
            ]
        );
        assert_eq!(calibration_group(EmitterType::Gsm), vec![EmitterType::Gsm]);
        assert_eq!(
            calibration_group(EmitterType::Invalid),
            vec![EmitterType::Invalid]
        );
    }

    #[test]
    fn test_gps_fix_acceptance() {
        let wlan = characteristics_for(EmitterType::Wlan2);
        assert!(wlan.accepts_gps_fix(16.0));
        assert!(wlan.accepts_gps_fix(3.5));
        assert!(!wlan.accepts_gps_fix(16.5));
        assert!(!wlan.accepts_gps_fix(0.0));
        assert!(!wlan.accepts_gps_fix(-1.0));
        assert!(!wlan.accepts_gps_fix(f32::NAN));
    }

    #[test]
    fn test_range_plausibility() {
        let gsm = characteristics_for(EmitterType::Gsm);
        assert!(gsm.is_plausible_range(35_000.0));
        assert!(gsm.is_plausible_range(200_000.0));
        assert!(!gsm.is_plausible_range(200_001.0));
        assert!(!gsm.is_plausible_range(-1.0));
        assert!(!gsm.is_plausible_range(f64::INFINITY));
    }

    #[test]
    fn test_clamp_range() {
        let wlan5 = characteristics_for(EmitterType::Wlan5);
        assert_eq!(wlan5.clamp_range(1.0), 15.0);
        assert_eq!(wlan5.clamp_range(42.0), 42.0);
        assert_eq!(wlan5.clamp_range(5_000.0), 100.0);
        assert_eq!(wlan5.clamp_range(f64::NAN), 15.0);
    }

    #[test]
    fn test_sufficient_count() {
        assert!(!characteristics_for(EmitterType::Wlan2).sufficient_count(1));
        assert!(characteristics_for(EmitterType::Wlan2).sufficient_count(2));
        assert!(characteristics_for(EmitterType::Lte).sufficient_count(1));
        assert!(!characteristics_for(EmitterType::Invalid).sufficient_count(98));
        assert!(characteristics_for(EmitterType::Invalid).sufficient_count(99));
    }

    #[test]
    fn test_validate_rejects_broken_records() {
        let base = *characteristics_for(EmitterType::Wlan2);

        let inverted = RfCharacteristics {
            minimum_range: 500.0,
            ..base
        };
        assert!(matches!(inverted.validate(), Err(RfError::Calibration(_))));

        let no_count = RfCharacteristics { min_count: 0, ..base };
        assert!(no_count.validate().is_err());

        let no_gps = RfCharacteristics {
            required_gps_accuracy: 0.0,
            ..base
        };
        assert!(no_gps.validate().is_err());

        let nan_gps = RfCharacteristics {
            required_gps_accuracy: f32::NAN,
            ..base
        };
        assert!(nan_gps.validate().is_err());
    }

    #[test]
    fn test_calibration_table_order() {
        let table = calibration_table();
        assert_eq!(table.len(), EmitterType::ALL.len());
        for (entry, t) in table.iter().zip(EmitterType::ALL) {
            assert_eq!(entry.emitter, t);
            assert_eq!(entry.characteristics, *characteristics_for(t));
            assert_eq!(entry.short_range, is_short_range(t));
        }
    }
}
