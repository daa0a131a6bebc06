//! Evaluate an observation against an emitter's calibration.

use serde::Serialize;

use crate::characteristics::{RfCharacteristics, characteristics_for};
use crate::emitter::EmitterType;

/// Observation details to check; any field may be absent
#[derive(Debug, Clone, Copy, Default)]
pub struct Observation {
    /// Reported GPS accuracy in meters
    pub gps_accuracy: Option<f32>,
    /// Estimated coverage radius in meters
    pub radius: Option<f64>,
    /// Number of emitters seen together
    pub count: Option<usize>,
}

/// Outcome of checking an observation
///
/// Each verdict is `None` when the corresponding input was not supplied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Assessment {
    pub emitter: EmitterType,
    pub gps_fix_usable: Option<bool>,
    pub range_plausible: Option<bool>,
    /// Radius limited to the believable interval
    pub clamped_radius: Option<f64>,
    pub count_sufficient: Option<bool>,
}

impl Assessment {
    /// True when no supplied criterion was rejected
    pub fn accepted(&self) -> bool {
        [
            self.gps_fix_usable,
            self.range_plausible,
            self.count_sufficient,
        ]
        .into_iter()
        .flatten()
        .all(|ok| ok)
    }
}

pub fn assess(emitter: EmitterType, observation: &Observation) -> Assessment {
    let rf: &RfCharacteristics = characteristics_for(emitter);

    let assessment = Assessment {
        emitter,
        gps_fix_usable: observation.gps_accuracy.map(|a| rf.accepts_gps_fix(a)),
        range_plausible: observation.radius.map(|r| rf.is_plausible_range(r)),
        clamped_radius: observation.radius.map(|r| rf.clamp_range(r)),
        count_sufficient: observation.count.map(|n| rf.sufficient_count(n)),
    };

    log::debug!("{}: {:?}", emitter, assessment);
    assessment
}
