//! NeoWs feed response decoding.
//!
//! The feed groups objects by date and reports most numbers as strings.
//! Objects without close-approach data are skipped, as are objects whose
//! id or approach figures do not parse.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use debris_core::neo::NeoDescriptor;

/// Diameter used when the feed has no estimate.
pub const DEFAULT_DIAMETER_M: f64 = 10.0;

#[derive(Debug, Deserialize)]
pub struct FeedResponse {
    /// Keyed by `YYYY-MM-DD`; the BTreeMap keeps the days in order.
    #[serde(default)]
    pub near_earth_objects: BTreeMap<String, Vec<RawNeo>>,
}

#[derive(Debug, Deserialize)]
pub struct RawNeo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub nasa_jpl_url: Option<String>,
    #[serde(default)]
    pub estimated_diameter: Option<RawDiameter>,
    #[serde(default)]
    pub is_potentially_hazardous_asteroid: bool,
    #[serde(default)]
    pub close_approach_data: Vec<RawApproach>,
}

#[derive(Debug, Deserialize)]
pub struct RawDiameter {
    #[serde(default)]
    pub meters: Option<RawDiameterRange>,
}

#[derive(Debug, Deserialize)]
pub struct RawDiameterRange {
    #[serde(default)]
    pub estimated_diameter_max: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct RawApproach {
    #[serde(default)]
    pub close_approach_date: Option<String>,
    #[serde(default)]
    pub close_approach_date_full: Option<String>,
    pub relative_velocity: RawVelocity,
    pub miss_distance: RawMissDistance,
}

#[derive(Debug, Deserialize)]
pub struct RawVelocity {
    pub kilometers_per_second: String,
}

#[derive(Debug, Deserialize)]
pub struct RawMissDistance {
    pub kilometers: String,
}

impl FeedResponse {
    /// Flatten the day buckets into descriptors, in date order.
    pub fn into_descriptors(self) -> Vec<NeoDescriptor> {
        self.near_earth_objects
            .into_values()
            .flatten()
            .filter_map(RawNeo::into_descriptor)
            .collect()
    }
}

impl RawNeo {
    /// `None` when the object has no usable approach data.
    pub fn into_descriptor(self) -> Option<NeoDescriptor> {
        let Some(approach) = self.close_approach_data.into_iter().next() else {
            debug!(id = %self.id, "skipping object without approach data");
            return None;
        };

        let parsed = (
            self.id.trim().parse::<u32>(),
            approach.relative_velocity.kilometers_per_second.trim().parse::<f64>(),
            approach.miss_distance.kilometers.trim().parse::<f64>(),
        );
        let (Ok(id), Ok(velocity_km_s), Ok(miss_distance_km)) = parsed else {
            debug!(id = %self.id, "skipping object with unparsable figures");
            return None;
        };

        let diameter_m = self
            .estimated_diameter
            .and_then(|d| d.meters)
            .and_then(|m| m.estimated_diameter_max)
            .filter(|d| *d > 0.0)
            .unwrap_or(DEFAULT_DIAMETER_M);

        Some(NeoDescriptor {
            id,
            name: self.name,
            diameter_m,
            velocity_km_s,
            miss_distance_km,
            hazardous: self.is_potentially_hazardous_asteroid,
            approach_date: approach
                .close_approach_date_full
                .or(approach.close_approach_date),
            source_url: self.nasa_jpl_url,
        })
    }
}

/// Decode a feed body.
pub fn parse_feed(body: &str) -> Result<Vec<NeoDescriptor>, serde_json::Error> {
    let response: FeedResponse = serde_json::from_str(body)?;
    Ok(response.into_descriptors())
}
