//! Archived objects served when the live feed cannot be reached.

use debris_core::neo::NeoDescriptor;

const JPL_LOOKUP: &str = "https://ssd.jpl.nasa.gov/tools/sbdb_lookup.html#/?sstr=";

struct Archived {
    id: u32,
    name: &'static str,
    diameter_m: f64,
    velocity_km_s: f64,
    miss_distance_km: f64,
    hazardous: bool,
    approach_date: &'static str,
    linked: bool,
}

const ARCHIVE: [Archived; 4] = [
    Archived {
        id: 2_000_433,
        name: "433 Eros (A898 PA)",
        diameter_m: 16_800.0,
        velocity_km_s: 5.27,
        miss_distance_km: 26_000_000.0,
        hazardous: false,
        approach_date: "2024-01-15",
        linked: true,
    },
    Archived {
        id: 2_001_862,
        name: "1862 Apollo",
        diameter_m: 1_500.0,
        velocity_km_s: 7.1,
        miss_distance_km: 4_500_000.0,
        hazardous: true,
        approach_date: "2024-02-20",
        linked: true,
    },
    Archived {
        id: 2_001_915,
        name: "1915 Quetzálcoatl",
        diameter_m: 500.0,
        velocity_km_s: 8.2,
        miss_distance_km: 12_000_000.0,
        hazardous: false,
        approach_date: "2024-03-10",
        linked: false,
    },
    Archived {
        id: 2_002_201,
        name: "2201 Oljato",
        diameter_m: 1_800.0,
        velocity_km_s: 6.8,
        miss_distance_km: 8_000_000.0,
        hazardous: true,
        approach_date: "2024-04-05",
        linked: false,
    },
];

/// The four archived objects, in insertion order.
pub fn archived_objects() -> Vec<NeoDescriptor> {
    ARCHIVE
        .iter()
        .map(|a| NeoDescriptor {
            id: a.id,
            name: a.name.to_string(),
            diameter_m: a.diameter_m,
            velocity_km_s: a.velocity_km_s,
            miss_distance_km: a.miss_distance_km,
            hazardous: a.hazardous,
            approach_date: Some(a.approach_date.to_string()),
            source_url: a.linked.then(|| format!("{JPL_LOOKUP}{}", a.id)),
        })
        .collect()
}
