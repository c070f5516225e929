use std::collections::HashMap;

use debris_core::neo::FeedOutcome;

use crate::client::{fetch_with_fallback, FeedError, NeoFeedClient};
use crate::config::*;
use crate::fallback::archived_objects;
use crate::parse::{parse_feed, DEFAULT_DIAMETER_M};

const SAMPLE_FEED: &str = r#"{
  "element_count": 3,
  "near_earth_objects": {
    "2024-01-02": [
      {
        "id": "3542519",
        "name": "(2010 PK9)",
        "nasa_jpl_url": "https://ssd.jpl.nasa.gov/tools/sbdb_lookup.html#/?sstr=3542519",
        "estimated_diameter": {
          "meters": { "estimated_diameter_min": 100.0, "estimated_diameter_max": 223.5 }
        },
        "is_potentially_hazardous_asteroid": true,
        "close_approach_data": [
          {
            "close_approach_date": "2024-01-02",
            "close_approach_date_full": "2024-Jan-02 11:40",
            "relative_velocity": { "kilometers_per_second": "14.8521", "kilometers_per_hour": "53467.5" },
            "miss_distance": { "kilometers": "7420987.123", "lunar": "19.3" }
          }
        ]
      },
      {
        "id": "54016476",
        "name": "(2020 GB3)",
        "is_potentially_hazardous_asteroid": false,
        "close_approach_data": []
      }
    ],
    "2024-01-01": [
      {
        "id": "2465633",
        "name": "465633 (2009 JR5)",
        "is_potentially_hazardous_asteroid": false,
        "close_approach_data": [
          {
            "close_approach_date": "2024-01-01",
            "relative_velocity": { "kilometers_per_second": "18.1279" },
            "miss_distance": { "kilometers": "45290298.225" }
          }
        ]
      }
    ]
  }
}"#;

struct FailingClient;

impl NeoFeedClient for FailingClient {
    fn fetch(&self) -> Result<Vec<debris_core::neo::NeoDescriptor>, FeedError> {
        Err(FeedError::Http {
            message: "connection refused".to_string(),
        })
    }
}

struct FixtureClient;

impl NeoFeedClient for FixtureClient {
    fn fetch(&self) -> Result<Vec<debris_core::neo::NeoDescriptor>, FeedError> {
        parse_feed(SAMPLE_FEED).map_err(|err| FeedError::DecodeResponse {
            message: err.to_string(),
        })
    }
}

// ---- Parsing ----

#[test]
fn test_parse_feed_orders_days_and_skips_missing_approach() {
    let objects = parse_feed(SAMPLE_FEED).unwrap();
    let ids: Vec<u32> = objects.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![2_465_633, 3_542_519]);
}

#[test]
fn test_parse_feed_reads_string_figures() {
    let objects = parse_feed(SAMPLE_FEED).unwrap();
    let pk9 = &objects[1];
    assert_eq!(pk9.name, "(2010 PK9)");
    assert_eq!(pk9.diameter_m, 223.5);
    assert_eq!(pk9.velocity_km_s, 14.8521);
    assert_eq!(pk9.miss_distance_km, 7_420_987.123);
    assert!(pk9.hazardous);
    assert_eq!(pk9.approach_date.as_deref(), Some("2024-Jan-02 11:40"));
    assert!(pk9.source_url.is_some());
}

#[test]
fn test_parse_feed_defaults_missing_diameter() {
    let objects = parse_feed(SAMPLE_FEED).unwrap();
    let jr5 = &objects[0];
    assert_eq!(jr5.diameter_m, DEFAULT_DIAMETER_M);
    assert_eq!(jr5.approach_date.as_deref(), Some("2024-01-01"));
    assert!(jr5.source_url.is_none());
}

#[test]
fn test_parse_feed_skips_unparsable_figures() {
    let body = r#"{"near_earth_objects": {"2024-01-01": [
        {"id": "12", "name": "bad", "close_approach_data": [
            {"relative_velocity": {"kilometers_per_second": "fast"},
             "miss_distance": {"kilometers": "1"}}]}
    ]}}"#;
    assert!(parse_feed(body).unwrap().is_empty());
}

#[test]
fn test_parse_feed_rejects_malformed_body() {
    assert!(parse_feed("<html>rate limited</html>").is_err());
    assert!(parse_feed("{}").unwrap().is_empty());
}

// ---- Fallback ----

#[test]
fn test_archived_objects_literal_values() {
    let objects = archived_objects();
    assert_eq!(objects.len(), 4);

    let eros = &objects[0];
    assert_eq!(eros.id, 2_000_433);
    assert_eq!(eros.name, "433 Eros (A898 PA)");
    assert_eq!(eros.diameter_m, 16_800.0);
    assert_eq!(eros.velocity_km_s, 5.27);
    assert_eq!(eros.miss_distance_km, 26_000_000.0);
    assert!(!eros.hazardous);
    assert_eq!(
        eros.source_url.as_deref(),
        Some("https://ssd.jpl.nasa.gov/tools/sbdb_lookup.html#/?sstr=2000433")
    );

    let ids: Vec<u32> = objects.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![2_000_433, 2_001_862, 2_001_915, 2_002_201]);
    let hazardous: Vec<bool> = objects.iter().map(|o| o.hazardous).collect();
    assert_eq!(hazardous, vec![false, true, false, true]);
    assert!(objects[2].source_url.is_none());
    assert!(objects[3].source_url.is_none());
}

#[test]
fn test_fetch_with_fallback_on_failure() {
    let outcome = fetch_with_fallback(&FailingClient);
    assert!(outcome.is_fallback());
    assert_eq!(outcome.descriptors(), archived_objects().as_slice());
}

#[test]
fn test_fetch_with_fallback_passes_live_data() {
    let outcome = fetch_with_fallback(&FixtureClient);
    match outcome {
        FeedOutcome::Live(objects) => assert_eq!(objects.len(), 2),
        FeedOutcome::Fallback(_) => panic!("expected live data"),
    }
}

// ---- Config ----

#[test]
fn test_feed_config_defaults() {
    let config = FeedConfig::default();
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.api_key, "DEMO_KEY");
    assert_eq!(config.start_date, "2024-01-01");
    assert_eq!(config.end_date, "2024-01-07");
    assert_eq!(config.timeout_ms, 10_000);
    assert_eq!(config.feed_url(), "https://api.nasa.gov/neo/rest/v1/feed");
}

#[test]
fn test_feed_config_overrides() {
    let env: HashMap<&str, &str> = HashMap::from([
        (ENV_NEO_API_KEY, "abc123"),
        (ENV_NEO_BASE_URL, "http://localhost:9000/"),
        (ENV_NEO_TIMEOUT_MS, "2500"),
        (ENV_NEO_START_DATE, "  "),
    ]);
    let mut config = FeedConfig::default();
    config
        .apply_overrides_with(|key| env.get(key).map(|v| v.to_string()))
        .unwrap();

    assert_eq!(config.api_key, "abc123");
    assert_eq!(config.timeout_ms, 2_500);
    assert_eq!(config.start_date, DEFAULT_START_DATE);
    assert_eq!(config.feed_url(), "http://localhost:9000/feed");
}

#[test]
fn test_feed_config_invalid_timeout() {
    let mut config = FeedConfig::default();
    let err = config
        .apply_overrides_with(|key| (key == ENV_NEO_TIMEOUT_MS).then(|| "soon".to_string()))
        .unwrap_err();
    assert_eq!(
        err,
        FeedConfigError::InvalidTimeout {
            value: "soon".to_string()
        }
    );
    assert_eq!(err.to_string(), "invalid timeout value: soon");
}

#[test]
fn test_feed_config_from_file() {
    let unique = std::process::id();
    let path = std::env::temp_dir().join(format!("debris-feed-config-{unique}.toml"));
    std::fs::write(
        &path,
        "[feed]\napi_key = \"from-file\"\nend_date = \"2024-01-03\"\n",
    )
    .unwrap();

    let config = FeedConfig::from_config_file(&path);
    let _ = std::fs::remove_file(&path);
    let config = config.unwrap();

    assert_eq!(config.end_date, "2024-01-03");
    assert_eq!(config.start_date, DEFAULT_START_DATE);
    if std::env::var(ENV_NEO_API_KEY).is_err() {
        assert_eq!(config.api_key, "from-file");
    }
}

#[test]
fn test_feed_config_missing_file() {
    let path = std::env::temp_dir().join("debris-feed-does-not-exist.toml");
    let err = FeedConfig::from_config_file(&path).unwrap_err();
    assert!(matches!(err, FeedConfigError::ReadConfigFile { .. }));
}
