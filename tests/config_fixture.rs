//! Fixture exercising a legacy cache configuration section end to end.
//!
//! The section definition lives only in this test; the library itself has no
//! runtime configuration surface.

use matchkit::assert_that;
use matchkit::constraint::{equal_to, satisfies, Constraint};
use matchkit::serial::{deserializes_to, round_trips, TomlSerializer};
use matchkit::structural::matching;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct CacheSection {
    default_duration_secs: u64,
    expirations: Vec<CacheExpiration>,
    dependencies: Vec<CacheDependency>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct CacheExpiration {
    name: String,
    duration_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct CacheDependency {
    name: String,
    files: Vec<String>,
}

const SECTION: &str = r#"
default_duration_secs = 300

[[expirations]]
name = "short"
duration_secs = 30

[[expirations]]
name = "long"
duration_secs = 3600

[[dependencies]]
name = "lookup-tables"
files = ["tables/countries.csv", "tables/currencies.csv"]
"#;

#[test]
fn the_section_deserializes_to_the_expected_shape() {
    let c = deserializes_to::<CacheSection, _, _>(
        TomlSerializer::new(),
        matching(&json!({
            "default_duration_secs": 300,
            "expirations": [
                {"name": "short", "duration_secs": 30},
                {"name": "long", "duration_secs": 3600},
            ],
            "dependencies": [
                {"name": "lookup-tables", "files": [
                    "tables/countries.csv",
                    "tables/currencies.csv",
                ]},
            ],
        })),
    );
    assert_that!(SECTION.to_string(), c);
}

#[test]
fn expirations_are_ordered_as_declared() {
    let c = deserializes_to(
        TomlSerializer::new(),
        satisfies(
            |s: &CacheSection| s.expirations[0].name == "short" && s.expirations[1].name == "long",
            "expirations in declaration order",
        ),
    );
    assert!(c.matches(SECTION));
}

#[test]
fn the_parsed_section_round_trips_through_toml() {
    let section: CacheSection = toml::from_str(SECTION).unwrap();
    assert_that!(
        section,
        round_trips(TomlSerializer::new(), equal_to(section.clone()))
    );
}
