//! Serialization behavior of the shared vocabulary types.

use gea_model::{EducationLevel, Gender, RankingMode};

#[test]
fn enums_serialize_as_their_variant_names() {
    assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"Female\"");
    assert_eq!(
        serde_json::to_string(&EducationLevel::Advanced).unwrap(),
        "\"Advanced\""
    );
    assert_eq!(
        serde_json::to_string(&RankingMode::Top15).unwrap(),
        "\"Top15\""
    );
}

#[test]
fn enums_round_trip_through_json() {
    for gender in Gender::all() {
        let json = serde_json::to_string(&gender).unwrap();
        let back: Gender = serde_json::from_str(&json).unwrap();
        assert_eq!(back, gender);
    }
}
