//! Basic usage example for conform-validator

use conform_validator::prelude::*;
use serde_json::json;

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    // A record schema: required id, optional tags, bounded score
    let schema = object! {
        "id" => string().or(number()),
        "tags" => optional(array(string()).and(max_len(3))),
        "score" => compose![number(), gte(0), lte(100)],
    };

    let good = json!({ "id": "u-1", "tags": ["a", "b"], "score": 42 });
    match schema.ensure(&good) {
        Ok(()) => println!("✓ {good} conforms"),
        Err(e) => println!("✗ {good}: {e}"),
    }

    let bad = json!({ "id": null, "score": 142 });
    match schema.ensure(&bad) {
        Ok(()) => println!("✓ {bad} conforms"),
        Err(e) => println!("✗ {bad}: {e}"),
    }

    match schema.check_str(r#"{ "id": 7, "score": 0 }"#) {
        Ok(valid) => println!("raw JSON valid: {valid}"),
        Err(e) => println!("✗ could not parse: {e}"),
    }
}
