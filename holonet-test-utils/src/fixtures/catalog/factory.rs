//! Factory functions for catalog JSON payloads.
//!
//! Shapes follow the public catalog: a list page holds `results` entries with a `url`,
//! and each detail page wraps the entity under `result.properties`.

use serde_json::{json, Value};

/// Properties object for a catalog person with standard test values
pub fn mock_person_properties(name: &str) -> Value {
    json!({
        "name": name,
        "height": "172",
        "mass": "77",
        "hair_color": "blond",
        "skin_color": "fair",
        "eye_color": "blue",
        "birth_year": "19BBY",
        "gender": "male",
        "created": "2025-10-19T00:00:00.000Z",
        "edited": "2025-10-19T00:00:00.000Z",
        "homeworld": "https://www.swapi.tech/api/planets/1",
        "url": "https://www.swapi.tech/api/people/1"
    })
}

/// Properties object for a catalog planet with standard test values
pub fn mock_planet_properties(name: &str) -> Value {
    json!({
        "name": name,
        "diameter": "10465",
        "rotation_period": "23",
        "orbital_period": "304",
        "gravity": "1 standard",
        "population": "200000",
        "climate": "arid",
        "terrain": "desert",
        "surface_water": "1",
        "created": "2025-10-19T00:00:00.000Z",
        "edited": "2025-10-19T00:00:00.000Z",
        "url": "https://www.swapi.tech/api/planets/1"
    })
}

/// List page referencing one entry per properties object, uids counting up from 1
///
/// # Arguments
/// - `base_url` - Base URL detail links should point at (the mock server)
/// - `path` - Resource path, e.g. `people`
/// - `properties` - Properties objects the detail endpoints will serve, used for entry names
pub fn resource_list(base_url: &str, path: &str, properties: &[Value]) -> Value {
    let results: Vec<Value> = properties
        .iter()
        .enumerate()
        .map(|(i, props)| {
            let uid = i + 1;
            json!({
                "uid": uid.to_string(),
                "name": props.get("name").cloned().unwrap_or(Value::Null),
                "url": format!("{}/{}/{}", base_url, path, uid),
            })
        })
        .collect();

    json!({
        "message": "ok",
        "total_records": results.len(),
        "total_pages": 1,
        "previous": null,
        "next": null,
        "results": results,
    })
}

/// List page whose entries carry nothing but a `url`
pub fn url_only_resource_list(base_url: &str, path: &str, count: usize) -> Value {
    let results: Vec<Value> = (1..=count)
        .map(|uid| json!({ "url": format!("{}/{}/{}", base_url, path, uid) }))
        .collect();

    json!({ "results": results })
}

/// Detail page wrapping a properties object
pub fn resource_detail(uid: usize, properties: Value) -> Value {
    json!({
        "message": "ok",
        "result": {
            "properties": properties,
            "description": "A catalog entry",
            "uid": uid.to_string(),
        }
    })
}
