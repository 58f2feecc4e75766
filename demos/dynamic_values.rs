//! Working with Value for runtime flexibility.
//!
//! Run with: cargo run --example dynamic_values

use serde::Serialize;
use std::error::Error;
use yaml_lite::{pretty_print, to_value, yaml, RenderOptions, Value};

#[derive(Debug, Serialize)]
struct Joint {
    name: String,
    limits: Vec<f64>,
    homed: bool,
}

fn describe(key: &str, value: &Value, depth: usize) {
    let pad = "  ".repeat(depth);
    match value {
        Value::Mapping(map) => {
            println!("{}{}: mapping with {} keys", pad, key, map.len());
            for (child_key, child) in map.iter() {
                describe(child_key, child, depth + 1);
            }
        }
        Value::Sequence(items) => println!("{}{}: sequence of {}", pad, key, items.len()),
        scalar => println!("{}{}: {} = {}", pad, key, scalar.type_name(), scalar),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Build a tree with the yaml! macro
    let mut config = yaml!({
        "host": "localhost",
        "port": 8080,
        "features": ["auth", "logging"],
        "debug": true
    });

    describe("config", &config, 0);
    println!();

    // Edit in place
    if let Some(map) = config.as_mapping_mut() {
        map.insert("port".to_string(), Value::Int(9090));
        map.insert("timeout".to_string(), Value::Float(2.5));
    }
    if let Some(features) = config["features"].as_sequence() {
        println!("{} features, first is {}\n", features.len(), features[0]);
    }

    // Convert an existing struct and attach it
    let joint = Joint {
        name: "shoulder".to_string(),
        limits: vec![-1.5, 1.5],
        homed: false,
    };
    if let Some(map) = config.as_mapping_mut() {
        map.insert("joint".to_string(), to_value(&joint)?);
    }

    pretty_print(&config, &RenderOptions::new())?;
    println!();
    pretty_print(&config, &RenderOptions::json())?;
    println!();

    let text = pretty_print(&config, &RenderOptions::new().with_return_text(true))?;
    println!("{} bytes of native text", text.map_or(0, |t| t.len()));

    Ok(())
}
