//! Loading a configuration file, reading typed values, and writing it back.
//!
//! Run with: cargo run --example config_roundtrip

use serde::Deserialize;
use std::error::Error;
use yaml_lite::{dump_to_file, from_value, load, parse, render, RenderOptions, Style, Value};

const CONFIG: &str = "\
# drive configuration
kros:
  motor:
    pid_controller:
      kp: 7.0
      ki: 0.5
    slew_limiter:
      calibrate: true
  ports:
    - 1
    - 2
  version: '1.0'   # kept as text
";

#[derive(Debug, Deserialize)]
struct Pid {
    kp: f64,
    ki: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::temp_dir().join("yaml_lite_demo_config.yaml");
    std::fs::write(&path, CONFIG)?;

    let config = load(&path)?;

    // Typed reads along a path
    let kp = f64::try_from(&config["kros"]["motor"]["pid_controller"]["kp"])?;
    let calibrate = bool::try_from(&config["kros"]["motor"]["slew_limiter"]["calibrate"])?;
    println!("kp = {}, calibrate = {}", kp, calibrate);

    if let Some(Value::String(version)) = config.get_path(&["kros", "version"]) {
        println!("version (string) = {}", version);
    }

    // A whole section into a struct
    let pid: Pid = from_value(config["kros"]["motor"]["pid_controller"].clone())?;
    println!("pid = {:?}\n", pid);

    // Native output parses back into the same tree
    let native = render(&config, &RenderOptions::new().with_indent(2));
    println!("Native:\n{}", native);
    assert_eq!(parse(&native)?, config);

    let json = render(&config, &RenderOptions::new().with_style(Style::JsonLike));
    println!("JSON-like:\n{}\n", json);

    dump_to_file(&config, &path, &RenderOptions::default())?;
    assert_eq!(load(&path)?, config);
    println!("Rewrote {}", path.display());

    std::fs::remove_file(&path)?;
    Ok(())
}
