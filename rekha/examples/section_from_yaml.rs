//! Build a section line from a YAML request and print the result as JSON.
//!
//! Usage:
//!   cargo run --example section_from_yaml -- --request wells.yaml
//!   cargo run --example section_from_yaml   # Uses the built-in demo request

use std::path::Path;

use clap::Parser;

use rekha::io::to_json;
use rekha::{EngineConfig, SectionLineEngine, SectionRequest};

const DEMO_REQUEST: &str = r#"
mode: fenceline
azimuth_degrees: 70
wells:
  - { id: "A-01", x: 500120.0, y: 4900210.0 }
  - { id: "A-02", x: 500480.0, y: 4900395.0 }
  - { id: "A-03", x: 500310.0, y: 4900240.0 }
  - { id: "A-04", x: 500905.0, y: 4900460.0 }
  - { id: "A-05", x: 500690.0, y: 4900515.0 }
  - { id: "A-06", x: 501130.0, y: 4900620.0 }
"#;

/// Section line from a YAML request
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "configs/rekha.yaml")]
    config: String,

    /// Request file (YAML or JSON). Runs a demo request when omitted.
    #[arg(short, long)]
    request: Option<String>,

    /// Print only the ordering
    #[arg(long)]
    order_only: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = match EngineConfig::load(Path::new(&args.config)) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Using default configuration ({})", e);
            EngineConfig::default()
        }
    };

    let request = match &args.request {
        Some(path) => SectionRequest::load(Path::new(path)),
        None => SectionRequest::from_yaml(DEMO_REQUEST),
    };
    let request = match request {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Failed to read request: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Building {:?} section line through {} wells",
        request.mode,
        request.wells.len()
    );

    let engine = SectionLineEngine::new(&config);
    let result = match request.run(&engine) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Section line failed: {}", e);
            std::process::exit(1);
        }
    };

    if args.order_only {
        println!("{}", result.order.join(" -> "));
        return;
    }

    println!("Order:  {}", result.order.join(" -> "));
    println!("Length: {:.1}", result.section_line.length());
    if let Some(angle) = result.fit_angle {
        println!("Angle:  {:.2}°", angle.to_degrees());
    }
    match to_json(&result) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialise result: {}", e),
    }
}
