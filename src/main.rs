//! # Labelkit CLI
//!
//! Usage:
//!   labelkit layout job.json -o layout.json
//!   echo '{ ... }' | labelkit snap
//!   labelkit info job.json
//!   labelkit resize request.json
//!   labelkit distribute request.json
//!   labelkit --example > job.json

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use labelkit::LabelError;

fn main() {
    labelkit::log::init();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|a| a == "--example") {
        print!("{}", example_job_json());
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("✗ {}", e);
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), LabelError> {
    let command = args
        .first()
        .ok_or_else(|| LabelError::Usage(usage().to_string()))?;

    // Input file is the first positional argument after the command
    let input_path = args
        .iter()
        .skip(1)
        .scan(false, |after_flag, a| {
            let positional = !*after_flag && !a.starts_with('-');
            *after_flag = a == "-o";
            Some((positional, a))
        })
        .find(|(positional, _)| *positional)
        .map(|(_, a)| a.clone());

    let input = match input_path {
        Some(path) => fs::read_to_string(&path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let output = match command.as_str() {
        "layout" => labelkit::layout_json(&input)?,
        "info" => labelkit::layout_info_json(&input)?,
        "snap" => labelkit::snap_json(&input)?,
        "resize" => labelkit::resize_snap_json(&input)?,
        "distribute" => labelkit::distribution_json(&input)?,
        other => {
            return Err(LabelError::Usage(format!(
                "unknown command `{}`\n{}",
                other,
                usage()
            )))
        }
    };

    let output_path = args.windows(2).find(|w| w[0] == "-o").map(|w| w[1].clone());

    match output_path {
        Some(path) => {
            fs::write(&path, &output)?;
            eprintln!("✓ Written {} bytes to {}", output.len(), path);
        }
        None => println!("{}", output),
    }
    Ok(())
}

fn usage() -> &'static str {
    "usage: labelkit <layout|info|snap|resize|distribute> [input.json] [-o output.json]\n       labelkit --example"
}

fn example_job_json() -> &'static str {
    r##"{
  "pageSettings": {
    "paperSize": "A4",
    "orientation": "portrait",
    "labelsPerRow": 3,
    "margins": { "top": 10, "right": 10, "bottom": 10, "left": 10 },
    "labelSpacing": { "horizontal": 2, "vertical": 2 }
  },
  "labelDimensions": { "width": 60, "height": 40 },
  "queue": [
    { "data": { "sku": "BOLT-M6-20", "name": "Hex bolt M6×20", "bin": "A-03-2" }, "copies": 24 },
    { "data": { "sku": "NUT-M6", "name": "Hex nut M6", "bin": "A-03-4" }, "copies": 12 },
    { "data": { "sku": "WSH-M6", "name": "Washer M6", "bin": "A-04-1" }, "copies": 4 }
  ]
}
"##
}
