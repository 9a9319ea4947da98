//! CLI that lists the CFDI documents of a package and optionally extracts them.
//!
//! Usage:
//!   cargo run --example list_cfdis -- package.zip
//!   cargo run --example list_cfdis -- package.zip ./output
//!   cargo run --example list_cfdis -- package.zip --json

use cfdi_package_reader::CfdiPackageReader;
use std::{env, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <package.zip> [output_dir] [--json]", args[0]);
        process::exit(1);
    }

    let package_path = &args[1];
    let as_json = args.iter().any(|a| a == "--json");
    let output_dir = args.get(2).filter(|a| !a.starts_with("--"));

    let reader = CfdiPackageReader::create_from_file(package_path).unwrap_or_else(|e| {
        eprintln!("Error opening package: {e}");
        process::exit(1);
    });

    if as_json {
        match reader.snapshot().to_json_pretty() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error rendering JSON: {e}");
                process::exit(1);
            }
        }
        return;
    }

    println!("Package : {package_path}");
    println!("Entries : {}", reader.archive().count());
    println!("CFDIs   : {}", reader.count());

    for (i, (uuid, document)) in reader.cfdis().enumerate() {
        println!("\n  CFDI #{}", i + 1);
        println!("    Name : {}", document.name);
        println!("    Size : {} bytes", document.content.len());
        if uuid.is_empty() {
            println!("    UUID : (not found)");
        } else {
            println!("    UUID : {uuid}");
        }

        if let Some(dir) = output_dir {
            match document.save_to_disk(dir) {
                Ok(()) => println!("    Saved to {dir}/{}", document.file_name()),
                Err(e) => eprintln!("    Save failed: {e}"),
            }
        }
    }
}
