//! transit-catalogue: answer a JSON document of transit queries.
//!
//! Reads one input document (stdin or `--input`), writes the answer array
//! (stdout or `--output`).  Set `RUST_LOG=info` for load and graph summaries
//! on stderr.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use tc_json::process_reader;

#[derive(Debug, Parser)]
#[command(name = "transit-catalogue", version, about)]
struct Args {
    /// Input JSON document; stdin when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file for the answer array; stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let t0 = Instant::now();

    let reader: Box<dyn Read> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin().lock())),
    };
    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    process_reader(reader, writer, args.pretty).context("processing input document")?;
    log::info!("done in {:.3}s", t0.elapsed().as_secs_f64());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::{json, Value};

    use super::{run, Args};

    #[test]
    fn file_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.json");
        let output = dir.path().join("out.json");
        let doc = json!({
            "base_requests": [
                {"type": "Stop", "name": "A", "latitude": 0, "longitude": 0,
                 "road_distances": {"B": 2000}},
                {"type": "Stop", "name": "B", "latitude": 0, "longitude": 0},
                {"type": "Bus", "name": "1", "stops": ["A", "B"], "is_roundtrip": false}
            ],
            "routing_settings": {"bus_wait_time": 6, "bus_velocity": 40},
            "stat_requests": [
                {"id": 1, "type": "Bus", "name": "1"},
                {"id": 2, "type": "Route", "from": "A", "to": "B"}
            ]
        });
        fs::write(&input, doc.to_string()).unwrap();

        let args = Args { input: Some(input), output: Some(output.clone()), pretty: true };
        run(&args).unwrap();

        let out: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(out[0]["request_id"], 1);
        assert_eq!(out[0]["stop_count"], 3);
        assert_eq!(out[0]["route_length"].as_f64().unwrap(), 4000.0);
        assert_eq!(out[1]["request_id"], 2);
        assert!((out[1]["total_time"].as_f64().unwrap() - 9.0).abs() < 1e-9);
    }

    #[test]
    fn missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args {
            input: Some(dir.path().join("absent.json")),
            output: Some(dir.path().join("out.json")),
            pretty: false,
        };
        let err = run(&args).unwrap_err();
        assert!(format!("{err:#}").contains("absent.json"));
    }
}
