//! Command-line front end for the ripple pipeline simulator.
//!
//! Loads a program image, runs the datapath and reports statistics. With
//! `--snapshots` it writes one JSON object per cycle, suitable for diffing
//! against a reference trace.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ripple_core::sim::loader;
use ripple_core::{Config, Simulator};

#[derive(Parser, Debug)]
#[command(name = "ripple", version, about = "Cycle-accurate RV32I pipeline simulator")]
struct Args {
    /// Program image to run.
    image: PathBuf,

    /// Treat the image as hex text (one instruction word per line)
    /// instead of raw binary.
    #[arg(long)]
    hex: bool,

    /// Machine configuration as a JSON file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stop after this many cycles if the program has not halted.
    #[arg(long, default_value_t = 1_000_000)]
    max_cycles: u64,

    /// Write per-cycle snapshots as JSON lines to this file.
    #[arg(long)]
    snapshots: Option<PathBuf>,

    /// Dump the register file after the run.
    #[arg(long)]
    dump_regs: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(&Args::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config: Config = match &args.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => Config::default(),
    };

    let image = if args.hex {
        loader::load_hex(&args.image)?
    } else {
        loader::load_binary(&args.image)?
    };

    let mut sim = Simulator::new(&config);
    sim.load_program(&image)?;

    let mut snapshots = match &args.snapshots {
        Some(path) => Some(BufWriter::new(fs::File::create(path)?)),
        None => None,
    };

    let mut faulted = false;
    let mut halted = false;
    for _ in 0..args.max_cycles {
        let snapshot = sim.step();
        if let Some(out) = snapshots.as_mut() {
            serde_json::to_writer(&mut *out, &snapshot)?;
            out.write_all(b"\n")?;
        }
        if let Some((fault, pc)) = sim.datapath.retired_fault {
            eprintln!("fault: {fault} at pc {pc:#010x} (cycle {})", snapshot.cycle);
            faulted = true;
            break;
        }
        if sim.datapath.halted {
            halted = true;
            break;
        }
    }

    if let Some(mut out) = snapshots {
        out.flush()?;
    }

    if !halted && !faulted {
        tracing::warn!(cycles = args.max_cycles, "cycle limit reached before halt");
    }

    if args.dump_regs {
        print!("{}", sim.datapath.regs.dump());
    }
    println!("{}", sim.datapath.stats);

    Ok(if faulted {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
