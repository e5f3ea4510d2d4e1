//! ALU model CLI.
//!
//! This binary provides a single entry point for exercising the ALU. It performs:
//! 1. **Eval:** Evaluate one operation and print the result word and flags.
//! 2. **Run:** Apply a stimulus file (or the built-in demo sequence), write
//!    VCD / JSON Lines traces and print run statistics.

use std::error::Error;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use alusim_core::config::{AluConfig, ClearResult};
use alusim_core::sim::{Driver, JsonLinesTrace, Stimulus, TraceFanout, VcdTrace};
use alusim_core::{Alu, AluFunc};

#[derive(Parser, Debug)]
#[command(
    name = "alusim",
    author,
    version,
    about = "Parameterizable-width ALU model",
    long_about = "Evaluate single ALU operations or drive a stimulus sequence through the ALU.\n\nExamples:\n  alusim eval add 0x7f 0x01\n  alusim eval rol 0b1000_0001 0 --carry-in\n  alusim run --vcd alu.vcd\n  alusim run --stimulus steps.json --config alu.json --jsonl trace.jsonl"
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a single operation.
    Eval {
        /// Operation mnemonic (e.g. ADD) or raw selector code.
        #[arg(value_parser = parse_func)]
        func: u8,

        /// Operand A (decimal, 0x hex or 0b binary).
        #[arg(value_parser = parse_operand)]
        a: u64,

        /// Operand B (decimal, 0x hex or 0b binary).
        #[arg(value_parser = parse_operand, default_value = "0")]
        b: u64,

        /// Word width in bits.
        #[arg(short, long, default_value_t = 8)]
        width: u32,

        /// Present a set carry to ROL/ROR.
        #[arg(long)]
        carry_in: bool,

        /// Value driven on OUT by CLC/CLV.
        #[arg(long, value_enum, default_value_t = ClearResultArg::Reset)]
        clear_result: ClearResultArg,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Run a stimulus sequence (the reference demo sequence by default).
    Run {
        /// JSON array of steps: [{"a": 1, "b": 85, "func": "ADD"}, ...].
        #[arg(short, long)]
        stimulus: Option<PathBuf>,

        /// JSON configuration: {"width": 8, "clear_result": "reset", "chain_carry": true}.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the configured width.
        #[arg(short, long)]
        width: Option<u32>,

        /// Write a VCD waveform.
        #[arg(long)]
        vcd: Option<PathBuf>,

        /// Write one JSON object per step.
        #[arg(long)]
        jsonl: Option<PathBuf>,

        /// Print statistics as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ClearResultArg {
    /// OUT = 0.
    Reset,
    /// OUT = A.
    PassThrough,
}

impl From<ClearResultArg> for ClearResult {
    fn from(arg: ClearResultArg) -> Self {
        match arg {
            ClearResultArg::Reset => Self::Reset,
            ClearResultArg::PassThrough => Self::PassThrough,
        }
    }
}

type CliResult = Result<(), Box<dyn Error>>;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Eval {
            func,
            a,
            b,
            width,
            carry_in,
            clear_result,
            json,
        } => cmd_eval(func, a, b, width, carry_in, clear_result.into(), json),
        Commands::Run {
            stimulus,
            config,
            width,
            vcd,
            jsonl,
            json,
        } => cmd_run(
            stimulus.as_deref(),
            config.as_deref(),
            width,
            vcd.as_deref(),
            jsonl.as_deref(),
            json,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs a stderr subscriber; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Evaluates one operation and prints OUT and the flags.
fn cmd_eval(
    func: u8,
    a: u64,
    b: u64,
    width: u32,
    carry_in: bool,
    clear_result: ClearResult,
    json: bool,
) -> CliResult {
    let alu = Alu::new(width)?.with_clear_result(clear_result);
    let output = alu.execute_code(func, a, b, carry_in);

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let name = AluFunc::from_code(func).map_or("reserved (pass-through)", AluFunc::mnemonic);
    let digits = width as usize;
    println!("func      {name} ({func})");
    println!("A         {:#0w$b}", alu.width().truncate(a), w = digits + 2);
    println!("B         {:#0w$b}", alu.width().truncate(b), w = digits + 2);
    println!("OUT       {:#0w$b} ({:#x})", output.out, output.out, w = digits + 2);
    println!("zero      {}", u8::from(output.zero));
    println!("carry     {}", u8::from(output.carry));
    println!("negative  {}", u8::from(output.negative));
    println!("overflow  {}", u8::from(output.overflow));
    println!("signed    {}", u8::from(output.signed));
    Ok(())
}

/// Runs a stimulus sequence, writing any requested traces.
fn cmd_run(
    stimulus: Option<&Path>,
    config: Option<&Path>,
    width: Option<u32>,
    vcd: Option<&Path>,
    jsonl: Option<&Path>,
    json: bool,
) -> CliResult {
    let mut config = match config {
        Some(path) => AluConfig::from_json(&fs::read_to_string(path)?)?,
        None => AluConfig::default(),
    };
    if let Some(width) = width {
        config.width = width;
    }

    let stimulus = match stimulus {
        Some(path) => Stimulus::from_json(&fs::read_to_string(path)?)?,
        None => Stimulus::demo(),
    };

    let mut sinks = TraceFanout::new();
    if let Some(path) = vcd {
        sinks.push(VcdTrace::new(BufWriter::new(File::create(path)?)));
    }
    if let Some(path) = jsonl {
        sinks.push(JsonLinesTrace::new(BufWriter::new(File::create(path)?)));
    }

    let mut driver = Driver::from_config(&config)?;
    let stats = driver.run(&stimulus, &mut sinks)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{stats}");
    }
    Ok(())
}

/// Parses a mnemonic or a raw selector code.
fn parse_func(s: &str) -> Result<u8, String> {
    if let Ok(code) = parse_operand(s) {
        return u8::try_from(code).map_err(|_| format!("selector code {code} does not fit in 8 bits"));
    }
    s.parse::<AluFunc>()
        .map(AluFunc::code)
        .map_err(|e| e.to_string())
}

/// Parses a decimal, `0x` hex or `0b` binary operand; `_` separators are allowed.
fn parse_operand(s: &str) -> Result<u64, String> {
    let cleaned = s.replace('_', "");
    let lower = cleaned.to_ascii_lowercase();
    let parsed = if let Some(hex) = lower.strip_prefix("0x") {
        u64::from_str_radix(hex, 16)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        u64::from_str_radix(bin, 2)
    } else {
        lower.parse::<u64>()
    };
    parsed.map_err(|e| format!("invalid operand `{s}`: {e}"))
}
