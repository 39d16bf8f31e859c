// hamlog - ADIF and Cabrillo log conversion tool
// Usage: hamlog <dump|convert|check> [options]

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use hamlog::adif::{freq_to_band, is_valid, is_valid_strict, Field};
use hamlog::{codec, CodecConfig, Record};

#[derive(Parser, Debug)]
#[command(name = "hamlog", version, about = "ADIF and Cabrillo log conversion tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the records of an ADI file
    Dump {
        input: PathBuf,
        /// Print records as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        codec: CodecArgs,
    },
    /// Convert an ADI file to ADI or Cabrillo
    Convert {
        input: PathBuf,
        output: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Adi)]
        format: Format,
        /// Contest name for the Cabrillo header
        #[arg(long, default_value = "")]
        contest: String,
        /// Own callsign for the Cabrillo header and sent call
        #[arg(long, default_value = "")]
        mycall: String,
        #[command(flatten)]
        codec: CodecArgs,
    },
    /// Validate a single value against a field's declared type
    Check {
        field: String,
        value: String,
        /// Restrict S and M values to printable ASCII
        #[arg(long)]
        strict: bool,
    },
}

#[derive(clap::Args, Debug)]
struct CodecArgs {
    /// Merge COMMENT into NOTES on import
    #[arg(long)]
    merge_comment: bool,
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Adi,
    Cabrillo,
}

impl CodecArgs {
    fn resolve(&self) -> hamlog::Result<CodecConfig> {
        let mut config = match &self.config {
            Some(path) => CodecConfig::load(path)?,
            None => CodecConfig::default(),
        };
        config.merge_comment |= self.merge_comment;
        Ok(config)
    }
}

fn main() {
    // Initialize logging - default to info level for our crate
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("hamlog=info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("hamlog: {}", e);
        process::exit(1);
    }
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Dump { input, json, codec: args } => {
            let config = args.resolve()?;
            let records = codec::read(&input, &config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                for record in &records {
                    dump_record(record);
                }
            }
            for (i, record) in records.iter().enumerate() {
                check_band(i + 1, record);
            }
        }
        Command::Convert { input, output, format, contest, mycall, codec: args } => {
            let config = args.resolve()?;
            let records = codec::read(&input, &config)?;
            match format {
                Format::Adi => codec::write(&records, &output)?,
                Format::Cabrillo => codec::write_cabrillo(&records, &output, &contest, &mycall)?,
            }
        }
        Command::Check { field, value, strict } => {
            let field = Field::from_name(&field).ok_or_else(|| format!("unrecognized field \"{}\"", field))?;
            let valid = if strict {
                is_valid_strict(field.name(), &value, field.data_type())
            } else {
                is_valid(field.name(), &value, field.data_type())
            };
            println!("{}", if valid { "valid" } else { "invalid" });
        }
    }
    Ok(())
}

fn dump_record(record: &Record) {
    println!("RECORD:");
    for (field, value) in record.iter() {
        println!("    {:20}: {}", field.name(), value);
    }
    println!();
}

/// Report records whose FREQ falls outside their BAND
fn check_band(which: usize, record: &Record) {
    if let (Some(freq), Some(band)) = (record.freq(), record.band()) {
        match freq_to_band(freq) {
            Some(expected) if expected == band => {}
            expected => log::warn!(
                "record {}: FREQ {} MHz is not in band {} (expected {})",
                which,
                freq,
                band,
                expected.unwrap_or("none")
            ),
        }
    }
}
