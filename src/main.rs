//! lsb-steg - hide text in images and WAV audio.
//!
//! Writes one message bit into the least significant bit of each RGB channel or
//! PCM sample, optionally obfuscated with a password.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use lsb_steg::{CarrierFile, CarrierKind, Error, StegoConfig};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "lsb-steg")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Hide text in the least significant bits of images and WAV audio",
    long_about = "Embeds one message bit per RGB channel or 16-bit PCM sample, changing no sample by more than one step. An optional password XOR-obfuscates the message."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a message in a carrier and write the result
    Encode {
        /// Cover image or WAV file
        carrier: PathBuf,

        /// Output path (use a lossless format such as PNG, BMP or WAV)
        output: PathBuf,

        /// Message text to hide
        #[arg(long, short, conflicts_with = "input")]
        message: Option<String>,

        /// UTF-8 text file to hide
        #[arg(long, short, conflicts_with = "message")]
        input: Option<PathBuf>,

        /// Prompt for a password and obfuscate the message with it
        #[arg(long, short)]
        password: bool,

        /// Carrier kind (default: detect from extension)
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
    },

    /// Recover a hidden message
    Decode {
        /// Image or WAV file holding a message
        carrier: PathBuf,

        /// Prompt for the password used when encoding
        #[arg(long, short)]
        password: bool,

        /// Output file (default: stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Carrier kind (default: detect from extension)
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
    },

    /// Show how much text a carrier can hold
    Capacity {
        /// Image or WAV file
        carrier: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Carrier kind (default: detect from extension)
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Image,
    Audio,
}

impl From<KindArg> for CarrierKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Image => CarrierKind::Image,
            KindArg::Audio => CarrierKind::Audio,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        if matches!(e.downcast_ref::<Error>(), Some(Error::Decryption)) {
            eprintln!("Hint: check the password, or decode without --password");
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Encode {
            carrier,
            output,
            message,
            input,
            password,
            kind,
        } => cmd_encode(&carrier, &output, message, input, password, kind),

        Commands::Decode {
            carrier,
            password,
            output,
            kind,
        } => cmd_decode(&carrier, password, output, kind),

        Commands::Capacity {
            carrier,
            json,
            kind,
        } => cmd_capacity(&carrier, json, kind),
    }
}

fn prompt_password(prompt: &str) -> io::Result<String> {
    match rpassword::prompt_password(prompt) {
        Ok(password) => Ok(password),
        Err(_) => {
            eprint!("{}", prompt);
            io::stderr().flush()?;
            let mut password = String::new();
            io::stdin().read_line(&mut password)?;
            Ok(password.trim_end_matches(&['\r', '\n'][..]).to_string())
        }
    }
}

fn read_message(message: Option<String>, input: Option<PathBuf>) -> anyhow::Result<String> {
    match (message, input) {
        (Some(text), None) => Ok(text),
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read message from {}", path.display())),
        (None, None) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read message from stdin")?;
            Ok(buffer)
        }
        (Some(_), Some(_)) => unreachable!(),
    }
}

fn open_carrier(path: &Path, kind: Option<CarrierKind>) -> anyhow::Result<CarrierFile> {
    CarrierFile::open(path, kind)
        .with_context(|| format!("failed to open carrier {}", path.display()))
}

fn cmd_encode(
    carrier_path: &Path,
    output: &Path,
    message: Option<String>,
    input: Option<PathBuf>,
    password: bool,
    kind: Option<KindArg>,
) -> anyhow::Result<()> {
    let text = read_message(message, input)?;

    let password = if password {
        let password = prompt_password("Password: ")?;
        let confirm = prompt_password("Confirm password: ")?;
        if password != confirm {
            bail!("passwords do not match");
        }
        Some(password)
    } else {
        None
    };

    let config = StegoConfig::new(password, kind.map(CarrierKind::from));
    config.validate()?;

    let mut carrier = open_carrier(carrier_path, config.kind)?;
    let summary = carrier.hide(&text, config.password.as_deref())?;
    carrier
        .save(output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!("Message encoded successfully into {}", output.display());
    println!("  Carrier:      {}", carrier.kind());
    println!("  Payload:      {} bits", summary.payload_bits);
    println!(
        "  Slots used:   {} of {}",
        summary.frame_bits, summary.carrier_slots
    );
    if summary.obfuscated {
        println!("  Obfuscated:   yes");
    }

    Ok(())
}

fn cmd_decode(
    carrier_path: &Path,
    password: bool,
    output: Option<PathBuf>,
    kind: Option<KindArg>,
) -> anyhow::Result<()> {
    let password = if password {
        Some(prompt_password("Password: ")?)
    } else {
        None
    };

    let config = StegoConfig::new(password, kind.map(CarrierKind::from));
    config.validate()?;

    let carrier = open_carrier(carrier_path, config.kind)?;

    let text = carrier.reveal(config.password.as_deref())?;

    match output {
        Some(path) => {
            std::fs::write(&path, &text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote {} bytes to {}", text.len(), path.display());
        }
        None => {
            println!("{}", text);
        }
    }

    Ok(())
}

fn cmd_capacity(carrier_path: &Path, json: bool, kind: Option<KindArg>) -> anyhow::Result<()> {
    let carrier = open_carrier(carrier_path, kind.map(CarrierKind::from))?;
    let report = carrier.capacity_report();

    if json {
        println!("{}", serde_json::to_string_pretty(&report).map_err(Error::from)?);
        return Ok(());
    }

    println!("Carrier Capacity");
    println!("================");
    println!("Kind:             {}", carrier.kind());
    println!("Sample slots:     {}", report.slots);
    println!("Header:           {} bits", report.header_bits);
    println!("Payload:          {} bits", report.max_payload_bits);
    println!("Plain text:       {} bytes", report.max_text_bytes);
    println!("With password:    {} bytes", report.max_text_bytes / 2);

    Ok(())
}
