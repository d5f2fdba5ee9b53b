use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use pixcode::instruction::PaymentInstruction;
use pixcode::payload;
use pixcode::reader::InstructionReader;
use rust_decimal::Decimal;
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the "copia e cola" payload for one payment instruction
    Encode {
        /// Pix key (CPF, CNPJ, email, phone, or random key)
        #[arg(long)]
        key: String,

        /// Recipient name (normalized to uppercase ASCII, max 25 chars)
        #[arg(long)]
        name: String,

        /// Recipient city (normalized to uppercase ASCII, max 15 chars)
        #[arg(long)]
        city: String,

        /// Transaction amount; omit for an open-amount payload
        #[arg(long)]
        amount: Option<Decimal>,

        /// Transaction id for reconciliation (max 25 chars)
        #[arg(long)]
        txid: Option<String>,

        /// Free-form description (max 72 chars)
        #[arg(long)]
        description: Option<String>,

        /// Print the full result as JSON instead of just the payload
        #[arg(long)]
        json: bool,
    },

    /// Encode every instruction in a CSV file (key,name,city,amount,txid,description)
    Batch {
        /// Input instructions CSV file
        input: PathBuf,
    },

    /// Check whether a payload string is well formed
    Validate {
        /// Payload to check
        payload: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Encode {
            key,
            name,
            city,
            amount,
            txid,
            description,
            json,
        } => {
            let instruction = PaymentInstruction {
                key,
                recipient_name: name,
                recipient_city: city,
                amount,
                txid,
                description,
            };
            let pix = payload::encode(&instruction).into_diagnostic()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&pix).into_diagnostic()?
                );
            } else {
                println!("{}", pix.payload);
            }
        }
        Command::Batch { input } => {
            let file = File::open(input).into_diagnostic()?;
            let reader = InstructionReader::new(file);
            for result in reader.instructions() {
                match result.and_then(|instruction| payload::encode(&instruction)) {
                    Ok(pix) => println!("{}", pix.payload),
                    Err(e) => eprintln!("Error encoding instruction: {}", e),
                }
            }
        }
        Command::Validate { payload } => {
            if payload::validate_payload(&payload) {
                println!("valid");
            } else {
                println!("invalid");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
