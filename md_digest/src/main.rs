use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use md_forge::{digest, Md5, Message, Sha256};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(ValueEnum, Copy, Clone, Debug)]
enum Algorithm {
    Sha256,
    Md5,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// hash function to use
    #[arg(short, long, value_enum, default_value_t = Algorithm::Sha256)]
    algorithm: Algorithm,

    /// ASCII text to hash
    #[arg(short, long)]
    input: Option<String>,

    /// the file to read input from, hashed as raw bytes
    ///
    /// the program will read from stdin if neither file or input are set
    #[arg(short, long, conflicts_with = "input")]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args: Args = Args::try_parse()?;

    // read in the data to hash
    let data = if let Some(ref text) = args.input {
        Message::from(text).to_bytes()?
    } else if let Some(ref file) = args.file {
        fs::read(file).with_context(|| format!("Reading from {file:?} to get input data."))?
    } else {
        let mut data = vec![];
        io::stdin().read_to_end(&mut data)?;
        data
    };
    log::info!("hashing {} bytes with {:?}", data.len(), args.algorithm);

    let hex = match args.algorithm {
        Algorithm::Sha256 => digest::<Sha256>(&data)?.to_string(),
        Algorithm::Md5 => digest::<Md5>(&data)?.to_string(),
    };
    println!("{hex}");

    Ok(())
}
