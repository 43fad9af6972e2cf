use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use md_forge::encoding::{Decodable, Encodable};
use md_forge::{forge, MerkleDamgard, Md5, Message, SecretPrefixMac, Sha256};

#[derive(ValueEnum, Copy, Clone, Debug)]
enum Algorithm {
    Sha256,
    Md5,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// hash function the MAC is built on
    #[arg(short, long, value_enum, default_value_t = Algorithm::Sha256, global = true)]
    algorithm: Algorithm,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// play both victim and attacker, checking the forgery is accepted
    Demo(DemoArgs),
    /// forge a MAC knowing only a digest and the secret's length
    Forge(ForgeArgs),
}

#[derive(Args, Debug)]
struct DemoArgs {
    /// the message the victim signs
    #[arg(short, long)]
    message: String,

    /// the victim's secret prefix
    #[arg(short, long)]
    secret: String,

    /// data to append to the signed message
    #[arg(short, long)]
    extension: String,
}

#[derive(Args, Debug)]
struct ForgeArgs {
    /// hex encoded MAC of the known message
    #[arg(short, long)]
    digest: String,

    /// length in bytes of the secret prefix
    #[arg(long)]
    secret_len: usize,

    /// the message the digest was computed over, without the secret
    #[arg(short, long)]
    message: String,

    /// data to append to the signed message
    #[arg(short, long)]
    extension: String,
}

fn text_bytes(text: &str, what: &str) -> Result<Vec<u8>> {
    Message::from(text)
        .to_bytes()
        .with_context(|| format!("Encoding the {what} as ASCII."))
}

fn demo<H: MerkleDamgard>(args: &DemoArgs) -> Result<()> {
    let message = text_bytes(&args.message, "message")?;
    let secret = text_bytes(&args.secret, "secret")?;
    let extension = text_bytes(&args.extension, "extension")?;

    let mac = SecretPrefixMac::<H>::new(&secret);
    let original = mac.sign(&message)?;
    println!("original mac:     {}", original.encode_hex());

    let forgery = forge::<H>(original, mac.key_len(), &message, &extension)?;
    println!("extended message: {}", forgery.message.encode_hex());

    let target = mac.sign(&forgery.message)?;
    println!("target mac:       {}", target.encode_hex());
    println!("forged mac:       {}", forgery.digest.encode_hex());

    let accepted = mac.verify(&forgery.message, &forgery.digest)?;
    println!("success:          {accepted}");
    if !accepted {
        bail!("The forged {} MAC was rejected.", H::NAME);
    }

    Ok(())
}

fn forge_from_digest<H: MerkleDamgard>(args: &ForgeArgs) -> Result<()> {
    let raw = args
        .digest
        .decode_hex()
        .with_context(|| format!("Decoding {:?} as a hex digest.", args.digest))?;
    let original = <H::Digest as TryFrom<&[u8]>>::try_from(&raw[..])
        .with_context(|| format!("Reading a {} digest.", H::NAME))?;
    let message = text_bytes(&args.message, "message")?;
    let extension = text_bytes(&args.extension, "extension")?;

    let forgery = forge::<H>(original, args.secret_len, &message, &extension)?;
    println!("extended message: {}", forgery.message.encode_hex());
    println!("forged mac:       {}", forgery.digest.encode_hex());

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli: Cli = Cli::try_parse()?;
    log::debug!("{cli:?}");

    match (&cli.command, cli.algorithm) {
        (Command::Demo(args), Algorithm::Sha256) => demo::<Sha256>(args),
        (Command::Demo(args), Algorithm::Md5) => demo::<Md5>(args),
        (Command::Forge(args), Algorithm::Sha256) => forge_from_digest::<Sha256>(args),
        (Command::Forge(args), Algorithm::Md5) => forge_from_digest::<Md5>(args),
    }
}
