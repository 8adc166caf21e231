//! wallet-savelink CLI: `savelink` command.
//!
//! Builds wallet object references, mints signed "Save to Google Wallet"
//! links from a service-account key, and inspects existing links.
//! Every setting can come from a flag or from the environment.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};

use wallet_savelink::{
    build_save_url, decode_unverified, load_issuer_identity, verify_save_token,
    verify_save_token_from, ObjectReference, SaveUrl, WalletObjectType, SAVE_URL_PREFIX,
};

const DEFAULT_USER_ID: &str = "test@example.com";

// ── CLI structure ─────────────────────────────────────────────────────────────

/// wallet-savelink CLI: build and inspect signed Save to Google Wallet links.
#[derive(Parser, Debug)]
#[command(
    name = "savelink",
    about = "Save to Google Wallet link builder",
    version,
    long_about = "savelink: Save to Google Wallet link builder\n\nBuild wallet object IDs, sign save tokens with a service-account key,\nand inspect or verify existing save links."
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Which wallet object a command is about.
#[derive(Args, Debug)]
struct ObjectArgs {
    /// Issuer ID from the Google Pay & Wallet console
    #[arg(long, env = "WALLET_ISSUER_ID")]
    issuer_id: Option<String>,

    /// Developer-defined user ID, e.g. an email address
    #[arg(long, env = "WALLET_USER_ID", default_value = DEFAULT_USER_ID)]
    user_id: String,

    /// Developer-defined class ID (default: test-<object-type>-class-id)
    #[arg(long, env = "WALLET_CLASS_ID")]
    class_id: Option<String>,

    /// Pass type (generic, loyalty, offer, giftCard, eventTicket, flight, transit)
    #[arg(long, default_value = "loyalty")]
    object_type: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the object ID for an issuer, user and class
    ObjectId {
        #[command(flatten)]
        object: ObjectArgs,
    },

    /// Sign a save token and print the Save to Wallet URL
    SaveUrl {
        /// Path to the service-account key file
        #[arg(long, env = "GOOGLE_APPLICATION_CREDENTIALS")]
        credentials: PathBuf,

        /// Web origin allowed to show the save button (repeatable, or comma separated)
        #[arg(long = "origin", env = "WALLET_ORIGINS", value_delimiter = ',')]
        origins: Vec<String>,

        /// Explicit object ID to save (repeatable); skips ID construction
        #[arg(long = "object-id")]
        object_ids: Vec<String>,

        #[command(flatten)]
        object: ObjectArgs,
    },

    /// Decode a save URL or token, verifying it when a public key is given
    Inspect {
        /// Save URL or bare compact token
        token: String,

        /// Issuer's RSA public key (PEM) to verify the signature with
        #[arg(long)]
        public_key: Option<PathBuf>,

        /// Require this issuer identity when verifying
        #[arg(long, requires = "public_key")]
        issuer: Option<String>,
    },
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let verbose = cli.verbose;
    let result = match cli.command {
        Commands::ObjectId { object } => cmd_object_id(&object, verbose),
        Commands::SaveUrl {
            credentials,
            origins,
            object_ids,
            object,
        } => cmd_save_url(&credentials, &origins, &object_ids, &object, verbose),
        Commands::Inspect {
            token,
            public_key,
            issuer,
        } => cmd_inspect(&token, public_key.as_deref(), issuer.as_deref(), verbose),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_object_type(s: &str) -> Result<WalletObjectType> {
    s.parse::<WalletObjectType>()
        .context("invalid --object-type")
}

/// Resolve the object reference described by `args`.
fn object_reference(args: &ObjectArgs, object_type: WalletObjectType) -> Result<ObjectReference> {
    let issuer_id = args
        .issuer_id
        .as_deref()
        .ok_or_else(|| anyhow!("--issuer-id (or WALLET_ISSUER_ID) is required"))?;
    let class_id = args
        .class_id
        .clone()
        .unwrap_or_else(|| object_type.default_class_id());

    ObjectReference::new(issuer_id, &args.user_id, &class_id)
        .context("cannot build object ID")
}

/// Accept either a full save URL or a bare token.
fn token_of(input: &str) -> Result<String> {
    let input = input.trim();
    if input.starts_with(SAVE_URL_PREFIX) {
        let url = SaveUrl::parse(input).context("invalid save URL")?;
        Ok(url.token().to_string())
    } else {
        Ok(input.to_string())
    }
}

// ── Command implementations ───────────────────────────────────────────────────

/// `savelink object-id --issuer-id ID [--user-id U] [--class-id C]`
fn cmd_object_id(args: &ObjectArgs, verbose: bool) -> Result<()> {
    let object_type = parse_object_type(&args.object_type)?;
    let reference = object_reference(args, object_type)?;

    println!("{reference}");
    if verbose {
        println!("  Type:        {object_type}");
        println!("  Payload key: {}", object_type.payload_key());
        println!("  Resource:    {}", object_type.object_url(&reference));
    }
    Ok(())
}

/// `savelink save-url --credentials KEY.json --origin O ...`
fn cmd_save_url(
    credentials: &Path,
    origins: &[String],
    object_ids: &[String],
    args: &ObjectArgs,
    verbose: bool,
) -> Result<()> {
    let object_type = parse_object_type(&args.object_type)?;
    let references: Vec<String> = if object_ids.is_empty() {
        vec![object_reference(args, object_type)?.to_string()]
    } else {
        object_ids.to_vec()
    };

    let issuer = load_issuer_identity(credentials)
        .with_context(|| format!("cannot load credentials from {}", credentials.display()))?;

    let url = build_save_url(&issuer, origins, &references, &object_type.payload_key())
        .context("cannot build save URL")?;

    if verbose {
        eprintln!("Issuer:   {}", issuer.identity());
        if let Some(key_id) = issuer.key_id() {
            eprintln!("Key ID:   {key_id}");
        }
        eprintln!("Origins:  {}", origins.join(", "));
        for reference in &references {
            eprintln!("Object:   {reference}");
        }
    }
    println!("{url}");
    Ok(())
}

/// `savelink inspect <URL|TOKEN> [--public-key PEM] [--issuer ISS]`
fn cmd_inspect(
    input: &str,
    public_key: Option<&Path>,
    issuer: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let token = token_of(input)?;
    let decoded = decode_unverified(&token).context("cannot decode token")?;

    let verified = match public_key {
        Some(path) => {
            let pem = std::fs::read_to_string(path)
                .with_context(|| format!("cannot read public key {}", path.display()))?;
            let checked = match issuer {
                Some(iss) => verify_save_token_from(&token, &pem, iss),
                None => verify_save_token(&token, &pem),
            };
            checked.context("signature verification failed")?;
            Some(true)
        }
        None => None,
    };

    let report = serde_json::json!({
        "header": decoded.header,
        "claim": decoded.claim,
        "signature_bytes": decoded.signature_len,
        "verified": verified,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    if verbose && verified.is_none() {
        eprintln!("note: signature not checked (pass --public-key to verify)");
    }
    Ok(())
}
