//! Subcommand handlers.
//!
//! Each handler returns a report that knows how to print itself both as
//! plain text and as JSON; `main` decides which.

use std::fmt;
use std::io::BufRead;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use zeroize::Zeroizing;

use nacl_keys::config::PUBLIC_KEY_LENGTH;
use nacl_keys::{GeneratorConfig, KeyFormat, KeyGenerator, KeyType, SecretInput};

use crate::cli::{DecodeArgs, EncodeArgs, GenerateArgs, RecognizeArgs};

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// Output of `generate`. No `Debug`, it may hold the private key.
#[derive(Serialize)]
pub struct GeneratedReport {
    pub format: KeyFormat,
    pub identity: String,
    pub public_key: String,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_secret"
    )]
    pub private_key: Option<Zeroizing<String>>,
}

fn serialize_secret<S>(value: &Option<Zeroizing<String>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match value {
        Some(secret) => serializer.serialize_str(secret),
        None => serializer.serialize_none(),
    }
}

impl fmt::Display for GeneratedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "format      : {}", self.format)?;
        writeln!(f, "identity    : {}", self.identity)?;
        write!(f, "public key  : {}", self.public_key)?;
        if let Some(private_key) = &self.private_key {
            write!(f, "\nprivate key : {}", private_key.as_str())?;
        }
        Ok(())
    }
}

/// Output of `encode` and `decode`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct IdentityReport {
    pub format: KeyFormat,
    pub identity: String,
    pub public_key: String,
}

impl fmt::Display for IdentityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "format     : {}", self.format)?;
        writeln!(f, "identity   : {}", self.identity)?;
        write!(f, "public key : {}", self.public_key)
    }
}

/// One line of `recognize` output.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Recognition {
    pub identity: String,
    pub key_type: KeyType,
    pub code: u8,
}

/// Output of `recognize`.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct RecognizeReport(pub Vec<Recognition>);

impl fmt::Display for RecognizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}\t{}", entry.key_type, entry.identity)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Setup
// ---------------------------------------------------------------------------

/// Load generator settings from a JSON file, or use the defaults.
pub fn load_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    let Some(path) = path else {
        return Ok(GeneratorConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: GeneratorConfig = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    tracing::info!(path = %path.display(), ?config, "loaded generator config");
    Ok(config)
}

/// The passphrase from the argument, or else the first line of `reader`.
pub fn read_passphrase(arg: Option<String>, mut reader: impl BufRead) -> Result<Zeroizing<String>> {
    if let Some(passphrase) = arg {
        return Ok(Zeroizing::new(passphrase));
    }

    let mut line = Zeroizing::new(String::new());
    let read = reader
        .read_line(&mut line)
        .context("failed to read passphrase from stdin")?;
    if read == 0 {
        bail!("no passphrase given: pass --passphrase, set NACL_KEYS_PASSPHRASE, or pipe it on stdin");
    }
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(line)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

pub fn generate(
    generator: &KeyGenerator,
    args: GenerateArgs,
    passphrase: &str,
) -> Result<GeneratedReport> {
    let input = SecretInput::pair(args.email, passphrase);
    let (keypair, identity) = generator
        .generate_identity(args.format, &input)
        .with_context(|| format!("failed to generate {} keypair", args.format))?;

    Ok(GeneratedReport {
        format: args.format,
        identity,
        public_key: keypair.public_key_hex(),
        private_key: args.show_private.then(|| keypair.private_key_hex()),
    })
}

pub fn encode(generator: &KeyGenerator, args: EncodeArgs) -> Result<IdentityReport> {
    let public_key = hex::decode(args.public_key.trim()).context("public key is not valid hex")?;
    if public_key.len() != PUBLIC_KEY_LENGTH {
        bail!(
            "public key must be {PUBLIC_KEY_LENGTH} bytes ({} hex characters), got {} bytes",
            PUBLIC_KEY_LENGTH * 2,
            public_key.len()
        );
    }
    let identity = generator.encode(args.format, &public_key)?;

    Ok(IdentityReport {
        format: args.format,
        identity,
        public_key: hex::encode(public_key),
    })
}

pub fn decode(generator: &KeyGenerator, args: DecodeArgs) -> Result<IdentityReport> {
    let identity = args.identity.trim();
    let (format, public_key) = match args.format {
        Some(format) => (format, generator.decode(format, identity)?),
        None => generator
            .decode_any(identity)
            .context("could not determine the identity format")?,
    };

    Ok(IdentityReport {
        format,
        identity: identity.to_string(),
        public_key: hex::encode(public_key),
    })
}

pub fn recognize(generator: &KeyGenerator, args: RecognizeArgs) -> RecognizeReport {
    let entries = args
        .identities
        .into_iter()
        .map(|identity| {
            let key_type = generator.recognize_with(identity.trim(), !args.shape_only);
            Recognition {
                code: key_type.code(),
                key_type,
                identity,
            }
        })
        .collect();
    RecognizeReport(entries)
}
