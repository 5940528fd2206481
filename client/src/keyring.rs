//! Keyring of signing identities derived from secret URIs

use std::fmt;
use std::str::FromStr;

use sp_core::{
    crypto::{AccountId32, Ss58AddressFormat, Ss58Codec},
    ed25519, sr25519, Pair,
};
use sp_runtime::{
    traits::{IdentifyAccount, Verify},
    MultiSignature, MultiSigner,
};

use crate::error::{ClientError, Result};

/// Generic Substrate SS58 prefix
pub const SS58_PREFIX: u16 = 42;

/// Derivation paths of the development accounts
pub const DEV_ACCOUNT_URIS: [&str; 2] = ["//Alice", "//Bob"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyScheme {
    #[default]
    Sr25519,
    Ed25519,
}

impl FromStr for KeyScheme {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sr25519" => Ok(KeyScheme::Sr25519),
            "ed25519" => Ok(KeyScheme::Ed25519),
            other => Err(ClientError::UnknownScheme(other.to_string())),
        }
    }
}

impl fmt::Display for KeyScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyScheme::Sr25519 => f.write_str("sr25519"),
            KeyScheme::Ed25519 => f.write_str("ed25519"),
        }
    }
}

#[derive(Clone)]
enum SigningPair {
    Sr25519(sr25519::Pair),
    Ed25519(ed25519::Pair),
}

/// A named key pair held by the keyring
#[derive(Clone)]
pub struct KeyringPair {
    name: String,
    pair: SigningPair,
}

impl KeyringPair {
    /// Derive a pair from a secret URI (`//Alice`, mnemonic with junctions, hex seed).
    pub fn from_uri(scheme: KeyScheme, uri: &str) -> Result<Self> {
        let invalid = |_| ClientError::InvalidSecretUri(redact(uri));
        let pair = match scheme {
            KeyScheme::Sr25519 => {
                SigningPair::Sr25519(sr25519::Pair::from_string(uri, None).map_err(invalid)?)
            }
            KeyScheme::Ed25519 => {
                SigningPair::Ed25519(ed25519::Pair::from_string(uri, None).map_err(invalid)?)
            }
        };

        let mut keypair = Self { name: String::new(), pair };
        keypair.name = match uri.strip_prefix("//") {
            Some(path) => path.split("///").next().unwrap_or(path).to_lowercase(),
            // never name a pair after its secret phrase
            None => keypair.address(),
        };
        Ok(keypair)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scheme(&self) -> KeyScheme {
        match self.pair {
            SigningPair::Sr25519(_) => KeyScheme::Sr25519,
            SigningPair::Ed25519(_) => KeyScheme::Ed25519,
        }
    }

    pub fn signer(&self) -> MultiSigner {
        match &self.pair {
            SigningPair::Sr25519(pair) => MultiSigner::from(pair.public()),
            SigningPair::Ed25519(pair) => MultiSigner::from(pair.public()),
        }
    }

    pub fn account_id(&self) -> AccountId32 {
        self.signer().into_account()
    }

    /// SS58 address with the generic Substrate prefix
    pub fn address(&self) -> String {
        self.account_id()
            .to_ss58check_with_version(Ss58AddressFormat::custom(SS58_PREFIX))
    }

    pub fn sign(&self, message: &[u8]) -> MultiSignature {
        match &self.pair {
            SigningPair::Sr25519(pair) => pair.sign(message).into(),
            SigningPair::Ed25519(pair) => pair.sign(message).into(),
        }
    }
}

impl fmt::Debug for KeyringPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyringPair")
            .field("name", &self.name)
            .field("scheme", &self.scheme())
            .field("address", &self.address())
            .finish()
    }
}

/// Verify a signature against an account
pub fn verify(signature: &MultiSignature, message: &[u8], account: &AccountId32) -> bool {
    signature.verify(message, account)
}

/// Named key pairs of a single scheme
#[derive(Debug, Clone)]
pub struct Keyring {
    scheme: KeyScheme,
    pairs: Vec<KeyringPair>,
}

impl Keyring {
    pub fn new(scheme: KeyScheme) -> Self {
        Self { scheme, pairs: Vec::new() }
    }

    /// Keyring holding the Alice and Bob development accounts
    pub fn dev_accounts(scheme: KeyScheme) -> Result<Self> {
        let mut keyring = Self::new(scheme);
        for uri in DEV_ACCOUNT_URIS {
            keyring.add_from_uri(uri)?;
        }
        Ok(keyring)
    }

    pub fn scheme(&self) -> KeyScheme {
        self.scheme
    }

    /// Derive and store a pair.
    ///
    /// Names are case-insensitive while junctions are not, so `//alice` and
    /// `//Alice` share a name but not a key. A name already bound to another
    /// key is an error; re-adding the same key is a no-op.
    pub fn add_from_uri(&mut self, uri: &str) -> Result<&KeyringPair> {
        let pair = KeyringPair::from_uri(self.scheme, uri)?;

        let taken = self.pairs.iter().position(|p| p.name.eq_ignore_ascii_case(&pair.name));
        if let Some(index) = taken {
            let existing = &self.pairs[index];
            if existing.account_id() != pair.account_id() {
                return Err(ClientError::NameTaken {
                    name: existing.name.clone(),
                    address: existing.address(),
                });
            }
            return Ok(existing);
        }

        tracing::debug!("Keyring added {} ({})", pair.name(), pair.address());
        let index = self.pairs.len();
        self.pairs.push(pair);
        Ok(&self.pairs[index])
    }

    /// Look up a pair by name, ignoring case
    pub fn get(&self, name: &str) -> Option<&KeyringPair> {
        self.pairs.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn pairs(&self) -> &[KeyringPair] {
        &self.pairs
    }

    /// Resolve a keyring name or an SS58 address to an account
    pub fn resolve_account(&self, name_or_address: &str) -> Result<AccountId32> {
        if let Some(pair) = self.get(name_or_address) {
            return Ok(pair.account_id());
        }
        AccountId32::from_ss58check(name_or_address)
            .map_err(|_| ClientError::UnknownAccount(name_or_address.to_string()))
    }

    /// (name, address) of every pair
    pub fn list(&self) -> Vec<(String, String)> {
        self.pairs.iter().map(|p| (p.name.clone(), p.address())).collect()
    }
}

fn redact(uri: &str) -> String {
    if uri.starts_with("//") {
        uri.split("///").next().unwrap_or(uri).to_string()
    } else {
        "<secret>".to_string()
    }
}
