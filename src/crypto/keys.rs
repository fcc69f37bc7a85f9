//! RSA key management
//!
//! Key pair generation, PKCS#1 v1.5 signing over SHA-256 and PEM
//! persistence of both halves of the pair.

use rand::rngs::OsRng;
use rsa::pkcs1::{DecodeRsaPrivateKey, EncodeRsaPrivateKey, EncodeRsaPublicKey, LineEnding};
use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::hash::sha256;

/// Default modulus size in bits
pub const DEFAULT_KEY_BITS: usize = 2048;

/// File name used for the private key
pub const PRIVATE_KEY_FILE: &str = "private_key.pem";

/// File name used for the public key
pub const PUBLIC_KEY_FILE: &str = "public_key.pem";

/// Errors that can occur during key operations
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("RSA error: {0}")]
    Rsa(#[from] rsa::Error),
    #[error("PKCS#1 encoding error: {0}")]
    Encoding(#[from] rsa::pkcs1::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// An RSA private key together with its public half
#[derive(Clone)]
pub struct RsaKeyPair {
    private_key: RsaPrivateKey,
    public_key: RsaPublicKey,
}

impl RsaKeyPair {
    /// Generate a new random key pair with a modulus of `bits` bits
    pub fn generate(bits: usize) -> Result<Self, KeyError> {
        let private_key = RsaPrivateKey::new(&mut OsRng, bits)?;
        Ok(Self::from_private_key(private_key))
    }

    /// Build a key pair from an existing private key
    pub fn from_private_key(private_key: RsaPrivateKey) -> Self {
        let public_key = RsaPublicKey::from(&private_key);
        Self {
            private_key,
            public_key,
        }
    }

    /// Load a key pair from a PKCS#1 `RSA PRIVATE KEY` PEM document
    pub fn from_private_key_pem(pem: &str) -> Result<Self, KeyError> {
        let private_key = RsaPrivateKey::from_pkcs1_pem(pem)?;
        Ok(Self::from_private_key(private_key))
    }

    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public_key
    }

    /// Sign `data`; the message is hashed with SHA-256 first
    pub fn sign(&self, data: &[u8]) -> Result<Vec<u8>, KeyError> {
        let digest = sha256(data);
        let signature = self
            .private_key
            .sign(Pkcs1v15Sign::new::<Sha256>(), &digest)?;
        Ok(signature)
    }

    /// Verify a signature over `data` against this pair's public key
    pub fn verify(&self, data: &[u8], signature: &[u8]) -> Result<(), KeyError> {
        verify_signature(&self.public_key, data, signature)
    }

    /// Private key as a PKCS#1 PEM document
    pub fn private_key_pem(&self) -> Result<String, KeyError> {
        let pem = self.private_key.to_pkcs1_pem(LineEnding::LF)?;
        Ok(pem.to_string())
    }

    /// Public key as a PKCS#1 PEM document
    pub fn public_key_pem(&self) -> Result<String, KeyError> {
        Ok(self.public_key.to_pkcs1_pem(LineEnding::LF)?)
    }

    /// Write the private key into `dir`, readable by the owner only
    pub fn save_private_key(&self, dir: &Path, file_name: &str) -> Result<PathBuf, KeyError> {
        let path = dir.join(file_name);
        write_pem(&path, &self.private_key_pem()?, 0o600)?;
        Ok(path)
    }

    /// Write the public key into `dir`, world readable
    pub fn save_public_key(&self, dir: &Path, file_name: &str) -> Result<PathBuf, KeyError> {
        let path = dir.join(file_name);
        write_pem(&path, &self.public_key_pem()?, 0o644)?;
        Ok(path)
    }
}

/// Verify a PKCS#1 v1.5 signature over `SHA-256(data)`
pub fn verify_signature(
    public_key: &RsaPublicKey,
    data: &[u8],
    signature: &[u8],
) -> Result<(), KeyError> {
    let digest = sha256(data);
    public_key.verify(Pkcs1v15Sign::new::<Sha256>(), &digest, signature)?;
    Ok(())
}

#[cfg(unix)]
fn write_pem(path: &Path, pem: &str, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(mode)
        .open(path)?;
    // An existing file keeps its old mode; narrow it before any key bytes land
    file.set_permissions(fs::Permissions::from_mode(mode))?;
    file.write_all(pem.as_bytes())?;
    Ok(())
}

#[cfg(not(unix))]
fn write_pem(path: &Path, pem: &str, _mode: u32) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(pem.as_bytes())
}
