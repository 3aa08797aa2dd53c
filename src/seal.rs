//! Sealing the serialized calendar into the output blob.
//!
//! AES-128-CTR under a key provided out-of-band, with a fresh random IV per
//! run. The blob protects confidentiality only: there is no integrity tag,
//! so corruption or tampering is undetectable by the reader.

use aes::Aes128;
use aes::cipher::{KeyIvInit, StreamCipher};
use anyhow::{Context, Result, anyhow};
use rand::RngCore;
use rand::rngs::OsRng;

type Aes128Ctr = ctr::Ctr128BE<Aes128>;

/// One run's encrypted output: the public IV and the ciphertext.
pub struct SealedBlob {
    pub iv: [u8; 16],
    pub ciphertext: Vec<u8>,
}

impl SealedBlob {
    /// Artifact layout: lowercase hex IV, one newline, raw ciphertext bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(33 + self.ciphertext.len());
        out.extend_from_slice(hex::encode(self.iv).as_bytes());
        out.push(b'\n');
        out.extend_from_slice(&self.ciphertext);
        out
    }
}

/// Encrypt `plaintext` under the hex-encoded 128-bit key.
///
/// Key decoding, key length, and RNG failures are all fatal; they surface
/// before anything is written.
pub fn seal(key_hex: &str, plaintext: &[u8]) -> Result<SealedBlob> {
    let key = decode_key(key_hex)?;

    let mut iv = [0u8; 16];
    OsRng
        .try_fill_bytes(&mut iv)
        .context("drawing IV from the OS RNG")?;

    let mut ciphertext = plaintext.to_vec();
    apply_keystream(&key, &iv, &mut ciphertext);

    Ok(SealedBlob { iv, ciphertext })
}

fn decode_key(key_hex: &str) -> Result<[u8; 16]> {
    let key = hex::decode(key_hex.trim()).context("decoding encryption key")?;
    key.try_into()
        .map_err(|_| anyhow!("encryption key must be 16 bytes (32 hex characters)"))
}

/// CTR mode is its own inverse: the same call encrypts and decrypts.
fn apply_keystream(key: &[u8; 16], iv: &[u8; 16], buf: &mut [u8]) {
    let mut cipher = Aes128Ctr::new(key.into(), iv.into());
    cipher.apply_keystream(buf);
}
