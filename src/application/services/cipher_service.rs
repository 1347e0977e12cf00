//! # Cipher Service
//!
//! AES and RSA helpers behind the `/encryption` routes.
//!
//! - AES-256-CBC with PKCS#7 padding. The key string's UTF-8 bytes are
//!   repeated to 32 bytes and the IV is all zeroes, so equal plaintexts
//!   under equal keys produce equal ciphertexts.
//! - RSA-OAEP with SHA-256. Keys travel as base64 PKCS#1 DER.
//!
//! Ciphertext is base64 (standard alphabet, padded) in both directions.
//!
//! Every failure is a tagged [`ServiceError`] so the cryptography classifier
//! can map it to a fixed, sanitized response.
//!
//! # Examples
//!
//! ```
//! use quote_relay::application::services::cipher_service::{CipherConfig, CipherService};
//!
//! let svc = CipherService::new(CipherConfig::default());
//! let encrypted = svc.encrypt_aes("hello", "secret").unwrap();
//! assert_eq!(svc.decrypt_aes(&encrypted, "secret").unwrap(), "hello");
//! ```

use crate::application::error::{ServiceError, ServiceResult};
use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey, EncodeRsaPrivateKey, EncodeRsaPublicKey};
use rsa::rand_core::OsRng;
use rsa::sha2::Sha256;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use serde::{Deserialize, Serialize};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

const AES_KEY_LEN: usize = 32;
const AES_IV: [u8; 16] = [0u8; 16];

/// Cipher limits and key sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherConfig {
    /// Modulus size for generated RSA keys.
    pub rsa_key_bits: usize,
    /// Largest input, in bytes, any operation will accept.
    pub max_input_bytes: usize,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            rsa_key_bits: 2048,
            max_input_bytes: 1024 * 1024,
        }
    }
}

/// A generated RSA key pair, both halves base64 PKCS#1 DER.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsaKeyPair {
    /// Public key.
    pub public_key: String,
    /// Private key.
    pub private_key: String,
}

/// Symmetric and asymmetric encryption helpers.
#[derive(Debug, Clone, Copy, Default)]
pub struct CipherService {
    config: CipherConfig,
}

impl CipherService {
    /// Creates a new CipherService.
    #[must_use]
    pub fn new(config: CipherConfig) -> Self {
        Self { config }
    }

    /// Encrypts `plain_text` with AES-256-CBC and returns base64.
    ///
    /// # Errors
    ///
    /// - `InvalidKey` if `key` is empty
    /// - `ResourceExhausted` if the input exceeds the configured limit
    pub fn encrypt_aes(&self, plain_text: &str, key: &str) -> ServiceResult<String> {
        self.check_size(plain_text)?;
        let key = derive_aes_key(key)?;
        let encryptor = Aes256CbcEnc::new_from_slices(&key, &AES_IV)
            .map_err(|e| ServiceError::invalid_key(e.to_string()))?;
        let encrypted = encryptor.encrypt_padded_vec_mut::<Pkcs7>(plain_text.as_bytes());
        Ok(BASE64.encode(encrypted))
    }

    /// Decrypts base64 AES-256-CBC ciphertext.
    ///
    /// # Errors
    ///
    /// - `InvalidKey` if `key` is empty
    /// - `MalformedData` if `cipher_text` is not base64
    /// - `CipherFailure` if padding or UTF-8 decoding fails
    /// - `ResourceExhausted` if the input exceeds the configured limit
    pub fn decrypt_aes(&self, cipher_text: &str, key: &str) -> ServiceResult<String> {
        self.check_size(cipher_text)?;
        let key = derive_aes_key(key)?;
        let encrypted = decode_base64(cipher_text)?;
        let decryptor = Aes256CbcDec::new_from_slices(&key, &AES_IV)
            .map_err(|e| ServiceError::invalid_key(e.to_string()))?;
        let decrypted = decryptor
            .decrypt_padded_vec_mut::<Pkcs7>(&encrypted)
            .map_err(|_| ServiceError::cipher_failure("Padding is invalid and cannot be removed."))?;
        into_utf8(decrypted)
    }

    /// Generates an RSA key pair of the configured size.
    ///
    /// This is CPU-bound; callers on an async runtime should run it on the
    /// blocking pool.
    ///
    /// # Errors
    ///
    /// Returns `CipherFailure` if generation or encoding fails.
    pub fn generate_rsa_key_pair(&self) -> ServiceResult<RsaKeyPair> {
        let private_key = RsaPrivateKey::new(&mut OsRng, self.config.rsa_key_bits)
            .map_err(|e| ServiceError::cipher_failure(e.to_string()))?;
        let public_key = RsaPublicKey::from(&private_key);

        let public_der = public_key
            .to_pkcs1_der()
            .map_err(|e| ServiceError::cipher_failure(e.to_string()))?;
        let private_der = private_key
            .to_pkcs1_der()
            .map_err(|e| ServiceError::cipher_failure(e.to_string()))?;

        Ok(RsaKeyPair {
            public_key: BASE64.encode(public_der.as_bytes()),
            private_key: BASE64.encode(private_der.as_bytes()),
        })
    }

    /// Encrypts `plain_text` with RSA-OAEP-SHA256 and returns base64.
    ///
    /// # Errors
    ///
    /// - `MalformedData` if `public_key` is not base64
    /// - `InvalidKey` if it is not a PKCS#1 public key
    /// - `CipherFailure` if the message is too long for the key
    /// - `ResourceExhausted` if the input exceeds the configured limit
    pub fn encrypt_rsa(&self, plain_text: &str, public_key: &str) -> ServiceResult<String> {
        self.check_size(plain_text)?;
        let der = decode_base64(public_key)?;
        let key = RsaPublicKey::from_pkcs1_der(&der)
            .map_err(|e| ServiceError::invalid_key(format!("invalid public key: {e}")))?;
        let encrypted = key
            .encrypt(&mut OsRng, Oaep::new::<Sha256>(), plain_text.as_bytes())
            .map_err(|e| ServiceError::cipher_failure(e.to_string()))?;
        Ok(BASE64.encode(encrypted))
    }

    /// Decrypts base64 RSA-OAEP-SHA256 ciphertext.
    ///
    /// # Errors
    ///
    /// - `MalformedData` if either input is not base64
    /// - `InvalidKey` if `private_key` is not a PKCS#1 private key
    /// - `CipherFailure` if decryption or UTF-8 decoding fails
    /// - `ResourceExhausted` if the input exceeds the configured limit
    pub fn decrypt_rsa(&self, cipher_text: &str, private_key: &str) -> ServiceResult<String> {
        self.check_size(cipher_text)?;
        let der = decode_base64(private_key)?;
        let key = RsaPrivateKey::from_pkcs1_der(&der)
            .map_err(|e| ServiceError::invalid_key(format!("invalid private key: {e}")))?;
        let encrypted = decode_base64(cipher_text)?;
        let decrypted = key
            .decrypt(Oaep::new::<Sha256>(), &encrypted)
            .map_err(|e| ServiceError::cipher_failure(e.to_string()))?;
        into_utf8(decrypted)
    }

    fn check_size(&self, input: &str) -> ServiceResult<()> {
        if input.len() > self.config.max_input_bytes {
            return Err(ServiceError::resource_exhausted(format!(
                "input of {} bytes exceeds limit of {} bytes",
                input.len(),
                self.config.max_input_bytes
            )));
        }
        Ok(())
    }
}

/// Repeats the key's UTF-8 bytes to fill an AES-256 key.
fn derive_aes_key(key: &str) -> ServiceResult<[u8; AES_KEY_LEN]> {
    let bytes = key.as_bytes();
    if bytes.is_empty() {
        return Err(ServiceError::invalid_key("key must not be empty"));
    }

    let mut derived = [0u8; AES_KEY_LEN];
    for (slot, byte) in derived.iter_mut().zip(bytes.iter().cycle()) {
        *slot = *byte;
    }
    Ok(derived)
}

fn decode_base64(input: &str) -> ServiceResult<Vec<u8>> {
    BASE64
        .decode(input.trim())
        .map_err(|e| ServiceError::malformed_data(format!("The input is not a valid Base-64 string: {e}")))
}

fn into_utf8(bytes: Vec<u8>) -> ServiceResult<String> {
    String::from_utf8(bytes).map_err(|e| ServiceError::cipher_failure(e.to_string()))
}
