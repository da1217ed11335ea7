use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use ring::{
    rand::SecureRandom,
    signature::{Ed25519KeyPair, KeyPair as _, UnparsedPublicKey, ED25519},
};
use std::fmt;

pub const BUYER_ID_BYTES: usize = 8;
pub const SEED_BYTES: usize = 32;
pub const PUBLIC_KEY_BYTES: usize = 32;
/// Seed followed by the public key.
pub const PRIVATE_KEY_BYTES: usize = SEED_BYTES + PUBLIC_KEY_BYTES;

pub const PUBLIC_CREDENTIAL_BYTES: usize = BUYER_ID_BYTES + PUBLIC_KEY_BYTES;
pub const PRIVATE_CREDENTIAL_BYTES: usize = BUYER_ID_BYTES + PRIVATE_KEY_BYTES;

/// Random identifier shared by both halves of a buyer key pair.
///
/// Nothing checks identifiers for uniqueness.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuyerId([u8; BUYER_ID_BYTES]);

impl BuyerId {
    pub fn from_bytes(bytes: [u8; BUYER_ID_BYTES]) -> BuyerId {
        BuyerId(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; BUYER_ID_BYTES] {
        &self.0
    }

    /// The identifier as read by credential consumers (little-endian).
    pub fn as_u64(&self) -> u64 {
        u64::from_le_bytes(self.0)
    }
}

impl fmt::Display for BuyerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for BuyerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BuyerId({})", self)
    }
}

/// Buyer id followed by an Ed25519 public key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicCredential {
    buyer_id: BuyerId,
    public_key: [u8; PUBLIC_KEY_BYTES],
}

impl PublicCredential {
    pub fn buyer_id(&self) -> BuyerId {
        self.buyer_id
    }

    pub fn public_key(&self) -> &[u8; PUBLIC_KEY_BYTES] {
        &self.public_key
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        concat(&self.buyer_id, &self.public_key)
    }

    pub fn encode(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    pub fn decode(encoded: &str) -> Result<PublicCredential> {
        let raw = decode_exact::<PUBLIC_CREDENTIAL_BYTES>(encoded)?;
        let (id, key) = raw.split_at(BUYER_ID_BYTES);

        let mut buyer_id = [0; BUYER_ID_BYTES];
        buyer_id.copy_from_slice(id);
        let mut public_key = [0; PUBLIC_KEY_BYTES];
        public_key.copy_from_slice(key);

        Ok(PublicCredential {
            buyer_id: BuyerId(buyer_id),
            public_key,
        })
    }

    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<()> {
        UnparsedPublicKey::new(&ED25519, &self.public_key)
            .verify(message, signature)
            .map_err(|_| Error::InvalidSignature)
    }
}

impl fmt::Display for PublicCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Buyer id followed by an Ed25519 private key (seed, then public key).
#[derive(Clone)]
pub struct PrivateCredential {
    buyer_id: BuyerId,
    private_key: [u8; PRIVATE_KEY_BYTES],
}

impl PrivateCredential {
    pub fn buyer_id(&self) -> BuyerId {
        self.buyer_id
    }

    pub fn private_key(&self) -> &[u8; PRIVATE_KEY_BYTES] {
        &self.private_key
    }

    fn seed(&self) -> &[u8] {
        &self.private_key[..SEED_BYTES]
    }

    fn public_key(&self) -> &[u8] {
        &self.private_key[SEED_BYTES..]
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        concat(&self.buyer_id, &self.private_key)
    }

    pub fn encode(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    /// Decodes a private credential, rejecting one whose public half was not
    /// derived from its seed.
    pub fn decode(encoded: &str) -> Result<PrivateCredential> {
        let raw = decode_exact::<PRIVATE_CREDENTIAL_BYTES>(encoded)?;
        let (id, key) = raw.split_at(BUYER_ID_BYTES);

        let mut buyer_id = [0; BUYER_ID_BYTES];
        buyer_id.copy_from_slice(id);
        let mut private_key = [0; PRIVATE_KEY_BYTES];
        private_key.copy_from_slice(key);

        let credential = PrivateCredential {
            buyer_id: BuyerId(buyer_id),
            private_key,
        };
        credential.key_pair()?;

        Ok(credential)
    }

    fn key_pair(&self) -> Result<Ed25519KeyPair> {
        Ed25519KeyPair::from_seed_and_public_key(self.seed(), self.public_key())
            .map_err(|_| Error::KeyMismatch)
    }

    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        let key_pair = self.key_pair()?;
        Ok(key_pair.sign(message).as_ref().to_vec())
    }

    pub fn public_credential(&self) -> PublicCredential {
        let mut public_key = [0; PUBLIC_KEY_BYTES];
        public_key.copy_from_slice(self.public_key());

        PublicCredential {
            buyer_id: self.buyer_id,
            public_key,
        }
    }

    /// Checks that `public` is the other half of this credential.
    pub fn matches(&self, public: &PublicCredential) -> Result<()> {
        if self.buyer_id != public.buyer_id {
            return Err(Error::BuyerIdMismatch {
                public: public.buyer_id.to_string(),
                private: self.buyer_id.to_string(),
            });
        }

        if self.public_key() != public.public_key.as_slice() {
            return Err(Error::KeyMismatch);
        }

        Ok(())
    }
}

impl fmt::Debug for PrivateCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateCredential")
            .field("buyer_id", &self.buyer_id)
            .field("private_key", &"***SECRET***")
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct KeyPair {
    public: PublicCredential,
    private: PrivateCredential,
}

impl KeyPair {
    /// Draws a fresh buyer id, then a fresh seed, from `rng`.
    pub fn generate(rng: &dyn SecureRandom) -> Result<KeyPair> {
        let mut buyer_id = [0; BUYER_ID_BYTES];
        rng.fill(&mut buyer_id)?;

        let mut seed = [0; SEED_BYTES];
        rng.fill(&mut seed)?;

        let key_pair = KeyPair::from_parts(BuyerId(buyer_id), &seed)?;
        tracing::debug!(buyer_id = %key_pair.buyer_id(), "generated buyer key pair");

        Ok(key_pair)
    }

    pub fn from_parts(buyer_id: BuyerId, seed: &[u8; SEED_BYTES]) -> Result<KeyPair> {
        let key_pair =
            Ed25519KeyPair::from_seed_unchecked(seed).map_err(|_| Error::KeyGeneration)?;

        let mut public_key = [0; PUBLIC_KEY_BYTES];
        public_key.copy_from_slice(key_pair.public_key().as_ref());

        let mut private_key = [0; PRIVATE_KEY_BYTES];
        private_key[..SEED_BYTES].copy_from_slice(seed);
        private_key[SEED_BYTES..].copy_from_slice(&public_key);

        Ok(KeyPair {
            public: PublicCredential {
                buyer_id,
                public_key,
            },
            private: PrivateCredential {
                buyer_id,
                private_key,
            },
        })
    }

    pub fn buyer_id(&self) -> BuyerId {
        self.public.buyer_id
    }

    pub fn public(&self) -> &PublicCredential {
        &self.public
    }

    pub fn private(&self) -> &PrivateCredential {
        &self.private
    }
}

fn concat(buyer_id: &BuyerId, key: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(BUYER_ID_BYTES + key.len());
    buf.extend_from_slice(buyer_id.as_bytes());
    buf.extend_from_slice(key);
    buf
}

fn decode_exact<const N: usize>(encoded: &str) -> Result<[u8; N]> {
    let raw = STANDARD.decode(encoded.trim())?;
    let len = raw.len();

    raw.try_into()
        .map_err(|_| Error::InvalidCredential(format!("expected {} bytes, got {}", N, len)))
}
