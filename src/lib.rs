mod banner;
mod error;
mod key;

pub use banner::{render, write_to};
pub use error::{Error, Result};
pub use key::{
    BuyerId, KeyPair, PrivateCredential, PublicCredential, BUYER_ID_BYTES,
    PRIVATE_CREDENTIAL_BYTES, PRIVATE_KEY_BYTES, PUBLIC_CREDENTIAL_BYTES, PUBLIC_KEY_BYTES,
    SEED_BYTES,
};
