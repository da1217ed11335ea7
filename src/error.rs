pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unable to generate key material")]
    KeyGeneration,
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),
    #[error("Buyer id mismatch: public key has {public}, private key has {private}")]
    BuyerIdMismatch { public: String, private: String },
    #[error("Public and private keys are not part of the same key pair")]
    KeyMismatch,
    #[error("Invalid signature")]
    InvalidSignature,
}

impl From<ring::error::Unspecified> for Error {
    fn from(_: ring::error::Unspecified) -> Self {
        Error::KeyGeneration
    }
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Error::InvalidCredential(err.to_string())
    }
}
