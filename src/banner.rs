use crate::key::KeyPair;
use std::io::{self, Write};

/// Renders the welcome text with both credentials.
pub fn render(key_pair: &KeyPair) -> String {
    format!(
        "\nWelcome to Network Next!\n\n\
         This is your public key:\n\n    {}\n\n\
         This is your private key:\n\n    {}\n\n\
         IMPORTANT: Save your private key in a secure place and don't share it with anybody, not even us!\n\n",
        key_pair.public().encode(),
        key_pair.private().encode(),
    )
}

/// Writes the banner in a single call so a failure never leaves half of it behind.
pub fn write_to<W: Write>(out: &mut W, key_pair: &KeyPair) -> io::Result<()> {
    out.write_all(render(key_pair).as_bytes())?;
    out.flush()
}
