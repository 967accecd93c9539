use rand::RngCore;

/// Prefix carried by every issued session token
const TOKEN_PREFIX: &str = "tok";

const TOKEN_BYTES: usize = 8;

/// Mint a fresh session token: prefix plus hex-encoded random bytes.
///
/// Tokens are opaque markers of the last authentication attempt; nothing
/// ever verifies them.
pub fn generate_token<R: RngCore + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rng.fill_bytes(&mut bytes);
    format!("{}-{}", TOKEN_PREFIX, hex::encode(bytes))
}
