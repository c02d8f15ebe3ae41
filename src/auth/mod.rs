pub mod extractor;
pub mod jwt;
pub mod nonce;
pub mod password;
