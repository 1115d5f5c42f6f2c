//! SealText 密码学原语：随机源、密钥派生与 AEAD。

pub mod aead;
pub mod kdf;
pub mod rng;
