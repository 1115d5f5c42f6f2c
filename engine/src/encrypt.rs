//! SealText 加密流程实现
//!
//! 加密流程（严格顺序）：
//! 1. 生成 salt
//! 2. 使用 KDF 从密码派生 AEAD key
//! 3. 生成 nonce
//! 4. AES-256-GCM 加密
//! 5. 拼接并编码为 token
//!
//! 注意：
//! - salt 与 nonce 每次调用都重新生成，key 不做缓存
//! - 不记录密码、明文或密钥

use crate::crypto::{aead, kdf, rng};
use crate::error::SealTextError;
use crate::format::token::Token;

/// 使用密码加密文本
pub fn encrypt_text(password: &str, plaintext: &str) -> Result<String, SealTextError> {
    // ---------- 生成 salt ----------
    let salt = rng::random_bytes::<{ kdf::SALT_LEN }>()?;

    // ---------- KDF 派生密钥 ----------
    let key = kdf::derive_default_key(password, &salt);

    // ---------- 生成 nonce ----------
    let nonce = rng::random_bytes::<{ aead::NONCE_LEN }>()?;

    // ---------- AEAD 加密 ----------
    let ciphertext = aead::seal(&key, &nonce, plaintext.as_bytes(), None)?;

    let token = Token::new(salt, nonce, ciphertext).encode();

    tracing::debug!(
        plaintext_len = plaintext.len(),
        token_len = token.len(),
        "encrypted text"
    );

    Ok(token)
}

/// 使用密码加密原始字节，字节必须是合法 UTF-8
///
/// 校验在消耗任何随机数之前完成。
pub fn encrypt_bytes(password: &str, plaintext: &[u8]) -> Result<String, SealTextError> {
    let text = std::str::from_utf8(plaintext).map_err(|_| {
        tracing::debug!(len = plaintext.len(), "rejected non UTF-8 plaintext");
        SealTextError::TypeMismatch
    })?;

    encrypt_text(password, text)
}
