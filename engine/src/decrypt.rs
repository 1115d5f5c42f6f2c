//! SealText 解密流程实现
//!
//! 解密流程（严格顺序）：
//! 1. 解码 token，校验最小长度
//! 2. 使用 token 中的 salt + 密码重新派生 AEAD key
//! 3. 使用 token 中的 nonce 解密并校验认证标签
//! 4. 校验明文为合法 UTF-8
//!
//! 注意：
//! - 任何一步失败都不返回部分明文
//! - UTF-8 校验失败与认证失败同等对待

use zeroize::Zeroize;

use crate::crypto::{aead, kdf};
use crate::error::SealTextError;
use crate::format::token::Token;

/// 使用密码解密 token
pub fn decrypt_token(password: &str, token: &str) -> Result<String, SealTextError> {
    // ---------- 解码 token ----------
    let token = Token::decode(token)?;

    // ---------- KDF 派生密钥 ----------
    let key = kdf::derive_default_key(password, &token.salt);

    // ---------- AEAD 解密 ----------
    let plaintext = aead::open(&key, &token.nonce, &token.ciphertext, None)
        .inspect_err(|_| tracing::debug!("token failed authentication"))?;

    let plaintext = String::from_utf8(plaintext).map_err(|e| {
        let mut bytes = e.into_bytes();
        bytes.zeroize();

        tracing::debug!("token failed authentication");
        SealTextError::AuthenticationFailure
    })?;

    tracing::debug!(plaintext_len = plaintext.len(), "decrypted token");

    Ok(plaintext)
}
