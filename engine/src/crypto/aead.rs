//! SealText AEAD 加解密模块
//!
//! 本模块基于 AES-256-GCM 实现 AEAD（Authenticated Encryption
//! with Associated Data）。
//!
//! 功能说明：
//! - 提供“加密 + 完整性校验”一体化能力
//! - 密文末尾附带 16 字节认证标签
//! - 解密失败即表示：密码错误 或 数据被篡改，二者不作区分
//!
//! 安全约束：
//! - 同一把密钥下 nonce 严禁复用（由调用方保证）
//! - 不允许在未校验通过的情况下输出任何明文

use aes_gcm::{
    Aes256Gcm, Key, Nonce,
    aead::{Aead, KeyInit, Payload},
};

use crate::crypto::kdf::KEY_LEN;
use crate::error::SealTextError;

/// AES-GCM 使用的 nonce 长度（96 bit，标准推荐值）
pub const NONCE_LEN: usize = 12;

/// 认证标签长度（128 bit）
pub const TAG_LEN: usize = 16;

/// 使用 AES-256-GCM 加密数据
///
/// #### 参数
/// - `key`：32 字节对称密钥（来自 KDF）
/// - `nonce`：12 字节 nonce，调用方保证对同一密钥唯一
/// - `plaintext`：待加密的数据
/// - `aad`：可选的关联数据，只认证不加密
///
/// #### 返回
/// - 密文 ‖ 16 字节认证标签
pub fn seal(
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    plaintext: &[u8],
    aad: Option<&[u8]>,
) -> Result<Vec<u8>, SealTextError> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));

    cipher
        .encrypt(
            Nonce::from_slice(nonce),
            Payload {
                msg: plaintext,
                aad: aad.unwrap_or_default(),
            },
        )
        // 仅在明文超过 AES-GCM 长度上限时发生
        .map_err(|_| SealTextError::Internal)
}

/// 使用 AES-256-GCM 解密数据
///
/// #### 错误
/// - 密钥、nonce、关联数据不匹配或密文被篡改时，
///   统一返回 AuthenticationFailure
///
/// #### 安全保证
/// - 在认证未通过前，不会泄露任何明文数据
pub fn open(
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    ciphertext: &[u8],
    aad: Option<&[u8]>,
) -> Result<Vec<u8>, SealTextError> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));

    cipher
        .decrypt(
            Nonce::from_slice(nonce),
            Payload {
                msg: ciphertext,
                aad: aad.unwrap_or_default(),
            },
        )
        .map_err(|_| SealTextError::AuthenticationFailure)
}
