//! SealText token 编解码
//!
//! token 是一次加密结果的完整、自包含的文本表示：
//!
//! ```text
//! base64_standard( salt[16] ‖ nonce[12] ‖ ciphertext ‖ tag[16] )
//! ```
//!
//! 约束：
//! - 无版本号、无迭代次数、无关联数据
//! - 字段顺序固定，长度固定（密文除外）
//! - 本模块只校验编码与最小长度，真伪只由 AEAD 判断

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::crypto::aead::{NONCE_LEN, TAG_LEN};
use crate::crypto::kdf::SALT_LEN;
use crate::error::SealTextError;

/// 解码后 token 的最小长度（空明文）
///
/// 16 (salt) + 12 (nonce) + 16 (tag)
pub const MIN_TOKEN_LEN: usize = SALT_LEN + NONCE_LEN + TAG_LEN;

/// 解析后的 token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub salt: [u8; SALT_LEN],
    pub nonce: [u8; NONCE_LEN],
    /// 密文 ‖ 认证标签
    pub ciphertext: Vec<u8>,
}

impl Token {
    pub fn new(salt: [u8; SALT_LEN], nonce: [u8; NONCE_LEN], ciphertext: Vec<u8>) -> Self {
        Self {
            salt,
            nonce,
            ciphertext,
        }
    }

    /// 按固定顺序拼接后编码为 base64（标准字母表，带填充）
    pub fn encode(&self) -> String {
        let mut frame = Vec::with_capacity(SALT_LEN + NONCE_LEN + self.ciphertext.len());
        frame.extend_from_slice(&self.salt);
        frame.extend_from_slice(&self.nonce);
        frame.extend_from_slice(&self.ciphertext);

        STANDARD.encode(frame)
    }

    /// 从文本解析 token
    ///
    /// 首尾的 ASCII 空白（例如复制粘贴带入的换行）会被忽略。
    ///
    /// #### 错误
    /// - 不是合法 base64 时返回 InvalidEncoding
    /// - 解码后不足 [`MIN_TOKEN_LEN`] 字节时返回 TokenTooShort
    pub fn decode(token: &str) -> Result<Self, SealTextError> {
        let frame = STANDARD
            .decode(token.trim_ascii())
            .map_err(|_| SealTextError::InvalidEncoding)?;

        let too_short = SealTextError::TokenTooShort { len: frame.len() };
        if frame.len() < MIN_TOKEN_LEN {
            return Err(too_short);
        }

        let Some((salt, rest)) = frame.split_first_chunk::<SALT_LEN>() else {
            return Err(too_short);
        };
        let Some((nonce, ciphertext)) = rest.split_first_chunk::<NONCE_LEN>() else {
            return Err(too_short);
        };

        Ok(Self {
            salt: *salt,
            nonce: *nonce,
            ciphertext: ciphertext.to_vec(),
        })
    }
}
