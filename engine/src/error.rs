use thiserror::Error;

/// SealText 对外暴露的全部错误类型
///
/// 所有错误信息都不携带密码、明文或密钥。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SealTextError {
    /// 明文不是合法的 UTF-8 文本
    #[error("plaintext is not valid UTF-8 text")]
    TypeMismatch,

    /// token 不是合法的 base64
    #[error("token is not valid base64")]
    InvalidEncoding,

    /// 解码后的 token 长度不足以容纳 salt + nonce + tag
    #[error("token too short: {len} bytes decoded, at least {min} required", min = crate::format::token::MIN_TOKEN_LEN)]
    TokenTooShort { len: usize },

    /// 密码错误或数据被篡改（刻意不区分）
    #[error("decryption failed (wrong password or tampered data)")]
    AuthenticationFailure,

    /// 操作系统随机源不可用
    #[error("operating system entropy source unavailable")]
    EntropyUnavailable,

    #[error("internal error")]
    Internal,
}
