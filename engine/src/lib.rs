mod encrypt;
mod decrypt;

pub mod crypto;
pub mod format;
pub mod error;

pub use crypto::aead::{NONCE_LEN, TAG_LEN};
pub use crypto::kdf::{KEY_LEN, PBKDF2_ITERATIONS, SALT_LEN};
pub use error::SealTextError;
pub use format::token::{MIN_TOKEN_LEN, Token};

/// 使用密码加密文本，返回 base64 token
///
/// 每次调用都会生成新的 salt 与 nonce，
/// 因此相同的密码与明文也会得到不同的 token。
pub fn encrypt(password: &str, plaintext: &str) -> Result<String, SealTextError> {
    encrypt::encrypt_text(password, plaintext)
}

/// 加密原始字节，非 UTF-8 输入返回 TypeMismatch
pub fn encrypt_utf8(password: &str, plaintext: &[u8]) -> Result<String, SealTextError> {
    encrypt::encrypt_bytes(password, plaintext)
}

/// 使用密码解密 token
///
/// 失败时只会返回 InvalidEncoding、TokenTooShort
/// 或 AuthenticationFailure，不会返回部分明文。
/// token 首尾的 ASCII 空白（如末尾换行）会被忽略，中间出现的非 base64 字符仍返回 InvalidEncoding。
pub fn decrypt(password: &str, token: &str) -> Result<String, SealTextError> {
    decrypt::decrypt_token(password, token)
}
