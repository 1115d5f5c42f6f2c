//! SealText 密钥派生函数（KDF）模块
//!
//! 本模块通过 PBKDF2-HMAC-SHA256 将用户密码与随机 salt
//! 拉伸为 32 字节对称密钥，供 AES-256-GCM 使用。
//!
//! 设计约束：
//! - 迭代次数为固定常量，不写入 token
//! - 加密与解密必须使用同一个常量，否则旧 token 将无法解密
//! - 派生出的密钥只在一次加/解密调用内存活，离开作用域自动清零

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroizing;

/// 派生密钥长度（256-bit）
pub const KEY_LEN: usize = 32;

/// salt 长度（字节）
pub const SALT_LEN: usize = 16;

/// PBKDF2 迭代次数
///
/// 修改该值会导致所有旧 token 只能得到 AuthenticationFailure。
pub const PBKDF2_ITERATIONS: u32 = 200_000;

/// 根据密码、salt 与迭代次数派生对称密钥
///
/// 相同的 (password, salt, iterations) 总是得到相同的密钥。
pub fn derive_key(
    password: &str,
    salt: &[u8; SALT_LEN],
    iterations: u32,
) -> Zeroizing<[u8; KEY_LEN]> {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);

    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut key[..]);

    tracing::trace!(iterations, "derived key");

    key
}

/// 使用固定迭代次数 [`PBKDF2_ITERATIONS`] 派生密钥
pub fn derive_default_key(password: &str, salt: &[u8; SALT_LEN]) -> Zeroizing<[u8; KEY_LEN]> {
    derive_key(password, salt, PBKDF2_ITERATIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    // PBKDF2-HMAC-SHA256 公开测试向量，P = "password"，S = "salt"
    // 这里的 salt 只有 4 字节，所以直接调用底层函数
    #[test]
    fn pbkdf2_sha256_known_answers() {
        let cases = [
            (1, "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b"),
            (2, "ae4d0c95af6b46d32d0adff928f06dd02a303f8ef3c251dfd6e2d85a95474c43"),
            (4096, "c5e478d59288c841aa530db6845c4c8d962893a001ce4e11a4963873aa98134a"),
        ];

        for (iterations, expected) in cases {
            let mut key = [0u8; KEY_LEN];
            pbkdf2_hmac::<Sha256>(b"password", b"salt", iterations, &mut key);
            assert_eq!(hex(&key), expected, "iterations = {iterations}");
        }
    }

    #[test]
    fn derive_key_is_deterministic() {
        let salt = [7u8; SALT_LEN];

        let a = derive_key("password", &salt, 1000);
        let b = derive_key("password", &salt, 1000);

        assert_eq!(*a, *b);
    }

    #[test]
    fn derive_key_depends_on_every_input() {
        let salt = [7u8; SALT_LEN];
        let base = derive_key("password", &salt, 1000);

        let mut other_salt = salt;
        other_salt[0] ^= 1;

        assert_ne!(*base, *derive_key("Password", &salt, 1000));
        assert_ne!(*base, *derive_key("password", &other_salt, 1000));
        assert_ne!(*base, *derive_key("password", &salt, 1001));
    }

    #[test]
    fn default_key_uses_fixed_iteration_count() {
        let salt = [1u8; SALT_LEN];

        assert_eq!(
            *derive_default_key("你好", &salt),
            *derive_key("你好", &salt, PBKDF2_ITERATIONS)
        );
    }
}
