//! SealText 随机源
//!
//! salt 与 nonce 均来自操作系统的密码学安全随机数生成器（OsRng）。
//!
//! 约束：
//! - 不允许使用可复现的种子或自定义 RNG
//! - 随机源失败视为致命错误，直接返回，不重试

use rand::{RngCore, rngs::OsRng};

use crate::error::SealTextError;

/// 生成 `N` 字节的随机数据
///
/// #### 错误
/// - 操作系统随机源不可用时返回 EntropyUnavailable
pub fn random_bytes<const N: usize>() -> Result<[u8; N], SealTextError> {
    let mut bytes = [0u8; N];

    OsRng.try_fill_bytes(&mut bytes).map_err(|e| {
        tracing::error!(error = %e, "OS random source failed");
        SealTextError::EntropyUnavailable
    })?;

    Ok(bytes)
}
