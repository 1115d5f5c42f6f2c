//! SealText token 格式。

pub mod token;
