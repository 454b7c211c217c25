//! # 解析器模块
//!
//! 各模拟软件包输出格式的具体提取器，均实现 `Calculation` 契约。
//!
//! ## 依赖关系
//! - 使用 `calculation.rs`, `error.rs`
//! - 子模块: cp2k

pub mod cp2k;
