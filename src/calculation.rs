//! # 计算能力契约
//!
//! 定义 "一次已完成的计算" 的统一接口，使下游分析代码对具体的
//! 模拟软件后端保持多态。
//!
//! ## 依赖关系
//! - 被 `parsers/` 的具体后端实现
//! - 使用 `error.rs`

use std::path::Path;

use crate::error::{CalcoutError, Result};

/// 已完成计算的结果提取契约
///
/// 每个后端绑定一个主输出文件路径，构造时不做任何 I/O，
/// 校验推迟到访问器调用时。访问器是无状态的幂等读取：
/// 结果只由磁盘上当前的字节决定，不缓存。
pub trait Calculation {
    /// 后端名称（用于错误信息和下游报告）
    fn backend_name(&self) -> &'static str;

    /// 绑定的主输出文件路径
    fn output_path(&self) -> &Path;

    /// 返回最终电子能量 (Hartree)
    ///
    /// 所有后端都必须实现：这是对任何受支持软件包
    /// 唯一保证可用的量。
    fn final_energy(&self) -> Result<f64>;

    /// 返回振动频率序列 (cm⁻¹)，负值表示虚频
    ///
    /// 可选能力，默认返回 `Unsupported`；只有提供频率提取的
    /// 后端才覆盖此方法。频率数据可能写在独立的振动分析日志中，
    /// 因此路径是显式参数，与构造时绑定的 `output_path` 无关。
    fn vibrational_frequencies(&self, _output_path: &Path) -> Result<Vec<f64>> {
        Err(CalcoutError::Unsupported {
            backend: self.backend_name().to_string(),
            operation: "vibrational_frequencies".to_string(),
        })
    }
}
