//! # Calcout - 计算化学输出结果提取库
//!
//! 从模拟软件包的纯文本输出日志中提取类型化的数值结果
//! (最终电子能量、振动频率)，供下游分析代码直接使用，
//! 无需自行解析原始日志。
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── calculation.rs (能力契约 trait)
//!   ├── parsers/       (各软件包的具体提取器)
//!   │     └── cp2k.rs
//!   └── error.rs       (错误处理)
//! ```
//!
//! ## 用法
//! ```no_run
//! use calcout::{Calculation, Cp2k};
//!
//! let calc = Cp2k::new("run/out.log");
//! let energy_ha = calc.final_energy()?;
//! let freqs = calc.vibrational_frequencies("run/vib.log".as_ref())?;
//! # Ok::<(), calcout::CalcoutError>(())
//! ```

pub mod calculation;
pub mod error;
pub mod parsers;

pub use calculation::Calculation;
pub use error::{CalcoutError, Result};
pub use parsers::cp2k::Cp2k;
