//! # CP2K 输出解析器
//!
//! 解析 CP2K 的纯文本日志，提取最终能量与振动频率。
//!
//! CP2K 按行输出，感兴趣的行由固定标记识别：
//! - 能量行: `ENERGY| Total FORCE_EVAL ( QS ) energy [a.u.]:  -1234.56789`
//! - 频率行: `VIB|Freq   [cm^-1]   -50.12   102.34   305.67`
//!
//! ## 依赖关系
//! - 实现 `calculation.rs` 的 `Calculation` 契约
//! - 使用 `error.rs`

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::calculation::Calculation;
use crate::error::{CalcoutError, Result};

/// 能量行标记；迭代计算中最后一次出现的即为收敛值
pub const ENERGY_MARKER: &str = "ENERGY|";

/// 振动频率行标记；一行可含多个频率值
pub const FREQUENCY_MARKER: &str = "VIB|Freq";

/// 带符号小数 token，负值对应虚频
fn frequency_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-?\d+\.\d+").unwrap())
}

/// 绑定到一个 CP2K 输出文件的计算
#[derive(Debug, Clone)]
pub struct Cp2k {
    output_path: PathBuf,
}

impl Cp2k {
    /// 绑定输出文件路径；不做 I/O，校验推迟到访问器调用
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Cp2k {
            output_path: output_path.into(),
        }
    }
}

impl Calculation for Cp2k {
    fn backend_name(&self) -> &'static str {
        "CP2K"
    }

    fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn final_energy(&self) -> Result<f64> {
        let content = read_output(&self.output_path)?;
        final_energy_from_content(&content, &self.output_path)
    }

    fn vibrational_frequencies(&self, output_path: &Path) -> Result<Vec<f64>> {
        let content = read_output(output_path)?;
        frequencies_from_content(&content, output_path)
    }
}

/// 从日志文本中提取最终能量 (Hartree)
///
/// 取最后一个含 `ENERGY|` 标记的行，其末尾的空白分隔字段即能量值。
pub fn final_energy_from_content(content: &str, path: &Path) -> Result<f64> {
    let line = content
        .lines()
        .filter(|l| l.contains(ENERGY_MARKER))
        .last()
        .ok_or_else(|| CalcoutError::MarkerNotFound {
            marker: ENERGY_MARKER.to_string(),
            path: path.display().to_string(),
        })?;

    let field = line.split_whitespace().last().unwrap_or("");
    field
        .parse::<f64>()
        .map_err(|_| CalcoutError::MalformedOutput {
            path: path.display().to_string(),
            line: line.to_string(),
            reason: format!("expected trailing float field, found '{}'", field),
        })
}

/// 从日志文本中提取振动频率序列 (cm⁻¹)
///
/// 对每个含 `VIB|Freq` 标记的行，按出现顺序取出所有带符号小数
/// token，跨行拼接成一个平坦序列。无匹配行时返回空序列。
pub fn frequencies_from_content(content: &str, path: &Path) -> Result<Vec<f64>> {
    let mut frequencies = Vec::new();

    for line in content.lines().filter(|l| l.contains(FREQUENCY_MARKER)) {
        for token in frequency_token().find_iter(line) {
            let value =
                token
                    .as_str()
                    .parse::<f64>()
                    .map_err(|_| CalcoutError::MalformedOutput {
                        path: path.display().to_string(),
                        line: line.to_string(),
                        reason: format!("invalid frequency token '{}'", token.as_str()),
                    })?;
            frequencies.push(value);
        }
    }

    Ok(frequencies)
}

fn read_output(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| CalcoutError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })
}
