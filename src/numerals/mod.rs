//! 口述数字转换模块
//!
//! 两类相互独立的转换器，统一契约：数字词入，数值出，失败返回错误
//!
//! - 位置重建族（中文）：反向扫描 + 数位槽重建，容忍转写噪声
//! - 乘法累加族（英文/阿拉伯文）：逐词累加，量级词处折算

pub mod arabic;
pub mod chinese;
pub mod english;
pub(crate) mod tables;
mod words;

pub use arabic::ArabicNumeralParser;
pub use chinese::ChineseNumeralConverter;
pub use english::EnglishNumeralParser;

use crate::error::NumNormResult;
use serde::{Deserialize, Serialize};

/// 乘法累加族的语言变体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordLanguage {
    English,
    Arabic,
}

/// 将中文汉字数字转换为数字串（位置重建族）
///
/// `ChineseNumeralConverter::convert` 的函数形式
pub fn convert_positional_numeral(text: &str) -> NumNormResult<String> {
    ChineseNumeralConverter::convert(text)
}

/// 将数字单词短语转换为整数（乘法累加族）
///
/// `EnglishNumeralParser::convert` / `ArabicNumeralParser::convert` 的统一入口
pub fn convert_multiplicative_numeral(text: &str, language: WordLanguage) -> NumNormResult<i64> {
    match language {
        WordLanguage::English => EnglishNumeralParser::convert(text),
        WordLanguage::Arabic => ArabicNumeralParser::convert(text),
    }
}
