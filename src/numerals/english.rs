//! 英文数字解析模块
//!
//! 将英文数字单词序列转换为整数
//!
//! 支持：zero ~ nineteen, twenty, thirty, ..., ninety, hundred, thousand,
//! million, billion, trillion；连接词 and 跳过；连字符视作分词符

use crate::error::NumNormResult;
use crate::numerals::tables;
use crate::numerals::words::{accumulate, WordTable};

const EN_TABLE: WordTable = WordTable {
    entries: tables::EN_WORDS,
    conjunction: tables::EN_CONJUNCTION,
    fold_threshold: 1_000,
    hundreds_scale_group: true,
    two_word_lookahead: false,
};

/// 英文数字解析器
pub struct EnglishNumeralParser;

impl EnglishNumeralParser {
    /// 将英文数字短语转换为整数
    ///
    /// # 参数
    /// - `text`: 英文数字文本（例如："one hundred twenty-three"）
    ///
    /// # 返回
    /// - `Ok(i64)`: 转换后的整数
    /// - `Err(UnrecognizedWord)`: 短语中出现表外单词，整体失败
    /// - `Err(Overflow)`: 数值越过 i64 可表示范围
    ///
    /// 匹配不区分大小写；"thousand" 等裸量级词隐含系数 1。
    ///
    /// # 示例
    /// ```
    /// # use numnorm_core::numerals::EnglishNumeralParser;
    /// let n = EnglishNumeralParser::convert("two thousand five hundred forty-six").unwrap();
    /// assert_eq!(n, 2546);
    /// ```
    pub fn convert(text: &str) -> NumNormResult<i64> {
        let prepared = text.to_lowercase().replace('-', " ");
        let words: Vec<&str> = prepared.split_whitespace().collect();
        accumulate(&words, &EN_TABLE)
    }

    /// 检查文本是否全部由英文数字单词（含连接词）组成
    pub fn is_number_phrase(text: &str) -> bool {
        let prepared = text.to_lowercase().replace('-', " ");
        let mut has_value_word = false;
        for word in prepared.split_whitespace() {
            if EN_TABLE.lookup(word).is_some() {
                has_value_word = true;
            } else if word != EN_TABLE.conjunction {
                return false;
            }
        }
        has_value_word
    }
}
