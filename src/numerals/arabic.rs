//! 阿拉伯文数字解析模块
//!
//! 将阿拉伯文数字单词序列转换为整数
//!
//! 11-19 为双词形式（如 "أحد عشر"），查表前先做双词词组匹配；
//! 整百与双数（dual）形式作为独立词条直接相加，仅千及以上量级触发折算。
//! 语法覆盖刻意保持局部：前缀连写的连接词（如 "وثلاثة"）不展开，
//! 只识别独立出现的 "و"。

use crate::error::NumNormResult;
use crate::numerals::tables;
use crate::numerals::words::{accumulate, WordTable};

const AR_TABLE: WordTable = WordTable {
    entries: tables::AR_WORDS,
    conjunction: tables::AR_CONJUNCTION,
    fold_threshold: 1_000,
    hundreds_scale_group: false,
    two_word_lookahead: true,
};

/// 阿拉伯文数字解析器
pub struct ArabicNumeralParser;

impl ArabicNumeralParser {
    /// 将阿拉伯文数字短语转换为整数
    ///
    /// # 参数
    /// - `text`: 阿拉伯文数字文本（例如："مائة و ثلاثة و عشرون"）
    ///
    /// # 返回
    /// - `Ok(i64)`: 转换后的整数
    /// - `Err(UnrecognizedWord)`: 短语中出现表外单词，整体失败
    /// - `Err(Overflow)`: 数值越过 i64 可表示范围
    pub fn convert(text: &str) -> NumNormResult<i64> {
        let words: Vec<&str> = text.split_whitespace().collect();
        accumulate(&words, &AR_TABLE)
    }

    /// 检查文本是否全部由阿拉伯文数字单词（含连接词）组成
    pub fn is_number_phrase(text: &str) -> bool {
        let words: Vec<&str> = text.split_whitespace().collect();
        let mut has_value_word = false;

        let mut i = 0;
        while i < words.len() {
            if i + 1 < words.len() {
                let phrase = format!("{} {}", words[i], words[i + 1]);
                if AR_TABLE.lookup(&phrase).is_some() {
                    has_value_word = true;
                    i += 2;
                    continue;
                }
            }
            if AR_TABLE.lookup(words[i]).is_some() {
                has_value_word = true;
            } else if words[i] != AR_TABLE.conjunction {
                return false;
            }
            i += 1;
        }
        has_value_word
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NumNormError;

    #[test]
    fn test_single_digit() {
        assert_eq!(ArabicNumeralParser::convert("صفر").unwrap(), 0);
        assert_eq!(ArabicNumeralParser::convert("واحد").unwrap(), 1);
        assert_eq!(ArabicNumeralParser::convert("تسعة").unwrap(), 9);
    }

    #[test]
    fn test_two_word_teens() {
        // 双词词组优先于单词匹配（"عشرة" 单独是 10）
        assert_eq!(ArabicNumeralParser::convert("أحد عشر").unwrap(), 11);
        assert_eq!(ArabicNumeralParser::convert("تسعة عشر").unwrap(), 19);
        assert_eq!(ArabicNumeralParser::convert("عشرة").unwrap(), 10);
    }

    #[test]
    fn test_tens_with_conjunction() {
        assert_eq!(ArabicNumeralParser::convert("عشرون").unwrap(), 20);
        // 23 读作 "三 和 二十"
        assert_eq!(ArabicNumeralParser::convert("ثلاثة و عشرون").unwrap(), 23);
    }

    #[test]
    fn test_hundreds_additive() {
        assert_eq!(ArabicNumeralParser::convert("مائة").unwrap(), 100);
        assert_eq!(ArabicNumeralParser::convert("مئتان").unwrap(), 200);
        assert_eq!(
            ArabicNumeralParser::convert("مائة و ثلاثة و عشرون").unwrap(),
            123
        );
    }

    #[test]
    fn test_thousands_fold() {
        // 裸量级词隐含系数 1
        assert_eq!(ArabicNumeralParser::convert("ألف").unwrap(), 1000);
        // 双数形式本身就是完整数值
        assert_eq!(ArabicNumeralParser::convert("ألفان").unwrap(), 2000);
        assert_eq!(ArabicNumeralParser::convert("ألف و خمسة").unwrap(), 1005);
        // 折算消费整个组内小计："五 和 二十 千" = 25000
        assert_eq!(
            ArabicNumeralParser::convert("خمسة و عشرون ألف").unwrap(),
            25_000
        );
    }

    #[test]
    fn test_millions() {
        assert_eq!(ArabicNumeralParser::convert("مليون").unwrap(), 1_000_000);
        assert_eq!(
            ArabicNumeralParser::convert("ثلاثة مليون").unwrap(),
            3_000_000
        );
    }

    #[test]
    fn test_unknown_word_fails() {
        assert!(matches!(
            ArabicNumeralParser::convert("مرحبا"),
            Err(NumNormError::UnrecognizedWord(_))
        ));
        // 前缀连写的连接词不展开，按表外单词处理
        assert!(ArabicNumeralParser::convert("مائة وثلاثة").is_err());
    }

    #[test]
    fn test_empty_phrase() {
        assert_eq!(ArabicNumeralParser::convert("").unwrap(), 0);
    }

    #[test]
    fn test_is_number_phrase() {
        assert!(ArabicNumeralParser::is_number_phrase("أحد عشر"));
        assert!(ArabicNumeralParser::is_number_phrase("مائة و ثلاثة"));
        assert!(!ArabicNumeralParser::is_number_phrase("مرحبا"));
        assert!(!ArabicNumeralParser::is_number_phrase("و"));
    }
}
