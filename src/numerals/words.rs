//! 数字单词累加器
//!
//! 英文/阿拉伯文共用的乘法累加骨架：逐词累加组内小计，
//! 遇到大量级词时将小计乘入结果并清零

use crate::error::{NumNormError, NumNormResult};

/// 单语言单词表及累加参数
pub(crate) struct WordTable {
    /// 单词 → 数值
    pub entries: &'static [(&'static str, u64)],
    /// 连接词，不贡献数值
    pub conjunction: &'static str,
    /// 达到该值的词触发 result += group * value 折算
    pub fold_threshold: u64,
    /// 百位词（100 ≤ 值 < 折算阈值）是否就地放大组内小计
    /// （英文 "three hundred fifty" = (3*100+50)；
    ///   阿拉伯文整百为独立词条，直接相加）
    pub hundreds_scale_group: bool,
    /// 是否先尝试双词词组匹配（阿拉伯文 11-19 为双词形式）
    pub two_word_lookahead: bool,
}

impl WordTable {
    pub(crate) fn lookup(&self, word: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|&&(w, _)| w == word)
            .map(|&(_, v)| v)
    }
}

/// 对分好词的短语做乘法累加
///
/// 任何无法识别的单词立即终止转换（单词序列是刻意切分的，
/// 与中文按字符自由扫描不同，不做静默跳过）。
/// 空短语返回 0。
///
/// 全程检查算术：量级词可以任意重复（"hundred hundred ..." 逐词
/// 均在表内），累加值越过 i64 范围时返回 `Err(Overflow)` 而不是回绕。
pub(crate) fn accumulate(words: &[&str], table: &WordTable) -> NumNormResult<i64> {
    let mut result: i64 = 0;
    let mut group: i64 = 0;

    // 捕获只读引用，可复制，供各检查点复用
    let overflow = || NumNormError::Overflow(words.join(" "));

    let mut i = 0;
    while i < words.len() {
        let word = words[i];

        // 双词词组优先（如 "أحد عشر" = 11）
        if table.two_word_lookahead && i + 1 < words.len() {
            let phrase = format!("{} {}", word, words[i + 1]);
            if let Some(value) = table.lookup(&phrase) {
                group = group.checked_add(value as i64).ok_or_else(overflow)?;
                i += 2;
                continue;
            }
        }

        if let Some(value) = table.lookup(word) {
            if value >= table.fold_threshold {
                // 裸量级词（"thousand" 单独出现）隐含系数 1
                if group == 0 {
                    group = 1;
                }
                result = group
                    .checked_mul(value as i64)
                    .and_then(|folded| result.checked_add(folded))
                    .ok_or_else(overflow)?;
                group = 0;
            } else if table.hundreds_scale_group && value >= 100 {
                if group == 0 {
                    group = 1;
                }
                group = group.checked_mul(value as i64).ok_or_else(overflow)?;
            } else {
                group = group.checked_add(value as i64).ok_or_else(overflow)?;
            }
        } else if word == table.conjunction {
            // 连接词跳过
        } else {
            return Err(NumNormError::UnrecognizedWord(word.to_string()));
        }
        i += 1;
    }

    // 收尾：无后续量级词的组内余量
    result.checked_add(group).ok_or_else(overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TABLE: WordTable = WordTable {
        entries: &[("one", 1), ("five", 5), ("hundred", 100), ("thousand", 1_000)],
        conjunction: "and",
        fold_threshold: 1_000,
        hundreds_scale_group: true,
        two_word_lookahead: false,
    };

    #[test]
    fn test_empty_phrase_is_zero() {
        assert_eq!(accumulate(&[], &TEST_TABLE).unwrap(), 0);
    }

    #[test]
    fn test_group_fold_consumes_entire_group() {
        // 量级折算总是消费整个组内小计
        let words = ["one", "hundred", "five", "thousand"];
        assert_eq!(accumulate(&words, &TEST_TABLE).unwrap(), 105_000);
    }

    #[test]
    fn test_repeated_scale_overflow_is_error() {
        // 百位词反复放大组内小计越过 i64 范围：报错，不回绕成负数
        let words = vec!["hundred"; 12];
        assert!(matches!(
            accumulate(&words, &TEST_TABLE),
            Err(NumNormError::Overflow(_))
        ));
    }

    #[test]
    fn test_fold_overflow_is_error() {
        // 折算时组内小计 * 量级越界同样报错
        let mut words = vec!["hundred"; 9];
        words.push("thousand");
        assert!(matches!(
            accumulate(&words, &TEST_TABLE),
            Err(NumNormError::Overflow(_))
        ));
    }

    #[test]
    fn test_unknown_word_fails_whole_phrase() {
        let words = ["one", "hundred", "bogus"];
        assert!(matches!(
            accumulate(&words, &TEST_TABLE),
            Err(NumNormError::UnrecognizedWord(w)) if w == "bogus"
        ));
    }
}
