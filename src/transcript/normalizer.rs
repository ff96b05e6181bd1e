//! 转写文本规范化器
//!
//! 在整段转写文本中定位口述数字片段并替换为阿拉伯数字，
//! 记录每处变更供调用方审计

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::config::NormalizerConfig;
use crate::numerals::tables;
use crate::numerals::{convert_multiplicative_numeral, ChineseNumeralConverter, WordLanguage};
use crate::transcript::segmenter::{strip_punctuation, Segment, SegmentKind, Segmenter};

/// 规范化模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizeMode {
    /// 定位并替换数字片段
    Auto,
    /// 原样返回，跳过全部处理
    Raw,
}

/// 单处替换记录
#[derive(Debug, Clone)]
pub struct TranscriptChange {
    /// 被替换片段的字节范围。
    ///
    /// 索引对象是规范化器实际处理的文本：默认即调用方传入的原文；
    /// 开启 `strip_punctuation` 后则是去标点后的中间文本，
    /// 不能直接用于索引原始输入
    pub span: Range<usize>,
    /// 原始片段
    pub original: String,
    /// 替换后的数字
    pub replacement: String,
}

/// 规范化结果
#[derive(Debug, Clone)]
pub struct NormalizedTranscript {
    /// 规范化后的文本
    pub text: String,
    /// 替换记录列表
    pub changes: Vec<TranscriptChange>,
}

/// 常用词保护表
///
/// 以数字字符开头、但实际不是数量表达的高频词，
/// 定位阶段向前多看两字避免误转（如 "一起" ≠ "1起"）
const PROTECTED_WORDS: &[&str] = &[
    "一起", "一些", "一般", "一下", "一样", "一直", "一共", "一切", "一旦", "一会儿",
];

/// 转写文本规范化器
pub struct TranscriptNormalizer {
    config: NormalizerConfig,
}

impl TranscriptNormalizer {
    /// 创建规范化器
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// 使用默认配置创建
    pub fn with_defaults() -> Self {
        Self::new(NormalizerConfig::default())
    }

    /// 当前配置
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// 规范化一段转写文本
    ///
    /// 替换失败（如表外单词）时保留原文，整段处理永不报错
    pub fn normalize(&self, text: &str) -> NormalizedTranscript {
        if self.config.mode == NormalizeMode::Raw {
            return NormalizedTranscript {
                text: text.to_string(),
                changes: Vec::new(),
            };
        }

        let cleaned = if self.config.strip_punctuation {
            strip_punctuation(text)
        } else {
            text.to_string()
        };

        let segments = Segmenter::segment(&cleaned);
        let word_kind = match self.config.word_language {
            WordLanguage::English => SegmentKind::Latin,
            WordLanguage::Arabic => SegmentKind::Arabic,
        };

        let mut out = String::new();
        let mut changes = Vec::new();

        let mut i = 0;
        while i < segments.len() {
            let segment = &segments[i];
            if segment.kind == SegmentKind::Han {
                Self::rewrite_han(segment, &mut out, &mut changes);
                i += 1;
            } else if segment.kind == word_kind {
                i = self.rewrite_word_phrase(&cleaned, &segments, i, &mut out, &mut changes);
            } else {
                out.push_str(&segment.content);
                i += 1;
            }
        }

        tracing::debug!("normalized transcript: {} change(s)", changes.len());
        NormalizedTranscript { text: out, changes }
    }

    /// 处理汉字片段：定位规范数字字符的连续游程并逐个替换
    ///
    /// 游程定位只认规范数字字符，同音字容错表不参与，
    /// 否则普通文本（"就是"、"实在"）会被误认为数字
    fn rewrite_han(segment: &Segment, out: &mut String, changes: &mut Vec<TranscriptChange>) {
        let content = &segment.content;
        let chars: Vec<(usize, char)> = content.char_indices().collect();

        let mut i = 0;
        while i < chars.len() {
            let (run_start_byte, ch) = chars[i];
            if !tables::is_canonical_cn_numeral(ch) {
                out.push(ch);
                i += 1;
                continue;
            }

            let run_start = i;
            while i < chars.len() && tables::is_canonical_cn_numeral(chars[i].1) {
                i += 1;
            }
            let run_end_byte = if i < chars.len() {
                chars[i].0
            } else {
                content.len()
            };
            let run = &content[run_start_byte..run_end_byte];

            if i - run_start == 1 {
                // 守卫 1：单字数字前是普通汉字（"统一"、"归一"），保留原文
                if run_start > 0 && Self::is_ordinary_han(chars[run_start - 1].1) {
                    out.push_str(run);
                    continue;
                }

                // 守卫 2：向前看最多两字，拼出常用词则整词保留（"一" + "起"）
                let mut protected = 0;
                for lookahead in 1..=2usize {
                    if i + lookahead > chars.len() {
                        break;
                    }
                    let end_byte = if i + lookahead < chars.len() {
                        chars[i + lookahead].0
                    } else {
                        content.len()
                    };
                    let candidate = &content[run_start_byte..end_byte];
                    if PROTECTED_WORDS.contains(&candidate) {
                        protected = lookahead;
                        break;
                    }
                }
                if protected > 0 {
                    let end_byte = if i + protected < chars.len() {
                        chars[i + protected].0
                    } else {
                        content.len()
                    };
                    out.push_str(&content[run_start_byte..end_byte]);
                    i += protected;
                    continue;
                }
            }

            match ChineseNumeralConverter::convert(run) {
                Ok(digits) => {
                    changes.push(TranscriptChange {
                        span: (segment.span.start + run_start_byte)
                            ..(segment.span.start + run_end_byte),
                        original: run.to_string(),
                        replacement: digits.clone(),
                    });
                    out.push_str(&digits);
                }
                // 转换失败保留原文
                Err(_) => out.push_str(run),
            }
        }
    }

    /// 处理单词片段：贪心吸收空白分隔的同类片段，
    /// 只要整体仍是可转换的数字短语
    fn rewrite_word_phrase(
        &self,
        text: &str,
        segments: &[Segment],
        start: usize,
        out: &mut String,
        changes: &mut Vec<TranscriptChange>,
    ) -> usize {
        let language = self.config.word_language;
        let kind = segments[start].kind;

        // 句首连接词不吸收进短语（"apples and five" 的 "and" 保留）
        if Self::is_conjunction(&segments[start].content, language) {
            out.push_str(&segments[start].content);
            return start + 1;
        }

        // 取最长可转换前缀；双词词条（"أحد عشر"）要求首词
        // 单独不成立时也继续向后尝试
        let mut best = None;
        let mut j = start;
        loop {
            let candidate = &text[segments[start].span.start..segments[j].span.end];
            if Self::is_number_phrase(candidate, language) {
                best = Some(j);
            }
            if j + 2 < segments.len()
                && segments[j + 1].kind == SegmentKind::Other
                && segments[j + 1].content.chars().all(char::is_whitespace)
                && segments[j + 2].kind == kind
            {
                j += 2;
            } else {
                break;
            }
        }

        let mut j = match best {
            Some(j) => j,
            None => {
                out.push_str(&segments[start].content);
                return start + 1;
            }
        };

        // 去掉结尾吸收进来的裸连接词（"five and apples" 只转 "five"）
        while j > start && Self::is_conjunction(&segments[j].content, language) {
            j -= 2;
        }

        let span = segments[start].span.start..segments[j].span.end;
        let phrase = &text[span.clone()];
        match convert_multiplicative_numeral(phrase, language) {
            Ok(value) => {
                let digits = value.to_string();
                changes.push(TranscriptChange {
                    span,
                    original: phrase.to_string(),
                    replacement: digits.clone(),
                });
                out.push_str(&digits);
            }
            Err(_) => out.push_str(phrase),
        }
        j + 1
    }

    fn is_number_phrase(text: &str, language: WordLanguage) -> bool {
        match language {
            WordLanguage::English => crate::numerals::EnglishNumeralParser::is_number_phrase(text),
            WordLanguage::Arabic => crate::numerals::ArabicNumeralParser::is_number_phrase(text),
        }
    }

    fn is_conjunction(word: &str, language: WordLanguage) -> bool {
        match language {
            WordLanguage::English => word.eq_ignore_ascii_case(tables::EN_CONJUNCTION),
            WordLanguage::Arabic => word == tables::AR_CONJUNCTION,
        }
    }

    /// 普通汉字：CJK 范围内、且不是数字字符
    fn is_ordinary_han(ch: char) -> bool {
        ('\u{4E00}'..='\u{9FFF}').contains(&ch) && !tables::is_canonical_cn_numeral(ch)
    }
}
