//! 转写文本分段器
//!
//! 将转写文本按文字类别切分为连续片段，为数字定位做准备
//!
//! 规则：不跨片段转换，不修改片段内部字符顺序

use std::ops::Range;

/// 片段类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// 汉字片段
    Han,
    /// 拉丁字母片段
    Latin,
    /// 阿拉伯文字母片段
    Arabic,
    /// ASCII 数字片段
    Digits,
    /// 其他（空白、标点、符号）
    Other,
}

/// 文本片段
#[derive(Debug, Clone)]
pub struct Segment {
    /// 片段类别
    pub kind: SegmentKind,
    /// 在输入文本中的字节范围
    pub span: Range<usize>,
    /// 片段内容
    pub content: String,
}

/// 分段器
pub struct Segmenter;

impl Segmenter {
    /// 将文本切分为同类字符的连续片段
    pub fn segment(text: &str) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut iter = text.char_indices().peekable();

        while let Some(&(start, ch)) = iter.peek() {
            let kind = Self::classify(ch);
            let mut end = start + ch.len_utf8();
            iter.next();

            while let Some(&(pos, c)) = iter.peek() {
                if Self::classify(c) != kind {
                    break;
                }
                end = pos + c.len_utf8();
                iter.next();
            }

            segments.push(Segment {
                kind,
                span: start..end,
                content: text[start..end].to_string(),
            });
        }

        segments
    }

    /// 对单个字符分类
    fn classify(ch: char) -> SegmentKind {
        if ch.is_ascii_digit() {
            return SegmentKind::Digits;
        }
        if ch.is_ascii_alphabetic() {
            return SegmentKind::Latin;
        }
        // CJK 统一表意文字，外加不在该区间的 '〇'
        if ('\u{4E00}'..='\u{9FFF}').contains(&ch) || ch == '〇' {
            return SegmentKind::Han;
        }
        // 阿拉伯文基本区
        if ('\u{0600}'..='\u{06FF}').contains(&ch) {
            return SegmentKind::Arabic;
        }
        SegmentKind::Other
    }
}

/// 转写中常见的标点集合（中英文，含竖排、半角及兼容变体）
///
/// 不含 ASCII 连字符：英文数字的 "twenty-one" 写法依赖它分词。
/// 空白同样不在集合内，英文分词依赖空格
const PUNCTUATION: &str = ",.!?;:'\"()[]{}<>~@#&*_—―…·‖•′‵’”‘“¢£¥ˇˉ\
    、。々〈〉《》「」『』【】〔〕〖〗〝〞\
    ！（），．：；？｜｛｝～［］￠￡￥\
    ︰︱︳︴︵︶︷︸︹︺︻︼︽︾︿﹀﹁﹂﹃﹄﹏﹐﹒﹔﹕﹖﹗﹙﹚﹛﹜﹝﹞､";

/// 检查字符是否为标点符号
pub fn is_punctuation(ch: char) -> bool {
    PUNCTUATION.contains(ch)
}

/// 删除文本中的标点符号
///
/// 空白保留（英文分词依赖空格），只去标点
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|&ch| !is_punctuation(ch)).collect()
}
