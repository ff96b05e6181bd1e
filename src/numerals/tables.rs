//! 数字查找表
//!
//! 各语言的系数表与量级表，进程级只读数据，编译期构造，运行期不可变

/// 中文数字系数表（字符 → 0-9）
///
/// 包含通用写法、大写（金额）写法以及口语变体
pub(crate) const CN_COEFFICIENTS: &[(char, u8)] = &[
    ('〇', 0),
    ('一', 1),
    ('二', 2),
    ('三', 3),
    ('四', 4),
    ('五', 5),
    ('六', 6),
    ('七', 7),
    ('八', 8),
    ('九', 9),
    ('零', 0),
    ('壹', 1),
    ('贰', 2),
    ('叁', 3),
    ('肆', 4),
    ('伍', 5),
    ('陆', 6),
    ('柒', 7),
    ('捌', 8),
    ('玖', 9),
    ('貮', 2),
    ('两', 2),
    ('俩', 2),
    ('倆', 2),
];

/// 系数同音字容错表
///
/// 上游语音识别偶尔把数字误转写为近音字，这里按原样收录用于修复。
/// 这些字在普通文本中大量出现，因此只在整串转换时启用，
/// 不参与转写文本中数字片段的定位（见 transcript::normalizer）。
pub(crate) const CN_COEFFICIENT_ALIASES: &[(char, u8)] = &[
    ('营', 0),
    ('其', 7),
    ('西', 7),
    ('气', 7),
    ('吧', 8),
    ('就', 9),
];

/// 中文量级表（字符 → 10 的幂）
///
/// 当前场景只需要百以内的数字，千及以上量级暂不启用。
/// 注意：不启用意味着 "一千" 会丢掉 "千" 字、静默得到 "1"，
/// 这是有意保留的能力边界，而不是待修的缺陷。
pub(crate) const CN_SCALES: &[(char, u64)] = &[
    ('十', 10),
    ('拾', 10),
    ('百', 100),
    ('佰', 100),
    // ('千', 1_000),
    // ('仟', 1_000),
    // ('万', 10_000),
    // ('萬', 10_000),
    // ('亿', 100_000_000),
    // ('億', 100_000_000),
    // ('兆', 1_000_000_000_000),
];

/// 量级同音字容错表（同上，仅整串转换时启用）
pub(crate) const CN_SCALE_ALIASES: &[(char, u64)] = &[('是', 10), ('实', 10), ('时', 10)];

/// 查找中文系数（含同音字）
pub(crate) fn cn_coefficient(ch: char) -> Option<u8> {
    CN_COEFFICIENTS
        .iter()
        .chain(CN_COEFFICIENT_ALIASES)
        .find(|&&(c, _)| c == ch)
        .map(|&(_, v)| v)
}

/// 查找中文量级（含同音字）
pub(crate) fn cn_scale(ch: char) -> Option<u64> {
    CN_SCALES
        .iter()
        .chain(CN_SCALE_ALIASES)
        .find(|&&(c, _)| c == ch)
        .map(|&(_, v)| v)
}

/// 判断是否为规范中文数字字符（不含同音字）
///
/// 用于在转写文本中定位数字片段
pub(crate) fn is_canonical_cn_numeral(ch: char) -> bool {
    CN_COEFFICIENTS.iter().any(|&(c, _)| c == ch) || CN_SCALES.iter().any(|&(c, _)| c == ch)
}

/// 英文数字单词表
pub(crate) const EN_WORDS: &[(&str, u64)] = &[
    // 基础数字 0-19
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
    // 十位数 20-90
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
    // 量级
    ("hundred", 100),
    ("thousand", 1_000),
    ("million", 1_000_000),
    ("billion", 1_000_000_000),
    ("trillion", 1_000_000_000_000),
];

/// 英文连接词
pub(crate) const EN_CONJUNCTION: &str = "and";

/// 阿拉伯文数字单词表
///
/// 覆盖面有限：11-19 为双词形式，整百与双数（dual）形式作为独立词条收录
pub(crate) const AR_WORDS: &[(&str, u64)] = &[
    ("صفر", 0),
    ("واحد", 1),
    ("اثنان", 2),
    ("ثلاثة", 3),
    ("أربعة", 4),
    ("خمسة", 5),
    ("ستة", 6),
    ("سبعة", 7),
    ("ثمانية", 8),
    ("تسعة", 9),
    ("عشرة", 10),
    ("أحد عشر", 11),
    ("اثنا عشر", 12),
    ("ثلاثة عشر", 13),
    ("أربعة عشر", 14),
    ("خمسة عشر", 15),
    ("ستة عشر", 16),
    ("سبعة عشر", 17),
    ("ثمانية عشر", 18),
    ("تسعة عشر", 19),
    ("عشرون", 20),
    ("ثلاثون", 30),
    ("أربعون", 40),
    ("خمسون", 50),
    ("ستون", 60),
    ("سبعون", 70),
    ("ثمانون", 80),
    ("تسعون", 90),
    ("مائة", 100),
    ("مئتان", 200),
    ("ثلاثمائة", 300),
    ("ألف", 1_000),
    ("ألفان", 2_000),
    ("مليون", 1_000_000),
    ("مليونان", 2_000_000),
    ("مليار", 1_000_000_000),
    ("ملياران", 2_000_000_000),
    ("ترليون", 1_000_000_000_000),
];

/// 阿拉伯文连接词（"和"）
pub(crate) const AR_CONJUNCTION: &str = "و";
