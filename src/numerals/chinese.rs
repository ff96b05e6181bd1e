//! 中文数字转换模块
//!
//! 将中文汉字数字表达重建为十进制数字串
//!
//! 与逐位累加不同，这里先反向扫描出系数/量级记号，
//! 再按数位槽（slot）重建位置序列，可容忍口语乱序与转写噪声

use crate::error::{NumNormError, NumNormResult};
use crate::numerals::tables;

/// 中文数字记号
///
/// 未识别字符在扫描阶段直接丢弃，不会产生记号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CnToken {
    /// 系数 0-9
    Digit(u8),
    /// 量级（10 的幂）
    Scale(u64),
}

/// 数位槽：最终数字的一个十进制位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Digit(u8),
    /// 占位符，渲染时输出 '0'
    Empty,
}

/// 中文数字转换器
pub struct ChineseNumeralConverter;

impl ChineseNumeralConverter {
    /// 将中文数字字符串转换为数字串
    ///
    /// # 参数
    /// - `text`: 中文数字文本（例如："一百二十三"）
    ///
    /// # 返回
    /// - `Ok(String)`: 转换后的数字串（例如："123"）
    /// - `Err(EmptyOrUnparseable)`: 输入中没有任何可识别的数字字符
    ///
    /// 未识别字符（标点、噪声）会被跳过而不是报错；
    /// 系数表含同音字容错（如 "就" → 9），适用于已知整串是数字的场景。
    ///
    /// # 示例
    /// ```
    /// # use numnorm_core::numerals::ChineseNumeralConverter;
    /// let result = ChineseNumeralConverter::convert("一百二十三").unwrap();
    /// assert_eq!(result, "123");
    /// ```
    pub fn convert(text: &str) -> NumNormResult<String> {
        let tokens = Self::scan_reversed(text);
        if tokens.is_empty() {
            return Err(NumNormError::EmptyOrUnparseable(text.to_string()));
        }

        let tokens = Self::normalize_scales(tokens);
        let slots = Self::assemble_slots(&tokens);
        let slots = Self::fix_misplaced_units(slots);
        Ok(Self::render(&slots))
    }

    /// 反向扫描：从最后一个字符开始分类
    ///
    /// tokens[0] 对应输入的末位字符，即最低数位在前
    fn scan_reversed(text: &str) -> Vec<CnToken> {
        let mut tokens = Vec::new();
        for ch in text.chars().rev() {
            if let Some(v) = tables::cn_coefficient(ch) {
                tokens.push(CnToken::Digit(v));
            } else if let Some(m) = tables::cn_scale(ch) {
                tokens.push(CnToken::Scale(m));
            } else if let Some(d) = ch.to_digit(10) {
                // ASCII 数字按字面值收录
                tokens.push(CnToken::Digit(d as u8));
            }
            // 其余字符丢弃
        }
        tokens
    }

    /// 归一化相邻量级记号
    ///
    /// - 裸量级词（"十"、"十一" 中的 "十"）：读序上没有系数，补系数 1
    /// - 两个量级相邻且后者不大于前者：就地相乘合并为复合量级
    /// - 量级后跟普通系数：量级单独输出
    fn normalize_scales(mut tokens: Vec<CnToken>) -> Vec<CnToken> {
        let len = tokens.len();
        let mut out = Vec::with_capacity(len + 1);

        let mut i = 0;
        while i < len {
            match tokens[i] {
                CnToken::Digit(d) => out.push(CnToken::Digit(d)),
                CnToken::Scale(m) => {
                    let next = if i + 1 < len { Some(tokens[i + 1]) } else { None };
                    match next {
                        // 末位量级，或后随更大量级：裸量级词，补系数 1
                        None => {
                            out.push(CnToken::Scale(m));
                            out.push(CnToken::Digit(1));
                        }
                        Some(CnToken::Scale(n)) if n > m => {
                            out.push(CnToken::Scale(m));
                            out.push(CnToken::Digit(1));
                        }
                        // 复合量级：折叠进相邻记号，本记号不输出。
                        // 退化输入（长串裸量级词）会连环折叠，饱和而不回绕，
                        // 数位宽度封顶在 u64 可表示的 19 位
                        Some(CnToken::Scale(_)) => {
                            if let CnToken::Scale(n) = &mut tokens[i + 1] {
                                *n = n.saturating_mul(m);
                            }
                        }
                        // 量级前有显式系数
                        Some(CnToken::Digit(_)) => out.push(CnToken::Scale(m)),
                    }
                }
            }
            i += 1;
        }
        out
    }

    /// 按数位槽重建位置序列
    ///
    /// 维护当前数位宽度 W：系数占一个槽，量级 10^w 只负责
    /// 把宽度补齐到 w（不足处填占位符），本身不占槽
    fn assemble_slots(tokens: &[CnToken]) -> Vec<Slot> {
        let mut slots = Vec::with_capacity(tokens.len());
        let mut width: u32 = 0;

        for &token in tokens {
            match token {
                CnToken::Digit(d) => {
                    width += 1;
                    slots.push(Slot::Digit(d));
                }
                CnToken::Scale(m) => {
                    let target = m.ilog10();
                    while width < target {
                        width += 1;
                        slots.push(Slot::Empty);
                    }
                }
            }
        }
        slots
    }

    /// 修正个位错置
    ///
    /// 口语中个位数字可能在其真实高位确定之前就被解码
    /// （如 "三百五" 表示 350）：若个位非零且紧邻占位符，
    /// 将其上移到第一个非占位槽之前，个位补 0
    fn fix_misplaced_units(mut slots: Vec<Slot>) -> Vec<Slot> {
        if slots.len() > 1 && slots[1] == Slot::Empty {
            if let Slot::Digit(d) = slots[0] {
                if d > 0 {
                    let mut p = 1;
                    while p < slots.len() && slots[p] == Slot::Empty {
                        p += 1;
                    }
                    slots[p - 1] = Slot::Digit(d);
                    slots[0] = Slot::Digit(0);
                }
            }
        }
        slots
    }

    /// 渲染：反转为高位在前，占位符输出 '0'
    fn render(slots: &[Slot]) -> String {
        slots
            .iter()
            .rev()
            .map(|slot| match slot {
                Slot::Digit(d) => (b'0' + d) as char,
                Slot::Empty => '0',
            })
            .collect()
    }

    /// 检查文本是否为规范中文数字（不含同音字与噪声）
    pub fn is_numeral(text: &str) -> bool {
        !text.is_empty() && text.chars().all(tables::is_canonical_cn_numeral)
    }
}
