//! 数字规范化演示程序
//!
//! 演示三类转换器与整段转写规范化
//!
//! 运行：cargo run --example numerals_demo

use numnorm_core::{
    convert_multiplicative_numeral, convert_positional_numeral, init_logging,
    TranscriptNormalizer, WordLanguage,
};

fn main() {
    init_logging();

    println!("=== NumNorm 数字规范化演示 ===\n");

    println!("【中文数字（位置重建）】\n");
    let cn_cases = [
        "一百二十三",
        "十一",
        "三百五",
        "玖佰玖拾玖",
        "就十",    // 同音字容错："就" → 9
        "一千",    // 量级表边界：千未启用
        "没有数字", // 转换失败
    ];
    for input in cn_cases {
        match convert_positional_numeral(input) {
            Ok(digits) => println!("  \"{}\" → \"{}\"", input, digits),
            Err(e) => println!("  \"{}\" → 错误: {}", input, e),
        }
    }

    println!("\n【英文数字（乘法累加）】\n");
    let en_cases = [
        "one hundred twenty-three",
        "two thousand five hundred forty-six",
        "thousand",
        "one million three hundred fifty thousand and five",
        "twenty apples",
    ];
    for input in en_cases {
        match convert_multiplicative_numeral(input, WordLanguage::English) {
            Ok(n) => println!("  \"{}\" → {}", input, n),
            Err(e) => println!("  \"{}\" → 错误: {}", input, e),
        }
    }

    println!("\n【阿拉伯文数字（乘法累加）】\n");
    let ar_cases = ["واحد", "أحد عشر", "مائة و ثلاثة و عشرون", "ألف"];
    for input in ar_cases {
        match convert_multiplicative_numeral(input, WordLanguage::Arabic) {
            Ok(n) => println!("  \"{}\" → {}", input, n),
            Err(e) => println!("  \"{}\" → 错误: {}", input, e),
        }
    }

    println!("\n【整段转写规范化】\n");
    let normalizer = TranscriptNormalizer::with_defaults();
    let transcripts = [
        "我有一百二十三块钱",
        "三十个人五十条狗",
        "我们一起去了三百个地方",
        "it costs twenty one dollars",
    ];
    for input in transcripts {
        let result = normalizer.normalize(input);
        println!("  原始: \"{}\"", input);
        println!("  输出: \"{}\"", result.text);
        for change in &result.changes {
            println!("    - \"{}\" → \"{}\"", change.original, change.replacement);
        }
        println!();
    }

    println!("=== 演示完成 ===");
}
