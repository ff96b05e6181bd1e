//! NumNorm Core Engine
//!
//! 口述数字规范化核心引擎：将语音识别转写中的口述数字
//! （中文汉字数字、英文数字单词、阿拉伯文数字单词）转换为阿拉伯数字

#![warn(rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod numerals;
pub mod transcript;

// Re-export key types
pub use config::NormalizerConfig;
pub use error::{NumNormError, NumNormResult};
pub use numerals::{
    convert_multiplicative_numeral, convert_positional_numeral, ArabicNumeralParser,
    ChineseNumeralConverter, EnglishNumeralParser, WordLanguage,
};
pub use transcript::{
    strip_punctuation, NormalizeMode, NormalizedTranscript, TranscriptChange,
    TranscriptNormalizer,
};

/// 初始化日志系统
///
/// 生产模式: 静默运行，不启用日志
/// 调试模式 (--features debug-logs): 完整日志，级别由 NUMNORM_LOG 控制
///
/// 注意: 此函数可以安全地多次调用
pub fn init_logging() {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter =
            EnvFilter::try_from_env("NUMNORM_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

        // 使用 try_init() 代替 init()，避免重复初始化时 panic
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(filter)
            .try_init();
    }

    #[cfg(not(feature = "debug-logs"))]
    {
        // 生产模式: 如需日志，请使用 --features debug-logs 编译
    }
}
