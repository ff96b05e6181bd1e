//! 转写文本处理模块
//!
//! 分段、标点清理与整段数字规范化

pub mod normalizer;
pub mod segmenter;

pub use normalizer::{NormalizeMode, NormalizedTranscript, TranscriptChange, TranscriptNormalizer};
pub use segmenter::{is_punctuation, strip_punctuation, Segment, SegmentKind, Segmenter};
