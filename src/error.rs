use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumNormError {
    // 数字转换错误
    #[error("no recognizable numeral token in input: {0:?}")]
    EmptyOrUnparseable(String),

    #[error("unrecognized number word: {0:?}")]
    UnrecognizedWord(String),

    #[error("number phrase exceeds representable range: {0:?}")]
    Overflow(String),

    // 配置错误
    #[error("Config parse error: {path} - {reason}")]
    ConfigParse { path: String, reason: String },

    // 其他错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NumNormResult<T> = Result<T, NumNormError>;
