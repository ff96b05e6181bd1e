//! 配置模块
//!
//! 规范化器配置，TOML 格式，按显式路径读写

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NumNormError, NumNormResult};
use crate::numerals::WordLanguage;
use crate::transcript::NormalizeMode;

/// 规范化器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// 规范化模式
    pub mode: NormalizeMode,
    /// 数字单词语言（拉丁片段按英文、阿拉伯文片段按阿文处理）
    pub word_language: WordLanguage,
    /// 处理前是否先删除标点
    pub strip_punctuation: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            mode: NormalizeMode::Auto,
            word_language: WordLanguage::English,
            strip_punctuation: false,
        }
    }
}

impl NormalizerConfig {
    /// 加载配置文件，文件不存在时返回默认配置
    pub fn load(path: &Path) -> NumNormResult<Self> {
        if !path.exists() {
            tracing::info!("配置文件不存在，使用默认配置: {:?}", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| NumNormError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::info!("加载配置成功: {:?}", path);
        Ok(config)
    }

    /// 保存配置文件
    pub fn save(&self, path: &Path) -> NumNormResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| NumNormError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        std::fs::write(path, content)?;

        tracing::info!("保存配置成功: {:?}", path);
        Ok(())
    }
}
