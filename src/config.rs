use crate::chunking::ReadingMode;
use crate::error::{CoachError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 命令行配置
///
/// 从 JSON 文件读取，缺省字段使用默认值；命令行参数优先于配置文件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoachConfig {
    /// 未指定 `--mode` 时使用的阅读模式
    pub default_mode: ReadingMode,
    /// 输出格式化的 JSON
    pub pretty: bool,
    /// tracing 过滤规则（RUST_LOG 优先）
    pub log_filter: String,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            default_mode: ReadingMode::Focus,
            pretty: true,
            log_filter: "warn".to_string(),
        }
    }
}

impl CoachConfig {
    /// 读取配置；未提供路径时返回默认配置
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let raw = fs::read_to_string(path)?;
                Self::from_json(&raw)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| CoachError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CoachConfig::load(None).unwrap();
        assert_eq!(config.default_mode, ReadingMode::Focus);
        assert!(config.pretty);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"defaultMode": "flow"}}"#).unwrap();

        let config = CoachConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.default_mode, ReadingMode::Flow);
        assert!(config.pretty);
    }

    #[test]
    fn test_invalid_file() {
        assert!(matches!(
            CoachConfig::from_json("{\"defaultMode\": \"sprint\"}"),
            Err(CoachError::Config(_))
        ));
        assert!(matches!(
            CoachConfig::load(Some(Path::new("/no/such/config.json"))),
            Err(CoachError::Io(_))
        ));
    }
}
