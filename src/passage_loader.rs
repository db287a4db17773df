use crate::error::Result;
use encoding_rs::{Encoding, GBK, UTF_8};
use std::fs;
use std::path::Path;
use tracing::warn;

/// 文章文件加载器
///
/// 读取纯文本文章，自动检测编码（UTF-8、带 BOM 的 UTF-16、GBK）
pub struct PassageLoader;

impl PassageLoader {
    pub fn new() -> Self {
        Self
    }

    /// 读取文件并解码为文本
    ///
    /// # 参数
    /// - `path`: 文章文件路径
    ///
    /// # 返回
    /// 统一为 `\n` 换行的文章文本
    pub fn load(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path)?;
        Ok(self.decode(&bytes))
    }

    /// 解码字节数据
    ///
    /// 有 BOM 时按 BOM 指明的编码解码；否则依次尝试严格 UTF-8、严格 GBK，
    /// 都不成立时按 UTF-8 解码并以 U+FFFD 替换非法字节
    pub fn decode(&self, bytes: &[u8]) -> String {
        let text = match Encoding::for_bom(bytes) {
            Some((encoding, _)) => {
                let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
                if had_errors {
                    warn!(encoding = encoding.name(), "passage decoded with replacement characters");
                }
                text.into_owned()
            }
            None => Self::decode_unmarked(bytes),
        };

        // 段落分割只识别 \n
        text.replace("\r\n", "\n").replace('\r', "\n")
    }

    fn decode_unmarked(bytes: &[u8]) -> String {
        let strict = [UTF_8, GBK].into_iter().find_map(|encoding| {
            encoding
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|text| text.into_owned())
        });

        strict.unwrap_or_else(|| {
            warn!(bytes = bytes.len(), "passage is neither UTF-8 nor GBK, replacing invalid bytes");
            String::from_utf8_lossy(bytes).into_owned()
        })
    }
}

impl Default for PassageLoader {
    fn default() -> Self {
        Self::new()
    }
}
