use crate::error::CoachError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 阅读速度（词/分钟），用于估算阅读时间
pub const WORDS_PER_MINUTE: usize = 180;

/// 阅读模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingMode {
    #[default]
    Focus, // 中等分段，慢速
    Flow,  // 较长分段，快速
}

/// 阅读模式预设
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PacingPreset {
    pub mode: ReadingMode,
    pub label: &'static str,
    pub description: &'static str,
    pub sentences_per_chunk: PacingPolicy,
    pub pace: &'static str,
}

static PRESETS: [PacingPreset; 2] = [
    PacingPreset {
        mode: ReadingMode::Focus,
        label: "Focus Mode",
        description: "Medium sections, slower pace, more reflection prompts.",
        sentences_per_chunk: PacingPolicy::Band { min: 3, max: 4 },
        pace: "Slow and steady",
    },
    PacingPreset {
        mode: ReadingMode::Flow,
        label: "Flow Mode",
        description: "Longer sections, fewer stops, faster reading rhythm.",
        sentences_per_chunk: PacingPolicy::Band { min: 5, max: 6 },
        pace: "Faster, continuous",
    },
];

impl ReadingMode {
    pub const ALL: [ReadingMode; 2] = [ReadingMode::Focus, ReadingMode::Flow];

    /// 获取模式对应的预设
    pub fn preset(self) -> &'static PacingPreset {
        match self {
            ReadingMode::Focus => &PRESETS[0],
            ReadingMode::Flow => &PRESETS[1],
        }
    }

    pub fn policy(self) -> PacingPolicy {
        self.preset().sentences_per_chunk
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReadingMode::Focus => "focus",
            ReadingMode::Flow => "flow",
        }
    }
}

impl fmt::Display for ReadingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReadingMode {
    type Err = CoachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "focus" => Ok(ReadingMode::Focus),
            "flow" => Ok(ReadingMode::Flow),
            other => Err(CoachError::UnknownMode(other.to_string())),
        }
    }
}

/// 分段节奏策略
///
/// 固定句数，或在 `[min, max]` 区间内按分段序号循环取值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PacingPolicy {
    Fixed(usize),
    Band { min: usize, max: usize },
}

impl PacingPolicy {
    /// 创建固定句数策略（至少 1 句）
    pub fn fixed(size: usize) -> Self {
        PacingPolicy::Fixed(size.max(1))
    }

    /// 创建区间策略，`min >= 1` 且 `max >= min`
    pub fn band(min: usize, max: usize) -> Self {
        let min = min.max(1);
        PacingPolicy::Band {
            min,
            max: max.max(min),
        }
    }

    /// 第 `index` 个分段的句数
    pub fn stride(&self, index: usize) -> usize {
        match *self {
            PacingPolicy::Fixed(size) => size.max(1),
            PacingPolicy::Band { min, max } => {
                let min = min.max(1);
                let max = max.max(min);
                let range = max - min + 1;
                (min + index % range).clamp(min, max)
            }
        }
    }

    /// 合并阶段使用的最小句数
    pub fn min_size(&self) -> usize {
        match *self {
            PacingPolicy::Fixed(size) => size.max(1),
            PacingPolicy::Band { min, .. } => min.max(1),
        }
    }
}

/// 阅读分段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
    pub id: String,
    pub index: usize,
    pub text: String,
    pub sentences: Vec<String>,
    pub word_count: usize,
    pub minutes: usize,
}

/// 按词数估算分钟数，至少 1 分钟
pub fn minutes_for(word_count: usize) -> usize {
    let minutes = (word_count as f64 / WORDS_PER_MINUTE as f64).round() as usize;
    minutes.max(1)
}
