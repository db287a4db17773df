//! Reading Coach 核心库
//!
//! - `chunking`: 按阅读节奏把文章切成分段，并估算阅读时间
//! - `grading`: 本地词汇评分（AI 不可用时的降级方案）、AI 回复校验与结果汇总
//! - `library`: 内置文章与备用题目
//!
//! 分段与评分都是纯函数，可在并发请求中直接调用。

pub mod chunking;
pub mod config;
pub mod error;
pub mod grading;
pub mod library;
pub mod passage_loader;

pub use chunking::{
    estimate_total_minutes, segment, segment_for_mode, Chunk, PacingPolicy, PacingPreset,
    ReadingMode,
};
pub use config::CoachConfig;
pub use error::{CoachError, Result};
pub use grading::{
    score_answer, AiReply, ContentSource, FallbackReason, FallbackStrategy, GradedAnswer,
    Question, ScoreResult, SessionReport,
};
pub use library::Passage;
