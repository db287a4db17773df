// 分段模块
// 把文章切成符合阅读节奏的分段，并估算阅读时间

pub mod types;
pub mod sentence_splitter;
pub mod chunk_builder;
pub mod merge_strategy;


// 重新导出主要类型
pub use types::*;
pub use chunk_builder::ChunkBuilder;
pub use merge_strategy::{MergeDirection, MergeStrategy};

use tracing::debug;

/// 按节奏策略分段
///
/// # 参数
/// - `text`: 文章文本
/// - `policy`: 节奏策略
///
/// # 返回
/// 合并、重新编号后的分段列表；空文章返回空列表
pub fn segment(text: &str, policy: PacingPolicy) -> Vec<Chunk> {
    let initial = ChunkBuilder::new(policy).build(text);
    let initial_count = initial.len();
    let (chunks, merges) = MergeStrategy::for_policy(&policy).apply(initial);

    debug!(
        ?policy,
        initial = initial_count,
        merges,
        chunks = chunks.len(),
        "passage segmented"
    );

    chunks
}

/// 按阅读模式预设分段
pub fn segment_for_mode(text: &str, mode: ReadingMode) -> Vec<Chunk> {
    segment(text, mode.policy())
}

/// 估算整篇文章的阅读分钟数
///
/// 直接基于全文词数计算，不等于各分段分钟数之和（分段各自取整）
pub fn estimate_total_minutes(text: &str) -> usize {
    minutes_for(sentence_splitter::count_words(text))
}
