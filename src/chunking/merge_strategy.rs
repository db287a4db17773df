use crate::chunking::chunk_builder::ChunkBuilder;
use crate::chunking::types::*;

/// 合并方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeDirection {
    Forward,  // 并入后一个分段（仅首个分段）
    Backward, // 并入前一个分段
}

/// Merge Strategy
/// 消除句数不足的分段
///
/// 规则：
/// 1. 首个分段不足时向后合并，保留后继分段的位置
/// 2. 其他不足的分段向前合并
/// 3. 合并后在同一位置重新检查（吸收内容后可能仍然不足）
/// 4. 只剩一个分段时不再合并
pub struct MergeStrategy {
    min_size: usize,
}

impl MergeStrategy {
    pub fn new(min_size: usize) -> Self {
        Self {
            min_size: min_size.max(1),
        }
    }

    pub fn for_policy(policy: &PacingPolicy) -> Self {
        Self::new(policy.min_size())
    }

    /// 执行合并并重新编号
    ///
    /// # 参数
    /// - `chunks`: 初始分段列表
    ///
    /// # 返回
    /// (合并后的分段, 合并次数)
    pub fn apply(&self, mut chunks: Vec<Chunk>) -> (Vec<Chunk>, usize) {
        let mut merges = 0;

        if self.min_size > 1 && chunks.len() > 1 {
            let mut i = 0;
            while i < chunks.len() {
                match self.direction(&chunks, i) {
                    Some(MergeDirection::Forward) => {
                        let current = chunks.remove(i);
                        let merged = Self::combine(current, &chunks[i]);
                        chunks[i] = merged;
                        merges += 1;
                    }
                    Some(MergeDirection::Backward) => {
                        let current = chunks.remove(i);
                        let merged = Self::combine_into(&chunks[i - 1], current);
                        chunks[i - 1] = merged;
                        merges += 1;
                    }
                    None => i += 1,
                }
            }
        }

        Self::renumber(&mut chunks);
        (chunks, merges)
    }

    /// 判断位置 `i` 的分段是否需要合并以及合并方向
    fn direction(&self, chunks: &[Chunk], i: usize) -> Option<MergeDirection> {
        if chunks[i].sentences.len() >= self.min_size {
            return None;
        }
        if i == 0 {
            if chunks.len() > 1 {
                Some(MergeDirection::Forward)
            } else {
                None
            }
        } else {
            Some(MergeDirection::Backward)
        }
    }

    // first 在前，second 在后；结果沿用 second 的序号
    fn combine(first: Chunk, second: &Chunk) -> Chunk {
        let mut sentences = first.sentences;
        sentences.extend(second.sentences.iter().cloned());
        ChunkBuilder::make_chunk(second.index, sentences)
    }

    // 结果沿用 first 的序号
    fn combine_into(first: &Chunk, second: Chunk) -> Chunk {
        let mut sentences = first.sentences.clone();
        sentences.extend(second.sentences);
        ChunkBuilder::make_chunk(first.index, sentences)
    }

    fn renumber(chunks: &mut [Chunk]) {
        for (index, chunk) in chunks.iter_mut().enumerate() {
            chunk.index = index;
            chunk.id = format!("chunk-{}", index + 1);
        }
    }

    pub fn min_size(&self) -> usize {
        self.min_size
    }
}
