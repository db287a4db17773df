use crate::chunking::sentence_splitter::{count_words, split_paragraphs, split_sentences};
use crate::chunking::types::*;

/// Chunk Builder
/// 按节奏策略把段落内的句子切成初始分段（不跨段落）
pub struct ChunkBuilder {
    policy: PacingPolicy,
}

impl ChunkBuilder {
    pub fn new(policy: PacingPolicy) -> Self {
        Self { policy }
    }

    /// 构建初始分段列表
    ///
    /// # 参数
    /// - `text`: 文章文本，段落之间以空行分隔
    ///
    /// # 返回
    /// 按顺序排列的分段；分段序号在整篇文章内全局递增，不随段落重置
    pub fn build(&self, text: &str) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let mut chunk_index = 0;

        for paragraph in split_paragraphs(text) {
            let sentences = split_sentences(paragraph);
            let mut start = 0;

            while start < sentences.len() {
                let size = self.policy.stride(chunk_index);
                let end = (start + size).min(sentences.len());
                chunks.push(Self::make_chunk(
                    chunk_index,
                    sentences[start..end].to_vec(),
                ));
                chunk_index += 1;
                start += size;
            }
        }

        chunks
    }

    /// 由句子列表创建分段，文本、词数、分钟数同时计算
    pub(crate) fn make_chunk(index: usize, sentences: Vec<String>) -> Chunk {
        let text = sentences.join(" ");
        let word_count = count_words(&text);
        Chunk {
            id: format!("chunk-{}", index + 1),
            index,
            text,
            sentences,
            word_count,
            minutes: minutes_for(word_count),
        }
    }
}
