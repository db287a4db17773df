// 内容库
// 内置文章与备用题目；AI 生成内容校验失败时使用

pub mod passages;
pub mod questions;

pub use passages::Passage;

use crate::error::{CoachError, Result};
use crate::grading::fallback_strategy::AiReply;
use crate::grading::reply_validator::{fallback_reason, validate_passage_reply};
use crate::grading::types::{ContentSource, FallbackReason, Question};
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

static LIBRARY: Lazy<Vec<Passage>> =
    Lazy::new(|| passages::PASSAGES.iter().map(|entry| entry.to_passage()).collect());

/// 所有内置文章
pub fn passages() -> &'static [Passage] {
    &LIBRARY
}

/// 默认文章（内置题目针对它编写）
pub fn default_passage() -> &'static Passage {
    &LIBRARY[0]
}

/// 按 id 查找文章
pub fn passage(id: &str) -> Result<&'static Passage> {
    LIBRARY
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| CoachError::UnknownPassage(id.to_string()))
}

/// 翻到下一篇文章，最后一篇之后回到第一篇
///
/// 未知 id 视为从头开始，返回第一篇
pub fn next_passage(current_id: &str) -> &'static Passage {
    let next = LIBRARY
        .iter()
        .position(|p| p.id == current_id)
        .map_or(0, |i| (i + 1) % LIBRARY.len());
    &LIBRARY[next]
}

/// 随机挑选一篇内置文章
pub fn pick_fallback() -> &'static Passage {
    pick_fallback_with(&mut rand::thread_rng())
}

pub fn pick_fallback_with<R: Rng + ?Sized>(rng: &mut R) -> &'static Passage {
    LIBRARY.choose(rng).unwrap_or_else(default_passage)
}

/// 文章：优先采用校验通过的 AI 文章，否则随机使用内置文章
pub fn resolve_passage(reply: AiReply<'_>) -> (Passage, ContentSource) {
    let reason = match reply {
        AiReply::Unavailable => FallbackReason::MissingKey,
        AiReply::Failed(detail) => {
            warn!(detail, "AI passage generation failed, using library passage");
            FallbackReason::AiError
        }
        AiReply::Content(content) => match validate_passage_reply(content) {
            Ok(passage) => return (passage, ContentSource::Ai),
            Err(err) => {
                warn!(error = %err, "AI passage rejected, using library passage");
                fallback_reason(&err)
            }
        },
    };

    (pick_fallback().clone(), ContentSource::Fallback(reason))
}

/// 备用题目
pub fn fallback_questions() -> Vec<Question> {
    questions::FALLBACK_QUESTIONS
        .iter()
        .map(|entry| entry.to_question())
        .collect()
}

/// 按 id 查找备用题目
pub fn question(id: &str) -> Result<Question> {
    questions::FALLBACK_QUESTIONS
        .iter()
        .find(|entry| entry.id == id)
        .map(|entry| entry.to_question())
        .ok_or_else(|| CoachError::UnknownQuestion(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunking::estimate_total_minutes;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_library_contents() {
        assert_eq!(passages().len(), 10);
        assert_eq!(default_passage().id, "city-breathe");

        for p in passages() {
            // 内置文章同样满足 AI 文章的结构要求
            assert!(p.id.len() >= 3);
            assert!(p.title.len() >= 5);
            assert!(p.text.chars().count() >= 200);
            assert!(p.text.contains("\n\n"));
            assert!(estimate_total_minutes(&p.text) >= 1);
        }
    }

    #[test]
    fn test_passage_lookup() {
        assert_eq!(passage("quiet-river").unwrap().title, "The Quiet River Agreement");
        assert!(matches!(passage("nope"), Err(CoachError::UnknownPassage(_))));
    }

    #[test]
    fn test_next_passage_wraps_around() {
        assert_eq!(next_passage("city-breathe").id, "quiet-river");
        assert_eq!(next_passage("clinic-map").id, "neighborhood-kitchen");
        assert_eq!(next_passage("sound-plan").id, "city-breathe");
        assert_eq!(next_passage("nope").id, "city-breathe");

        // 连续翻页一轮回到起点
        let mut current = default_passage();
        for _ in 0..passages().len() {
            current = next_passage(&current.id);
        }
        assert_eq!(current.id, default_passage().id);
    }

    #[test]
    fn test_pick_fallback_is_from_library() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let picked = pick_fallback_with(&mut rng);
            assert!(passages().iter().any(|p| p.id == picked.id));
        }
    }

    #[test]
    fn test_resolve_passage() {
        let (passage, source) = resolve_passage(AiReply::Unavailable);
        assert_eq!(source, ContentSource::Fallback(FallbackReason::MissingKey));
        assert!(passages().contains(&passage));

        let (_, source) = resolve_passage(AiReply::Content("{\"passage\": {}}"));
        assert_eq!(source, ContentSource::Fallback(FallbackReason::InvalidSchema));

        let (_, source) = resolve_passage(AiReply::Failed("503"));
        assert_eq!(source, ContentSource::Fallback(FallbackReason::AiError));
    }

    #[test]
    fn test_fallback_questions() {
        let questions = fallback_questions();
        assert_eq!(questions.len(), 5);
        for q in &questions {
            assert!((2..=5).contains(&q.rubric.len()));
        }
        assert_eq!(question("q4").unwrap().kind, "Main idea");
        assert!(matches!(question("q9"), Err(CoachError::UnknownQuestion(_))));
    }
}
