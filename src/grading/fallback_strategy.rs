use crate::grading::reply_validator::{fallback_reason, validate_grade_reply, validate_question_set};
use crate::grading::scoring_engine::ScoringEngine;
use crate::grading::types::*;
use crate::library::fallback_questions;
use tracing::warn;

/// AI 后端的调用结果（网络调用由外部完成）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiReply<'a> {
    /// 未配置 AI 后端
    Unavailable,
    /// 调用失败，附带错误信息
    Failed(&'a str),
    /// 模型返回的原始文本
    Content(&'a str),
}

impl<'a> AiReply<'a> {
    pub fn from_option(content: Option<&'a str>) -> Self {
        match content {
            Some(content) => AiReply::Content(content),
            None => AiReply::Unavailable,
        }
    }
}

/// Fallback Strategy
/// AI 不可用或回复校验失败时，改用本地评分与内置题目
pub struct FallbackStrategy {
    engine: ScoringEngine,
}

impl FallbackStrategy {
    pub fn new() -> Self {
        Self {
            engine: ScoringEngine::new(),
        }
    }

    pub fn with_engine(engine: ScoringEngine) -> Self {
        Self { engine }
    }

    /// 本地评分
    ///
    /// 证据提示取题目自带的 evidenceHint，参考答案取题目的 idealAnswer
    pub fn local_grade(&self, question: &Question, answer: &str) -> GradedAnswer {
        let local = self
            .engine
            .score(answer, &question.ideal_answer, &question.rubric);

        GradedAnswer {
            id: question.id.clone(),
            answer: answer.to_string(),
            correct: local.correct,
            score: local.score,
            feedback: local.feedback,
            model_answer: question.ideal_answer.clone(),
            evidence: question.evidence_hint.clone(),
        }
    }

    /// 评分：优先采用校验通过的 AI 回复，否则降级为本地评分
    ///
    /// # 返回
    /// (评分结果, 来源)
    pub fn grade(
        &self,
        question: &Question,
        answer: &str,
        reply: AiReply<'_>,
    ) -> (GradedAnswer, ContentSource) {
        let reason = match reply {
            AiReply::Unavailable => FallbackReason::MissingKey,
            AiReply::Failed(detail) => {
                warn!(question = %question.id, detail, "AI grading failed, using local scorer");
                FallbackReason::AiError
            }
            AiReply::Content(content) => match validate_grade_reply(content) {
                Ok(validated) => {
                    let graded = GradedAnswer {
                        id: question.id.clone(),
                        answer: answer.to_string(),
                        correct: validated.correct,
                        score: validated.score,
                        feedback: validated.feedback,
                        model_answer: validated.model_answer,
                        evidence: validated.evidence,
                    };
                    return (graded, ContentSource::Ai);
                }
                Err(err) => {
                    warn!(question = %question.id, error = %err, "AI grade rejected, using local scorer");
                    fallback_reason(&err)
                }
            },
        };

        (
            self.local_grade(question, answer),
            ContentSource::Fallback(reason),
        )
    }

    /// 题目集合：优先采用校验通过的 AI 题目，否则使用内置题目
    pub fn resolve_questions(&self, reply: AiReply<'_>) -> (Vec<Question>, ContentSource) {
        let reason = match reply {
            AiReply::Unavailable => FallbackReason::MissingKey,
            AiReply::Failed(detail) => {
                warn!(detail, "AI question generation failed, using fallback questions");
                FallbackReason::AiError
            }
            AiReply::Content(content) => match validate_question_set(content) {
                Ok(questions) => return (questions, ContentSource::Ai),
                Err(err) => {
                    warn!(error = %err, "AI questions rejected, using fallback questions");
                    fallback_reason(&err)
                }
            },
        };

        (fallback_questions(), ContentSource::Fallback(reason))
    }
}

impl Default for FallbackStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::scoring_engine::ScoringWeights;
    use crate::library::question;

    const ANSWER: &str =
        "The trees kept failing because soil washed away and nobody could water them.";

    #[test]
    fn test_local_grade_uses_question_hint() {
        let strategy = FallbackStrategy::new();
        let q1 = question("q1").unwrap();

        let graded = strategy.local_grade(&q1, ANSWER);

        assert_eq!(graded.id, "q1");
        assert_eq!(graded.answer, ANSWER);
        assert_eq!(graded.evidence, q1.evidence_hint);
        assert_eq!(graded.model_answer, q1.ideal_answer);
        assert!(graded.score > 0.0 && graded.score <= 1.0);
    }

    #[test]
    fn test_local_grade_with_custom_engine() {
        let mut engine = ScoringEngine::new();
        engine.set_weights(ScoringWeights {
            overlap: 0.0,
            rubric: 1.0,
        });
        let strategy = FallbackStrategy::with_engine(engine);
        let q1 = question("q1").unwrap();

        // 只看评分标准覆盖率：作答包含全部评分标准用词即满分
        let graded = strategy.local_grade(&q1, &q1.rubric.join(". "));
        assert!((graded.score - 1.0).abs() < 1e-9);
        assert!(graded.correct);
    }

    #[test]
    fn test_grade_without_backend() {
        let strategy = FallbackStrategy::new();
        let q1 = question("q1").unwrap();

        let (_, source) = strategy.grade(&q1, ANSWER, AiReply::Unavailable);
        assert_eq!(source, ContentSource::Fallback(FallbackReason::MissingKey));

        let (_, source) = strategy.grade(&q1, ANSWER, AiReply::Failed("timeout"));
        assert_eq!(source, ContentSource::Fallback(FallbackReason::AiError));
    }

    #[test]
    fn test_grade_accepts_valid_reply() {
        let strategy = FallbackStrategy::new();
        let q1 = question("q1").unwrap();
        let reply = r#"{"correct": false, "score": 0.4, "feedback": "Missing: watering.", "modelAnswer": "Trees needed soil and water.", "evidence": "Paragraph two."}"#;

        let (graded, source) = strategy.grade(&q1, ANSWER, AiReply::Content(reply));

        assert_eq!(source, ContentSource::Ai);
        assert_eq!(graded.score, 0.4);
        assert_eq!(graded.evidence, "Paragraph two.");
        assert_eq!(graded.id, "q1");
    }

    #[test]
    fn test_grade_rejects_invalid_reply() {
        let strategy = FallbackStrategy::new();
        let q1 = question("q1").unwrap();

        let (graded, source) = strategy.grade(&q1, ANSWER, AiReply::Content("I think it's fine"));
        assert_eq!(source, ContentSource::Fallback(FallbackReason::InvalidJson));
        assert_eq!(graded, strategy.local_grade(&q1, ANSWER));

        let (_, source) = strategy.grade(&q1, ANSWER, AiReply::Content(r#"{"score": 2}"#));
        assert_eq!(source, ContentSource::Fallback(FallbackReason::InvalidSchema));
    }

    #[test]
    fn test_resolve_questions_fallback() {
        let strategy = FallbackStrategy::new();

        let (questions, source) = strategy.resolve_questions(AiReply::Unavailable);
        assert_eq!(questions, fallback_questions());
        assert!(source.is_fallback());

        let (_, source) = strategy.resolve_questions(AiReply::Content(r#"{"questions": []}"#));
        assert_eq!(source, ContentSource::Fallback(FallbackReason::InvalidSchema));
    }

    #[test]
    fn test_ai_reply_from_option() {
        assert_eq!(AiReply::from_option(None), AiReply::Unavailable);
        assert_eq!(AiReply::from_option(Some("x")), AiReply::Content("x"));
    }
}
