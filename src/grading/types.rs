use serde::{Deserialize, Serialize};

/// 本地评分结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub score: f64,
    pub correct: bool,
    pub feedback: String,
    pub model_answer: String,
    pub evidence: String,
}

/// 评分明细，便于调试与解释
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub overlap_score: f64,
    pub rubric_scores: Vec<f64>,
    pub rubric_coverage: f64,
    pub total_score: f64,
}

/// 题目难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// 理解题
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub difficulty: Difficulty,
    pub prompt: String,
    pub ideal_answer: String,
    pub rubric: Vec<String>,
    pub evidence_hint: String,
}

/// 单题作答的最终评分（返回给界面层）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradedAnswer {
    pub id: String,
    pub answer: String,
    pub correct: bool,
    pub score: f64,
    pub feedback: String,
    pub model_answer: String,
    pub evidence: String,
}

/// 降级原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    MissingKey,    // 未配置 AI 后端
    InvalidJson,   // 回复不是 JSON
    InvalidSchema, // JSON 结构不符合要求
    AiError,       // AI 调用失败
}

/// 内容来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "reason", rename_all = "lowercase")]
pub enum ContentSource {
    Ai,
    Fallback(FallbackReason),
}

impl ContentSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, ContentSource::Fallback(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_wire_format() {
        let json = r#"{
            "id": "q1",
            "type": "Inference",
            "difficulty": "medium",
            "prompt": "Why?",
            "idealAnswer": "Because.",
            "rubric": ["a", "b"],
            "evidenceHint": "Paragraph two."
        }"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.kind, "Inference");
        assert_eq!(question.difficulty, Difficulty::Medium);
        assert_eq!(question.ideal_answer, "Because.");
    }

    #[test]
    fn test_content_source_serialization() {
        let json = serde_json::to_string(&ContentSource::Fallback(FallbackReason::MissingKey)).unwrap();
        assert_eq!(json, r#"{"source":"fallback","reason":"missing_key"}"#);

        let json = serde_json::to_string(&ContentSource::Ai).unwrap();
        assert_eq!(json, r#"{"source":"ai"}"#);
    }

    #[test]
    fn test_score_result_serialization() {
        let result = ScoreResult {
            score: 0.5,
            correct: false,
            feedback: "f".to_string(),
            model_answer: "m".to_string(),
            evidence: "e".to_string(),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"modelAnswer\":\"m\""));
    }
}
