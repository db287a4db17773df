use crate::error::{CoachError, Result};
use crate::grading::types::{Difficulty, FallbackReason, Question};
use crate::library::Passage;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// AI 评分回复
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeReply {
    pub correct: bool,
    pub score: f64,
    pub feedback: String,
    pub model_answer: String,
    pub evidence: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionDraft {
    #[serde(default)]
    id: String,
    #[serde(rename = "type")]
    kind: String,
    difficulty: Difficulty,
    prompt: String,
    ideal_answer: String,
    rubric: Vec<String>,
    evidence_hint: String,
}

#[derive(Debug, Deserialize)]
struct QuestionSetReply {
    questions: Vec<QuestionDraft>,
}

#[derive(Debug, Deserialize)]
struct PassageReply {
    passage: Passage,
}

/// 截取第一个 `{` 到最后一个 `}` 之间的内容
///
/// 模型经常在 JSON 前后附带说明文字或 markdown 代码块
pub fn extract_json_block(content: &str) -> Result<&str> {
    let first = content.find('{').ok_or(CoachError::NoJsonObject)?;
    let last = content.rfind('}').ok_or(CoachError::NoJsonObject)?;
    if last < first {
        return Err(CoachError::NoJsonObject);
    }
    Ok(&content[first..=last])
}

/// 宽松解析 JSON
///
/// 第一次失败后把 U+0000..U+001F 控制字符替换为空格再试一次
/// （字符串里未转义的换行是最常见的问题）
pub fn parse_lenient(block: &str) -> Result<Value> {
    match serde_json::from_str(block) {
        Ok(value) => Ok(value),
        Err(_) => {
            let sanitized: String = block
                .chars()
                .map(|c| if (c as u32) < 0x20 { ' ' } else { c })
                .collect();
            serde_json::from_str(&sanitized).map_err(|e| CoachError::MalformedJson(e.to_string()))
        }
    }
}

fn decode<T: DeserializeOwned>(content: &str) -> Result<T> {
    let value = parse_lenient(extract_json_block(content)?)?;
    serde_json::from_value(value).map_err(|e| CoachError::Schema(e.to_string()))
}

fn require_min_chars(field: &str, value: &str, min: usize) -> Result<()> {
    if value.chars().count() < min {
        return Err(CoachError::Schema(format!(
            "{} 至少需要 {} 个字符",
            field, min
        )));
    }
    Ok(())
}

/// 校验 AI 评分回复
pub fn validate_grade_reply(content: &str) -> Result<GradeReply> {
    let reply: GradeReply = decode(content)?;

    if !(0.0..=1.0).contains(&reply.score) {
        return Err(CoachError::Schema(format!(
            "score {} 超出 [0, 1]",
            reply.score
        )));
    }
    require_min_chars("feedback", &reply.feedback, 5)?;
    require_min_chars("modelAnswer", &reply.model_answer, 5)?;
    require_min_chars("evidence", &reply.evidence, 5)?;

    Ok(reply)
}

/// 校验 AI 生成的题目集合
///
/// # 返回
/// 3-8 道题；缺失或空白的 id 按位置补为 `q-N`
pub fn validate_question_set(content: &str) -> Result<Vec<Question>> {
    let reply: QuestionSetReply = decode(content)?;

    if !(3..=8).contains(&reply.questions.len()) {
        return Err(CoachError::Schema(format!(
            "题目数量 {} 不在 3-8 之间",
            reply.questions.len()
        )));
    }

    reply
        .questions
        .into_iter()
        .enumerate()
        .map(|(index, draft)| {
            require_min_chars("type", &draft.kind, 2)?;
            require_min_chars("prompt", &draft.prompt, 5)?;
            require_min_chars("idealAnswer", &draft.ideal_answer, 5)?;
            require_min_chars("evidenceHint", &draft.evidence_hint, 5)?;
            if !(2..=5).contains(&draft.rubric.len()) {
                return Err(CoachError::Schema(format!(
                    "rubric 条目数 {} 不在 2-5 之间",
                    draft.rubric.len()
                )));
            }
            for item in &draft.rubric {
                require_min_chars("rubric", item, 3)?;
            }

            let id = if draft.id.trim().is_empty() {
                format!("q-{}", index + 1)
            } else {
                draft.id
            };

            Ok(Question {
                id,
                kind: draft.kind,
                difficulty: draft.difficulty,
                prompt: draft.prompt,
                ideal_answer: draft.ideal_answer,
                rubric: draft.rubric,
                evidence_hint: draft.evidence_hint,
            })
        })
        .collect()
}

/// 校验 AI 生成的文章
pub fn validate_passage_reply(content: &str) -> Result<Passage> {
    let reply: PassageReply = decode(content)?;
    let passage = reply.passage;

    require_min_chars("passage.id", &passage.id, 3)?;
    require_min_chars("passage.title", &passage.title, 5)?;
    require_min_chars("passage.subtitle", &passage.subtitle, 5)?;
    require_min_chars("passage.text", &passage.text, 200)?;

    Ok(passage)
}

/// 校验错误对应的降级原因
pub fn fallback_reason(err: &CoachError) -> FallbackReason {
    match err {
        CoachError::NoJsonObject | CoachError::MalformedJson(_) => FallbackReason::InvalidJson,
        CoachError::Schema(_) => FallbackReason::InvalidSchema,
        _ => FallbackReason::AiError,
    }
}
