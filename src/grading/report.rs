use crate::grading::types::{GradedAnswer, Question};
use serde::Serialize;
use std::collections::HashMap;

/// 一轮练习的结果汇总
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionReport {
    pub total: usize,
    pub correct_count: usize,
    pub percent: u32,
    /// 未答对（含未作答）的题目 id，按题目顺序
    pub missed: Vec<String>,
}

impl SessionReport {
    /// 汇总评分结果
    ///
    /// # 参数
    /// - `questions`: 本轮题目
    /// - `graded`: 题目 id 到评分结果的映射
    pub fn build(questions: &[Question], graded: &HashMap<String, GradedAnswer>) -> Self {
        let is_correct = |q: &Question| graded.get(&q.id).map(|g| g.correct).unwrap_or(false);

        let total = questions.len();
        let correct_count = questions.iter().filter(|q| is_correct(q)).count();
        let percent = if total > 0 {
            (correct_count as f64 / total as f64 * 100.0).round() as u32
        } else {
            0
        };
        let missed = questions
            .iter()
            .filter(|q| !is_correct(q))
            .map(|q| q.id.clone())
            .collect();

        Self {
            total,
            correct_count,
            percent,
            missed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::fallback_questions;

    fn graded(id: &str, correct: bool) -> (String, GradedAnswer) {
        (
            id.to_string(),
            GradedAnswer {
                id: id.to_string(),
                answer: "answer".to_string(),
                correct,
                score: if correct { 0.8 } else { 0.2 },
                feedback: "feedback".to_string(),
                model_answer: "model".to_string(),
                evidence: "evidence".to_string(),
            },
        )
    }

    #[test]
    fn test_report_counts() {
        let questions = fallback_questions();
        let results: HashMap<_, _> = vec![graded("q1", true), graded("q2", false), graded("q4", true)]
            .into_iter()
            .collect();

        let report = SessionReport::build(&questions, &results);

        assert_eq!(report.total, 5);
        assert_eq!(report.correct_count, 2);
        assert_eq!(report.percent, 40);
        // q3、q5 未作答也算未答对
        assert_eq!(report.missed, vec!["q2", "q3", "q5"]);
    }

    #[test]
    fn test_report_rounding() {
        let questions = &fallback_questions()[..3];
        let results: HashMap<_, _> = vec![graded("q1", true), graded("q2", true)]
            .into_iter()
            .collect();

        let report = SessionReport::build(questions, &results);
        assert_eq!(report.percent, 67);
    }

    #[test]
    fn test_report_empty() {
        let report = SessionReport::build(&[], &HashMap::new());
        assert_eq!(report.total, 0);
        assert_eq!(report.percent, 0);
        assert!(report.missed.is_empty());
    }
}
