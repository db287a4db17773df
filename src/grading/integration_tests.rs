// 集成测试：从题目到练习汇总的完整评分流程

#[cfg(test)]
mod integration_tests {
    use crate::grading::*;
    use crate::library::{fallback_questions, question};
    use std::collections::HashMap;

    #[test]
    fn test_short_answer_scenario() {
        let result = score_answer(
            "Yes.",
            "The trees failed because soil washed away.",
            &["Mentions soil loss".to_string()],
        );

        assert!(!result.correct);
        assert!(result.feedback.contains("Expand with 2-3 complete sentences."));
    }

    #[test]
    fn test_full_session_without_backend() {
        let strategy = FallbackStrategy::new();
        let questions = fallback_questions();

        let answers = [
            (
                "q1",
                "The team learned the trees were failing and not surviving due to soil loss because soil washed away, and a lack of watering during long work shifts, so the solution expanded to include systems of community support and infrastructure that made trees survive.",
            ),
            ("q2", "Heat."),
        ];

        let mut graded = HashMap::new();
        for (id, answer) in answers {
            let q = question(id).unwrap();
            let (result, source) = strategy.grade(&q, answer, AiReply::Unavailable);

            println!("{}: score={:.2} correct={} feedback={}", id, result.score, result.correct, result.feedback);

            assert!(source.is_fallback());
            assert!((0.0..=1.0).contains(&result.score));
            graded.insert(result.id.clone(), result);
        }

        assert!(graded["q1"].correct);
        assert!(!graded["q2"].correct);

        let report = SessionReport::build(&questions, &graded);
        assert_eq!(report.correct_count, 1);
        assert_eq!(report.percent, 20);
        assert_eq!(report.missed, vec!["q2", "q3", "q4", "q5"]);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let q = question("q3").unwrap();
        let answer = "They mapped the heat street by street and asked neighbors to rank unsafe places.";

        let first = score_answer(answer, &q.ideal_answer, &q.rubric);
        let second = score_answer(answer, &q.ideal_answer, &q.rubric);
        assert_eq!(first, second);
    }
}
