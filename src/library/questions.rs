use crate::grading::types::{Difficulty, Question};

pub(crate) struct QuestionEntry {
    pub id: &'static str,
    pub kind: &'static str,
    pub difficulty: Difficulty,
    pub prompt: &'static str,
    pub ideal_answer: &'static str,
    pub rubric: &'static [&'static str],
    pub evidence_hint: &'static str,
}

impl QuestionEntry {
    pub fn to_question(&self) -> Question {
        Question {
            id: self.id.to_string(),
            kind: self.kind.to_string(),
            difficulty: self.difficulty,
            prompt: self.prompt.to_string(),
            ideal_answer: self.ideal_answer.to_string(),
            rubric: self.rubric.iter().map(|item| item.to_string()).collect(),
            evidence_hint: self.evidence_hint.to_string(),
        }
    }
}

// 针对默认文章 city-breathe 的备用题目
pub(crate) static FALLBACK_QUESTIONS: [QuestionEntry; 5] = [
    QuestionEntry {
        id: "q1",
        kind: "Inference",
        difficulty: Difficulty::Medium,
        prompt: "Why did the project shift from simply planting trees to building a broader system?",
        ideal_answer: "Because the team learned the trees were failing due to soil loss and lack of watering, so they needed infrastructure and community support that made trees survive.",
        rubric: &[
            "Mentions that trees were not surviving or failing",
            "Explains at least one cause (soil washed away, lack of watering, long work shifts)",
            "Shows that the solution expanded to include systems or support",
        ],
        evidence_hint: "The second paragraph explains why trees failed and how the plan expanded.",
    },
    QuestionEntry {
        id: "q2",
        kind: "Cause and effect",
        difficulty: Difficulty::Easy,
        prompt: "What evidence linked heat to health outcomes in the East District?",
        ideal_answer: "A nurse compared emergency room logs with temperature data and saw the hottest blocks sent more patients, especially older adults.",
        rubric: &[
            "Mentions emergency room logs and temperature data",
            "Connects hottest blocks to more patients",
            "Includes the idea that older adults were especially affected",
        ],
        evidence_hint: "Look at the end of the first paragraph.",
    },
    QuestionEntry {
        id: "q3",
        kind: "Sequence",
        difficulty: Difficulty::Medium,
        prompt: "Describe the steps the group took to build trust with residents.",
        ideal_answer: "They mapped heat severity, invited neighbors to rank difficult areas, and built small demonstrations like shaded corners and misting poles so people could feel the difference.",
        rubric: &[
            "References the heat map or street-by-street map",
            "Mentions neighbor input or ranking",
            "Mentions the small demonstrations that showed cooling",
        ],
        evidence_hint: "The third paragraph lists the trust-building steps.",
    },
    QuestionEntry {
        id: "q4",
        kind: "Main idea",
        difficulty: Difficulty::Hard,
        prompt: "What is the central lesson of the passage, and how is it different from a simple solution?",
        ideal_answer: "The main lesson is that lasting change came from shared responsibility and systems, not just more trees. The community-designed network made the trees survive and changed how people responded to heat.",
        rubric: &[
            "States the main lesson as shared responsibility or system design",
            "Contrasts it with a simple tree-count solution",
            "Connects the lesson to outcomes in the final paragraph",
        ],
        evidence_hint: "See the final paragraph about the lesson beyond trees.",
    },
    QuestionEntry {
        id: "q5",
        kind: "Perspective",
        difficulty: Difficulty::Medium,
        prompt: "From the community group's point of view, why was the pilot area intentionally chosen rather than random?",
        ideal_answer: "They designed the pilot around how people moved through their day, focusing on the most exhausting and unsafe routes so the changes would matter and be felt.",
        rubric: &[
            "Mentions the pilot was based on movement or daily routes",
            "Connects selection to safety or exhaustion",
            "Shows that the choice was intentional and community-informed",
        ],
        evidence_hint: "The third paragraph explains why the pilot area was not random.",
    },
];
