//! Built-in reference question catalog
//!
//! The default bank shipped with the engine: 9 easy, 9 medium and 10 hard
//! general-knowledge questions. Callers normally replace it with their own
//! data through `init_bank`.

use crate::bank::catalog::QuestionBank;
use crate::config::{Difficulty, Question};
use ahash::AHashMap;
use once_cell::sync::Lazy;
use smallvec::SmallVec;

fn q(id: i32, text: &str, options: [&str; 4], correct_index: usize, difficulty: Difficulty) -> Question {
    Question {
        id,
        text: text.to_string(),
        options: options.iter().map(|s| s.to_string()).collect::<SmallVec<_>>(),
        correct_index,
        difficulty,
    }
}

fn easy_questions() -> Vec<Question> {
    use Difficulty::Easy;
    vec![
        q(
            1,
            "What is the capital of France?",
            ["London", "Berlin", "Paris", "Madrid"],
            2,
            Easy,
        ),
        q(
            2,
            "Which planet is known as the Red Planet?",
            ["Earth", "Mars", "Jupiter", "Venus"],
            1,
            Easy,
        ),
        q(
            3,
            "What is the largest ocean on Earth?",
            ["Atlantic Ocean", "Indian Ocean", "Arctic Ocean", "Pacific Ocean"],
            3,
            Easy,
        ),
        q(
            4,
            "Which country is home to the Great Barrier Reef?",
            ["Brazil", "Australia", "Indonesia", "Thailand"],
            1,
            Easy,
        ),
        q(
            13,
            "Which animal is known as the 'King of the Jungle'?",
            ["Tiger", "Lion", "Elephant", "Gorilla"],
            1,
            Easy,
        ),
        q(
            14,
            "How many continents are there on Earth?",
            ["5", "6", "7", "8"],
            2,
            Easy,
        ),
        q(
            15,
            "What is the primary color of a school bus?",
            ["Red", "Green", "Blue", "Yellow"],
            3,
            Easy,
        ),
        q(
            16,
            "Which fruit is associated with Isaac Newton's discovery of gravity?",
            ["Orange", "Apple", "Pear", "Banana"],
            1,
            Easy,
        ),
        q(
            17,
            "What is the currency of Japan?",
            ["Yuan", "Won", "Yen", "Ringgit"],
            2,
            Easy,
        ),
    ]
}

fn medium_questions() -> Vec<Question> {
    use Difficulty::Medium;
    vec![
        q(
            5,
            "What is the chemical symbol for gold?",
            ["Go", "Gd", "Au", "Ag"],
            2,
            Medium,
        ),
        q(
            6,
            "Who painted the Mona Lisa?",
            ["Vincent van Gogh", "Pablo Picasso", "Leonardo da Vinci", "Michelangelo"],
            2,
            Medium,
        ),
        q(
            7,
            "What is the capital of Japan?",
            ["Seoul", "Beijing", "Tokyo", "Bangkok"],
            2,
            Medium,
        ),
        q(
            8,
            "Which element has the chemical symbol 'O'?",
            ["Gold", "Oxygen", "Osmium", "Oganesson"],
            1,
            Medium,
        ),
        q(
            18,
            "What is the largest species of shark?",
            ["Great White Shark", "Whale Shark", "Hammerhead Shark", "Tiger Shark"],
            1,
            Medium,
        ),
        q(
            19,
            "Who wrote the play 'Romeo and Juliet'?",
            ["Charles Dickens", "William Shakespeare", "Jane Austen", "Mark Twain"],
            1,
            Medium,
        ),
        q(
            20,
            "Which planet has the most moons?",
            ["Jupiter", "Saturn", "Uranus", "Neptune"],
            1,
            Medium,
        ),
        q(
            21,
            "What is the largest internal organ in the human body?",
            ["Brain", "Liver", "Lungs", "Heart"],
            1,
            Medium,
        ),
        q(
            22,
            "What is the smallest prime number?",
            ["0", "1", "2", "3"],
            2,
            Medium,
        ),
    ]
}

fn hard_questions() -> Vec<Question> {
    use Difficulty::Hard;
    vec![
        q(
            9,
            "Which famous scientist developed the theory of relativity?",
            ["Isaac Newton", "Albert Einstein", "Nikola Tesla", "Galileo Galilei"],
            1,
            Hard,
        ),
        q(
            10,
            "What is the largest organ of the human body?",
            ["Brain", "Liver", "Skin", "Heart"],
            2,
            Hard,
        ),
        q(
            11,
            "In which year did World War II end?",
            ["1943", "1944", "1945", "1946"],
            2,
            Hard,
        ),
        q(
            12,
            "What is the square root of 144?",
            ["11", "12", "14", "16"],
            1,
            Hard,
        ),
        q(
            23,
            "Which of these elements has the highest atomic number?",
            ["Uranium", "Plutonium", "Berkelium", "Californium"],
            3,
            Hard,
        ),
        q(
            24,
            "Who was the first woman to win a Nobel Prize?",
            ["Marie Curie", "Rosalind Franklin", "Dorothy Hodgkin", "Ir\u{e8}ne Joliot-Curie"],
            0,
            Hard,
        ),
        q(
            25,
            "What is the rarest blood type in humans?",
            ["O negative", "AB negative", "B negative", "A negative"],
            1,
            Hard,
        ),
        q(
            26,
            "What is the formula for calculating the area of a circle?",
            ["\u{3c0}r\u{b2}", "2\u{3c0}r", "\u{3c0}d", "\u{3c0}r\u{b3}"],
            0,
            Hard,
        ),
        q(
            27,
            "Which of these programming languages was developed first?",
            ["Python", "Java", "C++", "FORTRAN"],
            3,
            Hard,
        ),
        q(
            28,
            "What is the Fibonacci sequence?",
            [
                "A sequence where each number is the product of the two preceding ones",
                "A sequence where each number is the sum of the two preceding ones",
                "A sequence of prime numbers",
                "A sequence of perfect squares",
            ],
            1,
            Hard,
        ),
    ]
}

static DEFAULT_BANK: Lazy<QuestionBank> = Lazy::new(|| {
    let mut by_difficulty = AHashMap::with_capacity(3);
    by_difficulty.insert(Difficulty::Easy, easy_questions());
    by_difficulty.insert(Difficulty::Medium, medium_questions());
    by_difficulty.insert(Difficulty::Hard, hard_questions());
    QuestionBank::from_grouped(by_difficulty)
});

/// The built-in reference catalog
pub fn default_bank() -> &'static QuestionBank {
    &DEFAULT_BANK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bank_tier_sizes() {
        let bank = default_bank();
        assert_eq!(bank.fixed_tier(Difficulty::Easy).len(), 9);
        assert_eq!(bank.fixed_tier(Difficulty::Medium).len(), 9);
        assert_eq!(bank.fixed_tier(Difficulty::Hard).len(), 10);
        assert_eq!(bank.len(), 28);
    }

    #[test]
    fn test_default_bank_passes_validation() {
        let all: Vec<Question> = [easy_questions(), medium_questions(), hard_questions()]
            .into_iter()
            .flatten()
            .collect();
        assert!(QuestionBank::from_questions(all).is_ok());
    }

    #[test]
    fn test_default_bank_ids_are_unique() {
        let mut ids: Vec<i32> = [easy_questions(), medium_questions(), hard_questions()]
            .into_iter()
            .flatten()
            .map(|q| q.id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 28);
    }

    #[test]
    fn test_every_question_has_four_options() {
        for q in [easy_questions(), medium_questions(), hard_questions()]
            .into_iter()
            .flatten()
        {
            assert_eq!(q.options.len(), 4, "question {} should have 4 options", q.id);
            assert!(q.correct_index < 4);
        }
    }
}
