//! Category tallying of a finished section.
//!
//! Scoring is pure: the same answers and categories always give the same result. Ties go to the
//! category declared first in the section.

use crate::answers::AnswerSet;
use crate::error::ScoringError;
use indexmap::IndexMap;
use uplift_config::{Category, ScoringMode, Section, Vote};
use uplift_model::result::TallyEntry;

/// Result of finishing a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Category { category: Category, tally: Vec<TallyEntry> },
    /// Uncategorized section, the answers are the result.
    Verbatim,
}

impl Outcome {
    #[must_use]
    pub fn category(&self) -> Option<&Category> {
        match self {
            Self::Category { category, .. } => Some(category),
            Self::Verbatim => None,
        }
    }
}

#[derive(Debug)]
pub struct Scored<'c> {
    pub category: &'c Category,
    /// Votes per category in declaration order, including categories without votes.
    pub tally: Vec<(&'c Category, u32)>,
}

impl Scored<'_> {
    #[must_use]
    pub fn tally_entries(&self) -> Vec<TallyEntry> {
        self.tally
            .iter()
            .map(|(category, votes)| TallyEntry {
                category_id: category.id.clone(),
                title: category.title.clone(),
                votes: *votes,
            })
            .collect()
    }
}

/// Tallies the votes `tally` assigns to each answer and picks the category with the most votes.
pub fn score<'c, 'v, F>(
    answers: &AnswerSet,
    categories: &'c IndexMap<String, Category>,
    mut tally: F,
) -> Result<Scored<'c>, ScoringError>
where
    F: FnMut(usize, &str) -> Option<Vote<'v>>,
{
    if answers.is_empty() {
        return Err(ScoringError::EmptyAnswerSet);
    }

    let mut counts = vec![0u32; categories.len()];
    for (question_index, token) in answers.iter() {
        let Some(vote) = tally(question_index, token) else {
            continue;
        };
        let slot = categories
            .get_index_of(vote.category_id)
            .ok_or_else(|| ScoringError::UnknownCategory {
                question_index,
                category: vote.category_id.to_owned(),
            })?;
        counts[slot] = counts[slot].saturating_add(vote.weight);
    }

    let mut winner: Option<(usize, u32)> = None;
    for (slot, votes) in counts.iter().copied().enumerate() {
        if votes > 0 && winner.is_none_or(|(_, best)| votes > best) {
            winner = Some((slot, votes));
        }
    }
    let (slot, votes) = winner.ok_or(ScoringError::NoVotes)?;
    let tally: Vec<_> = categories.values().zip(counts).collect();
    let category = tally[slot].0;
    tracing::debug!(category_id = category.id, votes, "section scored");
    Ok(Scored { category, tally })
}

/// Turns the answers of a fully answered section into its outcome.
pub fn evaluate(section: &Section, answers: &AnswerSet) -> Result<Outcome, ScoringError> {
    match section.scoring_mode() {
        ScoringMode::CategoryVote => {
            let scored = score(answers, section.categories(), |index, token| {
                section.question(index).and_then(|question| question.vote(token))
            })?;
            Ok(Outcome::Category {
                category: scored.category.clone(),
                tally: scored.tally_entries(),
            })
        }
        ScoringMode::Verbatim if answers.is_empty() => Err(ScoringError::EmptyAnswerSet),
        ScoringMode::Verbatim => Ok(Outcome::Verbatim),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uplift_config::{ChoiceOption, Question, QuestionKind};

    fn categories(ids: &[&str]) -> IndexMap<String, Category> {
        ids.iter()
            .map(|id| {
                (
                    (*id).to_owned(),
                    Category {
                        id: (*id).to_owned(),
                        title: id.to_uppercase(),
                        strengths: vec![],
                        affirmation: String::new(),
                    },
                )
            })
            .collect()
    }

    /// Every answer is the id of the category it votes for.
    fn by_id<'c>(categories: &'c IndexMap<String, Category>) -> impl FnMut(usize, &str) -> Option<Vote<'c>> + 'c {
        |_, token| {
            categories.get(token).map(|category| Vote {
                category_id: &category.id,
                weight: 1,
            })
        }
    }

    #[test]
    fn test_majority_wins() {
        let categories = categories(&["a", "b"]);
        let answers: AnswerSet = ["a"; 6].into_iter().chain(["b"; 4]).collect();
        let scored = score(&answers, &categories, by_id(&categories)).unwrap();
        assert_eq!(scored.category.id, "a");
        let tally: Vec<_> = scored.tally.iter().map(|(c, v)| (c.id.as_str(), *v)).collect();
        assert_eq!(tally, [("a", 6), ("b", 4)]);
    }

    #[test]
    fn test_tie_goes_to_first_declared() {
        let categories = categories(&["b", "a"]);
        let answers: AnswerSet = ["a", "b"].into_iter().cycle().take(10).collect();
        for _ in 0..100 {
            let scored = score(&answers, &categories, by_id(&categories)).unwrap();
            assert_eq!(scored.category.id, "b");
        }
    }

    #[test]
    fn test_empty_answers() {
        let categories = categories(&["a"]);
        let err = score(&AnswerSet::new(), &categories, by_id(&categories)).unwrap_err();
        assert_eq!(err, ScoringError::EmptyAnswerSet);
    }

    #[test]
    fn test_no_votes() {
        let categories = categories(&["a"]);
        let answers: AnswerSet = ["x", "y"].into_iter().collect();
        let err = score(&answers, &categories, by_id(&categories)).unwrap_err();
        assert_eq!(err, ScoringError::NoVotes);
    }

    #[test]
    fn test_vote_for_undeclared_category() {
        let categories = categories(&["a"]);
        let answers: AnswerSet = ["a", "ghost"].into_iter().collect();
        let err = score(&answers, &categories, |_, t| {
            Some(Vote {
                category_id: if t == "a" { "a" } else { "ghost" },
                weight: 1,
            })
        })
        .unwrap_err();
        assert!(matches!(err, ScoringError::UnknownCategory { question_index: 1, .. }));
    }

    #[test]
    fn test_evaluate_weighted_section() {
        let categories = vec![
            Category {
                id: "calm".to_owned(),
                title: "Calm".to_owned(),
                strengths: vec![],
                affirmation: String::new(),
            },
            Category {
                id: "bold".to_owned(),
                title: "Bold".to_owned(),
                strengths: vec![],
                affirmation: String::new(),
            },
        ];
        let questions = vec![
            Question::new(
                0,
                "first",
                QuestionKind::SingleChoiceCategory {
                    options: vec![ChoiceOption::new("c", Some("calm")), ChoiceOption::new("b", Some("bold"))],
                },
            ),
            Question::new(
                1,
                "second",
                QuestionKind::SingleChoiceWeighted {
                    options: vec![
                        ChoiceOption::new("very", Some("bold")).with_weight(3),
                        ChoiceOption::new("not", None),
                    ],
                },
            ),
            Question::ternary(2, "third"),
        ];
        let section = Section::new("s", "S", None, questions, categories).unwrap();

        let answers: AnswerSet = ["c", "very", "yes"].into_iter().collect();
        let Outcome::Category { category, tally } = evaluate(&section, &answers).unwrap() else {
            panic!("expected a category outcome");
        };
        assert_eq!(category.id, "bold");
        assert_eq!(tally[0].votes, 1);
        assert_eq!(tally[1].votes, 3);

        let answers: AnswerSet = ["c", "not", "no"].into_iter().collect();
        assert_eq!(evaluate(&section, &answers).unwrap().category().unwrap().id, "calm");
    }

    #[test]
    fn test_evaluate_verbatim_section() {
        let section = Section::new("v", "V", None, vec![Question::ternary(0, "ok?")], vec![]).unwrap();
        let answers: AnswerSet = ["yes"].into_iter().collect();
        assert_eq!(evaluate(&section, &answers).unwrap(), Outcome::Verbatim);
        assert_eq!(evaluate(&section, &AnswerSet::new()).unwrap_err(), ScoringError::EmptyAnswerSet);
    }
}
