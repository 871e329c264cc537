use itertools::Itertools;

use crate::endpoints::Api;
use crate::errors::{Error, Result};
use crate::fetcher::Fetch;
use crate::schema::Question;

/// One row of the card file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub frontend_id: String,
    pub slug: String,
    pub title: String,
    /// Problem statement as HTML
    pub content: String,
    pub difficulty: String,
    pub code_snippet: String,
    /// Left empty for the user's own solution
    pub code: String,
    /// Topic tag slugs separated by single spaces
    pub tags: String,
}

impl Card {
    pub fn from_question(question: Question, language: &str) -> Result<Self> {
        let slug = question.title_slug;
        let content = match question.content {
            Some(content) => content,
            None if question.is_paid_only => return Err(Error::PaidOnly(slug)),
            None => String::new(),
        };
        let code_snippet = question
            .code_snippets
            .unwrap_or_default()
            .into_iter()
            .find(|s| s.lang.eq_ignore_ascii_case(language) || s.lang_slug.eq_ignore_ascii_case(language))
            .map(|s| s.code);
        let code_snippet = match code_snippet {
            Some(code) => code,
            None if question.is_paid_only => return Err(Error::PaidOnly(slug)),
            None => {
                return Err(Error::LanguageUnavailable {
                    slug,
                    language: language.to_string(),
                })
            }
        };
        Ok(Self {
            frontend_id: question.question_frontend_id,
            slug,
            title: question.title,
            content,
            difficulty: question.difficulty,
            code_snippet,
            code: String::new(),
            tags: question.topic_tags.iter().map(|t| t.slug.as_str()).join(" "),
        })
    }

    /// Fields in file order.
    pub fn record(&self) -> [&str; 8] {
        [
            &self.frontend_id,
            &self.slug,
            &self.title,
            &self.content,
            &self.difficulty,
            &self.code_snippet,
            &self.code,
            &self.tags,
        ]
    }
}

pub fn generate_card<F: Fetch>(api: &Api<F>, slug: &str, language: &str) -> Result<Card> {
    log::debug!("generating card: {}", slug);
    let question = api
        .question(slug)?
        .ok_or_else(|| Error::ProblemNotFound(slug.to_string()))?;
    Card::from_question(question, language)
}
