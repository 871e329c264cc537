//! Typed views of the LeetCode responses. Only the fields the tool reads are
//! declared; anything else in a response is ignored.

use serde::de::DeserializeOwned;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::errors::{Error, Result};

/// Decode `body` as `T`, reporting a mismatch as an unexpected `endpoint` schema.
pub fn parse<T: DeserializeOwned>(endpoint: &'static str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|source| Error::UnexpectedSchema { endpoint, source })
}

////////////////////////////////////////////////////////////////////////////////
////////////////////////////////////////////////////////////////////////////////
// GraphQL
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, serde::Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: T,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct QuestionSlug {
    #[serde(rename = "titleSlug")] pub title_slug: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct TopicTagData {
    #[serde(rename = "topicTag")] pub topic_tag: TopicTag,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct TopicTag {
    pub questions: Vec<QuestionSlug>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ProblemListData {
    #[serde(rename = "problemsetQuestionList")] pub problem_list: ProblemList,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ProblemList {
    pub questions: Vec<QuestionSlug>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct QuestionData {
    /// `null` when no problem has the requested slug
    pub question: Option<Question>,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_frontend_id: String,
    pub title_slug: String,
    pub title: String,
    /// Withheld for premium problems
    pub content: Option<String>,
    #[serde(default)]
    pub is_paid_only: bool,
    pub difficulty: String,
    #[serde(default)]
    pub topic_tags: Vec<TopicTagRef>,
    pub code_snippets: Option<Vec<CodeSnippet>>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct TopicTagRef {
    pub slug: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSnippet {
    pub lang: String,
    pub lang_slug: String,
    pub code: String,
}

////////////////////////////////////////////////////////////////////////////////
////////////////////////////////////////////////////////////////////////////////
// REST
////////////////////////////////////////////////////////////////////////////////

/// `/api/problems/all/`
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Catalog {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub num_total: u32,
    pub stat_status_pairs: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct CatalogEntry {
    pub stat: CatalogStat,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct CatalogStat {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub frontend_question_id: u32,
    #[serde(rename = "question__title_slug")] pub title_slug: String,
}

/// `/api/problems/favorite_lists/{set}/`, newest problem first
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ProblemSet {
    pub stat_status_pairs: Vec<ProblemSetEntry>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ProblemSetEntry {
    pub stat: ProblemSetStat,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ProblemSetStat {
    #[serde(rename = "question__title_slug")] pub title_slug: String,
}

/// `/list/api/get_list/{list}/`
#[derive(Debug, Clone, serde::Deserialize)]
pub struct UserList {
    pub questions: Vec<UserListQuestion>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct UserListQuestion {
    pub title_slug: String,
}
