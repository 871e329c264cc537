use crate::config::{self, Settings};
use crate::errors::Result;
use crate::fetcher::Fetch;
use crate::queries;
use crate::schema::{self, GraphQlResponse};

/// The LeetCode endpoints, each projected to the data the tool needs.
pub struct Api<F> {
    fetcher: F,
    base_url: String,
}

impl<F: Fetch> Api<F> {
    pub fn new(fetcher: F, settings: &Settings) -> Self {
        Self {
            fetcher,
            base_url: settings.base_url.clone(),
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    fn url(&self, path: &str) -> String {
        config::endpoint(&self.base_url, path)
    }

    fn graphql<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &'static str,
        body: &serde_json::Value,
    ) -> Result<T> {
        let content = self.fetcher.post_json(&self.url(config::GRAPHQL_PATH), body)?;
        let response: GraphQlResponse<T> = schema::parse(endpoint, &content)?;
        Ok(response.data)
    }

    /// Problems carrying a topic tag, in the order the server lists them.
    pub fn slugs_by_tag(&self, tag: &str) -> Result<Vec<String>> {
        log::debug!("getting by tag: {}", tag);
        let data: schema::TopicTagData = self.graphql("topic tag", &queries::topic_tag(tag))?;
        Ok(data.topic_tag.questions.into_iter().map(|q| q.title_slug).collect())
    }

    /// Problems of a curated problem set, oldest first.
    pub fn slugs_by_problem_set(&self, problem_set: &str) -> Result<Vec<String>> {
        log::debug!("getting by set: {}", problem_set);
        let content = self.fetcher.get(&self.url(&config::problem_set_path(problem_set)))?;
        let set: schema::ProblemSet = schema::parse("problem set", &content)?;
        // served newest first
        Ok(set.stat_status_pairs.into_iter().rev().map(|p| p.stat.title_slug).collect())
    }

    pub fn slugs_by_list(&self, list: &str) -> Result<Vec<String>> {
        log::debug!("getting by list: {}", list);
        let content = self.fetcher.get(&self.url(&config::user_list_path(list)))?;
        let list: schema::UserList = schema::parse("user list", &content)?;
        Ok(list.questions.into_iter().map(|q| q.title_slug).collect())
    }

    pub fn slugs_by_problem_list(&self, list_id: &str) -> Result<Vec<String>> {
        log::debug!("getting by problem list: {}", list_id);
        let data: schema::ProblemListData =
            self.graphql("problem list", &queries::problem_list(list_id))?;
        Ok(data.problem_list.questions.into_iter().map(|q| q.title_slug).collect())
    }

    /// Every known problem with its frontend id.
    pub fn catalog(&self) -> Result<schema::Catalog> {
        log::debug!("getting all problems");
        let content = self.fetcher.get(&self.url(config::ALL_PROBLEMS_PATH))?;
        schema::parse("catalog", &content)
    }

    /// Full detail of one problem, `None` if the slug is unknown.
    pub fn question(&self, title_slug: &str) -> Result<Option<schema::Question>> {
        log::debug!("getting question data: {}", title_slug);
        let data: schema::QuestionData =
            self.graphql("question", &queries::question_data(title_slug))?;
        Ok(data.question)
    }
}
