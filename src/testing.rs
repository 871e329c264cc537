//! Canned responses standing in for the remote endpoints.

use std::cell::RefCell;

use serde_json::json;

use crate::errors::{Error, Result};
use crate::fetcher::Fetch;

pub const BASE_URL: &str = "https://leetcode.test";

#[derive(Default)]
pub struct StubFetcher {
    gets: Vec<(String, String)>,
    posts: Vec<(String, String)>,
    requests: RefCell<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer GETs of `BASE_URL` + `path`.
    pub fn on_get(mut self, path: &str, response: &str) -> Self {
        self.gets.push((format!("{}{}", BASE_URL, path), response.to_string()));
        self
    }

    /// Answer POSTs whose serialized body contains `needle`.
    pub fn on_post(mut self, needle: &str, response: &str) -> Self {
        self.posts.push((needle.to_string(), response.to_string()));
        self
    }

    /// Every request seen so far: the URL of a GET, the body of a POST.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    fn not_found(url: &str) -> Error {
        Error::Status {
            url: url.to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        }
    }
}

impl Fetch for StubFetcher {
    fn get(&self, url: &str) -> Result<String> {
        self.requests.borrow_mut().push(url.to_string());
        self.gets
            .iter()
            .find(|(u, _)| u == url)
            .map(|(_, response)| response.clone())
            .ok_or_else(|| Self::not_found(url))
    }

    fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<String> {
        let body = body.to_string();
        self.requests.borrow_mut().push(body.clone());
        self.posts
            .iter()
            .find(|(needle, _)| body.contains(needle.as_str()))
            .map(|(_, response)| response.clone())
            .ok_or_else(|| Self::not_found(url))
    }
}

/// A catalog where problem `i` has slug `problem-i`, for `i` in `1..=n`.
pub fn numbered_catalog(n: u32) -> String {
    let pairs = (1..=n)
        .map(|i| json!({"stat": {"frontend_question_id": i, "question__title_slug": format!("problem-{}", i)}}))
        .collect::<Vec<_>>();
    json!({"num_total": n, "stat_status_pairs": pairs}).to_string()
}

/// A question-detail response with C++ and Python snippets.
pub fn question(id: &str, slug: &str, title: &str) -> String {
    json!({"data": {"question": {
        "questionId": id,
        "questionFrontendId": id,
        "title": title,
        "titleSlug": slug,
        "content": "<p>Given an array of integers <code>nums</code>, return indices.</p>\n<pre>a, \"b\"</pre>",
        "isPaidOnly": false,
        "difficulty": "Easy",
        "topicTags": [
            {"name": "Array", "slug": "array"},
            {"name": "Hash Table", "slug": "hash-table"}
        ],
        "codeSnippets": [
            {"lang": "C++", "langSlug": "cpp", "code": "class Solution {\npublic:\n    vector<int> twoSum(vector<int>& nums, int target) {\n        \n    }\n};"},
            {"lang": "Python3", "langSlug": "python3", "code": "class Solution:\n    def twoSum(self, nums: List[int], target: int) -> List[int]:\n        "}
        ]
    }}})
    .to_string()
}
