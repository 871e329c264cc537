//! A local stand-in for leetcode.com.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::sync::Arc;
use std::thread;

use serde_json::json;

pub struct Reply {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            headers: vec![("Content-Type".to_string(), "application/json; charset=utf-8".to_string())],
            body: body.into().into_bytes(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn gzipped(mut self) -> Self {
        let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(&self.body).expect("Failed to compress body");
        self.body = encoder.finish().expect("Failed to compress body");
        self.headers.push(("Content-Encoding".to_string(), "gzip".to_string()));
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// Serve `handler(url, body)` on a random local port until the test process
/// exits, one thread per request. Returns the base URL.
pub fn serve<H>(handler: H) -> String
where
    H: Fn(&str, &str) -> Reply + Send + Sync + 'static,
{
    let handler = Arc::new(handler);
    let server = tiny_http::Server::http("127.0.0.1:0").expect("Failed to bind test server");
    let port = server
        .server_addr()
        .to_ip()
        .expect("Test server is not listening on an IP address")
        .port();
    thread::spawn(move || {
        for mut request in server.incoming_requests() {
            let handler = Arc::clone(&handler);
            thread::spawn(move || {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);
                let reply = handler(request.url(), &body);
                let mut response =
                    tiny_http::Response::from_data(reply.body).with_status_code(reply.status);
                for (name, value) in &reply.headers {
                    let header = tiny_http::Header::from_bytes(name.as_bytes(), value.as_bytes())
                        .expect("Invalid header");
                    response.add_header(header);
                }
                let _ = request.respond(response);
            });
        }
    });
    format!("http://127.0.0.1:{}", port)
}

/// Catalog, two C++ problems and one SQL-only problem.
pub fn leetcode(url: &str, body: &str) -> Reply {
    match url {
        "/api/problems/all/" => Reply::json(
            json!({
                "num_total": 3,
                "stat_status_pairs": [
                    {"stat": {"frontend_question_id": 175, "question__title_slug": "combine-two-tables"}},
                    {"stat": {"frontend_question_id": 2, "question__title_slug": "add-two-numbers"}},
                    {"stat": {"frontend_question_id": 1, "question__title_slug": "two-sum"}}
                ]
            })
            .to_string(),
        )
        .gzipped(),
        "/graphql" if body.contains(r#""titleSlug":"two-sum""#) => {
            Reply::json(question("1", "two-sum", "Two Sum", "twoSum")).gzipped()
        }
        "/graphql" if body.contains(r#""titleSlug":"add-two-numbers""#) => {
            Reply::json(question("2", "add-two-numbers", "Add Two Numbers", "addTwoNumbers"))
        }
        "/graphql" if body.contains(r#""titleSlug":"combine-two-tables""#) => Reply::json(
            json!({"data": {"question": {
                "questionFrontendId": "175",
                "titleSlug": "combine-two-tables",
                "title": "Combine Two Tables",
                "content": "<p>Write a solution to report the first name, last name, city, and state.</p>",
                "isPaidOnly": false,
                "difficulty": "Easy",
                "topicTags": [{"name": "Database", "slug": "database"}],
                "codeSnippets": [{"lang": "MySQL", "langSlug": "mysql", "code": "# Write your MySQL query statement below\n"}]
            }}})
            .to_string(),
        ),
        "/graphql" => Reply::json(r#"{"data": {"question": null}}"#),
        _ => Reply::status(404),
    }
}

fn question(id: &str, slug: &str, title: &str, method: &str) -> String {
    json!({"data": {"question": {
        "questionFrontendId": id,
        "titleSlug": slug,
        "title": title,
        "content": "<p>You are given two <strong>non-empty</strong> inputs.</p>\n\n<pre>\nInput: nums = [2,7,11,15], target = 9\nOutput: [0,1]\n</pre>",
        "isPaidOnly": false,
        "difficulty": "Easy",
        "topicTags": [{"name": "Array", "slug": "array"}, {"name": "Hash Table", "slug": "hash-table"}],
        "codeSnippets": [
            {"lang": "C++", "langSlug": "cpp", "code": format!("class Solution {{\npublic:\n    vector<int> {}(vector<int>& nums, int target) {{\n        \n    }}\n}};", method)},
            {"lang": "Java", "langSlug": "java", "code": format!("class Solution {{\n    public int[] {}(int[] nums, int target) {{\n        \n    }}\n}}", method)}
        ]
    }}})
    .to_string()
}

pub fn read_rows(path: &std::path::Path) -> Vec<Vec<String>> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .expect("Failed to open card file")
        .records()
        .map(|r| r.expect("Malformed row").iter().map(str::to_string).collect())
        .collect()
}
