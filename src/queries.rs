use serde_json::json;

/// Large enough that a problem list never needs a second page.
pub const PROBLEM_LIST_LIMIT: u64 = 1_000_000;

const QUESTION_DATA: &str = "\
query questionData($titleSlug: String!) {
  question(titleSlug: $titleSlug) {
    questionId
    questionFrontendId
    title
    titleSlug
    content
    isPaidOnly
    difficulty
    topicTags {
      name
      slug
    }
    codeSnippets {
      lang
      langSlug
      code
    }
  }
}
";

const TOPIC_TAG: &str = "\
query getTopicTag($slug: String!) {
  topicTag(slug: $slug) {
    name
    questions {
      questionFrontendId
      title
      titleSlug
      isPaidOnly
    }
  }
}
";

const PROBLEM_LIST: &str = "\
query problemsetQuestionList($categorySlug: String, $limit: Int, $skip: Int, $filters: QuestionListFilterInput) {
  problemsetQuestionList: questionList(
    categorySlug: $categorySlug
    limit: $limit
    skip: $skip
    filters: $filters
  ) {
    total: totalNum
    questions: data {
      frontendQuestionId: questionFrontendId
      paidOnly: isPaidOnly
      title
      titleSlug
    }
  }
}
";

pub fn question_data(title_slug: &str) -> serde_json::Value {
    json!({
        "operationName": "questionData",
        "variables": { "titleSlug": title_slug },
        "query": QUESTION_DATA,
    })
}

pub fn topic_tag(slug: &str) -> serde_json::Value {
    json!({
        "operationName": "getTopicTag",
        "variables": { "slug": slug },
        "query": TOPIC_TAG,
    })
}

pub fn problem_list(list_id: &str) -> serde_json::Value {
    json!({
        "query": PROBLEM_LIST,
        "variables": {
            "categorySlug": "",
            "skip": 0,
            "limit": PROBLEM_LIST_LIMIT,
            "filters": { "listId": list_id },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_payload_carries_slug() {
        let body = question_data("two-sum");
        assert_eq!(body["operationName"], "questionData");
        assert_eq!(body["variables"]["titleSlug"], "two-sum");
        assert!(body["query"].as_str().unwrap().contains("codeSnippets"));
    }

    #[test]
    fn problem_list_payload_avoids_pagination() {
        let body = problem_list("93afdecd8402495fa94c8fb4b98be8fd");
        assert_eq!(body["variables"]["filters"]["listId"], "93afdecd8402495fa94c8fb4b98be8fd");
        assert_eq!(body["variables"]["limit"], PROBLEM_LIST_LIMIT);
        assert_eq!(body["variables"]["skip"], 0);
    }
}
