//! Turning what the user typed into problem slugs.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use itertools::Itertools;
use regex::Regex;

use crate::errors::{Error, Result};
use crate::fetcher::Fetch;
use crate::schema::Catalog;
use crate::session::Session;

/// A named group of problems that LeetCode serves as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collection {
    Tag(String),
    ProblemSet(String),
    List(String),
    ProblemList(String),
}

type MakeCollection = fn(String) -> Collection;

fn collection_patterns() -> &'static [(MakeCollection, Regex)] {
    static PATTERNS: OnceLock<Vec<(MakeCollection, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        let pattern = |path: &str| {
            Regex::new(&format!(r"^https?://leetcode\.com/{}/([^\s/]+)\S*$", path))
                .expect("Invalid Regex")
        };
        vec![
            (Collection::Tag as MakeCollection, pattern("tag")),
            (Collection::ProblemSet as MakeCollection, pattern("problemset")),
            (Collection::List as MakeCollection, pattern("list")),
            (Collection::ProblemList as MakeCollection, pattern("problem-list")),
        ]
    })
}

impl Collection {
    /// Recognise a collection page URL, e.g. `https://leetcode.com/tag/array/`.
    pub fn from_url(url: &str) -> Option<Self> {
        collection_patterns()
            .iter()
            .find_map(|(make, pattern)| pattern.captures(url).map(|c| make(c[1].to_string())))
    }
}

/// A single problem reference from the command line or an input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Id(u32),
    /// All digits, but too large for any frontend id
    OutOfRangeId(String),
    /// Inclusive, ascending
    Range(u32, u32),
    /// Already normalised to a slug
    Title(String),
}

impl Token {
    /// `None` for blank input.
    pub fn parse(token: &str) -> Option<Self> {
        static RANGE: OnceLock<Regex> = OnceLock::new();
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        if token.bytes().all(|b| b.is_ascii_digit()) {
            return Some(match token.parse() {
                Ok(id) => Token::Id(id),
                Err(_) => Token::OutOfRangeId(token.to_string()),
            });
        }
        let range = RANGE.get_or_init(|| Regex::new(r"^(\d+)-(\d+)$").expect("Invalid Regex"));
        if let Some(captures) = range.captures(token) {
            return Some(match (captures[1].parse(), captures[2].parse()) {
                (Ok(lo), Ok(hi)) => Token::Range(lo, hi),
                _ => Token::OutOfRangeId(token.to_string()),
            });
        }
        Some(Token::Title(title_to_slug(token)))
    }
}

/// `"Two  Sum"` becomes `"two-sum"`.
pub fn title_to_slug(title: &str) -> String {
    title.split_whitespace().map(str::to_lowercase).join("-")
}

/// Frontend id to slug, built from one catalog download.
#[derive(Debug, Clone, Default)]
pub struct IdIndex {
    slugs: BTreeMap<u32, String>,
}

impl IdIndex {
    pub fn get(&self, id: u32) -> Option<&str> {
        self.slugs.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }
}

impl From<Catalog> for IdIndex {
    fn from(catalog: Catalog) -> Self {
        let slugs = catalog
            .stat_status_pairs
            .into_iter()
            .filter(|entry| !entry.stat.title_slug.is_empty())
            .map(|entry| (entry.stat.frontend_question_id, entry.stat.title_slug))
            .collect::<BTreeMap<_, _>>();
        if slugs.len() != catalog.num_total as usize {
            log::debug!("catalog lists {} of {} problems", slugs.len(), catalog.num_total);
        }
        Self { slugs }
    }
}

impl<F: Fetch> Session<F> {
    /// The id index, downloading the catalog on first use.
    pub fn id_index(&self) -> Result<&IdIndex> {
        if let Some(index) = self.index.get() {
            return Ok(index);
        }
        let index = IdIndex::from(self.api.catalog()?);
        log::debug!("indexed {} problems", index.len());
        Ok(self.index.get_or_init(|| index))
    }

    pub fn slug_for_id(&self, id: u32) -> Result<String> {
        self.id_index()?
            .get(id)
            .map(str::to_string)
            .ok_or_else(|| Error::UnknownProblemId(id.to_string()))
    }

    /// Like [`Session::slug_for_id`], but an id missing from the catalog is
    /// logged and yields `None`.
    fn known_slug(&self, id: u32) -> Result<Option<String>> {
        match self.slug_for_id(id) {
            Ok(slug) => Ok(Some(slug)),
            Err(e @ Error::UnknownProblemId(_)) => {
                log::error!("skipping question: {}", e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    pub fn collection_slugs(&self, collection: &Collection) -> Result<Vec<String>> {
        match collection {
            Collection::Tag(tag) => self.api.slugs_by_tag(tag),
            Collection::ProblemSet(set) => self.api.slugs_by_problem_set(set),
            Collection::List(list) => self.api.slugs_by_list(list),
            Collection::ProblemList(list_id) => self.api.slugs_by_problem_list(list_id),
        }
    }

    /// Slugs of the collection behind `url`; an unrecognised URL is logged
    /// and yields nothing.
    pub fn resolve_url(&self, url: &str) -> Result<Vec<String>> {
        log::debug!("handling url: {}", url);
        match Collection::from_url(url) {
            Some(collection) => self.collection_slugs(&collection),
            None => {
                log::error!("unknown url: {}", url);
                Ok(Vec::new())
            }
        }
    }

    /// Slugs for `tokens` in input order, ranges expanded in place. Ids the
    /// catalog does not know are logged and left out.
    pub fn resolve_tokens<S: AsRef<str>>(
        &self,
        tokens: impl IntoIterator<Item = S>,
    ) -> Result<Vec<String>> {
        let mut slugs = Vec::new();
        for token in tokens {
            match Token::parse(token.as_ref()) {
                None => continue,
                Some(Token::Id(id)) => slugs.extend(self.known_slug(id)?),
                Some(Token::OutOfRangeId(token)) => {
                    log::error!("skipping question: {}", Error::UnknownProblemId(token));
                }
                Some(Token::Range(lo, hi)) => {
                    for id in lo..=hi {
                        slugs.extend(self.known_slug(id)?);
                    }
                }
                Some(Token::Title(slug)) => slugs.push(slug),
            }
        }
        Ok(slugs)
    }
}
