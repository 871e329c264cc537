use std::cell::OnceCell;
use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::card::generate_card;
use crate::config::Settings;
use crate::endpoints::Api;
use crate::errors::{Error, Result};
use crate::fetcher::{Fetch, HttpFetcher};
use crate::resolver::IdIndex;

/// Outcome of [`Session::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_file: PathBuf,
    pub saved: usize,
    /// Slugs that could not be turned into a card, in request order
    pub skipped: Vec<String>,
}

/// State of one invocation: the requested slugs and what became of them.
pub struct Session<F> {
    pub(crate) api: Api<F>,
    pub(crate) index: OnceCell<IdIndex>,
    settings: Settings,
    slugs: Vec<String>,
    visited: HashSet<String>,
    skipped: Vec<String>,
}

impl Session<HttpFetcher> {
    pub fn new(settings: Settings) -> Result<Self> {
        let fetcher = HttpFetcher::new(&settings)?;
        Ok(Self::with_fetcher(fetcher, settings))
    }
}

impl<F: Fetch> Session<F> {
    pub fn with_fetcher(fetcher: F, settings: Settings) -> Self {
        Self {
            api: Api::new(fetcher, &settings),
            index: OnceCell::new(),
            settings,
            slugs: Vec::new(),
            visited: HashSet::new(),
            skipped: Vec::new(),
        }
    }

    /// Slugs queued for the next [`Session::run`], duplicates included.
    pub fn requested(&self) -> &[String] {
        &self.slugs
    }

    pub fn request_url(&mut self, url: &str) -> Result<()> {
        let slugs = self.resolve_url(url)?;
        self.slugs.extend(slugs);
        Ok(())
    }

    pub fn request_tokens<S: AsRef<str>>(&mut self, tokens: impl IntoIterator<Item = S>) -> Result<()> {
        let slugs = self.resolve_tokens(tokens)?;
        self.slugs.extend(slugs);
        Ok(())
    }

    /// Queue the tokens of a file, one per line.
    pub fn request_input_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        log::debug!("reading questions from {}", path.as_ref().display());
        let content = std::fs::read_to_string(path)?;
        self.request_tokens(content.lines())
    }

    /// Append a card for every requested slug to the output file. A problem
    /// that fails is logged and skipped; the run goes on with the next one.
    pub fn run(&mut self) -> Result<RunSummary> {
        if self.slugs.is_empty() {
            return Err(Error::Usage("no question specified".to_string()));
        }
        log::debug!("title slugs: {:?}", self.slugs);
        let output_file = self.settings.output_file.clone();
        let file = OpenOptions::new().create(true).append(true).open(&output_file)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(file);

        for slug in std::mem::take(&mut self.slugs) {
            if self.visited.contains(&slug) {
                log::info!("skipping duplicate: {}", slug);
                continue;
            }
            match self.write_card(&mut writer, &slug) {
                Ok(()) => {
                    log::info!("generated card: {}", slug);
                    self.visited.insert(slug);
                }
                Err(e) => {
                    log::error!("error happened when generating card: {}", slug);
                    log::error!("{}", e);
                    if matches!(e, Error::PaidOnly(_)) {
                        log::error!("is this premium only?");
                    }
                    self.skipped.push(slug);
                }
            }
        }

        log::info!("saved {} cards to: {}", self.visited.len(), output_file.display());
        if !self.skipped.is_empty() {
            log::error!("skipped {} questions: {:?}", self.skipped.len(), self.skipped);
        }
        Ok(RunSummary {
            output_file,
            saved: self.visited.len(),
            skipped: self.skipped.clone(),
        })
    }

    fn write_card(&self, writer: &mut csv::Writer<File>, slug: &str) -> Result<()> {
        let card = generate_card(&self.api, slug, &self.settings.language)?;
        writer.write_record(card.record())?;
        writer.flush()?;
        Ok(())
    }
}
