use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use lc2anki::{config, Error, RunSummary, Session, Settings};

/// lc2anki is a tool generating Anki cards for LeetCode.
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "lc2anki", version, override_usage = "lc2anki [OPTION]...")]
struct Cli {
    /// Specify language, for example: C, C++, Java
    #[arg(short, long, value_name = "LANG")]
    lang: Option<String>,

    /// Set output file, cards are appended to it
    #[arg(short, long, value_name = "FILE", default_value = config::DEFAULT_OUTPUT_FILE)]
    output_file: PathBuf,

    /// Show debug info
    #[arg(short, long)]
    debug: bool,

    /// Also write the log to a file in DIR
    #[arg(long, value_name = "DIR")]
    log_file: Option<PathBuf>,

    /// Generate cards from link, for example: https://leetcode.com/tag/array/,
    /// https://leetcode.com/problemset/top-100-liked-questions/,
    /// https://leetcode.com/list/foobar/,
    /// https://leetcode.com/problem-list/93afdecd8402495fa94c8fb4b98be8fd
    #[arg(short, long, value_name = "URL", help_heading = "Question options")]
    url: Option<String>,

    /// Specify question id or title slug, for example: 1, two-sum, 1-100
    #[arg(short, long = "question", value_name = "QUESTION", num_args = 1.., help_heading = "Question options")]
    questions: Vec<String>,

    /// Specify question ids or titles from FILE split by lines
    #[arg(short, long, value_name = "FILE", help_heading = "Question options")]
    input_file: Option<PathBuf>,

    #[arg(long, env = "LC2ANKI_BASE_URL", default_value = config::DEFAULT_BASE_URL, hide = true)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "LC2ANKI_TIMEOUT", value_name = "SECS", default_value_t = config::DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Attempts per request before giving up
    #[arg(long, value_name = "N", default_value_t = config::DEFAULT_ATTEMPTS,
          value_parser = clap::value_parser!(u32).range(1..))]
    retries: u32,
}

fn setup_logging(debug: bool, log_directory: Option<&Path>) -> anyhow::Result<flexi_logger::LoggerHandle> {
    let level = if debug { "debug" } else { "info" };
    let spec = flexi_logger::LogSpecification::parse(&format!("warn,lc2anki={}", level))?;
    let logger = match log_directory {
        Some(directory) => flexi_logger::Logger::with(spec)
            .log_to_file(
                flexi_logger::FileSpec::default()
                    .directory(directory)
                    .basename("lc2anki")
                    .use_timestamp(false),
            )
            .duplicate_to_stderr(flexi_logger::Duplicate::All)
            .format_for_files(flexi_logger::detailed_format)
            .format_for_stderr(flexi_logger::colored_detailed_format),
        None => flexi_logger::Logger::with(spec)
            .log_to_stderr()
            .format_for_stderr(flexi_logger::colored_detailed_format),
    };
    Ok(logger.set_palette("b1;3;2;4;6".to_string()).start()?)
}

fn run(cli: Cli) -> anyhow::Result<RunSummary> {
    if cli.url.is_none() && cli.questions.is_empty() && cli.input_file.is_none() {
        return Err(Error::Usage("no question specified".to_string()).into());
    }

    let language = match cli.lang {
        Some(language) => language,
        None => {
            log::info!("no language specified, using default: {}", config::DEFAULT_LANGUAGE);
            config::DEFAULT_LANGUAGE.to_string()
        }
    };
    let settings = Settings {
        language,
        output_file: cli.output_file,
        base_url: cli.base_url,
        timeout: Duration::from_secs(cli.timeout),
        attempts: cli.retries,
        ..Settings::default()
    };

    let mut session = Session::new(settings)?;
    if let Some(url) = &cli.url {
        session.request_url(url)?;
    }
    session.request_tokens(&cli.questions)?;
    if let Some(path) = &cli.input_file {
        session
            .request_input_file(path)
            .with_context(|| format!("Failed to read questions from {}", path.display()))?;
    }
    Ok(session.run()?)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _logger = match setup_logging(cli.debug, cli.log_file.as_deref()) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<Error>() {
            Some(Error::Usage(message)) => {
                log::error!("{}", message);
                let _ = Cli::command().print_help();
                ExitCode::from(2)
            }
            _ => {
                eprintln!("Error: {:#}", e);
                ExitCode::FAILURE
            }
        },
    }
}
