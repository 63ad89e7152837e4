use {
  anyhow::{Context, anyhow},
  api_error::ApiError,
  client::Client,
  collector::Collector,
  comment::Comment,
  comment_resource::CommentResource,
  comment_snippet::CommentSnippet,
  comment_thread::{CommentThread, ThreadSnippet},
  config::Config,
  error_response::ErrorResponse,
  fetcher::{PageFlow, drain},
  page::Page,
  report::write_report,
  reqwest::{StatusCode, Url},
  serde::{Deserialize, de::DeserializeOwned},
  std::{
    backtrace::BacktraceStatus,
    env, fmt, fs,
    future::Future,
    io::{BufWriter, Write},
    mem, process,
    time::Duration,
  },
  tokio::time::sleep,
  tracing::{debug, info, warn},
  utils::clean_field,
  video_info::VideoInfo,
};

mod api_error;
mod client;
mod collector;
mod comment;
mod comment_resource;
mod comment_snippet;
mod comment_thread;
mod config;
mod error_response;
mod fetcher;
mod page;
mod report;
mod utils;
mod video_info;
mod video_url;

const INPUT_FILE: &str = "videos.txt";

const OUTPUT_FILE: &str = "comments.csv";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn read_video_ids(path: &str) -> Result<Vec<String>> {
  let input =
    fs::read_to_string(path).with_context(|| format!("failed to open {path}"))?;

  input
    .lines()
    .map(str::trim)
    .filter(|line| !line.is_empty())
    .map(|line| {
      video_url::video_id(line)
        .with_context(|| format!("failed to find video id in {line}"))
    })
    .collect()
}

async fn run() -> Result {
  let config = Config::from_env()?;

  info!(
    min_length = config.min_length,
    max_comments = config.max_comments,
    "starting comment export"
  );

  let video_ids = read_video_ids(INPUT_FILE)?;

  let collector = Collector::new(Client::new(config.api_key.clone()), config);

  let mut videos = Vec::with_capacity(video_ids.len());

  for video_id in &video_ids {
    videos.push(collector.collect(video_id).await?);
  }

  let file = fs::File::create(OUTPUT_FILE)
    .with_context(|| format!("failed to create {OUTPUT_FILE}"))?;

  write_report(BufWriter::new(file), &videos)
    .with_context(|| format!("failed to write {OUTPUT_FILE}"))?;

  info!(path = OUTPUT_FILE, videos = videos.len(), "report written");

  Ok(())
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
    .init();

  if let Err(error) = run().await {
    eprintln!("error: {error}");

    for (i, cause) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();
        eprintln!("because:");
      }

      eprintln!("- {cause}");
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      eprintln!("backtrace:");
      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
