// Command-line front end: loads text, runs the engine, renders the results.
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use walkdir::WalkDir;

use textpulse::nlp::sentiment::Polarity;
use textpulse::source::{is_supported, read_file, TextSource};
use textpulse::{analyze, run_topic_model, AnalysisReport, LdaConfig, TopicReport};

#[derive(Parser)]
#[command(name = "textpulse", about = "Sentiment, keywords, trends and LDA topics for a block of text")]
struct Cli {
    /// Debug-level logs on stderr (RUST_LOG takes precedence otherwise)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct InputArgs {
    /// Text to analyze
    #[arg(short, long)]
    text: Option<String>,
    /// txt, md, csv, json or pdf file
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// Remote document (not supported yet)
    #[arg(short, long)]
    url: Option<String>,
}

impl InputArgs {
    fn source(&self) -> TextSource {
        match (&self.text, &self.file, &self.url) {
            (Some(text), _, _) => TextSource::Inline(text.clone()),
            (_, Some(path), _) => TextSource::File(path.clone()),
            (_, _, Some(url)) => TextSource::Url(url.clone()),
            _ => TextSource::Inline(String::new()),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Full report: counts, sentiment, keywords, trend, key phrases, summary
    Analyze {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long)]
        json: bool,
    },
    /// LDA topic model
    Topics {
        #[command(flatten)]
        input: InputArgs,
        #[arg(short = 'k', long = "topics", default_value_t = 5)]
        topics: usize,
        #[arg(short = 'w', long = "words", default_value_t = 10)]
        words: usize,
        #[arg(long, default_value_t = 0.1)]
        alpha: f64,
        #[arg(long, default_value_t = 0.01)]
        beta: f64,
        #[arg(long, default_value_t = 20)]
        iterations: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    /// Analyze every supported file under a directory
    Batch {
        #[arg(short, long)]
        dir: PathBuf,
        #[arg(short, long, default_value = "textpulse_report.json")]
        out: PathBuf,
    },
}

#[derive(Serialize, Deserialize, Debug)]
struct BatchEntry {
    path: String,
    report: AnalysisReport,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("textpulse=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("textpulse=warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn load_text(input: &InputArgs) -> Result<String> {
    let text = input.source().load()?;
    if text.trim().is_empty() {
        bail!("no text to analyze");
    }
    Ok(text)
}

fn polarity_color(polarity: Polarity) -> Color {
    match polarity {
        Polarity::Positive => Color::Green,
        Polarity::Negative => Color::Red,
        Polarity::Neutral => Color::Yellow,
    }
}

fn print_heading(out: &mut dyn WriteColor, title: &str) -> Result<()> {
    out.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(out, "\n{}", title)?;
    out.reset()?;
    Ok(())
}

fn print_report(out: &mut dyn WriteColor, report: &AnalysisReport) -> Result<()> {
    writeln!(
        out,
        "Words: {}  Sentences: {}  Characters: {}  Topics: {}",
        report.word_count,
        report.sentence_count,
        report.character_count,
        report.topics.len()
    )?;

    print_heading(out, "Summary")?;
    writeln!(out, "{}", report.summary.trim())?;

    print_heading(out, "Sentiment")?;
    let s = &report.sentiment;
    out.set_color(ColorSpec::new().set_fg(Some(polarity_color(s.overall))).set_bold(true))?;
    write!(out, "{}", s.overall.to_string().to_uppercase())?;
    out.reset()?;
    writeln!(
        out,
        " (score {}%)  positive {}%  neutral {}%  negative {}%",
        s.score, s.positive, s.neutral, s.negative
    )?;

    print_heading(out, "Topics")?;
    for t in &report.topics {
        writeln!(out, "  {:<20} {:>3}  {:5.1}%", t.word, t.count, t.weight)?;
    }

    print_heading(out, "Word frequency")?;
    for w in &report.word_frequency {
        writeln!(out, "  {:<20} {:>3}", w.word, w.count)?;
    }

    print_heading(out, "Sentiment trend")?;
    for p in &report.trends {
        writeln!(
            out,
            "  segment {:>2}: {:>3}  (+{} / -{})",
            p.segment, p.score, p.positive, p.negative
        )?;
    }

    print_heading(out, "Key phrases")?;
    if report.key_phrases.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for k in &report.key_phrases {
        writeln!(out, "  [{}] {}", k.kind, k.text)?;
    }
    Ok(())
}

fn print_topics(out: &mut dyn WriteColor, report: &TopicReport) -> Result<()> {
    if report.is_empty() {
        writeln!(out, "Not enough text for topic modeling. Try a longer passage.")?;
        return Ok(());
    }
    writeln!(
        out,
        "{} topics over {} documents, {} distinct words",
        report.topics.len(),
        report.documents,
        report.vocabulary_size
    )?;
    for topic in &report.topics {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
        write!(out, "\nTopic {}", topic.id)?;
        out.reset()?;
        writeln!(out, "  {:.1}% of documents", topic.coverage)?;
        for wp in &topic.words {
            writeln!(out, "  {:<20} {:5.1}%", wp.word, wp.probability * 100.0)?;
        }
    }
    Ok(())
}

fn batch_dir(dir: &Path, out: &Path) -> Result<usize> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| is_supported(e.path()))
        .map(|e| e.path().to_path_buf())
        .collect();

    files.sort();

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {wide_bar} {pos}/{len} {msg}")?
            .progress_chars("=>-"),
    );

    let entries: Vec<BatchEntry> = files
        .par_iter()
        .filter_map(|p| {
            let entry = match read_file(p) {
                Ok(text) => Some(BatchEntry {
                    path: p.to_string_lossy().to_string(),
                    report: analyze(&text),
                }),
                Err(e) => {
                    warn!(path = %p.display(), error = %e, "skipping file");
                    None
                }
            };
            pb.inc(1);
            entry
        })
        .collect();

    pb.finish_with_message("analyzing files");

    let fout = File::create(out)?;
    serde_json::to_writer_pretty(fout, &entries)?;
    info!(files = entries.len(), out = %out.display(), "batch report written");
    Ok(entries.len())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    match cli.command {
        Commands::Analyze { input, json } => {
            let report = analyze(&load_text(&input)?);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&mut stdout, &report)?;
            }
        }
        Commands::Topics {
            input,
            topics,
            words,
            alpha,
            beta,
            iterations,
            seed,
            json,
        } => {
            let mut config = LdaConfig::new(topics)
                .num_words(words)
                .alpha(alpha)
                .beta(beta)
                .iterations(iterations);
            config.seed = seed;
            let report = run_topic_model(&load_text(&input)?, &config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_topics(&mut stdout, &report)?;
            }
        }
        Commands::Batch { dir, out } => {
            let n = batch_dir(&dir, &out)?;
            println!("Wrote {} reports to {}", n, out.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;
    use termcolor::Buffer;

    const TEXT: &str = "The launch went great and the team was happy. \
        Then a difficult problem appeared in the billing system. \
        Engineers fixed the error and customers were pleased again. \
        The quarter closed with a record success.";

    fn render(f: impl FnOnce(&mut Buffer) -> Result<()>) -> String {
        let mut buf = Buffer::no_color();
        f(&mut buf).unwrap();
        String::from_utf8(buf.into_inner()).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_input_args_require_exactly_one_source() {
        assert!(Cli::try_parse_from(["textpulse", "analyze"]).is_err());
        assert!(Cli::try_parse_from(["textpulse", "analyze", "-t", "a", "-u", "b"]).is_err());
        assert!(Cli::try_parse_from(["textpulse", "analyze", "--text", "hello"]).is_ok());
    }

    #[test]
    fn test_topics_defaults() {
        let cli = Cli::try_parse_from(["textpulse", "topics", "-t", "hello"]).unwrap();
        match cli.command {
            Commands::Topics {
                topics,
                words,
                iterations,
                seed,
                ..
            } => {
                assert_eq!((topics, words, iterations), (5, 10, 20));
                assert_eq!(seed, None);
            }
            _ => panic!("expected topics subcommand"),
        }
    }

    #[test]
    fn test_load_text_rejects_blank() {
        let input = InputArgs {
            text: Some("   ".into()),
            file: None,
            url: None,
        };
        assert!(load_text(&input).is_err());
    }

    #[test]
    fn test_load_text_url_not_implemented() {
        let input = InputArgs {
            text: None,
            file: None,
            url: Some("https://example.com/post".into()),
        };
        let err = load_text(&input).unwrap_err();
        assert!(err.to_string().contains("Not implemented"));
    }

    #[test]
    fn test_print_report() {
        let report = analyze(TEXT);
        let out = render(|b| print_report(b, &report));
        assert!(out.contains("Sentences: 4"));
        assert!(out.contains("POSITIVE"));
        assert!(out.contains("segment  1"));
        assert!(out.contains("[Main Point]") || out.contains("(none)"));
    }

    #[test]
    fn test_print_empty_topics() {
        let out = render(|b| print_topics(b, &TopicReport::default()));
        assert!(out.contains("Not enough text"));
    }

    #[test]
    fn test_print_topics() {
        let report = run_topic_model(TEXT, &LdaConfig::new(2).num_words(3).seed(4)).unwrap();
        let out = render(|b| print_topics(b, &report));
        assert!(out.contains("2 topics over"));
        assert!(out.contains("Topic 1"));
        assert!(out.contains("Topic 2"));
    }

    #[test]
    fn test_batch_dir() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let mut f1 = File::create(temp_dir.path().join("a.txt"))?;
        writeln!(f1, "{}", TEXT)?;
        std::fs::create_dir(temp_dir.path().join("nested"))?;
        std::fs::write(temp_dir.path().join("nested").join("b.md"), "A sad and awful day.")?;
        std::fs::write(temp_dir.path().join("skip.bin"), [0u8, 159, 146, 150])?;

        let out_dir = TempDir::new()?;
        let out = out_dir.path().join("report.json");
        let n = batch_dir(temp_dir.path(), &out)?;
        assert_eq!(n, 2);

        let entries: Vec<BatchEntry> = serde_json::from_reader(File::open(&out)?)?;
        assert_eq!(entries.len(), 2);
        assert!(entries[0].path.ends_with("a.txt"));
        assert_eq!(entries[0].report.sentiment.overall, Polarity::Positive);
        assert_eq!(entries[1].report.sentiment.overall, Polarity::Negative);
        Ok(())
    }

    #[test]
    fn test_batch_empty_dir() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let out = temp_dir.path().join("empty.json");
        assert_eq!(batch_dir(temp_dir.path(), &out)?, 0);
        let entries: Vec<BatchEntry> = serde_json::from_reader(File::open(&out)?)?;
        assert!(entries.is_empty());
        Ok(())
    }
}
