use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use cerulean::config::Config;
use cerulean::corpus::decode::decode_bytes;
use cerulean::corpus::loader::load_corpus;
use cerulean::corpus::store::CorpusHandle;
use cerulean::keywords::KeywordEngine;
use cerulean::lexicon::Lexicon;
use cerulean::output::terminal;
use cerulean::retrieval::engine::search;
use cerulean::screening::analysis::analyze_applicant;
use cerulean::status;

/// Cerulean: knowledge-base Q&A and applicant screening for 青蓝公司 HR.
///
/// Answers policy questions from the .txt knowledge base and recommends a
/// department for an applicant's self-introduction.
#[derive(Parser)]
#[command(name = "cerulean", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask one question against the policy knowledge base
    Ask {
        /// The question text
        question: String,
    },

    /// Interactive Q&A session (:reload re-reads the knowledge base)
    Repl,

    /// Analyze an applicant self-introduction and recommend a department
    Analyze {
        /// The self-introduction text (omit when using --file)
        introduction: Option<String>,

        /// Read the self-introduction from a file (UTF-8 or GBK)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Print the analysis as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show system status (knowledge base, lexicon)
    Status,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("cerulean=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let lexicon = Lexicon::load(config.lexicon_path.as_deref())?;

    match cli.command {
        Commands::Ask { question } => {
            config.require_kb()?;
            let corpus = load_corpus(&config.kb_path);
            let engine = KeywordEngine::new(lexicon.segmenter_vocabulary());

            match search(&question, &corpus, &engine) {
                Ok(answer) => terminal::display_answer(&question, &answer),
                Err(err) => println!("{}", err.to_string().red()),
            }
        }

        Commands::Repl => {
            config.require_kb()?;
            let handle = CorpusHandle::new(load_corpus(&config.kb_path));
            let engine = KeywordEngine::new(lexicon.segmenter_vocabulary());

            println!(
                "{}",
                "知识库问答。输入问题，:reload 重新加载知识库，:quit 退出。".dimmed()
            );

            let stdin = io::stdin();
            let mut lines = stdin.lock();
            let mut line = String::new();
            loop {
                print!("> ");
                io::stdout().flush()?;
                line.clear();
                if lines.read_line(&mut line)? == 0 {
                    break;
                }
                match line.trim() {
                    "" => continue,
                    ":quit" | ":q" => break,
                    ":reload" => {
                        handle.replace(load_corpus(&config.kb_path));
                        println!("知识库已重新加载（{} 个文档）", handle.snapshot().len());
                    }
                    question => {
                        let corpus = handle.snapshot();
                        match search(question, &corpus, &engine) {
                            Ok(answer) => println!("{answer}"),
                            Err(err) => println!("{}", err.to_string().red()),
                        }
                    }
                }
            }
        }

        Commands::Analyze {
            introduction,
            file,
            json,
        } => {
            let text = read_introduction(introduction, file)?;
            match analyze_applicant(&text, &lexicon) {
                Ok(analysis) if json => println!("{}", serde_json::to_string_pretty(&analysis)?),
                Ok(analysis) => terminal::display_analysis(&analysis),
                Err(err) => println!("{}", err.to_string().red()),
            }
        }

        Commands::Status => {
            let corpus = load_corpus(&config.kb_path);
            status::show(&config, &corpus, &lexicon);
        }
    }

    Ok(())
}

/// Resolve the introduction text from the CLI arguments. Files go through
/// the same decode chain as knowledge-base documents, so GBK exports from
/// older tooling work unchanged.
fn read_introduction(inline: Option<String>, file: Option<PathBuf>) -> Result<String> {
    match (inline, file) {
        (Some(text), None) => Ok(text),
        (None, Some(path)) => {
            let raw = std::fs::read(&path)?;
            Ok(decode_bytes(&raw)?)
        }
        (Some(_), Some(_)) => anyhow::bail!("Pass either an inline introduction or --file, not both"),
        (None, None) => anyhow::bail!("Provide an introduction, or --file <path>"),
    }
}
