use std::fmt::Display;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::exit;
use std::time::Instant;

use serde::Serialize;
use structopt::StructOpt;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use scrabble_dictionary::{FileFormat, Result, Wordlist};


/// Look up words, prefixes and hooks in a word list.
#[derive(StructOpt)]
struct Cli {
    /// The word list to load, one word per line
    #[structopt(parse(from_os_str))]
    path: PathBuf,
    /// Split each line on this character
    #[structopt(short, long)]
    delimiter: Option<char>,
    /// Zero-based column holding the word when a delimiter is given
    #[structopt(short, long)]
    column: Option<usize>,
    /// Skip lines starting with this character
    #[structopt(long)]
    comment: Option<char>,
    /// Lowercase words while loading
    #[structopt(short, long)]
    lowercase: bool,
    /// Print results as JSON
    #[structopt(long)]
    json: bool,
    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(StructOpt)]
enum Command {
    /// Is each argument a word?
    Word { words: Vec<String> },
    /// Does any word start with each argument?
    Prefix { prefixes: Vec<String> },
    /// Letters that can be put in front of each argument to make a word
    FrontHooks { suffixes: Vec<String> },
    /// Letters that can be put after each argument to make a word
    BackHooks { prefixes: Vec<String> },
    /// Read the list again and check every word in it is found
    Check,
}

#[derive(Serialize)]
struct Answer<'a, T> {
    query: &'a str,
    result: T,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    checked: usize,
    missing: Vec<&'a str>,
}

fn answer<T, F>(queries: &[String], f: F) -> Vec<Answer<T>>
    where F: Fn(&str) -> T {
    queries.iter().map(|q| Answer { query: q, result: f(q) }).collect()
}

fn print_answers<T: Serialize + Display>(answers: &[Answer<T>], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(answers)?);
    } else {
        answers.iter().for_each(|a| println!("{}\t{}", a.query, a.result));
    }
    Ok(())
}

fn check(wl: &Wordlist, args: &Cli, format: &FileFormat) -> Result<()> {
    let words = format.read_words(BufReader::new(File::open(&args.path)?))?;

    let start = Instant::now();
    let found = wl.check_all(&words);
    let missing: Vec<&str> = words.iter()
        .zip(found)
        .filter(|(_, found)| !found)
        .map(|(word, _)| word.as_str())
        .collect();
    info!(checked = words.len(), missing = missing.len(),
          elapsed_ms = start.elapsed().as_millis() as u64, "checked word list");
    missing.iter().for_each(|word| warn!(word, "word missing from dictionary"));

    if args.json {
        let report = CheckReport { checked: words.len(), missing };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{} words checked, {} missing", words.len(), missing.len());
    }
    Ok(())
}

fn run(args: Cli) -> Result<()> {
    let format = FileFormat::builder()
        .delimiter(args.delimiter)
        .word_column(args.column)
        .comment(args.comment)
        .lowercase(args.lowercase)
        .build();

    let wl = Wordlist::from_file(&args.path, &format)?;

    match &args.cmd {
        Command::Word { words } =>
            print_answers(&answer(words, |w| wl.contains_word(w)), args.json),
        Command::Prefix { prefixes } =>
            print_answers(&answer(prefixes, |p| wl.contains_prefix(p)), args.json),
        Command::FrontHooks { suffixes } =>
            print_answers(&answer(suffixes, |s| wl.valid_first_letters(s)), args.json),
        Command::BackHooks { prefixes } =>
            print_answers(&answer(prefixes, |p| wl.valid_last_letters(p)), args.json),
        Command::Check => check(&wl, &args, &format),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::from_args();
    if let Err(e) = run(args) {
        error!("{}", e);
        exit(1);
    }
}
