extern crate clap;

use clap::{App, Arg};
use log::LevelFilter;
use std::env;
use std::process::exit;
use std::time::SystemTime;

use subanagram::*;

fn output_matches_as_text(word: &str, matches: &Matches) {
    println!();
    println!("Results for the word: '{}'", word);
    println!("{}", "=".repeat(word.chars().count() + 20));
    if matches.anagrams.is_empty() {
        println!("Anagrams: None");
    } else {
        println!("Anagrams ({}):", matches.anagrams.len());
        println!("{}", matches.anagrams.iter().map(String::as_str).collect::<Vec<_>>().join(", "));
    }
    if matches.sub_anagrams.is_empty() {
        println!("Sub-anagrams: None");
    } else {
        println!("Sub-anagrams ({}):", matches.sub_anagrams.len());
        println!("{}", matches.sub_anagrams.iter().map(String::as_str).collect::<Vec<_>>().join(", "));
    }
    println!("{}", "-".repeat(40));
}

fn output_matches_as_json(word: &str, matches: &Matches, seqnr: usize) {
    if seqnr > 1 {
        println!(",")
    }
    print!("    {}", matches.to_json(word));
}

///Set up logging: `--debug` selects the Debug level, `RUST_LOG` overrides either way
fn init_logger(debug: bool) {
    let level = if debug { LevelFilter::Debug } else { LevelFilter::Info };
    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    builder.init();
}

fn elapsed_ms(begintime: SystemTime) -> u128 {
    SystemTime::now()
        .duration_since(begintime)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

fn main() {
    let args = App::new("Subanagram")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Find anagrams and sub-anagrams of words in a dictionary")
        .arg(Arg::with_name("words")
            .help("The word(s) to analyze")
            .takes_value(true)
            .multiple(true)
            .required(true))
        .arg(Arg::with_name("strategy")
            .long("strategy")
            .short("m")
            .help("Index strategy to use for solving: linear, sorted, frequency or trie")
            .takes_value(true)
            .default_value("linear"))
        .arg(Arg::with_name("wordlist")
            .long("wordlist")
            .short("w")
            .help("Path to the word list file, words are separated by whitespace")
            .takes_value(true)
            .default_value("data/words_alpha.txt"))
        .arg(Arg::with_name("cache-dir")
            .long("cache-dir")
            .help("Directory in which built indexes are cached and reused on later runs. Caching is disabled if not set")
            .takes_value(true))
        .arg(Arg::with_name("max-length")
            .long("max-length")
            .help("Maximum query length for the sorted strategy, whose sub-anagram search is exponential in the query length. Set to 0 for no limit")
            .takes_value(true)
            .default_value("20"))
        .arg(Arg::with_name("json")
            .long("json")
            .short("j")
            .help("Output json instead of text")
            .required(false))
        .arg(Arg::with_name("debug")
            .long("debug")
            .short("D")
            .help("Debug")
            .required(false))
        .get_matches();

    init_logger(args.is_present("debug"));

    let strategy: Strategy = match args.value_of("strategy").unwrap_or("linear").parse() {
        Ok(strategy) => strategy,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(2);
        }
    };
    let max_length: usize = match args.value_of("max-length").unwrap_or("20").parse() {
        Ok(max_length) => max_length,
        Err(e) => {
            eprintln!("Error: --max-length should be an integer: {}", e);
            exit(2);
        }
    };

    //validate all input before doing any work
    let mut words: Vec<String> = Vec::new();
    for raw in args.values_of("words").into_iter().flatten() {
        for raw in raw.split_whitespace() {
            match sanitize(raw).and_then(|word| check_query_length(strategy, &word, max_length).map(|_| word)) {
                Ok(word) => words.push(word),
                Err(e) => {
                    eprintln!("Error with input word '{}': {}", raw, e);
                    exit(1);
                }
            }
        }
    }

    let wordlist = args.value_of("wordlist").unwrap_or("data/words_alpha.txt");
    log::info!("Loading word list...");
    let dictionary = match read_wordlist(wordlist) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    let begintime = SystemTime::now();
    let index = match args.value_of("cache-dir") {
        Some(dir) => AnyIndex::build_cached(strategy, &dictionary, &IndexCache::new(dir)),
        None => AnyIndex::build(strategy, &dictionary),
    };
    let index = match index {
        Ok(index) => index,
        Err(AnagramError::EmptyDictionary) => {
            eprintln!("Error: Word list is empty. Please provide a valid dataset.");
            exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };
    log::info!("Index ready in {} ms", elapsed_ms(begintime));

    let solver = Solver::new(index);
    let json = args.is_present("json");
    if json {
        println!("[");
    }
    let begintime = SystemTime::now();
    let results = solver.find_batch(&words);
    let mut seqnr = 0;
    for (word, result) in words.iter().zip(results) {
        match result {
            Ok(matches) if json => {
                seqnr += 1;
                output_matches_as_json(word, &matches, seqnr);
            }
            Ok(matches) => output_matches_as_text(word, &matches),
            Err(e) => eprintln!("Error during solving for word '{}': {}", word, e),
        }
    }
    if json {
        println!("\n]");
    }
    log::info!("Solved {} word(s) in {} ms", words.len(), elapsed_ms(begintime));
}
