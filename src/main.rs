extern crate argparse;

use env_logger::Env;
use log::info;

use anagram_hunt::verifier::load_digests;
use anagram_hunt::{load_word_list, prepare, AnagramSearcher, Histogram, MatchVerifier, Result};

const DEFAULT_PHRASE: &str = "poultry outwits ants";

const DEFAULT_DIGESTS: [&str; 3] = [
    "e4820b45d2277f3844eac66c903e84be",
    "23170acc097c24edb98fc5488ab033fe",
    "665e5bcb0c20062fe8abaaf4628bb154",
];

fn main() -> Result<()> {
    use argparse::{ArgumentParser, Collect, Store};

    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let mut phrase = String::from(DEFAULT_PHRASE);
    let mut dictionary_path = String::from("wordlist");
    let mut maxwords: usize = 3;
    let mut enough: usize = 2;
    let (mut minletters, mut maxletters) = (0, std::usize::MAX);
    let mut digests: Vec<String> = vec![];
    let mut digest_path = String::new();

    {
        let mut ap = ArgumentParser::new();
        ap.set_description("Find the anagrams of a phrase whose MD5 digest is one of the given hashes");
        ap.refer(&mut phrase)
            .add_argument("phrase", Store, "Phrase to generate anagrams of");
        ap.refer(&mut dictionary_path)
            .add_option(&["-f", "--dictionary"], Store, "The path of the word list");
        ap.refer(&mut maxwords)
            .add_option(&["-W", "--max-words"], Store, "The maximum number of words in the generated anagrams");
        ap.refer(&mut enough)
            .add_option(&["-n", "--enough"], Store, "Stop after this many matches (0 searches everything)");
        ap.refer(&mut minletters)
            .add_option(&["-l", "--min-letters"], Store, "The minimum number of letters per word in the generated anagrams");
        ap.refer(&mut maxletters)
            .add_option(&["-L", "--max-letters"], Store, "The maximum number of letters per word in the generated anagrams");
        ap.refer(&mut digests)
            .add_option(&["-H", "--hash"], Collect, "A target digest, may be given several times");
        ap.refer(&mut digest_path)
            .add_option(&["--hash-file"], Store, "A file of target digests, one per line");
        ap.parse_args_or_exit();
    }

    if digest_path.len() != 0 {
        digests.extend(load_digests(&digest_path)?);
    } else if digests.is_empty() {
        digests.extend(DEFAULT_DIGESTS.iter().map(|d| d.to_string()));
    }

    let words = load_word_list(&dictionary_path)?;
    let target = Histogram::from_text(&phrase);
    let mut candidates = prepare(&words, &target);

    if (minletters, maxletters) != (0, std::usize::MAX) {
        candidates.restrict_letters(minletters, maxletters);
    }

    let verifier = MatchVerifier::new(&digests, |found: &str| println!("{}", found))?.stop_after(enough);
    let mut searcher = AnagramSearcher::from_candidates(candidates, target, verifier);
    let outcome = searcher.search(maxwords);

    info!("{:?} after {} matches", outcome, searcher.sink().found());
    Ok(())
}
