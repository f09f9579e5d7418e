use log::{debug, info};

use phrase_anagrams::{find_anagrams, Dictionary, SearchOptions, Strategy};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use argparse::{ArgumentParser, Store};

    env_logger::init();

    let mut options = SearchOptions::default();
    let mut dictionary_path = String::from("words");
    let mut limit = usize::MAX;
    let mut phrase = String::new();

    {
        let mut ap = ArgumentParser::new();
        ap.set_description("Find multi-word anagrams of the given phrase");
        ap.refer(&mut phrase)
            .required()
            .add_argument("phrase", Store, "Phrase to generate anagrams of");
        ap.refer(&mut dictionary_path)
            .add_option(&["-f", "--dictionary"], Store, "The path of the word list, one word per line");
        ap.refer(&mut options.strategy)
            .add_option(&["-s", "--strategy"], Store, "Search strategy: trie or combination");
        ap.refer(&mut options.min_words)
            .add_option(&["-w", "--min-words"], Store, "The minimum number of words in the generated anagrams");
        ap.refer(&mut options.max_words)
            .add_option(&["-W", "--max-words"], Store, "The maximum number of words in the generated anagrams");
        ap.refer(&mut options.min_letters)
            .add_option(&["-l", "--min-letters"], Store, "The minimum number of letters per word in the generated anagrams");
        ap.refer(&mut options.max_letters)
            .add_option(&["-L", "--max-letters"], Store, "The maximum number of letters per word in the generated anagrams");
        ap.refer(&mut limit)
            .add_option(&["-n", "--limit"], Store, "Stop after printing this many anagrams");
        ap.parse_args_or_exit();
    }
    debug!("options: {:?}", options);

    let dictionary = Dictionary::from_path(&dictionary_path)?;
    if options.strategy == Strategy::Combination && dictionary.len() > 50_000 {
        info!("combination search over a large dictionary can be slow; try --strategy trie");
    }

    let mut printed = 0;
    for anagram in find_anagrams(&phrase, &dictionary, &options)?.take(limit) {
        println!("{}", anagram);
        printed += 1;
    }
    debug!("printed {} anagrams", printed);

    Ok(())
}
