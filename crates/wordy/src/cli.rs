use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;
use url::Url;
use wordy_password::{
    csprng, CompositionLimits, CompositionRequest, PasswordComposer,
    SymbolAlphabet, WordCatalog,
};

use crate::{
    commands::{download, generate},
    helpers::{messages::warn, read_word_list},
    Result,
};

/// Default word list location.
pub const DEFAULT_WORDLIST_URL: &str =
    "https://github.com/dwyl/english-words/raw/master/words_alpha.txt";

/// Random wordly password generator.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Wordy {
    /// Number of passwords to generate.
    #[clap(
        default_value_t = 20,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub count: u64,

    /// Capitalize the first letter of every word (default).
    #[clap(short = 'c', long, overrides_with = "no_capitalize")]
    pub capitalize: bool,

    /// Only lower case letters.
    #[clap(short = 'A', long, overrides_with = "capitalize")]
    pub no_capitalize: bool,

    /// Smallest number of numerals.
    #[clap(short, long, default_value_t = 1, env = "WORDY_NUMERALS")]
    pub numerals: usize,

    /// Smallest number of symbols.
    #[clap(short, long, default_value_t = 1, env = "WORDY_SYMBOLS")]
    pub symbols: usize,

    /// Smallest number of words.
    #[clap(short, long, default_value_t = 2, env = "WORDY_WORDS")]
    pub words: usize,

    /// Shortest acceptable password length.
    #[clap(short, long, default_value_t = 8, env = "WORDY_LENGTH")]
    pub length: usize,

    /// Use the reduced symbol set: !-/#.,'+
    #[clap(short, long, env = "WORDY_REDUCED")]
    pub reduced: bool,

    /// Shortest word length.
    #[clap(long, default_value_t = 2, env = "WORDY_MIN_WORD_LEN")]
    pub min_word_len: usize,

    /// Longest word length.
    #[clap(long, default_value_t = 5, env = "WORDY_MAX_WORD_LEN")]
    pub max_word_len: usize,

    /// File containing whitespace separated words.
    #[clap(long, default_value = "words_alpha.txt", env = "WORDY_WORDLIST")]
    pub wordlist: PathBuf,

    /// Download the word list before generating.
    #[clap(long)]
    pub download: bool,

    /// Location of the word list to download.
    #[clap(long, default_value = DEFAULT_WORDLIST_URL)]
    pub download_url: Url,

    /// Seed for reproducible output.
    ///
    /// Passwords generated from a known seed can be
    /// generated again by anyone, only use for testing.
    #[clap(long, env = "WORDY_SEED", hide_env_values = true)]
    pub seed: Option<u64>,

    /// Maximum attempts to reach the minimum length.
    #[clap(
        long,
        hide = true,
        default_value_t = CompositionLimits::MAX_ATTEMPTS
    )]
    pub max_attempts: usize,

    /// Maximum placements in a single attempt.
    #[clap(
        long,
        hide = true,
        default_value_t = CompositionLimits::MAX_PLACEMENTS
    )]
    pub max_placements: usize,

    /// Maximum placements across all attempts for one password.
    #[clap(
        long,
        hide = true,
        default_value_t = CompositionLimits::MAX_TOTAL_PLACEMENTS
    )]
    pub max_total_placements: usize,

    /// Print debug logs.
    #[clap(short, long)]
    pub verbose: bool,
}

impl Wordy {
    /// Composition constraints for each password.
    pub fn request(&self) -> CompositionRequest {
        CompositionRequest {
            min_words: self.words,
            min_digits: self.numerals,
            min_symbols: self.symbols,
            capitalize: self.capitalize || !self.no_capitalize,
            min_length: self.length,
        }
    }

    /// Symbol alphabet selected by the flags.
    pub fn alphabet(&self) -> SymbolAlphabet {
        if self.reduced {
            SymbolAlphabet::Reduced
        } else {
            SymbolAlphabet::Standard
        }
    }
}

pub async fn run(args: Wordy) -> Result<()> {
    if args.min_word_len > args.max_word_len {
        return Err(wordy_password::Error::InvalidWordLength {
            min: args.min_word_len,
            max: args.max_word_len,
        }
        .into());
    }
    let limits =
        CompositionLimits::new(args.max_attempts, args.max_placements)?
            .with_max_total_placements(args.max_total_placements)?;

    if args.download {
        download::run(args.download_url.clone(), &args.wordlist).await?;
    }

    let text = read_word_list(&args.wordlist).await?;
    let catalog =
        WordCatalog::from_text(&text, args.min_word_len, args.max_word_len)?;
    tracing::debug!(
        wordlist = %args.wordlist.display(),
        words = catalog.len(),
        "catalog::loaded",
    );

    let composer =
        PasswordComposer::new(&catalog, args.alphabet()).with_limits(limits);
    let request = args.request();

    if let Some(seed) = args.seed {
        warn("seeded passwords are reproducible, do not use them");
        let mut rng = StdRng::seed_from_u64(seed);
        generate::run(&composer, &request, args.count, &mut rng)
    } else {
        let mut rng = csprng();
        generate::run(&composer, &request, args.count, &mut rng)
    }
}
