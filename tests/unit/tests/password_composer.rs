use anyhow::Result;
use wordy_password::{
    secrecy::ExposeSecret, Category, CompositionLimits, CompositionRequest,
    Error, PasswordComposer, SymbolAlphabet, WordCatalog,
};
use wordy_unit_tests::{
    categorize, collapse_words, seeded, split_words, trees, TREES,
};

const SAMPLES: u64 = 500;

#[test]
fn composer_trees_example() -> Result<()> {
    let catalog = trees()?;
    let composer = PasswordComposer::new(&catalog, SymbolAlphabet::Reduced);
    let request = CompositionRequest {
        min_words: 2,
        min_digits: 1,
        min_symbols: 1,
        capitalize: true,
        min_length: 8,
    };

    for seed in 0..SAMPLES {
        let result = composer.compose(&mut seeded(seed), &request)?;
        let password = result.expose_secret();

        assert!(result.words() >= 2);
        assert!(result.digits() >= 1);
        assert!(result.symbols() >= 1);
        assert!(password.chars().count() >= 8);

        for word in split_words(password, 3) {
            assert!(word.starts_with(|c: char| c.is_ascii_uppercase()));
            assert!(TREES.contains(&word.to_lowercase().as_str()), "{word}");
        }
        assert_eq!(result.words(), split_words(password, 3).len());
    }
    Ok(())
}

#[test]
fn composer_minimums() -> Result<()> {
    let catalog = trees()?;
    let composer = PasswordComposer::new(&catalog, SymbolAlphabet::Standard);
    let requests = [
        (0, 0, 1, 0),
        (1, 0, 0, 3),
        (3, 2, 2, 0),
        (1, 5, 0, 6),
        (0, 3, 3, 9),
        (4, 1, 1, 14),
    ];

    for (seed, (words, digits, symbols, length)) in
        requests.into_iter().enumerate()
    {
        let request = CompositionRequest {
            min_words: words,
            min_digits: digits,
            min_symbols: symbols,
            capitalize: false,
            min_length: length,
        };
        let mut rng = seeded(seed as u64);
        for _ in 0..100 {
            let result = composer.compose(&mut rng, &request)?;
            assert!(result.words() >= words);
            assert!(result.digits() >= digits);
            assert!(result.symbols() >= symbols);
            assert!(result.len() >= length);
        }
    }
    Ok(())
}

#[test]
fn composer_adjacency_from_characters() -> Result<()> {
    let catalog = trees()?;
    for alphabet in [SymbolAlphabet::Standard, SymbolAlphabet::Reduced] {
        let composer = PasswordComposer::new(&catalog, alphabet);
        let request = CompositionRequest {
            min_words: 2,
            min_digits: 3,
            min_symbols: 3,
            capitalize: true,
            min_length: 0,
        };
        let mut rng = seeded(17);
        for _ in 0..SAMPLES {
            let result = composer.compose(&mut rng, &request)?;
            let units = categorize(result.expose_secret(), alphabet);
            assert_eq!(collapse_words(result.placements()), units);
            for pair in units.windows(2) {
                assert_ne!(pair[0], pair[1]);
            }
        }
    }
    Ok(())
}

#[test]
fn composer_words_may_repeat() -> Result<()> {
    let catalog = trees()?;
    let composer = PasswordComposer::new(&catalog, SymbolAlphabet::Reduced);
    let request = CompositionRequest::default();
    let mut rng = seeded(21);
    let repeated = (0..SAMPLES)
        .map(|_| composer.compose(&mut rng, &request))
        .collect::<wordy_password::Result<Vec<_>>>()?
        .iter()
        .any(|result| {
            result
                .placements()
                .windows(2)
                .any(|pair| pair == [Category::Word, Category::Word])
        });
    assert!(repeated);
    Ok(())
}

#[test]
fn composer_varies_order() -> Result<()> {
    let catalog = trees()?;
    let composer = PasswordComposer::new(&catalog, SymbolAlphabet::Reduced);
    let request = CompositionRequest::default();
    let mut rng = seeded(4);
    let mut shapes = std::collections::HashSet::new();
    for _ in 0..SAMPLES {
        let result = composer.compose(&mut rng, &request)?;
        shapes.insert(result.placements().to_vec());
    }
    assert!(shapes.len() > 3);
    Ok(())
}

#[test]
fn composer_without_capitalization() -> Result<()> {
    let catalog = WordCatalog::build(["Ash", "elm", "oak"], 3, 3)?;
    let composer = PasswordComposer::new(&catalog, SymbolAlphabet::Reduced);
    let request = CompositionRequest {
        capitalize: false,
        ..Default::default()
    };
    let mut rng = seeded(2);
    for _ in 0..SAMPLES {
        let result = composer.compose(&mut rng, &request)?;
        for word in split_words(result.expose_secret(), 3) {
            assert!(catalog.contains(&word), "{word}");
        }
    }
    Ok(())
}

#[test]
fn composer_seeded_reproducible() -> Result<()> {
    let first = trees()?;
    let second = WordCatalog::build(TREES.iter().rev(), 3, 3)?;
    let request = CompositionRequest::default();

    let a = PasswordComposer::new(&first, SymbolAlphabet::Standard)
        .compose_many(&mut seeded(31), &request, 10)?;
    let b = PasswordComposer::new(&second, SymbolAlphabet::Standard)
        .compose_many(&mut seeded(31), &request, 10)?;

    assert_eq!(10, a.len());
    for (a, b) in a.iter().zip(b.iter()) {
        assert_eq!(a.expose_secret(), b.expose_secret());
    }
    Ok(())
}

#[test]
fn composer_unsatisfiable_length() -> Result<()> {
    let catalog = trees()?;
    let composer = PasswordComposer::new(&catalog, SymbolAlphabet::Reduced)
        .with_limits(CompositionLimits::new(50, 1_000)?);
    let request = CompositionRequest {
        min_words: 1,
        min_digits: 0,
        min_symbols: 0,
        capitalize: false,
        min_length: 10,
    };
    let result = composer.compose(&mut seeded(0), &request);
    assert!(matches!(
        result,
        Err(Error::CompositionTimeout { attempts: 50 })
    ));
    Ok(())
}

#[test]
fn composer_long_minimum_length() -> Result<()> {
    let catalog = trees()?;
    let composer = PasswordComposer::new(&catalog, SymbolAlphabet::Reduced);
    let request = CompositionRequest {
        min_words: 6,
        min_digits: 2,
        min_symbols: 2,
        capitalize: true,
        min_length: 24,
    };
    let mut rng = seeded(5);
    for _ in 0..50 {
        let result = composer.compose(&mut rng, &request)?;
        assert!(result.len() >= 24);
    }
    Ok(())
}

#[test]
fn composer_huge_word_minimum() -> Result<()> {
    let catalog = trees()?;
    let composer = PasswordComposer::new(&catalog, SymbolAlphabet::Reduced);
    let request = CompositionRequest {
        min_words: usize::MAX,
        ..Default::default()
    };
    let result = composer.compose(&mut seeded(0), &request);
    assert!(matches!(
        result,
        Err(Error::PlacementLimit {
            limit: CompositionLimits::MAX_PLACEMENTS
        })
    ));
    Ok(())
}

#[test]
fn composer_huge_word_and_digit_minimums() -> Result<()> {
    let catalog = trees()?;
    let composer = PasswordComposer::new(&catalog, SymbolAlphabet::Standard);
    let request = CompositionRequest {
        min_words: usize::MAX / 2,
        min_digits: usize::MAX / 2,
        ..Default::default()
    };
    let result = composer.compose(&mut seeded(0), &request);
    assert!(matches!(result, Err(Error::PlacementLimit { .. })));
    Ok(())
}

#[test]
fn composer_huge_minimums_every_category() -> Result<()> {
    let catalog = trees()?;
    let composer = PasswordComposer::new(&catalog, SymbolAlphabet::Reduced)
        .with_limits(CompositionLimits::new(10, 500)?);
    let request = CompositionRequest {
        min_words: usize::MAX,
        min_digits: usize::MAX,
        min_symbols: usize::MAX,
        capitalize: true,
        min_length: usize::MAX,
    };
    let result = composer.compose(&mut seeded(1), &request);
    assert!(matches!(result, Err(Error::PlacementLimit { limit: 500 })));
    Ok(())
}

#[test]
fn composer_long_attempts_exhaust_budget() -> Result<()> {
    let catalog = trees()?;
    let limits = CompositionLimits::new(10_000, 1_000)?
        .with_max_total_placements(5_000)?;
    let composer = PasswordComposer::new(&catalog, SymbolAlphabet::Reduced)
        .with_limits(limits);
    let request = CompositionRequest {
        min_words: 900,
        min_digits: 0,
        min_symbols: 0,
        capitalize: false,
        min_length: 1_000_000,
    };
    let result = composer.compose(&mut seeded(2), &request);
    assert!(matches!(result, Err(Error::CompositionTimeout { .. })));
    Ok(())
}
