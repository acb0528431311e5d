use cfg_strings::{Grammar, RulesInput};

/// Enables `RUST_LOG`-controlled diagnostic output from the transformation stages when
/// running tests with `--nocapture`; harmless, idempotent, and a no-op if already installed.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The even-length-palindrome grammar used across the end-to-end scenarios:
/// `S -> aSa | bSb | cSc | lambda`.
pub fn palindrome_grammar() -> Grammar {
    Grammar::construct(
        ["S"],
        ["a", "b", "c", "\u{3bb}"],
        RulesInput::Pairs(vec![
            ("S".into(), "aSa".into()),
            ("S".into(), "bSb".into()),
            ("S".into(), "cSc".into()),
            ("S".into(), "\u{3bb}".into()),
        ]),
        "S",
        "\u{3bb}",
    )
    .unwrap()
}

/// All strings of the given length over the alphabet `{a, b, c}`.
pub fn strings_of_length(alphabet: &[char], len: usize) -> Vec<String> {
    if len == 0 {
        return vec![String::new()];
    }
    let mut out = vec![String::new()];
    for _ in 0..len {
        out = out
            .into_iter()
            .flat_map(|prefix| {
                alphabet.iter().map(move |&c| {
                    let mut s = prefix.clone();
                    s.push(c);
                    s
                })
            })
            .collect();
    }
    out
}

/// Whether `s`, read over `{a, b, c}`, is an even-length palindrome.
pub fn is_palindrome(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    chars.iter().eq(chars.iter().rev())
}
