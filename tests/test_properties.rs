mod support;

use cfg_strings::Grammar;

#[test]
fn simplify_is_idempotent() {
    let mut once = support::palindrome_grammar();
    once.simplify();
    let after_one = once.rule_count();

    let mut twice = support::palindrome_grammar();
    twice.simplify();
    twice.simplify();
    assert_eq!(twice.rule_count(), after_one);
}

#[test]
fn chomsky_is_idempotent_on_an_already_simplified_grammar() {
    let mut once = support::palindrome_grammar();
    once.simplify();
    once.chomsky();
    let after_one = once.rule_count();

    once.chomsky();
    assert_eq!(once.rule_count(), after_one);
}

#[test]
fn membership_is_preserved_across_the_whole_pipeline() {
    let raw = support::palindrome_grammar();

    let mut simplified = support::palindrome_grammar();
    simplified.simplify();

    let mut cnf = support::palindrome_grammar();
    cnf.simplify();
    cnf.chomsky();

    for s in support::strings_of_length(&['a', 'b', 'c'], 4) {
        let expected = raw.cyk(&s);
        assert_eq!(simplified.cyk(&s), expected, "simplify changed membership for {s:?}");
        assert_eq!(cnf.cyk(&s), expected, "chomsky changed membership for {s:?}");
    }
}

#[test]
fn file_format_round_trip_preserves_the_language() {
    let g = support::palindrome_grammar();
    let text = g.to_file_format();
    let reloaded = Grammar::from_file_format(&text).unwrap();

    for s in support::strings_of_length(&['a', 'b', 'c'], 4) {
        assert_eq!(reloaded.cyk(&s), g.cyk(&s));
    }
    assert_eq!(reloaded.cyk(""), g.cyk(""));
}
