use ib_regex_builder::{AnchorMode, Error, PatternBuilder};

fn main() -> Result<(), Error> {
    let mut re = PatternBuilder::new();
    re.match_start()
        .digit()
        .exactly(4)
        .concat('-')
        .digit()
        .exactly(2)
        .concat('-')
        .digit()
        .exactly(2)
        .match_end();
    assert_eq!(re.regex(), r"^\d{4}-\d{2}-\d{2}$");
    println!("{re}");

    let mut re = PatternBuilder::new();
    re.word_boundary()
        .non_capturing_group({
            let mut schemes = PatternBuilder::new();
            schemes.or(["http", "https", "ftp"])?;
            schemes
        })
        .concat("://")
        .one_or_more(PatternBuilder::new().not_any_of(r"\s/"));
    assert_eq!(re.regex(), r"\b(?:http|https|ftp)://[^\s/]+");
    println!("{re}");

    // Continue building a pattern from elsewhere
    let mut re = PatternBuilder::parse(r"^[A-Z]\w*$")
        .anchors(AnchorMode::Strip)
        .call()?;
    re.zero_or_one(PatternBuilder::new().digit());
    assert_eq!(re.regex(), r"^[A-Z]\w*\d?$");
    println!("{re}");

    Ok(())
}
