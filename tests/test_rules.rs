use mnr_matcher::{Error, FragmentKind, MinSize, compile};

fn pattern(raw: &str) -> String {
    compile(raw).unwrap().pattern().to_owned()
}

#[test]
fn digit_pair_is_grouped() {
    assert_eq!(pattern("ABC123/345DEF"), "ABC(123|345)DEF");
    assert_eq!(pattern("CH33-50/60C+TDR"), "CH33-?(50|60)C");
    assert_eq!(pattern("L83UF1V57/72E12"), "L83UF1V(57|72)E12");
}

#[test]
fn list_notations_are_equivalent() {
    assert_eq!(pattern("(1,2,3)"), "(1|2|3)");
    assert_eq!(pattern("AB,CD,EF"), "(AB|CD|EF)");
    assert_eq!(pattern("AB/CD/EF"), "(AB|CD|EF)");
    assert_eq!(pattern("(AB,CD,EF)123*"), r"(AB|CD|EF)123\w+");
    assert_eq!(pattern("AB/CD/EF123***"), r"(AB|CD|EF)123\w\w\w");
}

#[test]
fn literal_run_stops_at_structure() {
    let compiled = compile("123(A,B)").unwrap();
    assert_eq!(compiled.fragments()[0].pattern(), "123");
    let compiled = compile("123***").unwrap();
    assert_eq!(compiled.fragments()[0].pattern(), "123");
}

#[test]
fn asterisks() {
    assert_eq!(pattern("*123"), r"\w123");
    assert_eq!(pattern("123*"), r"123\w+");
    assert_eq!(pattern("123**"), r"123\w\w");
}

#[test]
fn hyphens() {
    assert_eq!(pattern("---123"), "-?-?-?123");
}

#[test]
fn bounded_wildcard() {
    let compiled = compile("(*)").unwrap();
    assert_eq!(compiled.pattern(), r"(\w{1,5})");
    assert_eq!(compiled.fragments()[0].kind(), &FragmentKind::BoundedWildcard);
    assert!(compiled.matches_exactly("A"));
    assert!(compiled.matches_exactly("ABCDE"));
    assert!(!compiled.matches_exactly("ABCDEF"));
    assert!(!compiled.matches_exactly(""));
}

#[test]
fn last_bare_option_takes_first_option_length() {
    assert_eq!(pattern("A,BC,DE"), "(A|BC|D)E");
    assert_eq!(pattern("CF/CM/CU24A+TXV"), "(CF|CM|CU)24A");
    // Two short options are taken verbatim.
    assert_eq!(pattern("9,10"), "(9|10)");
}

#[test]
fn fragments_and_min_sizes() {
    let compiled = compile("*U1(CD,DK,TT)**--16").unwrap();
    assert_eq!(compiled.len(), 6);
    let min_sizes = compiled
        .fragments()
        .iter()
        .map(|fragment| fragment.min_size())
        .collect::<Vec<_>>();
    assert_eq!(
        min_sizes,
        [
            MinSize::Bounded(1),
            MinSize::Bounded(2),
            MinSize::Bounded(2),
            MinSize::Bounded(2),
            MinSize::Unbounded,
            MinSize::Bounded(2),
        ]
    );
    assert_eq!(compiled.to_string(), r"*U1(CD,DK,TT)**--16 -> \wU1(CD|DK|TT)\w\w-?-?16");
}

#[test]
fn equipment_options_are_ignored() {
    assert_eq!(pattern("CR33-30/36A+TDR+TXV"), "CR33-?(30|36)A");
    let compiled = compile("+TDR").unwrap();
    assert!(compiled.is_empty());
    assert_eq!(compiled.pattern(), "");
    assert_eq!(compiled.raw(), "+TDR");
}

#[test]
fn malformed() {
    let err = compile("ABC123(A,BC").unwrap_err();
    assert!(matches!(
        err,
        Error::Parse(mnr_parser::Error::MalformedPattern { ref remaining, .. }) if remaining == "(A,BC"
    ));
    assert!(compile("AB%").is_err());
    assert!(compile("(A,B").is_err());
}

#[test]
fn empty() {
    assert!(matches!(
        compile(""),
        Err(Error::Parse(mnr_parser::Error::InvalidInput))
    ));
}

#[test]
fn recompile_replaces_fragments() {
    let mut compiled = compile("AB*").unwrap();
    compiled.recompile("(1,2,3)").unwrap();
    assert_eq!(compiled.raw(), "(1,2,3)");
    assert_eq!(compiled.pattern(), "(1|2|3)");

    assert!(compiled.recompile("(1,2").is_err());
    assert_eq!(compiled.pattern(), "(1|2|3)");
}
