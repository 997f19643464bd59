use std::sync::atomic::{AtomicBool, Ordering};

use mnr_matcher::{CompiledPattern, PatternSet, SharedPattern, compile};

#[test]
fn matches_from_many_threads() {
    let pattern = compile("58PH*090-(A,C,E)--0**14").unwrap();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..1000 {
                    assert!(pattern.matches("58PHX090C--0XX14"));
                    assert!(!pattern.matches("58PHX090C--0XX17"));
                }
            });
        }
    });
}

#[test]
fn recompile_is_atomic() {
    let shared = SharedPattern::compile("(A,B)1").unwrap();
    let done = AtomicBool::new(false);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                while !done.load(Ordering::Relaxed) {
                    let snapshot = shared.snapshot();
                    // Either the old or the new fragments, never a mix.
                    match snapshot.raw() {
                        "(A,B)1" => {
                            assert!(snapshot.matches("A1"));
                            assert!(!snapshot.matches("C2"));
                        }
                        "(C,D)2" => {
                            assert!(snapshot.matches("C2"));
                            assert!(!snapshot.matches("A1"));
                        }
                        other => panic!("unexpected pattern {other}"),
                    }
                }
            });
        }

        for i in 0..200 {
            let raw = if i % 2 == 0 { "(C,D)2" } else { "(A,B)1" };
            shared.recompile(raw).unwrap();
        }
        done.store(true, Ordering::Relaxed);
    });

    assert_eq!(shared.snapshot().raw(), "(A,B)1");
}

#[test]
fn failed_recompile_keeps_pattern() {
    let shared = SharedPattern::compile("AB*").unwrap();
    let clone = shared.clone();
    assert!(shared.recompile("AB(").is_err());
    assert_eq!(clone.snapshot().raw(), "AB*");

    let previous = shared.recompile("CD*").unwrap();
    assert_eq!(previous.raw(), "AB*");
    assert!(clone.matches("CDE"));
    assert_eq!(clone.to_string(), r"CD* -> CD\w+");
}

fn matching<'a>(set: &'a PatternSet, candidate: &'a str) -> Vec<&'a str> {
    set.matching(candidate).map(CompiledPattern::raw).collect()
}

#[test]
fn pattern_set_matching() {
    let mut set = PatternSet::new();
    for raw in [
        "FC/MC/PC32A+TXV",
        "CF/CM/CU24A+TXV",
        "C(A,C,D,E)36B34+TDR",
        "CH33-50/60C+TDR",
    ] {
        set.insert(raw).unwrap();
    }
    // Inserting again is a no-op.
    set.insert("CF/CM/CU24A+TXV").unwrap();
    assert_eq!(set.len(), 4);

    assert_eq!(matching(&set, "C"), ["CF/CM/CU24A+TXV", "C(A,C,D,E)36B34+TDR", "CH33-50/60C+TDR"]);
    assert_eq!(matching(&set, "CE36"), ["C(A,C,D,E)36B34+TDR"]);
    assert_eq!(matching(&set, "PC3"), ["FC/MC/PC32A+TXV"]);
    assert!(matching(&set, "Z").is_empty());

    assert!(set.insert("AB(").is_err());
    assert_eq!(set.len(), 4);
    assert!(set.remove("CH33-50/60C+TDR").is_some());
    assert_eq!(matching(&set, "CH"), Vec::<&str>::new());
}
