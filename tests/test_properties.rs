use mnr_matcher::{FragmentKind, compile};
use rand::{SeedableRng as _, rngs::StdRng};
use tests::{fixed_width_notation, random_notation, sample_candidate};

#[test]
fn prefixes_of_full_matches_are_accepted() {
    let mut rng = StdRng::seed_from_u64(0x6d6e_7201);
    let mut checked = 0;

    for _ in 0..2000 {
        let raw = random_notation(&mut rng);
        let Ok(pattern) = compile(&raw) else {
            continue;
        };

        for _ in 0..5 {
            let candidate = sample_candidate(&pattern, &mut rng);
            if candidate.is_empty() {
                continue;
            }
            assert!(
                pattern.matches_exactly(&candidate),
                "{pattern} should fully match {candidate}"
            );
            for end in 1..=candidate.len() {
                let prefix = &candidate[..end];
                assert!(
                    pattern.matches(prefix),
                    "{pattern} accepts {candidate} but not its prefix {prefix}"
                );
            }
            checked += 1;
        }
    }

    assert!(checked > 1000, "only {checked} candidates were checked");
}

#[test]
fn foreign_character_is_rejected() {
    let mut rng = StdRng::seed_from_u64(0x6d6e_7202);

    for _ in 0..500 {
        let raw = fixed_width_notation(&mut rng);
        let pattern = compile(&raw).unwrap();
        assert!(
            pattern.fragments().iter().all(|fragment| matches!(
                fragment.kind(),
                FragmentKind::Literal(_) | FragmentKind::OneOf(_) | FragmentKind::AnyChars(_)
            )),
            "{pattern}"
        );

        let candidate = sample_candidate(&pattern, &mut rng);
        assert!(pattern.matches(&candidate), "{pattern} should accept {candidate}");

        for i in 0..candidate.len() {
            let mut altered = candidate.clone().into_bytes();
            altered[i] = b'#';
            let altered = String::from_utf8(altered).unwrap();
            assert!(
                !pattern.matches(&altered),
                "{pattern} should reject {altered}"
            );
        }
    }
}
