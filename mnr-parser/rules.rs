//! The six rewrite rules, in priority order.
//!
//! Every rule looks at the front of the remaining notation only. When it
//! applies, it returns the fragment it produced and the remaining notation
//! after it; when it doesn't, it returns `None` and consumes nothing.

use winnow::{
    Parser as _,
    combinator::{delimited, eof, opt, repeat, separated, terminated},
    token::take_while,
    ModalResult,
};

use crate::{Fragment, FragmentKind, MinSize, is_word_char};

/// Signature shared by all rules.
pub type RuleFn = for<'a> fn(&'a str) -> Option<(Fragment, &'a str)>;

#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub apply: RuleFn,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// All rules. Earlier rules win.
pub static RULES: [Rule; 6] = [
    Rule {
        name: "bare list",
        apply: bare_list,
    },
    Rule {
        name: "literal run",
        apply: literal_run,
    },
    Rule {
        name: "parenthesized list",
        apply: paren_list,
    },
    Rule {
        name: "asterisks",
        apply: asterisks,
    },
    Rule {
        name: "hyphens",
        apply: hyphens,
    },
    Rule {
        name: "bounded wildcard",
        apply: bounded_wildcard,
    },
];

/// Apply the first rule that matches the front of `cursor`.
#[must_use]
pub fn apply_first(cursor: &str) -> Option<(&'static Rule, Fragment, &str)> {
    RULES.iter().find_map(|rule| {
        let (fragment, rest) = (rule.apply)(cursor)?;
        Some((rule, fragment, rest))
    })
}

/// `AB,CD,EF` becomes `(AB|CD|EF)`.
///
/// Nothing marks where the last option ends, so it is assumed to be as long
/// as the first option: `AB,CD,EF123` is `(AB|CD|EF)` followed by `123`, but
/// `A,BC,D1` is `(A|BC|D)` followed by `1`. The only exception is a cursor
/// consisting of exactly two options of one or two characters, such as
/// `9,10`, where the last option is the rest of the cursor.
pub fn bare_list(cursor: &str) -> Option<(Fragment, &str)> {
    let mut input = cursor;
    let head = list_head.parse_next(&mut input).ok()?;

    let mut options = head
        .split_terminator(',')
        .map(ToOwned::to_owned)
        .collect::<Vec<_>>();
    let (last, rest) = if is_option_pair(cursor) {
        (input, "")
    } else {
        split_chars(input, options[0].chars().count())
    };
    options.push(last.to_owned());

    let min_size = options
        .iter()
        .map(|option| option.chars().count())
        .min()
        .unwrap_or_default();
    Some((
        Fragment::new(FragmentKind::OneOf(options), MinSize::Bounded(min_size)),
        rest,
    ))
}

/// `ABC123` stays `ABC123`.
pub fn literal_run(cursor: &str) -> Option<(Fragment, &str)> {
    let mut input = cursor;
    let literal = word1.parse_next(&mut input).ok()?;
    let len = literal.chars().count();
    Some((
        Fragment::new(FragmentKind::Literal(literal.to_owned()), MinSize::Bounded(len)),
        input,
    ))
}

/// `(AB,CD,EF)` becomes `(AB|CD|EF)`.
pub fn paren_list(cursor: &str) -> Option<(Fragment, &str)> {
    let mut input = cursor;
    let (options, trailing_comma) = paren_options.parse_next(&mut input).ok()?;

    let min_size = options[0].chars().count();
    let mut options = options
        .into_iter()
        .map(ToOwned::to_owned)
        .collect::<Vec<_>>();
    if trailing_comma {
        options.push(String::new());
    }
    Some((
        Fragment::new(FragmentKind::OneOf(options), MinSize::Bounded(min_size)),
        input,
    ))
}

/// `**` becomes `\w\w`, but a lone `*` at the very end becomes `\w+`.
pub fn asterisks(cursor: &str) -> Option<(Fragment, &str)> {
    let mut input = cursor;
    let count = run_of('*').parse_next(&mut input).ok()?.len();
    let fragment = if cursor == "*" {
        Fragment::new(FragmentKind::OneOrMore, MinSize::Bounded(1))
    } else {
        Fragment::new(FragmentKind::AnyChars(count), MinSize::Bounded(count))
    };
    Some((fragment, input))
}

/// `--` becomes `-?-?`.
pub fn hyphens(cursor: &str) -> Option<(Fragment, &str)> {
    let mut input = cursor;
    let count = run_of('-').parse_next(&mut input).ok()?.len();
    Some((
        Fragment::new(FragmentKind::OptionalHyphens(count), MinSize::Unbounded),
        input,
    ))
}

/// `(*)` becomes `(\w{1,5})`.
pub fn bounded_wildcard(cursor: &str) -> Option<(Fragment, &str)> {
    let rest = cursor.strip_prefix("(*)")?;
    Some((
        Fragment::new(FragmentKind::BoundedWildcard, MinSize::Unbounded),
        rest,
    ))
}

fn word1<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    take_while(1.., is_word_char).parse_next(input)
}

fn run_of<'a>(ch: char) -> impl FnMut(&mut &'a str) -> ModalResult<&'a str> {
    move |input: &mut &'a str| take_while(1.., ch).parse_next(input)
}

/// `(?:\w{1,3},)+`
fn list_head<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    repeat::<_, _, (), _, _>(1.., terminated(take_while(1..=3, is_word_char), ','))
        .take()
        .parse_next(input)
}

/// `\w{1,2},\w{1,2}` spanning the whole input.
fn is_option_pair(input: &str) -> bool {
    let mut input = input;
    let pair: ModalResult<_> = (
        take_while(1..=2, is_word_char),
        ',',
        take_while(1..=2, is_word_char),
        eof,
    )
        .parse_next(&mut input);
    pair.is_ok()
}

/// `\((?:\w{1,3},?)+\)`, which amounts to comma-separated word runs with an
/// optional trailing comma.
fn paren_options<'a>(input: &mut &'a str) -> ModalResult<(Vec<&'a str>, bool)> {
    delimited(
        '(',
        (
            separated(1.., word1, ','),
            opt(',').map(|comma| comma.is_some()),
        ),
        ')',
    )
    .parse_next(input)
}

/// Split after `n` characters, or at the end if `s` is shorter.
fn split_chars(s: &str, n: usize) -> (&str, &str) {
    let at = s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    s.split_at(at)
}
