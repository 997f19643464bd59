use std::io::Write as _;

use mnr_parser::*;
use mnr_util::{AsDiagnostic as _, DiagnosticSource, span};

fn strip_colors(s: &str) -> String {
    let mut buf = Vec::new();
    let mut stream = anstream::StripStream::new(&mut buf);
    stream.write_all(s.as_bytes()).unwrap();
    String::from_utf8(buf).unwrap()
}

fn render(raw: &str) -> String {
    let Err(err) = rewrite(raw) else {
        panic!("expected error, got Ok")
    };
    let rendered = err
        .into_diagnostic_error(DiagnosticSource::new("INPUT", raw))
        .to_string();
    strip_colors(&rendered).replace('\r', "")
}

#[test]
fn unclosed_list() {
    let err = rewrite("ABC123(A,BC").unwrap_err();
    assert_eq!(
        err,
        Error::MalformedPattern {
            remaining: "(A,BC".to_owned(),
            span: span(6..11),
        }
    );

    let rendered = render("ABC123(A,BC");
    assert!(rendered.contains("error[E0002]: malformed model number"), "{rendered}");
    assert!(rendered.contains("INPUT"), "{rendered}");
    assert!(rendered.contains("ABC123(A,BC"), "{rendered}");
    assert!(rendered.contains("no rule matches from here"), "{rendered}");
}

#[test]
fn span_skips_options() {
    // The span ends where the equipment options start.
    let err = rewrite("AB%CD+TDR").unwrap_err();
    assert_eq!(
        err,
        Error::MalformedPattern {
            remaining: "%CD".to_owned(),
            span: span(2..5),
        }
    );
}

#[test]
fn span_maps_through_grouping() {
    // `12/34` is grouped into `(12,34)` before the rules run.
    let err = rewrite("X12/34!").unwrap_err();
    assert_eq!(
        err,
        Error::MalformedPattern {
            remaining: "!".to_owned(),
            span: span(6..7),
        }
    );
}

#[test]
fn empty_input() {
    assert_eq!(rewrite(""), Err(Error::InvalidInput));
    let rendered = render("");
    assert!(rendered.contains("error[E0001]: no model number specified"), "{rendered}");
}
