use hierdiff_text::{ConfigText, LineKind, classify_line, count_indent};

#[test]
fn parse_assigns_one_based_numbers_and_levels() {
    let text = ConfigText::parse("router bgp 65000\n  neighbor 10.0.0.1\n    shutdown\n");

    assert_eq!(text.len(), 3);
    assert_eq!(text.line(1).map(|l| (l.number, l.indent)), Some((1, 0)));
    assert_eq!(text.line(2).map(|l| (l.number, l.indent)), Some((2, 2)));
    assert_eq!(text.line(3).map(|l| (l.number, l.indent)), Some((3, 4)));
    assert!(text.line(0).is_none());
    assert!(text.line(4).is_none());
}

#[test]
fn classifies_bare_markers_but_not_comments() {
    assert_eq!(classify_line("!"), LineKind::Marker);
    assert_eq!(classify_line("#"), LineKind::Marker);
    assert_eq!(classify_line(" ! "), LineKind::Marker);
    assert_eq!(classify_line("! interface note"), LineKind::Content);
    assert_eq!(classify_line(""), LineKind::Blank);
    assert_eq!(classify_line("   "), LineKind::Blank);
    assert_eq!(classify_line("hostname edge-1"), LineKind::Content);
}

#[test]
fn marker_char_reports_delimiter() {
    let text = ConfigText::parse("!\n#\nhostname x\n");
    assert_eq!(text.line(1).and_then(|l| l.marker_char()), Some('!'));
    assert_eq!(text.line(2).and_then(|l| l.marker_char()), Some('#'));
    assert_eq!(text.line(3).and_then(|l| l.marker_char()), None);
}

#[test]
fn tabs_count_as_four_columns() {
    assert_eq!(count_indent("\tneighbor"), 4);
    assert_eq!(count_indent("  \tneighbor"), 6);
    assert_eq!(count_indent("no-indent"), 0);
}

#[test]
fn render_is_lossless_for_mixed_endings() {
    let input = "router bgp 65000\r\n  neighbor 10.0.0.1\n\ntrailer";
    let text = ConfigText::parse(input);
    assert_eq!(text.render(), input);
}

#[test]
fn empty_input_parses_to_empty_text() {
    let text = ConfigText::parse("");
    assert!(text.is_empty());
    assert_eq!(text.render(), "");
}
