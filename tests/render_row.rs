use pdf_rows::layout::Row;
use pdf_rows::{Document, Orientation, PageContents, PageSize, RectLayout, Unit};
use pretty_assertions::assert_eq;

fn point_doc() -> Document {
    Document::new(Orientation::Portrait, Unit::Pt, PageSize::A4, ".")
}

fn rects(doc: &Document) -> Vec<RectLayout> {
    doc.pages[doc.page_order[0]]
        .contents
        .iter()
        .filter_map(|c| match c {
            PageContents::Rect(r) => Some(r.clone()),
            _ => None,
        })
        .collect()
}

fn span_texts(doc: &Document) -> Vec<String> {
    doc.pages[doc.page_order[0]]
        .contents
        .iter()
        .filter_map(|c| match c {
            PageContents::Text(s) => Some(s.text.clone()),
            _ => None,
        })
        .collect()
}

fn two_column_row() -> Row {
    let mut row = Row::new(50.0, 5.0);
    row.cell_margin = 2.0;
    row.draw_border = true;
    row.background = [255, 255, 255].into();
    row.title.font_size = 12.0;
    row.subtitle.font_size = 10.0;
    row.text.font_size = 10.0;
    row
}

#[test]
fn two_columns_share_one_band() {
    let mut doc = point_doc();
    doc.add_page();

    two_column_row()
        .render(
            &mut doc,
            0.0,
            0.0,
            &["A", "B"],
            &["x", "y"],
            &["hello world", "short"],
        )
        .unwrap();

    // one rectangle per column, at x = 0 and x = 50, with equal heights
    let rects = rects(&doc);
    assert_eq!(rects.len(), 2);
    assert_eq!(rects[0].rect.x1.0, 0.0);
    assert_eq!(rects[1].rect.x1.0, 50.0);
    assert_eq!(rects[0].rect.height(), rects[1].rect.height());

    // "hello world" does not fit the 46pt interior at 10pt Helvetica, so
    // the first column's text block wraps to two lines. Row content height
    // is the tallest stacked column: 5 + 5 + 10 = 20, and the band adds two
    // line spacings plus both cell margins on top.
    assert!((rects[0].rect.height().0 - 34.0).abs() < 1e-3);

    let texts = span_texts(&doc);
    assert_eq!(
        texts,
        vec!["A", "x", "hello", "world", "B", "y", "short"]
    );
}

#[test]
fn cursor_lands_below_the_band() {
    let mut doc = point_doc();
    doc.add_page();

    two_column_row()
        .render(
            &mut doc,
            0.0,
            0.0,
            &["A", "B"],
            &["x", "y"],
            &["hello world", "short"],
        )
        .unwrap();

    // content height 20 plus both cell margins, then the trailing break of
    // one line spacing; x returns to the left margin
    let (x, y) = doc.cursor();
    assert!((y - 29.0).abs() < 1e-3);
    assert_eq!(x, doc.margins().left);
}

#[test]
fn empty_strings_still_occupy_three_lines() {
    let mut doc = point_doc();
    doc.add_page();

    let mut row = Row::new(50.0, 5.0);
    row.cell_margin = 2.0;
    row.render(&mut doc, 0.0, 0.0, &[""], &[""], &[""]).unwrap();

    // every block wraps to a single empty line, so the content height is
    // three line spacings; empty lines place no spans
    let rects = rects(&doc);
    assert_eq!(rects.len(), 1);
    assert!((rects[0].rect.height().0 - (2.0 * 5.0 + 15.0 + 4.0)).abs() < 1e-3);
    assert_eq!(span_texts(&doc).len(), 0);
}

#[test]
fn span_count_matches_wrapped_line_counts() {
    let mut doc = point_doc();
    doc.add_page();

    let mut row = Row::new(80.0, 6.0);
    row.cell_margin = 3.0;
    row.text.font_size = 11.0;
    row.render(
        &mut doc,
        10.0,
        40.0,
        &["First", "Second", "Third"],
        &["one", "two", "three"],
        &[
            "a reasonably long body that will wrap across lines",
            "short",
            "another body of text that needs wrapping too",
        ],
    )
    .unwrap();

    let mut expected = 0usize;
    doc.set_font_size(row.title.font_size);
    for t in ["First", "Second", "Third"] {
        expected += doc.split_lines(t, 74.0).len();
    }
    doc.set_font_size(row.subtitle.font_size);
    for s in ["one", "two", "three"] {
        expected += doc.split_lines(s, 74.0).len();
    }
    doc.set_font_size(row.text.font_size);
    for t in [
        "a reasonably long body that will wrap across lines",
        "short",
        "another body of text that needs wrapping too",
    ] {
        expected += doc.split_lines(t, 74.0).len();
    }

    assert_eq!(span_texts(&doc).len(), expected);
    assert_eq!(rects(&doc).len(), 3);
}

#[test]
fn rendering_is_deterministic() {
    let render = || {
        let mut doc = point_doc();
        doc.add_page();
        two_column_row()
            .render(
                &mut doc,
                5.0,
                12.0,
                &["Title A", "Title B"],
                &["sub a", "sub b"],
                &["lorem ipsum dolor sit amet", "consectetur"],
            )
            .unwrap();
        doc
    };

    let first = render();
    let second = render();
    assert_eq!(
        first.pages[first.page_order[0]].contents,
        second.pages[second.page_order[0]].contents
    );
}

#[test]
fn font_state_is_left_at_the_text_block() {
    let mut doc = point_doc();
    doc.add_page();

    let mut row = two_column_row();
    row.title.font_size = 14.0;
    row.text.font_size = 9.0;
    row.text.font_style = "I".parse().unwrap();
    row.render(&mut doc, 0.0, 0.0, &["A"], &["x"], &["body"])
        .unwrap();

    assert_eq!(doc.font_size(), 9.0);
    assert!(doc.font_style().italic);
}

#[test]
fn written_row_survives_serialization() {
    let mut doc = point_doc();
    doc.add_page();
    two_column_row()
        .render(
            &mut doc,
            0.0,
            0.0,
            &["A", "B"],
            &["x", "y"],
            &["hello world", "short"],
        )
        .unwrap();

    let mut bytes: Vec<u8> = Vec::new();
    doc.write(&mut bytes).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(String::from_utf8_lossy(&bytes).contains("%%EOF"));
}
