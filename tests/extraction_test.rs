use block_extract::aggregate::{aggregate, filter, Window};
use block_extract::dom::parse;
use block_extract::validity::is_valid;
use block_extract::{extract, extract_document, extract_with_options, Options, NO_TITLE};

fn card(n: usize) -> String {
    format!(
        r#"<div class="card">Genuine long-form content block number {n} with enough length to pass.</div>"#
    )
}

fn page(title: Option<&str>, body: &str) -> String {
    let head = title.map(|t| format!("<title>{t}</title>")).unwrap_or_default();
    format!("<html><head>{head}</head><body>{body}</body></html>")
}

#[test]
fn three_cards_are_extracted_in_document_order() {
    let body: String = (1..=3).map(card).collect();
    let html = page(Some(" Laptop deals "), &body);

    let result = extract_with_options(&html, &Options::with_window(1, 5)).expect("expected Ok(_)");

    assert_eq!(result.title, "Laptop deals");
    assert_eq!(result.blocks.len(), 3);
    for (i, block) in result.blocks.iter().enumerate() {
        assert!(block.contains(&format!("number {}", i + 1)));
    }
}

#[test]
fn missing_title_uses_sentinel() {
    let body: String = (1..=3).map(card).collect();
    let result = extract_with_options(&page(None, &body), &Options::with_window(1, 5))
        .expect("expected Ok(_)");

    assert_eq!(result.title, NO_TITLE);
    assert_eq!(result.blocks.len(), 3);
}

#[test]
fn single_multi_class_element_is_discarded_as_noise() {
    let html = page(
        Some("T"),
        r#"<div class="x y">A single well-formed block of valid text.</div>"#,
    );
    let window = Window::new(1, 1);

    let records = filter(aggregate(&parse(&html), window), window);
    let x = records.get("x").expect("x recorded");
    let y = records.get("y").expect("y recorded");
    assert_eq!((x.count, x.snippets.len()), (1, 1));
    assert_eq!((y.count, y.snippets.len()), (1, 1));

    let result = extract_with_options(&html, &Options::with_window(1, 1)).expect("expected Ok(_)");
    assert!(result.blocks.is_empty());
}

#[test]
fn multi_class_elements_contribute_to_every_class() {
    let body = r#"
        <div class="item featured">First item: fast, light-weight and cheap.</div>
        <div class="item featured">Second item: slow, heavy-duty but sturdy.</div>
    "#;
    let result = extract_with_options(&page(None, body), &Options::with_window(1, 5))
        .expect("expected Ok(_)");

    // Both classes qualify, so each text appears once per class.
    assert_eq!(result.blocks.len(), 4);
    assert_eq!(result.blocks[0], result.blocks[2]);
}

#[test]
fn class_crossing_max_count_is_excluded_entirely() {
    let body: String = (1..=6).map(card).collect();
    let result = extract_with_options(&page(None, &body), &Options::with_window(1, 5))
        .expect("expected Ok(_)");

    assert!(result.blocks.is_empty());
}

#[test]
fn snippets_before_min_count_are_not_collected() {
    let body: String = (1..=4).map(card).collect();
    let result = extract_with_options(&page(None, &body), &Options::with_window(3, 10))
        .expect("expected Ok(_)");

    assert_eq!(result.blocks.len(), 2);
    assert!(result.blocks[0].contains("number 3"));
    assert!(result.blocks[1].contains("number 4"));
}

#[test]
fn blocks_follow_first_seen_class_order() {
    let body = r#"
        <div class="review">Great keyboard, though the track-pad is small.</div>
        <div class="product">Ultrabook: 13-inch, 1.1 kg, all-day battery.</div>
        <div class="review">Battery lasts ~10h; the screen is dim outdoors.</div>
        <div class="product">Workstation: 16-inch, 2.3 kg, dedicated GPU.</div>
    "#;
    let result = extract_with_options(&page(None, body), &Options::with_window(1, 5))
        .expect("expected Ok(_)");

    assert_eq!(result.blocks.len(), 4);
    assert!(result.blocks[0].starts_with("Great keyboard"));
    assert!(result.blocks[1].starts_with("Battery lasts"));
    assert!(result.blocks[2].starts_with("Ultrabook"));
    assert!(result.blocks[3].starts_with("Workstation"));
}

#[test]
fn blocks_keep_untrimmed_descendant_text() {
    let body = r#"
        <div class="post">
          <h2>Review</h2><p>Solid build, decent price-to-performance.</p>
        </div>
        <div class="post">
          <h2>Verdict</h2><p>Recommended, with a few caveats - see below.</p>
        </div>
    "#;
    let result = extract_with_options(&page(None, body), &Options::with_window(1, 5))
        .expect("expected Ok(_)");

    assert_eq!(result.blocks.len(), 2);
    assert!(result.blocks[0].starts_with('\n'));
    assert!(result.blocks[0].contains("ReviewSolid build, decent price-to-performance."));
}

#[test]
fn label_only_classes_contribute_nothing() {
    let body = r#"
        <div class="price">Rs. 49,990</div>
        <div class="price">Rs. 52,490</div>
        <div class="rating">4.3 stars out of 5</div>
        <div class="rating">4.1 stars out of 5</div>
        <div class="tags">Laptop Windows Intel Silver</div>
        <div class="tags">Laptop Windows AMD Black</div>
    "#;
    let result = extract_with_options(&page(None, body), &Options::with_window(1, 5))
        .expect("expected Ok(_)");

    assert!(result.blocks.is_empty());
}

#[test]
fn inline_scripts_do_not_make_labels_valid() {
    let body = r#"
        <div class="tags">Laptop Windows Intel Silver<script>track({id: 1});</script></div>
        <div class="tags">Laptop Windows AMD Black<script>track({id: 2});</script></div>
    "#;
    let result = extract_with_options(&page(None, body), &Options::with_window(1, 5))
        .expect("expected Ok(_)");

    assert!(result.blocks.is_empty());
}

#[test]
fn every_block_passes_validity() {
    let body = r#"
        <div class="c">Valid: yes, this one is fine - really.</div>
        <div class="c">short</div>
        <div class="c">Also valid, with some punctuation: 3.5 points.</div>
        <div class="c">just plain words here nothing else</div>
    "#;
    let result = extract_with_options(&page(None, body), &Options::with_window(1, 10))
        .expect("expected Ok(_)");

    assert_eq!(result.blocks.len(), 2);
    assert!(result.blocks.iter().all(|b| is_valid(b)));
}

#[test]
fn extraction_is_idempotent() {
    let body: String = (1..=3).map(card).collect();
    let html = page(Some("Same"), &body);
    let options = Options::with_window(1, 5);

    let first = extract_with_options(&html, &options).expect("expected Ok(_)");
    let second = extract_with_options(&html, &options).expect("expected Ok(_)");
    assert_eq!(first, second);

    let doc = parse(&html);
    let from_doc_a = extract_document(&doc, &options).expect("expected Ok(_)");
    let from_doc_b = extract_document(&doc, &options).expect("expected Ok(_)");
    assert_eq!(from_doc_a, from_doc_b);
    assert_eq!(from_doc_a, first);
}

#[test]
fn retained_classes_are_exactly_those_counted_in_window() {
    let mut body = String::new();
    for (class, n) in [("a", 1), ("b", 2), ("c", 3), ("d", 4), ("e", 6)] {
        for i in 0..n {
            body.push_str(&format!(r#"<div class="{class}">{class}{i}</div>"#));
        }
    }
    let doc = parse(&page(None, &body));

    for (lo, hi) in [(1, 1), (2, 4), (1, 6), (3, 3), (0, 10)] {
        let window = Window::new(lo, hi);
        let kept: Vec<String> = filter(aggregate(&doc, window), window)
            .iter()
            .map(|r| r.class_name.clone())
            .collect();
        let expected: Vec<String> = aggregate(&doc, Window::new(0, i64::MAX))
            .iter()
            .filter(|r| window.contains(r.count))
            .map(|r| r.class_name.clone())
            .collect();
        assert_eq!(kept, expected, "window [{lo}, {hi}]");
    }
}

#[test]
fn default_window_needs_at_least_ten_occurrences() {
    let nine: String = (1..=9).map(card).collect();
    assert!(extract(&page(None, &nine)).expect("expected Ok(_)").is_empty());

    // The tenth card is the only in-window snippet: a lone hit is noise.
    let ten: String = (1..=10).map(card).collect();
    assert!(extract(&page(None, &ten)).expect("expected Ok(_)").is_empty());

    let eleven: String = (1..=11).map(card).collect();
    assert_eq!(extract(&page(None, &eleven)).expect("expected Ok(_)").blocks.len(), 2);

    let twelve: String = (1..=12).map(card).collect();
    assert_eq!(extract(&page(None, &twelve)).expect("expected Ok(_)").blocks.len(), 3);
}
