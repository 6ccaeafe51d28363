use educustom_core::render::{
    parse_inline_spans, render, render_with, strip_formatting, Block, InlineSpan, RenderOptions,
};

#[test]
fn empty_input_yields_one_spacer() {
    assert_eq!(render(""), vec![Block::Spacer]);
}

#[test]
fn whitespace_only_lines_each_become_a_spacer() {
    let blocks = render("a\n\n \t \nb");
    assert_eq!(blocks.len(), 4);
    assert_eq!(blocks[1], Block::Spacer);
    assert_eq!(blocks[2], Block::Spacer);
    assert!(matches!(blocks[0], Block::Paragraph { .. }));
    assert!(matches!(blocks[3], Block::Paragraph { .. }));
}

#[test]
fn heading_one_with_inline_bold() {
    let blocks = render("# Hello **World**");
    assert_eq!(
        blocks,
        vec![Block::Heading1 {
            raw: "# Hello **World**".to_string(),
            spans: vec![
                InlineSpan::Plain("Hello ".to_string()),
                InlineSpan::Bold("World".to_string()),
            ],
        }]
    );
}

#[test]
fn heading_two_strips_marker() {
    match &render("## Tujuan Pembelajaran")[0] {
        Block::Heading2 { raw, spans } => {
            assert_eq!(raw, "## Tujuan Pembelajaran");
            assert_eq!(spans, &[InlineSpan::Plain("Tujuan Pembelajaran".to_string())]);
        }
        other => panic!("expected Heading2, got {other:?}"),
    }
}

#[test]
fn short_bold_line_becomes_emphasis_heading() {
    match &render("**Short Title**")[0] {
        Block::EmphasisHeading { raw, text } => {
            assert_eq!(raw, "**Short Title**");
            assert_eq!(text, "Short Title");
            assert!(!text.contains('*'));
        }
        other => panic!("expected EmphasisHeading, got {other:?}"),
    }
}

#[test]
fn explicit_triple_hash_becomes_emphasis_heading() {
    match &render("### Kegiatan Inti")[0] {
        Block::EmphasisHeading { text, .. } => assert_eq!(text, "Kegiatan Inti"),
        other => panic!("expected EmphasisHeading, got {other:?}"),
    }
}

#[test]
fn long_bold_line_stays_a_paragraph() {
    let line = format!("**{}**", "x".repeat(120));
    match &render(&line)[0] {
        Block::Paragraph { spans, .. } => {
            assert_eq!(spans, &[InlineSpan::Bold("x".repeat(120))]);
        }
        other => panic!("expected Paragraph, got {other:?}"),
    }
}

#[test]
fn emphasis_heading_threshold_is_configurable() {
    let line = format!("**{}**", "x".repeat(120));
    let options = RenderOptions {
        emphasis_heading_max_len: 200,
    };
    assert!(matches!(
        &render_with(&line, &options)[0],
        Block::EmphasisHeading { .. }
    ));
}

#[test]
fn bullet_scrubs_odd_markers_instead_of_emphasizing() {
    match &render("* Item with *stray* marker")[0] {
        Block::Bullet { spans, .. } => {
            assert_eq!(spans, &[InlineSpan::Plain("Item with stray marker".to_string())]);
        }
        other => panic!("expected Bullet, got {other:?}"),
    }
}

#[test]
fn dash_bullet_is_recognized() {
    assert!(matches!(&render("- item")[0], Block::Bullet { .. }));
}

#[test]
fn numbered_items_keep_order_and_lose_prefixes() {
    let blocks = render("1. First\n2. Second");
    assert_eq!(
        blocks,
        vec![
            Block::Numbered {
                raw: "1. First".to_string(),
                spans: vec![InlineSpan::Plain("First".to_string())],
            },
            Block::Numbered {
                raw: "2. Second".to_string(),
                spans: vec![InlineSpan::Plain("Second".to_string())],
            },
        ]
    );
}

#[test]
fn multi_digit_numbered_prefix_is_stripped() {
    match &render("12. Kegiatan Penutup")[0] {
        Block::Numbered { spans, .. } => {
            assert_eq!(spans, &[InlineSpan::Plain("Kegiatan Penutup".to_string())]);
        }
        other => panic!("expected Numbered, got {other:?}"),
    }
}

#[test]
fn bare_number_line_is_a_paragraph() {
    assert!(matches!(&render("123")[0], Block::Paragraph { .. }));
}

#[test]
fn raw_round_trip_reproduces_trimmed_lines() {
    let input = "# Judul\n\n## Bagian\n* satu\n- dua\n3. tiga\n  teks biasa  \n\n**Penutup**";
    let expected: Vec<String> = input
        .split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();
    let raws: Vec<String> = render(input)
        .iter()
        .filter_map(|b| b.raw_text().map(str::to_string))
        .collect();
    assert_eq!(raws, expected);
}

#[test]
fn rendering_is_idempotent_for_unchanged_text() {
    let input = "# A\n\n* b **c**\n1. d";
    assert_eq!(render(input), render(input));
}

#[test]
fn unpaired_double_star_is_plain_and_scrubbed() {
    assert_eq!(
        parse_inline_spans("a **b"),
        vec![InlineSpan::Plain("a b".to_string())]
    );
}

#[test]
fn empty_bold_pair_is_kept_as_empty_bold() {
    assert_eq!(parse_inline_spans("****"), vec![InlineSpan::Bold(String::new())]);
}

#[test]
fn inline_parse_never_emits_stray_markers() {
    let spans = parse_inline_spans("mix of *italic*, `code`, ~strike~ and _under_");
    for span in &spans {
        let InlineSpan::Plain(text) = span else {
            panic!("expected only plain spans, got {span:?}");
        };
        assert!(!text.contains(['*', '#', '_', '~', '`']));
    }
}

#[test]
fn strip_formatting_removes_wrappers_and_markers() {
    assert_eq!(strip_formatting("**bold** and *italic*"), "bold and italic");
    assert_eq!(strip_formatting("### Judul Utama"), "Judul Utama");
    assert_eq!(strip_formatting("`kode` ~x~ _y_"), "kode x y");
    assert_eq!(strip_formatting("# Hello **World**"), "Hello World");
}

#[test]
fn strip_formatting_is_idempotent() {
    let cases = [
        "",
        "plain",
        "**bold** tail",
        "*italic*",
        "**a**b**",
        "**a",
        "* *",
        "### Heading **mix**",
        "#nospace",
        "#_ x",
        "  padded  ",
        "1. **Judul RPP yang Kreatif**",
    ];
    for case in cases {
        let once = strip_formatting(case);
        let twice = strip_formatting(&once);
        assert_eq!(once, twice, "not idempotent for {case:?}");
    }
}
