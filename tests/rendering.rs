use promo_plan::composer::RenderedPdf;
use promo_plan::content::PLAN;
use promo_plan::fonts;
use promo_plan::report::render_plan;
use sha2::{Digest, Sha256};

fn render_full_plan() -> Option<RenderedPdf> {
    if !fonts::fonts_available() {
        eprintln!(
            "Skipping rendering test: DejaVu fonts missing. Set PROMO_PLAN_FONTS_DIR or copy assets/fonts next to the manifest."
        );
        return None;
    }
    Some(render_plan(&PLAN).expect("render plan"))
}

fn scrub_pdf(bytes: &[u8]) -> Vec<u8> {
    fn scrub_segment(data: &mut [u8], tag: &[u8], terminator: u8) {
        let mut index = 0;
        while index + tag.len() < data.len() {
            if data[index..].starts_with(tag) {
                let mut cursor = index + tag.len();
                while cursor < data.len() {
                    let byte = data[cursor];
                    if byte == terminator {
                        break;
                    }
                    if terminator == b')' {
                        data[cursor] = b'0';
                    } else if !matches!(byte, b'<' | b'>' | b' ' | b'\n' | b'\r' | b'\t') {
                        data[cursor] = b'0';
                    }
                    cursor += 1;
                }
                index = cursor;
            } else {
                index += 1;
            }
        }
    }

    fn scrub_xml(data: &mut [u8], start: &[u8], end: &[u8]) {
        let mut offset = 0;
        while offset + start.len() < data.len() {
            if let Some(start_pos) = data[offset..]
                .windows(start.len())
                .position(|window| window == start)
            {
                let start_index = offset + start_pos + start.len();
                if let Some(end_pos) = data[start_index..]
                    .windows(end.len())
                    .position(|window| window == end)
                {
                    for byte in &mut data[start_index..start_index + end_pos] {
                        if !matches!(*byte, b'<' | b'>' | b'/' | b' ' | b'\n' | b'\r' | b'\t') {
                            *byte = b'0';
                        }
                    }
                    offset = start_index + end_pos + end.len();
                } else {
                    break;
                }
            } else {
                break;
            }
        }
    }

    let mut normalized = bytes.to_vec();
    scrub_segment(&mut normalized, b"/CreationDate(", b')');
    scrub_segment(&mut normalized, b"/ModDate(", b')');
    scrub_segment(&mut normalized, b"/ID[", b']');
    scrub_segment(&mut normalized, b"/Producer(", b')');
    scrub_xml(&mut normalized, b"<xmp:CreateDate>", b"</xmp:CreateDate>");
    scrub_xml(&mut normalized, b"<xmp:ModifyDate>", b"</xmp:ModifyDate>");
    scrub_xml(
        &mut normalized,
        b"<xmp:MetadataDate>",
        b"</xmp:MetadataDate>",
    );
    scrub_xml(
        &mut normalized,
        b"<xmpMM:DocumentID>",
        b"</xmpMM:DocumentID>",
    );
    scrub_xml(
        &mut normalized,
        b"<xmpMM:InstanceID>",
        b"</xmpMM:InstanceID>",
    );
    scrub_xml(&mut normalized, b"<xmpMM:VersionID>", b"</xmpMM:VersionID>");
    normalized
}

fn normalized_hash(bytes: &[u8]) -> [u8; 32] {
    let normalized = scrub_pdf(bytes);
    let digest = Sha256::digest(&normalized);
    digest.into()
}

#[test]
fn renders_a_multi_page_document() {
    let Some(rendered) = render_full_plan() else {
        return;
    };
    assert!(
        !rendered.bytes.is_empty(),
        "rendered PDF should contain at least a header"
    );
    assert!(rendered.pages > 1, "the plan never fits a single page");
    assert!(
        (8..=20).contains(&rendered.pages),
        "unexpected page count {}: layout drifted badly",
        rendered.pages
    );
}

#[test]
fn reported_page_count_matches_the_document() {
    let Some(rendered) = render_full_plan() else {
        return;
    };
    let document = lopdf::Document::load_mem(&rendered.bytes).expect("parse rendered PDF");
    assert_eq!(document.get_pages().len(), rendered.pages);
}

#[test]
fn rendering_is_deterministic() {
    let Some(first) = render_full_plan() else {
        return;
    };
    let Some(second) = render_full_plan() else {
        return;
    };

    assert_eq!(
        first.bytes.len(),
        second.bytes.len(),
        "PDF sizes should match"
    );
    assert_eq!(
        normalized_hash(&first.bytes),
        normalized_hash(&second.bytes),
        "PDF renders must be deterministic after metadata normalization"
    );
}

#[test]
fn document_embeds_the_dejavu_family() {
    let Some(rendered) = render_full_plan() else {
        return;
    };
    let haystack = rendered.bytes;
    let needle = b"DejaVuSans";
    let embedded = haystack
        .windows(needle.len())
        .any(|window| window == needle);
    assert!(embedded, "expected the DejaVu face names in the font dictionaries");
}

#[test]
fn blocks_with_empty_text_do_not_panic() {
    use promo_plan::blocks;
    use promo_plan::composer::Composer;
    use promo_plan::model::{InfoBox, Task};

    if !fonts::fonts_available() {
        eprintln!("Skipping empty-text test: DejaVu fonts missing.");
        return;
    }
    let fonts = fonts::load_default().expect("load fonts");
    let mut c = Composer::new(fonts, "test", "test header").expect("composer");

    blocks::task(
        &mut c,
        1,
        &Task {
            title: "Tytuł",
            details: "",
            goal: "",
        },
    );
    blocks::info_box(
        &mut c,
        &InfoBox {
            title: "Pusty",
            body: "",
            color: [41, 98, 155],
        },
    );
    let rendered = c.finish().expect("finish");
    assert!(!rendered.bytes.is_empty());
}
