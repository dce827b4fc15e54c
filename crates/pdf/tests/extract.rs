use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// Build a PDF with one page per entry; `None` produces a page with an empty
/// content stream.
fn build_pdf(pages: &[Option<&str>]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for page in pages {
        let operations = match page {
            Some(text) => vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
            None => vec![],
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => pages.len() as i64,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

#[test]
fn extracts_pages_in_order() {
    let bytes = build_pdf(&[Some("Curriculum Vitae"), Some("Experience")]);
    let extracted = pdf::extract_pages(&bytes).unwrap();

    assert_eq!(extracted.page_count, 2);
    assert_eq!(extracted.pages.len(), 2);
    assert!(extracted.pages[0].text.contains("Curriculum Vitae"));
    assert!(extracted.pages[1].text.contains("Experience"));
}

#[test]
fn page_without_text_is_omitted() {
    let bytes = build_pdf(&[Some("Page one"), None, Some("Page three")]);
    let extracted = pdf::extract_pages(&bytes).unwrap();

    assert_eq!(extracted.page_count, 3);
    assert_eq!(extracted.pages.len(), 2);
    assert_eq!(extracted.pages[0].number, 1);
    assert_eq!(extracted.pages[1].number, 3);
    assert!(extracted.pages[1].text.contains("Page three"));
    assert_eq!(extracted.skipped, vec![2]);
}

