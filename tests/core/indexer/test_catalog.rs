// Catalog loading against the scanner's metadata.json layout

use crate::common::{TestCorpus, CATALOG_FILE};
use ilmify::core::indexer::Catalog;
use ilmify::core::types::ResourceId;
use std::fs;

#[test]
fn test_catalog_from_scanner_output() {
    let corpus = TestCorpus::new();
    let json = r#"[
        {"id": 1, "title": "Physics Class 9", "category": "textbooks",
         "filepath": "content/textbooks/physics-class-9.pdf", "format": "pdf",
         "size": 1048576, "language": "en"},
        {"id": 2, "title": "Hand Washing", "category": "videos",
         "filepath": "content/videos/hand-washing.mp4", "format": "mp4"},
        {"id": "urdu-reader", "title": "Urdu Reader", "category": "textbooks",
         "filepath": "content/textbooks/urdu-reader.PDF", "format": "PDF"}
    ]"#;
    fs::write(corpus.root().join(CATALOG_FILE), json).unwrap();

    let catalog = Catalog::load(&corpus.root().join(CATALOG_FILE)).unwrap();
    assert_eq!(catalog.len(), 3);

    let pdfs: Vec<_> = catalog.pdf_resources().collect();
    assert_eq!(pdfs.len(), 2);
    assert_eq!(pdfs[0].id, ResourceId::Number(1));
    assert_eq!(pdfs[1].id, ResourceId::Text("urdu-reader".to_string()));
    assert_eq!(pdfs[1].chunk_id(0), "urdu-reader_0");
}

#[test]
fn test_catalog_written_by_fixture_roundtrips() {
    let corpus = TestCorpus::sample();
    let catalog = Catalog::load(&corpus.root().join(CATALOG_FILE)).unwrap();

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.resources()[0].title, "History of the Subcontinent");
}
