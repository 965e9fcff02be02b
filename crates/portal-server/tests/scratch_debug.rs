//! scratch
use portal_server::PageEngine;

const TEMPLATES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../templates");

#[test]
fn dump_characters_render() {
    let engine = PageEngine::new(TEMPLATES_DIR).unwrap();
    let html = engine
        .render(
            "characters.html",
            serde_json::json!({ "characters": [
                { "id": 1, "name": "Rick Sanchez", "image": "http://img.test/1.png" }
            ]}),
        )
        .unwrap();
    eprintln!("=====BODY START=====\n{html}\n=====BODY END=====");
}
