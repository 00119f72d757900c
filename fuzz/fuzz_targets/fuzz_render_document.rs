#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Every rendered document is framed by the header and footer
    let asset = gamepack::EncodedAsset {
        key: "fuzz".to_string(),
        data_uri: gamepack::data_uri("image/png", data),
    };
    let doc = gamepack::render_document("GAME_ASSETS", &[asset]);
    assert!(doc.starts_with("window.GAME_ASSETS = {\n"));
    assert!(doc.ends_with("',\n};\n"));
});
