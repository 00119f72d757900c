//! Data-URI encoding and output document rendering

use base64::{engine::general_purpose, Engine as _};

use crate::models::EncodedAsset;

/// MIME type used when none is configured
pub const DEFAULT_MIME: &str = "image/png";

/// Global the document assigns to when none is configured
pub const DEFAULT_GLOBAL: &str = "GAME_ASSETS";

/// Build a `data:` URI from raw bytes using standard padded base64
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime,
        general_purpose::STANDARD.encode(bytes)
    )
}

/// Render one entry line, including indent, trailing comma and newline
pub fn render_entry(asset: &EncodedAsset) -> String {
    format!("    '{}': '{}',\n", asset.key, asset.data_uri)
}

/// Render the full document
///
/// ```
/// let doc = gamepack::render_document("GAME_ASSETS", &[]);
/// assert_eq!(doc, "window.GAME_ASSETS = {\n};\n");
/// ```
pub fn render_document(global: &str, assets: &[EncodedAsset]) -> String {
    let mut out = format!("window.{} = {{\n", global);
    for asset in assets {
        out.push_str(&render_entry(asset));
    }
    out.push_str("};\n");
    out
}
