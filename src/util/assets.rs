use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css` as a static string.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| load_text("/assets/main.css"))
        .as_str()
}

/// Returns a data URI for the favicon.
pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| load_data_uri("/assets/favicon.svg"))
        .as_str()
}

fn load_text(path: &str) -> String {
    String::from_utf8(load_asset(path).into_owned()).unwrap_or_default()
}

fn load_data_uri(path: &str) -> String {
    let asset = load_asset(path);
    let mime = guess_mime(path);
    let encoded = encode_base64(asset.as_ref());
    format!("data:{mime};base64,{encoded}")
}

/// A missing asset renders unstyled rather than aborting startup.
fn load_asset(path: &str) -> Cow<'static, [u8]> {
    let canonical = canonical_asset_path(path);
    EmbeddedAssets::get(&canonical)
        .map(|file| file.data)
        .unwrap_or(Cow::Borrowed(&[]))
}

fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    trimmed.strip_prefix("assets/").unwrap_or(trimmed).to_string()
}

fn guess_mime(path: &str) -> &'static str {
    match path.rsplit('.').next() {
        Some("css") => "text/css",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}

fn encode_base64(input: &[u8]) -> String {
    const TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut output = String::with_capacity((input.len() + 2) / 3 * 4);

    for chunk in input.chunks(3) {
        let b0 = chunk[0];
        let b1 = *chunk.get(1).unwrap_or(&0);
        let b2 = *chunk.get(2).unwrap_or(&0);

        output.push(TABLE[(b0 >> 2) as usize] as char);
        output.push(TABLE[(((b0 & 0b11) << 4) | (b1 >> 4)) as usize] as char);

        if chunk.len() > 1 {
            output.push(TABLE[(((b1 & 0b1111) << 2) | (b2 >> 6)) as usize] as char);
        } else {
            output.push('=');
        }

        if chunk.len() > 2 {
            output.push(TABLE[(b2 & 0b0011_1111) as usize] as char);
        } else {
            output.push('=');
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_pads_short_chunks() {
        assert_eq!(encode_base64(b"M"), "TQ==");
        assert_eq!(encode_base64(b"Ma"), "TWE=");
        assert_eq!(encode_base64(b"Man"), "TWFu");
    }

    #[test]
    fn asset_paths_drop_folder_prefix() {
        assert_eq!(canonical_asset_path("/assets/main.css"), "main.css");
        assert_eq!(canonical_asset_path("favicon.svg"), "favicon.svg");
    }

    #[test]
    fn embedded_favicon_is_svg_data_uri() {
        assert!(favicon_data_uri().starts_with("data:image/svg+xml;base64,"));
        assert!(!main_css().is_empty());
    }
}
