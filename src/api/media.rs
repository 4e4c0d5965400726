use base64::{engine::general_purpose, Engine as _};
use once_cell::sync::Lazy;
use regex::Regex;

static DATA_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^data:(.+);base64,(.*)$").expect("valid data url regex"));

pub fn detect_mime_type(data: &[u8]) -> Option<String> {
    if data.len() > 12 {
        let ftyp = &data[4..12];
        if ftyp.starts_with(b"ftyp") {
            let brand = &ftyp[4..8];
            if brand == b"heic" || brand == b"heif" || brand == b"hevc" {
                return Some("image/heic".to_string());
            }
        }
    }

    infer::get(data).map(|kind| kind.mime_type().to_string())
}

pub fn encode_base64(data: &[u8]) -> String {
    general_purpose::STANDARD.encode(data)
}

/// Parsed payload of a `data:<mime>;base64,<data>` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrlPayload {
    pub mime_type: String,
    pub data: String,
}

pub fn parse_data_url(url: &str) -> Option<DataUrlPayload> {
    let captures = DATA_URL_RE.captures(url)?;
    Some(DataUrlPayload {
        mime_type: captures[1].to_string(),
        data: captures[2].to_string(),
    })
}

pub fn to_data_url(mime_type: &str, base64_data: &str) -> String {
    format!("data:{mime_type};base64,{base64_data}")
}

pub fn decode_base64(data: &str) -> Option<Vec<u8>> {
    general_purpose::STANDARD.decode(data).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_data_urls() {
        let parsed = parse_data_url("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(parsed.mime_type, "image/png");
        assert_eq!(parsed.data, "aGVsbG8=");
    }

    #[test]
    fn rejects_non_base64_urls() {
        assert_eq!(parse_data_url("https://example.com/image.png"), None);
        assert_eq!(parse_data_url("data:image/png,rawbytes"), None);
        assert_eq!(parse_data_url(""), None);
    }

    #[test]
    fn data_url_round_trip() {
        let url = to_data_url("image/jpeg", "Zm9v");
        let parsed = parse_data_url(&url).unwrap();
        assert_eq!(parsed.mime_type, "image/jpeg");
        assert_eq!(parsed.data, "Zm9v");
    }

    #[test]
    fn detects_png_magic_bytes() {
        let png_header = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0, 0];
        assert_eq!(detect_mime_type(&png_header), Some("image/png".to_string()));
    }
}
