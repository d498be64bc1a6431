//! Codec - 保存ファイル <-> GifList
//!
//! ディスク上の形式は、ルートが文字列配列の UTF-8 JSON:
//! `["gif_url_1","gif_url_2"]`

use std::path::Path;

use crate::domain::{GifList, StorageError};

/// 保存ファイルの中身をパースする
///
/// `path` はエラーに載せるためだけに使う
pub fn decode(path: &Path, bytes: &[u8]) -> Result<GifList, StorageError> {
    serde_json::from_slice(bytes).map_err(|source| StorageError::MalformedContent {
        path: path.to_path_buf(),
        source,
    })
}

/// 書き込み用にシリアライズする。`pretty` ならインデント付き
pub fn encode(gifs: &GifList, pretty: bool) -> Result<Vec<u8>, StorageError> {
    let encoded = if pretty {
        serde_json::to_vec_pretty(gifs)
    } else {
        serde_json::to_vec(gifs)
    };
    encoded.map_err(StorageError::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn decode_preserves_order() {
        let gifs = decode(Path::new("t.json"), br#"["d","a","c","b"]"#).unwrap();
        assert_eq!(gifs.as_slice(), ["d", "a", "c", "b"]);
    }

    #[test]
    fn decode_accepts_whitespace_and_unicode() {
        let gifs = decode(Path::new("t.json"), "[\n  \"ねこ.gif\",\n  \"dog.gif\"\n]\n".as_bytes()).unwrap();
        assert_eq!(gifs.as_slice(), ["ねこ.gif", "dog.gif"]);
    }

    #[rstest]
    #[case::not_json("not json")]
    #[case::empty("")]
    #[case::object(r#"{"gifs": []}"#)]
    #[case::string(r#""a.gif""#)]
    #[case::numbers("[1, 2, 3]")]
    #[case::mixed(r#"["a.gif", null]"#)]
    #[case::nested(r#"[["a.gif"]]"#)]
    #[case::truncated(r#"["a.gif", "b.gif""#)]
    fn decode_rejects_non_string_arrays(#[case] raw: &str) {
        let err = decode(Path::new("bad.json"), raw.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            StorageError::MalformedContent { ref path, .. } if path == Path::new("bad.json")
        ));
    }

    #[test]
    fn encode_compact_by_default() {
        let gifs = GifList::from_entries(vec!["a".into(), "b".into()]);
        assert_eq!(encode(&gifs, false).unwrap(), br#"["a","b"]"#);
    }

    #[test]
    fn encode_pretty_is_still_decodable() {
        let gifs = GifList::from_entries(vec!["a".into(), "b".into()]);
        let bytes = encode(&gifs, true).unwrap();
        assert!(bytes.contains(&b'\n'));
        assert_eq!(decode(Path::new("p.json"), &bytes).unwrap(), gifs);
    }
}
