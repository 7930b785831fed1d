//! 核心响应处理模块

use axum::http::HeaderValue;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// 产品资源的基础路径
pub const PRODUCT_BASE_PATH: &str = "/api/product";

/// 控制字符、空格、`%` 以及所有非 ASCII 字符都会被编码
const LOCATION_ID: &AsciiSet = &CONTROLS.add(b' ').add(b'%');

/// `Location` 头：基础路径与编码后的 id 直接拼接，中间没有分隔符
///
/// 编码后只剩可见 ASCII，总能构成合法的头部值。
pub fn product_location(id: &str) -> HeaderValue {
    let encoded = utf8_percent_encode(id, LOCATION_ID);
    HeaderValue::try_from(format!("{PRODUCT_BASE_PATH}{encoded}"))
        .unwrap_or_else(|_| HeaderValue::from_static(PRODUCT_BASE_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_is_plain_concatenation() {
        let value = product_location("6f1c2d3e-aaaa-4bbb-8ccc-0123456789ab");
        assert_eq!(
            value.to_str().unwrap(),
            "/api/product6f1c2d3e-aaaa-4bbb-8ccc-0123456789ab"
        );
    }

    #[test]
    fn test_location_encodes_control_characters() {
        assert_eq!(product_location("a\nb").to_str().unwrap(), "/api/producta%0Ab");
        assert_eq!(product_location("tab\there").to_str().unwrap(), "/api/producttab%09here");
        assert_eq!(product_location("a b%c").to_str().unwrap(), "/api/producta%20b%25c");
        assert_eq!(product_location("\u{7f}").to_str().unwrap(), "/api/product%7F");
    }

    #[test]
    fn test_location_encodes_non_ascii() {
        assert_eq!(product_location("产品").to_str().unwrap(), "/api/product%E4%BA%A7%E5%93%81");
    }
}
