use lifeplus_client::utils::helpers::{
    format_phone, format_price, generate_request_id, is_json, to_json_value,
};

#[test]
fn test_format_phone_strips_country_code() {
    assert_eq!(format_phone("8801712345678"), "01712345678");
}

#[test]
fn test_format_phone_strips_plus_and_separators() {
    assert_eq!(format_phone("+880 1712-345678"), "01712345678");
    assert_eq!(format_phone("(880) 1913 705269"), "01913705269");
}

#[test]
fn test_format_phone_adds_leading_zero() {
    assert_eq!(format_phone("1712345678"), "01712345678");
}

#[test]
fn test_format_phone_keeps_already_normalized() {
    assert_eq!(format_phone("01712345678"), "01712345678");
}

#[test]
fn test_format_price_with_currency() {
    assert_eq!(format_price(1234.5, true), "BDT 1,234.50");
}

#[test]
fn test_format_price_without_currency() {
    assert_eq!(format_price(1234.5, false), "1,234.50");
}

#[test]
fn test_format_price_small_and_large() {
    assert_eq!(format_price(0.0, false), "0.00");
    assert_eq!(format_price(999.999, false), "1,000.00");
    assert_eq!(format_price(1234567.891, true), "BDT 1,234,567.89");
}

#[test]
fn test_format_price_negative() {
    assert_eq!(format_price(-1234.5, false), "-1,234.50");
}

#[test]
fn test_generate_request_id_shape() {
    let id = generate_request_id();
    assert_eq!(id.len(), 36);

    let parts: Vec<&str> = id.split('-').collect();
    assert_eq!(parts.len(), 5);
    assert_eq!(parts[0].len(), 8);
    assert_eq!(parts[1].len(), 4);
    assert_eq!(parts[2].len(), 4);
    assert_eq!(parts[3].len(), 4);
    assert_eq!(parts[4].len(), 12);

    // Version nibble is 4, variant nibble is one of 8, 9, a, b
    assert!(parts[2].starts_with('4'));
    let variant = parts[3].chars().next().unwrap();
    assert!(matches!(variant, '8' | '9' | 'a' | 'b'));

    assert!(id.chars().all(|c| c == '-' || c.is_ascii_hexdigit()));
}

#[test]
fn test_generate_request_id_unique() {
    let a = generate_request_id();
    let b = generate_request_id();
    assert_ne!(a, b);
}

#[test]
fn test_is_json() {
    assert!(is_json(r#"{"message":"ok"}"#));
    assert!(is_json("[1, 2, 3]"));
    assert!(is_json("null"));
    assert!(!is_json("{not json}"));
    assert!(!is_json(""));
}

#[test]
fn test_to_json_value() {
    #[derive(serde::Serialize)]
    struct Inner {
        count: u32,
    }
    #[derive(serde::Serialize)]
    struct Outer {
        name: String,
        inner: Inner,
    }

    let value = to_json_value(&Outer {
        name: "sample".to_string(),
        inner: Inner { count: 3 },
    })
    .unwrap();

    assert_eq!(value["name"], "sample");
    assert_eq!(value["inner"]["count"], 3);
}
