//! Integration test: decoding a domain record from wire values
//!
//! Builds field decoders out of leaf codecs and combinators and runs them
//! against JSON-shaped input.

use chrono::NaiveDate;
use vt_codecs::adapters::{field, optional_field, value_list, value_string};
use vt_codecs::date::date;
use vt_codecs::numeric::{string_decimal, string_int};
use vt_codecs::text::trim;
use vt_codecs::{CodeList, DateFormat, Error, Value};
use vt_core::{
    ReversibleTransformer, Transformer, ValueTransformer, compose, flip, lift_optional,
    lift_sequence,
};

#[derive(Debug, Clone, PartialEq)]
struct OrderLine {
    sku: String,
    quantity: i64,
    unit: String,
    price: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct Order {
    number: i64,
    document_type: String,
    delivery: Option<NaiveDate>,
    lines: Vec<OrderLine>,
}

fn units() -> CodeList {
    CodeList::new("units")
        .with_entry("PCE", "piece")
        .with_entry("KGM", "kilogram")
        .with_defaults("unknown", "ZZZ")
}

fn document_types() -> CodeList {
    CodeList::new("document_type")
        .with_entry("220", "Order")
        .with_defaults("Unknown", "000")
}

fn decode_line(value: Value) -> Result<OrderLine, Error> {
    let sku = compose(field("sku"), compose(value_string(), trim()));
    let quantity = compose(compose(field("qty"), value_string()), string_int());
    let unit = compose(field("unit"), compose(units().value_codec(), value_string()));
    let price = compose(compose(field("price"), value_string()), string_decimal());

    Ok(OrderLine {
        sku: sku.transform(value.clone())?,
        quantity: quantity.transform(value.clone())?,
        unit: unit.transform(value.clone())?,
        price: price.transform(value)?,
    })
}

fn decode_order(value: Value) -> Result<Order, Error> {
    let number = compose(compose(field("number"), value_string()), string_int());
    let document_type = compose(
        field("type"),
        compose(document_types().value_codec(), value_string()),
    );
    let delivery = compose(
        optional_field("delivery"),
        lift_optional(compose(value_string(), date(DateFormat::Yyyymmdd))),
    );
    let lines = compose(
        compose(field("lines"), value_list()),
        lift_sequence(ValueTransformer::new(decode_line)),
    );

    Ok(Order {
        number: number.transform(value.clone())?,
        document_type: document_type.transform(value.clone())?,
        delivery: delivery.transform(value.clone())?,
        lines: lines.transform(value)?,
    })
}

fn parse(json: &str) -> Value {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_decode_complete_order() {
    let order = decode_order(parse(
        r#"{
            "number": "4711",
            "type": "220",
            "delivery": "20240115",
            "lines": [
                {"sku": " A-1 ", "qty": "3", "unit": "PCE", "price": "9.5"},
                {"sku": "B-2", "qty": "10", "unit": "KGM", "price": "1.25"}
            ]
        }"#,
    ))
    .unwrap();

    assert_eq!(order.number, 4711);
    assert_eq!(order.document_type, "Order");
    assert_eq!(order.delivery, NaiveDate::from_ymd_opt(2024, 1, 15));
    assert_eq!(order.lines.len(), 2);
    assert_eq!(order.lines[0].sku, "A-1");
    assert_eq!(order.lines[0].unit, "piece");
    assert_eq!(order.lines[1].quantity, 10);
    assert!((order.lines[1].price - 1.25).abs() < f64::EPSILON);
}

#[test]
fn test_decode_optional_and_defaulted_fields() {
    let order = decode_order(parse(
        r#"{"number": "1", "type": "999", "delivery": null, "lines": []}"#,
    ))
    .unwrap();

    assert_eq!(order.document_type, "Unknown");
    assert_eq!(order.delivery, None);
    assert!(order.lines.is_empty());

    let order = decode_order(parse(r#"{"number": "1", "type": "220", "lines": []}"#)).unwrap();
    assert_eq!(order.delivery, None);
}

#[test]
fn test_decode_reports_first_bad_line() {
    let result = decode_order(parse(
        r#"{
            "number": "1",
            "type": "220",
            "lines": [
                {"sku": "A", "qty": "1", "unit": "PCE", "price": "1"},
                {"sku": "B", "qty": "x", "unit": "PCE", "price": "1"},
                {"sku": "C", "unit": "PCE", "price": "1"}
            ]
        }"#,
    ));

    assert_eq!(result, Err(Error::parse("x", "integer")));
}

#[test]
fn test_decode_missing_and_mistyped_fields() {
    assert_eq!(
        decode_order(parse(r#"{"type": "220", "lines": []}"#)),
        Err(Error::MissingField("number".to_string()))
    );
    assert_eq!(
        decode_order(parse(r#"{"number": 1, "type": "220", "lines": []}"#)),
        Err(Error::type_mismatch("string", "integer"))
    );
    let iso_delivery = r#"{"number": "1", "type": "220", "delivery": "2024-01-15", "lines": []}"#;
    assert_eq!(
        decode_order(parse(iso_delivery)),
        Err(Error::parse("2024-01-15", "date (YYYYMMDD)"))
    );
}

#[test]
fn test_encode_line_values_back() {
    let quantity = compose(value_string(), string_int());
    let unit = units().value_codec();
    let delivery = compose(value_string(), date(DateFormat::Yyyymmdd));

    assert_eq!(quantity.reverse_transform(12), Ok(Value::from("12")));
    assert_eq!(unit.reverse_transform(Value::from("kilogram")), Ok(Value::from("KGM")));
    assert_eq!(unit.reverse_transform(Value::from("litre")), Ok(Value::from("ZZZ")));
    assert_eq!(
        lift_optional(delivery).reverse_transform(NaiveDate::from_ymd_opt(2024, 3, 1)),
        Ok(Some(Value::from("20240301")))
    );
    assert_eq!(flip(compose(value_string(), string_int())).transform(-4), Ok(Value::from("-4")));
}
