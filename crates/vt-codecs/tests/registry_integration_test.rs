//! Integration test: codec registry
//!
//! Loads code lists from YAML, registers them next to the built-in codecs
//! and uses the registry from several threads.

use std::thread;
use vt_codecs::{CodeListSet, CodecRegistry, Error, Value};
use vt_core::{ReversibleTransformer, Transformer, lift_sequence};

const CODE_LISTS: &str = r#"
code_lists:
  - name: currency
    default_value: Other
    default_code: XXX
    entries:
      - code: EUR
        value: Euro
      - code: USD
        value: US Dollar
  - name: document_type
    entries:
      - code: "220"
        value: Order
"#;

fn registry() -> anyhow::Result<CodecRegistry> {
    let registry = CodecRegistry::with_builtin_codecs();
    registry.register_code_lists(&CodeListSet::from_yaml_str(CODE_LISTS)?);
    Ok(registry)
}

#[test]
fn test_registry_with_code_lists() -> anyhow::Result<()> {
    let registry = registry()?;

    assert!(registry.contains("codelist:currency"));
    assert!(registry.contains("codelist:document_type"));
    assert!(registry.contains("integer"));

    assert_eq!(
        registry.transform("codelist:currency", Value::from("USD"))?,
        Value::from("US Dollar")
    );
    assert_eq!(
        registry.reverse_transform("codelist:currency", Value::from("Pound"))?,
        Value::from("XXX")
    );
    assert_eq!(
        registry.transform("codelist:document_type", Value::from("380"))?,
        Value::from("")
    );
    Ok(())
}

#[test]
fn test_code_list_codec_passes_null_through() -> anyhow::Result<()> {
    let registry = registry()?;

    assert_eq!(registry.transform("codelist:currency", Value::Null)?, Value::Null);
    assert_eq!(
        registry.transform("codelist:currency", Value::Integer(1)),
        Err(Error::type_mismatch("string", "integer"))
    );
    Ok(())
}

#[test]
fn test_registry_codec_lifts_over_lists() -> anyhow::Result<()> {
    let registry = registry()?;
    let amounts = lift_sequence(registry.get("decimal")?);

    let decoded = amounts.transform(vec![Value::from("1.5"), Value::Null, Value::from("-2")])?;
    assert_eq!(decoded, vec![Value::Decimal(1.5), Value::Null, Value::Decimal(-2.0)]);

    let encoded = amounts.reverse_transform(decoded)?;
    assert_eq!(encoded, vec![Value::from("1.5"), Value::Null, Value::from("-2")]);
    Ok(())
}

#[test]
fn test_unknown_codec_name() {
    let registry = CodecRegistry::with_builtin_codecs();

    assert!(matches!(
        registry.get("codelist:currency"),
        Err(Error::UnknownCodec(name)) if name == "codelist:currency"
    ));
}

#[test]
fn test_invalid_code_list_document() {
    let yaml = r"
code_lists:
  - name: a
    entries:
      - code: X
        value: one
      - code: X
        value: two
";

    assert!(matches!(CodeListSet::from_yaml_str(yaml), Err(Error::Config(_))));
}

#[test]
fn test_registry_shared_across_threads() -> anyhow::Result<()> {
    let registry = registry()?;

    let handles: Vec<_> = (0..4_i64)
        .map(|n| {
            let registry = registry.clone();
            thread::spawn(move || {
                registry.register(format!("currency:{n}"), registry.get("codelist:currency")?);
                registry.transform("integer", Value::from(n.to_string()))
            })
        })
        .collect();

    for (n, handle) in (0..4_i64).zip(handles) {
        let decoded = handle.join().map_err(|_| anyhow::anyhow!("worker panicked"))??;
        assert_eq!(decoded, Value::Integer(n));
    }
    for n in 0..4 {
        assert!(registry.contains(&format!("currency:{n}")));
    }
    Ok(())
}
