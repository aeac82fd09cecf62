//! End-to-end codec checks: decoding an encoded value yields the value
//! back, modulo the documented normalizations, and malformed keys fail
//! with the right error.
use sortkey::{
  decode, decode_bounded, encode, FunctionValue, KeyErr, Value,
};

fn round_trip(value: Value) {
  let key = encode(&value).unwrap();
  let decoded = decode(key.as_bytes()).unwrap();
  assert_eq!(decoded, value);
}

#[test]
fn scalars() {
  round_trip(Value::Null);
  round_trip(Value::Undefined);
  round_trip(Value::Boolean(false));
  round_trip(Value::Boolean(true));
  round_trip(Value::Number(0.0));
  round_trip(Value::Number(-12345.6789));
  round_trip(Value::Number(f64::INFINITY));
  round_trip(Value::Number(f64::NEG_INFINITY));
  round_trip(Value::Date(-86400000.0));
  round_trip(Value::Date(1371149906000.0));
}

#[test]
fn every_byte_survives_nesting() {
  // All 256 byte values, nested so the payload goes through the escape
  // codec rather than the raw top-level path.
  let all_bytes = (0u8..=255).collect::<Vec<_>>();
  round_trip(Value::Bytes(all_bytes.clone()));
  round_trip(Value::List(vec![Value::Bytes(all_bytes)]));
}

#[test]
fn text_with_multibyte_chars() {
  round_trip(Value::Text("héllo, wörld — ☃".into()));
  round_trip(Value::List(vec![
    Value::Text("αβγ".into()),
    Value::Text(String::new()),
  ]));
}

#[test]
fn nested_structures() {
  round_trip(Value::List(vec![
    Value::Map(vec![
      ("name".into(), "nested".into()),
      ("depth".into(), 2.0.into()),
    ]),
    Value::List(vec![Value::List(vec![Value::Null])]),
    Value::Set(vec![1.0.into(), 2.0.into()]),
  ]));
}

#[test]
fn negative_zero_decodes_as_zero() {
  let key = encode(&Value::Number(-0.0)).unwrap();
  let zero = encode(&Value::Number(0.0)).unwrap();
  assert_eq!(key, zero);
  let decoded = decode(key.as_bytes()).unwrap();
  assert!(decoded.as_number().unwrap().is_sign_positive());
}

#[test]
fn nan_is_rejected() {
  assert_eq!(encode(&Value::Number(f64::NAN)), Err(KeyErr::NotANumber));
  assert_eq!(encode(&Value::Date(f64::NAN)), Err(KeyErr::InvalidDate));
  assert_eq!(
    encode(&Value::Date(f64::INFINITY)),
    Err(KeyErr::InvalidDate)
  );
}

#[test]
fn sets_decode_in_canonical_order() {
  let set = Value::Set(vec![
    3.0.into(),
    1.0.into(),
    2.0.into(),
    1.0.into(),
  ]);
  let key = encode(&set).unwrap();
  let decoded = decode(key.as_bytes()).unwrap();
  assert_eq!(
    decoded,
    Value::Set(vec![1.0.into(), 2.0.into(), 3.0.into()])
  );
}

#[test]
fn maps_keep_entry_order_and_any_key_type() {
  let map = Value::Map(vec![
    ("z".into(), 1.0.into()),
    ("a".into(), 2.0.into()),
    (Value::Number(42.0), Value::Boolean(true)),
    (Value::List(vec![Value::Null]), Value::Null),
  ]);
  round_trip(map);
}

#[test]
fn functions_round_trip() {
  round_trip(Value::Function(FunctionValue::new(
    vec!["a".into(), "b".into()],
    "a + b".into(),
  )));
  round_trip(Value::Function(FunctionValue::new(vec![], "42".into())));
}

#[test]
fn truncated_keys_fail() {
  let key = encode(&Value::List(vec![Value::Text("abc".into())])).unwrap();
  let bytes = key.as_bytes();
  assert_eq!(
    decode(&bytes[..bytes.len() - 1]),
    Err(KeyErr::MissingTerminator)
  );
  let key = encode(&Value::Number(1.0)).unwrap();
  assert_eq!(
    decode(&key.as_bytes()[..4]),
    Err(KeyErr::MalformedFixedPayload {
      expected: 8,
      observed: 3
    })
  );
}

#[test]
fn empty_input_fails() {
  assert_eq!(decode(&[]), Err(KeyErr::UnexpectedEnd));
}

#[test]
fn depth_bound_is_enforced() {
  let mut value = Value::Null;
  for _ in 0..8 {
    value = Value::List(vec![value]);
  }
  let key = encode(&value).unwrap();
  assert!(decode(key.as_bytes()).is_ok());
  assert_eq!(
    decode_bounded(key.as_bytes(), 4),
    Err(KeyErr::DepthLimit(4))
  );
}
