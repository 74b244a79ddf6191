#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::{arbitrary, fuzz_target};
use serde_json::{Number, Value};
use toonpack::{EncodeOptions, encode};

const MAX_DEPTH: usize = 8;
const MAX_ARRAY_SIZE: usize = 20;
const MAX_OBJECT_SIZE: usize = 20;

#[derive(Arbitrary, Debug)]
struct FuzzValue {
    choice: u8,
}

impl FuzzValue {
    fn build(&self, u: &mut arbitrary::Unstructured, depth: usize) -> arbitrary::Result<Value> {
        if depth >= MAX_DEPTH {
            return Ok(Value::Null);
        }

        Ok(match self.choice % 10 {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => {
                let n: i64 = u.arbitrary()?;
                Value::Number(Number::from(n))
            }
            3 => {
                let n: f64 = u.arbitrary()?;
                if n.is_finite() {
                    serde_json::json!(n)
                } else {
                    Value::Null
                }
            }
            4 => {
                let s: String = u.arbitrary()?;
                Value::String(s)
            }
            5..=7 => {
                let size = u.int_in_range(0..=MAX_ARRAY_SIZE)?;
                let mut arr = Vec::with_capacity(size);
                for _ in 0..size {
                    let fv: FuzzValue = u.arbitrary()?;
                    arr.push(fv.build(u, depth + 1)?);
                }
                Value::Array(arr)
            }
            _ => {
                let size = u.int_in_range(0..=MAX_OBJECT_SIZE)?;
                let mut obj = serde_json::Map::new();
                for _ in 0..size {
                    let key: String = u.arbitrary()?;
                    let fv: FuzzValue = u.arbitrary()?;
                    obj.insert(key, fv.build(u, depth + 1)?);
                }
                Value::Object(obj)
            }
        })
    }
}

fuzz_target!(|data: &[u8]| {
    let mut u = arbitrary::Unstructured::new(data);

    if let Ok(fv) = u.arbitrary::<FuzzValue>() {
        if let Ok(value) = fv.build(&mut u, 0) {
            // Generated values stay far below the default depth limit, so
            // every one of these must encode.
            let variants = [
                EncodeOptions::default(),
                EncodeOptions {
                    delimiter: '\t',
                    ..Default::default()
                },
                EncodeOptions {
                    delimiter: '|',
                    indent: 4,
                    ..Default::default()
                },
                EncodeOptions {
                    length_marker: "#".to_string(),
                    ..Default::default()
                },
            ];
            for opts in &variants {
                if let Err(e) = encode(&value, opts) {
                    panic!(
                        "encode failed on generated value!\nValue: {}\nError: {}",
                        serde_json::to_string_pretty(&value).unwrap(),
                        e
                    );
                }
            }

            // A two-level cap may legitimately refuse deep values, it only
            // must not panic.
            let shallow = EncodeOptions {
                max_depth: 2,
                ..Default::default()
            };
            let _ = encode(&value, &shallow);
        }
    }
});
