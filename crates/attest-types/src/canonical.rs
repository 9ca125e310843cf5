use serde::Serialize;
use serde_json::Value;

/// Canonical JSON: recursively sorted object keys, no insignificant
/// whitespace. Both the serialization contract (stable JSON with
/// alphabetically-ordered keys) and content hashing are defined over this
/// form, so the hash of a value never depends on field declaration order.
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let value = serde_json::to_value(value)?;
    let sorted = sort_value(value);
    serde_json::to_string(&sorted)
}

/// Canonical JSON as bytes, for hashing.
pub fn canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    canonical_json(value).map(String::into_bytes)
}

fn sort_value(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            // serde_json's Map preserves insertion order by default;
            // rebuild through a BTreeMap to force alphabetical keys.
            let sorted: std::collections::BTreeMap<String, Value> = map
                .into_iter()
                .map(|(k, v)| (k, sort_value(v)))
                .collect();
            Value::Object(sorted.into_iter().collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_value).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Unordered {
        zebra: u32,
        apple: u32,
        nested: Nested,
    }

    #[derive(Serialize)]
    struct Nested {
        beta: bool,
        alpha: bool,
    }

    #[test]
    fn keys_sorted_recursively() {
        let value = Unordered {
            zebra: 1,
            apple: 2,
            nested: Nested {
                beta: true,
                alpha: false,
            },
        };
        let json = canonical_json(&value).unwrap();
        assert_eq!(
            json,
            r#"{"apple":2,"nested":{"alpha":false,"beta":true},"zebra":1}"#
        );
    }

    #[test]
    fn declaration_order_does_not_change_bytes() {
        #[derive(Serialize)]
        struct A {
            x: u32,
            y: u32,
        }
        #[derive(Serialize)]
        struct B {
            y: u32,
            x: u32,
        }
        let a = canonical_json_bytes(&A { x: 1, y: 2 }).unwrap();
        let b = canonical_json_bytes(&B { y: 2, x: 1 }).unwrap();
        assert_eq!(a, b);
    }
}
