// Nullable column decoding.
//
// The backend emits SQL-null wrappers such as {"Int64": 3, "Valid": true}.
// Plain values and JSON null are accepted as well.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NullableInt {
    Wrapped {
        #[serde(rename = "Int64", default)]
        value: i64,
        #[serde(rename = "Valid")]
        valid: bool,
    },
    Plain(i64),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NullableString {
    Wrapped {
        #[serde(rename = "String", default)]
        value: String,
        #[serde(rename = "Valid")]
        valid: bool,
    },
    Plain(String),
}

pub fn int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        match Option::<NullableInt>::deserialize(deserializer)? {
            Some(NullableInt::Wrapped { value, valid: true }) => Some(value),
            Some(NullableInt::Plain(value)) => Some(value),
            _ => None,
        },
    )
}

pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        match Option::<NullableString>::deserialize(deserializer)? {
            Some(NullableString::Wrapped { value, valid: true }) => Some(value),
            Some(NullableString::Plain(value)) => Some(value),
            _ => None,
        },
    )
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "super::int")]
        qty: Option<i64>,
        #[serde(default, deserialize_with = "super::string")]
        label: Option<String>,
    }

    fn row(json: &str) -> Row {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_valid_wrappers() {
        let r = row(r#"{"qty":{"Int64":12,"Valid":true},"label":{"String":"Low","Valid":true}}"#);
        assert_eq!(r.qty, Some(12));
        assert_eq!(r.label.as_deref(), Some("Low"));
    }

    #[test]
    fn test_invalid_wrappers_are_none() {
        let r = row(r#"{"qty":{"Int64":0,"Valid":false},"label":{"String":"","Valid":false}}"#);
        assert_eq!(r.qty, None);
        assert_eq!(r.label, None);
    }

    #[test]
    fn test_null_missing_and_plain() {
        let r = row(r#"{"qty":null}"#);
        assert_eq!(r.qty, None);
        assert_eq!(r.label, None);

        let r = row(r#"{"qty":7,"label":"Critical"}"#);
        assert_eq!(r.qty, Some(7));
        assert_eq!(r.label.as_deref(), Some("Critical"));
    }
}
