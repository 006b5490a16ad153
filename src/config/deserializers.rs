use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

use crate::config::types::{CollectionConfig, Collections};

/// Accepts either a comma separated string (`"md,markdown"`) or a sequence of
/// strings, the two shapes Jekyll configs use for `markdown_ext`.
pub fn deserialize_extension_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrVec;

    impl<'de> serde::de::Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("comma separated string or sequence of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value
                .split(',')
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
                .collect())
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: serde::de::SeqAccess<'de>,
        {
            let mut values = Vec::new();
            while let Some(value) = seq.next_element::<String>()? {
                values.push(value);
            }
            Ok(values)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Accepts `collections` as a list of labels or as a mapping of label to
/// options, keeping the order the site declares them in.
pub fn deserialize_collections<'de, D>(deserializer: D) -> Result<Collections, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    collections_from_value(value).map_err(serde::de::Error::custom)
}

fn collections_from_value(value: Value) -> Result<Collections, String> {
    let mut items = Vec::new();

    match value {
        Value::Null => {}
        Value::Sequence(labels) => {
            for label in labels {
                match label {
                    Value::String(label) => items.push((label, CollectionConfig::default())),
                    other => return Err(format!("collection label must be a string, got {:?}", other)),
                }
            }
        }
        Value::Mapping(map) => {
            for (label, options) in map {
                let label = match label {
                    Value::String(label) => label,
                    other => return Err(format!("collection label must be a string, got {:?}", other)),
                };
                let options = if options.is_null() {
                    CollectionConfig::default()
                } else {
                    serde_yaml::from_value(options)
                        .map_err(|e| format!("invalid options for collection '{}': {}", label, e))?
                };
                items.push((label, options));
            }
        }
        other => return Err(format!("collections must be a list or a mapping, got {:?}", other)),
    }

    Ok(Collections { items })
}
