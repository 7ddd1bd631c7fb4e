//! Lenient numeric fields.
//!
//! The DataSF (Socrata) API serializes every column as a JSON string, so
//! `"objectid": "934557"` and `"latitude": "37.77"` have to decode the same as
//! their bare-number forms.

use std::str::FromStr;

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum NumberOrString<T> {
    Number(T),
    Text(String),
}

impl<T: FromStr> NumberOrString<T> {
    pub(crate) fn into_number(self) -> Option<T> {
        match self {
            NumberOrString::Number(n) => Some(n),
            NumberOrString::Text(s) => s.trim().parse().ok(),
        }
    }
}

pub(crate) fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Deserialize<'de>,
{
    NumberOrString::<T>::deserialize(deserializer)?
        .into_number()
        .ok_or_else(|| de::Error::custom("expected a number or a numeric string"))
}
