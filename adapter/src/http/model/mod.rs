use serde::{Deserialize, Deserializer};

pub mod booking;
pub mod price;

// null もフィールド欠落と同じく既定値として扱う
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
