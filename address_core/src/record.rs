//! Record (DTO) boundary between the entity and its persistence/API layer.

use appwallet_types::{Secret, Timestamp, WalletId};
use serde::{Deserialize, Serialize};

use crate::error::AddressError;

/// Serialized form of an [`Address`](crate::Address).
///
/// Carries exactly the eight keys `address`, `walletId`, `creationTime`,
/// `tag`, `private`, `public`, `wif`, `callbackUrl`. Key casing is an
/// exact-match requirement; extra keys are rejected on decode. The
/// `walletId` value is the [`WalletId`] mapping form, not a bare string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct AddressRecord {
    pub address: String,
    pub wallet_id: WalletId,
    pub creation_time: Timestamp,
    pub tag: Option<String>,
    pub private: Secret,
    pub public: String,
    pub wif: Secret,
    pub callback_url: Option<String>,
}

/// Keys every record mapping must carry, `tag` and `callbackUrl` included
/// (their values may be null, their keys may not be absent).
const REQUIRED_FIELDS: [&str; 8] = [
    "address",
    "walletId",
    "creationTime",
    "tag",
    "private",
    "public",
    "wif",
    "callbackUrl",
];

impl AddressRecord {
    /// Decode a record from an untyped JSON mapping.
    ///
    /// Fails with [`AddressError::MissingField`] naming the first absent
    /// key, or [`AddressError::MalformedRecord`] for non-object input,
    /// wrongly typed values, and unknown keys.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, AddressError> {
        let map = value
            .as_object()
            .ok_or_else(|| AddressError::MalformedRecord("not a mapping".to_string()))?;

        for key in REQUIRED_FIELDS {
            if !map.contains_key(key) {
                return Err(AddressError::MissingField(key));
            }
        }

        serde_json::from_value(value.clone())
            .map_err(|e| AddressError::MalformedRecord(e.to_string()))
    }

    /// Encode this record as an untyped JSON mapping.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("address record is always JSON-representable")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_value() -> serde_json::Value {
        serde_json::json!({
            "address": "1BoatSLRHtKNngkdXEeobR76b53LETtpyT",
            "walletId": { "id": "wallet-1" },
            "creationTime": 1_430_000_000u64,
            "tag": "hot",
            "private": "plain-private",
            "public": "plain-public",
            "wif": "plain-wif",
            "callbackUrl": "https://example.com/hook",
        })
    }

    #[test]
    fn test_from_value_roundtrip() {
        let value = record_value();
        let record = AddressRecord::from_value(&value).unwrap();
        assert_eq!(record.to_value(), value);
    }

    #[test]
    fn test_missing_wif_key_fails() {
        let mut value = record_value();
        value.as_object_mut().unwrap().remove("wif");
        let err = AddressRecord::from_value(&value).unwrap_err();
        assert!(matches!(err, AddressError::MissingField("wif")));
    }

    #[test]
    fn test_missing_nullable_key_fails() {
        // `tag` may be null, but the key itself is required.
        let mut value = record_value();
        value.as_object_mut().unwrap().remove("tag");
        let err = AddressRecord::from_value(&value).unwrap_err();
        assert!(matches!(err, AddressError::MissingField("tag")));
    }

    #[test]
    fn test_null_tag_and_callback_accepted() {
        let mut value = record_value();
        value["tag"] = serde_json::Value::Null;
        value["callbackUrl"] = serde_json::Value::Null;
        let record = AddressRecord::from_value(&value).unwrap();
        assert_eq!(record.tag, None);
        assert_eq!(record.callback_url, None);
    }

    #[test]
    fn test_extra_key_rejected() {
        let mut value = record_value();
        value
            .as_object_mut()
            .unwrap()
            .insert("balance".to_string(), serde_json::json!(0));
        let err = AddressRecord::from_value(&value).unwrap_err();
        assert!(matches!(err, AddressError::MalformedRecord(_)));
    }

    #[test]
    fn test_non_mapping_input_rejected() {
        let err = AddressRecord::from_value(&serde_json::json!("nope")).unwrap_err();
        assert!(matches!(err, AddressError::MalformedRecord(_)));
    }

    #[test]
    fn test_wrongly_typed_value_rejected() {
        let mut value = record_value();
        value["creationTime"] = serde_json::json!("yesterday");
        let err = AddressRecord::from_value(&value).unwrap_err();
        assert!(matches!(err, AddressError::MalformedRecord(_)));
    }
}
