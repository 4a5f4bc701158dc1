//! Encrypted-at-rest variant of the address entity.

use appwallet_types::{Timestamp, WalletId};
use serde::Serialize;

/// An address whose `private` and `wif` fields hold ciphertext.
///
/// Structurally identical to [`Address`](crate::Address) but a distinct
/// type: the two are never interchangeable, and the only way to obtain
/// a value of this type is [`crate::Address::encrypt_using`]. No
/// operation here decrypts back to plaintext; that belongs to the
/// encryptor's counterpart outside this crate.
#[derive(Clone, Debug)]
pub struct EncryptedAddress {
    address: String,
    wallet_id: WalletId,
    creation_time: Timestamp,
    tag: Option<String>,
    private: String,
    public: String,
    wif: String,
    callback_url: Option<String>,
}

impl EncryptedAddress {
    /// Assemble from already-encrypted parts. Crate-internal so the
    /// encryption transform stays the single construction path.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        address: String,
        wallet_id: WalletId,
        creation_time: Timestamp,
        tag: Option<String>,
        private: String,
        public: String,
        wif: String,
        callback_url: Option<String>,
    ) -> Self {
        Self {
            address,
            wallet_id,
            creation_time,
            tag,
            private,
            public,
            wif,
            callback_url,
        }
    }

    /// Serialize for at-rest storage.
    ///
    /// One-way by design: no matching deserializer exists, so ciphertext
    /// records cannot be turned back into entities by this crate.
    pub fn to_record(&self) -> EncryptedAddressRecord {
        EncryptedAddressRecord {
            address: self.address.clone(),
            wallet_id: self.wallet_id.clone(),
            creation_time: self.creation_time,
            tag: self.tag.clone(),
            private: self.private.clone(),
            public: self.public.clone(),
            wif: self.wif.clone(),
            callback_url: self.callback_url.clone(),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn wallet_id(&self) -> &WalletId {
        &self.wallet_id
    }

    pub fn creation_time(&self) -> Timestamp {
        self.creation_time
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Ciphertext of the private key.
    pub fn private(&self) -> &str {
        &self.private
    }

    pub fn public(&self) -> &str {
        &self.public
    }

    /// Ciphertext of the WIF encoding.
    pub fn wif(&self) -> &str {
        &self.wif
    }

    pub fn callback_url(&self) -> Option<&str> {
        self.callback_url.as_deref()
    }
}

/// Storage record of an [`EncryptedAddress`]. Same eight keys as the
/// plaintext record; serialize-only.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptedAddressRecord {
    pub address: String,
    pub wallet_id: WalletId,
    pub creation_time: Timestamp,
    pub tag: Option<String>,
    pub private: String,
    pub public: String,
    pub wif: String,
    pub callback_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::Address;
    use crate::encryptor::Encryptor;
    use crate::error::EncryptionError;
    use appwallet_types::Secret;

    struct SuffixEncryptor;

    impl Encryptor for SuffixEncryptor {
        fn encrypt(&self, plaintext: &str) -> Result<String, EncryptionError> {
            Ok(format!("{plaintext}_ENC"))
        }
    }

    fn encrypted_sample() -> EncryptedAddress {
        Address::new(
            "addr-1",
            WalletId::new("wallet-1").unwrap(),
            Timestamp::new(1_430_000_000),
            Some("hot".to_string()),
            Secret::new("p"),
            "pub",
            Secret::new("w"),
            None,
        )
        .unwrap()
        .encrypt_using(&SuffixEncryptor)
        .unwrap()
    }

    #[test]
    fn test_record_carries_ciphertext() {
        let record = encrypted_sample().to_record();
        assert_eq!(record.private, "p_ENC");
        assert_eq!(record.wif, "w_ENC");
        assert_eq!(record.public, "pub");
    }

    #[test]
    fn test_record_serializes_with_exact_keys() {
        let json = serde_json::to_value(encrypted_sample().to_record()).unwrap();
        let map = json.as_object().unwrap();

        let mut keys: Vec<_> = map.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "address",
                "callbackUrl",
                "creationTime",
                "private",
                "public",
                "tag",
                "walletId",
                "wif",
            ]
        );
        assert_eq!(json["walletId"], serde_json::json!({ "id": "wallet-1" }));
    }
}
