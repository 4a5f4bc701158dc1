//! The Address entity: a blockchain address generated for a wallet,
//! paired with its key material.

use appwallet_types::{Secret, Timestamp, WalletId};
use std::hash::{Hash, Hasher};

use crate::encrypted::EncryptedAddress;
use crate::encryptor::Encryptor;
use crate::error::AddressError;
use crate::record::AddressRecord;

/// An address owned by a wallet, with its plaintext key material.
///
/// Frozen after construction: no field is ever mutated, so instances are
/// safe to share across threads without synchronization. The `private`
/// and `wif` fields are secrets; persist them only through
/// [`encrypt_using`](Address::encrypt_using).
#[derive(Clone, Debug)]
pub struct Address {
    address: String,
    wallet_id: WalletId,
    creation_time: Timestamp,
    tag: Option<String>,
    private: Secret,
    public: String,
    wif: Secret,
    callback_url: Option<String>,
}

impl Address {
    /// Construct an address from validated fields.
    ///
    /// The `address` string must be non-empty and `wallet_id` must be
    /// structurally valid. The remaining fields are opaque and may be
    /// empty.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        address: impl Into<String>,
        wallet_id: WalletId,
        creation_time: Timestamp,
        tag: Option<String>,
        private: Secret,
        public: impl Into<String>,
        wif: Secret,
        callback_url: Option<String>,
    ) -> Result<Self, AddressError> {
        let address = address.into();
        if address.is_empty() {
            return Err(AddressError::InvalidAddress("empty address".to_string()));
        }
        if !wallet_id.is_valid() {
            return Err(AddressError::InvalidWalletId(format!(
                "malformed id for address {address}"
            )));
        }

        Ok(Self {
            address,
            wallet_id,
            creation_time,
            tag,
            private,
            public: public.into(),
            wif,
            callback_url,
        })
    }

    /// Serialize into the record form used by the persistence/API layer.
    ///
    /// Pure and deterministic; the timestamp is exported by value.
    pub fn to_record(&self) -> AddressRecord {
        AddressRecord {
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

    /// Reconstruct an address from its record form.
    ///
    /// Routes through [`Address::new`], so record input is held to the
    /// same validation as direct construction.
    pub fn from_record(record: AddressRecord) -> Result<Self, AddressError> {
        Self::new(
            record.address,
            record.wallet_id,
            record.creation_time,
            record.tag,
            record.private,
            record.public,
            record.wif,
            record.callback_url,
        )
    }

    /// Serialize a batch of addresses, preserving order.
    pub fn to_records(addresses: &[Address]) -> Vec<AddressRecord> {
        addresses.iter().map(Address::to_record).collect()
    }

    /// Deserialize a batch of records, preserving order.
    ///
    /// Every element goes through [`Address::from_record`]; the first
    /// failing element fails the whole batch, with no partial output.
    pub fn from_records(
        records: impl IntoIterator<Item = AddressRecord>,
    ) -> Result<Vec<Address>, AddressError> {
        records.into_iter().map(Address::from_record).collect()
    }

    /// Extract the bare address strings from a batch, preserving order.
    pub fn address_list(addresses: &[Address]) -> Vec<String> {
        addresses.iter().map(|a| a.address.clone()).collect()
    }

    /// Produce the encrypted-at-rest variant of this address.
    ///
    /// Exactly two fields are transformed: `private` and `wif` are each
    /// replaced by `encryptor.encrypt(..)`. Every other field is carried
    /// through verbatim. The original address is untouched, nothing is
    /// cached, and encryptor failures propagate unchanged.
    pub fn encrypt_using<E: Encryptor + ?Sized>(
        &self,
        encryptor: &E,
    ) -> Result<EncryptedAddress, AddressError> {
        let private = encryptor.encrypt(self.private.expose())?;
        let wif = encryptor.encrypt(self.wif.expose())?;

        Ok(EncryptedAddress::from_parts(
            self.address.clone(),
            self.wallet_id.clone(),
            self.creation_time,
            self.tag.clone(),
            private,
            self.public.clone(),
            wif,
            self.callback_url.clone(),
        ))
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn wallet_id(&self) -> &WalletId {
        &self.wallet_id
    }

    /// Entity creation time, returned by value.
    pub fn creation_time(&self) -> Timestamp {
        self.creation_time
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Plaintext private key material.
    pub fn private(&self) -> &Secret {
        &self.private
    }

    pub fn public(&self) -> &str {
        &self.public
    }

    /// Plaintext WIF encoding of the private key.
    pub fn wif(&self) -> &Secret {
        &self.wif
    }

    pub fn callback_url(&self) -> Option<&str> {
        self.callback_url.as_deref()
    }
}

/// Equality is defined solely by the `address` string: two instances
/// with the same address but differing key material compare equal. The
/// address is the natural primary key of the entity, and upstream
/// callers depend on this identity policy; do not widen it to other
/// fields.
impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl Eq for Address {}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state);
    }
}
