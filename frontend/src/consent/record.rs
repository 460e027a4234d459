use crate::storage::{set_or_warn, KeyValueStore};

pub const CONSENT_KEY: &str = "cookieConsent";

/// The visitor's persisted cookie decision. `Unset` is the absence of the key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentRecord {
    Unset,
    Essential,
    All,
}

impl ConsentRecord {
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("all") => ConsentRecord::All,
            Some("essential") => ConsentRecord::Essential,
            _ => ConsentRecord::Unset,
        }
    }

    pub fn as_stored(&self) -> Option<&'static str> {
        match self {
            ConsentRecord::Unset => None,
            ConsentRecord::Essential => Some("essential"),
            ConsentRecord::All => Some("all"),
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, ConsentRecord::Unset)
    }
}

/// The two banner buttons that record a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentChoice {
    AcceptAll,
    AcceptEssential,
}

impl ConsentChoice {
    pub fn record(&self) -> ConsentRecord {
        match self {
            ConsentChoice::AcceptAll => ConsentRecord::All,
            ConsentChoice::AcceptEssential => ConsentRecord::Essential,
        }
    }
}

pub fn load_consent(store: &impl KeyValueStore) -> ConsentRecord {
    ConsentRecord::from_stored(store.get(CONSENT_KEY).as_deref())
}

pub fn save_consent(store: &impl KeyValueStore, record: ConsentRecord) {
    if let Some(value) = record.as_stored() {
        set_or_warn(store, CONSENT_KEY, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn missing_or_unknown_values_read_as_unset() {
        assert_eq!(load_consent(&MemoryStorage::new()), ConsentRecord::Unset);
        let odd = MemoryStorage::with_item(CONSENT_KEY, "maybe");
        assert_eq!(load_consent(&odd), ConsentRecord::Unset);
    }

    #[test]
    fn saved_choice_is_read_back() {
        let storage = MemoryStorage::new();
        save_consent(&storage, ConsentChoice::AcceptEssential.record());
        assert_eq!(storage.get(CONSENT_KEY).as_deref(), Some("essential"));
        assert_eq!(load_consent(&storage), ConsentRecord::Essential);
    }

    #[test]
    fn saving_unset_writes_nothing() {
        let storage = MemoryStorage::new();
        save_consent(&storage, ConsentRecord::Unset);
        assert_eq!(storage.write_count(), 0);
    }
}
