//! Record identity shared by every persisted collection

use serde::de::DeserializeOwned;
use serde::Serialize;

/// An entity that can live in a `RecordStore`.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Identity used to find the record for update and removal
    type Id: PartialEq + Copy + std::fmt::Debug;

    fn id(&self) -> Self::Id;
}
