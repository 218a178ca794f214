//! Card data: records and the store they are looked up in.
//!
//! ## Key Types
//!
//! - `Pid`: Printing identifier (one physical print/art)
//! - `Cid`: Canonical identifier (rules identity shared by reprints)
//! - `CardRecord`: Static printed card data
//! - `CardSource`: Read-only lookup interface
//! - `CardStore`: In-memory, insertion-ordered store

pub mod record;
pub mod store;

pub use record::{CardRecord, CardType, Cid, EffectGroup, Pid, Timming};
pub use store::{CardSource, CardStore, CardStoreError};
