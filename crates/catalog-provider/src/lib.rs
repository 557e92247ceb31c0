//! # Catalog Provider - List Data Access
//!
//! The data-access boundary of a catalog list screen. A [`DataProvider`]
//! answers list requests of the form
//! `{resource, pagination?, filters?, sorters?}` with `{data, total}`, running
//! the [`catalog_query`] engine over an in-memory record store.
//!
//! ## Quick Start
//!
//! ```
//! use catalog_provider::{DataProvider, ListParams, MemoryProvider, ProviderConfig};
//! use futures::executor::block_on;
//!
//! let provider = MemoryProvider::from_json_str(
//!     ProviderConfig::default(),
//!     r#"[
//!         {"id": 1, "code": "CS201", "department": "CS"},
//!         {"id": 2, "code": "MATH101", "department": "MATH"},
//!         {"id": 3, "code": "CS101", "department": "CS"}
//!     ]"#,
//! )?;
//!
//! let params = ListParams::from_json_str(r#"{
//!     "resource": "subjects",
//!     "pagination": {"currentPage": 1, "pageSize": 10},
//!     "filters": [{"field": "department", "operator": "eq", "value": "CS"}],
//!     "sorters": [{"field": "code", "order": "asc"}]
//! }"#)?;
//!
//! let response = block_on(provider.get_list(&params))?;
//! assert_eq!(response.total, 2);
//! assert_eq!(response.data[0]["code"], "CS101");
//! # Ok::<(), catalog_provider::ProviderError>(())
//! ```
//!
//! ## Behavior at the edges
//!
//! - A request for a resource the provider does not serve returns
//!   `{data: [], total: 0}`, not an error.
//! - `get_one`, `create`, `update` and `delete_one` always fail with
//!   [`ProviderError::NotImplemented`].
//! - The provider never logs through a subscriber of its own; events are
//!   emitted with `tracing` at `debug` level.

mod config;
mod error;
mod provider;
mod request;
mod response;

pub use config::{ProviderConfig, DEFAULT_RESOURCE};
pub use error::{ProviderError, Result};
pub use provider::{DataProvider, MemoryProvider};
pub use request::ListParams;
pub use response::ListResponse;

pub use catalog_query;
