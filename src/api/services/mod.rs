pub mod lookup;

pub use lookup::{ErrorResponse, FullResponse, IpResponse, LookupService, lookup_routes};
