mod provider_ids;

pub use provider_ids::{ProviderIds, IMDB_KEY};
