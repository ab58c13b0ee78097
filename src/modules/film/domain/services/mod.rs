pub mod premiere_date_resolver;

pub use premiere_date_resolver::{PremiereCandidates, PremiereDateResolver};
