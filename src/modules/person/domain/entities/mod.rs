pub mod canonical_person;

pub use canonical_person::{CanonicalPerson, CastMember};
