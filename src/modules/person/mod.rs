pub mod domain;

pub use domain::{CanonicalPerson, CastMember, PersonType};
