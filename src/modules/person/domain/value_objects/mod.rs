mod person_type;

pub use person_type::PersonType;
