pub mod date_parser;
pub mod fallback;
pub mod logger;
pub mod validation;

pub use date_parser::{parse_iso_instant, utc_midnight};
pub use fallback::{first_non_blank, first_parseable, first_positive, is_blank};
pub use logger::{init_logger, LogContext};
pub use validation::Validator;
