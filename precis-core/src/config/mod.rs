//! Configuration for text processing.
//!
//! Configuration can come from three places, applied in this order:
//! built-in defaults, a JSON file, then `PRECIS_*` environment variables.

pub mod processor;

pub use processor::{
    DEFAULT_MAX_KEYWORDS, DEFAULT_MIN_KEYWORD_LENGTH, DEFAULT_STOP_WORDS, ENV_PREFIX,
    OVERRIDE_KEYS, ProcessorConfig,
};
