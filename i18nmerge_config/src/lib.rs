mod schema;

pub use schema::{Config, PathsConfig};
