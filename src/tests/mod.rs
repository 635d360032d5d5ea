
mod text;
mod stats;
mod schema;
