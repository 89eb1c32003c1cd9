pub mod model;
pub mod schema;
pub mod session;
