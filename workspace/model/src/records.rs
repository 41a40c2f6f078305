pub mod demand;
pub mod financial;
pub mod location;
pub mod scenario;
