pub mod coordinates;
pub mod location;
pub mod response;
pub mod snapshot;
pub mod timeline;
