pub mod profile;

pub use profile::ProfileUpdate;
