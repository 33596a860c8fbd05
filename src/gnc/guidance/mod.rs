pub mod descent_profile;

pub use descent_profile::DescentProfile;
