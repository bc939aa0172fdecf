//! Stack detection
//!
//! [`Evidence`] gathers what is known about a project, [`StackDetector`]
//! classifies it into a [`StackProfile`].

pub mod detector;
pub mod evidence;
pub mod patterns;
pub mod profile;

pub use detector::StackDetector;
pub use evidence::{Evidence, EvidenceError};
pub use profile::StackProfile;
