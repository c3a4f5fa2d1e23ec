//! Package synthesis.
//!
//! Combines flight and hotel offers into priced travel packages and gives
//! each one a self-describing identifier: the token embeds everything needed
//! to rebuild the package later, so no package row is ever persisted and no
//! provider call is needed on reconstruction.

pub mod models;
pub mod synthesizer;
pub mod token;

pub use models::TravelPackage;
pub use synthesizer::PackageSynthesizer;
pub use token::{PackageError, PackageToken, TOKEN_VERSION};
