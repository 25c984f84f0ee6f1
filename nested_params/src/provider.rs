//! Figment integration for parameter trees.
//!
//! A [`Parameters`] tree is a [`Provider`], so parsed or merged parameters can
//! be layered over other Figment sources and extracted into typed
//! configuration.

use figment::{
    Metadata, Profile, Provider,
    error::Error,
    providers::Serialized,
    value::{Dict, Map},
};

use crate::Parameters;

impl Provider for Parameters {
    fn metadata(&self) -> Metadata {
        Metadata::named("nested parameters")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        Serialized::defaults(self).data()
    }
}
