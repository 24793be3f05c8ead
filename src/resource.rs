//! Host-facing resource contract
//!
//! A readiness host registers [`ResourceConfig`] descriptors, builds resources
//! through their factory and polls [`Resource::test`] until it succeeds.

use crate::context::Context;
use crate::error::Result;
use async_trait::async_trait;
use url::Url;

/// A dependency that can be checked for readiness
#[async_trait]
pub trait Resource: Send + Sync {
    /// Run one readiness check bounded by `ctx`
    async fn test(&self, ctx: &Context) -> Result<()>;
}

/// Builds a resource from a parsed URL; `None` stands for an absent URL
pub type ResourceFactory = fn(Option<Url>) -> Result<Box<dyn Resource>>;

/// Registration descriptor pairing scheme tokens with a factory
#[derive(Debug, Clone)]
pub struct ResourceConfig {
    /// Scheme tokens this resource answers for
    pub schemes: Vec<&'static str>,
    /// Resource constructor
    pub factory: ResourceFactory,
}

impl ResourceConfig {
    /// Whether `scheme` is one of the registered tokens
    #[must_use]
    pub fn supports(&self, scheme: &str) -> bool {
        self.schemes.iter().any(|s| s.eq_ignore_ascii_case(scheme))
    }

    /// Invoke the factory
    pub fn create(&self, url: Option<Url>) -> Result<Box<dyn Resource>> {
        (self.factory)(url)
    }
}
