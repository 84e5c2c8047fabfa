//! Reading objects from the cluster
//!
//! Commands talk to the API server only through the [`Cluster`] trait, which
//! hands back object bodies as untyped [`Attr`] trees. [`KubeCluster`] is the
//! real implementation; tests substitute an in-memory one.
//!
//! Every call is a single request bounded by the request timeout. Nothing is
//! retried.

mod fetch_error;
mod kube_cluster;
mod resource_kind;

pub use fetch_error::FetchError;
pub use kube_cluster::{ConnectOptions, KubeCluster};
pub use resource_kind::ResourceKind;

use crate::tree::Attr;

/// Log target for cluster access
const LOG_TARGET: &str = "   cluster";

/// Read access to cluster objects.
pub trait Cluster {
    /// Fetch one object by name. `namespace` is ignored for cluster-scoped kinds.
    fn fetch(
        &self,
        kind: &ResourceKind,
        name: &str,
        namespace: Option<&str>,
    ) -> impl Future<Output = Result<Attr, FetchError>> + Send;

    /// List every object of a kind, across all namespaces for namespaced kinds.
    fn list(&self, kind: &ResourceKind) -> impl Future<Output = Result<Vec<Attr>, FetchError>> + Send;
}
