use super::{Cluster, FetchError, LOG_TARGET, ResourceKind};
use crate::Result;
use crate::tree::Attr;
use camino::Utf8Path;
use core::time::Duration;
use kube::api::{Api, ApiResource, DynamicObject, GroupVersionKind, ListParams};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use ohno::IntoAppError;

/// Where to find cluster credentials.
#[derive(Debug, Clone, Default)]
pub struct ConnectOptions<'a> {
    /// Explicit kubeconfig file; `$KUBECONFIG` or `~/.kube/config` otherwise
    pub kubeconfig: Option<&'a Utf8Path>,

    /// Context to use instead of the kubeconfig's current context
    pub context: Option<&'a str>,

    pub timeout: Duration,
}

/// [`Cluster`] backed by a live API server.
#[derive(Clone)]
pub struct KubeCluster {
    client: Client,
    timeout: Duration,
}

impl core::fmt::Debug for KubeCluster {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KubeCluster").field("timeout", &self.timeout).finish_non_exhaustive()
    }
}

impl KubeCluster {
    /// Build a client from kubeconfig, falling back to in-cluster configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if no usable configuration can be found
    pub async fn connect(options: &ConnectOptions<'_>) -> Result<Self> {
        let kube_options = KubeConfigOptions {
            context: options.context.map(str::to_string),
            ..KubeConfigOptions::default()
        };

        let config = if let Some(path) = options.kubeconfig {
            let kubeconfig = Kubeconfig::read_from(path).into_app_err_with(|| format!("reading kubeconfig '{path}'"))?;
            Config::from_custom_kubeconfig(kubeconfig, &kube_options)
                .await
                .into_app_err_with(|| format!("loading kubeconfig '{path}'"))?
        } else if options.context.is_some() {
            Config::from_kubeconfig(&kube_options).await.into_app_err("loading kubeconfig")?
        } else {
            Config::infer().await.into_app_err("unable to find cluster configuration")?
        };

        log::debug!(target: LOG_TARGET, "Connecting to {}", config.cluster_url);

        let client = Client::try_from(config).into_app_err("creating cluster client")?;
        Ok(Self {
            client,
            timeout: options.timeout,
        })
    }

    fn api(&self, kind: &ResourceKind, namespace: Option<&str>) -> Api<DynamicObject> {
        let gvk = GroupVersionKind::gvk(kind.group, kind.version, kind.kind);
        let resource = ApiResource::from_gvk_with_plural(&gvk, kind.plural);

        match namespace {
            Some(ns) if kind.namespaced => Api::namespaced_with(self.client.clone(), ns, &resource),
            _ => Api::all_with(self.client.clone(), &resource),
        }
    }
}

impl Cluster for KubeCluster {
    async fn fetch(&self, kind: &ResourceKind, name: &str, namespace: Option<&str>) -> Result<Attr, FetchError> {
        log::debug!(target: LOG_TARGET, "Fetching {kind} '{name}'");

        let api = self.api(kind, namespace);
        let object = tokio::time::timeout(self.timeout, api.get(name))
            .await
            .map_err(|_elapsed| FetchError::Timeout)?
            .map_err(classify)?;

        to_attr(object, kind)
    }

    async fn list(&self, kind: &ResourceKind) -> Result<Vec<Attr>, FetchError> {
        log::debug!(target: LOG_TARGET, "Listing {}", kind.qualified_plural());

        let api = self.api(kind, None);
        let list = tokio::time::timeout(self.timeout, api.list(&ListParams::default()))
            .await
            .map_err(|_elapsed| FetchError::Timeout)?
            .map_err(classify)?;

        list.items.into_iter().map(|object| to_attr(object, kind)).collect()
    }
}

fn classify(e: kube::Error) -> FetchError {
    match e {
        kube::Error::Api(response) if response.code == 404 => FetchError::NotFound,
        kube::Error::Api(response) if response.code == 401 || response.code == 403 => FetchError::Forbidden(response.message),
        other => FetchError::Other(Box::new(other)),
    }
}

/// List responses leave out `apiVersion` and `kind` on the items, so fill them in.
fn to_attr(mut object: DynamicObject, kind: &ResourceKind) -> Result<Attr, FetchError> {
    if object.types.is_none() {
        object.types = Some(kube::core::TypeMeta {
            api_version: kind.api_version(),
            kind: kind.kind.to_string(),
        });
    }

    serde_json::to_value(&object)
        .map(Attr::from)
        .map_err(|e| FetchError::Other(Box::new(e)))
}
