//! Endpoint descriptors and the requests built from them.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::request::{DefaultPayload, HttpMethod, Payload, QueryParams};

/// Numeric identifier used in path templates.
pub type Id = i64;

/// Freshness window for responses of endpoints that opt into caching.
pub const RESPONSE_CACHE_MAX_AGE: Duration = Duration::from_secs(15 * 60);

/// What the caller receives on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseShape {
    /// Only the decoded JSON body.
    #[default]
    Body,
    /// The full transport response (status, headers, body).
    Raw,
}

/// Response caching for a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CachePolicy {
    /// Always hit the network.
    #[default]
    Disabled,
    /// Serve successful GET responses from cache while younger than `max_age`.
    Fresh {
        /// How long a cached response stays valid.
        max_age: Duration,
    },
}

impl CachePolicy {
    /// The fixed 15-minute policy used by the catalog.
    pub const FIFTEEN_MINUTES: Self = Self::Fresh {
        max_age: RESPONSE_CACHE_MAX_AGE,
    };

    /// Returns the freshness window, if caching is enabled.
    #[must_use]
    pub const fn max_age(self) -> Option<Duration> {
        match self {
            Self::Disabled => None,
            Self::Fresh { max_age } => Some(max_age),
        }
    }
}

/// Who reacts to a failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorHandling {
    /// Failures trigger the global modal/navigation side effects.
    #[default]
    Global,
    /// The caller handles failures itself; no global side effect runs.
    Local,
}

/// Per-call transport options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CallOptions {
    /// Response caching.
    pub cache: CachePolicy,
    /// Global or local error handling.
    pub error_handling: ErrorHandling,
}

impl CallOptions {
    /// No caching, global error handling.
    pub const DEFAULT: Self = Self {
        cache: CachePolicy::Disabled,
        error_handling: ErrorHandling::Global,
    };

    /// 15-minute cache, global error handling.
    pub const CACHED: Self = Self {
        cache: CachePolicy::FIFTEEN_MINUTES,
        error_handling: ErrorHandling::Global,
    };

    /// No caching, failures handled at the call site.
    pub const LOCAL_ERRORS: Self = Self {
        cache: CachePolicy::Disabled,
        error_handling: ErrorHandling::Local,
    };
}

/// How an endpoint turns path parameters into a path.
#[derive(Debug, Clone, Copy)]
pub enum PathTemplate<A> {
    /// A literal path.
    Static(&'static str),
    /// A path computed from typed parameters.
    Dynamic(fn(&A) -> String),
}

/// Declarative description of one server operation.
///
/// `A` is the type of the path parameters: `()` for literal paths, a single
/// value or a tuple otherwise.
#[derive(Debug, Clone, Copy)]
pub struct Endpoint<A = ()> {
    name: &'static str,
    path: PathTemplate<A>,
    method: HttpMethod,
    defaults: DefaultPayload,
    shape: ResponseShape,
    options: CallOptions,
}

impl Endpoint<()> {
    /// A GET endpoint on a literal path.
    #[must_use]
    pub const fn at(name: &'static str, path: &'static str) -> Self {
        Self::with_template(name, PathTemplate::Static(path))
    }
}

impl<A> Endpoint<A> {
    /// A GET endpoint whose path is built from parameters.
    #[must_use]
    pub const fn new(name: &'static str, path: fn(&A) -> String) -> Self {
        Self::with_template(name, PathTemplate::Dynamic(path))
    }

    const fn with_template(name: &'static str, path: PathTemplate<A>) -> Self {
        Self {
            name,
            path,
            method: HttpMethod::Get,
            defaults: &[],
            shape: ResponseShape::Body,
            options: CallOptions::DEFAULT,
        }
    }

    /// Sets the HTTP method.
    #[must_use]
    pub const fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Shorthand for `method(HttpMethod::Post)`.
    #[must_use]
    pub const fn post(self) -> Self {
        self.method(HttpMethod::Post)
    }

    /// Shorthand for `method(HttpMethod::Put)`.
    #[must_use]
    pub const fn put(self) -> Self {
        self.method(HttpMethod::Put)
    }

    /// Shorthand for `method(HttpMethod::Delete)`.
    #[must_use]
    pub const fn delete(self) -> Self {
        self.method(HttpMethod::Delete)
    }

    /// Sets the default payload merged under caller payloads.
    #[must_use]
    pub const fn defaults(mut self, defaults: DefaultPayload) -> Self {
        self.defaults = defaults;
        self
    }

    /// Callers receive the full transport response.
    #[must_use]
    pub const fn raw(mut self) -> Self {
        self.shape = ResponseShape::Raw;
        self
    }

    /// Sets per-call transport options.
    #[must_use]
    pub const fn options(mut self, options: CallOptions) -> Self {
        self.options = options;
        self
    }

    /// Logical operation name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// HTTP method.
    #[must_use]
    pub const fn http_method(&self) -> HttpMethod {
        self.method
    }

    /// Default payload entries.
    #[must_use]
    pub const fn default_payload(&self) -> DefaultPayload {
        self.defaults
    }

    /// Registered response shape.
    #[must_use]
    pub const fn shape(&self) -> ResponseShape {
        self.shape
    }

    /// Registered call options.
    #[must_use]
    pub const fn call_options(&self) -> CallOptions {
        self.options
    }

    /// Renders the path for the given parameters.
    #[must_use]
    pub fn path(&self, args: &A) -> String {
        match self.path {
            PathTemplate::Static(path) => path.to_string(),
            PathTemplate::Dynamic(build) => build(args),
        }
    }

    /// Binds path parameters, producing a request that can be sent any
    /// number of times.
    #[must_use]
    pub fn request(&self, args: A) -> ApiRequest {
        ApiRequest {
            name: self.name,
            method: self.method,
            path: self.path(&args),
            defaults: self.defaults,
            payload: None,
            shape: self.shape,
            options: self.options,
        }
    }
}

/// A concrete call to one endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    name: &'static str,
    method: HttpMethod,
    path: String,
    defaults: DefaultPayload,
    payload: Option<Payload>,
    shape: ResponseShape,
    options: CallOptions,
}

impl ApiRequest {
    /// Attaches the caller payload.
    #[must_use]
    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Overrides the cache policy for this call only.
    #[must_use]
    pub const fn with_cache(mut self, cache: CachePolicy) -> Self {
        self.options.cache = cache;
        self
    }

    /// Logical operation name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Response shape handed back to the caller.
    #[must_use]
    pub const fn shape(&self) -> ResponseShape {
        self.shape
    }

    /// Call options.
    #[must_use]
    pub const fn options(&self) -> CallOptions {
        self.options
    }

    /// The caller payload, if any.
    #[must_use]
    pub const fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    /// Path relative to the API host, including the query string for GET
    /// requests with a non-empty payload.
    #[must_use]
    pub fn target(&self) -> String {
        match &self.payload {
            Some(payload) if self.method.uses_query_string() && !payload.is_empty() => {
                let query = QueryParams::from_payload(payload).to_query_string();
                format!("{}?{query}", self.path)
            }
            _ => self.path.clone(),
        }
    }

    /// JSON body for non-GET requests: defaults overlaid by the caller payload.
    #[must_use]
    pub fn body(&self) -> Option<Payload> {
        if self.method.uses_query_string() {
            None
        } else {
            Some(Payload::over_defaults(self.payload.as_ref(), self.defaults))
        }
    }
}

/// Joins an API host and a relative path with exactly one slash between them.
#[must_use]
pub fn join_url(base: &str, target: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        target.trim_start_matches('/')
    )
}
