// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::debug;
use s3canon_core::{Context, Error, Result};

use crate::constants::*;
use crate::endpoint::{is_virtual_host_supported, Endpoint};

/// How buckets are addressed in requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BucketLookup {
    /// Use virtual-host style when the endpoint is known to support it.
    #[default]
    Auto,
    /// Always use virtual-host style: `bucket.host/object`.
    Dns,
    /// Always use path style: `host/bucket/object`.
    Path,
}

impl FromStr for BucketLookup {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(BucketLookup::Auto),
            "dns" | "virtual" | "virtual-host" => Ok(BucketLookup::Dns),
            "path" => Ok(BucketLookup::Path),
            v => Err(Error::config_invalid(format!(
                "unknown bucket lookup {v}, expected one of auto, dns, path"
            ))),
        }
    }
}

impl Display for BucketLookup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BucketLookup::Auto => write!(f, "auto"),
            BucketLookup::Dns => write!(f, "dns"),
            BucketLookup::Path => write!(f, "path"),
        }
    }
}

/// Config carries how requests address S3-compatible services.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`S3CANON_ENDPOINT`]
    pub endpoint: Option<String>,
    /// `bucket_lookup` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`S3CANON_BUCKET_LOOKUP`]
    /// - default to `auto`
    pub bucket_lookup: Option<String>,
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(S3CANON_ENDPOINT) {
            self.endpoint.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(S3CANON_BUCKET_LOOKUP) {
            self.bucket_lookup.get_or_insert(v);
        }
        self
    }

    /// Parse the configured endpoint.
    ///
    /// Returns `Ok(None)` if no endpoint is configured.
    pub fn endpoint(&self) -> Result<Option<Endpoint>> {
        self.endpoint
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .map(Endpoint::parse)
            .transpose()
    }

    /// Parse the configured bucket lookup, [`BucketLookup::Auto`] if unset.
    pub fn bucket_lookup(&self) -> Result<BucketLookup> {
        match self.bucket_lookup.as_deref() {
            None => Ok(BucketLookup::Auto),
            Some(v) if v.trim().is_empty() => Ok(BucketLookup::Auto),
            Some(v) => v.parse(),
        }
    }
}

/// Decide whether requests for `bucket` should use virtual-host style.
///
/// Requests without a bucket (like listing buckets) always use path style.
pub fn is_virtual_host_style(
    lookup: BucketLookup,
    endpoint: Option<&Endpoint>,
    bucket: &str,
) -> bool {
    if bucket.is_empty() {
        return false;
    }

    let virtual_host = match lookup {
        BucketLookup::Dns => true,
        BucketLookup::Path => false,
        BucketLookup::Auto => is_virtual_host_supported(endpoint, bucket),
    };
    debug!(
        "bucket {bucket} on endpoint {} uses {} style with {lookup} lookup",
        endpoint.map(|v| v.to_string()).unwrap_or_default(),
        if virtual_host { "virtual-host" } else { "path" },
    );
    virtual_host
}
