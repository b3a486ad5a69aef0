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

//! Canonical encoding and endpoint classification for S3-compatible services.
//!
//! - [`is_valid_domain`] and [`is_valid_ip`] check host names and IP literals.
//! - [`is_virtual_host_supported`] and the `is_*_endpoint` functions classify
//!   an [`Endpoint`] against the well-known services in [`KnownEndpoint`].
//! - [`encode_path`] and [`query_encode`] produce the percent-encoded path and
//!   canonical query string of a request.
//! - [`Config`] and [`is_virtual_host_style`] pick the bucket addressing style.
//!
//! ## Example
//!
//! ```
//! use s3canon_s3::{encode_path, is_virtual_host_supported, query_encode, Endpoint};
//!
//! let endpoint = Endpoint::parse("https://s3.amazonaws.com")?;
//! assert!(is_virtual_host_supported(Some(&endpoint), "my-bucket"));
//! assert!(!is_virtual_host_supported(Some(&endpoint), "my.bucket"));
//!
//! assert_eq!(encode_path("/photos/summer 2024.jpg"), "/photos/summer%202024.jpg");
//! assert_eq!(query_encode([("prefix", ["a/b"])]), "prefix=a%2Fb");
//! # Ok::<(), s3canon_core::Error>(())
//! ```

mod constants;
pub use constants::S3CANON_BUCKET_LOOKUP;
pub use constants::S3CANON_ENDPOINT;
pub use constants::S3_PATH_ENCODE_SET;
pub use constants::S3_QUERY_ENCODE_SET;

mod config;
pub use config::is_virtual_host_style;
pub use config::BucketLookup;
pub use config::Config;

mod domain;
pub use domain::is_valid_domain;
pub use domain::is_valid_ip;

mod encode;
pub use encode::encode_path;
pub use encode::encode_path_bytes;
pub use encode::encode_query_component;
pub use encode::query_encode;
pub use encode::query_encode_opt;

mod endpoint;
pub use endpoint::is_amazon_china_endpoint;
pub use endpoint::is_amazon_endpoint;
pub use endpoint::is_amazon_fips_gov_cloud_endpoint;
pub use endpoint::is_amazon_gov_cloud_endpoint;
pub use endpoint::is_google_endpoint;
pub use endpoint::is_virtual_host_supported;
pub use endpoint::Endpoint;
pub use endpoint::KnownEndpoint;

mod query;
pub use query::QueryParams;
