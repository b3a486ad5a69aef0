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

//! Core components shared by the s3canon crates.
//!
//! This crate carries the pieces that every service crate needs but that are
//! not tied to a particular storage provider:
//!
//! - [`Error`], [`ErrorKind`] and [`Result`]: the error type returned by the
//!   fallible parts of the workspace (endpoint parsing, configuration loading).
//! - [`Context`] and [`Env`]: an injectable environment used when loading
//!   configuration, so tests can run against a [`StaticEnv`] instead of the
//!   process environment.
//!
//! ## Example
//!
//! ```
//! use std::collections::HashMap;
//! use s3canon_core::{Context, StaticEnv};
//!
//! let ctx = Context::new().with_env(StaticEnv {
//!     envs: HashMap::from([("S3CANON_ENDPOINT".to_string(), "https://s3.amazonaws.com".to_string())]),
//! });
//!
//! assert_eq!(
//!     ctx.env_var("S3CANON_ENDPOINT").as_deref(),
//!     Some("https://s3.amazonaws.com")
//! );
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod context;
pub use context::Context;
pub use context::Env;
pub use context::NoopEnv;
pub use context::OsEnv;
pub use context::StaticEnv;

mod error;
pub use error::{Error, ErrorKind, Result};
