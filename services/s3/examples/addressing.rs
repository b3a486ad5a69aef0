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

//! Print the addressing style and canonical request parts for a bucket.
//!
//! ```shell
//! S3CANON_ENDPOINT=https://s3.amazonaws.com cargo run --example addressing -- my-bucket "photos/summer 2024.jpg"
//! ```

use anyhow::Result;
use s3canon_core::{Context, OsEnv};
use s3canon_s3::{encode_path, is_virtual_host_style, Config, QueryParams};

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let mut args = std::env::args().skip(1);
    let bucket = args.next().unwrap_or_default();
    let object = args.next().unwrap_or_default();

    let ctx = Context::new().with_env(OsEnv);
    let cfg = Config::default().from_env(&ctx);
    let endpoint = cfg.endpoint()?;
    let lookup = cfg.bucket_lookup()?;

    let virtual_host = is_virtual_host_style(lookup, endpoint.as_ref(), &bucket);
    println!(
        "style: {}",
        if virtual_host { "virtual-host" } else { "path" }
    );

    let path = if virtual_host || bucket.is_empty() {
        format!("/{object}")
    } else {
        format!("/{bucket}/{object}")
    };
    println!("path: {}", encode_path(&path));

    let mut query = QueryParams::new();
    query.add("list-type", "2").add("prefix", object.as_str());
    println!("query: {}", query.encode());

    Ok(())
}
