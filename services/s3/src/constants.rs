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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Env values used to configure s3canon.
pub const S3CANON_ENDPOINT: &str = "S3CANON_ENDPOINT";
pub const S3CANON_BUCKET_LOOKUP: &str = "S3CANON_BUCKET_LOOKUP";

// Hosts of well-known storage services.
pub const AMAZON_S3_HOST: &str = "s3.amazonaws.com";
pub const AMAZON_S3_CHINA_HOST: &str = "s3.cn-north-1.amazonaws.com.cn";
pub const AMAZON_S3_GOV_CLOUD_HOST: &str = "s3-us-gov-west-1.amazonaws.com";
pub const AMAZON_S3_FIPS_GOV_CLOUD_HOST: &str = "s3-fips-us-gov-west-1.amazonaws.com";
pub const GOOGLE_STORAGE_HOST: &str = "storage.googleapis.com";

/// AsciiSet for S3 object paths.
///
/// - URI encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', '~' and '/'.
pub static S3_PATH_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// AsciiSet for S3 query names and values.
///
/// Same as [`S3_PATH_ENCODE_SET`], but '/' is encoded as `%2F`.
pub static S3_QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

// Characters never allowed in a domain name.
pub const DOMAIN_DISALLOWED_CHARS: &str = "`~!@#$%^&*()+={}[]|\\\"';:><?/";

// Characters a domain name can neither start nor end with.
pub const DOMAIN_DISALLOWED_EDGE_CHARS: [char; 3] = ['-', '_', '.'];

pub const DOMAIN_MAX_LEN: usize = 255;
