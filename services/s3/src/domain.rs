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

//! Syntactic checks for host names and IP literals.

use std::net::IpAddr;

use crate::constants::*;

/// Check whether `host` looks like a valid domain name.
///
/// The check is deliberately permissive (see RFC 1035 and RFC 3696 for the
/// full rules): surrounding whitespace is ignored, the host must be 1 to 255
/// bytes long, must not start or end with `-`, `_` or `.`, and must not contain
/// any of the characters in [`DOMAIN_DISALLOWED_CHARS`]. Label lengths and
/// character classes are left for the remote service to reject.
pub fn is_valid_domain(host: &str) -> bool {
    let host = host.trim();
    if host.is_empty() || host.len() > DOMAIN_MAX_LEN {
        return false;
    }

    if host.starts_with(DOMAIN_DISALLOWED_EDGE_CHARS)
        || host.ends_with(DOMAIN_DISALLOWED_EDGE_CHARS)
    {
        return false;
    }

    !host.contains(|c: char| DOMAIN_DISALLOWED_CHARS.contains(c))
}

/// Check whether `ip` is a syntactically valid IPv4 or IPv6 literal.
pub fn is_valid_ip(ip: &str) -> bool {
    ip.parse::<IpAddr>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("good.example.com", true; "plain domain")]
    #[test_case("  s3.amazonaws.com\t", true; "surrounding whitespace")]
    #[test_case("localhost", true; "single label")]
    #[test_case("under_score.example.com", true; "inner underscore")]
    #[test_case("", false; "empty")]
    #[test_case("   ", false; "only whitespace")]
    #[test_case("-bad.com", false; "leading dash")]
    #[test_case("bad.com-", false; "trailing dash")]
    #[test_case("_bad.com", false; "leading underscore")]
    #[test_case("bad.com_", false; "trailing underscore")]
    #[test_case(".bad.com", false; "leading dot")]
    #[test_case("bad.com.", false; "trailing dot")]
    #[test_case("bad host.com", true; "inner space is not checked")]
    #[test_case("bad@host.com", false; "at sign")]
    #[test_case("bad/host.com", false; "slash")]
    #[test_case("bad\\host.com", false; "backslash")]
    #[test_case("bad:9000", false; "port separator")]
    #[test_case("bad\"host", false; "double quote")]
    #[test_case("bad'host", false; "single quote")]
    #[test_case("bad`host", false; "backtick")]
    fn test_is_valid_domain(host: &str, expected: bool) {
        assert_eq!(is_valid_domain(host), expected);
    }

    #[test]
    fn test_is_valid_domain_length() {
        let max = "a".repeat(DOMAIN_MAX_LEN);
        assert!(is_valid_domain(&max));

        let too_long = "a".repeat(DOMAIN_MAX_LEN + 1);
        assert!(!is_valid_domain(&too_long));
    }

    #[test_case("192.168.1.1", true; "ipv4")]
    #[test_case("0.0.0.0", true; "ipv4 unspecified")]
    #[test_case("::1", true; "ipv6 loopback")]
    #[test_case("2001:db8::8a2e:370:7334", true; "ipv6")]
    #[test_case("::ffff:192.168.1.1", true; "ipv4 mapped ipv6")]
    #[test_case("256.1.1.1", false; "octet out of range")]
    #[test_case("1.1.1", false; "too few octets")]
    #[test_case("[::1]", false; "bracketed ipv6")]
    #[test_case("example.com", false; "domain")]
    #[test_case("", false; "empty")]
    fn test_is_valid_ip(ip: &str, expected: bool) {
        assert_eq!(is_valid_ip(ip), expected);
    }
}
