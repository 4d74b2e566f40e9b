//
//  harbor-cli
//  api/common/path.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Path segment encoding
//!
//! The transport appends paths to the base address verbatim, so every
//! caller-supplied segment is percent-encoded here first.
//!
//! Harbor's router decodes the path once before matching, which means a
//! repository name containing `/` (for example `library/nginx/alpine` inside
//! project `library` is the repository `nginx/alpine`) must be encoded twice:
//! `nginx/alpine` travels as `nginx%252Falpine`.

use std::borrow::Cow;

/// Percent-encodes a single path segment.
///
/// ```rust
/// use harbor_cli::api::common::encode_segment;
///
/// assert_eq!(encode_segment("library"), "library");
/// assert_eq!(encode_segment("sha256:abc"), "sha256%3Aabc");
/// ```
pub fn encode_segment(segment: &str) -> Cow<'_, str> {
    urlencoding::encode(segment)
}

/// Encodes a repository name for use inside a project-scoped path.
///
/// ```rust
/// use harbor_cli::api::common::encode_repository;
///
/// assert_eq!(encode_repository("nginx"), "nginx");
/// assert_eq!(encode_repository("team/nginx"), "team%252Fnginx");
/// ```
pub fn encode_repository(name: &str) -> String {
    urlencoding::encode(&urlencoding::encode(name)).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_segment_reserved_characters() {
        assert_eq!(encode_segment("a b"), "a%20b");
        assert_eq!(encode_segment("a/b"), "a%2Fb");
        assert_eq!(encode_segment("v1.0_rc-1~x"), "v1.0_rc-1~x");
    }

    #[test]
    fn test_encode_repository_is_double_encoded() {
        assert_eq!(encode_repository("a/b/c"), "a%252Fb%252Fc");
        assert_eq!(encode_repository("plain"), "plain");
    }
}
