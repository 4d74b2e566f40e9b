//
//  harbor-cli
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Harbor's management API accepts HTTP Basic authentication for both local
//! database users and robot accounts. This module derives the `Authorization`
//! header value from a principal (username or robot name) and its credential
//! (password or robot secret).
//!
//! The header is derived on every request rather than cached, so a client
//! never holds a pre-encoded secret.
//!
//! ## Example
//!
//! ```rust
//! use harbor_cli::auth::basic_authorization;
//!
//! let header = basic_authorization("admin", "Harbor12345");
//! assert_eq!(header, "Basic YWRtaW46SGFyYm9yMTIzNDU=");
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Builds the value of a Basic `Authorization` header.
///
/// The principal and credential are joined with a colon and encoded with the
/// standard, padded base64 alphabet.
///
/// # Parameters
///
/// * `principal` - The username or robot account name
/// * `credential` - The password or robot secret
///
/// # Returns
///
/// A string of the form `Basic <encoded>`.
pub fn basic_authorization(principal: &str, credential: &str) -> String {
    let encoded = STANDARD.encode(format!("{principal}:{credential}"));
    format!("Basic {encoded}")
}

/// Masks a secret for display, keeping only a short prefix.
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return String::new();
    }
    let visible: String = secret.chars().take(2).collect();
    format!("{visible}{}", "*".repeat(6))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_basic_authorization(header: &str) -> Option<(String, String)> {
        let encoded = header.strip_prefix("Basic ")?;
        let bytes = STANDARD.decode(encoded.trim()).ok()?;
        let text = String::from_utf8(bytes).ok()?;
        let (principal, credential) = text.split_once(':')?;
        Some((principal.to_string(), credential.to_string()))
    }

    #[test]
    fn test_basic_authorization_encodes_principal_and_credential() {
        assert_eq!(
            basic_authorization("admin", "Harbor12345"),
            "Basic YWRtaW46SGFyYm9yMTIzNDU="
        );
    }

    #[test]
    fn test_basic_authorization_keeps_colons_in_credential() {
        let header = basic_authorization("robot$ci", "a:b:c");
        let (principal, credential) = decode_basic_authorization(&header).unwrap();
        assert_eq!(principal, "robot$ci");
        assert_eq!(credential, "a:b:c");
    }

    #[test]
    fn test_decode_rejects_other_schemes() {
        assert!(decode_basic_authorization("Bearer abc").is_none());
        assert!(decode_basic_authorization("Basic !!!").is_none());
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret(""), "");
        assert_eq!(mask_secret("Harbor12345"), "Ha******");
    }
}
