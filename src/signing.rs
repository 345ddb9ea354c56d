//! URL signing
//!
//! Signed URLs carry `base64url(HMAC-SHA1(key, operation_path + "/" + image_path))`
//! in place of the `unsafe` marker. The encoding keeps `=` padding, so the
//! output equals standard base64 with `+` replaced by `-` and `/` by `_`.

use base64::{engine::general_purpose::URL_SAFE, Engine};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::error::ThumborError;

type HmacSha1 = Hmac<Sha1>;

/// Sign the data portion of a URL
///
/// # Arguments
/// * `key` - Shared secret configured on the proxy
/// * `data` - Everything after the signature segment, e.g. `300x200/img.jpg`
///
/// # Returns
/// * URL-safe base64 signature (padded)
pub fn sign(key: &[u8], data: &str) -> Result<String, ThumborError> {
    let digest = compute_hmac_signature(key, data)?;
    Ok(URL_SAFE.encode(digest))
}

/// Check a signature produced by [`sign`]
///
/// Returns false on any mismatch, including when the key is rejected.
pub fn verify_signature(signature: &str, key: &[u8], data: &str) -> bool {
    match sign(key, data) {
        Ok(expected) => constant_time_compare(signature, &expected),
        Err(_) => false,
    }
}

fn compute_hmac_signature(key: &[u8], data: &str) -> Result<Vec<u8>, ThumborError> {
    let mut mac =
        HmacSha1::new_from_slice(key).map_err(|e| ThumborError::signing(e.to_string()))?;
    mac.update(data.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Constant-time string comparison to prevent timing attacks
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}
