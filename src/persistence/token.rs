//! Share token codec
//!
//! `{form, theme}` → JSON → UTF-8 bytes → URL-safe base64 (no padding).
//! Decoding also accepts percent-encoded standard base64, the format older
//! share links were produced in.

use anyhow::{Context, Result};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde_json::Value;

use super::{DecodeError, SharePayload};

pub fn encode_token(payload: &SharePayload) -> Result<String> {
    let json = serde_json::to_vec(payload).context("Failed to serialize share payload")?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

pub fn decode_token(token: &str) -> Result<SharePayload, DecodeError> {
    let token = token.trim().trim_start_matches('#');
    if token.is_empty() {
        return Err(DecodeError::Empty);
    }

    let unescaped = urlencoding::decode(token).map_err(DecodeError::Percent)?;
    let normalized: String = unescaped
        .chars()
        .filter(|c| *c != '=' && !c.is_whitespace())
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .collect();

    let bytes = URL_SAFE_NO_PAD.decode(normalized.as_bytes())?;
    let json = String::from_utf8(bytes).map_err(DecodeError::Utf8)?;
    let value: Value = serde_json::from_str(&json)?;
    SharePayload::from_value(value)
}
