//! Recovery of off-chain authorizations.
//!
//! The backend signs `keccak256(PREFIX ++ keccak256(message))` with a
//! secp256k1 key, where `message` is the XDR encoding of the request tuple.
//! Signers are identified by the last 20 bytes of the keccak hash of their
//! uncompressed public key.

use crate::errors::SaleError;
use k256::{
    elliptic_curve::{point::DecompressPoint, subtle::Choice},
    AffinePoint, FieldBytes,
};
use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env};

pub const SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

pub const SIGNATURE_LENGTH: u32 = 65;

/// secp256k1 group order.
const CURVE_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// Upper bound for `s` in a canonical (low-s) signature.
const HALF_CURVE_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
];

pub fn registration_message(env: &Env, user: &Address, round_id: u32, sale: &Address) -> Bytes {
    (user.clone(), round_id, sale.clone()).to_xdr(env)
}

pub fn participation_message(
    env: &Env,
    user: &Address,
    amount: i128,
    amount_to_burn: i128,
    round_id: u32,
    sale: &Address,
) -> Bytes {
    (user.clone(), amount, amount_to_burn, round_id, sale.clone()).to_xdr(env)
}

/// `PREFIX ++ keccak256(message)`; its keccak hash is the digest that gets signed.
pub fn prefixed_message(env: &Env, message: &Bytes) -> Bytes {
    let hash: BytesN<32> = env.crypto().keccak256(message).into();
    let mut prefixed = Bytes::from_slice(env, SIGNED_MESSAGE_PREFIX);
    prefixed.extend_from_array(&hash.to_array());
    prefixed
}

pub fn signer_from_public_key(env: &Env, public_key: &BytesN<65>) -> BytesN<20> {
    let raw = public_key.to_array();
    let hash: BytesN<32> = env
        .crypto()
        .keccak256(&Bytes::from_slice(env, &raw[1..]))
        .into();
    let hash = hash.to_array();
    let mut signer = [0u8; 20];
    signer.copy_from_slice(&hash[12..]);
    BytesN::from_array(env, &signer)
}

/// Recover the signer of `message`.
///
/// Malformed signatures are errors. A well-formed signature whose `r` or `s`
/// is out of range, or whose `r` is not the x-coordinate of a curve point,
/// yields `None`, which callers treat as unauthorized.
pub fn recover_signer(
    env: &Env,
    message: &Bytes,
    signature: &Bytes,
) -> Result<Option<BytesN<20>>, SaleError> {
    if signature.len() != SIGNATURE_LENGTH {
        return Err(SaleError::InvalidSignatureLength);
    }
    let mut raw = [0u8; 65];
    signature.copy_into_slice(&mut raw);

    let v = raw[64];
    if v != 27 && v != 28 {
        return Err(SaleError::InvalidSignatureFormat);
    }

    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&raw[..32]);
    s.copy_from_slice(&raw[32..64]);
    if !in_range(&r, &CURVE_ORDER, false) || !in_range(&s, &HALF_CURVE_ORDER, true) {
        return Ok(None);
    }
    // the host traps on an unrecoverable point
    if !is_curve_x(&r, v - 27) {
        return Ok(None);
    }

    let mut rs = [0u8; 64];
    rs.copy_from_slice(&raw[..64]);
    let digest = env.crypto().keccak256(&prefixed_message(env, message));
    let public_key = env.crypto().secp256k1_recover(
        &digest,
        &BytesN::from_array(env, &rs),
        u32::from(v - 27),
    );

    Ok(Some(signer_from_public_key(env, &public_key)))
}

fn is_curve_x(r: &[u8; 32], recovery_id: u8) -> bool {
    let x = FieldBytes::clone_from_slice(r);
    AffinePoint::decompress(&x, Choice::from(recovery_id))
        .is_some()
        .into()
}

/// `0 < value < bound`, or `0 < value <= bound` when `inclusive`.
fn in_range(value: &[u8; 32], bound: &[u8; 32], inclusive: bool) -> bool {
    if value.iter().all(|b| *b == 0) {
        return false;
    }
    if inclusive {
        value <= bound
    } else {
        value < bound
    }
}
