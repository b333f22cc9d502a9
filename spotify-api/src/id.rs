//! Conversion between public base-62 IDs and internal hex GIDs.
//!
//! Spotify exposes resources through a 22-character base-62 ID
//! (`open.spotify.com/track/6rqhFgbbKwnb9MLmUQDhG6`). Internal endpoints such
//! as `/metadata/4/track/{gid}` and the file IDs inside them use the same
//! 128-bit value written as 32 lowercase hex characters.
//!
//! The base-62 alphabet is digits, then lowercase, then uppercase.

use crate::error::{Result, SpotifyError};

const BASE62_ALPHABET: &[u8; 62] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Width of a public ID after zero padding.
pub const PUBLIC_ID_LEN: usize = 22;
/// Width of an internal GID after zero padding.
pub const GID_LEN: usize = 32;

/// Decode a public base-62 ID into a 32-character lowercase hex GID.
pub fn to_internal(public_id: &str) -> Result<String> {
    if public_id.is_empty() {
        return Err(invalid(public_id, "empty identifier"));
    }
    let mut value: u128 = 0;
    for byte in public_id.bytes() {
        let digit =
            base62_value(byte).ok_or_else(|| invalid(public_id, "not a base-62 character"))?;
        value = value
            .checked_mul(62)
            .and_then(|v| v.checked_add(u128::from(digit)))
            .ok_or_else(|| invalid(public_id, "value exceeds 128 bits"))?;
    }
    Ok(format!("{value:0width$x}", width = GID_LEN))
}

/// Encode a hex GID as a 22-character public base-62 ID.
///
/// Upper- and lowercase hex are both accepted.
pub fn to_public(gid: &str) -> Result<String> {
    if gid.is_empty() {
        return Err(invalid(gid, "empty identifier"));
    }
    if !gid.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid(gid, "not a hex character"));
    }
    let mut value =
        u128::from_str_radix(gid, 16).map_err(|_| invalid(gid, "value exceeds 128 bits"))?;

    let mut digits = Vec::with_capacity(PUBLIC_ID_LEN);
    while value > 0 {
        // remainder is always < 62
        #[allow(clippy::cast_possible_truncation)]
        digits.push(BASE62_ALPHABET[(value % 62) as usize]);
        value /= 62;
    }
    while digits.len() < PUBLIC_ID_LEN {
        digits.push(b'0');
    }
    digits.reverse();
    Ok(digits.into_iter().map(char::from).collect())
}

fn base62_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'z' => Some(byte - b'a' + 10),
        b'A'..=b'Z' => Some(byte - b'A' + 36),
        _ => None,
    }
}

fn invalid(input: &str, reason: &'static str) -> SpotifyError {
    SpotifyError::InvalidIdentifier {
        input: input.to_owned(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACK_ID: &str = "4uLU6hMCjMI75M1A2tKUQC";
    const TRACK_GID: &str = "93bc414a606747b2b612491ef83d5a3e";

    #[test]
    fn known_pair_converts_both_ways() {
        assert_eq!(to_internal(TRACK_ID).unwrap(), TRACK_GID);
        assert_eq!(to_public(TRACK_GID).unwrap(), TRACK_ID);
        assert_eq!(to_internal(&to_public(TRACK_GID).unwrap()).unwrap(), TRACK_GID);
    }

    #[test]
    fn output_widths_are_fixed() {
        for id in ["0", "1", "Z", "zzzzzz", TRACK_ID, "7ouMYWpwJ422jRcDASZB7P"] {
            let gid = to_internal(id).unwrap();
            assert_eq!(gid.len(), GID_LEN);
            assert!(gid.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
            assert_eq!(to_public(&gid).unwrap().len(), PUBLIC_ID_LEN);
        }
    }

    #[test]
    fn zero_pads_small_values() {
        assert_eq!(to_internal("0").unwrap(), "0".repeat(32));
        assert_eq!(to_internal("a").unwrap(), format!("{}a", "0".repeat(31)));
        assert_eq!(to_public("0").unwrap(), "0".repeat(22));
        assert_eq!(to_public("3e").unwrap(), format!("{}10", "0".repeat(20)));
        assert_eq!(to_internal("zzzzzz").unwrap(), "00000000000000000000000796887fe1");
    }

    #[test]
    fn max_gid_round_trips() {
        let max = "f".repeat(32);
        let public = to_public(&max).unwrap();
        assert_eq!(public.len(), 22);
        assert_eq!(to_internal(&public).unwrap(), max);
    }

    #[test]
    fn public_ids_round_trip() {
        for id in [
            "0000000000000000000000",
            "6rqhFgbbKwnb9MLmUQDhG6",
            "1A2GTWGtFfWp7KSQTwWOyo",
            "37i9dQZF1DXcBWIGoYBM5M",
            "7ouMYWpwJ422jRcDASZB7P",
        ] {
            assert_eq!(to_public(&to_internal(id).unwrap()).unwrap(), id);
        }
    }

    #[test]
    fn uppercase_hex_is_accepted() {
        let lower = to_public(TRACK_GID).unwrap();
        let upper = to_public(&TRACK_GID.to_uppercase()).unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn rejects_out_of_alphabet_public_id() {
        for bad in ["", "abc-def", "4uLU6hMCjMI75M1A2tKUQ!", "spotify:track:x", " 4uLU"] {
            let err = to_internal(bad).unwrap_err();
            assert!(matches!(err, SpotifyError::InvalidIdentifier { .. }), "{bad:?}");
        }
    }

    #[test]
    fn rejects_public_id_over_128_bits() {
        let err = to_internal(&"Z".repeat(22)).unwrap_err();
        assert!(matches!(
            err,
            SpotifyError::InvalidIdentifier { reason: "value exceeds 128 bits", .. }
        ));
    }

    #[test]
    fn rejects_bad_gid() {
        let too_wide = "f".repeat(33);
        for bad in ["", "xyz", "+1", "-1", "0x1f", too_wide.as_str()] {
            let err = to_public(bad).unwrap_err();
            assert!(matches!(err, SpotifyError::InvalidIdentifier { .. }), "{bad:?}");
        }
    }

    #[test]
    fn leading_zero_gid_of_any_width_is_accepted() {
        let padded = format!("{}{TRACK_GID}", "0".repeat(8));
        assert_eq!(to_public(&padded).unwrap(), TRACK_ID);
    }
}
