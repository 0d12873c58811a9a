use crate::constants::*;
use crate::error::RandomnessError;
use anchor_lang::prelude::*;
use blst::min_pk::{PublicKey, Signature};
use blst::BLST_ERROR;
use sha2::{Digest, Sha256};

/// Ciphersuite domain separation tag for min-pk BLS12-381 (pk on G1, sig on G2).
pub const BEACON_DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_NUL_";

/// Checks that `sig` is the beacon's BLS signature over SHA-256(seed).
///
/// BLS signatures are deterministic: once the beacon has published a signature
/// for a seed, the outcome derived from it is fixed. Every failure mode
/// (malformed point, wrong key, wrong message) collapses into `InvalidProof`.
pub fn verify_beacon_signature(sig: &[u8], seed: &[u8], beacon_pubkey: &[u8; 48]) -> Result<()> {
    require!(sig.len() == BEACON_SIG_LEN, RandomnessError::InvalidProof);

    let pubkey =
        PublicKey::from_bytes(beacon_pubkey).map_err(|_| RandomnessError::InvalidProof)?;
    let signature = Signature::from_bytes(sig).map_err(|_| RandomnessError::InvalidProof)?;

    let message: [u8; 32] = Sha256::digest(seed).into();

    match signature.verify(true, &message, BEACON_DST, &[], &pubkey, true) {
        BLST_ERROR::BLST_SUCCESS => Ok(()),
        _ => Err(RandomnessError::InvalidProof.into()),
    }
}

/// SHA-256(sig || be64(timestamp_ms)).
///
/// Folding the settlement timestamp into the digest means replaying the same
/// (sig, seed) pair at a different moment yields a different draw.
pub fn derive_randomness(sig: &[u8], timestamp_ms: u64) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(sig);
    hasher.update(timestamp_ms.to_be_bytes());
    hasher.finalize().into()
}

/// Reduces the first 16 bytes of `rnd` (big-endian u128) modulo `n`.
///
/// For n <= 2^64 the modulo bias is bounded by 2^-64. Callers guarantee
/// n > 0; wheel sizes are validated at initialization.
pub fn safe_selection(n: u8, rnd: &[u8]) -> Result<u8> {
    require!(rnd.len() >= 16, RandomnessError::InvalidRndLength);

    let mut prefix = [0u8; 16];
    prefix.copy_from_slice(&rnd[..16]);
    let m = u128::from_be_bytes(prefix);

    Ok((m % n as u128) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blst::min_pk::SecretKey;

    fn beacon_keypair() -> (SecretKey, [u8; 48]) {
        let ikm = [7u8; 32];
        let sk = SecretKey::key_gen(&ikm, &[]).unwrap();
        let pk = sk.sk_to_pk().to_bytes();
        (sk, pk)
    }

    fn sign_seed(sk: &SecretKey, seed: &[u8]) -> Vec<u8> {
        let message: [u8; 32] = Sha256::digest(seed).into();
        sk.sign(&message, BEACON_DST, &[]).to_bytes().to_vec()
    }

    #[test]
    fn verify_accepts_authentic_signature() {
        let (sk, pk) = beacon_keypair();
        let seed = [0x01u8; 32];
        let sig = sign_seed(&sk, &seed);

        assert!(verify_beacon_signature(&sig, &seed, &pk).is_ok());
    }

    #[test]
    fn verify_rejects_tampered_signature() {
        let (sk, pk) = beacon_keypair();
        let seed = [0x01u8; 32];
        let mut sig = sign_seed(&sk, &seed);
        sig[0] ^= 0x10;

        let err = verify_beacon_signature(&sig, &seed, &pk).unwrap_err();
        assert_eq!(err, RandomnessError::InvalidProof.into());
    }

    #[test]
    fn verify_rejects_signature_over_other_seed() {
        let (sk, pk) = beacon_keypair();
        let sig = sign_seed(&sk, &[0x01u8; 32]);

        assert!(verify_beacon_signature(&sig, &[0x02u8; 32], &pk).is_err());
    }

    #[test]
    fn verify_rejects_foreign_beacon_key() {
        let (sk, _) = beacon_keypair();
        let other = SecretKey::key_gen(&[9u8; 32], &[]).unwrap();
        let seed = [0x01u8; 32];
        let sig = sign_seed(&sk, &seed);

        assert!(verify_beacon_signature(&sig, &seed, &other.sk_to_pk().to_bytes()).is_err());
    }

    #[test]
    fn derive_is_deterministic() {
        let sig = [0xabu8; 96];

        assert_eq!(
            derive_randomness(&sig, 1_700_000_000_000),
            derive_randomness(&sig, 1_700_000_000_000)
        );
    }

    #[test]
    fn derive_binds_the_timestamp() {
        let sig = [0xabu8; 96];

        assert_ne!(
            derive_randomness(&sig, 1_700_000_000_000),
            derive_randomness(&sig, 1_700_000_000_001)
        );
    }

    #[test]
    fn derive_matches_manual_big_endian_hash() {
        let sig = [0x11u8; 96];
        let timestamp_ms: u64 = 42;

        let mut hasher = Sha256::new();
        hasher.update(sig);
        hasher.update(timestamp_ms.to_be_bytes());
        let expected: [u8; 32] = hasher.finalize().into();

        assert_eq!(derive_randomness(&sig, timestamp_ms), expected);
    }

    #[test]
    fn selection_reduces_big_endian_prefix() {
        let mut rnd = [0u8; 32];
        rnd[15] = 39;

        // 39 mod 38 == 1
        assert_eq!(safe_selection(38, &rnd).unwrap(), 1);
    }

    #[test]
    fn selection_ignores_bytes_past_the_prefix() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        a[15] = 5;
        b[15] = 5;
        b[31] = 0xff;

        assert_eq!(
            safe_selection(38, &a).unwrap(),
            safe_selection(38, &b).unwrap()
        );
    }

    #[test]
    fn selection_output_stays_below_modulus() {
        for byte in 0..=u8::MAX {
            let mut rnd = [byte; 16];
            rnd[0] = byte.wrapping_mul(31);
            let picked = safe_selection(38, &rnd).unwrap();
            assert!(picked < 38);
        }
    }

    #[test]
    fn selection_requires_sixteen_bytes() {
        let err = safe_selection(38, &[0u8; 15]).unwrap_err();
        assert_eq!(err, RandomnessError::InvalidRndLength.into());

        assert!(safe_selection(38, &[0u8; 16]).is_ok());
    }

    #[test]
    fn draw_pipeline_is_reproducible_end_to_end() {
        use crate::utils::payout::{is_winning, values_mask, winning_prize};

        let (sk, pk) = beacon_keypair();
        let mut seed = [0u8; 32];
        seed[30] = 0x01;
        seed[31] = 0x23;
        let sig = sign_seed(&sk, &seed);
        let settled_at_ms: u64 = 1_700_000_060_001;

        verify_beacon_signature(&sig, &seed, &pk).unwrap();

        // the same inputs must reproduce the same pocket byte-for-byte
        let digest = derive_randomness(&sig, settled_at_ms);
        let winner = safe_selection(38, &digest).unwrap() + 1;
        let replay = safe_selection(38, &derive_randomness(&sig, settled_at_ms)).unwrap() + 1;
        assert_eq!(winner, replay);
        assert!((1..=38).contains(&winner));

        // a bet covering the drawn pocket pays stake * 36 / picks
        let picks = vec![winner, winner % 38 + 1, (winner + 1) % 38 + 1];
        let mask = values_mask(&picks, 38).unwrap();
        assert!(is_winning(mask, winner));
        assert_eq!(winning_prize(1_000_000, picks.len()).unwrap(), 12_000_000);
    }
}
