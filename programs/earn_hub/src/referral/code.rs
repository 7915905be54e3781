use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;
use std::collections::HashSet;
use crate::{
    constants::{CODE_ALPHABET, CODE_LEN, MAX_CODE_ATTEMPTS},
    error::EarnHubError
};

// This function derives a referral code from seed material and an attempt nonce
// Params
//   seed - Wallet address of the registering user
//   attempt - Retry nonce, bumped on collision
// Return
//   Fixed-length code over the standard alphabet
pub fn derive_code(seed: &Pubkey, attempt: u8) -> String {
    derive_with(seed.as_ref(), attempt, CODE_ALPHABET, CODE_LEN)
}

// This function picks a code that is not already taken
// Params
//   seed - Wallet address of the registering user
//   existing - Codes already claimed
// Return
//   A free code, or CodeSpaceExhausted after the bounded retry count
pub fn generate(seed: &Pubkey, existing: &HashSet<String>) -> Result<String> {
    generate_with(seed.as_ref(), existing, CODE_ALPHABET, CODE_LEN)
}

fn derive_with(seed: &[u8], attempt: u8, alphabet: &[u8], len: usize) -> String {
    let digest = hashv(&[seed, &[attempt]]);
    digest
        .to_bytes()
        .iter()
        .take(len)
        .map(|byte| alphabet[*byte as usize % alphabet.len()] as char)
        .collect()
}

fn generate_with(
    seed: &[u8],
    existing: &HashSet<String>,
    alphabet: &[u8],
    len: usize
) -> Result<String> {
    for attempt in 0..MAX_CODE_ATTEMPTS {
        let code = derive_with(seed, attempt, alphabet, len);
        if !existing.contains(&code) {
            return Ok(code);
        }
    }
    err!(EarnHubError::CodeSpaceExhausted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_codes_are_fixed_length_over_the_alphabet() {
        let seed = Pubkey::new_unique();
        for attempt in 0..MAX_CODE_ATTEMPTS {
            let code = derive_code(&seed, attempt);
            assert_eq!(code.len(), CODE_LEN);
            assert!(code.bytes().all(|b| CODE_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn derivation_is_deterministic_per_attempt() {
        let seed = Pubkey::new_unique();
        assert_eq!(derive_code(&seed, 0), derive_code(&seed, 0));
        assert_ne!(derive_code(&seed, 0), derive_code(&seed, 1));
    }

    #[test]
    fn generate_skips_taken_codes() {
        let seed = Pubkey::new_unique();
        let mut existing = HashSet::new();
        existing.insert(derive_code(&seed, 0));
        existing.insert(derive_code(&seed, 1));

        let code = generate(&seed, &existing).unwrap();
        assert!(!existing.contains(&code));
        assert_eq!(code, derive_code(&seed, 2));
    }

    #[test]
    fn exhausted_code_space_fails_instead_of_looping() {
        // Single-letter alphabet: every derivation is "AA"
        let mut existing = HashSet::new();
        existing.insert("AA".to_string());

        let result = generate_with(b"seed", &existing, b"A", 2);
        assert!(result.is_err());
    }
}
