//! Property tests over both ciphers through the public API.

use proptest::prelude::*;
use shapecrypt::{AlphabetClass, Cipher, FpeCipher128, SubstitutionCipher, segment};

const FPE_KEY: [u8; 16] = [
    0x2B, 0x7E, 0x15, 0x16, 0x28, 0xAE, 0xD2, 0xA6, 0xAB, 0xF7, 0x15, 0x88, 0x09, 0xCF, 0x4F, 0x3C,
];

fn fpe() -> FpeCipher128 {
    FpeCipher128::new(&FPE_KEY).unwrap()
}

/// Text whose digit and letter runs are all long enough for FF1.
fn arb_fpe_text() -> impl Strategy<Value = String> {
    let token = prop_oneof!["[0-9]{2,12}", "-[0-9]{2,12}", "[A-Z]{2,8}", "[a-z]{2,8}"];
    let sep = prop_oneof![Just(" "), Just(", "), Just("."), Just("@"), Just("/")];
    prop::collection::vec((token, sep), 0..6).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(token, sep)| token + sep)
            .collect::<String>()
    })
}

fn assert_same_shape(pt: &str, ct: &str) -> Result<(), TestCaseError> {
    prop_assert_eq!(pt.len(), ct.len());
    for (p, c) in pt.bytes().zip(ct.bytes()) {
        prop_assert_eq!(AlphabetClass::of(p), AlphabetClass::of(c));
        if AlphabetClass::of(p).is_none() {
            prop_assert_eq!(p, c);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_substitution_roundtrip(key in ".{0,16}", pt in "\\PC{0,40}") {
        let cipher = SubstitutionCipher::new(&key);
        let ct = cipher.encrypt(&pt);
        prop_assert_eq!(ct.chars().count(), pt.chars().count());
        prop_assert_eq!(cipher.decrypt(&ct), pt);
    }

    #[test]
    fn prop_substitution_shape(pt in "[ -~]{0,40}") {
        let cipher = SubstitutionCipher::new("K");
        assert_same_shape(&pt, &cipher.encrypt(&pt))?;
    }

    #[test]
    fn prop_substitution_number_roundtrip(s in "-?[0-9]{1,18}") {
        prop_assume!(s != "-0");
        let cipher = SubstitutionCipher::new("K");
        let ct = cipher.encrypt_number(&s);
        prop_assert_eq!(ct.len(), s.len());
        prop_assert_eq!(
            s.trim_start_matches('-').starts_with('0'),
            ct.trim_start_matches('-').starts_with('0')
        );
        prop_assert_eq!(cipher.decrypt_number(&ct), s);
    }

    #[test]
    fn prop_fpe_roundtrip(pt in arb_fpe_text()) {
        let cipher = fpe();
        let ct = cipher.encrypt_preserving(&pt).unwrap();
        assert_same_shape(&pt, &ct)?;
        prop_assert_eq!(cipher.decrypt_preserving(&ct).unwrap(), pt);
    }

    #[test]
    fn prop_fpe_number_roundtrip(s in "-?[1-9][0-9]{1,17}") {
        let cipher = fpe();
        let ct = Cipher::encrypt_number(&cipher, &s).unwrap();
        prop_assert_eq!(ct.len(), s.len());
        prop_assert_eq!(s.starts_with('-'), ct.starts_with('-'));
        prop_assert!(!ct.trim_start_matches('-').starts_with('0'));
        prop_assert_eq!(Cipher::decrypt_number(&cipher, &ct).unwrap(), s);
    }

    #[test]
    fn prop_fpe_number_keeps_leading_zero(s in "0[0-9]{1,11}") {
        let cipher = fpe();
        let ct = cipher.encrypt_number(&s).unwrap();
        prop_assert!(ct.starts_with('0'));
        prop_assert_eq!(cipher.decrypt_number(&ct).unwrap(), s);
    }

    #[test]
    fn prop_segment_covers_input(s in "\\PC{0,40}") {
        let mut pos = 0;
        for run in segment(&s) {
            prop_assert_eq!(run.start, pos);
            prop_assert!(run.end > run.start);
            pos = run.end;
        }
        prop_assert_eq!(pos, s.len());
    }
}
