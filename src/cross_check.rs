//! Cross-check tests running both ciphers over the same fixed inputs.
//!
//! Outputs are printed so they can be compared between builds and against
//! other implementations sharing the same keys.

#[cfg(test)]
mod tests {
    use crate::*;

    const FPE_KEY: [u8; 32] = [
        0x2B, 0x7E, 0x15, 0x16, 0x28, 0xAE, 0xD2, 0xA6, 0xAB, 0xF7, 0x15, 0x88, 0x09, 0xCF, 0x4F,
        0x3C, 0xEF, 0x43, 0x59, 0xD8, 0xD5, 0x80, 0xAA, 0x4F, 0x7F, 0x03, 0x6D, 0x6F, 0x04, 0xFC,
        0x6A, 0x94,
    ];

    const TEXTS: [&str; 6] = [
        "69619",
        "ACCOUNT 4111-1111-1111-1111",
        "jane.doe@example.com",
        "balance: -48213 USD",
        "ZIP 90210, apt 12BC",
        "",
    ];

    const NUMBERS: [&str; 7] = ["12345", "-12345", "00123", "987654321", "-0", "10", "99"];

    fn ciphers() -> Vec<(&'static str, BoxedCipher)> {
        vec![
            ("substitution", new_substitution_cipher("K")),
            ("fpe-128", new_fpe_cipher(&FPE_KEY[..16]).unwrap()),
            ("fpe-192", new_fpe_cipher(&FPE_KEY[..24]).unwrap()),
            ("fpe-256", new_fpe_cipher(&FPE_KEY).unwrap()),
        ]
    }

    fn same_shape(a: &str, b: &str) -> bool {
        a.len() == b.len()
            && a.bytes().zip(b.bytes()).all(|(x, y)| {
                let class = AlphabetClass::of(x);
                class == AlphabetClass::of(y) && (class.is_some() || x == y)
            })
    }

    #[test]
    fn cross_check_text() {
        for (name, cipher) in ciphers() {
            println!("{}:", name);
            for pt in TEXTS {
                let ct = cipher.encrypt(pt).unwrap();
                println!("  {:32} -> {}", pt, ct);
                assert!(same_shape(pt, &ct), "{}: {:?} vs {:?}", name, pt, ct);
                assert_eq!(cipher.decrypt(&ct).unwrap(), pt);
            }
        }
    }

    #[test]
    fn cross_check_numbers() {
        for (name, cipher) in ciphers() {
            println!("{}:", name);
            for pt in NUMBERS {
                let ct = cipher.encrypt_number(pt).unwrap();
                println!("  {:12} -> {}", pt, ct);
                if pt == "-0" {
                    assert_eq!(ct, "0");
                    continue;
                }
                let digits = pt.trim_start_matches('-');
                let ct_digits = ct.trim_start_matches('-');
                assert_eq!(pt.starts_with('-'), ct.starts_with('-'));
                assert_eq!(digits.len(), ct_digits.len());
                assert_eq!(digits.starts_with('0'), ct_digits.starts_with('0'));
                assert_eq!(cipher.decrypt_number(&ct).unwrap(), pt);
            }
        }
    }

    #[test]
    fn cross_check_noop_numbers() {
        for (name, cipher) in ciphers() {
            for s in ["", "-", "12a", "4.5", "1e9"] {
                assert_eq!(cipher.encrypt_number(s).unwrap(), s, "{}", name);
                assert_eq!(cipher.decrypt_number(s).unwrap(), s, "{}", name);
            }
        }
    }

    #[test]
    fn cross_check_independent_instances() {
        let a = new_substitution_cipher("K");
        let b = new_substitution_cipher("K");
        let x = new_fpe_cipher(&FPE_KEY).unwrap();
        let y = new_fpe_cipher(&FPE_KEY).unwrap();
        for pt in TEXTS {
            assert_eq!(a.encrypt(pt).unwrap(), b.encrypt(pt).unwrap());
            assert_eq!(x.encrypt(pt).unwrap(), y.encrypt(pt).unwrap());
        }
    }

    #[test]
    fn cross_check_shared_across_threads() {
        let ciphers = ciphers();
        std::thread::scope(|scope| {
            for (name, cipher) in &ciphers {
                for t in 0..4u32 {
                    let cipher = cipher.as_ref();
                    scope.spawn(move || {
                        for i in 0..50u32 {
                            let pt = format!("ID{:02}-{:05} user{:02}", t, i * 7919 + 10, t);
                            let ct = cipher.encrypt(&pt).unwrap();
                            assert_eq!(cipher.decrypt(&ct).unwrap(), pt, "{}", name);
                        }
                    });
                }
            }
        });
    }

    #[test]
    fn cross_check_deterministic_vectors() {
        println!("\n=== DETERMINISTIC TEST VECTORS ===\n");

        {
            let cipher = SubstitutionCipher::new("K");
            println!("Test 1: substitution, key \"K\"");
            println!("  seed:          {:016x}", substitution::seed_from_key("K"));
            println!("  encrypt(\"69619\"):        {}", cipher.encrypt("69619"));
            println!("  encrypt_number(\"12345\"): {}", cipher.encrypt_number("12345"));
            println!("  encrypt_number(\"00123\"): {}", cipher.encrypt_number("00123"));
            println!("  encrypt(\"ABCxyz\"):       {}", cipher.encrypt("ABCxyz"));
        }

        {
            let cipher = FpeCipher256::new(&FPE_KEY).unwrap();
            println!("Test 2: FF1-AES256 FPE, default tweaks");
            for pt in ["12345", "HELLO", "world", "-2024"] {
                println!("  {:8} -> {}", pt, cipher.encrypt_preserving(pt).unwrap());
            }
        }
    }
}
