use forta_agent::utils::keccak_hex;
use proptest::{prelude::*, test_runner::Config};

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	#[test]
	fn test_digest_format(text in ".*") {
		let digest = keccak_hex(&text);

		prop_assert_eq!(digest.len(), 66);
		prop_assert!(digest.starts_with("0x"));
		prop_assert!(digest[2..].chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
	}

	#[test]
	fn test_digest_is_deterministic(text in ".*") {
		prop_assert_eq!(keccak_hex(&text), keccak_hex(&text));
	}

	#[test]
	fn test_distinct_inputs_do_not_collide(a in ".{0,32}", b in ".{0,32}") {
		prop_assume!(a != b);
		prop_assert_ne!(keccak_hex(&a), keccak_hex(&b));
	}
}
