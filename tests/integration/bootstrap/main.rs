use forta_agent::bootstrap::{build_cli, execute, resolver_for};
use std::{collections::HashMap, fs};
use tempfile::TempDir;

fn run(args: &[&str], env: &[(&str, &str)], dir: &TempDir) -> Result<String, String> {
	let matches = build_cli()
		.try_get_matches_from(args)
		.map_err(|e| e.to_string())?;
	let env: HashMap<String, String> = env
		.iter()
		.map(|(k, v)| (k.to_string(), v.to_string()))
		.collect();
	let resolver = resolver_for(&matches, env, dir.path());
	execute(&matches, &resolver).map_err(|e| e.to_string())
}

#[test]
fn test_rpc_url_from_environment() {
	let dir = TempDir::new().unwrap();
	let output = run(
		&["forta-agent", "rpc-url"],
		&[("JSON_RPC_HOST", "scanner"), ("JSON_RPC_PORT", "8545")],
		&dir,
	)
	.unwrap();
	assert_eq!(output, "http://scanner:8545");
}

#[test]
fn test_rpc_url_from_config_flag() {
	let dir = TempDir::new().unwrap();
	fs::write(
		dir.path().join("dev.json"),
		r#"{"jsonRpcUrl": "http://localhost:8545"}"#,
	)
	.unwrap();

	let output = run(&["forta-agent", "--config", "dev.json", "rpc-url"], &[], &dir).unwrap();
	assert_eq!(output, "http://localhost:8545");
}

#[test]
fn test_rpc_url_missing() {
	let dir = TempDir::new().unwrap();
	fs::write(dir.path().join("forta.config.json"), "{}").unwrap();

	let error = run(&["forta-agent", "rpc-url"], &[], &dir).unwrap_err();
	assert_eq!(error, "no RPC URL found");
}

#[test]
fn test_config_prints_parsed_document() {
	let dir = TempDir::new().unwrap();
	fs::write(
		dir.path().join("forta.config.json"),
		"// comment\n{\"jsonRpcUrl\": \"http://x\", \"agentId\": \"a\"}",
	)
	.unwrap();

	let output = run(&["forta-agent", "config"], &[], &dir).unwrap();
	let value: serde_json::Value = serde_json::from_str(&output).unwrap();
	assert_eq!(
		value,
		serde_json::json!({"jsonRpcUrl": "http://x", "agentId": "a"})
	);
}

#[test]
fn test_config_missing_file() {
	let dir = TempDir::new().unwrap();
	let error = run(&["forta-agent", "config"], &[], &dir).unwrap_err();
	assert!(error.starts_with("File error: "));
	assert!(error.contains("forta.config.json"));
}

#[test]
fn test_keccak() {
	let dir = TempDir::new().unwrap();
	let output = run(&["forta-agent", "keccak", ""], &[], &dir).unwrap();
	assert_eq!(
		output,
		"0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
	);
}
