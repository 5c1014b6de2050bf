use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
	let output = Command::new("git").args(args).output().ok()?;
	if !output.status.success() {
		return None;
	}

	let s = String::from_utf8(output.stdout).ok()?;
	let s = s.trim();
	if s.is_empty() { None } else { Some(s.to_string()) }
}

fn main() {
	let hash = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".to_string());
	let branch = git(&["rev-parse", "--abbrev-ref", "HEAD"]).unwrap_or_else(|| "unknown".to_string());
	let version = git(&["describe", "--tags", "--always"])
		.unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());
	let date = chrono::Utc::now().format("%Y-%m-%d").to_string();

	println!("cargo:rustc-env=GIT_HASH={hash}");
	println!("cargo:rustc-env=GIT_BRANCH={branch}");
	println!("cargo:rustc-env=GIT_VERSION={version}");
	println!("cargo:rustc-env=BUILD_DATE={date}");
	println!("cargo:rerun-if-changed=.git/HEAD");
}
