use std::process::Command;

fn main() {
	println!("cargo:rerun-if-changed=build.rs");
	println!("cargo:rerun-if-changed=.git/HEAD");

	let git_hash = run_git(&["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".to_string());
	let git_branch = run_git(&["rev-parse", "--abbrev-ref", "HEAD"]).unwrap_or_else(|| "unknown".to_string());
	let git_version = run_git(&["describe", "--tags", "--always"])
		.unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());
	let build_date = chrono::Utc::now().format("%Y-%m-%d").to_string();

	println!("cargo:rustc-env=GIT_HASH={git_hash}");
	println!("cargo:rustc-env=GIT_BRANCH={git_branch}");
	println!("cargo:rustc-env=GIT_VERSION={git_version}");
	println!("cargo:rustc-env=BUILD_DATE={build_date}");
}

fn run_git(args: &[&str]) -> Option<String> {
	let output = Command::new("git").args(args).output().ok()?;
	if !output.status.success() {
		return None;
	}

	let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
	if value.is_empty() { None } else { Some(value) }
}
