use std::process::Command;

fn git(args: &[&str]) -> String {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let hash = git(&["rev-parse", "--short", "HEAD"]);
    let commit_date = git(&["log", "-1", "--format=%cd", "--date=format:%Y-%m-%d %H:%M"]);

    // A build is a release when HEAD carries the version tag and the tree is clean.
    let version = env!("CARGO_PKG_VERSION");
    let tagged = git(&["tag", "--points-at", "HEAD"])
        .lines()
        .any(|tag| tag == format!("v{}", version) || tag == version);
    let dirty = !git(&["status", "--porcelain"]).is_empty();

    println!("cargo:rustc-env=CELESTO_GIT_HASH={}", hash);
    println!("cargo:rustc-env=CELESTO_GIT_DATE={}", commit_date);
    println!("cargo:rustc-env=CELESTO_IS_RELEASE={}", tagged && !dirty);
}
