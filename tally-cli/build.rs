use std::path::Path;
use std::process::Command;

fn git(repo_root: &str, args: &[&str]) -> Option<String> {
    let out = Command::new("git").arg("-C").arg(repo_root).args(args).output().ok()?;
    out.status
        .success()
        .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
}

// `tally --version` shows "<sha>" or "<sha>-dirty"; "unknown" outside a checkout.
fn main() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let repo_root = format!("{manifest_dir}/..");

    let build_id = match git(&repo_root, &["rev-parse", "--short", "HEAD"]).filter(|s| !s.is_empty()) {
        Some(sha) => {
            let dirty = git(&repo_root, &["status", "--porcelain", "--untracked-files=no"])
                .is_some_and(|s| !s.is_empty());
            if dirty { format!("{sha}-dirty") } else { sha }
        }
        None => "unknown".to_string(),
    };
    println!("cargo:rustc-env=TALLY_BUILD_SHA={build_id}");

    let head = Path::new(&repo_root).join(".git/HEAD");
    if head.exists() {
        println!("cargo:rerun-if-changed={}", head.display());
        println!("cargo:rerun-if-changed={}/.git/index", repo_root);
    } else {
        println!("cargo:rerun-if-changed=build.rs");
    }
}
