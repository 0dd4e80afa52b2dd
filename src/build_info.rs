pub fn git_commit_hash() -> &'static str {
    match option_env!("SHELTER_UI_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
