pub const DEFAULT_HOST_KEY: &str = "navidad2024";
pub const CANVAS_SIZE: u32 = 420;
pub const CONFETTI_MS: u32 = 700;

/// Host key baked in at build time (`WHEEL_HOST_KEY=... trunk build`).
pub fn get_host_key() -> String {
    option_env!("WHEEL_HOST_KEY")
        .filter(|key| !key.trim().is_empty())
        .unwrap_or(DEFAULT_HOST_KEY)
        .to_string()
}

/// Whether spinning also needs the host lock open (`WHEEL_SPIN_REQUIRES_HOST=1`).
pub fn spin_requires_host() -> bool {
    matches!(option_env!("WHEEL_SPIN_REQUIRES_HOST"), Some("1" | "true"))
}
