use std::{fs, io, path::Path, sync::Once};

use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVES: &str = "warn,duo_split=info";

/// Initializes the global tracing subscriber with sensible defaults.
///
/// `RUST_LOG` wins when set; otherwise the crate logs at info and everything
/// else at warn.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let filter = build_filter(env.as_deref());

        // A host application may already own the global subscriber.
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
}

pub(crate) fn build_filter(directives: Option<&str>) -> EnvFilter {
    let directives = directives
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .unwrap_or(DEFAULT_DIRECTIVES);
    EnvFilter::builder().parse_lossy(directives)
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_defaults_to_crate_info() {
        let filter = build_filter(None).to_string();
        assert!(filter.contains("duo_split=info"), "{filter}");
        assert_eq!(build_filter(Some("  ")).to_string(), filter);
    }

    #[test]
    fn filter_keeps_env_directives() {
        let filter = build_filter(Some("duo_split=debug")).to_string();
        assert!(filter.contains("duo_split=debug"), "{filter}");
        assert!(!filter.contains("duo_split=info"), "{filter}");
    }
}
