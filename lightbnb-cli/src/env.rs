//! `.env` loading
//!
//! Priority order (highest to lowest):
//! 1. Environment variables already set
//! 2. Current directory .env
//! 3. ~/.lightbnb/.env

use lightbnb_db::config::config_dir;
use tracing::debug;

pub fn load_dotenv() {
    // dotenvy doesn't overwrite existing vars, so earlier files win
    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded .env from current directory: {}", path.display());
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() {
            match dotenvy::from_path(&env_file) {
                Ok(()) => debug!("Loaded .env from {}", env_file.display()),
                Err(e) => debug!("Failed to load {}: {}", env_file.display(), e),
            }
        }
    }
}
