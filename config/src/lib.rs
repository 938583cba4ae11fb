use std::{
    io,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;

mod error;

pub mod machine;

pub use error::Error;
pub use machine::{MachineConfig, OverflowPolicy};

const CARGO_MANIFEST_DIR: &str = env!("CARGO_MANIFEST_DIR");
const CONFIG_ENV_PREFIX: &str = "BOOTH";

pub trait Config: DeserializeOwned {
    const PREFIX: &'static str;

    fn from_env() -> Result<Self, Error> {
        let prefix = format!("{}_{}", CONFIG_ENV_PREFIX, Self::PREFIX);

        // an absent file only means there are no file-level defaults.
        match dotenvy::from_path(config_env_path()) {
            Err(dotenvy::Error::Io(err)) if err.kind() == io::ErrorKind::NotFound => {}
            result => result?,
        }

        Ok(config::Config::builder()
            .add_source(
                config::Environment::with_prefix(&prefix)
                    .separator("_")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?)
    }
}

#[doc(hidden)]
pub fn config_env_path() -> PathBuf {
    Path::new(CARGO_MANIFEST_DIR).join(".config.env")
}
