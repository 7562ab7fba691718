use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{prelude::*, profile::UserProfile};

/// Single-record profile storage backed by a JSON file.
#[must_use]
#[derive(Clone, Debug)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the profile. A missing or unreadable record is the same as no profile.
    #[must_use]
    #[instrument(skip_all, fields(path = %self.path.display()))]
    pub fn read(&self) -> Option<UserProfile> {
        self.read_fallibly().unwrap_or_else(|error| {
            warn!("failed to read the profile, ignoring it: {error:#}");
            None
        })
    }

    fn read_fallibly(&self) -> Result<Option<UserProfile>> {
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                debug!("no profile saved yet");
                return Ok(None);
            }
            Err(error) => return Err(error).context("failed to read the file"),
        };
        if contents.trim_ascii().is_empty() {
            return Ok(None);
        }
        let profile = serde_json::from_slice(&contents).context("failed to parse the profile")?;
        debug!("loaded the profile");
        Ok(Some(profile))
    }

    /// Replace the stored profile with the new one.
    #[instrument(skip_all, fields(path = %self.path.display()))]
    pub fn write(&self, profile: &UserProfile) -> Result {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create `{}`", parent.display()))?;
        }
        let contents = serde_json::to_vec_pretty(profile)?;
        let temporary_path = self.path.with_extension("json.tmp");
        fs::write(&temporary_path, contents)
            .with_context(|| format!("failed to write `{}`", temporary_path.display()))?;
        fs::rename(&temporary_path, &self.path)
            .with_context(|| format!("failed to replace `{}`", self.path.display()))?;
        info!("saved the profile");
        Ok(())
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    pub fn clear(&self) -> Result {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("cleared the profile");
                Ok(())
            }
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => {
                Err(error).with_context(|| format!("failed to remove `{}`", self.path.display()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::{
        core::{appliance::Appliance, jurisdiction::Jurisdiction},
        profile::HomeType,
    };

    #[test]
    fn test_missing_file_reads_as_none() -> Result {
        let directory = tempdir()?;
        let store = ProfileStore::new(directory.path().join("wattply.json"));
        assert_eq!(store.read(), None);
        Ok(())
    }

    #[test]
    fn test_malformed_file_reads_as_none() -> Result {
        let directory = tempdir()?;
        let store = ProfileStore::new(directory.path().join("wattply.json"));
        fs::write(store.path(), "{\"province\": ")?;
        assert_eq!(store.read(), None);
        fs::write(store.path(), r#"{"province": "atlantis"}"#)?;
        assert_eq!(store.read(), None);
        fs::write(store.path(), "  \n")?;
        assert_eq!(store.read(), None);
        Ok(())
    }

    #[test]
    fn test_write_and_read() -> Result {
        let directory = tempdir()?;
        let store = ProfileStore::new(directory.path().join("nested").join("wattply.json"));
        let profile = UserProfile::builder()
            .jurisdiction(Jurisdiction::Ontario)
            .home_type(HomeType::House)
            .has_ev_charging(true)
            .appliances([Appliance::ElectricStove, Appliance::Laundry].into_iter().collect())
            .build();
        store.write(&profile)?;
        assert_eq!(store.read(), Some(profile));
        Ok(())
    }

    #[test]
    fn test_write_replaces_wholesale() -> Result {
        let directory = tempdir()?;
        let store = ProfileStore::new(directory.path().join("wattply.json"));
        store.write(
            &UserProfile::builder()
                .jurisdiction(Jurisdiction::Alberta)
                .appliances([Appliance::Dishwasher].into_iter().collect())
                .build(),
        )?;

        let replacement = UserProfile::builder().has_quiet_hours(false).build();
        store.write(&replacement)?;
        let stored = store.read().context("the profile must be there")?;
        assert_eq!(stored, replacement);
        assert!(stored.appliances.is_empty());
        assert_eq!(stored.jurisdiction, Jurisdiction::Bc);
        Ok(())
    }

    #[test]
    fn test_clear() -> Result {
        let directory = tempdir()?;
        let store = ProfileStore::new(directory.path().join("wattply.json"));
        store.clear()?;
        store.write(&UserProfile::default())?;
        store.clear()?;
        assert_eq!(store.read(), None);
        assert!(!store.path().exists());
        Ok(())
    }
}
