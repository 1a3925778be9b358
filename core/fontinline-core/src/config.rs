//! Font search directory configuration (made by FontLab https://www.fontlab.com/)

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Per-user font directory, relative to the home directory.
pub const USER_FONTS_SUBDIR: &str = ".local/share/fonts";
/// System-wide font directory.
pub const SYSTEM_FONTS_DIR: &str = "/usr/share/fonts";
/// Environment variable naming extra font directories (Ghostscript's search path).
pub const GS_LIB_VAR: &str = "GS_LIB";

/// Ordered list of directories the catalog builder walks.
///
/// Earlier directories take priority when several fonts match a reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontDirs {
    dirs: Vec<PathBuf>,
}

impl FontDirs {
    pub fn new<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// Conventional search list read from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var_os("HOME"),
            env::current_dir().ok(),
            env::var_os(GS_LIB_VAR),
        )
    }

    /// Build the conventional list from explicit values:
    /// user fonts → working directory → `GS_LIB` entries → system fonts.
    pub fn from_vars(
        home: Option<OsString>,
        cwd: Option<PathBuf>,
        gs_lib: Option<OsString>,
    ) -> Self {
        let mut dirs = Vec::new();

        if let Some(home) = home.filter(|h| !h.is_empty()) {
            dirs.push(PathBuf::from(home).join(USER_FONTS_SUBDIR));
        }
        if let Some(cwd) = cwd {
            dirs.push(cwd);
        }
        if let Some(gs_lib) = gs_lib {
            dirs.extend(env::split_paths(&gs_lib));
        }
        dirs.push(PathBuf::from(SYSTEM_FONTS_DIR));

        Self { dirs }
    }

    /// Put `extra` ahead of the current directories.
    pub fn with_leading<I, P>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut dirs: Vec<PathBuf> = extra.into_iter().map(Into::into).collect();
        dirs.append(&mut self.dirs);
        self.dirs = dirs;
        self
    }

    /// Directories in priority order, without empty entries or repeats.
    pub fn roots(&self) -> Vec<PathBuf> {
        let mut roots: Vec<PathBuf> = Vec::with_capacity(self.dirs.len());
        for dir in &self.dirs {
            if dir.as_os_str().is_empty() || roots.contains(dir) {
                continue;
            }
            roots.push(dir.clone());
        }
        roots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conventional_order_is_user_cwd_gslib_system() {
        let dirs = FontDirs::from_vars(
            Some("/home/ada".into()),
            Some(PathBuf::from("/work")),
            Some("/opt/gs/fonts".into()),
        );

        assert_eq!(
            dirs.roots(),
            vec![
                PathBuf::from("/home/ada/.local/share/fonts"),
                PathBuf::from("/work"),
                PathBuf::from("/opt/gs/fonts"),
                PathBuf::from("/usr/share/fonts"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn gs_lib_may_list_several_directories() {
        let dirs = FontDirs::from_vars(None, None, Some("/a:/b".into()));

        assert_eq!(
            dirs.roots(),
            vec![
                PathBuf::from("/a"),
                PathBuf::from("/b"),
                PathBuf::from("/usr/share/fonts"),
            ]
        );
    }

    #[test]
    fn missing_variables_leave_only_system_dir() {
        let dirs = FontDirs::from_vars(Some(OsString::new()), None, None);
        assert_eq!(dirs.roots(), vec![PathBuf::from(SYSTEM_FONTS_DIR)]);
    }

    #[test]
    fn roots_drop_duplicates_and_empty_entries() {
        let dirs = FontDirs::new(["/fonts", "", "/other", "/fonts"]);
        assert_eq!(
            dirs.roots(),
            vec![PathBuf::from("/fonts"), PathBuf::from("/other")]
        );
    }

    #[test]
    fn leading_dirs_take_priority() {
        let dirs = FontDirs::new(["/system"]).with_leading(["/mine", "/shared"]);
        assert_eq!(
            dirs.roots(),
            vec![
                PathBuf::from("/mine"),
                PathBuf::from("/shared"),
                PathBuf::from("/system"),
            ]
        );
    }
}
