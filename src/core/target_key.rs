//! Build-axis identity.

use std::fmt;

/// Identifies one build configuration: a (host platform, profile) pair.
///
/// Either component may be unset, meaning "unqualified" along that axis.
/// The fully unqualified key names the library's default configuration.
///
/// Keys order platform-first, then profile, with unset components sorting
/// before set ones, so iterating a `BTreeMap<TargetKey, _>` is stable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetKey {
    /// Host platform name (e.g. `linux`), or `None` when unqualified.
    pub platform: Option<String>,
    /// Profile name (e.g. `net_4_x`), or `None` when unqualified.
    pub profile: Option<String>,
}

impl TargetKey {
    /// The fully unqualified default key.
    pub fn unqualified() -> Self {
        TargetKey {
            platform: None,
            profile: None,
        }
    }

    /// A profile-qualified key with no platform.
    pub fn for_profile(profile: impl Into<String>) -> Self {
        TargetKey {
            platform: None,
            profile: Some(profile.into()),
        }
    }

    /// A platform-qualified key with no profile (the platform's default
    /// profile configuration).
    pub fn for_platform(platform: impl Into<String>) -> Self {
        TargetKey {
            platform: Some(platform.into()),
            profile: None,
        }
    }

    /// A fully qualified (platform, profile) key.
    pub fn new(platform: impl Into<String>, profile: impl Into<String>) -> Self {
        TargetKey {
            platform: Some(platform.into()),
            profile: Some(profile.into()),
        }
    }

    /// Whether both components are unset.
    pub fn is_unqualified(&self) -> bool {
        self.platform.is_none() && self.profile.is_none()
    }
}

impl fmt::Display for TargetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.platform, &self.profile) {
            (None, None) => write!(f, "default"),
            (Some(pl), None) => write!(f, "{}/default", pl),
            (None, Some(pr)) => write!(f, "any/{}", pr),
            (Some(pl), Some(pr)) => write!(f, "{}/{}", pl, pr),
        }
    }
}
