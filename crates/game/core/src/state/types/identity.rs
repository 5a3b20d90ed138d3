use core::fmt;

/// Caller identity (an address-like string).
///
/// Identities compare case-insensitively: the raw value is trimmed and stored
/// lower-cased, so `0xAbC` and `0xabc` name the same caller.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Identity(String);

impl Identity {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Identity {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

/// Opaque key supplied by the operator when creating a boss.
///
/// Stored exactly as given; it only labels the boss for observers.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BossKey(String);

impl BossKey {
    /// Key reported when no boss has ever been created.
    pub const ZERO: &'static str = "0x0000000000000000000000000000000000000000";

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn zero() -> Self {
        Self(Self::ZERO.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BossKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BossKey {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

macro_rules! sequence_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub u64);

        impl $name {
            /// First value handed out by the owning counter.
            pub const FIRST: Self = Self(1);

            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }
    };
}

sequence_id!(
    /// Identifies one boss instance. Every create-or-update starts a new instance.
    BossInstanceId
);

sequence_id!(
    /// Sequential number of a minted reward token.
    TokenId
);

sequence_id!(
    /// Global ordinal of a boss kill.
    KillSequence
);
