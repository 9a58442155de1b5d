//! Compile-time platform detection.
//!
//! Everything here is a constant derived from `cfg!`, so branching on these values is resolved by the
//! compiler. The [`sync`](crate::sync) backends are chosen with `#[cfg]` attributes on the same
//! conditions; these constants exist so that code and tests can query the decision.

use derive_more::{Display, IsVariant};

/// True when compiling for Windows.
pub const WINDOWS: bool = cfg!(target_os = "windows");
/// True when compiling for Linux (including Android).
pub const LINUX: bool = cfg!(any(target_os = "linux", target_os = "android"));
/// True when compiling for macOS.
pub const MACOS: bool = cfg!(target_os = "macos");
/// True for any unix-family target, which uses the pthread backend.
pub const UNIX: bool = cfg!(unix);

pub const ARCH_32: bool = cfg!(target_pointer_width = "32");
pub const ARCH_64: bool = cfg!(target_pointer_width = "64");

/// True when targeting the GNU toolchain environment.
pub const GNU: bool = cfg!(target_env = "gnu");
/// True when targeting the MSVC toolchain environment.
pub const MSVC: bool = cfg!(target_env = "msvc");
/// True when the platform's native toolchain is clang-based (Apple targets, the BSDs and musl).
pub const CLANG_LIKE: bool = cfg!(any(
    target_vendor = "apple",
    target_os = "freebsd",
    target_os = "openbsd",
    target_env = "musl",
));

/// True when the target supports lock-free atomics on 64-bit values.
pub const ATOMIC_64: bool = cfg!(target_has_atomic = "64");

/// The operating system family the crate was compiled for.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Platform {
    #[display("Windows")]
    Windows,
    #[display("Linux")]
    Linux,
    #[display("macOS")]
    MacOs,
    #[display("Unix")]
    OtherUnix,
    #[display("unknown")]
    Unknown,
}

impl Platform {
    pub const fn current() -> Platform {
        if WINDOWS {
            Platform::Windows
        } else if LINUX {
            Platform::Linux
        } else if MACOS {
            Platform::MacOs
        } else if UNIX {
            Platform::OtherUnix
        } else {
            Platform::Unknown
        }
    }

    /// Returns the pointer width of the target in bits.
    pub const fn pointer_width() -> u32 {
        usize::BITS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_is_consistent() {
        assert_eq!(
            Platform::current().is_windows(), WINDOWS,
            "Platform enum should agree with the WINDOWS constant."
        );
        assert!(
            ARCH_32 ^ ARCH_64 || Platform::pointer_width() == 16,
            "Exactly one pointer width should be detected."
        );
        assert_eq!(Platform::pointer_width() == 64, ARCH_64);
        assert!(!(GNU && MSVC), "Toolchain environments are exclusive.");
    }
}
