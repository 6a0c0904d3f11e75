//! Typed domain separators for canonical hashing.
//!
//! Every hash computation selects a domain via [`HashDomain`], so a digest of
//! a vocabulary can never collide with a digest of a search graph built from
//! the same bytes. Adding a domain is a single change here: the enum,
//! `as_bytes()`, `ALL`, and `Display` come from one macro invocation.

/// Declares `HashDomain` enum, `as_bytes()`, `ALL`, and `Display` from one list.
macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Every variant maps to a unique, null-terminated byte string used as
        /// a SHA-256 prefix.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw domain-separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domain variants in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => write!(f, stringify!($variant)), )+
                }
            }
        }
    };
}

define_hash_domains! {
    // Kernel (carrier layer)

    /// Canonical vocabulary (sorted word list).
    Vocabulary => b"LADDER::VOCABULARY::V1\0",

    /// Substitution alphabet (ordered symbol string).
    Alphabet => b"LADDER::ALPHABET::V1\0",

    // Search

    /// Search policy snapshot.
    SearchPolicy => b"LADDER::SEARCH_POLICY::V1\0",

    /// Search graph audit log.
    SearchGraph => b"LADDER::SEARCH_GRAPH::V1\0",

    // Harness

    /// Bundle artifact content hashing.
    BundleArtifact => b"LADDER::BUNDLE_ARTIFACT::V1\0",

    /// Bundle digest (normative projection).
    BundleDigest => b"LADDER::BUNDLE_DIGEST::V1\0",

    // Benchmarks

    /// Benchmark input hashing.
    BenchInput => b"LADDER::BENCH_INPUT::V1\0",
}
