// SPDX-License-Identifier: MIT

pub use {data_encoding, serde, serde_bytes};

#[macro_export]
macro_rules! array_type_define {
    (
        $(#[$outer:meta])*
        $v:vis struct $name:tt[$n:expr];
    ) => {

        $(#[$outer])*
        #[derive(PartialOrd, Ord, PartialEq, Eq)]
        $v struct $name([u8; $n]);

        impl $name {

            pub const LEN: usize = $n;
            pub const ZERO: Self = Self([0u8; $n]);

            pub fn as_slice(&self) -> &[u8] {
                self.0.as_slice()
            }

            pub fn from_bytes(bytes: [u8; $n]) -> Self {
                Self(bytes)
            }

            pub fn to_bytes(self) -> [u8; $n] {
                self.0
            }
        }
    }
}

#[macro_export]
macro_rules! array_type_impl_bytes_conv {
    ($name:tt) => {
        impl From<[u8; Self::LEN]> for $name {
            fn from(value: [u8; Self::LEN]) -> Self {
                Self(value)
            }
        }
        impl From<$name> for [u8; $name::LEN] {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

#[macro_export]
macro_rules! array_type_impl_zero_default {
    ($name:tt) => {
        impl Default for $name {
            fn default() -> Self {
                Self([0; Self::LEN])
            }
        }
    };
}

#[macro_export]
macro_rules! array_type_impl_debug_as_display {
    ($name:tt) => {
        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                <Self as std::fmt::Display>::fmt(self, f)
            }
        }
    };
}

#[macro_export]
macro_rules! array_type_impl_serde {
    (
        $name:tt
    ) => {
        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                if s.is_human_readable() {
                    s.serialize_str(&self.to_string())
                } else {
                    s.serialize_bytes(&self.0)
                }
            }
        }

        impl<'de> ::serde::de::Deserialize<'de> for $name {
            fn deserialize<D>(d: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                if d.is_human_readable() {
                    let str = <String>::deserialize(d)?;
                    <Self as std::str::FromStr>::from_str(&str).map_err(|e| {
                        $crate::serde::de::Error::custom(format!("Deserialization error: {e:#}"))
                    })
                } else {
                    let bytes = <$crate::serde_bytes::ByteArray<{ $name::LEN }>>::deserialize(d)?;
                    Ok(Self(bytes.into_array()))
                }
            }
        }
    };
}

/// `0x`-prefixed hex, the way account-style identifiers are written
///
/// Parsing accepts either case and an optional `0x` prefix.
#[macro_export]
macro_rules! array_type_impl_hex_str {
    (
        $name:tt
    ) => {
        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("0x")?;
                $crate::data_encoding::HEXLOWER.encode_write(self.as_slice(), f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::data_encoding::DecodeError;

            fn from_str(s: &str) -> Result<$name, Self::Err> {
                let s = s.strip_prefix("0x").unwrap_or(s);
                let v = $crate::data_encoding::HEXLOWER_PERMISSIVE.decode(s.as_bytes())?;
                let a = v
                    .try_into()
                    .map_err(|_| $crate::data_encoding::DecodeError {
                        position: 0,
                        kind: $crate::data_encoding::DecodeKind::Length,
                    })?;
                Ok(Self(a))
            }
        }
    };
}
