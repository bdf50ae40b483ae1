use dacctl_util_array_type::{
    array_type_define, array_type_impl_bytes_conv, array_type_impl_debug_as_display,
    array_type_impl_hex_str, array_type_impl_serde, array_type_impl_zero_default,
};
use serde::{Deserialize, Serialize};

array_type_define! {
    /// 20-byte on-chain account identifier
    ///
    /// The derived `Ord` is byte-lexicographic over the big-endian
    /// bytes, which is the same total order as comparing addresses
    /// as unsigned integers.
    #[derive(Copy, Clone, Hash)]
    pub struct AccountAddress[20];
}
array_type_impl_bytes_conv!(AccountAddress);
array_type_impl_zero_default!(AccountAddress);
array_type_impl_hex_str!(AccountAddress);
array_type_impl_serde!(AccountAddress);
array_type_impl_debug_as_display!(AccountAddress);

/// A single DAC member record
///
/// Account identity plus the endpoint other participants use to reach
/// the member's data availability node. The url is carried verbatim;
/// nothing beyond address uniqueness is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub address: AccountAddress,
    pub url: String,
}

impl Member {
    pub fn new(address: AccountAddress, url: impl Into<String>) -> Self {
        Self {
            address,
            url: url.into(),
        }
    }
}
