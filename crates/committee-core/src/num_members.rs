use core::fmt;

use derive_more::From;

/// Committee size
#[derive(Debug, Clone, Copy, From, PartialEq, Eq, PartialOrd, Ord)]
pub struct NumMembers(u8);

impl fmt::Display for NumMembers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl NumMembers {
    /// Total number of members
    pub fn total(self) -> usize {
        self.0.into()
    }

    /// Default signature threshold: every member must sign
    pub fn full_threshold(self) -> u64 {
        u64::from(self.0)
    }

    /// Is `required` an acceptable signature threshold for this size?
    pub fn admits_threshold(self, required: u64) -> bool {
        1 <= required && required <= self.full_threshold()
    }
}

pub trait ToNumMembers {
    fn to_num_members(&self) -> NumMembers;
}

impl<T> ToNumMembers for [T] {
    fn to_num_members(&self) -> NumMembers {
        let num_members: u8 = <usize as TryInto<u8>>::try_into(self.len())
            .expect("ToNumMembers used for a slice of size larger than u8");
        NumMembers::from(num_members)
    }
}

impl<T> ToNumMembers for Vec<T> {
    fn to_num_members(&self) -> NumMembers {
        self.as_slice().to_num_members()
    }
}

#[test]
fn num_members_sanity() {
    for (n, full, ok, not_ok) in [(1u8, 1u64, 1u64, 2u64), (3, 3, 2, 0), (7, 7, 7, 8)] {
        let num = NumMembers::from(n);
        assert_eq!(usize::from(n), num.total());
        assert_eq!(full, num.full_threshold());
        assert!(num.admits_threshold(ok));
        assert!(!num.admits_threshold(not_ok));
    }
}
