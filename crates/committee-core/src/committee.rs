use std::ops;

use snafu::Snafu;

use crate::descriptor::CommitteeDescriptor;
use crate::member::{AccountAddress, Member};
use crate::num_members::{NumMembers, ToNumMembers as _};

/// Committee member set, canonically ordered
///
/// Invariant: non-empty, sorted strictly ascending by the numeric
/// value of the member address. Any caller constructing this from an
/// equal member set, in whatever input order, ends up with the same
/// sequence, so the derived descriptor is byte-identical across
/// independent derivations. The receiving contract may assume or
/// enforce this ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Committee(Vec<Member>);

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum ValidationError {
    #[snafu(display("Committee must have at least one member"))]
    Empty,
    #[snafu(display("Duplicate member address: {address}"))]
    DuplicateAddress { address: AccountAddress },
    #[snafu(display("Committee of {num_members} members is too large"))]
    TooManyMembers { num_members: usize },
    #[snafu(display(
        "Required signatures {required} outside of 1..={num_members} for this committee"
    ))]
    ThresholdOutOfRange { required: u64, num_members: NumMembers },
}

pub type ValidationResult<T> = Result<T, ValidationError>;

impl Committee {
    /// Construct from members in any order
    ///
    /// Fails fast, before any network interaction, on an empty set or
    /// on two members sharing an address. Uniqueness is a local
    /// precondition here; contract-side deduplication is not assumed.
    pub fn new(members: impl IntoIterator<Item = Member>) -> ValidationResult<Self> {
        let mut members: Vec<Member> = members.into_iter().collect();

        if members.is_empty() {
            return EmptySnafu.fail();
        }
        if u8::try_from(members.len()).is_err() {
            return TooManyMembersSnafu {
                num_members: members.len(),
            }
            .fail();
        }

        members.sort_unstable_by(|a, b| a.address.cmp(&b.address));

        for pair in members.windows(2) {
            if pair[0].address == pair[1].address {
                return DuplicateAddressSnafu {
                    address: pair[0].address,
                }
                .fail();
            }
        }

        Ok(Self(members))
    }

    pub fn as_slice(&self) -> &[Member] {
        &self.0
    }

    pub fn num_members(&self) -> NumMembers {
        self.0.to_num_members()
    }

    /// Descriptor with the full-consensus threshold (every member signs)
    pub fn descriptor(&self) -> CommitteeDescriptor {
        self.descriptor_with_threshold(self.num_members().full_threshold())
            .expect("Full threshold is always in range")
    }

    /// Descriptor with a caller-chosen signature threshold
    pub fn descriptor_with_threshold(
        &self,
        required_signatures: u64,
    ) -> ValidationResult<CommitteeDescriptor> {
        let num_members = self.num_members();

        if !num_members.admits_threshold(required_signatures) {
            return ThresholdOutOfRangeSnafu {
                required: required_signatures,
                num_members,
            }
            .fail();
        }

        let urls = self.0.iter().map(|m| m.url.clone()).collect();

        let mut addr_bytes = Vec::with_capacity(AccountAddress::LEN * num_members.total());
        for member in &self.0 {
            addr_bytes.extend_from_slice(member.address.as_slice());
        }

        Ok(CommitteeDescriptor {
            required_signatures,
            urls,
            addr_bytes,
        })
    }
}

impl ops::Deref for Committee {
    type Target = [Member];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Committee {
    type Item = &'a Member;

    type IntoIter = <&'a [Member] as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.as_slice().iter()
    }
}

#[cfg(test)]
mod tests;
