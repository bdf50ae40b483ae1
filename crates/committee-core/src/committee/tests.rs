use assert_matches::assert_matches;
use hex_literal::hex;

use super::{Committee, ValidationError};
use crate::member::{AccountAddress, Member};

fn member(address: [u8; 20], url: &str) -> Member {
    Member::new(AccountAddress::from_bytes(address), url)
}

// The three nodes of the original deployment, in their on-disk
// (unsorted) order. Numerically: node1 < node3 < node2.
fn dac_nodes() -> [Member; 3] {
    [
        member(
            hex!("bDf4375ebbdee3faDe7912C1D188D0E12630849E"),
            "http://dac-node-1.zkevm.svc.cluster.local:8444/",
        ),
        member(
            hex!("fF76e19cD574121eF2D63C59772091d9546BB1ff"),
            "http://dac-node-2.zkevm.svc.cluster.local:8444/",
        ),
        member(
            hex!("F342D69fa0633CB67431cc6F4391f6A645BDcDEE"),
            "http://dac-node-3.zkevm.svc.cluster.local:8444/",
        ),
    ]
}

#[test]
fn orders_members_by_numeric_address() {
    let [node1, node2, node3] = dac_nodes();

    let committee = Committee::new([node3.clone(), node1.clone(), node2.clone()])
        .expect("Unique addresses");

    assert_eq!(committee.as_slice(), &[node1, node3, node2]);
}

#[test]
fn construction_is_permutation_insensitive() {
    let [node1, node2, node3] = dac_nodes();

    let permutations = [
        [node1.clone(), node2.clone(), node3.clone()],
        [node2.clone(), node3.clone(), node1.clone()],
        [node3.clone(), node2.clone(), node1.clone()],
    ];

    let reference = Committee::new(permutations[0].clone()).expect("Unique addresses");
    for permutation in permutations {
        let committee = Committee::new(permutation).expect("Unique addresses");
        assert_eq!(committee, reference);
        assert_eq!(committee.descriptor(), reference.descriptor());
    }
}

#[test]
fn rejects_empty_member_set() {
    assert_matches!(Committee::new([]), Err(ValidationError::Empty));
}

#[test]
fn rejects_oversized_member_set() {
    let members = (0..=u8::MAX as usize).map(|i| {
        let mut address = [0u8; 20];
        address[18..].copy_from_slice(&(i as u16).to_be_bytes());
        member(address, "http://dac-node.example/")
    });

    assert_matches!(
        Committee::new(members),
        Err(ValidationError::TooManyMembers { num_members: 256 })
    );
}

#[test]
fn rejects_duplicate_address() {
    let [node1, node2, _] = dac_nodes();
    let dup = Member::new(node1.address, "http://somewhere-else.example/");

    assert_matches!(
        Committee::new([node1.clone(), node2, dup]),
        Err(ValidationError::DuplicateAddress { address }) if address == node1.address
    );
}
