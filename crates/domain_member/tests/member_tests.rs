//! Member entity tests

use core_kernel::MemberId;
use domain_member::{Member, MemberPatch, NewMember};

fn sample_member() -> Member {
    Member {
        id: MemberId::new_v7(),
        name: "Ann".to_string(),
        email: "a@x.com".to_string(),
        age: 30,
    }
}

#[test]
fn test_patch_applies_only_set_fields() {
    let mut member = sample_member();
    let patch = MemberPatch {
        age: Some(31),
        ..Default::default()
    };

    patch.apply(&mut member);

    assert_eq!(member.age, 31);
    assert_eq!(member.name, "Ann");
    assert_eq!(member.email, "a@x.com");
}

#[test]
fn test_full_patch_replaces_all_fields() {
    let mut member = sample_member();
    let patch = MemberPatch {
        name: Some("Ann2".to_string()),
        email: Some("a2@x.com".to_string()),
        age: Some(31),
    };

    patch.apply(&mut member);

    assert_eq!(member.name, "Ann2");
    assert_eq!(member.email, "a2@x.com");
    assert_eq!(member.age, 31);
}

#[test]
fn test_empty_patch_is_noop() {
    let mut member = sample_member();
    let before = member.clone();
    let patch = MemberPatch::default();

    assert!(patch.is_empty());
    patch.apply(&mut member);
    assert_eq!(member, before);
}

#[test]
fn test_patch_never_touches_the_id() {
    let mut member = sample_member();
    let id = member.id;
    let patch = MemberPatch {
        name: Some("Renamed".to_string()),
        email: Some("r@x.com".to_string()),
        age: Some(99),
    };

    patch.apply(&mut member);
    assert_eq!(member.id, id);
}

#[test]
fn test_new_member_into_member_keeps_fields() {
    let id = MemberId::new_v7();
    let member = NewMember {
        name: "Ann".to_string(),
        email: "a@x.com".to_string(),
        age: 30,
    }
    .into_member(id);

    assert_eq!(member.id, id);
    assert_eq!(member.name, "Ann");
    assert_eq!(member.email, "a@x.com");
    assert_eq!(member.age, 30);
}

#[test]
fn test_member_wire_shape() {
    let member = sample_member();
    let value = serde_json::to_value(&member).unwrap();

    assert_eq!(value["id"], member.id.to_string());
    assert_eq!(value["name"], "Ann");
    assert_eq!(value["email"], "a@x.com");
    assert_eq!(value["age"], 30);
}
