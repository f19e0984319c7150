//! Property tests for request-building helpers and wire models.

use grafana_client::endpoints::encode_path_segment;
use grafana_client::{Grantee, PermissionItem, PermissionLevel};
use proptest::prelude::*;

proptest! {
    #[test]
    fn encoded_segments_stay_one_segment(raw in "\\PC{0,40}") {
        let encoded = encode_path_segment(&raw);
        prop_assert!(!encoded.contains('/'));
        prop_assert!(!encoded.contains('?'));
        prop_assert!(!encoded.contains('#'));
        prop_assert!(!encoded.contains(' '));
    }

    #[test]
    fn plain_uids_are_not_escaped(uid in "[A-Za-z0-9_-]{1,40}") {
        prop_assert_eq!(encode_path_segment(&uid), uid);
    }

    #[test]
    fn numeric_levels_parse_to_themselves(n in 1u8..=255) {
        let level: PermissionLevel = n.to_string().parse().unwrap();
        prop_assert_eq!(level.value(), n);
    }

    #[test]
    fn permission_items_have_exactly_one_grantee_key(id in 1i64..i64::MAX, level in 1u8..=4) {
        let item = PermissionItem {
            grantee: Grantee::Team(id),
            permission: PermissionLevel(level),
        };
        let value = serde_json::to_value(&item).unwrap();
        let object = value.as_object().unwrap();
        prop_assert_eq!(object.len(), 2);
        prop_assert_eq!(object.get("teamId").and_then(|v| v.as_i64()), Some(id));
        prop_assert!(!object.contains_key("userId"));
        prop_assert!(!object.contains_key("role"));
    }
}
