use proptest::prelude::*;
use schemagen_ir::mark::{Mark, COMMON};

proptest! {
    #[test]
    fn prop_change_is_idempotent(prefix in "[a-z_]{0,8}", tail in "[a-z_]{1,12}") {
        prop_assume!(!tail.starts_with(COMMON));
        let mut name = format!("{prefix}{tail}");
        let mut mark = Mark::new(prefix.len());

        mark.change(&mut name);
        let once = name.clone();
        prop_assert!(!mark.change(&mut name));

        prop_assert_eq!(&name, &once);
        prop_assert!(name.starts_with(&prefix));
        prop_assert!(name.ends_with(COMMON));
    }

    #[test]
    fn prop_update_follows_ancestor_rename(
        parent in "[a-z]{1,6}",
        segment in "[a-z]{1,10}",
        child in "[a-z]{1,6}",
    ) {
        prop_assume!(!segment.starts_with(COMMON));
        let mut outer = format!("{parent}_{segment}");
        let mut inner = format!("{outer}_{child}");
        let mut parent_mark = Mark::new(parent.len() + 1);
        let mut child_mark = Mark::new(outer.len() + 1);

        parent_mark.change(&mut outer);
        parent_mark.change(&mut inner);
        child_mark.update(&parent_mark);

        prop_assert_eq!(&inner, &format!("{parent}_{COMMON}_{child}"));
        prop_assert_eq!(&inner[child_mark.begin()..], child.as_str());
    }
}
